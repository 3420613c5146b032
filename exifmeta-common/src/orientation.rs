crate::utils::convertible_enum!(
    #[repr(u16)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Operations that have to be applied to orient the image correctly
    pub enum Orientation {
        Id = 1,
        Mirrored = 2,
        Rotation180 = 3,
        MirroredRotation180 = 4,
        MirroredRotation90 = 5,
        Rotation270 = 6,
        MirroredRotation270 = 7,
        Rotation90 = 8,
    }
);

impl Orientation {
    pub fn new(rotation: Rotation, mirrored: bool) -> Self {
        match (mirrored, rotation) {
            (false, Rotation::_0) => Self::Id,
            (false, Rotation::_90) => Self::Rotation90,
            (false, Rotation::_180) => Self::Rotation180,
            (false, Rotation::_270) => Self::Rotation270,
            (true, Rotation::_0) => Self::Mirrored,
            (true, Rotation::_90) => Self::MirroredRotation90,
            (true, Rotation::_180) => Self::MirroredRotation180,
            (true, Rotation::_270) => Self::MirroredRotation270,
        }
    }

    pub fn mirror(self) -> bool {
        matches!(
            self,
            Self::Mirrored
                | Self::MirroredRotation90
                | Self::MirroredRotation180
                | Self::MirroredRotation270
        )
    }

    /// Rotation, `None` for values outside of the standard
    ///
    /// ```
    /// # use exifmeta_common::orientation::*;
    /// assert_eq!(Orientation::from(6).rotate(), Some(Rotation::_270));
    /// assert_eq!(Orientation::from(9).rotate(), None);
    /// ```
    pub fn rotate(self) -> Option<Rotation> {
        match self {
            Self::Id | Self::Mirrored => Some(Rotation::_0),
            Self::Rotation90 | Self::MirroredRotation90 => Some(Rotation::_90),
            Self::Rotation180 | Self::MirroredRotation180 => Some(Rotation::_180),
            Self::Rotation270 | Self::MirroredRotation270 => Some(Rotation::_270),
            Self::Unknown(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    _0,
    _90,
    _180,
    _270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::_0 => 0,
            Rotation::_90 => 90,
            Rotation::_180 => 180,
            Rotation::_270 => 270,
        }
    }
}
