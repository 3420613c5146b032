use crate::error::{Error, Result};

exifmeta_common::utils::convertible_enum!(
    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Element type of a directory entry
    pub enum WireType {
        Byte = 1,
        Ascii = 2,
        Short = 3,
        Long = 4,
        Rational = 5,
        SByte = 6,
        Undefined = 7,
        SShort = 8,
        SLong = 9,
        SRational = 10,
        Float = 11,
        Double = 12,
    }
);

impl WireType {
    /// Size of one element in bytes
    ///
    /// Fails for unknown types since their size can't be guessed.
    pub fn size(self) -> Result<u32> {
        match self {
            Self::Byte | Self::Ascii | Self::SByte | Self::Undefined => Ok(1),
            Self::Short | Self::SShort => Ok(2),
            Self::Long | Self::SLong | Self::Float => Ok(4),
            Self::Rational | Self::SRational | Self::Double => Ok(8),
            Self::Unknown(x) => Err(Error::UnknownWireType(x)),
        }
    }

    /// Size of the numbers that have to be byte swapped
    ///
    /// Rationals consist of two 4 byte numbers that are swapped individually.
    pub fn swap_size(self) -> Result<usize> {
        Ok(match self {
            Self::Rational | Self::SRational => 4,
            Self::Byte | Self::Ascii | Self::SByte | Self::Undefined => 1,
            Self::Short | Self::SShort => 2,
            Self::Long | Self::SLong | Self::Float => 4,
            Self::Double => 8,
            Self::Unknown(x) => return Err(Error::UnknownWireType(x)),
        })
    }

    pub fn u16(self) -> u16 {
        self.into()
    }
}
