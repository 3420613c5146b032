//! Tag identities
//!
//! A tag number alone is ambiguous since the same number has different
//! meanings in different IFDs. [`TagId`] combines both and maps them to a flat
//! integer space with one band of [`BAND_WIDTH`] per IFD.
//!
//! ```
//! # use exifmeta_common::exif::*;
//! let id = TagId::new(Ifd::Thumbnail, Tag(0x103));
//! assert_eq!(id.raw(), 500_259);
//! assert_eq!(id.name(), "ThumbnailCompression");
//! assert_eq!(TagId::from_raw(500_259).unwrap(), id);
//! ```

/// Width of the identifier band of one IFD
pub const BAND_WIDTH: u32 = 100_000;

/// Fallback name for tags that are not registered
pub const UNKNOWN_TAG_NAME: &str = "Unknown";

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagId {
    pub ifd: Ifd,
    pub tag: Tag,
}

impl TagId {
    pub const fn new(ifd: Ifd, tag: Tag) -> Self {
        Self { ifd, tag }
    }

    /// Flat identifier
    ///
    /// The IFD band plus the tag number.
    pub const fn raw(self) -> u32 {
        // Bands are at most 500_000, tag numbers at most u16::MAX
        self.ifd.band().saturating_add(self.tag.0 as u32)
    }

    /// Validates and splits a flat identifier
    ///
    /// ```
    /// # use exifmeta_common::exif::*;
    /// assert!(TagId::from_raw(42).is_err());
    /// assert!(TagId::from_raw(600_000).is_err());
    /// assert!(TagId::from_raw(199_999).is_err());
    /// assert_eq!(
    ///     TagId::from_raw(300_002).unwrap(),
    ///     TagId::new(Ifd::Gps, Tag(2))
    /// );
    /// ```
    pub fn from_raw(raw: u32) -> Result<Self, InvalidTagId> {
        let band = raw
            .checked_div(BAND_WIDTH)
            .and_then(|x| x.checked_mul(BAND_WIDTH))
            .ok_or(InvalidTagId(raw))?;
        let ifd = Ifd::from_band(band).ok_or(InvalidTagId(raw))?;
        let tag = raw
            .checked_sub(band)
            .and_then(|x| u16::try_from(x).ok())
            .ok_or(InvalidTagId(raw))?;

        Ok(Self::new(ifd, Tag(tag)))
    }

    /// Registered name or [`UNKNOWN_TAG_NAME`]
    pub fn name(self) -> &'static str {
        lookup_tag_name(self).unwrap_or(UNKNOWN_TAG_NAME)
    }

    /// Name in the form `<ifd>: <name> (<tag number>)`
    ///
    /// ```
    /// # use exifmeta_common::exif::*;
    /// let id = TagId::new(Ifd::Primary, Tag(0x112));
    /// assert_eq!(id.long_name(), "Primary: Orientation (274)");
    /// let id = TagId::new(Ifd::Gps, Tag(0xFFFF));
    /// assert_eq!(id.long_name(), "Gps: Unknown (65535)");
    /// ```
    pub fn long_name(self) -> String {
        format!("{}: {} ({})", self.ifd.name(), self.name(), self.tag.0)
    }
}

impl<T: Field> From<T> for TagId {
    fn from(_value: T) -> Self {
        T::ID
    }
}

impl TryFrom<u32> for TagId {
    type Error = InvalidTagId;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_raw(value)
    }
}

impl From<TagId> for u32 {
    fn from(value: TagId) -> Self {
        value.raw()
    }
}

impl std::fmt::Display for TagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Value {0} is not a valid flat tag identifier")]
pub struct InvalidTagId(pub u32);

pub trait Field {
    const NAME: &'static str;
    const TAG: Tag;
    const IFD: Ifd;
    const ID: TagId = TagId::new(Self::IFD, Self::TAG);
}

pub fn lookup_tag_name(id: TagId) -> Option<&'static str> {
    crate::field::TAG_NAMES.get(&id).copied()
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag(pub u16);

impl Tag {
    pub const EXIF_IFD_POINTER: Self = Self(0x8769);
    pub const GPS_INFO_IFD_POINTER: Self = Self(0x8825);
    pub const INTEROPERABILITY_IFD_POINTER: Self = Self(0xA005);

    pub const JPEG_INTERCHANGE_FORMAT: Self = Self(0x201);
    pub const JPEG_INTERCHANGE_FORMAT_LENGTH: Self = Self(0x202);

    /// See 4.6.3 in v3.0 standard
    pub fn exif_specific_ifd(&self) -> Option<Ifd> {
        match *self {
            Self::EXIF_IFD_POINTER => Some(Ifd::Exif),
            Self::GPS_INFO_IFD_POINTER => Some(Ifd::Gps),
            Self::INTEROPERABILITY_IFD_POINTER => Some(Ifd::Interoperability),
            _ => None,
        }
    }

    pub fn is_exif_specific_ifd(&self) -> bool {
        self.exif_specific_ifd().is_some()
    }
}

/// Image file directory
///
/// The variant order matches the order of the identifier bands.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ifd {
    /// IFD0
    Primary,
    Exif,
    Gps,
    Interoperability,
    /// IFD1
    Thumbnail,
}

impl Ifd {
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Exif,
        Self::Gps,
        Self::Interoperability,
        Self::Thumbnail,
    ];

    /// First identifier of the IFD's band
    pub const fn band(self) -> u32 {
        match self {
            Self::Primary => 100_000,
            Self::Exif => 200_000,
            Self::Gps => 300_000,
            Self::Interoperability => 400_000,
            Self::Thumbnail => 500_000,
        }
    }

    pub fn from_band(band: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|ifd| ifd.band() == band)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Exif => "Exif",
            Self::Gps => "Gps",
            Self::Interoperability => "Interoperability",
            Self::Thumbnail => "Thumbnail",
        }
    }
}
