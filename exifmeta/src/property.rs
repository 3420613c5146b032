//! Typed property values
//!
//! Every [`Value`] can be created from the raw bytes of a field and turned
//! back into a [`Wire`] representation. Wire payloads are always in host byte
//! order, the conversion to the file's byte order happens in
//! [`Entry::encode`].

mod enums;
mod gps;
mod raw;
mod shape;
mod text;
mod thumbnail;

use chrono::{NaiveDate, NaiveDateTime};
use exifmeta_common::byte_order::Endian;
use exifmeta_common::exif::TagId;
use exifmeta_common::math::*;
use exifmeta_common::rational::{SRational, URational};

pub use enums::*;
pub use gps::*;
pub use raw::RawField;
pub use shape::*;
pub use text::{Charset, EncodedText, Text, Version, DATE_FORMAT, DATE_TIME_FORMAT};
pub use thumbnail::*;

pub(crate) use text::{decode_date, decode_date_time, decode_windows_string};

use crate::error::Result;
use crate::internal::{Entry, WireType};

/// Single tagged value
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub tag: TagId,
    pub value: Value,
}

impl Property {
    /// ```
    /// # use exifmeta::property::*;
    /// # use exifmeta_common::field;
    /// let property = Property::new(field::Orientation, Orientation::Rotation90.into());
    /// assert_eq!(property.tag.raw(), 100_274);
    /// ```
    pub fn new(tag: impl Into<TagId>, value: Value) -> Self {
        Self {
            tag: tag.into(),
            value,
        }
    }

    /// Picks the value type for the field and decodes it
    pub fn decode(raw: &RawField) -> Result<Self> {
        crate::factory::decode_field(raw)
    }

    pub fn to_wire(&self) -> Result<Wire> {
        self.value.to_wire()
    }

    /// Directory entry with the value in host byte order
    pub fn to_entry(&self) -> Result<Entry> {
        let wire = self.to_wire()?;
        Entry::new(self.tag.tag, wire.wire_type, wire.count, wire.payload)
    }

    pub fn name(&self) -> &'static str {
        self.tag.name()
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.tag.name(), self.value)
    }
}

/// Serialized value in host byte order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wire {
    pub wire_type: WireType,
    /// Number of elements of `wire_type`
    pub count: u32,
    pub payload: Vec<u8>,
}

impl Wire {
    /// Count is derived from the payload length
    pub fn new(wire_type: WireType, payload: Vec<u8>) -> Result<Self> {
        let count = payload.len().u32()?.safe_div(wire_type.size()?)?;
        Ok(Self {
            wire_type,
            count,
            payload,
        })
    }

    pub fn from_values<T: Endian>(wire_type: WireType, values: &[T]) -> Result<Self> {
        Ok(Self {
            wire_type,
            count: values.len().u32()?,
            payload: values.iter().flat_map(|x| x.to_ne_vec()).collect(),
        })
    }

    pub fn rationals(values: &[URational]) -> Result<Self> {
        Ok(Self {
            wire_type: WireType::Rational,
            count: values.len().u32()?,
            payload: values
                .iter()
                .flat_map(|x| [x.numerator.to_ne_bytes(), x.denominator.to_ne_bytes()])
                .flatten()
                .collect(),
        })
    }

    pub fn srationals(values: &[SRational]) -> Result<Self> {
        Ok(Self {
            wire_type: WireType::SRational,
            count: values.len().u32()?,
            payload: values
                .iter()
                .flat_map(|x| [x.numerator.to_ne_bytes(), x.denominator.to_ne_bytes()])
                .flatten()
                .collect(),
        })
    }
}

/// Value of a property
///
/// Fields without special meaning use the variant of their wire type. A count
/// of one gives the scalar variant, any other count the array variant.
/// `ASCII` and `UNDEFINED` fields only have one form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Byte(u8),
    Bytes(Vec<u8>),
    Ascii(Text),
    Short(u16),
    Shorts(Vec<u16>),
    Long(u32),
    Longs(Vec<u32>),
    Rational(URational),
    Rationals(Vec<URational>),
    SByte(i8),
    SBytes(Vec<i8>),
    Undefined(Vec<u8>),
    SShort(i16),
    SShorts(Vec<i16>),
    SLong(i32),
    SLongs(Vec<i32>),
    SRational(SRational),
    SRationals(Vec<SRational>),
    Float(f32),
    Floats(Vec<f32>),
    Double(f64),
    Doubles(Vec<f64>),

    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Version(Version),
    Enum(EnumValue),
    EncodedText(EncodedText),
    GpsCoordinate(GpsCoordinate),
    GpsTimeStamp(GpsTimeStamp),
    SubjectArea(SubjectArea),
    LensSpecification(LensSpecification),
    /// UTF-16 text of the Windows XP tags
    WindowsString(String),
    Thumbnail(Thumbnail),
}

impl Value {
    pub fn to_wire(&self) -> Result<Wire> {
        match self {
            Self::Byte(v) => Wire::from_values(WireType::Byte, &[*v]),
            Self::Bytes(v) => Wire::from_values(WireType::Byte, v),
            Self::Ascii(v) => v.to_wire(),
            Self::Short(v) => Wire::from_values(WireType::Short, &[*v]),
            Self::Shorts(v) => Wire::from_values(WireType::Short, v),
            Self::Long(v) => Wire::from_values(WireType::Long, &[*v]),
            Self::Longs(v) => Wire::from_values(WireType::Long, v),
            Self::Rational(v) => Wire::rationals(&[*v]),
            Self::Rationals(v) => Wire::rationals(v),
            Self::SByte(v) => Wire::from_values(WireType::SByte, &[*v]),
            Self::SBytes(v) => Wire::from_values(WireType::SByte, v),
            Self::Undefined(v) => Wire::from_values(WireType::Undefined, v),
            Self::SShort(v) => Wire::from_values(WireType::SShort, &[*v]),
            Self::SShorts(v) => Wire::from_values(WireType::SShort, v),
            Self::SLong(v) => Wire::from_values(WireType::SLong, &[*v]),
            Self::SLongs(v) => Wire::from_values(WireType::SLong, v),
            Self::SRational(v) => Wire::srationals(&[*v]),
            Self::SRationals(v) => Wire::srationals(v),
            Self::Float(v) => Wire::from_values(WireType::Float, &[*v]),
            Self::Floats(v) => Wire::from_values(WireType::Float, v),
            Self::Double(v) => Wire::from_values(WireType::Double, &[*v]),
            Self::Doubles(v) => Wire::from_values(WireType::Double, v),

            Self::Date(v) => text::date_to_wire(v),
            Self::DateTime(v) => text::date_time_to_wire(v),
            Self::Version(v) => v.to_wire(),
            Self::Enum(v) => enum_to_wire(*v),
            Self::EncodedText(v) => Wire::new(WireType::Undefined, v.to_bytes()),
            Self::GpsCoordinate(v) => v.to_wire(),
            Self::GpsTimeStamp(v) => v.to_wire(),
            Self::SubjectArea(v) => v.to_wire(),
            Self::LensSpecification(v) => v.to_wire(),
            Self::WindowsString(v) => Wire::new(WireType::Byte, text::encode_windows_string(v)),
            Self::Thumbnail(v) => v.to_wire(),
        }
    }

    /// Unsigned integers and enumeration codes
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Byte(v) => Some(u32::from(*v)),
            Self::Short(v) => Some(u32::from(*v)),
            Self::Long(v) => Some(*v),
            Self::Enum(v) => Some(u32::from(v.code())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Ascii(v) => Some(&v.text),
            Self::EncodedText(v) => Some(&v.text),
            Self::WindowsString(v) => Some(v),
            Self::Version(Version::Ascii(v)) => Some(v),
            _ => None,
        }
    }

    pub fn as_rational(&self) -> Option<URational> {
        match self {
            Self::Rational(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<EnumValue> {
        match self {
            Self::Enum(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<EnumValue> for Value {
    fn from(value: EnumValue) -> Self {
        Self::Enum(value)
    }
}

impl From<Orientation> for Value {
    fn from(value: Orientation) -> Self {
        Self::Enum(value.into())
    }
}

fn enum_to_wire(value: EnumValue) -> Result<Wire> {
    let code = value.code();
    match value.layout() {
        EnumLayout::Short => Wire::from_values(WireType::Short, &[code]),
        EnumLayout::Byte => Wire::new(WireType::Byte, vec![code.u8()?]),
        EnumLayout::Undefined => Wire::new(WireType::Undefined, vec![code.u8()?]),
        EnumLayout::Ascii => Wire::new(WireType::Ascii, vec![code.u8()?, 0]),
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Byte(v) => write!(f, "{v}"),
            Self::Bytes(v) | Self::Undefined(v) => write!(f, "{}", hex_preview(v)),
            Self::Ascii(v) => write!(f, "{:?}", v.text),
            Self::Short(v) => write!(f, "{v}"),
            Self::Shorts(v) => write!(f, "{}", join(v)),
            Self::Long(v) => write!(f, "{v}"),
            Self::Longs(v) => write!(f, "{}", join(v)),
            Self::Rational(v) => write!(f, "{v}"),
            Self::Rationals(v) => write!(f, "{}", join(v)),
            Self::SByte(v) => write!(f, "{v}"),
            Self::SBytes(v) => write!(f, "{}", join(v)),
            Self::SShort(v) => write!(f, "{v}"),
            Self::SShorts(v) => write!(f, "{}", join(v)),
            Self::SLong(v) => write!(f, "{v}"),
            Self::SLongs(v) => write!(f, "{}", join(v)),
            Self::SRational(v) => write!(f, "{v}"),
            Self::SRationals(v) => write!(f, "{}", join(v)),
            Self::Float(v) => write!(f, "{v}"),
            Self::Floats(v) => write!(f, "{}", join(v)),
            Self::Double(v) => write!(f, "{v}"),
            Self::Doubles(v) => write!(f, "{}", join(v)),
            Self::Date(v) => write!(f, "{}", v.format(DATE_FORMAT)),
            Self::DateTime(v) => write!(f, "{}", v.format(DATE_TIME_FORMAT)),
            Self::Version(v) => write!(f, "{v}"),
            Self::Enum(v) => write!(f, "{v} ({})", v.code()),
            Self::EncodedText(v) => write!(f, "{:?} ({:?})", v.text, v.charset),
            Self::GpsCoordinate(v) => {
                write!(f, "{} {} {}", v.degrees, v.minutes, v.seconds)
            }
            Self::GpsTimeStamp(v) => write!(f, "{} {} {}", v.hours, v.minutes, v.seconds),
            Self::SubjectArea(v) => write!(f, "{v:?}"),
            Self::LensSpecification(v) => write!(
                f,
                "{}-{} mm f/{}-{}",
                v.min_focal_length, v.max_focal_length, v.min_f_number, v.max_f_number
            ),
            Self::WindowsString(v) => write!(f, "{v:?}"),
            Self::Thumbnail(v) => write!(f, "{:?} thumbnail, {} bytes", v.kind, v.data.len()),
        }
    }
}

fn join<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn hex_preview(bytes: &[u8]) -> String {
    let mut preview = bytes
        .iter()
        .take(16)
        .map(|x| format!("{x:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    if bytes.len() > 16 {
        preview.push_str(&format!(" ... ({} bytes)", bytes.len()));
    }
    preview
}
