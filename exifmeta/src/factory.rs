//! Selects the value type of a field
//!
//! The wire type alone does not tell what a field means. Tags with a known
//! meaning are looked up in a table of decoders. All other fields are decoded
//! by their wire type.

use std::collections::HashMap;
use std::sync::LazyLock;

use encoding_rs::Encoding;
use exifmeta_common::exif::{Field, Ifd, Tag, TagId};
use exifmeta_common::field;

use crate::error::{Error, Result};
use crate::internal::{ByteOrder, WireType};
use crate::property::*;

type Decoder = fn(&RawField) -> Result<Value>;

macro_rules! overrides {
    ($($field:ident => $decoder:expr),*$(,)?) => {
        HashMap::from([
            $((<field::$field as Field>::ID, $decoder as Decoder),)*
        ])
    };
}

static OVERRIDES: LazyLock<HashMap<TagId, Decoder>> = LazyLock::new(|| {
    overrides! {
        // Primary
        Compression => short_enum::<Compression>,
        PhotometricInterpretation => short_enum::<PhotometricInterpretation>,
        Orientation => short_enum::<Orientation>,
        PlanarConfiguration => short_enum::<PlanarConfiguration>,
        YCbCrPositioning => short_enum::<YCbCrPositioning>,
        ResolutionUnit => short_enum::<ResolutionUnit>,
        DateTime => date_time,
        XPTitle => windows_string,
        XPComment => windows_string,
        XPAuthor => windows_string,
        XPKeywords => windows_string,
        XPSubject => windows_string,

        // Exif
        ExifVersion => version,
        FlashpixVersion => version,
        ColorSpace => short_enum::<ColorSpace>,
        UserComment => encoded_text,
        DateTimeOriginal => date_time,
        DateTimeDigitized => date_time,
        ExposureProgram => short_enum::<ExposureProgram>,
        MeteringMode => short_enum::<MeteringMode>,
        LightSource => short_enum::<LightSource>,
        Flash => short_enum::<Flash>,
        SubjectArea => subject_area,
        SubjectLocation => subject_location,
        FocalPlaneResolutionUnit => short_enum::<ResolutionUnit>,
        SensingMethod => short_enum::<SensingMethod>,
        FileSource => byte_enum::<FileSource>,
        SceneType => byte_enum::<SceneType>,
        CustomRendered => short_enum::<CustomRendered>,
        ExposureMode => short_enum::<ExposureMode>,
        WhiteBalance => short_enum::<WhiteBalance>,
        SceneCaptureType => short_enum::<SceneCaptureType>,
        GainControl => short_enum::<GainControl>,
        Contrast => short_enum::<Contrast>,
        Saturation => short_enum::<Saturation>,
        Sharpness => short_enum::<Sharpness>,
        SubjectDistanceRange => short_enum::<SubjectDistanceRange>,
        LensSpecification => lens_specification,

        // GPS
        GPSVersionID => version_digits,
        GPSLatitudeRef => byte_enum::<GpsLatitudeRef>,
        GPSLatitude => gps_coordinate,
        GPSLongitudeRef => byte_enum::<GpsLongitudeRef>,
        GPSLongitude => gps_coordinate,
        GPSAltitudeRef => byte_enum::<GpsAltitudeRef>,
        GPSTimeStamp => gps_time_stamp,
        GPSStatus => byte_enum::<GpsStatus>,
        GPSMeasureMode => byte_enum::<GpsMeasureMode>,
        GPSSpeedRef => byte_enum::<GpsSpeedRef>,
        GPSTrackRef => byte_enum::<GpsDirectionRef>,
        GPSImgDirectionRef => byte_enum::<GpsDirectionRef>,
        GPSDestLatitudeRef => byte_enum::<GpsLatitudeRef>,
        GPSDestLatitude => gps_coordinate,
        GPSDestLongitudeRef => byte_enum::<GpsLongitudeRef>,
        GPSDestLongitude => gps_coordinate,
        GPSDestBearingRef => byte_enum::<GpsDirectionRef>,
        GPSDestDistanceRef => byte_enum::<GpsDistanceRef>,
        GPSProcessingMethod => encoded_text,
        GPSAreaInformation => encoded_text,
        GPSDateStamp => date,
        GPSDifferential => short_enum::<GpsDifferential>,

        // Interoperability
        InteroperabilityIndex => ascii,
        InteroperabilityVersion => version,

        // Thumbnail
        ThumbnailCompression => short_enum::<Compression>,
        ThumbnailPhotometricInterpretation => short_enum::<PhotometricInterpretation>,
        ThumbnailOrientation => short_enum::<Orientation>,
        ThumbnailPlanarConfiguration => short_enum::<PlanarConfiguration>,
        ThumbnailYCbCrPositioning => short_enum::<YCbCrPositioning>,
        ThumbnailResolutionUnit => short_enum::<ResolutionUnit>,
        ThumbnailDateTime => date_time,
    }
});

/// Creates the property for a field
///
/// `data` has to be in `byte_order`. The `encoding` is used for `ASCII` fields
/// that are not restricted to ASCII in practice.
///
/// ```
/// # use exifmeta::factory::dispatch;
/// # use exifmeta::internal::*;
/// # use exifmeta::property::*;
/// let property = dispatch(
///     Ifd::Primary,
///     Tag(0x112),
///     WireType::Short,
///     1,
///     &[0, 6],
///     ByteOrder::BigEndian,
///     encoding_rs::UTF_8,
/// )
/// .unwrap();
/// assert_eq!(property.value, Value::Enum(Orientation::Rotation270.into()));
/// ```
pub fn dispatch(
    ifd: Ifd,
    tag: Tag,
    wire_type: WireType,
    count: u32,
    data: &[u8],
    byte_order: ByteOrder,
    encoding: &'static Encoding,
) -> Result<Property> {
    decode_field(&RawField {
        tag: TagId::new(ifd, tag),
        wire_type,
        count,
        data,
        byte_order,
        encoding,
    })
}

pub fn decode_field(raw: &RawField) -> Result<Property> {
    let value = match OVERRIDES.get(&raw.tag) {
        Some(decoder) => {
            raw.validate()?;
            decoder(raw)?
        }
        None => decode_by_wire_type(raw)?,
    };

    Ok(Property::new(raw.tag, value))
}

/// Whether the tag has a dedicated value type
pub fn has_override(tag: TagId) -> bool {
    OVERRIDES.contains_key(&tag)
}

fn decode_by_wire_type(raw: &RawField) -> Result<Value> {
    if let WireType::Unknown(_) = raw.wire_type {
        return Err(unknown_property_type(raw));
    }
    raw.validate()?;

    Ok(match raw.wire_type {
        WireType::Byte => one_or_many(raw.bytes().to_vec(), Value::Byte, Value::Bytes),
        WireType::Ascii => Value::Ascii(Text::decode(raw)?),
        WireType::Short => one_or_many(raw.u16s()?, Value::Short, Value::Shorts),
        WireType::Long => one_or_many(raw.u32s()?, Value::Long, Value::Longs),
        WireType::Rational => one_or_many(raw.urationals()?, Value::Rational, Value::Rationals),
        WireType::SByte => one_or_many(raw.i8s()?, Value::SByte, Value::SBytes),
        WireType::Undefined => Value::Undefined(raw.bytes().to_vec()),
        WireType::SShort => one_or_many(raw.i16s()?, Value::SShort, Value::SShorts),
        WireType::SLong => one_or_many(raw.i32s()?, Value::SLong, Value::SLongs),
        WireType::SRational => {
            one_or_many(raw.srationals()?, Value::SRational, Value::SRationals)
        }
        WireType::Float => one_or_many(raw.f32s()?, Value::Float, Value::Floats),
        WireType::Double => one_or_many(raw.f64s()?, Value::Double, Value::Doubles),
        WireType::Unknown(_) => return Err(unknown_property_type(raw)),
    })
}

fn unknown_property_type(raw: &RawField) -> Error {
    Error::UnknownPropertyType {
        tag: raw.tag,
        wire_type: raw.wire_type,
    }
}

fn one_or_many<T: Copy>(values: Vec<T>, one: fn(T) -> Value, many: fn(Vec<T>) -> Value) -> Value {
    match values.as_slice() {
        [value] => one(*value),
        _ => many(values),
    }
}

/// First element of an enumeration field
fn enum_code(raw: &RawField) -> Result<u32> {
    let code = match raw.wire_type {
        WireType::Byte | WireType::Undefined | WireType::Ascii => {
            raw.bytes().first().copied().map(u32::from)
        }
        WireType::Short => raw.u16s()?.first().copied().map(u32::from),
        WireType::Long => raw.u32s()?.first().copied(),
        _ => return Err(raw.unexpected_type()),
    };

    code.ok_or_else(|| raw.invalid_count())
}

fn short_enum<T: From<u16> + Into<EnumValue>>(raw: &RawField) -> Result<Value> {
    let code = enum_code(raw)?;
    let code = u16::try_from(code).map_err(|_| Error::EnumOutOfRange {
        tag: raw.tag,
        value: code,
    })?;

    Ok(Value::Enum(T::from(code).into()))
}

fn byte_enum<T: From<u8> + Into<EnumValue>>(raw: &RawField) -> Result<Value> {
    let code = enum_code(raw)?;
    let code = u8::try_from(code).map_err(|_| Error::EnumOutOfRange {
        tag: raw.tag,
        value: code,
    })?;

    Ok(Value::Enum(T::from(code).into()))
}

fn ascii(raw: &RawField) -> Result<Value> {
    raw.expect_type(&[WireType::Ascii])?;
    Ok(Value::Ascii(Text::decode(raw)?))
}

/// Placeholders like `0000:00:00` are kept as text
fn date(raw: &RawField) -> Result<Value> {
    match decode_date(raw) {
        Ok(date) => Ok(Value::Date(date)),
        Err(Error::InvalidDate(_)) => ascii(raw),
        Err(err) => Err(err),
    }
}

fn date_time(raw: &RawField) -> Result<Value> {
    match decode_date_time(raw) {
        Ok(date_time) => Ok(Value::DateTime(date_time)),
        Err(Error::InvalidDate(_)) => ascii(raw),
        Err(err) => Err(err),
    }
}

fn version(raw: &RawField) -> Result<Value> {
    Ok(Value::Version(Version::decode_ascii(raw)?))
}

fn version_digits(raw: &RawField) -> Result<Value> {
    Ok(Value::Version(Version::decode_digits(raw)?))
}

fn encoded_text(raw: &RawField) -> Result<Value> {
    raw.expect_type(&[WireType::Undefined, WireType::Ascii, WireType::Byte])?;
    Ok(Value::EncodedText(EncodedText::from_bytes(raw.bytes())))
}

fn windows_string(raw: &RawField) -> Result<Value> {
    raw.expect_type(&[WireType::Byte, WireType::Undefined])?;
    Ok(Value::WindowsString(decode_windows_string(raw.bytes())))
}

fn gps_coordinate(raw: &RawField) -> Result<Value> {
    Ok(Value::GpsCoordinate(GpsCoordinate::decode(raw)?))
}

fn gps_time_stamp(raw: &RawField) -> Result<Value> {
    Ok(Value::GpsTimeStamp(GpsTimeStamp::decode(raw)?))
}

fn subject_area(raw: &RawField) -> Result<Value> {
    Ok(Value::SubjectArea(SubjectArea::decode(raw)?))
}

fn subject_location(raw: &RawField) -> Result<Value> {
    Ok(Value::SubjectArea(SubjectArea::decode_point(raw)?))
}

fn lens_specification(raw: &RawField) -> Result<Value> {
    Ok(Value::LensSpecification(LensSpecification::decode(raw)?))
}
