mod utils;
use chrono::{NaiveDate, NaiveDateTime};
use exifmeta::Error;
use exifmeta_common::field;
use exifmeta_common::rational::{SRational, URational};
use utils::*;

fn shorts(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|x| x.to_ne_bytes()).collect()
}

fn rationals(values: &[(u32, u32)]) -> Vec<u8> {
    values
        .iter()
        .flat_map(|(n, d)| [n.to_ne_bytes(), d.to_ne_bytes()])
        .flatten()
        .collect()
}

#[test]
fn subject_area_shapes() {
    let point = decode(Ifd::Exif, 0x9214, WireType::Short, 2, &shorts(&[1, 2])).unwrap();
    assert_eq!(
        point.value,
        Value::SubjectArea(SubjectArea::Point { x: 1, y: 2 })
    );

    let circle = decode(Ifd::Exif, 0x9214, WireType::Short, 3, &shorts(&[1, 2, 3])).unwrap();
    assert_eq!(
        circle.value,
        Value::SubjectArea(SubjectArea::Circle {
            x: 1,
            y: 2,
            diameter: 3
        })
    );

    let rectangle = decode(
        Ifd::Exif,
        0x9214,
        WireType::Short,
        4,
        &shorts(&[1, 2, 3, 4]),
    )
    .unwrap();
    assert_eq!(
        rectangle.value,
        Value::SubjectArea(SubjectArea::Rectangle {
            x: 1,
            y: 2,
            width: 3,
            height: 4
        })
    );

    for property in [point, circle, rectangle] {
        assert_round_trip(&property);
    }

    for count in [0, 1, 5] {
        let data = shorts(&vec![7; count]);
        let err = decode(Ifd::Exif, 0x9214, WireType::Short, count as u32, &data).unwrap_err();
        assert!(matches!(err, Error::InvalidCount { .. }), "{err:?}");
    }
}

#[test]
fn subject_location_is_point() {
    let property = decode(Ifd::Exif, 0xA214, WireType::Short, 2, &shorts(&[5, 6])).unwrap();
    assert_eq!(
        property.value,
        Value::SubjectArea(SubjectArea::Point { x: 5, y: 6 })
    );

    let err = decode(Ifd::Exif, 0xA214, WireType::Short, 3, &shorts(&[5, 6, 7])).unwrap_err();
    assert!(matches!(err, Error::InvalidCount { count: 3, .. }));
}

#[test]
fn user_comment_charset() {
    let data = b"ASCII\0\0\0Hello\0";
    let property = decode(Ifd::Exif, 0x9286, WireType::Undefined, 14, data).unwrap();
    assert_eq!(
        property.value,
        Value::EncodedText(EncodedText::new(Charset::Ascii, "Hello"))
    );

    let property = decode(Ifd::Exif, 0x9286, WireType::Undefined, 2, b"Hi").unwrap();
    let Value::EncodedText(text) = &property.value else {
        panic!("Not encoded text: {:?}", property.value);
    };
    assert_eq!(text.text, "Hi");
    assert_eq!(text.charset, Charset::Undefined);
    assert_round_trip(&property);

    let mut data = b"unicode\0".to_vec();
    data.extend("Grüße".encode_utf16().flat_map(u16::to_le_bytes));
    let property = decode(
        Ifd::Exif,
        0x9286,
        WireType::Undefined,
        data.len() as u32,
        &data,
    )
    .unwrap();
    assert_eq!(
        property.value,
        Value::EncodedText(EncodedText::new(Charset::Unicode, "Grüße"))
    );

    // Header is written in its canonical form
    let wire = property.to_wire().unwrap();
    assert_eq!(&wire.payload[..8], b"Unicode\0");
    assert_eq!(wire.wire_type, WireType::Undefined);
}

#[test]
fn user_comment_jis() {
    let mut data = b"JIS\0\0\0\0\0".to_vec();
    data.extend(encoding_rs::EUC_JP.encode("日本").0.iter());

    let property = decode(
        Ifd::Exif,
        0x9286,
        WireType::Undefined,
        data.len() as u32,
        &data,
    )
    .unwrap();
    assert_eq!(
        property.value,
        Value::EncodedText(EncodedText::new(Charset::Jis, "日本"))
    );
    assert_eq!(property.to_wire().unwrap().payload, data);
}

#[test]
fn undefined_charset_header() {
    let text = EncodedText::new(Charset::Undefined, "abc");
    assert_eq!(text.to_bytes(), b"\0\0\0\0\0\0\0\0abc");
    assert_eq!(EncodedText::from_bytes(&text.to_bytes()), text);

    // The NULL header is not part of the text
    assert_eq!(Charset::from_header(&[0; 8]), Some(Charset::Undefined));
    assert_eq!(Charset::from_header(b"Unknown\0"), None);
}

#[test]
fn enum_file_source() {
    let property = Property::new(field::FileSource, Value::Enum(FileSource::Dsc.into()));
    let wire = property.to_wire().unwrap();

    assert_eq!(wire.wire_type, WireType::Undefined);
    assert_eq!(wire.count, 1);
    assert_eq!(wire.payload, vec![3]);

    assert_round_trip(&property);
    assert_round_trip(&Property::new(
        field::SceneType,
        Value::Enum(SceneType::DirectlyPhotographed.into()),
    ));
}

#[test]
fn enum_gps_reference() {
    let north = Property::new(
        field::GPSLatitudeRef,
        Value::Enum(GpsLatitudeRef::North.into()),
    );
    let wire = north.to_wire().unwrap();
    assert_eq!(wire.wire_type, WireType::Ascii);
    assert_eq!(wire.count, 2);
    assert_eq!(wire.payload, b"N\0");

    let south = Property::new(
        field::GPSLatitudeRef,
        Value::Enum(GpsLatitudeRef::South.into()),
    );
    assert_eq!(south.to_wire().unwrap().payload, b"S\0");

    let decoded = decode(Ifd::Gps, 0x1, WireType::Ascii, 2, b"S\0").unwrap();
    assert_eq!(decoded, south);

    let altitude = Property::new(
        field::GPSAltitudeRef,
        Value::Enum(GpsAltitudeRef::BelowSeaLevel.into()),
    );
    let wire = altitude.to_wire().unwrap();
    assert_eq!(wire.wire_type, WireType::Byte);
    assert_eq!(wire.payload, vec![1]);

    for property in [north, south, altitude] {
        assert_round_trip(&property);
    }
}

#[test]
fn enum_flash_bit_field() {
    let property = decode(Ifd::Exif, 0x9209, WireType::Short, 1, &shorts(&[0x19])).unwrap();
    let value = property.value.as_enum().unwrap();

    assert!(value.is_bit_field());
    assert_eq!(value.code(), 0x19);
    assert_eq!(value.layout(), EnumLayout::Short);
    let EnumValue::Flash(flash) = value else {
        panic!("Not flash: {value:?}");
    };
    assert!(flash.fired());
    assert!(flash.contains(Flash::AUTO_MODE));

    let orientation = EnumValue::from(Orientation::Mirrored);
    assert!(!orientation.is_bit_field());

    assert_round_trip(&property);
}

#[test]
fn enum_unknown_value() {
    let property = decode(Ifd::Exif, 0xA001, WireType::Short, 1, &shorts(&[99])).unwrap();
    assert_eq!(
        property.value,
        Value::Enum(EnumValue::ColorSpace(ColorSpace::Unknown(99)))
    );
    assert_round_trip(&property);

    // Byte sized enumeration with a value larger than a byte
    let data = 300_u32.to_ne_bytes();
    let err = decode(Ifd::Gps, 0x5, WireType::Long, 1, &data).unwrap_err();
    assert!(matches!(err, Error::EnumOutOfRange { value: 300, .. }));
}

#[test]
fn enum_thumbnail_ifd() {
    let property = decode(Ifd::Thumbnail, 0x103, WireType::Short, 1, &shorts(&[6])).unwrap();
    assert_eq!(property.value, Value::Enum(Compression::Jpeg.into()));
    assert_eq!(property.name(), "ThumbnailCompression");

    // Same tag number in another IFD is not an enumeration
    let property = decode(Ifd::Exif, 0x103, WireType::Short, 1, &shorts(&[6])).unwrap();
    assert_eq!(property.value, Value::Short(6));
}

#[test]
fn date_time() {
    let data = b"2023:05:06 07:08:09\0";
    let property = decode(Ifd::Exif, 0x9003, WireType::Ascii, 20, data).unwrap();

    let expected =
        NaiveDateTime::parse_from_str("2023-05-06 07:08:09", "%Y-%m-%d %H:%M:%S").unwrap();
    assert_eq!(property.value, Value::DateTime(expected));

    let wire = property.to_wire().unwrap();
    assert_eq!(wire.count, 20);
    assert_eq!(wire.payload, data);
    assert_round_trip(&property);

    // Unparsable dates stay text
    let data = b"0000:00:00 00:00:00\0";
    let property = decode(Ifd::Exif, 0x9003, WireType::Ascii, 20, data).unwrap();
    assert_eq!(property.value.as_str(), Some("0000:00:00 00:00:00"));
    assert_eq!(property.value.as_date_time(), None);
    assert_eq!(property.to_wire().unwrap().payload, data);

    let err = decode(Ifd::Exif, 0x9003, WireType::Short, 1, &shorts(&[1])).unwrap_err();
    assert!(matches!(err, Error::UnexpectedWireType { .. }));
}

#[test]
fn date() {
    let data = b"2023:05:06\0";
    let property = decode(Ifd::Gps, 0x1D, WireType::Ascii, 11, data).unwrap();
    assert_eq!(
        property.value,
        Value::Date(NaiveDate::from_ymd_opt(2023, 5, 6).unwrap())
    );

    let wire = property.to_wire().unwrap();
    assert_eq!(wire.count, 11);
    assert_eq!(wire.payload, data);

    let property = decode(Ifd::Gps, 0x1D, WireType::Ascii, 11, b"    :  :  \0").unwrap();
    assert_eq!(property.value.as_str(), Some("    :  :  "));
}

#[test]
fn version() {
    let property = decode(Ifd::Exif, 0x9000, WireType::Undefined, 4, b"0230").unwrap();
    assert_eq!(property.value, Value::Version(Version::ascii("0230")));
    assert_eq!(property.value.as_str(), Some("0230"));
    assert_round_trip(&property);

    let short = Property::new(field::FlashpixVersion, Value::Version(Version::ascii("1")));
    let wire = short.to_wire().unwrap();
    assert_eq!(wire.wire_type, WireType::Undefined);
    assert_eq!(wire.payload, b"1   ");

    let long = Property::new(
        field::InteroperabilityVersion,
        Value::Version(Version::Ascii(String::from("010000"))),
    );
    assert_eq!(long.to_wire().unwrap().payload, b"0100");

    let gps = decode(Ifd::Gps, 0x0, WireType::Byte, 4, &[2, 2, 0, 0]).unwrap();
    assert_eq!(gps.value, Value::Version(Version::Digits([2, 2, 0, 0])));
    assert_eq!(gps.value.to_string(), "2.2.0.0");
    assert_round_trip(&gps);
}

#[test]
fn gps_coordinate_and_time() {
    let data = rationals(&[(33, 1), (51, 1), (219, 10)]);
    let property = decode(Ifd::Gps, 0x2, WireType::Rational, 3, &data).unwrap();

    let Value::GpsCoordinate(coordinate) = &property.value else {
        panic!("Not a coordinate: {:?}", property.value);
    };
    assert_eq!(coordinate.seconds, URational::new(219, 10));
    let coord = coordinate.to_coord().unwrap();
    assert_eq!((coord.0 * 100_000.).round() / 100_000., 33.85608);
    assert_round_trip(&property);

    let err = decode(Ifd::Gps, 0x2, WireType::Rational, 2, &data[..16]).unwrap_err();
    assert!(matches!(err, Error::InvalidCount { count: 2, .. }));

    let data = rationals(&[(12, 1), (30, 1), (15, 1)]);
    let property = decode(Ifd::Gps, 0x7, WireType::Rational, 3, &data).unwrap();
    let Value::GpsTimeStamp(time) = &property.value else {
        panic!("Not a time stamp: {:?}", property.value);
    };
    assert_eq!(time.to_seconds().unwrap(), 45015.);
    assert_round_trip(&property);
}

#[test]
fn lens_specification() {
    let data = rationals(&[(24, 1), (70, 1), (28, 10), (28, 10)]);
    let property = decode(Ifd::Exif, 0xA432, WireType::Rational, 4, &data).unwrap();

    assert_eq!(
        property.value,
        Value::LensSpecification(LensSpecification {
            min_focal_length: URational::new(24, 1),
            max_focal_length: URational::new(70, 1),
            min_f_number: URational::new(28, 10),
            max_f_number: URational::new(28, 10),
        })
    );
    assert_eq!(property.to_wire().unwrap().payload, data);

    let err = decode(Ifd::Exif, 0xA432, WireType::Rational, 3, &data[..24]).unwrap_err();
    assert!(matches!(err, Error::InvalidCount { .. }));
}

#[test]
fn windows_string() {
    let mut data: Vec<u8> = "Title".encode_utf16().flat_map(u16::to_le_bytes).collect();
    data.extend_from_slice(&[0, 0]);

    let property = decode(
        Ifd::Primary,
        0x9C9B,
        WireType::Byte,
        data.len() as u32,
        &data,
    )
    .unwrap();
    assert_eq!(property.value, Value::WindowsString(String::from("Title")));

    // No terminator is written
    let wire = property.to_wire().unwrap();
    assert_eq!(wire.wire_type, WireType::Byte);
    assert_eq!(wire.payload, &data[..10]);
    assert_round_trip(&property);
}

#[test]
fn fallback_scalar_and_array() {
    let property = decode(Ifd::Primary, 0x100, WireType::Long, 1, &4000_u32.to_ne_bytes()).unwrap();
    assert_eq!(property.value, Value::Long(4000));
    assert_eq!(property.value.as_u32(), Some(4000));

    let property = decode(Ifd::Primary, 0x102, WireType::Short, 0, &[]).unwrap();
    assert_eq!(property.value, Value::Shorts(Vec::new()));

    let data: Vec<u8> = [-1_i32, 2, 3, -4].iter().flat_map(|x| x.to_ne_bytes()).collect();
    let property = decode(Ifd::Exif, 0x9204, WireType::SRational, 2, &data).unwrap();
    assert_eq!(
        property.value,
        Value::SRationals(vec![SRational::new(-1, 2), SRational::new(3, -4)])
    );

    let properties = [
        Property::new(field::ImageWidth, Value::Byte(1)),
        Property::new(field::ImageWidth, Value::Bytes(vec![1, 2, 3, 4, 5])),
        Property::new(field::ImageWidth, Value::SByte(-3)),
        Property::new(field::ImageWidth, Value::SShorts(vec![-1, 1])),
        Property::new(field::ImageWidth, Value::SLong(-70_000)),
        Property::new(field::ImageWidth, Value::Float(1.5)),
        Property::new(field::ImageWidth, Value::Doubles(vec![0.25, -8.])),
        Property::new(field::ImageWidth, Value::Undefined(vec![0, 1])),
        Property::new(
            field::XResolution,
            Value::Rationals(vec![URational::new(72, 1), URational::new(1, 3)]),
        ),
        Property::new(
            field::Make,
            Value::Ascii(Text::new("Camera", encoding_rs::UTF_8)),
        ),
    ];

    for property in &properties {
        assert_round_trip(property);
    }
}

#[test]
fn fallback_encoding() {
    let data = encoding_rs::WINDOWS_1252.encode("Müller").0.to_vec();
    let mut with_nul = data.clone();
    with_nul.push(0);

    let property = dispatch(
        Ifd::Primary,
        Tag(0x13B),
        WireType::Ascii,
        with_nul.len() as u32,
        &with_nul,
        ByteOrder::LittleEndian,
        encoding_rs::WINDOWS_1252,
    )
    .unwrap();

    assert_eq!(property.value.as_str(), Some("Müller"));
    assert_eq!(property.to_wire().unwrap().payload, with_nul);
}

#[test]
fn unknown_property_type() {
    let err = decode(Ifd::Primary, 0x9999, WireType::Unknown(13), 1, &[0; 4]).unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownPropertyType {
            wire_type: WireType::Unknown(13),
            ..
        }
    ));
}

#[test]
fn length_mismatch() {
    let err = decode(Ifd::Primary, 0x100, WireType::Short, 2, &[0, 0]).unwrap_err();
    assert!(matches!(err, Error::DataLengthMismatch { .. }));
}

#[test]
fn unexpected_wire_type() {
    let err = decode(Ifd::Exif, 0x9003, WireType::Short, 1, &[0, 0]).unwrap_err();
    assert!(matches!(err, Error::UnexpectedWireType { .. }));
}

#[test]
fn thumbnail_payload() {
    let palette = Thumbnail::palette_bitmap(vec![0xAA, 0xBB], vec![1, 2, 3]);
    let property = Property::new(field::ThumbnailCompression, Value::Thumbnail(palette));
    let wire = property.to_wire().unwrap();
    assert_eq!(wire.wire_type, WireType::Undefined);
    assert_eq!(wire.payload, vec![0xAA, 0xBB, 1, 2, 3]);

    let jpeg = Thumbnail::new(RasterKind::Jpeg, vec![0xFF, 0xD8, 0xFF, 0xD9]);
    assert_eq!(jpeg.to_bytes().unwrap(), vec![0xFF, 0xD8, 0xFF, 0xD9]);
    assert_eq!(Thumbnail::from_bytes(jpeg.data.clone()), jpeg);

    let unknown = Thumbnail::new(RasterKind::Unknown(7), vec![1]);
    let err = Value::Thumbnail(unknown).to_wire().unwrap_err();
    assert!(matches!(err, Error::UnknownRasterKind(7)));
}
