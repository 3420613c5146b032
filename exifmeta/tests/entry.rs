mod utils;
use exifmeta::Error;
use exifmeta_common::rational::URational;
use utils::*;

/// Header, entry count and one entry
const ONE_ENTRY_END: usize = 8 + 2 + 12 + 4;

fn single_entry(entry: Vec<u8>, tail: &[u8]) -> Vec<u8> {
    let mut data = le_header(8);
    data.extend(le_ifd(&[entry], 0));
    data.extend_from_slice(tail);
    data
}

#[test]
fn four_bytes_inline() {
    let data = single_entry(le_entry(0x927C, 7, 4, [9, 8, 7, 6]), &[]);

    let entry_ref = EntryRef::read(&data, 10, ByteOrder::LittleEndian).unwrap();
    assert_eq!(entry_ref.value_offset, ValueOffset::Value([9, 8, 7, 6]));

    let entry = Entry::decode(&data, 10, ByteOrder::LittleEndian).unwrap();
    assert_eq!(entry.value, vec![9, 8, 7, 6]);
    assert!(entry.is_inline().unwrap());
}

#[test]
fn five_bytes_indirect() {
    let offset = ONE_ENTRY_END as u32;
    let data = single_entry(
        le_entry(0x927C, 7, 5, offset.to_le_bytes()),
        &[1, 2, 3, 4, 5],
    );

    let entry_ref = EntryRef::read(&data, 10, ByteOrder::LittleEndian).unwrap();
    assert_eq!(entry_ref.value_offset, ValueOffset::Offset(offset));
    assert_eq!(entry_ref.offset(), Some(offset));

    let entry = Entry::decode(&data, 10, ByteOrder::LittleEndian).unwrap();
    assert_eq!(entry.value, vec![1, 2, 3, 4, 5]);
    assert!(!entry.is_inline().unwrap());
}

#[test]
fn long_inline() {
    let data = single_entry(le_entry(0x100, 4, 1, 0xAABBCCDD_u32.to_le_bytes()), &[]);

    let entry = Entry::decode(&data, 10, ByteOrder::LittleEndian).unwrap();
    let value = u32::from_ne_bytes(entry.value.try_into().unwrap());
    assert_eq!(value, 0xAABBCCDD);
}

#[test]
fn offset_out_of_bounds() {
    let data = single_entry(le_entry(0x927C, 7, 5, 1000_u32.to_le_bytes()), &[1, 2]);

    let err = Entry::decode(&data, 10, ByteOrder::LittleEndian).unwrap_err();
    assert!(matches!(
        err,
        Error::OffsetOutOfBounds {
            offset: 1000,
            len: 5,
            ..
        }
    ));

    // Payload partially exists
    let offset = ONE_ENTRY_END as u32;
    let data = single_entry(le_entry(0x927C, 7, 5, offset.to_le_bytes()), &[1, 2]);
    let err = Entry::decode(&data, 10, ByteOrder::LittleEndian).unwrap_err();
    assert!(matches!(err, Error::OffsetOutOfBounds { .. }));
}

#[test]
fn entry_eof() {
    let data = single_entry(le_entry(0x112, 3, 1, [6, 0, 0, 0]), &[]);
    let err = EntryRef::read(&data[..15], 10, ByteOrder::LittleEndian).unwrap_err();
    assert!(matches!(err, Error::EntryEof));
}

#[test]
fn unknown_wire_type() {
    let data = single_entry(le_entry(0x112, 99, 1, [6, 0, 0, 0]), &[]);
    let err = EntryRef::read(&data, 10, ByteOrder::LittleEndian).unwrap_err();
    assert!(matches!(err, Error::UnknownWireType(99)));

    assert!(WireType::Unknown(13).size().is_err());
    assert!(WireType::Unknown(0).swap_size().is_err());
}

#[test]
fn reverse_per_element() {
    let values = [0x0102_u16, 0x0304, 0x0506];
    let payload: Vec<u8> = values.iter().flat_map(|x| x.to_ne_bytes()).collect();

    let property = dispatch(
        Ifd::Primary,
        Tag(0x102),
        WireType::Short,
        3,
        &payload,
        foreign(),
        encoding_rs::UTF_8,
    )
    .unwrap();

    assert_eq!(property.value, Value::Shorts(vec![0x0201, 0x0403, 0x0605]));
}

#[test]
fn reverse_per_element_entry() {
    let mut data = vec![0; 12];
    let conv = exifmeta_common::byte_order::Converter::new(ByteOrder::NATIVE, foreign());
    data.splice(0..2, conv.bytes(0x102_u16));
    data.splice(2..4, conv.bytes(3_u16));
    data.splice(4..8, conv.bytes(3_u32));
    data.splice(8..12, conv.bytes(12_u32));
    data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);

    let entry = Entry::decode(&data, 0, foreign()).unwrap();
    assert_eq!(entry.tag, Tag(0x102));
    assert_eq!(entry.count, 3);
    assert_eq!(entry.value, vec![2, 1, 4, 3, 6, 5]);

    let encoded = entry.encode(foreign()).unwrap();
    assert_eq!(encoded.payload, Some(vec![1, 2, 3, 4, 5, 6]));
}

#[test]
fn big_endian_rational() {
    let data = [0, 0, 0, 1, 0, 0, 0, 3];

    let property = dispatch(
        Ifd::Exif,
        Tag(0x829A),
        WireType::Rational,
        1,
        &data,
        ByteOrder::BigEndian,
        encoding_rs::UTF_8,
    )
    .unwrap();

    assert_eq!(property.value, Value::Rational(URational::new(1, 3)));

    let entry = property.to_entry().unwrap();
    let encoded = entry.encode(ByteOrder::BigEndian).unwrap();
    assert_eq!(encoded.payload, Some(data.to_vec()));
}

#[test]
fn orientation_record() {
    let record = le_entry(0x112, 3, 1, [6, 0, 0, 0]);

    let entry_ref = EntryRef::read(&record, 0, ByteOrder::LittleEndian).unwrap();
    let property = dispatch(
        Ifd::Primary,
        entry_ref.tag,
        entry_ref.wire_type,
        entry_ref.count,
        entry_ref.data(&record).unwrap(),
        ByteOrder::LittleEndian,
        encoding_rs::UTF_8,
    )
    .unwrap();

    let Value::Enum(value) = property.value else {
        panic!("Not an enumeration: {:?}", property.value);
    };
    assert_eq!(value, EnumValue::Orientation(Orientation::Rotation270));
    assert_eq!(value.code(), 6);

    let encoded = property
        .to_entry()
        .unwrap()
        .encode(ByteOrder::LittleEndian)
        .unwrap();
    assert_eq!(encoded.record.to_vec(), record);
    assert_eq!(encoded.payload, None);
}

#[test]
fn encode_indirect() {
    let entry = Entry::new(Tag(0x10F), WireType::Ascii, 5, b"Test\0".to_vec()).unwrap();

    let mut encoded = entry.encode(ByteOrder::LittleEndian).unwrap();
    assert_eq!(encoded.payload.as_deref(), Some(&b"Test\0"[..]));
    assert_eq!(encoded.payload_len(), 5);
    assert_eq!(&encoded.record[..8], &[0x0F, 0x01, 2, 0, 5, 0, 0, 0]);

    encoded.set_offset(100);
    assert_eq!(&encoded.record[8..], &100_u32.to_le_bytes());

    let mut encoded = entry.encode(ByteOrder::BigEndian).unwrap();
    encoded.set_offset(100);
    assert_eq!(&encoded.record[..8], &[0x01, 0x0F, 0, 2, 0, 0, 0, 5]);
    assert_eq!(&encoded.record[8..], &100_u32.to_be_bytes());
}

#[test]
fn entry_length_mismatch() {
    let err = Entry::new(Tag(0x100), WireType::Short, 2, vec![0; 2]).unwrap_err();
    assert!(matches!(
        err,
        Error::DataLengthMismatch {
            expected: 4,
            actual: 2
        }
    ));
}
