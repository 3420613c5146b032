#![allow(dead_code)]

pub use exifmeta::factory::dispatch;
pub use exifmeta::internal::*;
pub use exifmeta::property::*;

/// Byte order that differs from the host's
pub fn foreign() -> ByteOrder {
    match ByteOrder::NATIVE {
        ByteOrder::LittleEndian => ByteOrder::BigEndian,
        ByteOrder::BigEndian => ByteOrder::LittleEndian,
    }
}

/// TIFF header in little endian
pub fn le_header(first_ifd: u32) -> Vec<u8> {
    let mut data = Vec::new();

    // Litte endian
    data.extend_from_slice(b"II");
    // Magic bits
    data.extend_from_slice(&42_u16.to_le_bytes());
    // Offset
    data.extend_from_slice(&first_ifd.to_le_bytes());

    data
}

/// Entry record in little endian
pub fn le_entry(tag: u16, wire_type: u16, count: u32, field: [u8; 4]) -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(&tag.to_le_bytes());
    data.extend_from_slice(&wire_type.to_le_bytes());
    data.extend_from_slice(&count.to_le_bytes());
    data.extend_from_slice(&field);

    data
}

/// IFD in little endian without payloads
pub fn le_ifd(entries: &[Vec<u8>], next_ifd: u32) -> Vec<u8> {
    let mut data = Vec::new();

    data.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in entries {
        data.extend_from_slice(entry);
    }
    data.extend_from_slice(&next_ifd.to_le_bytes());

    data
}

pub fn le_rationals(values: &[(u32, u32)]) -> Vec<u8> {
    values
        .iter()
        .flat_map(|(n, d)| [n.to_le_bytes(), d.to_le_bytes()])
        .flatten()
        .collect()
}

/// Decodes data in host byte order
pub fn decode(
    ifd: Ifd,
    tag: u16,
    wire_type: WireType,
    count: u32,
    data: &[u8],
) -> exifmeta::Result<Property> {
    dispatch(
        ifd,
        Tag(tag),
        wire_type,
        count,
        data,
        ByteOrder::NATIVE,
        encoding_rs::UTF_8,
    )
}

/// Checks that decoding the wire representation gives the same property
pub fn assert_round_trip(property: &Property) {
    let wire = property.to_wire().unwrap();
    let decoded = decode(
        property.tag.ifd,
        property.tag.tag.0,
        wire.wire_type,
        wire.count,
        &wire.payload,
    )
    .unwrap();

    assert_eq!(&decoded, property);
}
