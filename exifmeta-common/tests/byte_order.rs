use exifmeta_common::byte_order::*;

fn foreign() -> ByteOrder {
    match ByteOrder::NATIVE {
        ByteOrder::LittleEndian => ByteOrder::BigEndian,
        ByteOrder::BigEndian => ByteOrder::LittleEndian,
    }
}

#[test]
fn write_then_read() {
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let bytes = bytes_from(0x0102_0304_u32, ByteOrder::NATIVE, order);
        let conv = Converter::to_native(order);
        assert_eq!(conv.read::<u32>(&bytes, 0).unwrap(), 0x0102_0304);

        // Same order on both sides keeps the bytes
        assert_eq!(bytes_from(0x0102_u16, order, order), 0x0102_u16.to_ne_bytes());
    }
}

#[test]
fn explicit_orders() {
    assert_eq!(
        bytes_from(0x0102_0304_u32, ByteOrder::NATIVE, ByteOrder::BigEndian),
        vec![1, 2, 3, 4]
    );
    assert_eq!(
        bytes_from(0x0102_0304_u32, ByteOrder::NATIVE, ByteOrder::LittleEndian),
        vec![4, 3, 2, 1]
    );

    let data = [0xFE, 0xFF, 0xFF, 0xFF];
    let conv = Converter::to_native(ByteOrder::LittleEndian);
    assert_eq!(conv.read::<i32>(&data, 0).unwrap(), -2);
    assert_eq!(conv.read::<i16>(&data, 0).unwrap(), -2);
    assert_eq!(conv.read::<u8>(&data, 3).unwrap(), 0xFF);

    let conv = Converter::to_native(ByteOrder::BigEndian);
    assert_eq!(conv.read::<f32>(&1.5_f32.to_be_bytes(), 0).unwrap(), 1.5);
    assert_eq!(conv.read::<f64>(&(-0.25_f64).to_be_bytes(), 0).unwrap(), -0.25);
}

#[test]
fn foreign_round_trip() {
    let conv = Converter::new(ByteOrder::NATIVE, foreign());
    let back = Converter::to_native(foreign());

    let bytes = conv.bytes(0xAABB_u16);
    assert_eq!(bytes, 0xBBAA_u16.to_ne_bytes());
    assert_eq!(back.read::<u16>(&bytes, 0).unwrap(), 0xAABB);

    let values = [1_u32, 2, 0xFFFF_0000];
    let bytes: Vec<u8> = values.iter().flat_map(|x| conv.bytes(*x)).collect();
    assert_eq!(back.read_array::<u32>(&bytes, 3).unwrap(), values);
}

#[test]
fn out_of_bounds() {
    let conv = Converter::to_native(ByteOrder::LittleEndian);
    let err = conv.read::<u32>(&[1, 2, 3, 4, 5], 2).unwrap_err();
    assert_eq!(
        err,
        EndianError::OutOfBounds {
            offset: 2,
            len: 4,
            available: 5
        }
    );

    assert!(conv.read_array::<u16>(&[1, 2, 3], 2).is_err());
    assert!(conv.read::<u8>(&[], usize::MAX).is_err());
}

#[test]
fn markers() {
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        assert_eq!(ByteOrder::from_marker(order.marker()), Some(order));
    }
    assert!(ByteOrder::NATIVE.is_native());
    assert!(!foreign().is_native());
}

#[test]
fn reverse_rational_components() {
    let mut data = [0, 0, 0, 1, 0, 0, 0, 3];
    reverse_elements(&mut data, 4);
    assert_eq!(data, [1, 0, 0, 0, 3, 0, 0, 0]);

    // Single bytes are never reordered
    let mut data = [1, 2, 3];
    reverse_elements(&mut data, 1);
    assert_eq!(data, [1, 2, 3]);
}
