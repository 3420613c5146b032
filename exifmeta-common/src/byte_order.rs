//! Byte order handling
//!
//! Every conversion takes the byte order the bytes are stored in and the byte
//! order they should be interpreted in. The bytes are reversed if and only if
//! the two differ. There is no global byte order state.

use crate::math::{MathError, SafeAdd, SafeMul};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Least significant byte first, marked as `II`
    LittleEndian,
    /// Most significant byte first, marked as `MM`
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the host
    pub const NATIVE: Self = if cfg!(target_endian = "big") {
        Self::BigEndian
    } else {
        Self::LittleEndian
    };

    /// Byte order from the TIFF header marker
    ///
    /// ```
    /// # use exifmeta_common::byte_order::ByteOrder;
    /// assert_eq!(ByteOrder::from_marker(*b"MM"), Some(ByteOrder::BigEndian));
    /// assert_eq!(ByteOrder::from_marker(*b"XX"), None);
    /// ```
    pub fn from_marker(marker: [u8; 2]) -> Option<Self> {
        match &marker {
            b"II" => Some(Self::LittleEndian),
            b"MM" => Some(Self::BigEndian),
            _ => None,
        }
    }

    pub fn marker(self) -> [u8; 2] {
        match self {
            Self::LittleEndian => *b"II",
            Self::BigEndian => *b"MM",
        }
    }

    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum EndianError {
    #[error("Reading {len} bytes at offset {offset} exceeds buffer of {available} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

/// Fixed width numbers that can be converted from and to bytes
pub trait Endian: Copy {
    const SIZE: usize;

    fn to_ne_vec(self) -> Vec<u8>;

    /// Returns `None` if `bytes` is not exactly [`Self::SIZE`] long
    fn from_ne_slice(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_endian {
    ($($t:ty),*) => {
        $(
            impl Endian for $t {
                const SIZE: usize = std::mem::size_of::<$t>();

                fn to_ne_vec(self) -> Vec<u8> {
                    self.to_ne_bytes().to_vec()
                }

                fn from_ne_slice(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$t>::from_ne_bytes)
                }
            }
        )*
    };
}

impl_endian!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// Bytes of `value`, reversed if `from` and `to` differ
///
/// ```
/// # use exifmeta_common::byte_order::*;
/// let bytes = bytes_from(0x0102_u16, ByteOrder::NATIVE, ByteOrder::BigEndian);
/// assert_eq!(bytes, vec![0x01, 0x02]);
/// ```
pub fn bytes_from<T: Endian>(value: T, from: ByteOrder, to: ByteOrder) -> Vec<u8> {
    let mut bytes = value.to_ne_vec();
    if from != to {
        bytes.reverse();
    }
    bytes
}

/// Reads a `T` at `offset`, reversing its bytes if `from` and `to` differ
///
/// ```
/// # use exifmeta_common::byte_order::*;
/// let data = [0xFF, 0x01, 0x02];
/// let value: u16 = value_from(&data, 1, ByteOrder::BigEndian, ByteOrder::NATIVE).unwrap();
/// assert_eq!(value, 0x0102);
/// assert!(value_from::<u32>(&data, 1, ByteOrder::BigEndian, ByteOrder::NATIVE).is_err());
/// ```
pub fn value_from<T: Endian>(
    bytes: &[u8],
    offset: usize,
    from: ByteOrder,
    to: ByteOrder,
) -> Result<T, EndianError> {
    let out_of_bounds = || EndianError::OutOfBounds {
        offset,
        len: T::SIZE,
        available: bytes.len(),
    };

    let end = offset.safe_add(T::SIZE)?;
    let slice = bytes.get(offset..end).ok_or_else(out_of_bounds)?;

    let mut buf = [0; 8];
    let buf = buf.get_mut(..T::SIZE).ok_or_else(out_of_bounds)?;
    buf.copy_from_slice(slice);
    if from != to {
        buf.reverse();
    }

    T::from_ne_slice(buf).ok_or_else(out_of_bounds)
}

/// Reverses every `element_size` wide element of `bytes` in place
///
/// The order of the elements stays the same.
///
/// ```
/// # use exifmeta_common::byte_order::reverse_elements;
/// let mut data = [1, 2, 3, 4, 5, 6];
/// reverse_elements(&mut data, 2);
/// assert_eq!(data, [2, 1, 4, 3, 6, 5]);
/// ```
pub fn reverse_elements(bytes: &mut [u8], element_size: usize) {
    if element_size > 1 {
        for element in bytes.chunks_exact_mut(element_size) {
            element.reverse();
        }
    }
}

/// Binds a fixed pair of byte orders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    pub from: ByteOrder,
    pub to: ByteOrder,
}

impl Converter {
    pub fn new(from: ByteOrder, to: ByteOrder) -> Self {
        Self { from, to }
    }

    /// Converter from `from` into the host byte order
    pub fn to_native(from: ByteOrder) -> Self {
        Self::new(from, ByteOrder::NATIVE)
    }

    pub fn read<T: Endian>(&self, bytes: &[u8], offset: usize) -> Result<T, EndianError> {
        value_from(bytes, offset, self.from, self.to)
    }

    /// Reads `count` consecutive values starting at the beginning of `bytes`
    pub fn read_array<T: Endian>(&self, bytes: &[u8], count: usize) -> Result<Vec<T>, EndianError> {
        (0..count)
            .map(|i| self.read(bytes, i.safe_mul(T::SIZE)?))
            .collect()
    }

    pub fn bytes<T: Endian>(&self, value: T) -> Vec<u8> {
        bytes_from(value, self.from, self.to)
    }
}
