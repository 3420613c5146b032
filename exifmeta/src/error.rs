use exifmeta_common::byte_order::EndianError;
use exifmeta_common::exif::{InvalidTagId, TagId};
use exifmeta_common::math::MathError;

use crate::internal::WireType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("Unknown byte order marker {0:x?}")]
    UnknownByteOrder([u8; 2]),
    #[error("Expected magic bytes 42, got {0}")]
    MagicBytesWrong(u16),
    #[error("Unexpected end of data while reading the header")]
    HeaderEof,
    #[error("Unexpected end of data while reading the number of IFD entries")]
    IfdNumEntriesEof,
    #[error("Unexpected end of data while reading an IFD entry")]
    EntryEof,
    #[error("Unexpected end of data while reading the next IFD offset")]
    NextIfdEof,
    #[error("Unknown wire type {0}")]
    UnknownWireType(u16),
    #[error("Unknown property type {wire_type:?} for {tag}")]
    UnknownPropertyType { tag: TagId, wire_type: WireType },
    #[error("Unexpected wire type {wire_type:?} for {tag}")]
    UnexpectedWireType { tag: TagId, wire_type: WireType },
    #[error("{len} bytes at offset {offset} exceed the buffer of {available} bytes")]
    OffsetOutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },
    #[error("Value has {actual} bytes but {expected} bytes are required")]
    DataLengthMismatch { expected: usize, actual: usize },
    #[error("Count {count} is not valid for {tag}")]
    InvalidCount { tag: TagId, count: u32 },
    #[error("Invalid date '{0}'")]
    InvalidDate(String),
    #[error("Invalid version '{0}'")]
    InvalidVersion(String),
    #[error("Unknown raster kind {0}")]
    UnknownRasterKind(u8),
    #[error("Value {value} does not fit into the enumeration of {tag}")]
    EnumOutOfRange { tag: TagId, value: u32 },
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("Byte order: {0}")]
    Endian(#[from] EndianError),
    #[error("{0}")]
    InvalidTagId(#[from] InvalidTagId),
}

pub(crate) trait ResultExt<T> {
    fn e(self, err: Error) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E> {
    fn e(self, err: Error) -> Result<T> {
        self.map_err(|_| err)
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn e(self, err: Error) -> Result<T> {
        match self {
            Some(v) => Ok(v),
            None => Err(err),
        }
    }
}
