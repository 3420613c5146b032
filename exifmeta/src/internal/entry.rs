//! Directory entry codec
//!
//! An entry is 12 bytes: tag (2), wire type (2), count (4) and a 4 byte field
//! that either holds the value itself or the offset of the value within the
//! same buffer.

use exifmeta_common::byte_order::{reverse_elements, ByteOrder, Converter};
use exifmeta_common::exif::Tag;
use exifmeta_common::math::*;

use super::WireType;
use crate::error::{Error, Result, ResultExt};

/// Size of one directory entry in bytes
pub const ENTRY_LEN: usize = 12;

/// Values up to this size are stored inside the entry
pub const INLINE_CAPACITY: usize = 4;

/// This can either be a value or an offset where to find the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOffset {
    /// Left-justified value bytes in file byte order
    Value([u8; 4]),
    Offset(u32),
}

impl ValueOffset {
    fn new(data_len: usize, field: [u8; 4], conv: Converter) -> Result<Self> {
        Ok(if data_len <= INLINE_CAPACITY {
            Self::Value(field)
        } else {
            Self::Offset(conv.read(&field, 0)?)
        })
    }
}

/// Entry record as found in the directory, without resolving offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRef {
    pub position: usize,
    pub tag: Tag,
    pub wire_type: WireType,
    pub count: u32,
    pub value_offset: ValueOffset,
}

impl EntryRef {
    /// Read the 12 byte record at `position`
    pub fn read(buffer: &[u8], position: usize, byte_order: ByteOrder) -> Result<Self> {
        let conv = Converter::to_native(byte_order);

        let tag = Tag(conv.read(buffer, position).e(Error::EntryEof)?);
        let wire_type = WireType::from(
            conv.read::<u16>(buffer, position.safe_add(2)?)
                .e(Error::EntryEof)?,
        );
        let count = conv
            .read::<u32>(buffer, position.safe_add(4)?)
            .e(Error::EntryEof)?;

        let field_start = position.safe_add(8)?;
        let field: [u8; 4] = buffer
            .get(field_start..field_start.safe_add(4)?)
            .and_then(|x| x.try_into().ok())
            .e(Error::EntryEof)?;

        let value_offset = ValueOffset::new(data_len(wire_type, count)?, field, conv)?;

        Ok(Self {
            position,
            tag,
            wire_type,
            count,
            value_offset,
        })
    }

    pub fn data_len(&self) -> Result<usize> {
        data_len(self.wire_type, self.count)
    }

    /// Value bytes in file byte order
    pub fn data<'a>(&self, buffer: &'a [u8]) -> Result<&'a [u8]> {
        let len = self.data_len()?;

        match &self.value_offset {
            ValueOffset::Value(_) => {
                let start = self.position.safe_add(8)?;
                buffer
                    .get(start..start.safe_add(len)?)
                    .e(Error::EntryEof)
            }
            ValueOffset::Offset(offset) => {
                let offset = offset.usize()?;
                let out_of_bounds = Error::OffsetOutOfBounds {
                    offset,
                    len,
                    available: buffer.len(),
                };
                let end = offset.safe_add(len)?;
                buffer.get(offset..end).e(out_of_bounds)
            }
        }
    }

    pub fn offset(&self) -> Option<u32> {
        match self.value_offset {
            ValueOffset::Offset(offset) => Some(offset),
            ValueOffset::Value(_) => None,
        }
    }
}

fn data_len(wire_type: WireType, count: u32) -> Result<usize> {
    count
        .safe_mul(wire_type.size()?)
        .map_err(Into::into)
        .and_then(|x| x.usize().map_err(Into::into))
}

/// Decoded directory entry
///
/// The value bytes are stored in host byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub tag: Tag,
    pub wire_type: WireType,
    pub count: u32,
    pub value: Vec<u8>,
}

impl Entry {
    /// Entry with value bytes in host byte order
    ///
    /// The length of `value` must match `count` elements of `wire_type`.
    pub fn new(tag: Tag, wire_type: WireType, count: u32, value: Vec<u8>) -> Result<Self> {
        let expected = data_len(wire_type, count)?;
        if value.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: value.len(),
            });
        }

        Ok(Self {
            tag,
            wire_type,
            count,
            value,
        })
    }

    /// Decode the entry at `position` including its value
    ///
    /// Values longer than four bytes are read from the offset stored in the
    /// entry. Each element of the value is converted to host byte order.
    pub fn decode(buffer: &[u8], position: usize, byte_order: ByteOrder) -> Result<Self> {
        let entry_ref = EntryRef::read(buffer, position, byte_order)?;
        Self::from_ref(&entry_ref, buffer, byte_order)
    }

    pub fn from_ref(entry_ref: &EntryRef, buffer: &[u8], byte_order: ByteOrder) -> Result<Self> {
        let mut value = entry_ref.data(buffer)?.to_vec();

        let conv = Converter::to_native(byte_order);
        if conv.from != conv.to {
            reverse_elements(&mut value, entry_ref.wire_type.swap_size()?);
        }

        Ok(Self {
            tag: entry_ref.tag,
            wire_type: entry_ref.wire_type,
            count: entry_ref.count,
            value,
        })
    }

    pub fn data_len(&self) -> Result<usize> {
        data_len(self.wire_type, self.count)
    }

    pub fn is_inline(&self) -> Result<bool> {
        Ok(self.data_len()? <= INLINE_CAPACITY)
    }

    /// Encode the entry for a file with `byte_order`
    ///
    /// Values longer than four bytes are returned as separate payload. The
    /// caller has to place the payload and store its offset via
    /// [`EncodedEntry::set_offset`].
    pub fn encode(&self, byte_order: ByteOrder) -> Result<EncodedEntry> {
        let expected = self.data_len()?;
        if self.value.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: self.value.len(),
            });
        }

        let conv = Converter::new(ByteOrder::NATIVE, byte_order);

        let mut value = self.value.clone();
        if conv.from != conv.to {
            reverse_elements(&mut value, self.wire_type.swap_size()?);
        }

        let mut record = [0; ENTRY_LEN];
        put(&mut record, 0, &conv.bytes(self.tag.0));
        put(&mut record, 2, &conv.bytes(self.wire_type.u16()));
        put(&mut record, 4, &conv.bytes(self.count));

        let payload = if value.len() <= INLINE_CAPACITY {
            put(&mut record, 8, &value);
            None
        } else {
            Some(value)
        };

        Ok(EncodedEntry {
            tag: self.tag,
            record,
            payload,
            byte_order,
        })
    }
}

/// Encoded entry record with its payload if it does not fit inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedEntry {
    pub tag: Tag,
    pub record: [u8; ENTRY_LEN],
    pub payload: Option<Vec<u8>>,
    pub byte_order: ByteOrder,
}

impl EncodedEntry {
    /// Stores the offset of the payload in the record
    pub fn set_offset(&mut self, offset: u32) {
        let conv = Converter::new(ByteOrder::NATIVE, self.byte_order);
        put(&mut self.record, 8, &conv.bytes(offset));
    }

    pub fn payload_len(&self) -> usize {
        self.payload.as_ref().map_or(0, Vec::len)
    }
}

fn put(record: &mut [u8; ENTRY_LEN], at: usize, bytes: &[u8]) {
    for (dst, src) in record.iter_mut().skip(at).zip(bytes) {
        *dst = *src;
    }
}
