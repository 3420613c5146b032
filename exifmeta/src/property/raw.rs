use encoding_rs::Encoding;
use exifmeta_common::byte_order::{ByteOrder, Converter, Endian};
use exifmeta_common::exif::TagId;
use exifmeta_common::math::*;
use exifmeta_common::rational::{SRational, URational};

use crate::error::{Error, Result};
use crate::internal::WireType;

/// Field value as found in a directory, not yet interpreted
#[derive(Debug, Clone, Copy)]
pub struct RawField<'a> {
    pub tag: TagId,
    pub wire_type: WireType,
    pub count: u32,
    /// Value bytes in `byte_order`
    pub data: &'a [u8],
    pub byte_order: ByteOrder,
    /// Charset for text fields that don't declare one
    pub encoding: &'static Encoding,
}

impl<'a> RawField<'a> {
    /// Checks that `data` holds exactly `count` elements of `wire_type`
    pub fn validate(&self) -> Result<()> {
        let expected = self.count.safe_mul(self.wire_type.size()?)?.usize()?;
        if self.data.len() == expected {
            Ok(())
        } else {
            Err(Error::DataLengthMismatch {
                expected,
                actual: self.data.len(),
            })
        }
    }

    pub fn expect_count(&self, count: u32) -> Result<()> {
        if self.count == count {
            Ok(())
        } else {
            Err(self.invalid_count())
        }
    }

    pub fn expect_type(&self, wire_types: &[WireType]) -> Result<()> {
        if wire_types.contains(&self.wire_type) {
            Ok(())
        } else {
            Err(self.unexpected_type())
        }
    }

    pub(crate) fn invalid_count(&self) -> Error {
        Error::InvalidCount {
            tag: self.tag,
            count: self.count,
        }
    }

    pub(crate) fn unexpected_type(&self) -> Error {
        Error::UnexpectedWireType {
            tag: self.tag,
            wire_type: self.wire_type,
        }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn i8s(&self) -> Result<Vec<i8>> {
        self.read(self.len()?)
    }

    pub fn u16s(&self) -> Result<Vec<u16>> {
        self.read(self.len()?)
    }

    pub fn i16s(&self) -> Result<Vec<i16>> {
        self.read(self.len()?)
    }

    pub fn u32s(&self) -> Result<Vec<u32>> {
        self.read(self.len()?)
    }

    pub fn i32s(&self) -> Result<Vec<i32>> {
        self.read(self.len()?)
    }

    pub fn f32s(&self) -> Result<Vec<f32>> {
        self.read(self.len()?)
    }

    pub fn f64s(&self) -> Result<Vec<f64>> {
        self.read(self.len()?)
    }

    /// Numerator and denominator are converted individually
    pub fn urationals(&self) -> Result<Vec<URational>> {
        let values = self.read::<u32>(self.len()?.safe_mul(2)?)?;
        Ok(values
            .chunks_exact(2)
            .filter_map(|x| match x {
                [numerator, denominator] => Some(URational::new(*numerator, *denominator)),
                _ => None,
            })
            .collect())
    }

    pub fn srationals(&self) -> Result<Vec<SRational>> {
        let values = self.read::<i32>(self.len()?.safe_mul(2)?)?;
        Ok(values
            .chunks_exact(2)
            .filter_map(|x| match x {
                [numerator, denominator] => Some(SRational::new(*numerator, *denominator)),
                _ => None,
            })
            .collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.count.usize()?)
    }

    fn read<T: Endian>(&self, n: usize) -> Result<Vec<T>> {
        Ok(Converter::to_native(self.byte_order).read_array(self.data, n)?)
    }
}
