use exifmeta_common::utils::convertible_enum;

use super::Wire;
use crate::error::{Error, Result};
use crate::internal::WireType;

const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

convertible_enum!(
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum RasterKind {
        /// Uncompressed RGB
        Bitmap24 = 1,
        /// Indexed colors with a palette table
        PaletteBitmap = 2,
        Jpeg = 3,
    }
);

/// Embedded preview image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub kind: RasterKind,
    /// Only used for [`RasterKind::PaletteBitmap`]
    pub palette: Vec<u8>,
    pub data: Vec<u8>,
}

impl Thumbnail {
    pub fn new(kind: RasterKind, data: Vec<u8>) -> Self {
        Self {
            kind,
            palette: Vec::new(),
            data,
        }
    }

    pub fn palette_bitmap(palette: Vec<u8>, data: Vec<u8>) -> Self {
        Self {
            kind: RasterKind::PaletteBitmap,
            palette,
            data,
        }
    }

    /// Classifies embedded data as JPEG if it starts with an SOI marker
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let kind = if data.starts_with(&JPEG_SOI) {
            RasterKind::Jpeg
        } else {
            RasterKind::Bitmap24
        };

        Self::new(kind, data)
    }

    /// Stored bytes, the palette table precedes the data for palette bitmaps
    ///
    /// ```
    /// # use exifmeta::property::Thumbnail;
    /// let thumbnail = Thumbnail::palette_bitmap(vec![1, 2], vec![3]);
    /// assert_eq!(thumbnail.to_bytes().unwrap(), vec![1, 2, 3]);
    /// ```
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self.kind {
            RasterKind::PaletteBitmap => {
                let mut bytes = self.palette.clone();
                bytes.extend_from_slice(&self.data);
                Ok(bytes)
            }
            RasterKind::Bitmap24 | RasterKind::Jpeg => Ok(self.data.clone()),
            RasterKind::Unknown(kind) => Err(Error::UnknownRasterKind(kind)),
        }
    }

    pub(crate) fn to_wire(&self) -> Result<Wire> {
        Wire::new(WireType::Undefined, self.to_bytes()?)
    }
}
