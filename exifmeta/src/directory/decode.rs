use std::collections::HashSet;

use encoding_rs::Encoding;
use exifmeta_common::byte_order::Converter;
use exifmeta_common::exif::{Ifd, TagId};
use exifmeta_common::field;
use exifmeta_common::math::*;

use super::{DecodeOptions, Directory};
use crate::error::{Error, Result, ResultExt};
use crate::factory;
use crate::internal::{ByteOrder, EntryRef, ValueOffset, WireType, ENTRY_LEN};
use crate::property::{Property, Thumbnail};

/// Byte order and offset of the first IFD from the TIFF header
///
/// ```
/// # use exifmeta::{read_header, internal::ByteOrder};
/// let header = [b'M', b'M', 0, 42, 0, 0, 0, 8];
/// assert_eq!(read_header(&header).unwrap(), (ByteOrder::BigEndian, 8));
/// ```
pub fn read_header(data: &[u8]) -> Result<(ByteOrder, u32)> {
    let marker: [u8; 2] = data
        .get(0..2)
        .and_then(|x| x.try_into().ok())
        .e(Error::HeaderEof)?;
    let byte_order = ByteOrder::from_marker(marker).e(Error::UnknownByteOrder(marker))?;

    let conv = Converter::to_native(byte_order);
    match conv.read::<u16>(data, 2).e(Error::HeaderEof)? {
        42 => {}
        magic => return Err(Error::MagicBytesWrong(magic)),
    }

    let offset = conv.read::<u32>(data, 4).e(Error::HeaderEof)?;

    Ok((byte_order, offset))
}

/// Content of a single IFD
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedIfd {
    pub ifd: Ifd,
    pub properties: Vec<Property>,
    /// Exif specific IFDs referenced from this IFD with their offsets
    pub sub_ifds: Vec<(Ifd, u32)>,
    /// Offset of the next IFD, zero if there is none
    pub next_ifd: u32,
}

/// Decodes the IFD at `offset`
///
/// Entries that can't be decoded are skipped. Offsets are relative to the
/// start of `data`.
pub fn decode_ifd(
    data: &[u8],
    offset: u32,
    ifd: Ifd,
    byte_order: ByteOrder,
    encoding: &'static Encoding,
) -> Result<DecodedIfd> {
    let conv = Converter::to_native(byte_order);
    let position = offset.usize()?;

    let n_entries = conv.read::<u16>(data, position).e(Error::IfdNumEntriesEof)?;
    tracing::debug!("Reading IFD '{ifd:?}' with {n_entries} entries at byte {position}");

    let mut properties = Vec::new();
    let mut sub_ifds = Vec::new();
    let mut entry_position = position.safe_add(2)?;

    for _ in 0..n_entries {
        let position = entry_position;
        entry_position = entry_position.safe_add(ENTRY_LEN)?;

        let entry = match EntryRef::read(data, position, byte_order) {
            Ok(entry) => entry,
            Err(err @ Error::EntryEof) => return Err(err),
            Err(err) => {
                tracing::info!("Skipping entry at byte {position}: {err}");
                continue;
            }
        };

        if let Some(sub_ifd) = entry.tag.exif_specific_ifd() {
            match pointer(&entry, conv) {
                Some(offset) => sub_ifds.push((sub_ifd, offset)),
                None => tracing::info!("Invalid pointer to IFD '{sub_ifd:?}'"),
            }
            continue;
        }

        let id = TagId::new(ifd, entry.tag);
        let property = entry.data(data).and_then(|value| {
            factory::dispatch(
                ifd,
                entry.tag,
                entry.wire_type,
                entry.count,
                value,
                byte_order,
                encoding,
            )
        });

        match property {
            Ok(property) => properties.push(property),
            Err(err) => tracing::info!("Skipping '{}': {err}", id.long_name()),
        }
    }

    tracing::debug!("All entries in IFD '{ifd:?}' read");

    let next_ifd = conv.read::<u32>(data, entry_position).e(Error::NextIfdEof)?;

    Ok(DecodedIfd {
        ifd,
        properties,
        sub_ifds,
        next_ifd,
    })
}

fn pointer(entry: &EntryRef, conv: Converter) -> Option<u32> {
    match (entry.wire_type, entry.count, entry.value_offset) {
        (WireType::Long, 1, ValueOffset::Value(field)) => conv.read::<u32>(&field, 0).ok(),
        (WireType::Short, 1, ValueOffset::Value(field)) => {
            conv.read::<u16>(&field, 0).ok().map(u32::from)
        }
        _ => None,
    }
}

impl Directory {
    /// Decode a TIFF structured Exif blob
    ///
    /// The blob starts with the TIFF header, without the `Exif\0\0` prefix
    /// used in JPEG files. Only a broken header or primary IFD fails the
    /// decoding. Other IFDs and single properties are skipped if they can't
    /// be read.
    pub fn decode(data: &[u8], options: &DecodeOptions) -> Result<Self> {
        let (byte_order, offset) = read_header(data)?;

        let mut walker = Walker {
            data,
            byte_order,
            encoding: options.encoding,
            visited_offsets: HashSet::new(),
            visited_ifds: HashSet::new(),
            properties: Vec::new(),
        };

        let next_ifd = walker.walk(Ifd::Primary, offset)?;
        if next_ifd != 0 {
            walker.walk_error_silenced(Ifd::Thumbnail, next_ifd);
        }

        let mut directory = Self {
            byte_order,
            properties: walker.properties,
            thumbnail: None,
        };
        directory.extract_thumbnail(data);

        Ok(directory)
    }

    /// Moves JPEG thumbnail data out of the blob
    fn extract_thumbnail(&mut self, data: &[u8]) {
        let offset = self
            .value(field::ThumbnailJPEGInterchangeFormat)
            .and_then(|x| x.as_u32());
        let len = self
            .value(field::ThumbnailJPEGInterchangeFormatLength)
            .and_then(|x| x.as_u32());

        let (Some(offset), Some(len)) = (offset, len) else {
            return;
        };

        let thumbnail = offset
            .safe_add(len)
            .ok()
            .and_then(|end| data.get(offset.usize().ok()?..end.usize().ok()?));

        match thumbnail {
            Some(thumbnail) => {
                tracing::debug!("Thumbnail with {len} bytes at byte {offset}");
                self.thumbnail = Some(Thumbnail::from_bytes(thumbnail.to_vec()));
                self.remove(field::ThumbnailJPEGInterchangeFormat);
                self.remove(field::ThumbnailJPEGInterchangeFormatLength);
            }
            None => {
                tracing::info!("Thumbnail with {len} bytes at byte {offset} is out of bounds");
            }
        }
    }
}

struct Walker<'a> {
    data: &'a [u8],
    byte_order: ByteOrder,
    encoding: &'static Encoding,
    visited_offsets: HashSet<u32>,
    visited_ifds: HashSet<Ifd>,
    properties: Vec<Property>,
}

impl Walker<'_> {
    /// Reads IFD and its sub IFDs, returns the offset of the next IFD
    fn walk(&mut self, ifd: Ifd, offset: u32) -> Result<u32> {
        if !self.visited_ifds.insert(ifd) {
            tracing::info!("IFD '{ifd:?}' exists twice");
            return Ok(0);
        }
        if !self.visited_offsets.insert(offset) {
            tracing::info!("IFD '{ifd:?}' points to already read byte {offset}");
            return Ok(0);
        }

        let decoded = decode_ifd(self.data, offset, ifd, self.byte_order, self.encoding)?;
        self.properties.extend(decoded.properties);

        for (sub_ifd, offset) in decoded.sub_ifds {
            tracing::debug!("Reading Exif specific IFD '{sub_ifd:?}'");
            self.walk_error_silenced(sub_ifd, offset);
        }

        Ok(decoded.next_ifd)
    }

    /// Sometimes, not all IFD locations are actually valid
    fn walk_error_silenced(&mut self, ifd: Ifd, offset: u32) {
        if let Err(err) = self.walk(ifd, offset) {
            tracing::info!("Failed to load IFD '{ifd:?}': {err}");
        }
    }
}
