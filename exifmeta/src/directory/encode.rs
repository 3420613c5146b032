use exifmeta_common::byte_order::Converter;
use exifmeta_common::exif::{Ifd, Tag};
use exifmeta_common::math::*;

use super::{Directory, HEADER_LEN};
use crate::error::Result;
use crate::internal::{ByteOrder, EncodedEntry, Entry, WireType, ENTRY_LEN};
use crate::property::{Property, Thumbnail};

/// Encodes properties as directory entries for a file in `byte_order`
pub fn encode_properties(
    properties: &[Property],
    byte_order: ByteOrder,
) -> Result<Vec<EncodedEntry>> {
    properties
        .iter()
        .map(|property| property.to_entry()?.encode(byte_order))
        .collect()
}

/// Writes one IFD block that will be placed at `ifd_offset`
///
/// The block consists of the number of entries, the entries sorted by tag,
/// the offset of the next IFD and the payloads that don't fit into the
/// entries. Payloads start at word boundaries.
pub fn write_ifd(
    entries: &[EncodedEntry],
    ifd_offset: u32,
    next_ifd: u32,
    byte_order: ByteOrder,
) -> Result<Vec<u8>> {
    let conv = Converter::new(ByteOrder::NATIVE, byte_order);

    let mut entries = entries.to_vec();
    entries.sort_by_key(|x| x.tag);

    let mut payloads = Vec::new();
    let mut payload_offset = ifd_offset.safe_add(table_len(entries.len())?)?;
    for entry in &mut entries {
        let Some(len) = entry.payload.as_ref().map(Vec::len) else {
            continue;
        };
        entry.set_offset(payload_offset);
        payloads.extend(entry.payload.iter().flatten());
        if len % 2 == 1 {
            payloads.push(0);
        }
        payload_offset = payload_offset.safe_add(padded_len(len)?)?;
    }

    let mut out = conv.bytes(entries.len().u16()?);
    for entry in &entries {
        out.extend_from_slice(&entry.record);
    }
    out.extend(conv.bytes(next_ifd));
    out.extend(payloads);

    Ok(out)
}

/// Size of the block written by [`write_ifd`]
fn block_len(entries: &[EncodedEntry]) -> Result<u32> {
    entries.iter().try_fold(table_len(entries.len())?, |len, entry| {
        Ok(len.safe_add(padded_len(entry.payload_len())?)?)
    })
}

/// Entry count, entries and next IFD offset
fn table_len(n_entries: usize) -> Result<u32> {
    Ok(n_entries.safe_mul(ENTRY_LEN)?.safe_add(6)?.u32()?)
}

fn padded_len(len: usize) -> Result<u32> {
    Ok(len.safe_add(len % 2)?.u32()?)
}

fn long_entry(tag: Tag, value: u32, byte_order: ByteOrder) -> Result<EncodedEntry> {
    Entry::new(tag, WireType::Long, 1, value.to_ne_bytes().to_vec())?.encode(byte_order)
}

fn set_pointer(entries: &mut [EncodedEntry], tag: Tag, offset: u32) {
    if let Some(entry) = entries.iter_mut().find(|x| x.tag == tag) {
        entry.set_offset(offset);
    }
}

impl Directory {
    /// Encode as TIFF structured Exif blob
    ///
    /// The IFDs are written in the order primary, Exif, Interoperability,
    /// GPS and thumbnail, followed by the thumbnail data. IFD pointers and the
    /// thumbnail location are generated.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let byte_order = self.byte_order;

        let mut primary = self.encode_ifd_properties(Ifd::Primary)?;
        let mut exif = self.encode_ifd_properties(Ifd::Exif)?;
        let gps = self.encode_ifd_properties(Ifd::Gps)?;
        let interop = self.encode_ifd_properties(Ifd::Interoperability)?;
        let mut thumbnail = self.encode_ifd_properties(Ifd::Thumbnail)?;
        let thumbnail_data = self.thumbnail.as_ref().map(Thumbnail::to_bytes).transpose()?;

        // Pointer values don't change the layout, they are set after it's known
        if !interop.is_empty() {
            exif.push(long_entry(Tag::INTEROPERABILITY_IFD_POINTER, 0, byte_order)?);
        }
        if !exif.is_empty() {
            primary.push(long_entry(Tag::EXIF_IFD_POINTER, 0, byte_order)?);
        }
        if !gps.is_empty() {
            primary.push(long_entry(Tag::GPS_INFO_IFD_POINTER, 0, byte_order)?);
        }
        if let Some(data) = &thumbnail_data {
            thumbnail.push(long_entry(Tag::JPEG_INTERCHANGE_FORMAT, 0, byte_order)?);
            thumbnail.push(long_entry(
                Tag::JPEG_INTERCHANGE_FORMAT_LENGTH,
                data.len().u32()?,
                byte_order,
            )?);
        }

        let primary_offset = HEADER_LEN;
        let exif_offset = primary_offset.safe_add(block_len(&primary)?)?;
        let interop_offset = exif_offset.safe_add(optional_block_len(&exif)?)?;
        let gps_offset = interop_offset.safe_add(optional_block_len(&interop)?)?;
        let thumbnail_offset = gps_offset.safe_add(optional_block_len(&gps)?)?;
        let thumbnail_data_offset = thumbnail_offset.safe_add(optional_block_len(&thumbnail)?)?;

        set_pointer(&mut primary, Tag::EXIF_IFD_POINTER, exif_offset);
        set_pointer(&mut primary, Tag::GPS_INFO_IFD_POINTER, gps_offset);
        set_pointer(&mut exif, Tag::INTEROPERABILITY_IFD_POINTER, interop_offset);
        set_pointer(
            &mut thumbnail,
            Tag::JPEG_INTERCHANGE_FORMAT,
            thumbnail_data_offset,
        );

        let next_ifd = if thumbnail.is_empty() {
            0
        } else {
            thumbnail_offset
        };

        let conv = Converter::new(ByteOrder::NATIVE, byte_order);
        let mut out = byte_order.marker().to_vec();
        out.extend(conv.bytes(42_u16));
        out.extend(conv.bytes(primary_offset));

        out.extend(write_ifd(&primary, primary_offset, next_ifd, byte_order)?);
        for (entries, offset) in [
            (&exif, exif_offset),
            (&interop, interop_offset),
            (&gps, gps_offset),
            (&thumbnail, thumbnail_offset),
        ] {
            if !entries.is_empty() {
                out.extend(write_ifd(entries, offset, 0, byte_order)?);
            }
        }

        if let Some(data) = thumbnail_data {
            out.extend(data);
        }

        tracing::debug!("Encoded {} properties into {} bytes", self.properties.len(), out.len());

        Ok(out)
    }

    fn encode_ifd_properties(&self, ifd: Ifd) -> Result<Vec<EncodedEntry>> {
        let has_thumbnail = self.thumbnail.is_some();
        let properties = self
            .in_ifd(ifd)
            .filter(|x| !x.tag.tag.is_exif_specific_ifd())
            .filter(|x| {
                !(has_thumbnail
                    && ifd == Ifd::Thumbnail
                    && matches!(
                        x.tag.tag,
                        Tag::JPEG_INTERCHANGE_FORMAT | Tag::JPEG_INTERCHANGE_FORMAT_LENGTH
                    ))
            })
            .cloned()
            .collect::<Vec<_>>();

        encode_properties(&properties, self.byte_order)
    }
}

fn optional_block_len(entries: &[EncodedEntry]) -> Result<u32> {
    if entries.is_empty() {
        Ok(0)
    } else {
        block_len(entries)
    }
}
