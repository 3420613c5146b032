//! Wire level building blocks

mod entry;
mod type_;

pub use entry::*;
pub use exifmeta_common::byte_order::ByteOrder;
pub use exifmeta_common::exif::{Ifd, Tag, TagId};
pub use type_::WireType;
