//! Shared building blocks of `exifmeta`
//!
//! Byte order conversion, the flat tag identifier registry and the small
//! value types that do not depend on the wire format.

pub mod byte_order;
pub mod exif;
pub mod field;
pub mod geography;
pub mod math;
pub mod orientation;
pub mod rational;
pub mod utils;
