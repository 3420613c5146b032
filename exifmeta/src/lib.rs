//! Typed Exif properties
//!
//! Decodes the tagged fields of TIFF structured Exif data into typed
//! [`property::Value`]s and encodes them back into the exact binary layout.
//!
//! ```
//! use exifmeta::property::*;
//! use exifmeta::{DecodeOptions, Directory};
//! use exifmeta_common::field;
//! use exifmeta_common::byte_order::ByteOrder;
//!
//! let mut directory = Directory::new(ByteOrder::LittleEndian);
//! directory.set(Property::new(field::Orientation, Orientation::Rotation90.into()));
//!
//! let data = directory.encode().unwrap();
//! let decoded = Directory::decode(&data, &DecodeOptions::default()).unwrap();
//! assert_eq!(decoded.orientation(), Some(Orientation::Rotation90));
//! ```

mod directory;
pub mod error;
pub mod factory;
pub mod internal;
pub mod property;

pub use directory::*;
pub use error::{Error, Result};
