mod debug;
mod decode;
mod encode;

use encoding_rs::Encoding;
use exifmeta_common::exif::{Field, Ifd, TagId};
use exifmeta_common::field;
use exifmeta_common::geography::{Coord, Location};

pub use decode::{decode_ifd, read_header, DecodedIfd};
pub use encode::{encode_properties, write_ifd};

use crate::internal::ByteOrder;
use crate::property::*;

/// Length of the TIFF header
pub const HEADER_LEN: u32 = 8;

#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Charset for `ASCII` fields, which often contain other encodings
    pub encoding: &'static Encoding,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
        }
    }
}

/// Properties of all IFDs in a TIFF structured Exif blob
///
/// IFD pointers and the thumbnail location are not kept as properties. They
/// are recreated by [`Directory::encode`].
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    pub byte_order: ByteOrder,
    pub properties: Vec<Property>,
    pub thumbnail: Option<Thumbnail>,
}

impl Directory {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            properties: Vec::new(),
            thumbnail: None,
        }
    }

    pub fn get(&self, tag: impl Into<TagId>) -> Option<&Property> {
        let tag = tag.into();
        self.properties.iter().find(|x| x.tag == tag)
    }

    pub fn value(&self, tag: impl Into<TagId>) -> Option<&Value> {
        self.get(tag).map(|x| &x.value)
    }

    /// Replaces an existing property with the same tag
    pub fn set(&mut self, property: Property) {
        if let Some(existing) = self.properties.iter_mut().find(|x| x.tag == property.tag) {
            *existing = property;
        } else {
            self.properties.push(property);
        }
    }

    pub fn remove(&mut self, tag: impl Into<TagId>) -> Option<Property> {
        let tag = tag.into();
        let index = self.properties.iter().position(|x| x.tag == tag)?;
        Some(self.properties.remove(index))
    }

    pub fn in_ifd(&self, ifd: Ifd) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(move |x| x.tag.ifd == ifd)
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match self.value(field::Orientation)?.as_enum()? {
            EnumValue::Orientation(orientation) => Some(orientation),
            _ => None,
        }
    }

    /// GPS location with hemispheres applied
    ///
    /// A missing reference is treated as north or east.
    pub fn location(&self) -> Option<Location> {
        let lat = self.deg_min_sec(field::GPSLatitude::ID)?;
        let lon = self.deg_min_sec(field::GPSLongitude::ID)?;

        let lat_sign = match self.value(field::GPSLatitudeRef).and_then(Value::as_enum) {
            Some(EnumValue::GpsLatitudeRef(x)) => x.sign(),
            _ => 1.,
        };
        let lon_sign = match self.value(field::GPSLongitudeRef).and_then(Value::as_enum) {
            Some(EnumValue::GpsLongitudeRef(x)) => x.sign(),
            _ => 1.,
        };

        Some(Location::new_from_coord(
            Coord::from_sign_deg_min_sec(lat_sign, lat),
            Coord::from_sign_deg_min_sec(lon_sign, lon),
        ))
    }

    fn deg_min_sec(&self, tag: TagId) -> Option<(f64, f64, f64)> {
        match self.value(tag)? {
            Value::GpsCoordinate(x) => x.deg_min_sec().ok(),
            _ => None,
        }
    }
}
