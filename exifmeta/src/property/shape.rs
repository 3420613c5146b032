use exifmeta_common::rational::URational;

use super::{RawField, Wire};
use crate::error::Result;
use crate::internal::WireType;

/// Location and area of the main subject
///
/// The shape is given by the number of values alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectArea {
    Point {
        x: u16,
        y: u16,
    },
    Circle {
        x: u16,
        y: u16,
        diameter: u16,
    },
    Rectangle {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
}

impl SubjectArea {
    /// Shape from two, three or four values
    ///
    /// ```
    /// # use exifmeta::property::SubjectArea;
    /// assert_eq!(
    ///     SubjectArea::from_values(&[10, 20, 5]),
    ///     Some(SubjectArea::Circle { x: 10, y: 20, diameter: 5 })
    /// );
    /// assert_eq!(SubjectArea::from_values(&[1]), None);
    /// ```
    pub fn from_values(values: &[u16]) -> Option<Self> {
        match *values {
            [x, y] => Some(Self::Point { x, y }),
            [x, y, diameter] => Some(Self::Circle { x, y, diameter }),
            [x, y, width, height] => Some(Self::Rectangle {
                x,
                y,
                width,
                height,
            }),
            _ => None,
        }
    }

    pub fn values(&self) -> Vec<u16> {
        match *self {
            Self::Point { x, y } => vec![x, y],
            Self::Circle { x, y, diameter } => vec![x, y, diameter],
            Self::Rectangle {
                x,
                y,
                width,
                height,
            } => vec![x, y, width, height],
        }
    }

    pub(crate) fn decode(raw: &RawField) -> Result<Self> {
        raw.expect_type(&[WireType::Short])?;
        Self::from_values(&raw.u16s()?).ok_or_else(|| raw.invalid_count())
    }

    /// `SubjectLocation` is always a point
    pub(crate) fn decode_point(raw: &RawField) -> Result<Self> {
        raw.expect_count(2)?;
        Self::decode(raw)
    }

    pub(crate) fn to_wire(&self) -> Result<Wire> {
        Wire::from_values(WireType::Short, &self.values())
    }
}

/// Focal length and f-number range of the lens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LensSpecification {
    pub min_focal_length: URational,
    pub max_focal_length: URational,
    pub min_f_number: URational,
    pub max_f_number: URational,
}

impl LensSpecification {
    pub(crate) fn decode(raw: &RawField) -> Result<Self> {
        raw.expect_type(&[WireType::Rational])?;
        raw.expect_count(4)?;

        let [min_focal_length, max_focal_length, min_f_number, max_f_number] = raw
            .urationals()?
            .try_into()
            .map_err(|_| raw.invalid_count())?;

        Ok(Self {
            min_focal_length,
            max_focal_length,
            min_f_number,
            max_f_number,
        })
    }

    pub(crate) fn to_wire(&self) -> Result<Wire> {
        Wire::rationals(&[
            self.min_focal_length,
            self.max_focal_length,
            self.min_f_number,
            self.max_f_number,
        ])
    }
}
