use exifmeta_common::geography::Coord;
use exifmeta_common::rational::URational;

use super::{RawField, Wire};
use crate::error::Result;
use crate::internal::WireType;

/// Latitude or longitude as degrees, minutes and seconds
///
/// The hemisphere is stored in a separate reference field.
///
/// ```
/// # use exifmeta::property::GpsCoordinate;
/// # use exifmeta_common::rational::URational;
/// let coord = GpsCoordinate {
///     degrees: URational::new(46, 1),
///     minutes: URational::new(30, 1),
///     seconds: URational::new(0, 1),
/// };
/// assert_eq!(coord.to_coord().unwrap().0, 46.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GpsCoordinate {
    pub degrees: URational,
    pub minutes: URational,
    pub seconds: URational,
}

impl GpsCoordinate {
    /// Decimal degrees without hemisphere
    pub fn to_coord(&self) -> Result<Coord> {
        Ok(Coord::from_deg_min_sec(self.deg_min_sec()?))
    }

    pub fn deg_min_sec(&self) -> Result<(f64, f64, f64)> {
        Ok((
            self.degrees.to_f64()?,
            self.minutes.to_f64()?,
            self.seconds.to_f64()?,
        ))
    }

    pub(crate) fn decode(raw: &RawField) -> Result<Self> {
        let [degrees, minutes, seconds] = three_rationals(raw)?;
        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    pub(crate) fn to_wire(&self) -> Result<Wire> {
        Wire::rationals(&[self.degrees, self.minutes, self.seconds])
    }
}

/// UTC time of day of the GPS fix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GpsTimeStamp {
    pub hours: URational,
    pub minutes: URational,
    pub seconds: URational,
}

impl GpsTimeStamp {
    /// Seconds since midnight
    ///
    /// ```
    /// # use exifmeta::property::GpsTimeStamp;
    /// # use exifmeta_common::rational::URational;
    /// let time = GpsTimeStamp {
    ///     hours: URational::new(1, 1),
    ///     minutes: URational::new(2, 1),
    ///     seconds: URational::new(7, 2),
    /// };
    /// assert_eq!(time.to_seconds().unwrap(), 3723.5);
    /// ```
    pub fn to_seconds(&self) -> Result<f64> {
        let hours = self.hours.to_f64()?;
        let minutes = self.minutes.to_f64()?;
        let seconds = self.seconds.to_f64()?;
        Ok(hours * 3600. + minutes * 60. + seconds)
    }

    pub(crate) fn decode(raw: &RawField) -> Result<Self> {
        let [hours, minutes, seconds] = three_rationals(raw)?;
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    pub(crate) fn to_wire(&self) -> Result<Wire> {
        Wire::rationals(&[self.hours, self.minutes, self.seconds])
    }
}

fn three_rationals(raw: &RawField) -> Result<[URational; 3]> {
    raw.expect_type(&[WireType::Rational])?;
    raw.expect_count(3)?;

    raw.urationals()?
        .try_into()
        .map_err(|_| raw.invalid_count())
}

