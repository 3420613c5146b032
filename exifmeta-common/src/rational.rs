use crate::math::{MathError, SafeDiv};

/// Unsigned fraction as stored in `RATIONAL` fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct URational {
    pub numerator: u32,
    pub denominator: u32,
}

impl URational {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Value as float
    ///
    /// ```
    /// # use exifmeta_common::rational::URational;
    /// assert_eq!(URational::new(1, 4).to_f64().unwrap(), 0.25);
    /// assert!(URational::new(1, 0).to_f64().is_err());
    /// ```
    pub fn to_f64(self) -> Result<f64, MathError> {
        f64::from(self.numerator).safe_div(f64::from(self.denominator))
    }
}

impl From<(u32, u32)> for URational {
    fn from((numerator, denominator): (u32, u32)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl std::fmt::Display for URational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Signed fraction as stored in `SRATIONAL` fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl SRational {
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn to_f64(self) -> Result<f64, MathError> {
        f64::from(self.numerator).safe_div(f64::from(self.denominator))
    }
}

impl From<(i32, i32)> for SRational {
    fn from((numerator, denominator): (i32, i32)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl std::fmt::Display for SRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
