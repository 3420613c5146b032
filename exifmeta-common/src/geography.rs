#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub lat: Coord,
    pub lon: Coord,
}

impl Location {
    pub fn new_from_coord(lat: Coord, lon: Coord) -> Self {
        Self { lat, lon }
    }

    /// Return coordinate according to ISO 6709 Annex D
    ///
    /// <https://en.wikipedia.org/wiki/ISO_6709>
    ///
    /// ```
    /// # use exifmeta_common::geography::*;
    /// let lat = Coord::from_deg_min_sec((-46., 14., 6.));
    /// let lon = Coord::from_deg_min_sec((126., 4., 6.70234));
    /// let loc = Location::new_from_coord(lat, lon);
    /// assert_eq!(loc.iso_6709(), r#"46°14'06"S 126°04'06.7"E"#);
    /// ```
    pub fn iso_6709(&self) -> String {
        let (lat_deg, lat_min, lat_sec) = self.lat.as_deg_min_sec();
        let (lon_deg, lon_min, lon_sec) = self.lon.as_deg_min_sec();

        let lat_ref = if lat_deg.is_sign_negative() { 'S' } else { 'N' };
        let lon_ref = if lon_deg.is_sign_negative() { 'W' } else { 'E' };

        fn pad_one_0(v: f64) -> String {
            let s = format!("{v}");

            let pre_decimal = s.split_once('.').map_or(s.as_str(), |x| x.0);

            if pre_decimal.len() == 1 {
                format!("0{s}")
            } else {
                s
            }
        }

        let lat_deg = lat_deg.abs();
        let lon_deg = lon_deg.abs();
        let lat_sec = pad_one_0(lat_sec);
        let lon_sec = pad_one_0(lon_sec);

        format!("{lat_deg}°{lat_min:02}'{lat_sec}\"{lat_ref} {lon_deg}°{lon_min:02}'{lon_sec}\"{lon_ref}")
    }
}

/// Angle in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord(pub f64);

impl Coord {
    /// Return coordinate as degrees, minutes, seconds
    ///
    /// ```
    /// # use exifmeta_common::geography::*;
    /// let ang = Coord::from_deg_min_sec((-46., 14., 6.70));
    /// assert_eq!(ang.as_deg_min_sec(), (-46., 14., 6.70));
    /// ```
    pub fn as_deg_min_sec(&self) -> (f64, f64, f64) {
        let deg = self.0;
        let h = deg.fract().abs() * 60.;
        let s = h.fract() * 60.;

        (deg.trunc(), h.trunc(), (s * 100.).round() / 100.)
    }

    /// ```
    /// # use exifmeta_common::geography::*;
    /// let ang = Coord::from_deg_min_sec((-89., 24., 2.2));
    /// assert_eq!((ang.0 * 100_000.).round() / 100_000., -89.40061);
    /// ```
    pub fn from_deg_min_sec((deg, min, sec): (f64, f64, f64)) -> Self {
        let sign = deg.signum();
        Coord(deg + sign * min / 60. + sign * sec / 60. / 60.)
    }

    /// Coordinate from unsigned degrees, minutes, seconds and a sign of `1.`
    /// or `-1.`
    ///
    /// ```
    /// # use exifmeta_common::geography::*;
    /// let ang = Coord::from_sign_deg_min_sec(-1., (89., 24., 2.2));
    /// assert_eq!((ang.0 * 100_000.).round() / 100_000., -89.40061);
    /// ```
    pub fn from_sign_deg_min_sec(sign: f64, deg_min_sec: (f64, f64, f64)) -> Self {
        Self(sign * Self::from_deg_min_sec(deg_min_sec).0)
    }
}
