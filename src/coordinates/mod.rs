//! Geocentric coordinate systems used by the lunar model
//!
//! Positions come out of the series as ecliptic longitude and latitude and are
//! rotated into right ascension and declination through the obliquity of the
//! date.

pub mod angle;

use angle::Angle;

/// Ecliptic coordinates (longitude/latitude) of date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecliptic {
    pub longitude: Angle,
    pub latitude: Angle,
}

/// Equatorial coordinates (RA/Dec) of date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    /// Right ascension, reduced to [0, 360) degrees
    pub right_ascension: Angle,
    pub declination: Angle,
}

impl Ecliptic {
    pub fn new(longitude: Angle, latitude: Angle) -> Self {
        Ecliptic {
            longitude,
            latitude,
        }
    }

    /// Rotate about the equinox direction by the obliquity `epsilon`
    ///
    /// ```rust
    /// use moonfield::coordinates::{angle::Angle, Ecliptic};
    ///
    /// let ecl = Ecliptic::new(Angle::from_degrees(90.0), Angle::from_degrees(0.0));
    /// let eq = ecl.to_equatorial(Angle::from_degrees(23.44));
    /// assert!((eq.declination.to_degrees() - 23.44).abs() < 1e-9);
    /// ```
    pub fn to_equatorial(&self, epsilon: Angle) -> Equatorial {
        let (sin_lon, cos_lon) = (self.longitude.sin(), self.longitude.cos());
        let (sin_eps, cos_eps) = (epsilon.sin(), epsilon.cos());
        let beta = self.latitude.to_radians();

        let ra = (sin_lon * cos_eps - beta.tan() * sin_eps).atan2(cos_lon);
        let dec = (beta.sin() * cos_eps + beta.cos() * sin_eps * sin_lon).asin();

        Equatorial {
            right_ascension: Angle::from_degrees(angle::reduce_degrees(ra.to_degrees())),
            declination: Angle::from_degrees(dec.to_degrees()),
        }
    }
}
