//! # Angle Representation Module
//!
//! An [`Angle`] keeps the value in the unit it was built from, so a longitude
//! produced by a degree-based series and an arc built from `atan2` both come
//! back out exactly as they went in. Conversion only happens when the other
//! unit is asked for.
//!
//! The free functions [`reduce_degrees`] and [`reduce_radians`] fold any finite
//! value into the half-open principal range of a full turn. Every periodic
//! argument in the crate passes through one of them.
//!
//! ## Examples
//!
//! ```rust
//! use moonfield::coordinates::angle::{reduce_degrees, Angle};
//!
//! let angle = Angle::from_degrees(-30.0);
//! assert_eq!(angle.reduced().to_degrees(), 330.0);
//! assert_eq!(reduce_degrees(720.0), 0.0);
//! ```

use crate::constants::{DEG2RAD, RAD2DEG, TAU};

/// Reduce a value in degrees to the range [0, 360)
///
/// Negative inputs wrap upward, exact multiples of 360 map to 0.
pub fn reduce_degrees(degrees: f64) -> f64 {
    let r = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Reduce a value in radians to the range [0, 2π)
pub fn reduce_radians(radians: f64) -> f64 {
    let r = radians.rem_euclid(TAU);
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement that remembers the unit it was created in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    ///
    /// ```rust
    /// use moonfield::coordinates::angle::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert_eq!(right_angle.to_degrees(), 90.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Returns the angle value in degrees
    ///
    /// Exact when the angle was created from degrees.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * RAD2DEG,
        }
    }

    /// Returns the angle value in radians
    ///
    /// Exact when the angle was created from radians.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * DEG2RAD,
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// The same direction folded into one full turn, keeping the storage unit
    pub fn reduced(&self) -> Self {
        match self.angle {
            AngleFormat::Degrees(deg) => Angle::from_degrees(reduce_degrees(deg)),
            AngleFormat::Radians(rad) => Angle::from_radians(reduce_radians(rad)),
        }
    }

    pub fn sin(&self) -> f64 {
        self.to_radians().sin()
    }

    pub fn cos(&self) -> f64 {
        self.to_radians().cos()
    }

    /// Returns the internal format of this angle
    pub fn format(&self) -> AngleFormat {
        self.angle
    }
}
