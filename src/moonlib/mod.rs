//! Geocentric position of the Moon
//!
//! Implements the truncated ELP-2000/82 theory from Meeus, *Astronomical
//! Algorithms* chapter 47: 60 terms each for longitude and distance, 60 for
//! latitude, plus the additive Venus, Jupiter and flattening corrections.
//! Accuracy is about 10" in longitude and 4" in latitude.
//!
//! # Example
//!
//! ```rust
//! use moonfield::moonlib::lunar_position;
//! use moonfield::time::JulianDate;
//!
//! let moon = lunar_position(JulianDate::new(2448724.5).unwrap());
//! assert!((moon.apparent_longitude.to_degrees() - 133.167).abs() < 1e-3);
//! assert!((moon.distance_km - 368409.7).abs() < 0.1);
//! ```

pub mod tables;

use crate::constants::{ASEC_PER_DEG, MEAN_LUNAR_DISTANCE_KM};
use crate::coordinates::angle::{reduce_degrees, Angle};
use crate::coordinates::{Ecliptic, Equatorial};
use crate::nutationlib::{nutation, true_obliquity, Nutation};
use crate::series::{polynomial, weighted_sum, TermTable};
use crate::time::JulianDate;
use lazy_static::lazy_static;
use tables::*;

lazy_static! {
    static ref LONGITUDE_DISTANCE_TERMS: TermTable<4, 2> = TermTable::from_columns(
        "lunar longitude/distance",
        [&LON_D, &LON_M, &LON_MP, &LON_F],
        [&LON_SIN, &DIST_COS],
    );
    static ref LATITUDE_TERMS: TermTable<4, 1> = TermTable::from_columns(
        "lunar latitude",
        [&LAT_D, &LAT_M, &LAT_MP, &LAT_F],
        [&LAT_SIN],
    );
}

// Mean argument polynomials in degrees, T in Julian centuries from J2000
const MEAN_LONGITUDE: [f64; 5] = [
    218.3164477,
    481_267.88123421,
    -0.0015786,
    1.0 / 538_841.0,
    -1.0 / 65_194_000.0,
];
const MEAN_ELONGATION: [f64; 5] = [
    297.8501921,
    445_267.1114034,
    -0.0018819,
    1.0 / 545_868.0,
    -1.0 / 113_065_000.0,
];
const SUN_MEAN_ANOMALY: [f64; 4] = [357.5291092, 35_999.0502909, -0.0001536, 1.0 / 24_490_000.0];
const MOON_MEAN_ANOMALY: [f64; 5] = [
    134.9633964,
    477_198.8675055,
    0.0087414,
    1.0 / 69_699.0,
    -1.0 / 14_712_000.0,
];
const ARGUMENT_OF_LATITUDE: [f64; 5] = [
    93.2720950,
    483_202.0175233,
    -0.0036539,
    -1.0 / 3_526_000.0,
    1.0 / 863_310_000.0,
];

/// Index of the Sun's mean anomaly among the term multipliers
const SUN_ANOMALY_COLUMN: usize = 1;

/// Fundamental arguments of the lunar theory, all reduced to [0, 360) degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanArguments {
    /// L', the Moon's mean longitude
    pub mean_longitude: f64,
    /// D, mean elongation of the Moon
    pub elongation: f64,
    /// M, the Sun's mean anomaly
    pub sun_anomaly: f64,
    /// M', the Moon's mean anomaly
    pub moon_anomaly: f64,
    /// F, the Moon's argument of latitude
    pub latitude_argument: f64,
    /// A1 (Venus)
    pub a1: f64,
    /// A2 (Jupiter)
    pub a2: f64,
    /// A3
    pub a3: f64,
}

impl MeanArguments {
    pub fn at(t: f64) -> Self {
        MeanArguments {
            mean_longitude: reduce_degrees(polynomial(&MEAN_LONGITUDE, t)),
            elongation: reduce_degrees(polynomial(&MEAN_ELONGATION, t)),
            sun_anomaly: reduce_degrees(polynomial(&SUN_MEAN_ANOMALY, t)),
            moon_anomaly: reduce_degrees(polynomial(&MOON_MEAN_ANOMALY, t)),
            latitude_argument: reduce_degrees(polynomial(&ARGUMENT_OF_LATITUDE, t)),
            a1: reduce_degrees(119.75 + 131.849 * t),
            a2: reduce_degrees(53.09 + 479_264.290 * t),
            a3: reduce_degrees(313.45 + 481_266.484 * t),
        }
    }

    /// D, M, M', F in radians, the order the term multipliers use
    fn principal_radians(&self) -> [f64; 4] {
        [
            self.elongation,
            self.sun_anomaly,
            self.moon_anomaly,
            self.latitude_argument,
        ]
        .map(f64::to_radians)
    }
}

/// Decrease of the Earth's orbital eccentricity, applied to terms containing M
pub fn eccentricity_factor(t: f64) -> f64 {
    1.0 - 0.002516 * t - 0.0000074 * t * t
}

/// Raw Σl, Σb (0.000001°) and Σr (0.001 km) including the additive terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicSums {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
}

fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

/// Evaluate the three periodic series at `t` Julian centuries from J2000
pub fn periodic_sums(t: f64) -> PeriodicSums {
    let args = MeanArguments::at(t);
    let radians = args.principal_radians();
    let e = eccentricity_factor(t);

    // Per-call copies; the shared tables stay untouched
    let by_eccentricity = |multiplier: i32| e.powi(multiplier.abs());
    let lon_dist =
        LONGITUDE_DISTANCE_TERMS.scaled(|term| by_eccentricity(term.multipliers[SUN_ANOMALY_COLUMN]));
    let lat = LATITUDE_TERMS.scaled(|term| by_eccentricity(term.multipliers[SUN_ANOMALY_COLUMN]));

    let (lp, f, mp) = (
        args.mean_longitude,
        args.latitude_argument,
        args.moon_anomaly,
    );

    let mut longitude = lon_dist.contributions(0, &radians, f64::sin);
    longitude.extend([
        3958.0 * sin_deg(args.a1),
        1962.0 * sin_deg(lp - f),
        318.0 * sin_deg(args.a2),
    ]);

    let distance = lon_dist.contributions(1, &radians, f64::cos);

    let mut latitude = lat.contributions(0, &radians, f64::sin);
    latitude.extend([
        -2235.0 * sin_deg(lp),
        382.0 * sin_deg(args.a3),
        175.0 * sin_deg(args.a1 - f),
        175.0 * sin_deg(args.a1 + f),
        127.0 * sin_deg(lp - mp),
        -115.0 * sin_deg(lp + mp),
    ]);

    let sums = PeriodicSums {
        longitude: weighted_sum(&longitude, 1.0),
        latitude: weighted_sum(&latitude, 1.0),
        distance: weighted_sum(&distance, 1.0),
    };
    log::trace!("lunar periodic sums at T={t}: {:?}", sums);
    sums
}

/// Geocentric position of the Moon for one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    pub julian_date: JulianDate,
    /// λ without nutation
    pub geometric_longitude: Angle,
    /// λ + Δψ, reduced to [0, 360)
    pub apparent_longitude: Angle,
    /// β
    pub latitude: Angle,
    /// Centre of Earth to centre of Moon
    pub distance_km: f64,
    /// True obliquity ε of the ecliptic
    pub obliquity: Angle,
    pub nutation: Nutation,
    /// Apparent right ascension and declination
    pub equatorial: Equatorial,
}

impl LunarPosition {
    /// Apparent ecliptic coordinates
    pub fn ecliptic(&self) -> Ecliptic {
        Ecliptic::new(self.apparent_longitude, self.latitude)
    }

    pub fn right_ascension(&self) -> Angle {
        self.equatorial.right_ascension
    }

    pub fn declination(&self) -> Angle {
        self.equatorial.declination
    }
}

/// Compute the apparent geocentric position of the Moon
pub fn lunar_position(jd: JulianDate) -> LunarPosition {
    let t = jd.julian_centuries();
    let args = MeanArguments::at(t);
    let sums = periodic_sums(t);

    let lambda = args.mean_longitude + sums.longitude / 1e6;
    let beta = sums.latitude / 1e6;
    let distance_km = MEAN_LUNAR_DISTANCE_KM + sums.distance / 1000.0;

    let nutation = nutation(jd);
    let apparent = reduce_degrees(lambda + nutation.longitude_arcsec / ASEC_PER_DEG);
    let epsilon = Angle::from_degrees(true_obliquity(t, &nutation));

    let ecliptic = Ecliptic::new(Angle::from_degrees(apparent), Angle::from_degrees(beta));
    let equatorial = ecliptic.to_equatorial(epsilon);

    LunarPosition {
        julian_date: jd,
        geometric_longitude: Angle::from_degrees(lambda),
        apparent_longitude: ecliptic.longitude,
        latitude: ecliptic.latitude,
        distance_km,
        obliquity: epsilon,
        nutation,
        equatorial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // Meeus example 47.a: 1992 April 12, 0h TD
    const EXAMPLE_JD: f64 = 2448724.5;

    fn example() -> LunarPosition {
        lunar_position(JulianDate::new(EXAMPLE_JD).unwrap())
    }

    #[test]
    fn test_tables_validated() {
        assert_eq!(LONGITUDE_DISTANCE_TERMS.len(), 60);
        assert_eq!(LATITUDE_TERMS.len(), 60);
        // Last longitude row only contributes to distance
        let last = LONGITUDE_DISTANCE_TERMS.terms()[59];
        assert_eq!(last.multipliers, [2, 0, -1, -2]);
        assert_eq!(last.coefficients, [0.0, 8752.0]);
    }

    #[test]
    fn test_mean_arguments() {
        let t = JulianDate::new(EXAMPLE_JD).unwrap().julian_centuries();
        let args = MeanArguments::at(t);

        assert_abs_diff_eq!(args.mean_longitude, 134.290182, epsilon = 1e-6);
        assert_abs_diff_eq!(args.elongation, 113.842304, epsilon = 1e-6);
        assert_abs_diff_eq!(args.sun_anomaly, 97.643514, epsilon = 1e-6);
        assert_abs_diff_eq!(args.moon_anomaly, 5.150833, epsilon = 1e-6);
        assert_abs_diff_eq!(args.latitude_argument, 219.889721, epsilon = 1e-6);
        assert_abs_diff_eq!(eccentricity_factor(t), 1.000194, epsilon = 1e-6);
    }

    #[test]
    fn test_periodic_sums() {
        let t = JulianDate::new(EXAMPLE_JD).unwrap().julian_centuries();
        let sums = periodic_sums(t);

        assert_abs_diff_eq!(sums.longitude, -1127527.0, epsilon = 1.0);
        assert_abs_diff_eq!(sums.latitude, -3229126.0, epsilon = 1.0);
        assert_abs_diff_eq!(sums.distance, -16590875.0, epsilon = 1.0);
    }

    #[test]
    fn test_scaling_leaves_shared_tables() {
        let before = LONGITUDE_DISTANCE_TERMS.terms()[4];
        // Far from J2000 the eccentricity factor is well away from 1
        periodic_sums(-10.0);
        assert_eq!(LONGITUDE_DISTANCE_TERMS.terms()[4], before);
        assert_eq!(before.coefficients[0], -185116.0);
    }

    #[test]
    fn test_ecliptic_position() {
        let moon = example();
        assert_abs_diff_eq!(moon.geometric_longitude.to_degrees(), 133.162655, epsilon = 1e-6);
        assert_abs_diff_eq!(moon.apparent_longitude.to_degrees(), 133.167264, epsilon = 1e-6);
        assert_abs_diff_eq!(moon.latitude.to_degrees(), -3.229126, epsilon = 1e-6);
        assert_abs_diff_eq!(moon.distance_km, 368409.685, epsilon = 1e-3);
    }

    #[test]
    fn test_equatorial_position() {
        let moon = example();
        assert_abs_diff_eq!(moon.obliquity.to_degrees(), 23.440635, epsilon = 1e-6);
        assert_abs_diff_eq!(moon.right_ascension().to_degrees(), 134.688469, epsilon = 1e-6);
        assert_abs_diff_eq!(moon.declination().to_degrees(), 13.768367, epsilon = 1e-6);
    }

    #[test]
    fn test_ranges_over_a_month() {
        for i in 0..60 {
            let jd = JulianDate::new(2460000.5 + i as f64 * 0.5).unwrap();
            let moon = lunar_position(jd);

            let ra = moon.right_ascension().to_degrees();
            assert!((0.0..360.0).contains(&ra), "ra {ra} at {jd}");
            assert!(moon.latitude.to_degrees().abs() < 5.4);
            assert!(moon.declination().to_degrees().abs() < 29.0);
            assert!((356_000.0..407_000.0).contains(&moon.distance_km));
        }
    }
}
