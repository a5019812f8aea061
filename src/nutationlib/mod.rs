//! Nutation in longitude and obliquity
//!
//! The 63-term IAU 1980 series as tabulated by Meeus (chapter 22), good to
//! about 0.5" in longitude and 0.1" in obliquity, plus the Laskar polynomial
//! for the mean obliquity of the ecliptic.

use crate::constants::ASEC_PER_DEG;
use crate::coordinates::angle::reduce_degrees;
use crate::series::{blend, polynomial, TermTable};
use crate::time::JulianDate;
use lazy_static::lazy_static;
use serde::Serialize;

/// Fundamental argument polynomials in degrees, ordered D, M, M', F, Ω
const FUNDAMENTAL_ARGUMENTS: [[f64; 4]; 5] = [
    // Mean elongation of the Moon from the Sun
    [297.85036, 445_267.111480, -0.0019142, 1.0 / 189_474.0],
    // Mean anomaly of the Sun
    [357.52772, 35_999.050340, -0.0001603, -1.0 / 300_000.0],
    // Mean anomaly of the Moon
    [134.96298, 477_198.867398, 0.0086972, 1.0 / 56_250.0],
    // Moon's argument of latitude
    [93.27191, 483_202.017538, -0.0036825, 1.0 / 327_270.0],
    // Longitude of the ascending node of the Moon's mean orbit
    [125.04452, -1_934.136261, 0.0020708, 1.0 / 450_000.0],
];

/// Laskar's mean obliquity polynomial in arcseconds, argument in units of 10^4 years
const MEAN_OBLIQUITY_ARCSEC: [f64; 11] = [
    84_381.448, -4_680.93, -1.55, 1_999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Table amplitudes are in units of 0.0001"
const AMPLITUDE_UNIT_ARCSEC: f64 = 1e-4;

/// (D, M, M', F, Ω) multipliers and (a, b, c, d) with Δψ ~ (a + bT)·sin, Δε ~ (c + dT)·cos
#[rustfmt::skip]
const NUTATION_ROWS: [([i32; 5], [f64; 4]); 63] = [
    ([0, 0, 0, 0, 1], [-171996.0, -174.2, 92025.0, 8.9]),
    ([-2, 0, 0, 2, 2], [-13187.0, -1.6, 5736.0, -3.1]),
    ([0, 0, 0, 2, 2], [-2274.0, -0.2, 977.0, -0.5]),
    ([0, 0, 0, 0, 2], [2062.0, 0.2, -895.0, 0.5]),
    ([0, 1, 0, 0, 0], [1426.0, -3.4, 54.0, -0.1]),
    ([0, 0, 1, 0, 0], [712.0, 0.1, -7.0, 0.0]),
    ([-2, 1, 0, 2, 2], [-517.0, 1.2, 224.0, -0.6]),
    ([0, 0, 0, 2, 1], [-386.0, -0.4, 200.0, 0.0]),
    ([0, 0, 1, 2, 2], [-301.0, 0.0, 129.0, -0.1]),
    ([-2, -1, 0, 2, 2], [217.0, -0.5, -95.0, 0.3]),
    ([-2, 0, 1, 0, 0], [-158.0, 0.0, 0.0, 0.0]),
    ([-2, 0, 0, 2, 1], [129.0, 0.1, -70.0, 0.0]),
    ([0, 0, -1, 2, 2], [123.0, 0.0, -53.0, 0.0]),
    ([2, 0, 0, 0, 0], [63.0, 0.0, 0.0, 0.0]),
    ([0, 0, 1, 0, 1], [63.0, 0.1, -33.0, 0.0]),
    ([2, 0, -1, 2, 2], [-59.0, 0.0, 26.0, 0.0]),
    ([0, 0, -1, 0, 1], [-58.0, -0.1, 32.0, 0.0]),
    ([0, 0, 1, 2, 1], [-51.0, 0.0, 27.0, 0.0]),
    ([-2, 0, 2, 0, 0], [48.0, 0.0, 0.0, 0.0]),
    ([0, 0, -2, 2, 1], [46.0, 0.0, -24.0, 0.0]),
    ([2, 0, 0, 2, 2], [-38.0, 0.0, 16.0, 0.0]),
    ([0, 0, 2, 2, 2], [-31.0, 0.0, 13.0, 0.0]),
    ([0, 0, 2, 0, 0], [29.0, 0.0, 0.0, 0.0]),
    ([-2, 0, 1, 2, 2], [29.0, 0.0, -12.0, 0.0]),
    ([0, 0, 0, 2, 0], [26.0, 0.0, 0.0, 0.0]),
    ([-2, 0, 0, 2, 0], [-22.0, 0.0, 0.0, 0.0]),
    ([0, 0, -1, 2, 1], [21.0, 0.0, -10.0, 0.0]),
    ([0, 2, 0, 0, 0], [17.0, -0.1, 0.0, 0.0]),
    ([2, 0, -1, 0, 1], [16.0, 0.0, -8.0, 0.0]),
    ([-2, 2, 0, 2, 2], [-16.0, 0.1, 7.0, 0.0]),
    ([0, 1, 0, 0, 1], [-15.0, 0.0, 9.0, 0.0]),
    ([-2, 0, 1, 0, 1], [-13.0, 0.0, 7.0, 0.0]),
    ([0, -1, 0, 0, 1], [-12.0, 0.0, 6.0, 0.0]),
    ([0, 0, 2, -2, 0], [11.0, 0.0, 0.0, 0.0]),
    ([2, 0, -1, 2, 1], [-10.0, 0.0, 5.0, 0.0]),
    ([2, 0, 1, 2, 2], [-8.0, 0.0, 3.0, 0.0]),
    ([0, 1, 0, 2, 2], [7.0, 0.0, -3.0, 0.0]),
    ([-2, 1, 1, 0, 0], [-7.0, 0.0, 0.0, 0.0]),
    ([0, -1, 0, 2, 2], [-7.0, 0.0, 3.0, 0.0]),
    ([2, 0, 0, 2, 1], [-7.0, 0.0, 3.0, 0.0]),
    ([2, 0, 1, 0, 0], [6.0, 0.0, 0.0, 0.0]),
    ([-2, 0, 2, 2, 2], [6.0, 0.0, -3.0, 0.0]),
    ([-2, 0, 1, 2, 1], [6.0, 0.0, -3.0, 0.0]),
    ([2, 0, -2, 0, 1], [-6.0, 0.0, 3.0, 0.0]),
    ([2, 0, 0, 0, 1], [-6.0, 0.0, 3.0, 0.0]),
    ([0, -1, 1, 0, 0], [5.0, 0.0, 0.0, 0.0]),
    ([-2, -1, 0, 2, 1], [-5.0, 0.0, 3.0, 0.0]),
    ([-2, 0, 0, 0, 1], [-5.0, 0.0, 3.0, 0.0]),
    ([0, 0, 2, 2, 1], [-5.0, 0.0, 3.0, 0.0]),
    ([-2, 0, 2, 0, 1], [4.0, 0.0, 0.0, 0.0]),
    ([-2, 1, 0, 2, 1], [4.0, 0.0, 0.0, 0.0]),
    ([0, 0, 1, -2, 0], [4.0, 0.0, 0.0, 0.0]),
    ([-1, 0, 1, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    ([-2, 1, 0, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    ([1, 0, 0, 0, 0], [-4.0, 0.0, 0.0, 0.0]),
    ([0, 0, 1, 2, 0], [3.0, 0.0, 0.0, 0.0]),
    ([0, 0, -2, 2, 2], [-3.0, 0.0, 0.0, 0.0]),
    ([-1, -1, 1, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    ([0, 1, 1, 0, 0], [-3.0, 0.0, 0.0, 0.0]),
    ([0, -1, 1, 2, 2], [-3.0, 0.0, 0.0, 0.0]),
    ([2, -1, -1, 2, 2], [-3.0, 0.0, 0.0, 0.0]),
    ([0, 0, 3, 2, 2], [-3.0, 0.0, 0.0, 0.0]),
    ([2, -1, 0, 2, 2], [-3.0, 0.0, 0.0, 0.0]),
];

lazy_static! {
    static ref NUTATION_TERMS: TermTable<5, 4> = TermTable::from_rows(&NUTATION_ROWS);
}

/// Nutation corrections, both in arcseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nutation {
    /// Δψ, nutation in longitude
    pub longitude_arcsec: f64,
    /// Δε, nutation in obliquity
    pub obliquity_arcsec: f64,
}

/// Compute nutation in longitude and obliquity for a Julian date
///
/// ```rust
/// use moonfield::nutationlib::nutation;
/// use moonfield::time::JulianDate;
///
/// let n = nutation(JulianDate::new(2446895.5).unwrap());
/// assert!((n.longitude_arcsec + 3.788).abs() < 1e-3);
/// assert!((n.obliquity_arcsec - 9.443).abs() < 1e-3);
/// ```
pub fn nutation(jd: JulianDate) -> Nutation {
    let t = jd.julian_centuries();
    let arguments =
        FUNDAMENTAL_ARGUMENTS.map(|coeffs| reduce_degrees(polynomial(&coeffs, t)).to_radians());

    let table = &*NUTATION_TERMS;
    let a_sin = table.contributions(0, &arguments, f64::sin);
    let b_sin = table.contributions(1, &arguments, f64::sin);
    let c_cos = table.contributions(2, &arguments, f64::cos);
    let d_cos = table.contributions(3, &arguments, f64::cos);

    let result = Nutation {
        longitude_arcsec: blend(&b_sin, &a_sin, t) * AMPLITUDE_UNIT_ARCSEC,
        obliquity_arcsec: blend(&d_cos, &c_cos, t) * AMPLITUDE_UNIT_ARCSEC,
    };
    log::trace!("nutation at {}: {:?}", jd, result);
    result
}

/// Mean obliquity of the ecliptic in degrees, `t` in Julian centuries from J2000
pub fn mean_obliquity(t: f64) -> f64 {
    polynomial(&MEAN_OBLIQUITY_ARCSEC, t / 100.0) / ASEC_PER_DEG
}

/// True obliquity of the ecliptic in degrees (mean obliquity plus Δε)
pub fn true_obliquity(t: f64, nutation: &Nutation) -> f64 {
    mean_obliquity(t) + nutation.obliquity_arcsec / ASEC_PER_DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn jd(value: f64) -> JulianDate {
        JulianDate::new(value).unwrap()
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(NUTATION_TERMS.len(), 63);
        // Leading term is the 18.6-year node term
        assert_eq!(NUTATION_TERMS.terms()[0].multipliers, [0, 0, 0, 0, 1]);
        assert_eq!(NUTATION_TERMS.terms()[0].coefficients[0], -171996.0);
    }

    #[test]
    fn test_nutation_1987_april_10() {
        let n = nutation(jd(2446895.5));
        assert_abs_diff_eq!(n.longitude_arcsec, -3.78793, epsilon = 1e-4);
        assert_abs_diff_eq!(n.obliquity_arcsec, 9.44252, epsilon = 1e-4);
    }

    #[test]
    fn test_nutation_at_j2000() {
        let n = nutation(jd(crate::constants::J2000));
        assert_abs_diff_eq!(n.longitude_arcsec, -13.92315, epsilon = 1e-4);
        assert_abs_diff_eq!(n.obliquity_arcsec, -5.77391, epsilon = 1e-4);
    }

    #[test]
    fn test_nutation_is_bounded() {
        // 1900-2100 envelope
        let mut day = 2415020.5;
        while day < 2488069.5 {
            let n = nutation(jd(day));
            assert!(n.longitude_arcsec.abs() < 20.0, "{day}: {:?}", n);
            assert!(n.obliquity_arcsec.abs() < 11.0, "{day}: {:?}", n);
            day += 97.3;
        }
    }

    #[test]
    fn test_obliquity_1987_april_10() {
        let t = jd(2446895.5).julian_centuries();
        let n = nutation(jd(2446895.5));
        assert_abs_diff_eq!(mean_obliquity(t), 23.4409463, epsilon = 1e-7);
        assert_abs_diff_eq!(true_obliquity(t, &n), 23.4435692, epsilon = 1e-7);
    }
}
