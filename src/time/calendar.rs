//! Calendar date and Julian date conversion functions
//!
//! Raw day-count arithmetic behind [`CalendarDate`](super::CalendarDate) and
//! [`JulianDate`](super::JulianDate). Inputs are assumed to be validated by the
//! callers; nothing here returns an error.

use crate::constants::GREGORIAN_START;

/// Convert (year, month, day) to a Julian date float
///
/// Uses the Gregorian calendar with the noon epoch convention, so midnight at
/// the start of a civil day lands on `x.5`. January and February are treated as
/// months 13 and 14 of the previous year. `day` may carry a fractional part.
pub fn compute_julian_date(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    // Gregorian leap correction
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian date to (year, month, day)
///
/// The returned day keeps the fraction of the day elapsed since midnight.
/// Dates before the Gregorian reform are decomposed on the Julian calendar.
pub fn compute_calendar_date(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let a = if z >= GREGORIAN_START as f64 {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    } else {
        z
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}
