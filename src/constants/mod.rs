//! Constants module for lunar calculations

use std::f64::consts::PI;

// Time constants
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
/// Days in a Julian year
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;
/// Hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;
/// Minutes in a day
pub const MINUTES_PER_DAY: i64 = 1_440;

// Angles
/// Arcseconds in a degree
pub const ASEC_PER_DEG: f64 = 3_600.0;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Lunar constants
/// Mean synodic month in days
pub const SYNODIC_MONTH: f64 = 29.530_59;
/// Mean lunations per Julian year, as used by the phase index
pub const LUNATIONS_PER_YEAR: f64 = 12.3685;
/// Lunations per Julian century, the time scale of the eclipse node polynomial
pub const LUNATIONS_PER_CENTURY: f64 = 1_236.85;
/// Mean Earth-Moon distance term of the distance series in kilometers
pub const MEAN_LUNAR_DISTANCE_KM: f64 = 385_000.56;
/// Standard altitude of the Moon's centre at rise, in degrees
pub const MOON_RISE_ALTITUDE_DEG: f64 = 0.125;

// Calendar constants
/// Earliest calendar year accepted by the calendar converter
pub const MIN_YEAR: i32 = 1900;
/// First day of Gregorian calendar in Julian day number (1582-10-15)
pub const GREGORIAN_START: i64 = 2_299_161;
