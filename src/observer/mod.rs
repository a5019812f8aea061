//! Observer-dependent geometry
//!
//! Turns the Moon's right ascension and declination into the hour angle at
//! which it crosses a target altitude for a given latitude, the matching local
//! sidereal time, and a wall-clock time in the observer's time zone.

use crate::constants::{HOURS_PER_DAY, MINUTES_PER_DAY};
use crate::coordinates::angle::{reduce_degrees, Angle};
use crate::coordinates::Equatorial;
use chrono::{Duration, NaiveTime, Timelike};
use thiserror::Error;

/// Largest accepted time zone offset from UTC, in hours
pub const MAX_TIMEZONE_OFFSET_HOURS: f64 = 24.0;

/// Below this, cos(latitude)·cos(declination) is treated as zero
const POLE_EPSILON: f64 = 1e-12;

/// Error type for observer parameters
#[derive(Debug, Error, PartialEq)]
pub enum ObserverError {
    #[error("Latitude out of range [-90,90]: {0}")]
    LatitudeOutOfRange(f64),

    #[error("Time zone offset out of range [-24,24] hours: {0}")]
    TimezoneOutOfRange(f64),

    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),
}

/// Result type for observer operations
pub type Result<T> = std::result::Result<T, ObserverError>;

/// Check a latitude in degrees
pub fn validate_latitude(latitude_deg: f64) -> Result<f64> {
    if !latitude_deg.is_finite() {
        return Err(ObserverError::NonFinite("latitude"));
    }
    if !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(ObserverError::LatitudeOutOfRange(latitude_deg));
    }
    Ok(latitude_deg)
}

/// Check a time zone offset in hours
pub fn validate_timezone_offset(offset_hours: f64) -> Result<f64> {
    if !offset_hours.is_finite() {
        return Err(ObserverError::NonFinite("time zone offset"));
    }
    if offset_hours.abs() > MAX_TIMEZONE_OFFSET_HOURS {
        return Err(ObserverError::TimezoneOutOfRange(offset_hours));
    }
    Ok(offset_hours)
}

/// How a body relates to a target altitude over one day
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transit {
    /// Crosses the altitude at ± this hour angle
    Crosses(Angle),
    /// Circumpolar: stays above the altitude all day
    AlwaysAbove,
    /// Never climbs to the altitude
    NeverAbove,
}

/// Solve the altitude formula for the hour angle at which a body sits at `target_altitude`
///
/// ```rust
/// use moonfield::coordinates::angle::Angle;
/// use moonfield::observer::{hour_angle, Transit};
///
/// let zero = Angle::from_degrees(0.0);
/// match hour_angle(zero, zero, Angle::from_degrees(45.0)) {
///     Transit::Crosses(ha) => assert!((ha.to_degrees() - 90.0).abs() < 1e-9),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn hour_angle(declination: Angle, target_altitude: Angle, latitude: Angle) -> Transit {
    let (sin_dec, cos_dec) = (declination.sin(), declination.cos());
    let (sin_lat, cos_lat) = (latitude.sin(), latitude.cos());
    let denominator = cos_dec * cos_lat;

    if denominator.abs() < POLE_EPSILON {
        // At a pole (or for a body at a celestial pole) the altitude never changes
        let altitude = (sin_dec * sin_lat).asin();
        log::warn!(
            "degenerate hour angle at latitude {:.3}°, constant altitude {:.3}°",
            latitude.to_degrees(),
            altitude.to_degrees()
        );
        return if altitude >= target_altitude.to_radians() {
            Transit::AlwaysAbove
        } else {
            Transit::NeverAbove
        };
    }

    let cos_ha = (target_altitude.sin() - sin_dec * sin_lat) / denominator;
    if cos_ha < -1.0 {
        Transit::AlwaysAbove
    } else if cos_ha > 1.0 {
        Transit::NeverAbove
    } else {
        Transit::Crosses(Angle::from_degrees(cos_ha.acos().to_degrees()))
    }
}

/// Local sidereal time as hour angle plus right ascension, in [0, 360) degrees
pub fn local_sidereal_time(hour_angle: Angle, right_ascension: Angle) -> Angle {
    Angle::from_degrees(reduce_degrees(
        hour_angle.to_degrees() + right_ascension.to_degrees(),
    ))
}

/// Scale a sidereal angle onto a 24 hour clock
///
/// Hours and minutes are both truncated.
pub fn local_time(sidereal_time: Angle) -> NaiveTime {
    let hours = reduce_degrees(sidereal_time.to_degrees()) / 360.0 * HOURS_PER_DAY;
    let hour = hours.trunc() as i64;
    let minute = (hours.fract() * 60.0).trunc() as i64;
    clock((hour * 60 + minute).rem_euclid(MINUTES_PER_DAY))
}

/// Shift a clock time by a possibly fractional hour offset, wrapping around midnight
///
/// The offset is applied in whole minutes, so the minute part of a fractional
/// offset carries into the hour.
pub fn convert_time_zone(time: NaiveTime, offset_hours: f64) -> Result<NaiveTime> {
    let offset_hours = validate_timezone_offset(offset_hours)?;
    let offset = Duration::minutes((offset_hours * 60.0).round() as i64);
    let (shifted, _days) = time.overflowing_add_signed(offset);
    Ok(shifted)
}

/// Midnight plus `minutes_after_midnight`, wrapping past 24:00
fn clock(minutes_after_midnight: i64) -> NaiveTime {
    NaiveTime::MIN + Duration::minutes(minutes_after_midnight)
}

/// Hour angle, sidereal time and clock times of a crossing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseGeometry {
    pub hour_angle: Angle,
    pub sidereal_time: Angle,
    /// Clock time before the zone offset is applied
    pub local_time: NaiveTime,
    /// Clock time in the observer's zone
    pub zone_time: NaiveTime,
}

impl RiseGeometry {
    /// "HH:MM" in the observer's zone
    pub fn zone_time_string(&self) -> String {
        format!("{:02}:{:02}", self.zone_time.hour(), self.zone_time.minute())
    }
}

/// An observer on the Earth's surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude: Angle,
    timezone_offset_hours: f64,
    target_altitude: Angle,
}

impl Observer {
    pub fn new(latitude_deg: f64, timezone_offset_hours: f64, target_altitude_deg: f64) -> Result<Self> {
        let latitude_deg = validate_latitude(latitude_deg)?;
        let timezone_offset_hours = validate_timezone_offset(timezone_offset_hours)?;
        if !target_altitude_deg.is_finite() {
            return Err(ObserverError::NonFinite("target altitude"));
        }

        Ok(Observer {
            latitude: Angle::from_degrees(latitude_deg),
            timezone_offset_hours,
            target_altitude: Angle::from_degrees(target_altitude_deg),
        })
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    pub fn timezone_offset_hours(&self) -> f64 {
        self.timezone_offset_hours
    }

    pub fn target_altitude(&self) -> Angle {
        self.target_altitude
    }

    /// Crossing of the target altitude for a body at `position`
    ///
    /// `None` when the body is circumpolar or never rises; [`Observer::transit`]
    /// tells the two apart.
    pub fn rise(&self, position: &Equatorial) -> Result<Option<RiseGeometry>> {
        self.rise_from(self.transit(position), position)
    }

    /// Rise geometry for an already solved `transit` of the body at `position`
    pub fn rise_from(&self, transit: Transit, position: &Equatorial) -> Result<Option<RiseGeometry>> {
        let hour_angle = match transit {
            Transit::Crosses(ha) => ha,
            _ => return Ok(None),
        };

        let sidereal_time = local_sidereal_time(hour_angle, position.right_ascension);
        let local = local_time(sidereal_time);
        let zone_time = convert_time_zone(local, self.timezone_offset_hours)?;

        Ok(Some(RiseGeometry {
            hour_angle,
            sidereal_time,
            local_time: local,
            zone_time,
        }))
    }

    pub fn transit(&self, position: &Equatorial) -> Transit {
        hour_angle(position.declination, self.target_altitude, self.latitude)
    }
}
