//! Assembling a complete lunar report for one date and observer
//!
//! [`MoonCalculator`] is the entry point: configure the observer, then call
//! [`MoonCalculator::calculate`] with a date to get a [`LunarReport`] holding
//! every number a presentation layer needs, already rounded for display.
//!
//! ```rust
//! use moonfield::report::MoonCalculator;
//! use moonfield::time::CalendarDate;
//!
//! let report = MoonCalculator::new()
//!     .with_latitude(40.0)
//!     .with_timezone_offset(-5.0)
//!     .calculate(&CalendarDate::new(12.0, 4, 1992).unwrap())
//!     .unwrap();
//!
//! assert_eq!(report.right_ascension_deg, 134.688);
//! assert_eq!(report.phase.to_string(), "Waxing Gibbous");
//! ```

use crate::almanac::eclipse::{check_eclipse, EclipseVerdict};
use crate::almanac::shading::{DiscShading, OrbitLayout};
use crate::almanac::{PhaseIndex, PhaseName};
use crate::constants::MOON_RISE_ALTITUDE_DEG;
use crate::moonlib::{lunar_position, LunarPosition};
use crate::nutationlib::Nutation;
use crate::observer::{validate_latitude, validate_timezone_offset, Observer, Transit};
use crate::time::CalendarDate;
use crate::{MoonfieldError, Result};
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Observer settings, loadable from JSON
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverConfig {
    /// Geographic latitude, north positive
    pub latitude_deg: f64,
    /// Hours east of UTC
    pub timezone_offset_hours: f64,
    /// Altitude of the Moon's centre that counts as rising
    pub target_altitude_deg: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        ObserverConfig {
            latitude_deg: 0.0,
            timezone_offset_hours: 0.0,
            target_altitude_deg: MOON_RISE_ALTITUDE_DEG,
        }
    }
}

impl ObserverConfig {
    /// Check every field is finite and in range
    pub fn validate(&self) -> Result<()> {
        validate_latitude(self.latitude_deg)?;
        validate_timezone_offset(self.timezone_offset_hours)?;
        if !self.target_altitude_deg.is_finite()
            || !(-90.0..=90.0).contains(&self.target_altitude_deg)
        {
            return Err(MoonfieldError::Config(format!(
                "target altitude must be within [-90, 90] degrees, got {}",
                self.target_altitude_deg
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ObserverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading observer config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    fn observer(&self) -> Result<Observer> {
        self.validate()?;
        Ok(Observer::new(
            self.latitude_deg,
            self.timezone_offset_hours,
            self.target_altitude_deg,
        )?)
    }
}

/// How the Moon meets the target altitude on the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitKind {
    Crosses,
    AlwaysAbove,
    NeverAbove,
}

/// Rise clock time in the observer's zone, as zero-padded strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiseTime {
    pub hour: String,
    pub minute: String,
}

impl RiseTime {
    fn from_time(time: chrono::NaiveTime) -> Self {
        RiseTime {
            hour: format!("{:02}", time.hour()),
            minute: format!("{:02}", time.minute()),
        }
    }
}

/// Ecliptic part of the position, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionSummary {
    pub geometric_longitude_deg: f64,
    pub apparent_longitude_deg: f64,
    pub latitude_deg: f64,
    pub distance_km: f64,
    pub obliquity_deg: f64,
    pub nutation: Nutation,
}

impl PositionSummary {
    fn from_position(position: &LunarPosition) -> Self {
        PositionSummary {
            geometric_longitude_deg: round_to(position.geometric_longitude.to_degrees(), 3),
            apparent_longitude_deg: round_to(position.apparent_longitude.to_degrees(), 3),
            latitude_deg: round_to(position.latitude.to_degrees(), 3),
            distance_km: round_to(position.distance_km, 1),
            obliquity_deg: round_to(position.obliquity.to_degrees(), 3),
            nutation: Nutation {
                longitude_arcsec: round_to(position.nutation.longitude_arcsec, 3),
                obliquity_arcsec: round_to(position.nutation.obliquity_arcsec, 3),
            },
        }
    }
}

/// Everything computed for one date and observer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LunarReport {
    pub date: CalendarDate,
    pub julian_date: f64,
    pub phase: PhaseName,
    /// Illuminated fraction of the disc in percent, one decimal
    pub illumination_percent: f64,
    pub right_ascension_deg: f64,
    pub declination_deg: f64,
    pub transit: TransitKind,
    /// Hour angle of the crossing; absent when the Moon does not cross
    pub hour_angle_deg: Option<f64>,
    pub sidereal_time_deg: Option<f64>,
    pub rise: Option<RiseTime>,
    pub eclipse: EclipseVerdict,
    pub position: PositionSummary,
    pub shading: DiscShading,
    pub orbit: OrbitLayout,
}

/// Builder for lunar reports
#[derive(Debug, Clone, Default)]
pub struct MoonCalculator {
    config: ObserverConfig,
}

impl MoonCalculator {
    /// Observer at the equator on UTC, standard rise altitude
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ObserverConfig) -> Self {
        Self { config }
    }

    pub fn with_latitude(mut self, latitude_deg: f64) -> Self {
        self.config.latitude_deg = latitude_deg;
        self
    }

    pub fn with_timezone_offset(mut self, offset_hours: f64) -> Self {
        self.config.timezone_offset_hours = offset_hours;
        self
    }

    pub fn with_target_altitude(mut self, altitude_deg: f64) -> Self {
        self.config.target_altitude_deg = altitude_deg;
        self
    }

    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    /// Unrounded position of the Moon at 0h of `date`
    pub fn position(&self, date: &CalendarDate) -> LunarPosition {
        lunar_position(date.to_julian_date())
    }

    /// Compute the full report for `date`
    ///
    /// Fails only when the observer configuration is invalid.
    pub fn calculate(&self, date: &CalendarDate) -> Result<LunarReport> {
        let observer = self.config.observer()?;
        let position = self.position(date);

        let transit = observer.transit(&position.equatorial);
        let rise = observer.rise_from(transit, &position.equatorial)?;
        let transit_kind = match transit {
            Transit::Crosses(_) => TransitKind::Crosses,
            Transit::AlwaysAbove => TransitKind::AlwaysAbove,
            Transit::NeverAbove => {
                log::warn!(
                    "Moon stays below {:.3}° at latitude {:.3}° on {}",
                    self.config.target_altitude_deg,
                    self.config.latitude_deg,
                    date
                );
                TransitKind::NeverAbove
            }
        };

        let k = PhaseIndex::at(date);
        let phase = k.phase_name();
        let illumination = k.illumination();

        let report = LunarReport {
            date: *date,
            julian_date: position.julian_date.value(),
            phase,
            illumination_percent: round_to(illumination * 100.0, 1),
            right_ascension_deg: round_to(position.right_ascension().to_degrees(), 3),
            declination_deg: round_to(position.declination().to_degrees(), 3),
            transit: transit_kind,
            hour_angle_deg: rise.map(|r| round_to(r.hour_angle.to_degrees(), 3)),
            sidereal_time_deg: rise.map(|r| round_to(r.sidereal_time.to_degrees(), 3)),
            rise: rise.map(|r| RiseTime::from_time(r.zone_time)),
            eclipse: check_eclipse(date),
            position: PositionSummary::from_position(&position),
            shading: DiscShading::new(phase, illumination),
            orbit: OrbitLayout::at(date),
        };

        log::debug!(
            "report for {}: {} ({:.1}%), RA {:.3}° Dec {:.3}°, {}",
            date,
            report.phase,
            report.illumination_percent,
            report.right_ascension_deg,
            report.declination_deg,
            report.eclipse
        );
        Ok(report)
    }
}

/// Round half away from zero to `decimals` places
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::ObserverError;
    use crate::time::TimeError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn date(day: f64, month: u32, year: i32) -> CalendarDate {
        CalendarDate::new(day, month, year).unwrap()
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(134.68846, 3), 134.688);
        assert_eq!(round_to(-3.2291264, 3), -3.229);
        assert_eq!(round_to(69.64, 1), 69.6);
    }

    #[test]
    fn test_report_1992_april_12() {
        let report = MoonCalculator::new()
            .with_latitude(40.0)
            .with_timezone_offset(-5.0)
            .calculate(&date(12.0, 4, 1992))
            .unwrap();

        assert_eq!(report.julian_date, 2448724.5);
        assert_eq!(report.phase, PhaseName::WaxingGibbous);
        assert_eq!(report.illumination_percent, 69.6);
        assert_eq!(report.right_ascension_deg, 134.688);
        assert_eq!(report.declination_deg, 13.768);
        assert_eq!(report.transit, TransitKind::Crosses);
        assert_eq!(report.hour_angle_deg, Some(101.694));
        assert_eq!(report.sidereal_time_deg, Some(236.382));
        assert_eq!(
            report.rise,
            Some(RiseTime {
                hour: "10".to_string(),
                minute: "45".to_string()
            })
        );
        assert_eq!(report.eclipse, EclipseVerdict::NoEclipse);
        assert_eq!(report.position.distance_km, 368409.7);
        assert_eq!(report.position.apparent_longitude_deg, 133.167);
    }

    #[test]
    fn test_report_2024_eclipse() {
        let report = MoonCalculator::new()
            .with_latitude(51.5)
            .calculate(&date(8.0, 4, 2024))
            .unwrap();

        assert_eq!(report.phase, PhaseName::WaningCrescent);
        assert_eq!(report.illumination_percent, 0.8);
        assert_eq!(report.eclipse, EclipseVerdict::SolarEclipse);
        assert_eq!(report.right_ascension_deg, 7.530);
        assert_eq!(report.hour_angle_deg, Some(92.913));
        assert_eq!(
            report.rise,
            Some(RiseTime {
                hour: "06".to_string(),
                minute: "41".to_string()
            })
        );
        assert!(!report.shading.fully_dark);
    }

    #[test]
    fn test_report_polar_observer() {
        let report = MoonCalculator::new()
            .with_latitude(90.0)
            .calculate(&date(12.0, 4, 1992))
            .unwrap();

        // Declination +13.8° is always above the horizon at the north pole
        assert_eq!(report.transit, TransitKind::AlwaysAbove);
        assert_eq!(report.hour_angle_deg, None);
        assert_eq!(report.rise, None);
    }

    #[test]
    fn test_invalid_observer() {
        let err = MoonCalculator::new()
            .with_latitude(120.0)
            .calculate(&date(1.0, 1, 2000))
            .unwrap_err();
        assert!(matches!(
            err,
            MoonfieldError::Observer(ObserverError::LatitudeOutOfRange(_))
        ));

        let err = MoonCalculator::new()
            .with_target_altitude(f64::NAN)
            .calculate(&date(1.0, 1, 2000))
            .unwrap_err();
        assert!(matches!(err, MoonfieldError::Config(_)));
    }

    #[test]
    fn test_date_errors_convert() {
        let err: MoonfieldError = CalendarDate::new(1.0, 13, 2000).unwrap_err().into();
        assert!(matches!(err, MoonfieldError::Time(TimeError::MonthOutOfRange(13))));
    }

    #[test]
    fn test_config_from_json() {
        let config = ObserverConfig::from_json_str(r#"{"latitude_deg": 35.5}"#).unwrap();
        assert_eq!(config.latitude_deg, 35.5);
        assert_eq!(config.timezone_offset_hours, 0.0);
        assert_eq!(config.target_altitude_deg, MOON_RISE_ALTITUDE_DEG);

        assert!(matches!(
            ObserverConfig::from_json_str(r#"{"latitude": 35.5}"#),
            Err(MoonfieldError::Json(_))
        ));
        assert!(matches!(
            ObserverConfig::from_json_str(r#"{"timezone_offset_hours": 30}"#),
            Err(MoonfieldError::Observer(ObserverError::TimezoneOutOfRange(_)))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"latitude_deg": -33.9, "timezone_offset_hours": 10.5, "target_altitude_deg": 0.0}}"#
        )
        .unwrap();

        let config = ObserverConfig::from_json_file(file.path()).unwrap();
        let calculator = MoonCalculator::from_config(config);
        assert_eq!(calculator.config().timezone_offset_hours, 10.5);

        assert!(matches!(
            ObserverConfig::from_json_file("/nonexistent/observer.json"),
            Err(MoonfieldError::Io(_))
        ));
    }

    #[test]
    fn test_report_serializes() {
        let report = MoonCalculator::new()
            .calculate(&date(25.0, 1, 2024))
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["phase"], "Full Moon");
        assert_eq!(json["eclipse"], "No eclipse");
        assert_eq!(json["date"]["month"], 1);
        assert!(json["position"]["nutation"]["longitude_arcsec"].is_number());
    }
}
