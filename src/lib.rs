//! Moonfield: lunar ephemeris, phase and eclipse calculations
//!
//! This crate computes the apparent geocentric position of the Moon from the
//! truncated ELP-2000/82 series, the observer-dependent hour angle and rise
//! time, the named phase and illuminated fraction, and a simple eclipse
//! heuristic, all for a single calendar date.
//!
//! ```rust
//! use moonfield::{CalendarDate, MoonCalculator};
//!
//! let date = CalendarDate::new(8.0, 4, 2024).unwrap();
//! let report = MoonCalculator::new().with_latitude(51.5).calculate(&date).unwrap();
//! assert_eq!(report.eclipse.to_string(), "Solar eclipse");
//! ```

use thiserror::Error;

pub mod almanac;
pub mod constants;
pub mod coordinates;
pub mod moonlib;
pub mod nutationlib;
pub mod observer;
pub mod report;
pub mod series;
pub mod time;

// Re-export commonly used types
pub use almanac::eclipse::EclipseVerdict;
pub use almanac::PhaseName;
pub use report::{LunarReport, MoonCalculator, ObserverConfig};
pub use time::{CalendarDate, JulianDate};

/// Main error type for the moonfield library
#[derive(Debug, Error)]
pub enum MoonfieldError {
    #[error("Time error: {0}")]
    Time(#[from] time::TimeError),

    #[error("Observer error: {0}")]
    Observer(#[from] observer::ObserverError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for moonfield operations
pub type Result<T> = std::result::Result<T, MoonfieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err: MoonfieldError = observer::ObserverError::LatitudeOutOfRange(95.0).into();
        assert_eq!(err.to_string(), "Observer error: Latitude out of range [-90,90]: 95");

        let err: MoonfieldError = time::TimeError::MonthOutOfRange(0).into();
        assert_eq!(err.to_string(), "Time error: Month out of range [1,12]: 0");
    }

    #[test]
    fn test_reexports() {
        let date = CalendarDate::new(12.0, 4, 1992).unwrap();
        let jd: JulianDate = date.to_julian_date();
        assert_eq!(jd.value(), 2448724.5);
        assert_eq!(PhaseName::FullMoon.to_string(), "Full Moon");
        assert_eq!(EclipseVerdict::NoEclipse.to_string(), "No eclipse");
    }
}
