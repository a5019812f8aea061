//! Lunar phase almanac
//!
//! Phases are read off a continuous lunation count `k` derived directly from
//! the calendar date, independent of the position model. Whole values of `k`
//! fall on New Moon, halves on Full Moon.

pub mod eclipse;
pub mod shading;

use crate::constants::{DAYS_PER_JULIAN_YEAR, LUNATIONS_PER_YEAR, SYNODIC_MONTH, TAU};
use crate::time::CalendarDate;
use serde::Serialize;
use std::fmt;

/// Cumulative days before each month, February counted as 28.25
const DAYS_BEFORE_MONTH: [f64; 12] = [
    0.0, 31.0, 59.25, 90.25, 120.25, 151.25, 181.25, 212.25, 243.25, 273.25, 304.25, 334.25,
];

/// Fixed lead added to every date; calibrates k = 0 against the 2000 epoch
const PHASE_LEAD_DAYS: f64 = 31.0;

const PHASE_EPOCH_YEAR: f64 = 2000.0;
const PHASE_EPOCH_OFFSET: f64 = 0.25;

/// Half-width of the New, Quarter and Full bands as a fraction of a lunation
pub const CARDINAL_HALF_WIDTH: f64 = 0.5 / SYNODIC_MONTH;

/// Continuous year value of a calendar date
pub fn float_years(date: &CalendarDate) -> f64 {
    let before = DAYS_BEFORE_MONTH[(date.month() - 1) as usize];
    date.year() as f64 + (date.day() + before + PHASE_LEAD_DAYS) / DAYS_PER_JULIAN_YEAR
}

/// Number of lunations since the phase epoch
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PhaseIndex(f64);

impl PhaseIndex {
    /// Phase index of a calendar date
    ///
    /// ```rust
    /// use moonfield::almanac::PhaseIndex;
    /// use moonfield::time::CalendarDate;
    ///
    /// let k = PhaseIndex::at(&CalendarDate::new(25.0, 1, 2024).unwrap());
    /// assert!((k.fraction() - 0.5).abs() < 0.02);
    /// ```
    pub fn at(date: &CalendarDate) -> Self {
        PhaseIndex((float_years(date) - PHASE_EPOCH_YEAR) * LUNATIONS_PER_YEAR - PHASE_EPOCH_OFFSET)
    }

    pub fn from_value(k: f64) -> Self {
        PhaseIndex(k)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Position within the current lunation, in [0, 1)
    pub fn fraction(&self) -> f64 {
        self.0.rem_euclid(1.0)
    }

    /// |k − trunc(k)|, the distance into the lunation counted away from the epoch
    fn distance_from_epoch_side(&self) -> f64 {
        self.0.fract().abs()
    }

    pub fn is_before_epoch(&self) -> bool {
        self.0 < 0.0
    }

    /// Illuminated fraction of the disc, 0 at New Moon and 1 at Full Moon
    pub fn illumination(&self) -> f64 {
        0.5 - (TAU * self.fraction()).cos() / 2.0
    }

    /// Name of the phase band `k` falls in
    pub fn phase_name(&self) -> PhaseName {
        PhaseName::classify(*self)
    }
}

/// The eight named phase bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PhaseName {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

use PhaseName::*;

/// Bands after New Moon in the order the fraction grows from the epoch
const FORWARD: [PhaseName; 7] = [
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
];

/// Before the epoch the fraction grows backwards in time
const BACKWARD: [PhaseName; 7] = [
    WaningCrescent,
    LastQuarter,
    WaningGibbous,
    FullMoon,
    WaxingGibbous,
    FirstQuarter,
    WaxingCrescent,
];

const H: f64 = CARDINAL_HALF_WIDTH;

/// Upper bound of each band in `FORWARD`/`BACKWARD`
const BAND_UPPER_BOUNDS: [f64; 7] = [
    0.25 - H,
    0.25 + H,
    0.5 - H,
    0.5 + H,
    0.75 - H,
    0.75 + H,
    1.0 - H,
];

impl PhaseName {
    /// Partition the lunation fraction of `k` into the eight bands
    pub fn classify(k: PhaseIndex) -> Self {
        let fraction = k.distance_from_epoch_side();
        if fraction < H || fraction >= 1.0 - H {
            return NewMoon;
        }

        let order = if k.is_before_epoch() {
            &BACKWARD
        } else {
            &FORWARD
        };
        BAND_UPPER_BOUNDS
            .iter()
            .zip(order)
            .find(|(bound, _)| fraction < **bound)
            .map_or(NewMoon, |(_, &name)| name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NewMoon => "New Moon",
            WaxingCrescent => "Waxing Crescent",
            FirstQuarter => "First Quarter",
            WaxingGibbous => "Waxing Gibbous",
            FullMoon => "Full Moon",
            WaningGibbous => "Waning Gibbous",
            LastQuarter => "Last Quarter",
            WaningCrescent => "Waning Crescent",
        }
    }

    /// Lit area growing from New toward Full
    pub fn is_waxing(&self) -> bool {
        matches!(self, WaxingCrescent | FirstQuarter | WaxingGibbous)
    }

    pub fn is_waning(&self) -> bool {
        matches!(self, WaningGibbous | LastQuarter | WaningCrescent)
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
