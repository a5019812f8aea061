//! Time module for calendar dates and Julian dates
//!
//! This module provides the validated [`CalendarDate`] accepted from callers,
//! the [`JulianDate`] timeline every astronomical formula runs on, and the
//! conversions between them. The day field of a calendar date may carry a
//! fractional part for sub-day resolution.

pub mod calendar;

use crate::constants::{DAYS_PER_JULIAN_CENTURY, J2000, MIN_YEAR};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error, PartialEq)]
pub enum TimeError {
    #[error("Day out of range [1,31]: {0}")]
    DayOutOfRange(f64),

    #[error("Month out of range [1,12]: {0}")]
    MonthOutOfRange(u32),

    #[error("Year out of range [{min},+): {0}", min = MIN_YEAR)]
    YearOutOfRange(i32),

    #[error("Julian date must be at least 0: {0}")]
    NegativeJulianDate(f64),

    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// A validated Gregorian calendar date
///
/// Immutable once constructed. The day may be fractional (`12.25` is 06:00 on
/// the 12th).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalendarDate {
    day: f64,
    month: u32,
    year: i32,
}

impl CalendarDate {
    /// Create a calendar date, checking day ∈ [1,31], month ∈ [1,12] and year ≥ 1900
    ///
    /// # Examples
    ///
    /// ```rust
    /// use moonfield::time::CalendarDate;
    ///
    /// let date = CalendarDate::new(1.0, 1, 2000).unwrap();
    /// assert_eq!(date.to_julian_date().value(), 2451544.5);
    ///
    /// assert!(CalendarDate::new(32.0, 1, 2000).is_err());
    /// ```
    pub fn new(day: f64, month: u32, year: i32) -> Result<Self> {
        if !day.is_finite() {
            return Err(TimeError::NonFinite("day"));
        }
        if !(1.0..=31.0).contains(&day) {
            return Err(TimeError::DayOutOfRange(day));
        }
        if !(1..=12).contains(&month) {
            return Err(TimeError::MonthOutOfRange(month));
        }
        if year < MIN_YEAR {
            return Err(TimeError::YearOutOfRange(year));
        }

        Ok(Self { day, month, year })
    }

    /// Create a calendar date at midnight of a chrono date
    pub fn from_naive_date(date: NaiveDate) -> Result<Self> {
        Self::new(date.day() as f64, date.month(), date.year())
    }

    /// Today's date in UTC
    pub fn today() -> Result<Self> {
        Self::from_naive_date(Utc::now().date_naive())
    }

    /// Day of the month, including any fractional part
    pub fn day(&self) -> f64 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The same month and year with `days` added to the day field
    ///
    /// The result is not revalidated; it is only meant for sampling the
    /// continuous phase index a few hours past a real date.
    pub(crate) fn offset_days(&self, days: f64) -> Self {
        Self {
            day: self.day + days,
            ..*self
        }
    }

    /// Convert to a Julian date (noon epoch)
    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate(calendar::compute_julian_date(
            self.year, self.month, self.day,
        ))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.day.floor();
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, whole as u32)?;
        if self.day > whole {
            write!(f, " (+{:.3} d)", self.day - whole)?;
        }
        Ok(())
    }
}

/// Calendar tuple recovered from a Julian date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarTuple {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CalendarTuple {
    /// Convert to a chrono date-time, `None` if the fields do not form a valid date
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?.and_hms_opt(
            self.hour,
            self.minute,
            0,
        )
    }
}

impl fmt::Display for CalendarTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// A point on the continuous Julian date timeline
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct JulianDate(f64);

impl JulianDate {
    /// Create a Julian date, rejecting negative and non-finite values
    pub fn new(jd: f64) -> Result<Self> {
        if !jd.is_finite() {
            return Err(TimeError::NonFinite("julian date"));
        }
        if jd < 0.0 {
            return Err(TimeError::NegativeJulianDate(jd));
        }
        Ok(Self(jd))
    }

    /// Get the Julian date as a plain number
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Julian centuries elapsed since J2000.0
    pub fn julian_centuries(&self) -> f64 {
        (self.0 - J2000) / DAYS_PER_JULIAN_CENTURY
    }

    /// Decompose into calendar fields
    ///
    /// The day fraction is split into hour and minute, each truncated, so the
    /// clock fields are accurate to within one minute.
    pub fn to_calendar(&self) -> CalendarTuple {
        let (year, month, day) = calendar::compute_calendar_date(self.0);

        let whole_day = day.floor();
        let hours = (day - whole_day) * 24.0;
        let whole_hours = hours.floor();
        let minutes = (hours - whole_hours) * 60.0;

        CalendarTuple {
            year,
            month,
            day: whole_day as u32,
            hour: whole_hours as u32,
            minute: minutes.floor() as u32,
        }
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.5}", self.0)
    }
}
