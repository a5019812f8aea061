//! Eclipse likelihood from the phase index
//!
//! A date is sampled every tenth of a day. Near New or Full Moon the Moon's
//! argument of latitude is checked against the lunar node (Meeus chapter 54):
//! close to a node the syzygy is an eclipse, far from one it is not, and a
//! middle band is reported as possible. This is a heuristic that works
//! better for solar eclipses than for lunar ones.

use super::{PhaseIndex, CARDINAL_HALF_WIDTH};
use crate::constants::LUNATIONS_PER_CENTURY;
use crate::series::polynomial;
use crate::time::CalendarDate;
use serde::Serialize;
use std::fmt;

/// Samples per date, one every tenth of a day
const SAMPLES: u32 = 10;

/// Lunar window around the Full Moon fraction; the two bounds use
/// slightly different month lengths
const LUNAR_WINDOW_LOW: f64 = 0.5 - 1.0 / 29.5309;
const LUNAR_WINDOW_HIGH: f64 = 0.5 + 1.0 / 29.53059;

/// F = 160.7108 + 390.67050284·k − 0.0016118·T² − 0.00000227·T³ + 0.000000011·T⁴
const NODE_LINEAR: [f64; 2] = [160.7108, 390.670_502_84];
const NODE_SECULAR: [f64; 5] = [0.0, 0.0, -0.001_611_8, -0.000_002_27, 0.000_000_011];

/// Node distances in degrees
const ECLIPSE_LIMIT: f64 = 13.9;
const NO_ECLIPSE_LIMIT: f64 = 21.0;
const NO_ECLIPSE_SIN_F: f64 = 0.36;

/// Outcome of the eclipse search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EclipseVerdict {
    #[serde(rename = "No eclipse")]
    NoEclipse,
    #[serde(rename = "Solar possible")]
    SolarPossible,
    #[serde(rename = "Lunar possible")]
    LunarPossible,
    #[serde(rename = "Solar eclipse")]
    SolarEclipse,
    #[serde(rename = "Lunar eclipse")]
    LunarEclipse,
}

/// Inputs to the verdict state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    NearNewMoon,
    NearFullMoon,
    /// Node distance below the eclipse limit
    NodeClose,
    /// Node distance or sin F rules the eclipse out
    NodeFar,
    NodeMarginal,
}

impl EclipseVerdict {
    /// Transition table
    ///
    /// ```text
    /// NoEclipse   --NearNewMoon-->  SolarPossible (tentative)
    /// NoEclipse   --NearFullMoon--> LunarPossible (tentative)
    /// *Possible   --NodeClose-->    *Eclipse
    /// *Possible   --NodeFar-->      NoEclipse
    /// *Possible   --NodeMarginal--> *Possible
    /// ```
    fn next(self, event: Event) -> Self {
        use EclipseVerdict::*;
        use Event::*;

        match (self, event) {
            (NoEclipse, NearNewMoon) => SolarPossible,
            (NoEclipse, NearFullMoon) => LunarPossible,
            (SolarPossible, NodeClose) => SolarEclipse,
            (LunarPossible, NodeClose) => LunarEclipse,
            (SolarPossible | LunarPossible, NodeFar) => NoEclipse,
            (state, _) => state,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EclipseVerdict::NoEclipse => "No eclipse",
            EclipseVerdict::SolarPossible => "Solar possible",
            EclipseVerdict::LunarPossible => "Lunar possible",
            EclipseVerdict::SolarEclipse => "Solar eclipse",
            EclipseVerdict::LunarEclipse => "Lunar eclipse",
        }
    }
}

impl fmt::Display for EclipseVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which syzygy, if any, the lunation fraction is close to
fn syzygy(k: PhaseIndex) -> Option<Event> {
    let fraction = k.fraction();
    if fraction < CARDINAL_HALF_WIDTH || fraction > 1.0 - CARDINAL_HALF_WIDTH {
        Some(Event::NearNewMoon)
    } else if LUNAR_WINDOW_LOW < fraction && fraction < LUNAR_WINDOW_HIGH {
        Some(Event::NearFullMoon)
    } else {
        None
    }
}

/// Moon's argument of latitude in degrees for the lunation of `k`
///
/// The phase index runs one lunation ahead of the Meeus lunation number.
pub fn argument_of_latitude(k: PhaseIndex) -> f64 {
    let lunation = k.value() - 1.0;
    let t = lunation / LUNATIONS_PER_CENTURY;
    polynomial(&NODE_LINEAR, lunation) + polynomial(&NODE_SECULAR, t)
}

/// Angular distance of F from the nearest node, in [0, 90]
pub fn node_distance(f: f64) -> f64 {
    let r = f.rem_euclid(180.0);
    r.min(180.0 - r)
}

fn node_event(f: f64) -> Event {
    let distance = node_distance(f);
    if distance < ECLIPSE_LIMIT {
        Event::NodeClose
    } else if distance > NO_ECLIPSE_LIMIT || f.to_radians().sin().abs() > NO_ECLIPSE_SIN_F {
        Event::NodeFar
    } else {
        Event::NodeMarginal
    }
}

/// Search the tenths of `date` for an eclipse
///
/// ```rust
/// use moonfield::almanac::eclipse::{check_eclipse, EclipseVerdict};
/// use moonfield::time::CalendarDate;
///
/// let date = CalendarDate::new(8.0, 4, 2024).unwrap();
/// assert_eq!(check_eclipse(&date), EclipseVerdict::SolarEclipse);
/// ```
pub fn check_eclipse(date: &CalendarDate) -> EclipseVerdict {
    for sample in 0..SAMPLES {
        let k = PhaseIndex::at(&date.offset_days(sample as f64 / SAMPLES as f64));

        let Some(near) = syzygy(k) else {
            continue;
        };

        let f = argument_of_latitude(k);
        let verdict = EclipseVerdict::NoEclipse.next(near).next(node_event(f));
        log::trace!(
            "eclipse sample {sample} of {date}: k={:.5} F={:.3} -> {verdict}",
            k.value(),
            f
        );

        if verdict != EclipseVerdict::NoEclipse {
            return verdict;
        }
    }
    EclipseVerdict::NoEclipse
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(day: f64, month: u32, year: i32) -> CalendarDate {
        CalendarDate::new(day, month, year).unwrap()
    }

    #[rstest]
    #[case(8.0, 4, 2024, EclipseVerdict::SolarEclipse)]
    #[case(2.0, 10, 2024, EclipseVerdict::SolarEclipse)]
    #[case(29.0, 3, 2025, EclipseVerdict::SolarEclipse)]
    #[case(21.0, 9, 2025, EclipseVerdict::SolarEclipse)]
    #[case(22.0, 7, 1990, EclipseVerdict::SolarEclipse)]
    #[case(9.0, 3, 1997, EclipseVerdict::SolarEclipse)]
    #[case(8.0, 11, 2022, EclipseVerdict::LunarEclipse)]
    #[case(18.0, 9, 2024, EclipseVerdict::LunarEclipse)]
    #[case(14.0, 3, 2025, EclipseVerdict::LunarEclipse)]
    #[case(7.0, 9, 2025, EclipseVerdict::LunarEclipse)]
    #[case(24.0, 3, 1997, EclipseVerdict::LunarEclipse)]
    #[case(6.0, 1, 2000, EclipseVerdict::SolarPossible)]
    fn test_known_eclipses(
        #[case] day: f64,
        #[case] month: u32,
        #[case] year: i32,
        #[case] expected: EclipseVerdict,
    ) {
        assert_eq!(check_eclipse(&date(day, month, year)), expected);
    }

    #[rstest]
    #[case(25.0, 1, 2024)]
    #[case(11.0, 1, 2024)]
    #[case(1.0, 6, 2024)]
    #[case(15.0, 7, 1990)]
    #[case(6.0, 3, 1997)]
    fn test_no_eclipse(#[case] day: f64, #[case] month: u32, #[case] year: i32) {
        assert_eq!(check_eclipse(&date(day, month, year)), EclipseVerdict::NoEclipse);
    }

    #[test]
    fn test_transition_table() {
        use EclipseVerdict::*;

        assert_eq!(NoEclipse.next(Event::NearNewMoon), SolarPossible);
        assert_eq!(NoEclipse.next(Event::NearFullMoon), LunarPossible);
        assert_eq!(SolarPossible.next(Event::NodeClose), SolarEclipse);
        assert_eq!(LunarPossible.next(Event::NodeClose), LunarEclipse);
        assert_eq!(LunarPossible.next(Event::NodeFar), NoEclipse);
        assert_eq!(SolarPossible.next(Event::NodeMarginal), SolarPossible);
        // Terminal states absorb further input
        assert_eq!(SolarEclipse.next(Event::NodeFar), SolarEclipse);
        // Node events without a syzygy change nothing
        assert_eq!(NoEclipse.next(Event::NodeClose), NoEclipse);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(175.0, 5.0)]
    #[case(185.0, 5.0)]
    #[case(-10.0, 10.0)]
    #[case(90.0, 90.0)]
    #[case(360.0 * 3.0 + 13.0, 13.0)]
    fn test_node_distance(#[case] f: f64, #[case] expected: f64) {
        approx::assert_abs_diff_eq!(node_distance(f), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_node_event_bands() {
        assert_eq!(node_event(10.0), Event::NodeClose);
        assert_eq!(node_event(170.0), Event::NodeClose);
        assert_eq!(node_event(25.0), Event::NodeFar);
        // 20° from the node: sin F = 0.342, marginal
        assert_eq!(node_event(200.0), Event::NodeMarginal);
        // 21.5°: beyond the outer limit
        assert_eq!(node_event(158.5), Event::NodeFar);
    }

    #[test]
    fn test_lunar_window_is_asymmetric() {
        assert!(0.5 - LUNAR_WINDOW_LOW < LUNAR_WINDOW_HIGH - 0.5);
        assert_eq!(syzygy(PhaseIndex::from_value(3.5)), Some(Event::NearFullMoon));
        assert_eq!(syzygy(PhaseIndex::from_value(3.01)), Some(Event::NearNewMoon));
        assert_eq!(syzygy(PhaseIndex::from_value(3.25)), None);
    }

    #[test]
    fn test_verdict_strings() {
        assert_eq!(EclipseVerdict::LunarPossible.to_string(), "Lunar possible");
        assert_eq!(
            serde_json::to_string(&EclipseVerdict::NoEclipse).unwrap(),
            "\"No eclipse\""
        );
    }
}
