//! Geometry for drawing the Moon's disc and the Sun-Earth-Moon layout
//!
//! Nothing here renders; these are the numbers a picture needs.

use super::{float_years, PhaseIndex, PhaseName};
use crate::constants::TAU;
use crate::coordinates::angle::reduce_radians;
use crate::time::CalendarDate;
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, PI};

/// A half of the disc as seen by the observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscHalf {
    Left,
    Right,
}

/// Ellipse centred on the disc, full height, painted over the half shading
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Terminator {
    /// Width as a fraction of the disc diameter
    pub width: f64,
    /// Painted lit (gibbous) rather than dark (crescent)
    pub lit: bool,
}

/// How to shade a unit disc for a phase
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscShading {
    /// New Moon: the whole disc is dark
    pub fully_dark: bool,
    pub dark_half: Option<DiscHalf>,
    pub terminator: Option<Terminator>,
}

impl DiscShading {
    /// Shading for a named phase with the given illuminated fraction
    pub fn new(phase: PhaseName, illumination: f64) -> Self {
        if phase == PhaseName::NewMoon {
            return DiscShading {
                fully_dark: true,
                dark_half: None,
                terminator: None,
            };
        }

        let dark_half = if phase.is_waxing() {
            Some(DiscHalf::Left)
        } else if phase.is_waning() {
            Some(DiscHalf::Right)
        } else {
            None
        };

        let terminator = match phase {
            PhaseName::WaxingCrescent | PhaseName::WaningCrescent => Some(Terminator {
                width: 1.0 - 2.0 * illumination,
                lit: false,
            }),
            PhaseName::WaxingGibbous | PhaseName::WaningGibbous => Some(Terminator {
                width: 2.0 * illumination - 1.0,
                lit: true,
            }),
            _ => None,
        };

        DiscShading {
            fully_dark: false,
            dark_half,
            terminator,
        }
    }

    pub fn for_index(k: PhaseIndex) -> Self {
        Self::new(k.phase_name(), k.illumination())
    }
}

/// Angles of the Earth around the Sun and the Moon around the Earth, in radians
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitLayout {
    pub earth_angle: f64,
    pub moon_angle: f64,
}

impl OrbitLayout {
    pub fn at(date: &CalendarDate) -> Self {
        let years = float_years(date);
        let k = PhaseIndex::at(date);

        let earth_angle = reduce_radians(TAU * years.fract() + FRAC_PI_2);
        // At New Moon the Moon sits between the Earth and the Sun
        let moon_angle = reduce_radians(earth_angle + PI + TAU * k.fraction());

        OrbitLayout {
            earth_angle,
            moon_angle,
        }
    }

    /// Sun-centred positions of the Earth and the Moon for the given orbit radii
    pub fn positions(&self, earth_orbit: f64, moon_orbit: f64) -> ((f64, f64), (f64, f64)) {
        let earth = (
            earth_orbit * self.earth_angle.cos(),
            earth_orbit * self.earth_angle.sin(),
        );
        let moon = (
            earth.0 + moon_orbit * self.moon_angle.cos(),
            earth.1 + moon_orbit * self.moon_angle.sin(),
        );
        (earth, moon)
    }
}
