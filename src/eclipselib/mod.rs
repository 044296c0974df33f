//! Eclipse detection by alignment scores
//!
//! Each score is the dot product of two unit vectors, so it lies in [-1, 1]
//! and reaches 1 when the three bodies are exactly co-linear in the order
//! that produces the eclipse:
//!
//! - **solar**: the satellite lies in the star's direction as seen from the
//!   central body (satellite between center and star)
//! - **lunar**: the central body lies in the star's opposite direction as seen
//!   from the satellite (center between satellite and star)
//!
//! An eclipse is flagged when its score exceeds a threshold. The threshold is
//! a tunable tolerance, not a physically derived value.

use crate::constants::ECLIPSE_ALIGNMENT_THRESHOLD;
use crate::coordinates::Cartesian3;
use serde::{Deserialize, Serialize};

/// Alignment thresholds above which eclipses are flagged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EclipseThresholds {
    pub solar: f64,
    pub lunar: f64,
}

impl Default for EclipseThresholds {
    fn default() -> Self {
        Self {
            solar: ECLIPSE_ALIGNMENT_THRESHOLD,
            lunar: ECLIPSE_ALIGNMENT_THRESHOLD,
        }
    }
}

/// Eclipse flags and the alignment scores behind them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipseInfo {
    pub solar_eclipse: bool,
    pub lunar_eclipse: bool,
    /// dot((star - center)^, (satellite - center)^), [-1, 1]
    pub solar_alignment: f64,
    /// dot((star - satellite)^, (center - satellite)^), [-1, 1]
    pub lunar_alignment: f64,
}

impl EclipseInfo {
    /// Flag eclipses from precomputed alignment scores
    pub fn from_alignments(
        solar_alignment: f64,
        lunar_alignment: f64,
        thresholds: &EclipseThresholds,
    ) -> Self {
        Self {
            solar_eclipse: solar_alignment > thresholds.solar,
            lunar_eclipse: lunar_alignment > thresholds.lunar,
            solar_alignment,
            lunar_alignment,
        }
    }

    /// Whether either eclipse is flagged
    pub fn any(&self) -> bool {
        self.solar_eclipse || self.lunar_eclipse
    }
}

/// Dot product of the unit vectors `from -> a` and `from -> b`
///
/// Zero when either direction is undefined.
pub fn alignment(from: Cartesian3, a: Cartesian3, b: Cartesian3) -> f64 {
    match (from.direction_to(&a), from.direction_to(&b)) {
        (Some(u), Some(v)) => u.dot(&v).clamp(-1.0, 1.0),
        _ => 0.0,
    }
}

/// Eclipse state with the default threshold
pub fn eclipses(star: Cartesian3, central: Cartesian3, satellite: Cartesian3) -> EclipseInfo {
    eclipses_with(star, central, satellite, &EclipseThresholds::default())
}

/// Eclipse state with caller-supplied thresholds
pub fn eclipses_with(
    star: Cartesian3,
    central: Cartesian3,
    satellite: Cartesian3,
    thresholds: &EclipseThresholds,
) -> EclipseInfo {
    let solar = alignment(central, star, satellite);
    let lunar = alignment(satellite, star, central);
    log::trace!("eclipse alignments: solar={:.6} lunar={:.6}", solar, lunar);

    EclipseInfo::from_alignments(solar, lunar, thresholds)
}
