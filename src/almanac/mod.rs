//! Satellite phase
//!
//! The phase is read off the angle, seen from the central body, between the
//! directions to the star and to the satellite. That elongation is extended to
//! a full [0, 360) "age" angle using the sense of the satellite's offset around
//! the ecliptic pole, so waxing and waning phases can be told apart:
//! 0° is new, 90° first quarter, 180° full and 270° third quarter.

use crate::constants::RAD2DEG;
use crate::coordinates::{wrap_degrees, Cartesian3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight named phases, in order of increasing age angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

impl MoonPhase {
    const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::ThirdQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Phase whose 45°-wide bucket contains `angle_deg`
    ///
    /// Buckets are centered on multiples of 45°, with boundaries at
    /// 22.5° + k·45°.
    pub fn from_angle(angle_deg: f64) -> Self {
        let index = (wrap_degrees(angle_deg + 22.5) / 45.0).floor() as usize;
        Self::ALL[index.min(7)]
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::New => "New",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::ThirdQuarter => "Third Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Illumination and named phase of the satellite
///
/// `angle_deg` is the age angle, not the phase angle. Illumination is
/// `(1 - cos(angle_deg)) / 2`, which equals `(1 + cos(phase_angle_deg())) / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseInfo {
    /// Illuminated fraction of the visible disc, [0, 1]
    pub illumination: f64,
    /// Age angle in degrees, [0, 360): 0 new, 180 full. Use
    /// [`PhaseInfo::phase_angle_deg`] for the star–satellite–observer angle.
    pub angle_deg: f64,
    pub name: MoonPhase,
}

impl PhaseInfo {
    /// Build the phase from an age angle in degrees
    pub fn from_angle(angle_deg: f64) -> Self {
        let angle_deg = wrap_degrees(angle_deg);
        Self {
            illumination: (1.0 - angle_deg.to_radians().cos()) / 2.0,
            angle_deg,
            name: MoonPhase::from_angle(angle_deg),
        }
    }

    /// Star–satellite–observer phase angle in degrees, [0, 180]
    ///
    /// `illumination == (1 + cos(phase_angle)) / 2`.
    pub fn phase_angle_deg(&self) -> f64 {
        (180.0 - self.angle_deg).abs()
    }

    /// Angular separation of star and satellite seen from the center, [0, 180]
    pub fn elongation_deg(&self) -> f64 {
        180.0 - self.phase_angle_deg()
    }

    /// Whether the illuminated fraction is growing
    pub fn is_waxing(&self) -> bool {
        self.angle_deg < 180.0
    }
}

/// Phase of the satellite given the three body positions
///
/// Degenerate configurations (a body coinciding with the center) report a
/// new phase rather than NaN.
pub fn phase(star: Cartesian3, central: Cartesian3, satellite: Cartesian3) -> PhaseInfo {
    let (Some(to_star), Some(to_satellite)) =
        (central.direction_to(&star), central.direction_to(&satellite))
    else {
        return PhaseInfo::from_angle(0.0);
    };

    let elongation = to_star.angular_distance(&to_satellite) * RAD2DEG;
    let waxing = to_star.cross(&to_satellite).y >= 0.0;

    PhaseInfo::from_angle(if waxing {
        elongation
    } else {
        360.0 - elongation
    })
}
