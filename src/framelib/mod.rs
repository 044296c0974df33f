//! Display reference frames
//!
//! The raw ephemeris spans hundreds of thousands of units between the star
//! and the central body but only a few hundred between the central body and
//! its satellite. No viewport can show that faithfully, so the projector keeps
//! only the *directions* between bodies and re-places each body at a fixed
//! display distance from the selected anchor.
//!
//! In every frame the anchor sits at the origin and is the only body there.

pub mod display;

use crate::constants::DEG2RAD;
use crate::coordinates::Cartesian3;
use crate::planetlib::{Body, RawEphemeris};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use display::DisplayDistances;

/// Error returned when a frame name is not recognised
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Unknown frame '{0}' (expected central, star or satellite)")]
pub struct FrameParseError(pub String);

/// Which body anchors the display frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrameSelector {
    /// Geocentric: the central body at the origin
    #[default]
    CentralBody,
    /// Heliocentric: the star at the origin
    Star,
    /// Selenocentric: the satellite at the origin
    Satellite,
}

impl FrameSelector {
    /// Every frame, in declaration order
    pub const ALL: [FrameSelector; 3] = [
        FrameSelector::CentralBody,
        FrameSelector::Star,
        FrameSelector::Satellite,
    ];

    /// The body placed at the origin
    pub fn anchor(&self) -> Body {
        match self {
            FrameSelector::CentralBody => Body::Central,
            FrameSelector::Star => Body::Star,
            FrameSelector::Satellite => Body::Satellite,
        }
    }

    /// Short lowercase name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            FrameSelector::CentralBody => "central",
            FrameSelector::Star => "star",
            FrameSelector::Satellite => "satellite",
        }
    }
}

impl fmt::Display for FrameSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrameSelector {
    type Err = FrameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "central" | "central-body" | "geocentric" | "earth" => Ok(FrameSelector::CentralBody),
            "star" | "heliocentric" | "sun" => Ok(FrameSelector::Star),
            "satellite" | "selenocentric" | "moon" => Ok(FrameSelector::Satellite),
            _ => Err(FrameParseError(s.to_string())),
        }
    }
}

/// Body positions re-expressed in a display frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedBodies {
    pub central: Cartesian3,
    pub satellite: Cartesian3,
    pub star: Cartesian3,
    /// The anchor's physical position before re-centering
    pub focal_point: Cartesian3,
}

impl ProjectedBodies {
    /// Position of a single body
    pub fn position(&self, body: Body) -> Cartesian3 {
        match body {
            Body::Central => self.central,
            Body::Satellite => self.satellite,
            Body::Star => self.star,
        }
    }
}

// Coincident bodies have no direction; +x keeps the target off the origin.
fn direction(from: Cartesian3, to: Cartesian3) -> Cartesian3 {
    from.direction_to(&to).unwrap_or(Cartesian3::UNIT_X)
}

/// Project with the default display distances
pub fn project(raw: &RawEphemeris, frame: FrameSelector) -> ProjectedBodies {
    project_with(raw, frame, &DisplayDistances::default())
}

/// Project the raw ephemeris into `frame`
pub fn project_with(
    raw: &RawEphemeris,
    frame: FrameSelector,
    distances: &DisplayDistances,
) -> ProjectedBodies {
    let focal_point = raw.position(frame.anchor());

    match frame {
        FrameSelector::CentralBody => ProjectedBodies {
            central: Cartesian3::ZERO,
            satellite: direction(raw.central, raw.satellite) * distances.geo_satellite,
            star: direction(raw.central, raw.star) * distances.geo_star,
            focal_point,
        },
        FrameSelector::Star => {
            let central = direction(raw.star, raw.central) * distances.helio_central;
            let satellite_offset = direction(raw.central, raw.satellite)
                .rotate_about_x(distances.helio_satellite_inclination_deg * DEG2RAD)
                * distances.helio_satellite;

            ProjectedBodies {
                central,
                satellite: central + satellite_offset,
                star: Cartesian3::ZERO,
                focal_point,
            }
        }
        FrameSelector::Satellite => ProjectedBodies {
            central: direction(raw.satellite, raw.central) * distances.seleno_central,
            satellite: Cartesian3::ZERO,
            star: direction(raw.satellite, raw.star) * distances.seleno_star,
            focal_point,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_raw() -> RawEphemeris {
        let central = Cartesian3::new(-30_000.0, 0.0, 146_000.0);
        RawEphemeris {
            central,
            satellite: central + Cartesian3::from_ecliptic(1.0, 0.08, 390.0),
            star: -central,
            rotation: 1.0,
        }
    }

    fn zero_count(projected: &ProjectedBodies) -> usize {
        [projected.central, projected.satellite, projected.star]
            .iter()
            .filter(|p| p.is_zero())
            .count()
    }

    #[test]
    fn test_exactly_one_body_at_origin() {
        let raw = sample_raw();
        for frame in FrameSelector::ALL {
            let projected = project(&raw, frame);
            assert_eq!(zero_count(&projected), 1, "frame {}", frame);
            assert!(projected.position(frame.anchor()).is_zero());
        }
    }

    #[test]
    fn test_central_frame_distances_and_directions() {
        let raw = sample_raw();
        let projected = project(&raw, FrameSelector::CentralBody);
        let d = DisplayDistances::default();

        assert_relative_eq!(projected.star.magnitude(), d.geo_star, epsilon = 1e-9);
        assert_relative_eq!(projected.satellite.magnitude(), d.geo_satellite, epsilon = 1e-9);

        let physical = raw.central.direction_to(&raw.satellite).unwrap();
        assert_relative_eq!(
            projected.satellite.normalize().unwrap().dot(&physical),
            1.0,
            epsilon = 1e-12
        );
        assert_eq!(projected.focal_point, raw.central);
    }

    #[test]
    fn test_star_frame_tilts_satellite_offset() {
        let raw = sample_raw();
        let d = DisplayDistances::default();
        let projected = project(&raw, FrameSelector::Star);

        assert_relative_eq!(projected.central.magnitude(), d.helio_central, epsilon = 1e-9);
        let offset = projected.satellite - projected.central;
        assert_relative_eq!(offset.magnitude(), d.helio_satellite, epsilon = 1e-9);

        let physical = raw.central.direction_to(&raw.satellite).unwrap();
        let tilt = offset.normalize().unwrap().angular_distance(&physical);
        assert!(tilt > 0.0);
        assert!(tilt <= d.helio_satellite_inclination_deg * DEG2RAD + 1e-12);

        let untilted = DisplayDistances {
            helio_satellite_inclination_deg: 0.0,
            ..d
        };
        let flat = project_with(&raw, FrameSelector::Star, &untilted);
        let flat_offset = (flat.satellite - flat.central).normalize().unwrap();
        assert_relative_eq!(flat_offset.dot(&physical), 1.0, epsilon = 1e-12);
        assert_eq!(projected.focal_point, raw.star);
    }

    #[test]
    fn test_satellite_frame() {
        let raw = sample_raw();
        let d = DisplayDistances::default();
        let projected = project(&raw, FrameSelector::Satellite);

        assert!(projected.satellite.is_zero());
        assert_relative_eq!(projected.central.magnitude(), d.seleno_central, epsilon = 1e-9);
        assert_relative_eq!(projected.star.magnitude(), d.seleno_star, epsilon = 1e-9);
        assert_eq!(projected.focal_point, raw.satellite);
    }

    #[test]
    fn test_switching_to_star_frame() {
        let raw = sample_raw();
        let geo = project(&raw, FrameSelector::CentralBody);
        let helio = project(&raw, FrameSelector::Star);

        assert!(geo.central.is_zero());
        assert!(!geo.star.is_zero());
        assert!(helio.star.is_zero());
        assert!(!helio.central.is_zero());

        // The star-to-center direction is the same in both frames
        let geo_dir = geo.star.direction_to(&geo.central).unwrap();
        let helio_dir = helio.central.normalize().unwrap();
        assert_relative_eq!(geo_dir.dot(&helio_dir), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_bodies_stay_off_origin() {
        let p = Cartesian3::new(5.0, 5.0, 5.0);
        let raw = RawEphemeris {
            central: p,
            satellite: p,
            star: p,
            rotation: 0.0,
        };
        for frame in FrameSelector::ALL {
            let projected = project(&raw, frame);
            assert_eq!(zero_count(&projected), 1, "frame {}", frame);
        }
    }

    #[test]
    fn test_frame_names() {
        for frame in FrameSelector::ALL {
            assert_eq!(frame.to_string().parse::<FrameSelector>(), Ok(frame));
        }
        assert_eq!("Heliocentric".parse(), Ok(FrameSelector::Star));
        assert_eq!(" moon ".parse(), Ok(FrameSelector::Satellite));
        assert!("galactic".parse::<FrameSelector>().is_err());
        assert_eq!(FrameSelector::default(), FrameSelector::CentralBody);
    }
}
