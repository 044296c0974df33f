//! Low-order orbit series for the three bodies
//!
//! The central body follows a circular heliocentric orbit whose longitude is
//! corrected by a three-term equation of center. The star is placed
//! diametrically opposite the central body's heliocentric position, and the
//! satellite is offset from the central body using the series in [`lunar`].
//!
//! Positions are in engine scale units (see [`crate::constants`]).

pub mod lunar;

use crate::constants::{
    CENTRAL_MEAN_ANOMALY_J2000, CENTRAL_MEAN_ANOMALY_RATE, CENTRAL_ORBIT_RADIUS, DEG2RAD,
    EQUATION_OF_CENTER, PERIHELION_LONGITUDE,
};
use crate::coordinates::{wrap_degrees, Cartesian3};
use crate::earthlib;
use crate::time::AstronomicalTime;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use lunar::SatelliteCoordinates;

/// The three bodies the engine tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    /// The central (observer) body
    Central,
    /// The central body's natural satellite
    Satellite,
    /// The primary star
    Star,
}

impl Body {
    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Central => "Earth",
            Body::Satellite => "Moon",
            Body::Star => "Sun",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical-scale positions of all three bodies at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawEphemeris {
    /// Central body position
    pub central: Cartesian3,
    /// Satellite position
    pub satellite: Cartesian3,
    /// Star position
    pub star: Cartesian3,
    /// Central body rotation angle in radians, [0, 2π)
    pub rotation: f64,
}

impl RawEphemeris {
    /// Position of a single body
    pub fn position(&self, body: Body) -> Cartesian3 {
        match body {
            Body::Central => self.central,
            Body::Satellite => self.satellite,
            Body::Star => self.star,
        }
    }
}

/// Evaluate every orbit series at `time`
pub fn raw_ephemeris(time: &AstronomicalTime) -> RawEphemeris {
    let central = central_body_position(time);
    RawEphemeris {
        central,
        satellite: satellite_position(time, central),
        star: star_position(time, central),
        rotation: earthlib::central_body_rotation(time),
    }
}

/// Heliocentric ecliptic longitude of the central body in degrees, [0, 360)
pub fn central_body_longitude(time: &AstronomicalTime) -> f64 {
    let d = time.days_since_epoch;
    let mean_anomaly = wrap_degrees(CENTRAL_MEAN_ANOMALY_J2000 + CENTRAL_MEAN_ANOMALY_RATE * d);
    let m = mean_anomaly * DEG2RAD;

    let [c1, c2, c3] = EQUATION_OF_CENTER;
    let center = c1 * m.sin() + c2 * (2.0 * m).sin() + c3 * (3.0 * m).sin();
    let true_anomaly = mean_anomaly + center;

    wrap_degrees(true_anomaly + PERIHELION_LONGITUDE)
}

/// Heliocentric position of the central body
///
/// Circular orbit in the ecliptic plane, so `y` is always zero.
pub fn central_body_position(time: &AstronomicalTime) -> Cartesian3 {
    let lon = central_body_longitude(time) * DEG2RAD;
    Cartesian3::new(
        CENTRAL_ORBIT_RADIUS * lon.cos(),
        0.0,
        -CENTRAL_ORBIT_RADIUS * lon.sin(),
    )
}

/// Position of the star: the negation of the central body's heliocentric position
pub fn star_position(_time: &AstronomicalTime, central: Cartesian3) -> Cartesian3 {
    -central
}

/// Position of the satellite: its geocentric offset added to `central`
pub fn satellite_position(time: &AstronomicalTime, central: Cartesian3) -> Cartesian3 {
    central + SatelliteCoordinates::at(time).offset()
}
