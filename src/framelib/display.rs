//! Display distances for the projected frames
//!
//! None of these values is physical. They only keep the bodies visually
//! separated in a viewport, and each can be tuned on its own.

use crate::constants::{
    GEO_SATELLITE_DISTANCE, GEO_STAR_DISTANCE, HELIO_CENTRAL_DISTANCE, HELIO_SATELLITE_DISTANCE,
    HELIO_SATELLITE_INCLINATION, SELENO_CENTRAL_DISTANCE, SELENO_STAR_DISTANCE,
};
use serde::{Deserialize, Serialize};

/// Distance from a frame's anchor to each other body, per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayDistances {
    /// Central-body frame: star distance
    pub geo_star: f64,
    /// Central-body frame: satellite distance
    pub geo_satellite: f64,
    /// Star frame: central body distance
    pub helio_central: f64,
    /// Star frame: satellite distance from the projected central body
    pub helio_satellite: f64,
    /// Star frame: tilt of the satellite offset about the x-axis, degrees
    pub helio_satellite_inclination_deg: f64,
    /// Satellite frame: central body distance
    pub seleno_central: f64,
    /// Satellite frame: star distance
    pub seleno_star: f64,
}

impl Default for DisplayDistances {
    fn default() -> Self {
        Self {
            geo_star: GEO_STAR_DISTANCE,
            geo_satellite: GEO_SATELLITE_DISTANCE,
            helio_central: HELIO_CENTRAL_DISTANCE,
            helio_satellite: HELIO_SATELLITE_DISTANCE,
            helio_satellite_inclination_deg: HELIO_SATELLITE_INCLINATION,
            seleno_central: SELENO_CENTRAL_DISTANCE,
            seleno_star: SELENO_STAR_DISTANCE,
        }
    }
}

impl DisplayDistances {
    /// Every distance, labelled, in declaration order
    pub fn labelled(&self) -> [(&'static str, f64); 6] {
        [
            ("geo_star", self.geo_star),
            ("geo_satellite", self.geo_satellite),
            ("helio_central", self.helio_central),
            ("helio_satellite", self.helio_satellite),
            ("seleno_central", self.seleno_central),
            ("seleno_star", self.seleno_star),
        ]
    }
}
