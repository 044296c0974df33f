//! Engine configuration
//!
//! Every tunable of the engine lives here: the per-frame display distances,
//! the inclination applied to the satellite in the star frame, and the eclipse
//! thresholds. A configuration is immutable once built and is validated
//! before an [`crate::ephemeris::Ephemeris`] accepts it. Reading the text is
//! left to the caller.
//!
//! Configuration files are JSON. Omitted fields keep their defaults:
//!
//! ```json
//! { "distances": { "geo_star": 500.0 }, "eclipse": { "solar": 0.995 } }
//! ```

use crate::eclipselib::EclipseThresholds;
use crate::framelib::DisplayDistances;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON text is malformed or has wrongly typed fields
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A display distance is zero, negative or not finite
    #[error("Display distance '{name}' must be positive and finite, got {value}")]
    InvalidDistance { name: &'static str, value: f64 },

    /// The star-frame inclination is not finite
    #[error("Inclination must be finite, got {0}")]
    InvalidInclination(f64),

    /// The satellite offset in the star frame would reach the origin
    #[error("helio_satellite ({satellite}) must be smaller than helio_central ({central})")]
    OverlappingStarFrame { central: f64, satellite: f64 },

    /// An eclipse threshold lies outside (-1, 1]
    #[error("Eclipse threshold '{name}' must lie in (-1, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}

/// Result alias for configuration handling
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Every tunable of the engine
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub distances: DisplayDistances,
    pub eclipse: EclipseThresholds,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is usable
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.distances.labelled() {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDistance { name, value });
            }
        }

        let inclination = self.distances.helio_satellite_inclination_deg;
        if !inclination.is_finite() {
            return Err(ConfigError::InvalidInclination(inclination));
        }

        if self.distances.helio_satellite >= self.distances.helio_central {
            return Err(ConfigError::OverlappingStarFrame {
                central: self.distances.helio_central,
                satellite: self.distances.helio_satellite,
            });
        }

        for (name, value) in [("solar", self.eclipse.solar), ("lunar", self.eclipse.lunar)] {
            // NaN fails both comparisons
            if !(value > -1.0 && value <= 1.0) {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }

        Ok(())
    }
}
