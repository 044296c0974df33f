//! Orrery: a Sun/Earth/Moon ephemeris and reference-frame engine
//!
//! Given a civil instant, a display frame and an observer on the central body,
//! the engine produces one immutable [`State`]: the three body positions in
//! the chosen frame, the central body's rotation, the satellite's phase,
//! eclipse flags, and what the observer sees in the sky.
//!
//! The orbits are low-order analytic series. They are accurate enough for
//! visualization, not for precision astronomy.
//!
//! ```
//! use orrery::{compute_state, FrameSelector, Instant, Observer};
//!
//! let instant: Instant = "2024-04-08T18:18:00Z".parse().unwrap();
//! let state = compute_state(&instant, FrameSelector::Star, &Observer::new(32.0, -97.0));
//! assert!(state.star.position.is_zero());
//! ```

use thiserror::Error;

pub mod almanac;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod earthlib;
pub mod eclipselib;
pub mod ephemeris;
pub mod framelib;
pub mod planetlib;
pub mod time;
pub mod toposlib;

// Re-export commonly used types
pub use almanac::{MoonPhase, PhaseInfo};
pub use config::{ConfigError, EngineConfig};
pub use coordinates::{Cartesian3, Vec3};
pub use eclipselib::EclipseInfo;
pub use ephemeris::{compute_state, BodyState, Ephemeris, State};
pub use framelib::FrameSelector;
pub use time::{AstronomicalTime, Instant, TimeError};
pub use toposlib::{Observer, ObserverState};

/// Main error type for the orrery library
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Frame error: {0}")]
    Frame(#[from] framelib::FrameParseError),
}

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, OrreryError>;
