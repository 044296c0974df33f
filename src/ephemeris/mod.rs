//! Ephemeris facade
//!
//! Composes the time base, the orbit series, the observer model, the phase and
//! eclipse detectors and the frame projector into a single [`State`] per
//! instant. Nothing is cached between calls: every state is recomputed from
//! its inputs, so callers may scrub forward, backward or at random.
//!
//! Phase, eclipse and observer values are always computed from the physical
//! positions. Only the three body positions in the returned state are
//! projected into the display frame.
//!
//! # Example
//!
//! ```
//! use orrery::ephemeris::compute_state;
//! use orrery::framelib::FrameSelector;
//! use orrery::time::Instant;
//! use orrery::toposlib::Observer;
//!
//! let state = compute_state(&Instant::j2000(), FrameSelector::CentralBody, &Observer::default());
//! assert_eq!(state.time.days_since_epoch, 0.0);
//! assert!(state.central.position.is_zero());
//! ```

use crate::almanac::{self, PhaseInfo};
use crate::config::{ConfigError, EngineConfig};
use crate::coordinates::Cartesian3;
use crate::eclipselib::{self, EclipseInfo};
use crate::framelib::{self, FrameSelector};
use crate::planetlib;
use crate::time::{self, AstronomicalTime, Instant, TimeError};
use crate::toposlib::{Observer, ObserverState};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A body's display position, plus its spin angle when it has one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub position: Cartesian3,
    /// Rotation in radians, [0, 2π). Only the central body carries one.
    pub rotation: Option<f64>,
}

impl BodyState {
    fn fixed(position: Cartesian3) -> Self {
        Self {
            position,
            rotation: None,
        }
    }
}

/// Everything the engine knows about one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub time: AstronomicalTime,
    pub instant: Instant,
    pub frame: FrameSelector,
    pub central: BodyState,
    pub satellite: BodyState,
    pub star: BodyState,
    pub observer: ObserverState,
    pub phase: PhaseInfo,
    pub eclipse: EclipseInfo,
    /// Physical position of the frame's anchor before re-centering
    pub focal_point: Cartesian3,
}

/// Stateless ephemeris engine bound to a validated configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ephemeris {
    config: EngineConfig,
}

impl Ephemeris {
    /// Create an engine, rejecting an invalid configuration
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the full state at `instant`
    pub fn compute_state(
        &self,
        instant: &Instant,
        frame: FrameSelector,
        observer: &Observer,
    ) -> State {
        let time = instant.astronomical_time();
        let raw = planetlib::raw_ephemeris(&time);
        log::trace!(
            "raw ephemeris at JD {:.6}: central={:?} satellite={:?}",
            time.julian_day,
            raw.central,
            raw.satellite
        );

        let observer = ObserverState::observe(observer, &raw);
        let phase = almanac::phase(raw.star, raw.central, raw.satellite);
        let eclipse =
            eclipselib::eclipses_with(raw.star, raw.central, raw.satellite, &self.config.eclipse);
        let projected = framelib::project_with(&raw, frame, &self.config.distances);

        log::trace!(
            "state at {} in {} frame: phase {} ({:.3}), eclipses solar={} lunar={}",
            instant,
            frame,
            phase.name,
            phase.illumination,
            eclipse.solar_eclipse,
            eclipse.lunar_eclipse
        );

        State {
            time,
            instant: *instant,
            frame,
            central: BodyState {
                position: projected.central,
                rotation: Some(raw.rotation),
            },
            satellite: BodyState::fixed(projected.satellite),
            star: BodyState::fixed(projected.star),
            observer,
            phase,
            eclipse,
            focal_point: projected.focal_point,
        }
    }

    /// States at `count` instants spaced `step` apart, starting at `start`
    ///
    /// A negative `step` scrubs backwards.
    pub fn compute_series(
        &self,
        start: &Instant,
        step: Duration,
        count: usize,
        frame: FrameSelector,
        observer: &Observer,
    ) -> time::Result<Vec<State>> {
        let mut states = Vec::with_capacity(count);
        let mut instant = *start;

        for i in 0..count {
            if i > 0 {
                instant = instant.checked_add(step).ok_or_else(|| {
                    TimeError::OutOfRange(format!("{} + {} steps of {}", start, i, step))
                })?;
            }
            states.push(self.compute_state(&instant, frame, observer));
        }

        log::debug!("computed {} states from {}", states.len(), start);
        Ok(states)
    }
}

/// Compute the full state at `instant` with the default configuration
pub fn compute_state(instant: &Instant, frame: FrameSelector, observer: &Observer) -> State {
    Ephemeris::default().compute_state(instant, frame, observer)
}
