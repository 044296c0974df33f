//! Satellite position series
//!
//! Three fundamental angles advance linearly with days since J2000: the mean
//! longitude `L`, the mean anomaly `M` and the argument of latitude `F`. The
//! largest short-period terms of lunar theory that depend only on `M` and `F`
//! are then added to longitude, latitude and distance.
//!
//! The sign and argument of every term matter: flipping one still yields a
//! plausible-looking orbit, just the wrong one.

use crate::constants::{
    DEG2RAD, SATELLITE_ARG_LATITUDE_J2000, SATELLITE_ARG_LATITUDE_RATE,
    SATELLITE_MEAN_ANOMALY_J2000, SATELLITE_MEAN_ANOMALY_RATE, SATELLITE_MEAN_DISTANCE,
    SATELLITE_MEAN_LONGITUDE_J2000, SATELLITE_MEAN_LONGITUDE_RATE,
};
use crate::coordinates::{wrap_degrees, Cartesian3};
use crate::time::AstronomicalTime;
use serde::{Deserialize, Serialize};

/// Ecliptic coordinates of the satellite relative to the central body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SatelliteCoordinates {
    /// Ecliptic longitude in degrees, [0, 360)
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Distance from the central body in scale units
    pub distance: f64,
}

impl SatelliteCoordinates {
    /// Evaluate the series at `time`
    pub fn at(time: &AstronomicalTime) -> Self {
        let d = time.days_since_epoch;

        let l = wrap_degrees(SATELLITE_MEAN_LONGITUDE_J2000 + SATELLITE_MEAN_LONGITUDE_RATE * d);
        let m = wrap_degrees(SATELLITE_MEAN_ANOMALY_J2000 + SATELLITE_MEAN_ANOMALY_RATE * d)
            * DEG2RAD;
        let f = wrap_degrees(SATELLITE_ARG_LATITUDE_J2000 + SATELLITE_ARG_LATITUDE_RATE * d)
            * DEG2RAD;

        let longitude = l + 6.289 * m.sin() + 0.214 * (2.0 * m).sin() - 0.114 * (2.0 * f).sin()
            + 0.010 * (3.0 * m).sin()
            - 0.013 * (m + 2.0 * f).sin()
            + 0.011 * (m - 2.0 * f).sin();

        let latitude = 5.128 * f.sin()
            + 0.281 * (m + f).sin()
            + 0.278 * (m - f).sin()
            + 0.017 * (2.0 * m + f).sin()
            + 0.009 * (2.0 * m - f).sin();

        let distance =
            SATELLITE_MEAN_DISTANCE - 20.905_355 * m.cos() - 0.569_925 * (2.0 * m).cos();

        Self {
            longitude: wrap_degrees(longitude),
            latitude,
            distance,
        }
    }

    /// Offset from the central body's center in scene coordinates
    pub fn offset(&self) -> Cartesian3 {
        Cartesian3::from_ecliptic(
            self.longitude * DEG2RAD,
            self.latitude * DEG2RAD,
            self.distance,
        )
    }
}
