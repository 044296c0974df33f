//! Constants module for the ephemeris engine
//!
//! Physical constants are expressed in engine scale units where one unit is
//! 1000 km. Series coefficients are in degrees unless noted otherwise.

use std::f64::consts::PI;

// Scale
/// Kilometers per engine scale unit
pub const KM_PER_UNIT: f64 = 1_000.0;
/// Radius of the central body's (circular) heliocentric orbit, in units
pub const CENTRAL_ORBIT_RADIUS: f64 = 149_597.870_7;
/// Mean radius of the central body, in units
pub const CENTRAL_BODY_RADIUS: f64 = 6.371;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Nanoseconds in a day
pub const DAY_NS: f64 = 86_400_000_000_000.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Unix epoch (1970-01-01T00:00:00Z) as Julian date
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Degrees of rotation per sidereal hour
pub const DEG_PER_HOUR: f64 = 15.0;

// Central body orbit
/// Mean anomaly at J2000
pub const CENTRAL_MEAN_ANOMALY_J2000: f64 = 357.5291;
/// Mean anomaly rate, degrees per day
pub const CENTRAL_MEAN_ANOMALY_RATE: f64 = 0.985_600_28;
/// Equation of center coefficients for sin(M), sin(2M), sin(3M)
pub const EQUATION_OF_CENTER: [f64; 3] = [1.9148, 0.0200, 0.0003];
/// Longitude of perihelion of the central body
pub const PERIHELION_LONGITUDE: f64 = 102.9372;

// Satellite orbit
/// Satellite mean longitude at J2000
pub const SATELLITE_MEAN_LONGITUDE_J2000: f64 = 218.316;
/// Satellite mean longitude rate, degrees per day
pub const SATELLITE_MEAN_LONGITUDE_RATE: f64 = 13.176_396;
/// Satellite mean anomaly at J2000
pub const SATELLITE_MEAN_ANOMALY_J2000: f64 = 134.963;
/// Satellite mean anomaly rate, degrees per day
pub const SATELLITE_MEAN_ANOMALY_RATE: f64 = 13.064_993;
/// Satellite argument of latitude at J2000
pub const SATELLITE_ARG_LATITUDE_J2000: f64 = 93.272;
/// Satellite argument of latitude rate, degrees per day
pub const SATELLITE_ARG_LATITUDE_RATE: f64 = 13.229_350;
/// Satellite mean distance from the central body, in units
pub const SATELLITE_MEAN_DISTANCE: f64 = 385.000_56;

// Rotation
/// Greenwich mean sidereal time at J2000, hours
pub const GMST_J2000_HOURS: f64 = 18.697_374_558;
/// Sidereal hours elapsed per solar day
pub const GMST_RATE_HOURS: f64 = 24.065_709_824_419_08;

// Phenomena
/// Minimum alignment score at which an eclipse is flagged
pub const ECLIPSE_ALIGNMENT_THRESHOLD: f64 = 0.99;

// Display frames
/// Star distance from the central body in the central-body frame
pub const GEO_STAR_DISTANCE: f64 = 400.0;
/// Satellite distance from the central body in the central-body frame
pub const GEO_SATELLITE_DISTANCE: f64 = 60.0;
/// Central body distance from the star in the star frame
pub const HELIO_CENTRAL_DISTANCE: f64 = 300.0;
/// Satellite distance from the central body in the star frame
pub const HELIO_SATELLITE_DISTANCE: f64 = 40.0;
/// Tilt applied to the satellite offset in the star frame, degrees
pub const HELIO_SATELLITE_INCLINATION: f64 = 5.145;
/// Central body distance from the satellite in the satellite frame
pub const SELENO_CENTRAL_DISTANCE: f64 = 60.0;
/// Star distance from the satellite in the satellite frame
pub const SELENO_STAR_DISTANCE: f64 = 400.0;
