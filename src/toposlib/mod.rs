//! Observers on the surface of the central body
//!
//! An observer is a point on the central body's surface sphere. Its position
//! rotates with the body: the rotation angle and the observer's longitude add
//! before the spherical-to-Cartesian conversion. The rotation axis is the
//! scene's `y` axis.
//!
//! Elevation and azimuth are measured in the observer's local horizon:
//! elevation along the local vertical, azimuth from north through east.

use crate::constants::{CENTRAL_BODY_RADIUS, DEG2RAD, RAD2DEG};
use crate::coordinates::{clamp_latitude, wrap_degrees, wrap_hours, wrap_longitude, Cartesian3};
use crate::planetlib::RawEphemeris;
use serde::{Deserialize, Serialize};

/// A ground location, normalized on construction
///
/// Latitude is clamped to [-90, 90] and longitude wrapped to (-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    latitude: f64,
    longitude: f64,
}

impl Observer {
    /// Create an observer at a latitude/longitude in degrees
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude: clamp_latitude(latitude_deg),
            longitude: if longitude_deg.is_finite() {
                wrap_longitude(longitude_deg)
            } else {
                0.0
            },
        }
    }

    /// Latitude in degrees, [-90, 90]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, (-180, 180]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Default for Observer {
    /// Greenwich
    fn default() -> Self {
        Self::new(51.4769, 0.0)
    }
}

/// Elevation and azimuth of a target in an observer's local horizon
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HorizontalAngles {
    /// Degrees above the horizon, [-90, 90]
    pub elevation_deg: f64,
    /// Degrees from north through east, [0, 360)
    pub azimuth_deg: f64,
}

/// The vertical and horizontal axes at an observer's position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalHorizon {
    /// Observer position
    pub origin: Cartesian3,
    /// Local vertical
    pub zenith: Cartesian3,
    /// Toward increasing longitude
    pub east: Cartesian3,
    /// Toward the rotation pole
    pub north: Cartesian3,
}

impl LocalHorizon {
    /// Build the local axes of an observer standing on a body centered at `center`
    pub fn new(observer: Cartesian3, center: Cartesian3) -> Self {
        let zenith = center.direction_to(&observer).unwrap_or(Cartesian3::UNIT_Y);
        // At the poles every horizontal direction is south; pick one
        let east = Cartesian3::UNIT_Y
            .cross(&zenith)
            .normalize()
            .unwrap_or(Cartesian3::new(0.0, 0.0, -1.0));
        let north = zenith.cross(&east);

        Self {
            origin: observer,
            zenith,
            east,
            north,
        }
    }
}

/// Position of a surface observer
///
/// `rotation` is the central body's rotation angle in radians; latitude and
/// longitude are in degrees and normalized like [`Observer::new`].
pub fn observer_position(
    rotation: f64,
    central: Cartesian3,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Cartesian3 {
    let observer = Observer::new(latitude_deg, longitude_deg);
    let lon = rotation + observer.longitude() * DEG2RAD;
    let lat = observer.latitude() * DEG2RAD;

    central + Cartesian3::from_ecliptic(lon, lat, CENTRAL_BODY_RADIUS)
}

/// Elevation and azimuth of any target seen from `horizon`
///
/// When the target coincides with the observer the direction is undefined
/// and both angles are zero.
pub fn horizontal_angles(target: Cartesian3, horizon: &LocalHorizon) -> HorizontalAngles {
    let Some(direction) = horizon.origin.direction_to(&target) else {
        return HorizontalAngles::default();
    };

    let up = direction.dot(&horizon.zenith).clamp(-1.0, 1.0);
    let elevation_deg = up.asin() * RAD2DEG;
    let azimuth_deg = wrap_degrees(
        direction
            .dot(&horizon.east)
            .atan2(direction.dot(&horizon.north))
            * RAD2DEG,
    );

    HorizontalAngles {
        elevation_deg,
        azimuth_deg,
    }
}

/// Elevation and azimuth of the star seen from `horizon`
pub fn solar_angles(star: Cartesian3, horizon: &LocalHorizon) -> HorizontalAngles {
    horizontal_angles(star, horizon)
}

/// Local solar time in hours, [0, 24)
///
/// `rotation` is in radians; `longitude_deg` and `star_longitude_deg` (the
/// star's ecliptic longitude seen from the central body) are in degrees.
/// It is noon when the observer's meridian faces the star.
pub fn local_solar_hour(rotation: f64, longitude_deg: f64, star_longitude_deg: f64) -> f64 {
    let hour_angle = rotation * RAD2DEG + longitude_deg - star_longitude_deg;
    wrap_hours(12.0 + hour_angle / 15.0)
}

/// Everything an observer sees at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverState {
    /// Observer position in the physical (unprojected) scene
    pub position: Cartesian3,
    /// Normalized latitude in degrees
    pub latitude_deg: f64,
    /// Normalized longitude in degrees
    pub longitude_deg: f64,
    pub solar_elevation_deg: f64,
    pub solar_azimuth_deg: f64,
    pub lunar_elevation_deg: f64,
    pub lunar_azimuth_deg: f64,
    /// Local solar time in hours, [0, 24)
    pub local_solar_hour: f64,
    /// The star is above the horizon
    pub sun_visible: bool,
    /// The satellite is above the horizon
    pub satellite_visible: bool,
}

impl ObserverState {
    /// Observe the raw ephemeris from `observer`
    pub fn observe(observer: &Observer, raw: &RawEphemeris) -> Self {
        let position = observer_position(
            raw.rotation,
            raw.central,
            observer.latitude(),
            observer.longitude(),
        );
        let horizon = LocalHorizon::new(position, raw.central);

        let sun = solar_angles(raw.star, &horizon);
        let moon = horizontal_angles(raw.satellite, &horizon);

        let star_longitude = (raw.star - raw.central).to_ecliptic().0 * RAD2DEG;

        Self {
            position,
            latitude_deg: observer.latitude(),
            longitude_deg: observer.longitude(),
            solar_elevation_deg: sun.elevation_deg,
            solar_azimuth_deg: sun.azimuth_deg,
            lunar_elevation_deg: moon.elevation_deg,
            lunar_azimuth_deg: moon.azimuth_deg,
            local_solar_hour: local_solar_hour(raw.rotation, observer.longitude(), star_longitude),
            sun_visible: sun.elevation_deg > 0.0,
            satellite_visible: moon.elevation_deg > 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TAU;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(120.0, 10.0, 90.0, 10.0)]
    #[case(-95.0, 10.0, -90.0, 10.0)]
    #[case(45.0, 190.0, 45.0, -170.0)]
    #[case(45.0, -180.0, 45.0, 180.0)]
    #[case(f64::NAN, f64::INFINITY, 0.0, 0.0)]
    fn test_observer_normalization(
        #[case] lat: f64,
        #[case] lon: f64,
        #[case] expected_lat: f64,
        #[case] expected_lon: f64,
    ) {
        let observer = Observer::new(lat, lon);
        assert_relative_eq!(observer.latitude(), expected_lat, epsilon = 1e-12);
        assert_relative_eq!(observer.longitude(), expected_lon, epsilon = 1e-12);
    }

    #[test]
    fn test_observer_on_surface() {
        let center = Cartesian3::new(1000.0, 0.0, -2000.0);
        let pos = observer_position(1.2, center, 35.0, -120.0);
        assert_relative_eq!((pos - center).magnitude(), CENTRAL_BODY_RADIUS, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_and_longitude_compose() {
        let center = Cartesian3::ZERO;
        let a = observer_position(0.5, center, 20.0, 30.0);
        let b = observer_position(0.5 + 30.0 * DEG2RAD, center, 20.0, 0.0);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
    }

    #[test]
    fn test_north_pole_observer() {
        let pos = observer_position(2.0, Cartesian3::ZERO, 95.0, 0.0);
        assert_relative_eq!(pos.y, CENTRAL_BODY_RADIUS, epsilon = 1e-12);

        // Degenerate horizon basis still yields finite, orthonormal axes
        let horizon = LocalHorizon::new(pos, Cartesian3::ZERO);
        assert_relative_eq!(horizon.east.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(horizon.north.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(horizon.north.dot(&horizon.zenith), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noon_sun_due_south() {
        // Observer meridian faces the star at longitude 0
        let center = Cartesian3::ZERO;
        let star = Cartesian3::new(150_000.0, 0.0, 0.0);
        let pos = observer_position(0.0, center, 40.0, 0.0);
        let horizon = LocalHorizon::new(pos, center);

        let angles = solar_angles(star, &horizon);
        assert_relative_eq!(angles.elevation_deg, 50.0, epsilon = 1e-2);
        assert_relative_eq!(angles.azimuth_deg, 180.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rising_sun_in_the_east() {
        // Star 90° ahead of the meridian sits on the eastern horizon
        let center = Cartesian3::ZERO;
        let star = Cartesian3::from_ecliptic(TAU / 4.0, 0.0, 150_000.0);
        let pos = observer_position(0.0, center, 0.0, 0.0);
        let horizon = LocalHorizon::new(pos, center);

        let angles = solar_angles(star, &horizon);
        assert!(angles.elevation_deg.abs() < 0.01);
        assert_relative_eq!(angles.azimuth_deg, 90.0, epsilon = 1e-6);
    }

    #[test]
    fn test_coincident_star_gives_zero_elevation() {
        let pos = Cartesian3::new(3.0, 4.0, 5.0);
        let horizon = LocalHorizon::new(pos, Cartesian3::ZERO);
        let angles = solar_angles(pos, &horizon);
        assert_eq!(angles.elevation_deg, 0.0);
        assert_eq!(angles.azimuth_deg, 0.0);
        assert!(!angles.elevation_deg.is_nan());
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0, 12.0)]
    #[case(0.0, 90.0, 0.0, 18.0)]
    #[case(0.0, -90.0, 0.0, 6.0)]
    #[case(std::f64::consts::PI, 0.0, 0.0, 0.0)]
    #[case(0.0, 0.0, 45.0, 9.0)]
    fn test_local_solar_hour(
        #[case] rotation: f64,
        #[case] lon: f64,
        #[case] star_lon: f64,
        #[case] expected: f64,
    ) {
        assert_relative_eq!(local_solar_hour(rotation, lon, star_lon), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_observe_at_sub_star_meridian() {
        let central = Cartesian3::new(0.0, 0.0, 0.0);
        let raw = RawEphemeris {
            central,
            star: Cartesian3::new(150_000.0, 0.0, 0.0),
            satellite: Cartesian3::from_ecliptic(TAU / 2.0, 0.0, 385.0),
            rotation: 0.0,
        };
        let state = ObserverState::observe(&Observer::new(10.0, 0.0), &raw);

        assert_relative_eq!(state.local_solar_hour, 12.0, epsilon = 1e-9);
        assert!(state.sun_visible);
        // The satellite is opposite the star, below the horizon at noon
        assert!(!state.satellite_visible);
        assert!(state.lunar_elevation_deg < 0.0);
    }
}
