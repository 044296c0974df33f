//! Angle normalization helpers
//!
//! Every angle the engine hands back to callers passes through one of these
//! functions, so the documented ranges hold regardless of how far the input
//! instant is from J2000.

use crate::constants::TAU;

/// Wraps an angle in degrees into [0, 360)
pub fn wrap_degrees(degrees: f64) -> f64 {
    wrap_into(degrees, 360.0)
}

/// Wraps an angle in radians into [0, 2π)
pub fn wrap_radians(radians: f64) -> f64 {
    wrap_into(radians, TAU)
}

/// Wraps an hour value into [0, 24)
pub fn wrap_hours(hours: f64) -> f64 {
    wrap_into(hours, 24.0)
}

/// Wraps a longitude in degrees into (-180, 180]
pub fn wrap_longitude(degrees: f64) -> f64 {
    let wrapped = wrap_degrees(degrees);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Clamps a latitude in degrees into [-90, 90]
///
/// NaN maps to the equator.
pub fn clamp_latitude(degrees: f64) -> f64 {
    if degrees.is_nan() {
        0.0
    } else {
        degrees.clamp(-90.0, 90.0)
    }
}

// rem_euclid can round up to exactly `period` for tiny negative inputs.
fn wrap_into(value: f64, period: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(period);
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(360.0, 0.0)]
    #[case(-90.0, 270.0)]
    #[case(725.0, 5.0)]
    #[case(-1e-17, 0.0)]
    fn test_wrap_degrees(#[case] input: f64, #[case] expected: f64) {
        assert!((wrap_degrees(input) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(180.0, 180.0)]
    #[case(-180.0, 180.0)]
    #[case(190.0, -170.0)]
    #[case(-540.0, 180.0)]
    #[case(45.5, 45.5)]
    fn test_wrap_longitude(#[case] input: f64, #[case] expected: f64) {
        assert!((wrap_longitude(input) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_radians_range() {
        for i in -50..50 {
            let r = wrap_radians(i as f64 * 1.37);
            assert!((0.0..TAU).contains(&r));
        }
        assert_eq!(wrap_radians(-1e-18), 0.0);
    }

    #[test]
    fn test_wrap_hours() {
        assert_eq!(wrap_hours(25.5), 1.5);
        assert_eq!(wrap_hours(-1.0), 23.0);
        assert_eq!(wrap_hours(24.0), 0.0);
    }

    #[test]
    fn test_clamp_latitude() {
        assert_eq!(clamp_latitude(95.0), 90.0);
        assert_eq!(clamp_latitude(-123.0), -90.0);
        assert_eq!(clamp_latitude(12.5), 12.5);
        assert_eq!(clamp_latitude(f64::NAN), 0.0);
    }
}
