//! Rotation of the central body
//!
//! A linear Greenwich mean sidereal time model: a fixed base at J2000 plus a
//! fixed rate per day, wrapped to one 24-hour cycle and converted at 15° per
//! hour.

use crate::constants::{DEG2RAD, DEG_PER_HOUR, GMST_J2000_HOURS, GMST_RATE_HOURS};
use crate::coordinates::{wrap_hours, wrap_radians};
use crate::time::AstronomicalTime;

/// Greenwich mean sidereal time in hours, [0, 24)
pub fn greenwich_sidereal_hours(time: &AstronomicalTime) -> f64 {
    wrap_hours(GMST_J2000_HOURS + GMST_RATE_HOURS * time.days_since_epoch)
}

/// Rotation angle of the central body in radians, [0, 2π)
pub fn central_body_rotation(time: &AstronomicalTime) -> f64 {
    wrap_radians(greenwich_sidereal_hours(time) * DEG_PER_HOUR * DEG2RAD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{J2000, TAU};
    use crate::time::Instant;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn at_days(days: f64) -> AstronomicalTime {
        AstronomicalTime {
            julian_day: J2000 + days,
            days_since_epoch: days,
        }
    }

    #[test]
    fn test_gmst_at_j2000() {
        assert_relative_eq!(greenwich_sidereal_hours(&at_days(0.0)), 18.697_374_558);
        assert_relative_eq!(
            central_body_rotation(&at_days(0.0)),
            18.697_374_558 * 15.0 * DEG2RAD,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_one_sidereal_day_per_turn() {
        // 0.99727 solar days bring the rotation back to the same angle
        let a = central_body_rotation(&at_days(10.0));
        let b = central_body_rotation(&at_days(10.0 + 24.0 / GMST_RATE_HOURS));
        let diff = (b - a).abs();
        assert!(diff < 1e-9 || (TAU - diff) < 1e-9);
    }

    #[test]
    fn test_rotation_always_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5_000 {
            let millis = rng.gen_range(-5_000_000_000_000i64..5_000_000_000_000i64);
            let t = Instant::from_unix_millis(millis).unwrap().astronomical_time();
            let rotation = central_body_rotation(&t);
            assert!((0.0..TAU).contains(&rotation), "rotation {}", rotation);
        }
    }
}
