pub mod angle;
pub mod cartesian;

pub use angle::{clamp_latitude, wrap_degrees, wrap_hours, wrap_longitude, wrap_radians};
pub use cartesian::Cartesian3;

/// Position or direction in scene space
pub type Vec3 = Cartesian3;

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_ecliptic_longitude_normalized() {
        // Longitudes past a full turn come back inside [0, 2π)
        let coord = Vec3::from_ecliptic(2.0 * PI + 0.25, 0.0, 1.0);
        let (lon, _, _) = coord.to_ecliptic();
        assert!((lon - 0.25).abs() < 1e-12);
        assert!((wrap_radians(2.0 * PI + 0.25) - lon).abs() < 1e-12);
    }
}
