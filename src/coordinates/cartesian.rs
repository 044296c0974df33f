//! # Scene Cartesian Coordinates
//!
//! `Cartesian3` is the vector type every stage of the engine speaks: orbit
//! series produce it, the observer model and phenomena detectors consume it,
//! and the frame projector rescales it for display.
//!
//! ## Coordinate System Convention
//!
//! The engine uses a right-handed, **y-up** scene convention:
//! - **X-axis**: Toward ecliptic longitude 0° (the vernal equinox)
//! - **Y-axis**: Toward the north ecliptic pole ("up")
//! - **Z-axis**: Toward ecliptic longitude 270°
//!
//! so the ecliptic is the `y = 0` plane and longitudes increase
//! counter-clockwise when viewed from `+y`.
//!
//! ## Units
//!
//! Positions are in engine scale units (see [`crate::constants::KM_PER_UNIT`]).
//! Directions are plain unit vectors.
//!
//! ## Examples
//!
//! ```rust
//! use orrery::coordinates::cartesian::Cartesian3;
//!
//! let equinox = Cartesian3::new(1.0, 0.0, 0.0);
//! let pole = Cartesian3::new(0.0, 1.0, 0.0);
//! assert_eq!(equinox.dot(&pole), 0.0);
//! ```

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Three-dimensional position or direction in the engine's scene space
///
/// This type can represent both:
/// - **Position vectors**: body or observer locations in scale units
/// - **Unit vectors**: directions between bodies (magnitude = 1.0)
///
/// The interpretation depends on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component (toward ecliptic longitude 0°)
    pub x: f64,
    /// Y-component (toward the north ecliptic pole)
    pub y: f64,
    /// Z-component (toward ecliptic longitude 270°)
    pub z: f64,
}

impl Cartesian3 {
    /// The origin of the scene
    pub const ZERO: Cartesian3 = Cartesian3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector toward ecliptic longitude 0°
    pub const UNIT_X: Cartesian3 = Cartesian3 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector toward the north ecliptic pole
    pub const UNIT_Y: Cartesian3 = Cartesian3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// Creates a new Cartesian coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 0.0, 0.0);
    /// assert_eq!(coord.x, 1.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Creates a position from ecliptic spherical coordinates
    ///
    /// # Arguments
    ///
    /// * `lon` - Ecliptic longitude in radians
    /// * `lat` - Ecliptic latitude in radians
    /// * `distance` - Distance from the origin
    ///
    /// # Mathematical Conversion
    ///
    /// - `x =  distance * cos(lat) * cos(lon)`
    /// - `y =  distance * sin(lat)`
    /// - `z = -distance * cos(lat) * sin(lon)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::PI;
    ///
    /// let quarter = Cartesian3::from_ecliptic(PI / 2.0, 0.0, 2.0);
    /// assert!(quarter.x.abs() < 1e-15);
    /// assert!((quarter.z + 2.0).abs() < 1e-15);
    /// ```
    pub fn from_ecliptic(lon: f64, lat: f64, distance: f64) -> Self {
        let cos_lat = lat.cos();
        Cartesian3 {
            x: distance * cos_lat * lon.cos(),
            y: distance * lat.sin(),
            z: -distance * cos_lat * lon.sin(),
        }
    }

    /// Converts to ecliptic spherical coordinates
    ///
    /// Returns `(lon, lat, distance)` with longitude in [0, 2π) and latitude
    /// in [-π/2, π/2]. The zero vector maps to `(0, 0, 0)`.
    pub fn to_ecliptic(&self) -> (f64, f64, f64) {
        let distance = self.magnitude();

        if distance == 0.0 {
            return (0.0, 0.0, 0.0);
        }

        let lat = (self.y / distance).clamp(-1.0, 1.0).asin();
        let lon = if self.x == 0.0 && self.z == 0.0 {
            0.0 // Arbitrary choice at poles
        } else {
            let lon = (-self.z).atan2(self.x);
            if lon < 0.0 {
                lon + 2.0 * PI
            } else {
                lon
            }
        };

        (lon, lat, distance)
    }

    /// Calculates the magnitude (length) of the coordinate vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::cartesian::Cartesian3;
    ///
    /// assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Whether every component is exactly zero
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Returns a unit vector in the same direction, or `None` for a
    /// zero-length (or non-finite) vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::cartesian::Cartesian3;
    ///
    /// let unit = Cartesian3::new(3.0, 4.0, 0.0).normalize().unwrap();
    /// assert_eq!(unit.x, 0.6);
    /// assert!(Cartesian3::ZERO.normalize().is_none());
    /// ```
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Unit vector pointing from `self` toward `target`
    ///
    /// `None` when the two points coincide.
    pub fn direction_to(&self, target: &Cartesian3) -> Option<Cartesian3> {
        (*target - *self).normalize()
    }

    /// Calculates the dot product with another coordinate
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another coordinate
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angle between two vectors in radians, in [0, π]
    ///
    /// Returns 0.0 when either vector has zero length.
    pub fn angular_distance(&self, other: &Cartesian3) -> f64 {
        let mag_product = self.magnitude() * other.magnitude();

        if mag_product == 0.0 {
            return 0.0;
        }

        let cos_angle = self.dot(other) / mag_product;

        // Handle numerical precision issues
        if cos_angle >= 1.0 {
            0.0
        } else if cos_angle <= -1.0 {
            PI
        } else {
            cos_angle.acos()
        }
    }

    /// Rotates the vector about the scene x-axis by `angle` radians
    ///
    /// Positive angles follow the right-hand rule, tipping `+y` toward `+z`.
    pub fn rotate_about_x(&self, angle: f64) -> Cartesian3 {
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), angle);
        Cartesian3::from_vector3(rotation * self.to_vector3())
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(vec: Vector3<f64>) -> Self {
        Cartesian3::from_vector3(vec)
    }
}

impl From<Cartesian3> for Vector3<f64> {
    fn from(coord: Cartesian3) -> Self {
        coord.to_vector3()
    }
}

macro_rules! componentwise_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl std::ops::$trait for Cartesian3 {
            type Output = Cartesian3;

            fn $method(self, other: Cartesian3) -> Cartesian3 {
                Cartesian3::new(self.x $op other.x, self.y $op other.y, self.z $op other.z)
            }
        }
    };
}

macro_rules! scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl std::ops::$trait<f64> for Cartesian3 {
            type Output = Cartesian3;

            fn $method(self, scalar: f64) -> Cartesian3 {
                Cartesian3::new(self.x $op scalar, self.y $op scalar, self.z $op scalar)
            }
        }
    };
}

componentwise_op!(Add, add, +);
componentwise_op!(Sub, sub, -);
scalar_op!(Mul, mul, *);
scalar_op!(Div, div, /);

impl std::ops::Neg for Cartesian3 {
    type Output = Cartesian3;

    fn neg(self) -> Cartesian3 {
        Cartesian3::new(-self.x, -self.y, -self.z)
    }
}
