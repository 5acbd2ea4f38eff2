//! # Rectangular Coordinate Module
//!
//! Equatorial rectangular vectors used by the trigonometric method and by the
//! Earth ephemeris.
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: Points toward the vernal equinox (RA = 0°, Dec = 0°)
//! - **Y-axis**: Points toward RA = 90°, Dec = 0°
//! - **Z-axis**: Points toward the north celestial pole (Dec = +90°)
//!
//! Components are in astronomical units for positions and AU/day for
//! velocities; the type itself does not track which.
//!
//! ## Examples
//!
//! ```rust
//! use starplace::coordinates::RectangularVector;
//!
//! let star = RectangularVector::new(3.0, 4.0, 0.0);
//! let earth = RectangularVector::new(1.0, 0.0, 0.0);
//! let geocentric = star - earth;
//! assert_eq!(geocentric.x, 2.0);
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::spherical::SphericalCoordinate;

/// Three-dimensional equatorial rectangular vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularVector {
    /// X-component (toward vernal equinox)
    pub x: f64,
    /// Y-component (toward RA = 90°)
    pub y: f64,
    /// Z-component (toward north celestial pole)
    pub z: f64,
}

impl RectangularVector {
    /// Creates a new rectangular vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        RectangularVector { x, y, z }
    }

    /// The zero vector
    pub fn zero() -> Self {
        RectangularVector::new(0.0, 0.0, 0.0)
    }

    /// Builds the vector of length `distance` pointing at (`ra`, `dec`), both in radians
    ///
    /// - `x = distance * cos(dec) * cos(ra)`
    /// - `y = distance * cos(dec) * sin(ra)`
    /// - `z = distance * sin(dec)`
    pub fn from_ra_dec(ra: f64, dec: f64, distance: f64) -> Self {
        let cos_dec = dec.cos();
        RectangularVector {
            x: distance * cos_dec * ra.cos(),
            y: distance * cos_dec * ra.sin(),
            z: distance * dec.sin(),
        }
    }

    /// Converts to the spherical system (r, colatitude, azimuth)
    ///
    /// Shorthand for [`SphericalCoordinate::from_rectangular`].
    pub fn to_spherical(&self) -> SphericalCoordinate {
        SphericalCoordinate::from_rectangular(self)
    }

    /// Euclidean length of the vector
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &RectangularVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Angle between two vectors in radians, in [0, π]
    pub fn angular_distance(&self, other: &RectangularVector) -> f64 {
        let mag_product = self.magnitude() * other.magnitude();
        if mag_product == 0.0 {
            return 0.0;
        }

        // Clamp against rounding just outside [-1, 1]
        let cos_angle = (self.dot(other) / mag_product).clamp(-1.0, 1.0);
        cos_angle.acos()
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        RectangularVector {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<Vector3<f64>> for RectangularVector {
    fn from(vec: Vector3<f64>) -> Self {
        RectangularVector::from_vector3(vec)
    }
}

impl From<RectangularVector> for Vector3<f64> {
    fn from(vec: RectangularVector) -> Self {
        vec.to_vector3()
    }
}

impl std::ops::Add for RectangularVector {
    type Output = RectangularVector;

    fn add(self, other: RectangularVector) -> RectangularVector {
        RectangularVector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for RectangularVector {
    type Output = RectangularVector;

    fn sub(self, other: RectangularVector) -> RectangularVector {
        RectangularVector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for RectangularVector {
    type Output = RectangularVector;

    fn mul(self, scalar: f64) -> RectangularVector {
        RectangularVector {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Neg for RectangularVector {
    type Output = RectangularVector;

    fn neg(self) -> RectangularVector {
        RectangularVector {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
