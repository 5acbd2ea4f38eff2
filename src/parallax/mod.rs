//! Annual parallax
//!
//! Seen from the Earth rather than the Sun, a star at distance `r` is
//! displaced away from the Earth's heliocentric position `R`. To first order
//! in `|R| / r` the displacement along the local basis of the spherical
//! coordinate is
//!
//! ```text
//! a = −(R · ê_θ) / r
//! b = −(R · ê_φ) / (r sin θ)
//! ```
//!
//! where `a` is added to the colatitude `theta` and `b` to the azimuth `phi`.

use crate::coordinates::SphericalCoordinate;
use crate::planetlib::{HeliocentricEphemeris, SolarTheory};
use crate::time::Epoch;

/// Below this `|sin θ|` the direction is treated as lying on a pole
const POLE_SIN_THETA: f64 = 1e-12;

/// Apparent angular displacement along `(theta, phi)`, radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxOffset {
    /// Offset to add to `theta`
    pub a: f64,
    /// Offset to add to `phi`
    pub b: f64,
}

/// Computes the annual-parallax offset of a heliocentric direction
pub trait AnnualParallaxCorrector {
    fn offset(&self, epoch: &Epoch, direction: &SphericalCoordinate) -> ParallaxOffset;
}

/// First-order geometric parallax from an Earth ephemeris
#[derive(Debug, Clone, Default)]
pub struct GeometricParallax<E = SolarTheory> {
    ephemeris: E,
}

impl<E: HeliocentricEphemeris> GeometricParallax<E> {
    pub fn new(ephemeris: E) -> Self {
        Self { ephemeris }
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }
}

impl<E: HeliocentricEphemeris> AnnualParallaxCorrector for GeometricParallax<E> {
    fn offset(&self, epoch: &Epoch, direction: &SphericalCoordinate) -> ParallaxOffset {
        let earth = self.ephemeris.earth_position(epoch);
        let r = direction.r;
        let sin_theta = direction.theta.sin();

        // phi is undefined on a pole; the whole shift goes into theta
        let b = if sin_theta.abs() < POLE_SIN_THETA {
            0.0
        } else {
            -earth.dot(&direction.phi_unit()) / (r * sin_theta)
        };

        ParallaxOffset {
            a: -earth.dot(&direction.theta_unit()) / r,
            b,
        }
    }
}

impl<T: AnnualParallaxCorrector + ?Sized> AnnualParallaxCorrector for &T {
    fn offset(&self, epoch: &Epoch, direction: &SphericalCoordinate) -> ParallaxOffset {
        (**self).offset(epoch, direction)
    }
}
