//! Heliocentric position of the Earth
//!
//! The trigonometric calculator and the annual-parallax corrector both need
//! to know where the Earth is relative to the Sun. They ask through the
//! [`HeliocentricEphemeris`] trait; [`SolarTheory`] is the built-in provider,
//! based on the low-precision geometric solar coordinates of Meeus,
//! *Astronomical Algorithms*, ch. 25 (about 0.01° in longitude).
//!
//! All positions are returned in the J2000 mean equatorial rectangular
//! frame, in astronomical units, matching catalog (mean J2000.0) positions.

use lazy_static::lazy_static;
use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{GENERAL_PRECESSION_DEG_PER_CENTURY, OBLIQUITY_J2000_DEG};
use crate::coordinates::{Angle, RectangularVector};
use crate::time::Epoch;

lazy_static! {
    /// Rotation from the J2000 ecliptic frame to the J2000 equatorial frame
    static ref ECLIPTIC_TO_EQUATORIAL: Matrix3<f64> =
        Rotation3::from_axis_angle(&Vector3::x_axis(), OBLIQUITY_J2000_DEG.to_radians())
            .into_inner();
}

/// Source of the Earth's heliocentric position
pub trait HeliocentricEphemeris {
    /// Earth relative to the Sun at `epoch`, J2000 equatorial frame, AU
    fn earth_position(&self, epoch: &Epoch) -> RectangularVector;
}

impl<T: HeliocentricEphemeris + ?Sized> HeliocentricEphemeris for &T {
    fn earth_position(&self, epoch: &Epoch) -> RectangularVector {
        (**self).earth_position(epoch)
    }
}

/// Geometric solar coordinates referred to the mean equinox of date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    /// True geometric longitude of the Sun (degrees, [0, 360))
    pub true_longitude: f64,
    /// Mean anomaly of the Sun (degrees, [0, 360))
    pub mean_anomaly: f64,
    /// Eccentricity of the Earth's orbit
    pub eccentricity: f64,
    /// Sun–Earth distance (AU)
    pub radius_vector: f64,
}

/// Low-precision solar theory (Meeus ch. 25)
#[derive(Debug, Clone, Copy, Default)]
pub struct SolarTheory;

impl SolarTheory {
    /// Create the default solar theory
    pub fn new() -> Self {
        Self
    }

    /// Geometric coordinates of the Sun as seen from the Earth
    pub fn solar_coordinates(&self, epoch: &Epoch) -> SolarCoordinates {
        let t = epoch.julian_centuries_from_j2000();

        let mean_longitude = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
        let mean_anomaly = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
        let eccentricity = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

        let m = mean_anomaly.to_radians();
        let equation_of_center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
            + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
            + 0.000289 * (3.0 * m).sin();

        let true_longitude = mean_longitude + equation_of_center;
        let true_anomaly = mean_anomaly + equation_of_center;
        let radius_vector = 1.000001018 * (1.0 - eccentricity * eccentricity)
            / (1.0 + eccentricity * true_anomaly.to_radians().cos());

        SolarCoordinates {
            true_longitude: Angle::from_degrees(true_longitude).wrapped(0.0).to_degrees(),
            mean_anomaly: Angle::from_degrees(mean_anomaly).wrapped(0.0).to_degrees(),
            eccentricity,
            radius_vector,
        }
    }

    /// Earth relative to the Sun in the J2000 ecliptic frame (AU)
    ///
    /// The Earth sits opposite the Sun; its longitude is carried from the
    /// equinox of date back to J2000 by the general precession in longitude.
    pub fn earth_ecliptic_position(&self, epoch: &Epoch) -> RectangularVector {
        let sun = self.solar_coordinates(epoch);
        let t = epoch.julian_centuries_from_j2000();
        let longitude = Angle::from_degrees(
            sun.true_longitude + 180.0 - GENERAL_PRECESSION_DEG_PER_CENTURY * t,
        )
        .to_radians();

        RectangularVector::new(
            sun.radius_vector * longitude.cos(),
            sun.radius_vector * longitude.sin(),
            0.0,
        )
    }
}

impl HeliocentricEphemeris for SolarTheory {
    fn earth_position(&self, epoch: &Epoch) -> RectangularVector {
        let ecliptic = self.earth_ecliptic_position(epoch);
        RectangularVector::from_vector3(*ECLIPTIC_TO_EQUATORIAL * ecliptic.to_vector3())
    }
}
