//! Rectilinear space-velocity ("trigonometric") method
//!
//! The star is placed at its catalog distance, moved along a straight line
//! with a constant equatorial velocity, and viewed from the Earth by
//! subtracting the Earth's heliocentric position. Annual parallax falls out
//! of that subtraction, so there is no separate parallax step.
//!
//! The velocity is built in the local tangent frame of the catalog direction,
//! with axes east (RA), north (Dec) and radial:
//!
//! ```text
//!     | −cosδ sinα   −sinδ cosα   cosδ cosα |   | v_RA  |
//! V = |  cosδ cosα   −sinδ sinα   cosδ sinα | · | v_Dec |
//!     |      0          cosδ        sinδ    |   | v_rad |
//! ```

use nalgebra::{Matrix3, Vector3};

use super::{check_parallax, EpochContext, PositionCalculator};
use crate::catalogs::CatalogEntry;
use crate::constants::{DAYS_PER_JULIAN_CENTURY, DAY_S, KM_PER_AU};
use crate::coordinates::{RectangularVector, SphericalCoordinate};
use crate::planetlib::{HeliocentricEphemeris, SolarTheory};
use crate::time::{Epoch, JulianEpoch};
use crate::Result;

/// Position calculator using the rectilinear space-velocity method
#[derive(Debug, Clone)]
pub struct TrigonometricCalculator<E = SolarTheory> {
    context: EpochContext,
    ephemeris: E,
}

impl TrigonometricCalculator {
    /// Calculator for `epoch` using the built-in solar theory
    pub fn new(epoch: Epoch) -> Self {
        Self::with_ephemeris(epoch, SolarTheory::new())
    }
}

impl<E: HeliocentricEphemeris> TrigonometricCalculator<E> {
    /// Calculator for `epoch` with a custom Earth ephemeris
    pub fn with_ephemeris(epoch: Epoch, ephemeris: E) -> Self {
        Self {
            context: EpochContext::from(epoch),
            ephemeris,
        }
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Equatorial space velocity of `entry` in AU/day
    ///
    /// The transverse components are `PM / 36525 / parallax`; the radial one
    /// is the radial velocity converted from km/s.
    pub fn space_velocity(entry: &CatalogEntry) -> RectangularVector {
        let (sin_ra, cos_ra) = entry.ra.to_radians().sin_cos();
        let (sin_dec, cos_dec) = entry.dec.to_radians().sin_cos();

        let tangent = Matrix3::new(
            -cos_dec * sin_ra,
            -sin_dec * cos_ra,
            cos_dec * cos_ra,
            cos_dec * cos_ra,
            -sin_dec * sin_ra,
            cos_dec * sin_ra,
            0.0,
            cos_dec,
            sin_dec,
        );

        let local = Vector3::new(
            entry.pm_ra / DAYS_PER_JULIAN_CENTURY / entry.parallax,
            entry.pm_dec / DAYS_PER_JULIAN_CENTURY / entry.parallax,
            entry.rad_vel * DAY_S / KM_PER_AU,
        );

        RectangularVector::from_vector3(tangent * local)
    }

    /// Geocentric rectangular position at the held epoch (AU)
    pub fn geocentric_vector(&self, entry: &CatalogEntry) -> RectangularVector {
        let years = self.context.elapsed_years();
        let epoch = self.context.epoch();

        let position = entry.unit_vector() * entry.distance_au();
        let velocity = Self::space_velocity(entry);
        let earth = self.ephemeris.earth_position(&epoch);

        log::debug!(
            "d = {:.6} yr, V = ({:e}, {:e}, {:e}) AU/day, R = ({:.6}, {:.6}, {:.6}) AU",
            years,
            velocity.x,
            velocity.y,
            velocity.z,
            earth.x,
            earth.y,
            earth.z
        );

        RectangularVector::from_vector3(position) + velocity * years - earth
    }
}

impl<E: HeliocentricEphemeris> PositionCalculator for TrigonometricCalculator<E> {
    fn epoch(&self) -> Epoch {
        self.context.epoch()
    }

    fn set_epoch(&mut self, value: &dyn JulianEpoch) -> Result<()> {
        self.context.set_epoch(value)
    }

    fn calc(&self, entry: &CatalogEntry) -> SphericalCoordinate {
        check_parallax(entry);
        self.geocentric_vector(entry).to_spherical()
    }
}
