//! Angular-displacement ("dynamical") method
//!
//! The catalog place is advanced by linear extrapolation of the proper motion
//! in arcseconds, the distance by the radial velocity, and the result is then
//! shifted by the annual parallax supplied by an [`AnnualParallaxCorrector`].

use super::{check_parallax, EpochContext, PositionCalculator};
use crate::catalogs::CatalogEntry;
use crate::constants::{COLATITUDE_ORIGIN_ASEC, DAYS_PER_JULIAN_YEAR, DAY_S, KM_PER_AU};
use crate::coordinates::{Angle, SphericalCoordinate};
use crate::parallax::{AnnualParallaxCorrector, GeometricParallax};
use crate::time::{Epoch, JulianEpoch};
use crate::Result;

/// Position calculator using the angular-displacement method
#[derive(Debug, Clone)]
pub struct DynamicCalculator<P = GeometricParallax> {
    context: EpochContext,
    corrector: P,
}

impl DynamicCalculator {
    /// Calculator for `epoch` using the built-in geometric parallax
    pub fn new(epoch: Epoch) -> Self {
        Self::with_parallax_corrector(epoch, GeometricParallax::default())
    }
}

impl<P: AnnualParallaxCorrector> DynamicCalculator<P> {
    /// Calculator for `epoch` with a custom annual-parallax corrector
    pub fn with_parallax_corrector(epoch: Epoch, corrector: P) -> Self {
        Self {
            context: EpochContext::from(epoch),
            corrector,
        }
    }

    pub fn parallax_corrector(&self) -> &P {
        &self.corrector
    }

    /// Heliocentric place at the held epoch, before annual parallax
    ///
    /// `theta` is the colatitude wrapped into `[−π, π)` and `phi` the right
    /// ascension wrapped into `[0, 2π)`.
    pub(crate) fn heliocentric_place(&self, entry: &CatalogEntry) -> SphericalCoordinate {
        let years = self.context.elapsed_years();

        let ra_asec = Angle::from_degrees(entry.ra).to_arcseconds();
        let dec_asec = Angle::from_degrees(entry.dec).to_arcseconds();

        let radius = entry.distance_au();

        // Linear in time, no great-circle correction
        let delta_ra = entry.pm_ra * years;
        let delta_dec = entry.pm_dec * years;

        let au_per_day = entry.rad_vel * DAY_S / KM_PER_AU;
        let delta_radius = au_per_day * years * DAYS_PER_JULIAN_YEAR;

        log::debug!(
            "d = {:.6} yr, ΔRA = {:.6}\", ΔDec = {:.6}\", Δr = {:.6} AU",
            years,
            delta_ra,
            delta_dec,
            delta_radius
        );

        SphericalCoordinate::new(
            radius + delta_radius,
            Angle::from_arcseconds(COLATITUDE_ORIGIN_ASEC - dec_asec - delta_dec)
                .wrapped(-180.0)
                .to_radians(),
            Angle::from_arcseconds(ra_asec + delta_ra)
                .wrapped(0.0)
                .to_radians(),
        )
    }
}

impl<P: AnnualParallaxCorrector> PositionCalculator for DynamicCalculator<P> {
    fn epoch(&self) -> Epoch {
        self.context.epoch()
    }

    fn set_epoch(&mut self, value: &dyn JulianEpoch) -> Result<()> {
        self.context.set_epoch(value)
    }

    fn calc(&self, entry: &CatalogEntry) -> SphericalCoordinate {
        check_parallax(entry);

        let mean = self.heliocentric_place(entry);
        let offset = self.corrector.offset(&self.context.epoch(), &mean);
        log::debug!(
            "r = {:.3} AU, parallax a = {:e} rad, b = {:e} rad",
            mean.r,
            offset.a,
            offset.b
        );

        SphericalCoordinate::new(
            mean.r,
            Angle::from_radians(mean.theta + offset.a)
                .wrapped(-180.0)
                .to_radians(),
            Angle::from_radians(mean.phi + offset.b)
                .wrapped(0.0)
                .to_radians(),
        )
    }
}
