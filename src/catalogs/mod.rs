//! Catalog input for the position calculators
//!
//! A [`CatalogEntry`] is the mean place of one star at J2000.0 together with
//! its space motion. Field names serialize as the conventional catalog
//! column names (`RA`, `Dec`, `PMRA`, `PMDec`, `radVel`, `parallax`), and a
//! missing `radVel` deserializes as zero.

use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::constants::ASEC2RAD;

/// Mean place and space motion of a star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Mean right ascension in degrees (J2000.0)
    #[serde(rename = "RA")]
    pub ra: f64,
    /// Mean declination in degrees (J2000.0)
    #[serde(rename = "Dec")]
    pub dec: f64,
    /// Proper motion in right ascension (arcsec per Julian century)
    #[serde(rename = "PMRA")]
    pub pm_ra: f64,
    /// Proper motion in declination (arcsec per Julian century)
    #[serde(rename = "PMDec")]
    pub pm_dec: f64,
    /// Heliocentric radial velocity in km/s, positive when receding
    #[serde(rename = "radVel", default)]
    pub rad_vel: f64,
    /// Annual parallax in arcseconds
    ///
    /// Must be strictly positive for a finite distance. Zero or negative
    /// values are not rejected; they carry through as a non-finite or
    /// meaningless distance.
    pub parallax: f64,
}

impl CatalogEntry {
    /// Create an entry with zero radial velocity
    pub fn new(ra: f64, dec: f64, pm_ra: f64, pm_dec: f64, parallax: f64) -> Self {
        Self {
            ra,
            dec,
            pm_ra,
            pm_dec,
            rad_vel: 0.0,
            parallax,
        }
    }

    /// Set the heliocentric radial velocity (km/s)
    pub fn with_radial_velocity(mut self, rad_vel: f64) -> Self {
        self.rad_vel = rad_vel;
        self
    }

    /// Parallax in radians
    pub fn parallax_radians(&self) -> f64 {
        self.parallax * ASEC2RAD
    }

    /// Heliocentric distance in AU, `1 / parallax` with parallax in radians
    pub fn distance_au(&self) -> f64 {
        1.0 / self.parallax_radians()
    }

    /// Unit vector of the mean direction in the equatorial frame
    pub fn unit_vector(&self) -> na::Vector3<f64> {
        let ra_rad = self.ra.to_radians();
        let dec_rad = self.dec.to_radians();

        na::Vector3::new(
            dec_rad.cos() * ra_rad.cos(),
            dec_rad.cos() * ra_rad.sin(),
            dec_rad.sin(),
        )
    }
}
