//! Starplace: positions of stars at an arbitrary epoch
//!
//! This crate carries a star's catalog (mean, J2000.0) place forward to a
//! target epoch. It corrects for the star's space motion (proper motion and
//! radial velocity) and for annual parallax, and returns a spherical
//! coordinate `(r, theta, phi)` ready for a downstream precession, nutation
//! and aberration stage.
//!
//! Two independent calculators implement the same [`PositionCalculator`]
//! contract:
//!
//! - [`DynamicCalculator`] treats proper motion as an angular rate and applies
//!   annual parallax as a separate angular offset.
//! - [`TrigonometricCalculator`] treats the star's motion as a 3-D velocity
//!   and takes the direction from Earth's instantaneous heliocentric position.
//!
//! ```rust
//! use starplace::{CatalogEntry, DynamicCalculator, Epoch, PositionCalculator};
//!
//! let epoch = Epoch::from_jde(2462088.69).unwrap();
//! let calculator = DynamicCalculator::new(epoch);
//!
//! let theta_persei = CatalogEntry::new(41.0500, 49.2283, 0.336, -0.089, 0.089)
//!     .with_radial_velocity(25.0);
//! let place = calculator.calc(&theta_persei);
//!
//! assert!((0.0..std::f64::consts::TAU).contains(&place.phi));
//! ```

use thiserror::Error;

pub mod calculator;
pub mod catalogs;
pub mod constants;
pub mod coordinates;
pub mod parallax;
pub mod planetlib;
pub mod time;

// Re-export commonly used types
pub use calculator::{
    DynamicCalculator, EpochContext, PositionCalculator, TrigonometricCalculator,
};
pub use catalogs::CatalogEntry;
pub use coordinates::{Angle, RectangularVector, SphericalCoordinate};
pub use parallax::{AnnualParallaxCorrector, GeometricParallax, ParallaxOffset};
pub use planetlib::{HeliocentricEphemeris, SolarTheory};
pub use time::{Epoch, JulianEpoch};

/// Main error type for the starplace library
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StarPlaceError {
    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),

    #[error("Calendar error: {0}")]
    CalendarError(String),
}

/// Result type for starplace operations
pub type Result<T> = std::result::Result<T, StarPlaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StarPlaceError::InvalidEpoch("elapsed centuries is NaN".to_string());
        assert_eq!(err.to_string(), "Invalid epoch: elapsed centuries is NaN");

        let err = StarPlaceError::CalendarError("month 13".to_string());
        assert_eq!(err.to_string(), "Calendar error: month 13");
    }
}
