//! Position calculators
//!
//! Two structurally different ways of carrying a catalog place to a target
//! epoch, behind one [`PositionCalculator`] contract:
//!
//! - [`DynamicCalculator`]: proper motion as an angular rate, distance change
//!   from radial velocity, then a separate annual-parallax offset.
//! - [`TrigonometricCalculator`]: the star moves along a straight line with a
//!   constant space velocity, and the geocentric direction comes from
//!   subtracting the Earth's heliocentric position.
//!
//! Both return `(r, theta, phi)` with `theta` the colatitude (0 at the north
//! celestial pole) and `phi` the right ascension in `[0, 2π)`, both in
//! radians, and `r` in AU. Neither applies precession, nutation or
//! aberration.
//!
//! A calculator holds nothing but its epoch and its collaborators, so `calc`
//! may be called from several threads at once through a shared reference.
//! Changing the epoch needs `&mut self`.

pub mod context;
pub mod dynamic;
pub mod trigonometric;

pub use context::EpochContext;
pub use dynamic::DynamicCalculator;
pub use trigonometric::TrigonometricCalculator;

use crate::catalogs::CatalogEntry;
use crate::coordinates::SphericalCoordinate;
use crate::time::{Epoch, JulianEpoch};
use crate::Result;

/// Common contract of the position calculators
pub trait PositionCalculator {
    /// The epoch positions are computed for
    fn epoch(&self) -> Epoch;

    /// Change the target epoch
    ///
    /// # Errors
    ///
    /// [`StarPlaceError::InvalidEpoch`](crate::StarPlaceError::InvalidEpoch)
    /// if `value` does not yield a finite elapsed time. The held epoch is
    /// left unchanged.
    fn set_epoch(&mut self, value: &dyn JulianEpoch) -> Result<()>;

    /// Place of `entry` at the held epoch
    ///
    /// A non-positive parallax is not rejected: the returned distance is
    /// non-finite or negative and the angles are unreliable.
    fn calc(&self, entry: &CatalogEntry) -> SphericalCoordinate;
}

/// Logs the degenerate-parallax case shared by both calculators
fn check_parallax(entry: &CatalogEntry) {
    if entry.parallax.is_nan() || entry.parallax <= 0.0 {
        log::warn!(
            "parallax {}\" is not positive, distance is undefined",
            entry.parallax
        );
    }
}
