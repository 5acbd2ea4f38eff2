//! Target epoch held by a calculator

use crate::constants::YEARS_PER_JULIAN_CENTURY;
use crate::time::{validate_epoch, Epoch, JulianEpoch};
use crate::Result;

/// A validated target epoch
///
/// Both calculators own one of these instead of sharing a base type; epoch
/// validation lives here and in [`validate_epoch`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EpochContext {
    epoch: Epoch,
}

impl EpochContext {
    /// Create a context from any epoch source
    ///
    /// # Errors
    ///
    /// [`StarPlaceError::InvalidEpoch`](crate::StarPlaceError::InvalidEpoch)
    /// when the source does not yield a finite elapsed time.
    pub fn new<E: JulianEpoch + ?Sized>(value: &E) -> Result<Self> {
        Ok(Self {
            epoch: validate_epoch(value)?,
        })
    }

    /// Replace the held epoch; the old one is kept on failure
    pub fn set_epoch<E: JulianEpoch + ?Sized>(&mut self, value: &E) -> Result<()> {
        let epoch = validate_epoch(value)?;
        log::trace!("epoch {} -> {}", self.epoch, epoch);
        self.epoch = epoch;
        Ok(())
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Julian years elapsed since J2000.0 at the held epoch
    pub fn elapsed_years(&self) -> f64 {
        self.epoch.julian_centuries_from_j2000() * YEARS_PER_JULIAN_CENTURY
    }
}

impl From<Epoch> for EpochContext {
    fn from(epoch: Epoch) -> Self {
        Self { epoch }
    }
}
