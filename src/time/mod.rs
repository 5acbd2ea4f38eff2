//! Time module for epoch handling
//!
//! An [`Epoch`] is an instant on the Terrestrial Time scale, stored as a
//! Julian Ephemeris Date. The calculators only need the elapsed time since
//! J2000.0, which every epoch source exposes through the [`JulianEpoch`]
//! capability. [`validate_epoch`] turns any such source into an `Epoch`,
//! rejecting sources whose elapsed time is not a finite number.
//!
//! Calendar inputs (`chrono` datetimes, year/month/day) are read as UT and
//! converted to TT with [`delta_t()`].

pub mod delta_t;

pub use delta_t::delta_t;

use crate::constants::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, DAY_S, J2000, JULIAN_YEAR_ZERO_JD,
    YEARS_PER_JULIAN_CENTURY,
};
use crate::{Result, StarPlaceError};
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability shared by every value that can serve as a target epoch
pub trait JulianEpoch {
    /// Julian centuries of TT elapsed since J2000.0 (negative before it)
    fn julian_centuries_from_j2000(&self) -> f64;
}

/// Converts an epoch source into a checked [`Epoch`]
///
/// # Errors
///
/// [`StarPlaceError::InvalidEpoch`] when the elapsed-centuries figure is NaN
/// or infinite.
pub fn validate_epoch<E: JulianEpoch + ?Sized>(value: &E) -> Result<Epoch> {
    Epoch::from_julian_centuries(value.julian_centuries_from_j2000())
}

/// An instant on the TT scale, held as a Julian Ephemeris Date
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Epoch {
    jde: f64,
}

impl Epoch {
    /// Create an epoch from a Julian Ephemeris Date
    ///
    /// # Errors
    ///
    /// [`StarPlaceError::InvalidEpoch`] for NaN or infinite dates.
    pub fn from_jde(jde: f64) -> Result<Self> {
        if !jde.is_finite() {
            return Err(StarPlaceError::InvalidEpoch(format!(
                "Julian ephemeris date must be finite, got {}",
                jde
            )));
        }
        Ok(Self { jde })
    }

    /// Create an epoch from Julian centuries of TT since J2000.0
    pub fn from_julian_centuries(centuries: f64) -> Result<Self> {
        if !centuries.is_finite() {
            return Err(StarPlaceError::InvalidEpoch(format!(
                "elapsed Julian centuries must be finite, got {}",
                centuries
            )));
        }
        Self::from_jde(J2000 + centuries * DAYS_PER_JULIAN_CENTURY)
    }

    /// The J2000.0 reference epoch itself
    pub fn j2000() -> Self {
        Self { jde: J2000 }
    }

    /// Create an epoch from a UTC datetime, treating it as UT
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        let seconds = dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 * 1e-9;
        let jd_ut = julian_day_number(dt.year() as i64, dt.month() as i64, dt.day() as i64) as f64
            - 0.5
            + seconds / DAY_S;
        Self::from_ut_julian_date(jd_ut)
    }

    /// Create an epoch from a proleptic Gregorian calendar date in UT
    ///
    /// `day` may carry a fraction of a day (`25.5` is noon on the 25th).
    /// Astronomical year numbering: year 0 is 1 BC, year -2200 is 2201 BC.
    ///
    /// # Errors
    ///
    /// [`StarPlaceError::CalendarError`] when the month is outside 1..=12 or
    /// the day is outside [1, 32).
    pub fn from_calendar(year: i32, month: u32, day: f64) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(StarPlaceError::CalendarError(format!(
                "month must be within 1..=12, got {}",
                month
            )));
        }
        if !(1.0..32.0).contains(&day) {
            return Err(StarPlaceError::CalendarError(format!(
                "day must be within [1, 32), got {}",
                day
            )));
        }

        let whole_day = day.floor();
        let jd_ut = julian_day_number(year as i64, month as i64, whole_day as i64) as f64 - 0.5
            + (day - whole_day);
        Ok(Self::from_ut_julian_date(jd_ut))
    }

    /// Applies ΔT to a UT Julian date
    fn from_ut_julian_date(jd_ut: f64) -> Self {
        let year = (jd_ut - JULIAN_YEAR_ZERO_JD) / DAYS_PER_JULIAN_YEAR;
        let jde = jd_ut + delta_t(year) / DAY_S;
        log::trace!("UT JD {} -> JDE {} (ΔT {:.1} s)", jd_ut, jde, delta_t(year));
        Self { jde }
    }

    /// Julian Ephemeris Date
    pub fn jde(&self) -> f64 {
        self.jde
    }

    /// Julian centuries of TT elapsed since J2000.0
    pub fn julian_centuries_from_j2000(&self) -> f64 {
        (self.jde - J2000) / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian years of TT elapsed since J2000.0
    pub fn julian_years_from_j2000(&self) -> f64 {
        self.julian_centuries_from_j2000() * YEARS_PER_JULIAN_CENTURY
    }

    /// Decimal Julian year, e.g. 2028.87
    pub fn julian_year(&self) -> f64 {
        (self.jde - JULIAN_YEAR_ZERO_JD) / DAYS_PER_JULIAN_YEAR
    }
}

impl Default for Epoch {
    fn default() -> Self {
        Self::j2000()
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JDE {:.6}", self.jde)
    }
}

impl JulianEpoch for Epoch {
    fn julian_centuries_from_j2000(&self) -> f64 {
        Epoch::julian_centuries_from_j2000(self)
    }
}

impl JulianEpoch for DateTime<Utc> {
    fn julian_centuries_from_j2000(&self) -> f64 {
        Epoch::from_datetime(self).julian_centuries_from_j2000()
    }
}

impl From<DateTime<Utc>> for Epoch {
    fn from(dt: DateTime<Utc>) -> Self {
        Epoch::from_datetime(&dt)
    }
}

/// Julian day number (the JD at noon) of a proleptic Gregorian date
///
/// Explanatory Supplement to the Astronomical Almanac 15.11, with floor
/// division so that years before -4716 stay correct.
pub fn julian_day_number(year: i64, month: i64, day: i64) -> i64 {
    let janfeb = month <= 2;
    let g = year + 4716 - if janfeb { 1 } else { 0 };
    let f = (month + 9).rem_euclid(12);
    let e = (1461 * g).div_euclid(4) + day - 1402;
    let j = e + (153 * f + 2).div_euclid(5);
    j + 38 - ((g + 184).div_euclid(100) * 3).div_euclid(4)
}
