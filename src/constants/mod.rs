//! Constants module for star position calculations

use std::f64::consts::PI;

// Astronomical distances
/// Kilometres in one astronomical unit, as used for radial velocity conversion
pub const KM_PER_AU: f64 = 149_597_870.0;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian ephemeris date
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian year
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;
/// Days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
/// Julian years in a Julian century
pub const YEARS_PER_JULIAN_CENTURY: f64 = 100.0;

// Angles
/// Arcseconds in a complete circle
pub const ASEC360: f64 = 1_296_000.0;
/// Arcseconds in one degree
pub const ASEC_PER_DEG: f64 = 3_600.0;
/// Arcseconds to radians conversion factor
pub const ASEC2RAD: f64 = 4.848_136_811_095_36e-6;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

/// 90 degrees in arcseconds: the colatitude of the celestial equator.
///
/// Subtracting a declination (in arcseconds) from this value yields the
/// pole-referenced polar angle used by [`SphericalCoordinate`](crate::coordinates::SphericalCoordinate).
pub const COLATITUDE_ORIGIN_ASEC: f64 = 324_000.0;

// Earth orbit
/// Mean obliquity of the ecliptic at J2000.0 in degrees (IAU 1980)
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;
/// General precession in longitude, degrees per Julian century
pub const GENERAL_PRECESSION_DEG_PER_CENTURY: f64 = 1.397;

// Calendar constants
/// Julian day number offset used to express Julian years (year 0.0 = JD 1721045.0)
pub const JULIAN_YEAR_ZERO_JD: f64 = 1_721_045.0;
