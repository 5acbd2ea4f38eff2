//! # Angle Representation Module
//!
//! This module provides the angle value type used by the position calculators.
//! Catalog positions arrive in degrees, proper-motion displacements in
//! arcseconds, and the trigonometry runs in radians, so an `Angle` remembers the
//! unit it was built from and only converts when asked.
//!
//! ## Internal Storage
//!
//! The `Angle` struct uses an enum-based storage system:
//! - Values provided in degrees are stored exactly as degrees
//! - Values provided in arcseconds are stored exactly as arcseconds
//! - Values provided in radians are stored exactly as radians
//! - Conversion only occurs when explicitly requested
//!
//! ## Normalization
//!
//! [`Angle::wrapped`] folds an angle into a half-open window one full turn wide,
//! `[start, start + 360°)`, keeping the stored unit. The calculators use
//! `wrapped(0.0)` for right ascension and `wrapped(-180.0)` for the polar axis.
//!
//! `Angle` is `Copy` and carries no shared state, so every calculation builds
//! the values it needs on the spot.
//!
//! ## Examples
//!
//! ```rust
//! use starplace::coordinates::angle::Angle;
//!
//! let ra = Angle::from_degrees(41.05);
//! assert!((ra.to_arcseconds() - 147_780.0).abs() < 1e-9);
//!
//! // 370 degrees folds back into [0, 360)
//! let folded = Angle::from_degrees(370.0).wrapped(0.0);
//! assert!((folded.to_degrees() - 10.0).abs() < 1e-12);
//! ```

use crate::constants::{ASEC2RAD, ASEC360, ASEC_PER_DEG, TAU};
use std::f64::consts::PI;

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in arcseconds
    Arcseconds(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// Represents an angular measurement in the unit it was created with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    /// Internal storage maintaining original format and value
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use starplace::coordinates::angle::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert_eq!(right_angle.to_degrees(), 90.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in arcseconds
    ///
    /// # Examples
    ///
    /// ```rust
    /// use starplace::coordinates::angle::Angle;
    ///
    /// let right_angle = Angle::from_arcseconds(324_000.0);
    /// assert_eq!(right_angle.to_degrees(), 90.0);
    /// ```
    pub fn from_arcseconds(arcseconds: f64) -> Self {
        Angle {
            angle: AngleFormat::Arcseconds(arcseconds),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Creates an angle from hours, minutes and seconds of time (15 degrees per hour)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use starplace::coordinates::angle::Angle;
    ///
    /// let ra = Angle::from_hms(2.0, 44.0, 12.0);
    /// assert!((ra.to_degrees() - 41.05).abs() < 1e-12);
    /// ```
    pub fn from_hms(hours: f64, minutes: f64, seconds: f64) -> Self {
        Self::from_arcseconds((hours * 3600.0 + minutes * 60.0 + seconds) * 15.0)
    }

    /// Creates an angle from degrees, arcminutes and arcseconds
    ///
    /// The sign of `degrees` applies to the whole value, so southern
    /// declinations are written `from_dms(-16.0, 42.0, 58.0)`. A negative
    /// zero (`-0.0`) is honoured for declinations between 0 and -1 degree.
    pub fn from_dms(degrees: f64, arcminutes: f64, arcseconds: f64) -> Self {
        let magnitude = degrees.abs() * ASEC_PER_DEG + arcminutes * 60.0 + arcseconds;
        if degrees.is_sign_negative() {
            Self::from_arcseconds(-magnitude)
        } else {
            Self::from_arcseconds(magnitude)
        }
    }

    /// Returns the angle value in degrees
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Arcseconds(asec) => asec / ASEC_PER_DEG,
            AngleFormat::Radians(rad) => rad * (180.0 / PI),
        }
    }

    /// Returns the angle value in arcseconds
    pub fn to_arcseconds(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * ASEC_PER_DEG,
            AngleFormat::Arcseconds(asec) => asec,
            AngleFormat::Radians(rad) => rad / ASEC2RAD,
        }
    }

    /// Returns the angle value in radians
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * (PI / 180.0),
            AngleFormat::Arcseconds(asec) => asec * ASEC2RAD,
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Returns the internal format of this angle
    pub fn format(&self) -> AngleFormat {
        self.angle
    }

    /// Folds the angle into `[start_degrees, start_degrees + 360)`
    ///
    /// The result keeps the unit the angle was stored in. Non-finite angles
    /// stay non-finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use starplace::coordinates::angle::Angle;
    ///
    /// let polar = Angle::from_degrees(200.0).wrapped(-180.0);
    /// assert!((polar.to_degrees() + 160.0).abs() < 1e-12);
    ///
    /// let ra = Angle::from_radians(-0.5).wrapped(0.0);
    /// assert!(ra.to_radians() > 0.0);
    /// ```
    pub fn wrapped(&self, start_degrees: f64) -> Angle {
        match self.angle {
            AngleFormat::Degrees(deg) => {
                Angle::from_degrees(wrap_into(deg, start_degrees, 360.0))
            }
            AngleFormat::Arcseconds(asec) => Angle::from_arcseconds(wrap_into(
                asec,
                start_degrees * ASEC_PER_DEG,
                ASEC360,
            )),
            AngleFormat::Radians(rad) => Angle::from_radians(wrap_into(
                rad,
                start_degrees.to_radians(),
                TAU,
            )),
        }
    }
}

/// Folds `value` into `[start, start + period)`.
fn wrap_into(value: f64, start: f64, period: f64) -> f64 {
    let folded = start + (value - start).rem_euclid(period);
    // rem_euclid can round up to exactly `period` for tiny negative offsets
    if folded >= start + period {
        start
    } else {
        folded
    }
}
