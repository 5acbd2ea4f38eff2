//! Spherical coordinates with a pole-referenced polar angle
//!
//! `theta` is the colatitude: 0 at the north celestial pole, π/2 on the
//! equator, π at the south pole. `phi` is the azimuth measured from the vernal
//! equinox toward RA = 90°, i.e. right ascension. Both calculators return this
//! convention, so their outputs describe the same physical angles and can be
//! compared directly.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

use super::angle::Angle;
use super::cartesian::RectangularVector;

/// Spherical coordinate `(r, theta, phi)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoordinate {
    /// Distance from the origin (AU)
    pub r: f64,
    /// Colatitude in radians
    pub theta: f64,
    /// Azimuth (right ascension) in radians
    pub phi: f64,
}

impl SphericalCoordinate {
    /// Creates a spherical coordinate from its raw components
    pub fn new(r: f64, theta: f64, phi: f64) -> Self {
        SphericalCoordinate { r, theta, phi }
    }

    /// Builds a coordinate from right ascension and declination in degrees
    pub fn from_ra_dec_degrees(r: f64, ra_deg: f64, dec_deg: f64) -> Self {
        SphericalCoordinate {
            r,
            theta: FRAC_PI_2 - dec_deg.to_radians(),
            phi: Angle::from_degrees(ra_deg).wrapped(0.0).to_radians(),
        }
    }

    /// Converts a rectangular vector into `(r, theta, phi)`
    ///
    /// `theta = acos(z / r)` lies in [0, π] and `phi = atan2(y, x)` is folded
    /// into [0, 2π). The zero vector maps to `(0, 0, 0)`.
    pub fn from_rectangular(vec: &RectangularVector) -> Self {
        let r = vec.magnitude();
        if r == 0.0 {
            return SphericalCoordinate::new(0.0, 0.0, 0.0);
        }

        let theta = (vec.z / r).clamp(-1.0, 1.0).acos();
        let phi = if vec.x == 0.0 && vec.y == 0.0 {
            0.0 // Arbitrary choice at poles
        } else {
            Angle::from_radians(vec.y.atan2(vec.x))
                .wrapped(0.0)
                .to_radians()
        };

        SphericalCoordinate { r, theta, phi }
    }

    /// Converts to an equatorial rectangular vector
    pub fn to_rectangular(&self) -> RectangularVector {
        let sin_theta = self.theta.sin();
        RectangularVector::new(
            self.r * sin_theta * self.phi.cos(),
            self.r * sin_theta * self.phi.sin(),
            self.r * self.theta.cos(),
        )
    }

    /// Unit vector along increasing `theta` (toward the south)
    pub fn theta_unit(&self) -> RectangularVector {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        RectangularVector::new(cos_theta * cos_phi, cos_theta * sin_phi, -sin_theta)
    }

    /// Unit vector along increasing `phi` (toward the east)
    pub fn phi_unit(&self) -> RectangularVector {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        RectangularVector::new(-sin_phi, cos_phi, 0.0)
    }

    /// Declination in radians, π/2 − |theta|
    ///
    /// A negative colatitude points past the pole onto the opposite meridian,
    /// so it is folded back before conversion.
    pub fn declination(&self) -> f64 {
        FRAC_PI_2 - self.theta.abs()
    }

    /// Right ascension in radians, folded into [0, 2π)
    ///
    /// Half a turn is added when `theta` is negative.
    pub fn right_ascension(&self) -> f64 {
        self.azimuth().wrapped(0.0).to_radians()
    }

    /// Right ascension in degrees, folded into [0, 360)
    pub fn ra_degrees(&self) -> f64 {
        self.azimuth().wrapped(0.0).to_degrees()
    }

    fn azimuth(&self) -> Angle {
        if self.theta < 0.0 {
            Angle::from_radians(self.phi + PI)
        } else {
            Angle::from_radians(self.phi)
        }
    }

    /// Declination in degrees
    pub fn dec_degrees(&self) -> f64 {
        Angle::from_radians(self.declination()).to_degrees()
    }

    /// Angle on the sky between two directions, ignoring distance
    pub fn separation(&self, other: &SphericalCoordinate) -> f64 {
        let a = SphericalCoordinate::new(1.0, self.theta, self.phi).to_rectangular();
        let b = SphericalCoordinate::new(1.0, other.theta, other.phi).to_rectangular();
        a.angular_distance(&b)
    }
}

impl From<RectangularVector> for SphericalCoordinate {
    fn from(vec: RectangularVector) -> Self {
        SphericalCoordinate::from_rectangular(&vec)
    }
}

impl From<SphericalCoordinate> for RectangularVector {
    fn from(sc: SphericalCoordinate) -> Self {
        sc.to_rectangular()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use std::f64::consts::PI;

    #[rstest]
    #[case(1.0, 0.3, 0.0)]
    #[case(2.5, PI / 2.0, PI / 2.0)]
    #[case(1.0e6, 0.71, 0.72)]
    #[case(10.0, 2.9, 5.5)]
    #[case(1.0, PI - 1e-3, 3.0)]
    fn test_round_trip_through_rectangular(
        #[case] r: f64,
        #[case] theta: f64,
        #[case] phi: f64,
    ) {
        let original = SphericalCoordinate::new(r, theta, phi);
        let back = SphericalCoordinate::from_rectangular(&original.to_rectangular());

        assert_abs_diff_eq!(back.r, r, epsilon = r * 1e-14);
        assert_abs_diff_eq!(back.theta, theta, epsilon = 1e-12);
        assert_abs_diff_eq!(back.phi, phi, epsilon = 1e-12);
    }

    #[test]
    fn test_colatitude_convention() {
        let north = SphericalCoordinate::from_rectangular(&RectangularVector::new(0.0, 0.0, 3.0));
        assert_eq!(north.theta, 0.0);
        assert_eq!(north.phi, 0.0);
        assert_eq!(north.r, 3.0);

        let south = SphericalCoordinate::from_rectangular(&RectangularVector::new(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(south.theta, PI, epsilon = 1e-15);

        let equator = SphericalCoordinate::from_rectangular(&RectangularVector::new(0.0, -1.0, 0.0));
        assert_abs_diff_eq!(equator.theta, PI / 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(equator.phi, 3.0 * PI / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_vector() {
        let zero = SphericalCoordinate::from_rectangular(&RectangularVector::zero());
        assert_eq!(zero, SphericalCoordinate::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_ra_dec_accessors() {
        let sc = SphericalCoordinate::from_ra_dec_degrees(1.0, 41.05, 49.2283);
        assert_abs_diff_eq!(sc.ra_degrees(), 41.05, epsilon = 1e-12);
        assert_abs_diff_eq!(sc.dec_degrees(), 49.2283, epsilon = 1e-12);
        assert_abs_diff_eq!(sc.theta, (90.0f64 - 49.2283).to_radians(), epsilon = 1e-15);

        let wrapped = SphericalCoordinate::new(1.0, 1.0, -0.25);
        assert_abs_diff_eq!(wrapped.right_ascension(), 2.0 * PI - 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_ra_dec_vector_matches_spherical() {
        let sc = SphericalCoordinate::from_ra_dec_degrees(4.0, 120.0, -30.0);
        let via_sc = sc.to_rectangular();
        let via_ra_dec = RectangularVector::from_ra_dec(120f64.to_radians(), -30f64.to_radians(), 4.0);
        assert_abs_diff_eq!(via_sc.x, via_ra_dec.x, epsilon = 1e-14);
        assert_abs_diff_eq!(via_sc.y, via_ra_dec.y, epsilon = 1e-14);
        assert_abs_diff_eq!(via_sc.z, via_ra_dec.z, epsilon = 1e-14);
    }

    #[test]
    fn test_local_basis_is_orthonormal() {
        let sc = SphericalCoordinate::new(1.0, 0.8, 2.1);
        let radial = SphericalCoordinate::new(1.0, sc.theta, sc.phi).to_rectangular();
        let e_theta = sc.theta_unit();
        let e_phi = sc.phi_unit();

        assert_abs_diff_eq!(e_theta.magnitude(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(e_phi.magnitude(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(radial.dot(&e_theta), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(radial.dot(&e_phi), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(e_theta.dot(&e_phi), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_negative_colatitude_folds_over_the_pole() {
        // theta = -30 deg at phi = 10 deg is Dec 60 on the RA 190 meridian
        let past_pole = SphericalCoordinate::new(1.0, -PI / 6.0, 10f64.to_radians());
        assert_abs_diff_eq!(past_pole.dec_degrees(), 60.0, epsilon = 1e-12);
        assert_abs_diff_eq!(past_pole.ra_degrees(), 190.0, epsilon = 1e-12);

        let same = SphericalCoordinate::from_ra_dec_degrees(1.0, 190.0, 60.0);
        assert_abs_diff_eq!(past_pole.separation(&same), 0.0, epsilon = 1e-7);
    }

    #[test]
    fn test_south_pole_at_negative_pi() {
        let south = SphericalCoordinate::new(1.0, -PI, 0.2);
        assert_abs_diff_eq!(south.dec_degrees(), -90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(south.declination(), -PI / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_separation() {
        let a = SphericalCoordinate::from_ra_dec_degrees(5.0, 10.0, 0.0);
        let b = SphericalCoordinate::from_ra_dec_degrees(9.0, 10.0, 1.0);
        assert_abs_diff_eq!(a.separation(&b), 1f64.to_radians(), epsilon = 1e-12);
    }
}
