//! Downstream reduction used by the integration tests
//!
//! The calculators stop at the geometric place. Comparing with published
//! apparent places needs the rest of the chain, done here at low precision:
//! IAU 2006 precession angles, the 18 largest nutation terms (Meeus table
//! 22.A) and annual aberration in the Ron–Vondrák form of Meeus 23.3.

#![allow(dead_code)]

use starplace::constants::ASEC2RAD;
use starplace::{Epoch, SphericalCoordinate};

/// Multipliers of D, M, M', F, Ω; then Δψ and Δε in 0.0001" as (c, c·T)
const NUTATION_TERMS: [([f64; 5], [f64; 2], [f64; 2]); 18] = [
    ([0.0, 0.0, 0.0, 0.0, 1.0], [-171996.0, -174.2], [92025.0, 8.9]),
    ([-2.0, 0.0, 0.0, 2.0, 2.0], [-13187.0, -1.6], [5736.0, -3.1]),
    ([0.0, 0.0, 0.0, 2.0, 2.0], [-2274.0, -0.2], [977.0, -0.5]),
    ([0.0, 0.0, 0.0, 0.0, 2.0], [2062.0, 0.2], [-895.0, 0.5]),
    ([0.0, 1.0, 0.0, 0.0, 0.0], [1426.0, -3.4], [54.0, -0.1]),
    ([0.0, 0.0, 1.0, 0.0, 0.0], [712.0, 0.1], [-7.0, 0.0]),
    ([-2.0, 1.0, 0.0, 2.0, 2.0], [-517.0, 1.2], [224.0, -0.6]),
    ([0.0, 0.0, 0.0, 2.0, 1.0], [-386.0, -0.4], [200.0, 0.0]),
    ([0.0, 0.0, 1.0, 2.0, 2.0], [-301.0, 0.0], [129.0, -0.1]),
    ([-2.0, -1.0, 0.0, 2.0, 2.0], [217.0, -0.5], [-95.0, 0.3]),
    ([-2.0, 0.0, 1.0, 0.0, 0.0], [-158.0, 0.0], [0.0, 0.0]),
    ([-2.0, 0.0, 0.0, 2.0, 1.0], [129.0, 0.1], [-70.0, 0.0]),
    ([0.0, 0.0, -1.0, 2.0, 2.0], [123.0, 0.0], [-53.0, 0.0]),
    ([2.0, 0.0, 0.0, 0.0, 0.0], [63.0, 0.0], [0.0, 0.0]),
    ([0.0, 0.0, 1.0, 0.0, 1.0], [63.0, 0.1], [-33.0, 0.0]),
    ([2.0, 0.0, -1.0, 2.0, 2.0], [-59.0, 0.0], [26.0, 0.0]),
    ([0.0, 0.0, -1.0, 0.0, 1.0], [-58.0, -0.1], [32.0, 0.0]),
    ([0.0, 0.0, 1.0, 2.0, 1.0], [-51.0, 0.0], [27.0, 0.0]),
];

/// Constant of aberration in arcseconds
const ABERRATION_CONSTANT: f64 = 20.49552;

/// Apparent right ascension and declination in degrees
#[derive(Debug, Clone, Copy)]
pub struct ApparentPlace {
    pub ra: f64,
    pub dec: f64,
}

/// Nutation in longitude and obliquity, arcseconds
pub fn nutation(t: f64) -> (f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let arguments = [
        297.85036 + 445267.111480 * t - 0.0019142 * t2 + t3 / 189474.0,
        357.52772 + 35999.050340 * t - 0.0001603 * t2 - t3 / 300000.0,
        134.96298 + 477198.867398 * t + 0.0086972 * t2 + t3 / 56250.0,
        93.27191 + 483202.017538 * t - 0.0036825 * t2 + t3 / 327270.0,
        125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450000.0,
    ];

    let (mut dpsi, mut deps) = (0.0, 0.0);
    for (multipliers, psi, eps) in NUTATION_TERMS.iter() {
        let argument: f64 = multipliers
            .iter()
            .zip(arguments.iter())
            .map(|(m, a)| m * a)
            .sum::<f64>()
            .to_radians();
        dpsi += (psi[0] + psi[1] * t) * argument.sin();
        deps += (eps[0] + eps[1] * t) * argument.cos();
    }
    (dpsi * 1e-4, deps * 1e-4)
}

/// Mean obliquity of the ecliptic, arcseconds
pub fn mean_obliquity(t: f64) -> f64 {
    84381.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t
}

/// Precesses J2000 (RA, Dec) in radians to the mean equator of date
pub fn precess(t: f64, ra: f64, dec: f64) -> (f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let zeta = (2.650545 + 2306.083227 * t + 0.2988499 * t2 + 0.01801828 * t3
        - 0.000005971 * t4
        - 0.0000003173 * t5)
        * ASEC2RAD;
    let z = (-2.650545 + 2306.077181 * t + 1.0927348 * t2 + 0.01826837 * t3
        - 0.000028596 * t4
        - 0.0000002904 * t5)
        * ASEC2RAD;
    let theta = (2004.191903 * t - 0.4294934 * t2 - 0.04182264 * t3 - 0.000007089 * t4
        - 0.0000001274 * t5)
        * ASEC2RAD;

    let a = dec.cos() * (ra + zeta).sin();
    let b = theta.cos() * dec.cos() * (ra + zeta).cos() - theta.sin() * dec.sin();
    let c = theta.sin() * dec.cos() * (ra + zeta).cos() + theta.cos() * dec.sin();

    (a.atan2(b) + z, c.clamp(-1.0, 1.0).asin())
}

/// Applies precession, nutation and aberration to a calculator result
///
/// Right ascension and declination come from the coordinate's accessors,
/// which fold a negative colatitude back over the pole.
pub fn apparent_place(epoch: &Epoch, place: &SphericalCoordinate) -> ApparentPlace {
    let t = epoch.julian_centuries_from_j2000();
    let (ra, dec) = precess(t, place.right_ascension(), place.declination());

    let (dpsi, deps) = nutation(t);
    let eps = (mean_obliquity(t) + deps) * ASEC2RAD;
    let dpsi = dpsi * ASEC2RAD;
    let deps = deps * ASEC2RAD;

    let dra_nutation =
        (eps.cos() + eps.sin() * ra.sin() * dec.tan()) * dpsi - ra.cos() * dec.tan() * deps;
    let ddec_nutation = eps.sin() * ra.cos() * dpsi + ra.sin() * deps;

    let mean_longitude = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let mean_anomaly = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    let center = (1.914602 - 0.004817 * t - 0.000014 * t * t) * mean_anomaly.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * mean_anomaly).sin()
        + 0.000289 * (3.0 * mean_anomaly).sin();
    let sun = (mean_longitude + center).to_radians();
    let perihelion = (102.93735 + 1.71946 * t + 0.00046 * t * t).to_radians();
    let k = ABERRATION_CONSTANT * ASEC2RAD;

    let dra_aberration = -k * (ra.cos() * sun.cos() * eps.cos() + ra.sin() * sun.sin())
        / dec.cos()
        + e * k * (ra.cos() * perihelion.cos() * eps.cos() + ra.sin() * perihelion.sin())
            / dec.cos();
    let ddec_aberration = -k
        * (sun.cos() * eps.cos() * (eps.tan() * dec.cos() - ra.sin() * dec.sin())
            + ra.cos() * dec.sin() * sun.sin())
        + e * k
            * (perihelion.cos() * eps.cos() * (eps.tan() * dec.cos() - ra.sin() * dec.sin())
                + ra.cos() * dec.sin() * perihelion.sin());

    ApparentPlace {
        ra: (ra + dra_nutation + dra_aberration).to_degrees().rem_euclid(360.0),
        dec: (dec + ddec_nutation + ddec_aberration).to_degrees(),
    }
}
