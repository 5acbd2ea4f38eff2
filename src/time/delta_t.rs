//! ΔT = TT − UT in seconds
//!
//! Polynomial expressions by Espenak & Meeus (2006), the same set used in
//! the NASA eclipse canon. Outside -500..2150 the long-term parabola of
//! Morrison & Stephenson applies.

/// One polynomial piece: valid for years before `until`, evaluated in
/// `u = (year - origin) / scale`.
struct Segment {
    until: f64,
    origin: f64,
    scale: f64,
    coefficients: &'static [f64],
}

const SEGMENTS: &[Segment] = &[
    Segment {
        until: 500.0,
        origin: 0.0,
        scale: 100.0,
        coefficients: &[
            10583.6,
            -1014.41,
            33.78311,
            -5.952053,
            -0.1798452,
            0.022174192,
            0.0090316521,
        ],
    },
    Segment {
        until: 1600.0,
        origin: 1000.0,
        scale: 100.0,
        coefficients: &[
            1574.2,
            -556.01,
            71.23472,
            0.319781,
            -0.8503463,
            -0.005050998,
            0.0083572073,
        ],
    },
    Segment {
        until: 1700.0,
        origin: 1600.0,
        scale: 1.0,
        coefficients: &[120.0, -0.9808, -0.01532, 1.0 / 7129.0],
    },
    Segment {
        until: 1800.0,
        origin: 1700.0,
        scale: 1.0,
        coefficients: &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
    },
    Segment {
        until: 1860.0,
        origin: 1800.0,
        scale: 1.0,
        coefficients: &[
            13.72,
            -0.332447,
            0.0068612,
            0.0041116,
            -0.00037436,
            0.0000121272,
            -0.0000001699,
            0.000000000875,
        ],
    },
    Segment {
        until: 1900.0,
        origin: 1860.0,
        scale: 1.0,
        coefficients: &[
            7.62,
            0.5737,
            -0.251754,
            0.01680668,
            -0.0004473624,
            1.0 / 233_174.0,
        ],
    },
    Segment {
        until: 1920.0,
        origin: 1900.0,
        scale: 1.0,
        coefficients: &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197],
    },
    Segment {
        until: 1941.0,
        origin: 1920.0,
        scale: 1.0,
        coefficients: &[21.20, 0.84493, -0.076100, 0.0020936],
    },
    Segment {
        until: 1961.0,
        origin: 1950.0,
        scale: 1.0,
        coefficients: &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0],
    },
    Segment {
        until: 1986.0,
        origin: 1975.0,
        scale: 1.0,
        coefficients: &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0],
    },
    Segment {
        until: 2005.0,
        origin: 2000.0,
        scale: 1.0,
        coefficients: &[
            63.86,
            0.3345,
            -0.060374,
            0.0017275,
            0.000651814,
            0.00002373599,
        ],
    },
    Segment {
        until: 2050.0,
        origin: 2000.0,
        scale: 1.0,
        coefficients: &[62.92, 0.32217, 0.005589],
    },
];

/// Long-term parabola, centred on 1820
fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Horner evaluation, lowest order first
fn polynomial(coefficients: &[f64], u: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * u + c)
}

/// ΔT in seconds for a decimal year (e.g. 2028.87)
pub fn delta_t(year: f64) -> f64 {
    if year < -500.0 {
        return long_term(year);
    }

    if let Some(segment) = SEGMENTS.iter().find(|s| year < s.until) {
        let u = (year - segment.origin) / segment.scale;
        return polynomial(segment.coefficients, u);
    }

    if year < 2150.0 {
        // Blends the 2005-2050 prediction into the parabola
        long_term(year) - 0.5628 * (2150.0 - year)
    } else {
        long_term(year)
    }
}
