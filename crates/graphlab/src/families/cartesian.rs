//! Explicit `y = f(x)` families (ids 1-16).

use std::f64::consts::PI;

use super::{cycle, ids, wave};
use crate::{
    Registry,
    domain::{Domain, Kind},
    error::Result,
    family::{CurveFamily, Formula},
    sampling::{EPS, cartesian, cartesian_where},
};

/// Shorthand for a cartesian default domain.
const fn span(start: f64, stop: f64, samples: usize) -> Domain {
    Domain::new(Kind::Cartesian, start, stop, samples)
}

/// Tangent samples with `|cos(arg)|` at or below this are treated as poles.
const TANGENT_POLE_BAND: f64 = 0.02;

/// Exponents cycled by the power-law presets.
const POWER_EXPONENTS: [f64; 10] = [0.5, 1.5, 2.5, 3.0, 0.8, 1.2, 2.2, 2.8, 3.5, 1.7];

/// `(b, d)` frequency pairs cycled by the cosine-sum presets.
const COSINE_PAIRS: [(f64, f64); 10] = [
    (1.0, 2.0),
    (2.0, 3.0),
    (3.0, 5.0),
    (1.0, 5.0),
    (2.0, 7.0),
    (3.0, 7.0),
    (5.0, 8.0),
    (5.0, 9.0),
    (7.0, 9.0),
    (8.0, 13.0),
];

/// Register the cartesian families in id order.
#[allow(clippy::too_many_lines, reason = "one flat table entry per family")]
pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(CurveFamily::new(
        ids::LINEAR,
        "Linear",
        Kind::Cartesian,
        "y = a*x + b",
        span(-10.0, 10.0, 1200),
        Formula {
            params: ["a", "b"],
            eval: |d, [a, b]| cartesian(d, |x| a * x + b),
            // Slopes spread around 1.0, centred on the middle preset.
            preset: |i, n| [(i as f64 - (n / 2) as f64) * 0.4 + 1.0, wave(i, 3, 1) * 2.0],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::QUADRATIC,
        "Quadratic",
        Kind::Cartesian,
        "y = a*x^2 + b*x + c",
        span(-6.0, 6.0, 1400),
        Formula {
            params: ["a", "b", "c"],
            eval: |d, [a, b, c]| cartesian(d, |x| a * x * x + b * x + c),
            preset: |i, _| [0.5 + 0.2 * i as f64, wave(i, 4, 2) * 0.8, wave(i, 5, 2) * 1.2],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::CUBIC,
        "Cubic (odd)",
        Kind::Cartesian,
        "y = a*x^3 + b*x",
        span(-4.0, 4.0, 1400),
        Formula {
            params: ["a", "b"],
            eval: |d, [a, b]| cartesian(d, |x| a * x.powi(3) + b * x),
            preset: |i, _| [0.2 + 0.1 * i as f64, wave(i, 5, 2) * 0.8],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::QUARTIC,
        "Quartic (even-symmetric)",
        Kind::Cartesian,
        "y = a*x^4 + b*x^2 + c",
        span(-3.0, 3.0, 1400),
        Formula {
            params: ["a", "b", "c"],
            eval: |d, [a, b, c]| cartesian(d, |x| a * x.powi(4) + b * x * x + c),
            preset: |i, _| [0.02 + 0.04 * i as f64, wave(i, 5, 2) * 0.5, wave(i, 3, 1)],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::ABSOLUTE,
        "Absolute value",
        Kind::Cartesian,
        "y = a*|x| + b",
        span(-10.0, 10.0, 1200),
        Formula {
            params: ["a", "b"],
            eval: |d, [a, b]| cartesian(d, |x| a * x.abs() + b),
            preset: |i, _| [0.5 + 0.3 * i as f64, wave(i, 5, 2)],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::EXPONENTIAL,
        "Exponential",
        Kind::Cartesian,
        "y = a*exp(b*x) + c",
        span(-4.0, 4.0, 1600),
        Formula {
            params: ["a", "b", "c"],
            eval: |d, [a, b, c]| cartesian(d, |x| a * (b * x).exp() + c),
            preset: |i, _| [1.0, -1.0 + 0.2 * i as f64, wave(i, 3, 1) * 0.5],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::LOGARITHM,
        "Logarithm",
        Kind::Cartesian,
        "y = a*ln(b*x + c) + d",
        span(-5.0, 5.0, 1600),
        Formula {
            params: ["a", "b", "c", "d"],
            eval: |dom, [a, b, c, d]| {
                cartesian(dom, |x| {
                    let z = b * x + c;
                    if z <= 0.0 { f64::NAN } else { a * z.ln() + d }
                })
            },
            preset: |i, _| {
                [
                    1.0,
                    0.5 + 0.1 * i as f64,
                    ((i % 4) as f64 * 0.5).max(0.1),
                    wave(i, 3, 1) * 0.5,
                ]
            },
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::POWER,
        "Power (|x|^b)",
        Kind::Cartesian,
        "y = a*|x|^b + c",
        span(-4.0, 4.0, 1400),
        Formula {
            params: ["a", "b", "c"],
            eval: |d, [a, b, c]| cartesian(d, |x| a * x.abs().powf(b) + c),
            preset: |i, _| [1.0, cycle(&POWER_EXPONENTS, i), 0.0],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::SINE,
        "Sine",
        Kind::Cartesian,
        "y = a*sin(b*x + c) + d",
        span(-10.0, 10.0, 2000),
        Formula {
            params: ["a", "b", "c", "d"],
            eval: |dom, [a, b, c, d]| cartesian(dom, |x| a * (b * x + c).sin() + d),
            preset: |i, _| [1.0, 0.5 + 0.5 * i as f64, i as f64 * PI / 10.0, 0.0],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::COSINE_SUM,
        "Cosine sum",
        Kind::Cartesian,
        "y = a*cos(b*x) + c*cos(d*x)",
        span(-15.0, 15.0, 2400),
        Formula {
            params: ["a", "b", "c", "d"],
            eval: |dom, [a, b, c, d]| cartesian(dom, |x| a * (b * x).cos() + c * (d * x).cos()),
            preset: |i, _| {
                let (b, d) = cycle(&COSINE_PAIRS, i);
                [1.0, b, 0.6, d]
            },
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::DAMPED_SINE,
        "Damped sine",
        Kind::Cartesian,
        "y = a*exp(-b*|x|)*sin(c*x)",
        span(-40.0, 40.0, 2600),
        Formula {
            params: ["a", "b", "c"],
            eval: |d, [a, b, c]| cartesian(d, |x| a * (-b * x.abs()).exp() * (c * x).sin()),
            preset: |i, _| [1.0, 0.05 + 0.05 * i as f64, 2.0 + i as f64],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::GAUSSIAN,
        "Gaussian bell",
        Kind::Cartesian,
        "y = a*exp(-((x-b)^2)/(2*c^2))",
        span(-6.0, 6.0, 1600),
        Formula {
            params: ["a", "b", "c"],
            eval: |d, [a, b, c]| {
                cartesian(d, |x| a * (-((x - b) * (x - b)) / (2.0 * (c * c + EPS))).exp())
            },
            preset: |i, _| [1.0, wave(i, 5, 2), 0.3 + 0.1 * (i % 5) as f64],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::SINC,
        "Sinc",
        Kind::Cartesian,
        "y = a*sin(b*x)/(c*x)",
        span(-30.0, 30.0, 2800),
        Formula {
            params: ["a", "b", "c"],
            eval: |d, [a, b, c]| cartesian(d, |x| a * (b * x).sin() / (c * x + EPS)),
            preset: |i, _| [1.0, 1.0 + 0.6 * i as f64, 1.0],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::LOGISTIC,
        "Logistic (sigmoid)",
        Kind::Cartesian,
        "y = a/(1+exp(-b*(x-c))) + d",
        span(-8.0, 8.0, 1600),
        Formula {
            params: ["a", "b", "c", "d"],
            eval: |dom, [a, b, c, d]| cartesian(dom, |x| a / (1.0 + (-b * (x - c)).exp()) + d),
            preset: |i, _| [1.0, 2.0 + 0.5 * i as f64, wave(i, 5, 2) * 0.5, 0.0],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::TANGENT,
        "Tangent",
        Kind::Cartesian,
        "y = a*tan(b*x + c) + d",
        span(-6.0, 6.0, 2600),
        Formula {
            params: ["a", "b", "c", "d"],
            eval: |dom, [a, b, c, d]| {
                cartesian_where(
                    dom,
                    |x| (b * x + c).cos().abs() > TANGENT_POLE_BAND,
                    |x| a * (b * x + c).tan() + d,
                )
            },
            preset: |i, _| [1.0, 0.5 + 0.3 * i as f64, i as f64 * PI / 12.0, 0.0],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::RATIONAL,
        "Rational",
        Kind::Cartesian,
        "y = a*x/(1 + b*x^2)",
        span(-10.0, 10.0, 2000),
        Formula {
            params: ["a", "b"],
            eval: |d, [a, b]| cartesian(d, |x| a * x / (1.0 + b * x * x)),
            preset: |i, _| [1.0, 0.2 + 0.2 * i as f64],
        },
    ))?;
    Ok(())
}
