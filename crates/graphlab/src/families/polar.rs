//! Polar `r(θ)` families (ids 24-30).

use std::f64::consts::{PI, TAU};

use super::ids;
use crate::{
    Registry,
    domain::{Domain, Kind},
    error::Result,
    family::{CurveFamily, Formula},
    sampling::{EPS, polar},
};

/// Shorthand for a polar default domain.
const fn sweep(start: f64, stop: f64, samples: usize) -> Domain {
    Domain::new(Kind::Polar, start, stop, samples)
}

/// Register the polar families in id order.
#[allow(clippy::too_many_lines, reason = "one flat table entry per family")]
pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(CurveFamily::new(
        ids::ROSE,
        "Rose curve",
        Kind::Polar,
        "r = a*cos(k*θ)",
        sweep(0.0, TAU, 2400),
        Formula {
            params: ["a", "k"],
            eval: |d, [a, k]| polar(d, |th| a * (k * th).cos()),
            // Petal counts 3..=12, cycling.
            preset: |i, _| [1.0, (3 + i % 10) as f64],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::CARDIOID,
        "Cardioid",
        Kind::Polar,
        "r = a*(1 - cos θ)",
        sweep(0.0, TAU, 2000),
        Formula {
            params: ["a"],
            eval: |d, [a]| polar(d, |th| a * (1.0 - th.cos())),
            preset: |i, _| [1.0 + 0.1 * i as f64],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::LEMNISCATE,
        "Lemniscate of Bernoulli",
        Kind::Polar,
        "r = a*sqrt(cos(2θ))",
        sweep(0.0, TAU, 2200),
        Formula {
            params: ["a"],
            eval: |d, [a]| {
                polar(d, |th| {
                    let c = (2.0 * th).cos();
                    if c < 0.0 { f64::NAN } else { a * c.sqrt() }
                })
            },
            preset: |i, _| [1.0 + 0.1 * i as f64],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::LOG_SPIRAL,
        "Logarithmic spiral",
        Kind::Polar,
        "r = a*exp(b*θ)",
        sweep(0.0, 6.0 * PI, 2400),
        Formula {
            params: ["a", "b"],
            eval: |d, [a, b]| polar(d, |th| a * (b * th).exp()),
            preset: |i, _| [0.1, 0.1 + 0.05 * i as f64],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::HYPERBOLIC_SPIRAL,
        "Hyperbolic spiral",
        Kind::Polar,
        "r = a/θ",
        sweep(0.1, 10.0 * PI, 2400),
        Formula {
            params: ["a"],
            eval: |d, [a]| polar(d, |th| a / (th + EPS)),
            preset: |i, _| [1.0 + 0.2 * i as f64],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::ARCHIMEDEAN,
        "Archimedean spiral",
        Kind::Polar,
        "r = a + b*θ",
        sweep(0.0, 8.0 * PI, 2400),
        Formula {
            params: ["a", "b"],
            eval: |d, [a, b]| polar(d, |th| a + b * th),
            preset: |i, _| [0.0, 0.1 + 0.05 * i as f64],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::BUTTERFLY,
        "Butterfly (polar)",
        Kind::Polar,
        "r = e^{sin θ} - 2 cos(4θ) + sin^5((2θ-π)/24)",
        sweep(0.0, 12.0 * PI, 3600),
        Formula {
            params: ["scale"],
            eval: |d, [scale]| {
                polar(d, |th| {
                    let r = th.sin().exp() - 2.0 * (4.0 * th).cos()
                        + ((2.0 * th - PI) / 24.0).sin().powi(5);
                    r * scale
                })
            },
            preset: |i, _| [1.0 + 0.1 * i as f64],
        },
    ))?;
    Ok(())
}
