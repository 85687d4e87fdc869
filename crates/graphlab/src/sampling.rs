//! Support operations shared by the family evaluators.
//!
//! Each helper owns one sampling regime: build the driving variable, apply a
//! closed form element-wise, and drop any sample whose coordinates are not
//! both finite.

use crate::{domain::Domain, samples::Samples};

/// Offset added to denominators that are exactly zero by construction.
pub const EPS: f64 = 1e-9;

/// `n` evenly spaced values over `[start, stop]`, both ends included.
///
/// A single sample sits at `start`; the last of several is exactly `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Sample `y = f(x)` over the domain.
pub fn cartesian(domain: &Domain, f: impl Fn(f64) -> f64) -> Samples {
    cartesian_where(domain, |_| true, f)
}

/// Sample `y = f(x)`, additionally dropping x values rejected by `keep`.
pub fn cartesian_where(
    domain: &Domain,
    keep: impl Fn(f64) -> bool,
    f: impl Fn(f64) -> f64,
) -> Samples {
    let xs = linspace(domain.start, domain.stop, domain.samples);
    let mut out = Samples::with_capacity(xs.len());
    for x in xs {
        if keep(x) {
            out.push_finite(x, f(x));
        }
    }
    out
}

/// Sample `(x(t), y(t))` over the domain.
pub fn parametric(domain: &Domain, f: impl Fn(f64) -> (f64, f64)) -> Samples {
    let ts = linspace(domain.start, domain.stop, domain.samples);
    let mut out = Samples::with_capacity(ts.len());
    for t in ts {
        let (x, y) = f(t);
        out.push_finite(x, y);
    }
    out
}

/// Sample `r(θ)` over the domain and convert to cartesian coordinates.
///
/// Negative radii are kept and land on the opposite side of the origin.
pub fn polar(domain: &Domain, r: impl Fn(f64) -> f64) -> Samples {
    parametric(domain, |theta| {
        let radius = r(theta);
        (radius * theta.cos(), radius * theta.sin())
    })
}

/// Raise `|base|` to a real power, keeping the sign of `base`.
#[inline]
pub fn signed_pow(base: f64, exponent: f64) -> f64 {
    base.signum() * base.abs().powf(exponent)
}
