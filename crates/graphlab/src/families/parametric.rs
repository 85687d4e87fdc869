//! Parametric `(x(t), y(t))` families (ids 17-23).

use std::f64::consts::{PI, TAU};

use super::{cycle, ids};
use crate::{
    Registry,
    domain::{Domain, Kind},
    error::Result,
    family::{CurveFamily, Formula},
    sampling::{EPS, parametric, signed_pow},
};

/// Shorthand for a parametric default domain starting at `t = 0`.
const fn turns(stop: f64, samples: usize) -> Domain {
    Domain::new(Kind::Parametric, 0.0, stop, samples)
}

/// `(p, q)` frequency pairs for Lissajous presets.
const LISSAJOUS_RATIOS: [(f64, f64); 10] = [
    (1.0, 2.0),
    (2.0, 1.0),
    (2.0, 3.0),
    (3.0, 2.0),
    (3.0, 4.0),
    (4.0, 3.0),
    (3.0, 5.0),
    (5.0, 3.0),
    (5.0, 4.0),
    (4.0, 5.0),
];

/// `(R, r, d)` triples for hypotrochoid presets.
const HYPOTROCHOID_TRIPLES: [(f64, f64, f64); 10] = [
    (5.0, 3.0, 5.0),
    (7.0, 3.0, 3.0),
    (8.0, 3.0, 5.0),
    (9.0, 4.0, 3.0),
    (10.0, 3.0, 5.0),
    (11.0, 5.0, 5.0),
    (12.0, 5.0, 3.0),
    (13.0, 5.0, 4.0),
    (14.0, 3.0, 6.0),
    (15.0, 4.0, 5.0),
];

/// `(R, r)` pairs for epicycloid presets; the pen sits on the rim (`d = r`).
const EPICYCLOID_PAIRS: [(f64, f64); 10] = [
    (3.0, 1.0),
    (4.0, 1.0),
    (5.0, 1.0),
    (5.0, 2.0),
    (6.0, 1.0),
    (7.0, 2.0),
    (7.0, 3.0),
    (8.0, 3.0),
    (9.0, 2.0),
    (10.0, 3.0),
];

/// Superellipse exponents.
const SUPERELLIPSE_EXPONENTS: [f64; 10] = [2.0, 2.5, 3.0, 3.5, 4.0, 1.5, 5.0, 6.0, 2.2, 2.8];

/// Register the parametric families in id order.
#[allow(clippy::too_many_lines, reason = "one flat table entry per family")]
pub fn register(registry: &mut Registry) -> Result<()> {
    registry.register(CurveFamily::new(
        ids::CIRCLE,
        "Circle",
        Kind::Parametric,
        "x=a*cos(t), y=a*sin(t)",
        turns(TAU, 1600),
        Formula {
            params: ["a"],
            eval: |d, [a]| parametric(d, |t| (a * t.cos(), a * t.sin())),
            preset: |i, _| [0.5 + 0.1 * i as f64],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::ELLIPSE,
        "Ellipse",
        Kind::Parametric,
        "x=a*cos(t), y=b*sin(t)",
        turns(TAU, 1600),
        Formula {
            params: ["a", "b"],
            eval: |d, [a, b]| parametric(d, |t| (a * t.cos(), b * t.sin())),
            preset: |i, _| [1.0 + 0.2 * (i % 5) as f64, 0.5 + 0.1 * ((i + 2) % 5) as f64],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::LISSAJOUS,
        "Lissajous",
        Kind::Parametric,
        "x=a*sin(p*t+δ), y=b*sin(q*t)",
        turns(TAU, 2400),
        Formula {
            params: ["a", "b", "p", "q", "delta"],
            eval: |d, [a, b, p, q, delta]| {
                parametric(d, |t| (a * (p * t + delta).sin(), b * (q * t).sin()))
            },
            preset: |i, _| {
                let (p, q) = cycle(&LISSAJOUS_RATIOS, i);
                [1.0, 1.0, p, q, (i % 10) as f64 * PI / 10.0]
            },
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::HYPOTROCHOID,
        "Hypotrochoid (spiro)",
        Kind::Parametric,
        "x=(R-r)cos t + d cos((R-r)/r * t); y=(R-r)sin t - d sin((R-r)/r * t)",
        turns(TAU * 24.0, 4800),
        Formula {
            params: ["R", "r", "d"],
            eval: |dom, [big, small, d]| {
                let arm = big - small;
                let k = arm / (small + EPS);
                parametric(dom, |t| {
                    (
                        arm * t.cos() + d * (k * t).cos(),
                        arm * t.sin() - d * (k * t).sin(),
                    )
                })
            },
            preset: |i, _| {
                let (big, small, d) = cycle(&HYPOTROCHOID_TRIPLES, i);
                [big, small, d]
            },
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::EPICYCLOID,
        "Epicycloid (spiro)",
        Kind::Parametric,
        "x=(R+r)cos t - d cos((R+r)/r * t); y=(R+r)sin t - d sin((R+r)/r * t)",
        turns(TAU * 16.0, 4000),
        Formula {
            params: ["R", "r", "d"],
            eval: |dom, [big, small, d]| {
                let arm = big + small;
                let k = arm / (small + EPS);
                parametric(dom, |t| {
                    (
                        arm * t.cos() - d * (k * t).cos(),
                        arm * t.sin() - d * (k * t).sin(),
                    )
                })
            },
            preset: |i, _| {
                let (big, small) = cycle(&EPICYCLOID_PAIRS, i);
                [big, small, small]
            },
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::SPIRAL,
        "Spiral (parametric)",
        Kind::Parametric,
        "x=(a+b*t)cos t, y=(a+b*t)sin t",
        turns(12.0 * PI, 3600),
        Formula {
            params: ["a", "b"],
            eval: |d, [a, b]| {
                parametric(d, |t| {
                    let r = a + b * t;
                    (r * t.cos(), r * t.sin())
                })
            },
            preset: |i, _| [0.0, 0.05 + 0.02 * i as f64],
        },
    ))?;
    registry.register(CurveFamily::new(
        ids::SUPERELLIPSE,
        "Superellipse",
        Kind::Parametric,
        "superellipse |x/a|^n + |y/b|^n = 1",
        turns(TAU, 2000),
        Formula {
            params: ["a", "b", "n"],
            eval: |d, [a, b, n]| {
                let e = 2.0 / (n + EPS);
                parametric(d, |t| (a * signed_pow(t.cos(), e), b * signed_pow(t.sin(), e)))
            },
            preset: |i, _| {
                [
                    1.0 + 0.2 * (i % 5) as f64,
                    1.0 + 0.2 * ((i + 2) % 5) as f64,
                    cycle(&SUPERELLIPSE_EXPONENTS, i),
                ]
            },
        },
    ))?;
    Ok(())
}
