//! The built-in catalogue.
//!
//! Families are grouped by sampling regime, one module per [`crate::Kind`].
//! Each module registers its families explicitly, in id order, when
//! [`register_builtin`] runs.

use crate::{Registry, error::Result};

pub mod cartesian;
pub mod parametric;
pub mod polar;
pub mod polygon;

/// Stable ids of the built-in families.
pub mod ids {
    /// `y = a*x + b`.
    pub const LINEAR: u32 = 1;
    /// `y = a*x^2 + b*x + c`.
    pub const QUADRATIC: u32 = 2;
    /// `y = a*x^3 + b*x`.
    pub const CUBIC: u32 = 3;
    /// `y = a*x^4 + b*x^2 + c`.
    pub const QUARTIC: u32 = 4;
    /// `y = a*|x| + b`.
    pub const ABSOLUTE: u32 = 5;
    /// `y = a*exp(b*x) + c`.
    pub const EXPONENTIAL: u32 = 6;
    /// `y = a*ln(b*x + c) + d`.
    pub const LOGARITHM: u32 = 7;
    /// `y = a*|x|^b + c`.
    pub const POWER: u32 = 8;
    /// `y = a*sin(b*x + c) + d`.
    pub const SINE: u32 = 9;
    /// `y = a*cos(b*x) + c*cos(d*x)`.
    pub const COSINE_SUM: u32 = 10;
    /// `y = a*exp(-b*|x|)*sin(c*x)`.
    pub const DAMPED_SINE: u32 = 11;
    /// Gaussian bell.
    pub const GAUSSIAN: u32 = 12;
    /// `y = a*sin(b*x)/(c*x)`.
    pub const SINC: u32 = 13;
    /// Logistic sigmoid.
    pub const LOGISTIC: u32 = 14;
    /// `y = a*tan(b*x + c) + d`, poles removed.
    pub const TANGENT: u32 = 15;
    /// `y = a*x/(1 + b*x^2)`.
    pub const RATIONAL: u32 = 16;
    /// Circle of radius `a`.
    pub const CIRCLE: u32 = 17;
    /// Axis-aligned ellipse.
    pub const ELLIPSE: u32 = 18;
    /// Lissajous figure.
    pub const LISSAJOUS: u32 = 19;
    /// Hypotrochoid (spirograph).
    pub const HYPOTROCHOID: u32 = 20;
    /// Epicycloid.
    pub const EPICYCLOID: u32 = 21;
    /// Parametric Archimedean spiral.
    pub const SPIRAL: u32 = 22;
    /// Superellipse.
    pub const SUPERELLIPSE: u32 = 23;
    /// Rose `r = a*cos(k*θ)`.
    pub const ROSE: u32 = 24;
    /// Cardioid.
    pub const CARDIOID: u32 = 25;
    /// Lemniscate of Bernoulli.
    pub const LEMNISCATE: u32 = 26;
    /// Logarithmic spiral.
    pub const LOG_SPIRAL: u32 = 27;
    /// Hyperbolic spiral.
    pub const HYPERBOLIC_SPIRAL: u32 = 28;
    /// Polar Archimedean spiral.
    pub const ARCHIMEDEAN: u32 = 29;
    /// Butterfly curve.
    pub const BUTTERFLY: u32 = 30;
    /// Six-pointed star outline.
    pub const HEXAGRAM: u32 = 31;
}

/// Register every built-in family.
pub fn register_builtin(registry: &mut Registry) -> Result<()> {
    cartesian::register(registry)?;
    parametric::register(registry)?;
    polar::register(registry)?;
    polygon::register(registry)
}

/// `(i mod modulus) - offset`, the stepped offsets many preset tables use.
#[inline]
fn wave(i: usize, modulus: usize, offset: usize) -> f64 {
    (i % modulus) as f64 - offset as f64
}

/// Table entry `i`, wrapping around the table.
#[inline]
fn cycle<T: Copy>(table: &[T], i: usize) -> T {
    table[i % table.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_steps_through_offsets() {
        let v: Vec<f64> = (0..6).map(|i| wave(i, 3, 1)).collect();
        assert_eq!(v, [-1.0, 0.0, 1.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(cycle(&[1, 2, 3], 4), 2);
    }
}
