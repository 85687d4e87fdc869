//! Closed-form curve families, sampled on demand.
//!
//! A [`Registry`] maps stable ids to [`CurveFamily`] entries. Each family
//! turns a [`Domain`] and a [`Params`] mapping into [`Samples`]: two
//! equal-length sequences of finite coordinates ready for plotting.
//!
//! # Supported Families
//!
//! - Cartesian: linear, polynomial, exponential, logarithm, power, trig,
//!   Gaussian, sinc, logistic, tangent, rational
//! - Parametric: circle, ellipse, Lissajous, spirographs, spiral,
//!   superellipse
//! - Polar: rose, cardioid, lemniscate, spirals, butterfly
//! - Polygon: hexagram outline
//!
//! ```
//! let reg = graphlab::registry();
//! let circle = reg.find("circle").unwrap();
//! let samples = reg.evaluate(circle.id, None, None).unwrap();
//! assert_eq!(samples.xs.len(), samples.ys.len());
//! ```

/// Sampling regimes and intervals.
pub mod domain;
/// Error types used across the crate.
pub mod error;
/// The built-in family table.
pub mod families;
/// Family metadata and the evaluator trait.
pub mod family;
/// Named parameter mappings.
pub mod params;
/// Id-indexed family catalogue.
pub mod registry;
/// Sample sequences and their extents.
pub mod samples;
/// Linspace and masking helpers for evaluators.
pub mod sampling;

pub use crate::{
    domain::{Domain, Kind, MAX_SAMPLES},
    error::{Error, Result},
    family::{CurveFamily, Evaluator, Formula, PRESET_COUNT},
    params::Params,
    registry::{Registry, build_registry, registry},
    samples::{Bounds, Samples},
};
