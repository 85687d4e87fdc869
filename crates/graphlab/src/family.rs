//! Curve families and the evaluator seam behind them.

use std::fmt;

use smallvec::SmallVec;

use crate::{
    domain::{Domain, Kind},
    error::{Error, Result},
    params::Params,
    samples::Samples,
};

/// Size of the preset batch front ends offer; defaults come from its first entry.
pub const PRESET_COUNT: usize = 10;

/// Parameter values bound in declared order.
pub type Values = SmallVec<[f64; 5]>;

/// The computational half of a curve family.
///
/// Implementations receive parameter values already bound to their declared
/// order and a validated domain. They must be pure: no interior mutation, and
/// identical inputs give bit-identical outputs.
pub trait Evaluator: Send + Sync {
    /// Declared parameter names; also the arity of [`Evaluator::sample`].
    fn parameter_names(&self) -> &[&'static str];

    /// Sample the curve over `domain` using `values` in declared order.
    fn sample(&self, domain: &Domain, values: &[f64]) -> Result<Samples>;

    /// Preset number `index` out of a batch of `count`.
    ///
    /// Some generators spread their presets relative to `count`, so a preset
    /// depends on both arguments; it never depends on anything else.
    fn preset(&self, index: usize, count: usize) -> Values;
}

/// A closed-form family with `N` parameters, expressed as plain functions.
#[derive(Clone, Copy)]
pub struct Formula<const N: usize> {
    /// Parameter names in declaration order.
    pub params: [&'static str; N],
    /// Sampling function.
    pub eval: fn(&Domain, [f64; N]) -> Samples,
    /// Preset generator, `(index, count) -> values`.
    pub preset: fn(usize, usize) -> [f64; N],
}

impl<const N: usize> Evaluator for Formula<N> {
    fn parameter_names(&self) -> &[&'static str] {
        &self.params
    }

    fn sample(&self, domain: &Domain, values: &[f64]) -> Result<Samples> {
        let bound: [f64; N] = values.try_into().map_err(|_| {
            Error::Evaluation(format!("expected {N} parameter values, got {}", values.len()))
        })?;
        Ok((self.eval)(domain, bound))
    }

    fn preset(&self, index: usize, count: usize) -> Values {
        Values::from_slice(&(self.preset)(index, count))
    }
}

/// One supported curve type with its metadata and evaluator.
pub struct CurveFamily {
    /// Stable identifier, unique within a registry.
    pub id: u32,
    /// Display name.
    pub name: &'static str,
    /// Sampling regime.
    pub kind: Kind,
    /// Human-readable expression; descriptive only.
    pub formula: &'static str,
    /// Interval and resolution used when no override is given.
    pub default_domain: Domain,
    /// Evaluation and preset logic.
    evaluator: Box<dyn Evaluator>,
}

impl CurveFamily {
    /// Assemble a family from its metadata and evaluator.
    pub fn new(
        id: u32,
        name: &'static str,
        kind: Kind,
        formula: &'static str,
        default_domain: Domain,
        evaluator: impl Evaluator + 'static,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            formula,
            default_domain,
            evaluator: Box::new(evaluator),
        }
    }

    /// Declared parameter names in order.
    pub fn parameter_names(&self) -> &[&'static str] {
        self.evaluator.parameter_names()
    }

    /// Bind a mapping to declared order, requiring exactly the declared keys.
    pub fn bind(&self, params: &Params) -> Result<Values> {
        let names = self.parameter_names();
        let exact = params.len() == names.len() && names.iter().all(|n| params.contains(n));
        if !exact {
            return Err(Error::InvalidParameters {
                family: self.name,
                expected: names.join(", "),
                got: params.names().collect::<Vec<_>>().join(", "),
            });
        }
        Ok(names.iter().filter_map(|n| params.get(n)).collect())
    }

    /// Evaluate over `domain` with `params`.
    ///
    /// Fails when the domain cannot be sampled or the keys do not match;
    /// non-finite samples are dropped, never reported.
    pub fn evaluate(&self, domain: &Domain, params: &Params) -> Result<Samples> {
        domain.validate()?;
        let values = self.bind(params)?;
        self.evaluator.sample(domain, &values)
    }

    /// `count` deterministic presets in declared parameter order.
    pub fn templates(&self, count: usize) -> Vec<Params> {
        let names = self.parameter_names();
        (0..count)
            .map(|i| Params::from_declared(names, &self.evaluator.preset(i, count)))
            .collect()
    }

    /// The preset used when a caller supplies no parameters: the first of a
    /// [`PRESET_COUNT`] batch, so it matches `templates(PRESET_COUNT)[0]`.
    pub fn default_params(&self) -> Params {
        Params::from_declared(
            self.parameter_names(),
            &self.evaluator.preset(0, PRESET_COUNT),
        )
    }

    /// A domain over `[start, stop]` with `samples` points, tagged with this family's kind.
    pub fn domain(&self, start: f64, stop: f64, samples: usize) -> Domain {
        Domain::new(self.kind, start, stop, samples)
    }
}

impl fmt::Debug for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveFamily")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("formula", &self.formula)
            .field("parameters", &self.parameter_names())
            .field("default_domain", &self.default_domain)
            .finish()
    }
}

impl fmt::Display for CurveFamily {
    /// Listing line, e.g. `09. Sine [cartesian] :: y = ... :: params=[a, b, c, d]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}. {} [{}] :: {} :: params=[{}]",
            self.id,
            self.name,
            self.kind,
            self.formula,
            self.parameter_names().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling;

    fn line() -> CurveFamily {
        CurveFamily::new(
            7,
            "Line",
            Kind::Cartesian,
            "y = a*x + b",
            Domain::new(Kind::Cartesian, 0.0, 1.0, 3),
            Formula {
                params: ["a", "b"],
                eval: |d, [a, b]| sampling::cartesian(d, |x| a * x + b),
                preset: |i, _| [i as f64, 1.0],
            },
        )
    }

    #[test]
    fn bind_reorders_by_name() {
        let f = line();
        let p = Params::new().with("b", 2.0).with("a", 3.0);
        assert_eq!(f.bind(&p).expect("bind").as_slice(), &[3.0, 2.0]);
    }

    #[test]
    fn bind_rejects_missing_and_extra_keys() {
        let f = line();
        let missing = Params::new().with("a", 1.0);
        let extra = Params::new().with("a", 1.0).with("b", 1.0).with("c", 1.0);
        assert!(matches!(f.bind(&missing), Err(Error::InvalidParameters { .. })));
        assert!(matches!(f.bind(&extra), Err(Error::InvalidParameters { .. })));
    }

    #[test]
    fn evaluate_validates_domain_first() {
        let f = line();
        let bad = Domain::new(Kind::Cartesian, 1.0, 1.0, 10);
        assert!(matches!(
            f.evaluate(&bad, &f.default_params()),
            Err(Error::Evaluation(_))
        ));
    }

    #[test]
    fn listing_line_format() {
        assert_eq!(
            line().to_string(),
            "07. Line [cartesian] :: y = a*x + b :: params=[a, b]"
        );
    }
}
