//! Sampling regimes and sampling intervals.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// How a family's two output sequences are produced and interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// `y = f(x)` sampled over x.
    Cartesian,
    /// `(x(t), y(t))` sampled over t.
    Parametric,
    /// `r(θ)` sampled over θ and converted to x/y.
    Polar,
    /// Piecewise-linear outline built from fixed vertices.
    Polygon,
}

impl Kind {
    /// All kinds in declaration order.
    pub const ALL: [Self; 4] = [Self::Cartesian, Self::Parametric, Self::Polar, Self::Polygon];

    /// Lowercase name used in listings and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cartesian => "cartesian",
            Self::Parametric => "parametric",
            Self::Polar => "polar",
            Self::Polygon => "polygon",
        }
    }

    /// Name of the driving variable.
    ///
    /// Polygons have no continuous variable; their sample count is a point
    /// budget, written as `s`.
    pub const fn variable(self) -> &'static str {
        match self {
            Self::Cartesian => "x",
            Self::Parametric => "t",
            Self::Polar => "θ",
            Self::Polygon => "s",
        }
    }

    /// Whether plots of this kind should keep a 1:1 aspect ratio.
    pub const fn equal_aspect(self) -> bool {
        !matches!(self, Self::Cartesian)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| format!("unknown kind '{s}' (expected cartesian, parametric, polar or polygon)"))
    }
}

/// Sampling interval and resolution along the driving variable.
///
/// For polygons `samples` is the total point budget and the interval is
/// ignored by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    /// Provenance only; need not match the family's kind.
    pub kind: Kind,
    /// First sample position.
    pub start: f64,
    /// Last sample position (inclusive).
    pub stop: f64,
    /// Number of samples.
    pub samples: usize,
}

/// Largest sample count a domain may request.
pub const MAX_SAMPLES: usize = 10_000_000;

impl Domain {
    /// Build a domain.
    pub const fn new(kind: Kind, start: f64, stop: f64, samples: usize) -> Self {
        Self {
            kind,
            start,
            stop,
            samples,
        }
    }

    /// Check that the domain can be sampled.
    ///
    /// Rejects an empty or oversized sample count, a zero-width interval and
    /// non-finite bounds.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(Error::Evaluation("sample count must be at least 1".into()));
        }
        if self.samples > MAX_SAMPLES {
            return Err(Error::Evaluation(format!(
                "sample count must be at most {MAX_SAMPLES}, got {}",
                self.samples
            )));
        }
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(Error::Evaluation(format!(
                "domain bounds must be finite, got [{}, {}]",
                self.start, self.stop
            )));
        }
        if self.start == self.stop {
            return Err(Error::Evaluation(format!(
                "domain start and stop must differ, got {} twice",
                self.start
            )));
        }
        Ok(())
    }

    /// Spacing between consecutive samples, or `None` for a single sample.
    pub fn step(&self) -> Option<f64> {
        (self.samples > 1).then(|| (self.stop - self.start) / (self.samples - 1) as f64)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ∈ [{:.4}, {:.4}] × {}",
            self.kind.variable(),
            self.start,
            self.stop,
            self.samples
        )
    }
}
