//! Command handlers for the `graphlab` CLI.
//!
//! Text-producing commands return the text to print; `plot` returns the
//! rendered image so the caller decides where it goes.

use std::{fmt::Write as _, str::FromStr};

use anyhow::{Result, anyhow, bail};
use graphlab::{CurveFamily, Domain, Error, MAX_SAMPLES, PRESET_COUNT, Params, Samples, registry};
use graphlab_render::{StrokeOptions, plot_bounds, render_plot_image};
use image::RgbaImage;
use serde_json::json;
use tracing::{debug, info};

/// A domain override parsed from `[start, stop, count]` or `start:stop:count`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainSpan {
    /// First sample position.
    pub start: f64,
    /// Last sample position.
    pub stop: f64,
    /// Number of samples.
    pub samples: usize,
}

impl FromStr for DomainSpan {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let parts: Vec<f64> = if trimmed.starts_with('[') {
            serde_json::from_str(trimmed)
                .map_err(|e| format!("invalid domain '{value}': {e}"))?
        } else {
            trimmed
                .split(':')
                .map(|p| {
                    p.trim()
                        .parse::<f64>()
                        .map_err(|_| format!("invalid domain bound '{p}': expected a number"))
                })
                .collect::<Result<_, _>>()?
        };

        let [start, stop, count] = parts[..] else {
            return Err(format!(
                "domain must have three parts, START:STOP:COUNT or [START, STOP, COUNT], got '{value}'"
            ));
        };
        if count < 0.0 || count.fract() != 0.0 || !count.is_finite() {
            return Err(
                Error::Evaluation(format!("sample count must be a non-negative integer, got {count}"))
                    .to_string(),
            );
        }
        if count > MAX_SAMPLES as f64 {
            return Err(Error::Evaluation(format!(
                "sample count must be at most {MAX_SAMPLES}, got {count}"
            ))
            .to_string());
        }

        Ok(Self {
            start,
            stop,
            samples: count as usize,
        })
    }
}

/// What to evaluate: a family plus optional preset, parameters and domain.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    /// Family id.
    pub family: u32,
    /// Preset index into the first [`PRESET_COUNT`] presets; clamped.
    pub template: Option<usize>,
    /// Explicit parameters; take precedence over `template`.
    pub params: Option<Params>,
    /// Domain override.
    pub domain: Option<DomainSpan>,
}

/// A selection with every default filled in.
#[derive(Debug)]
pub struct Resolved {
    /// The selected family.
    pub family: &'static CurveFamily,
    /// Domain to sample.
    pub domain: Domain,
    /// Parameters to bind.
    pub params: Params,
}

impl Selection {
    /// Fill in defaults from the registry.
    pub fn resolve(&self) -> Result<Resolved> {
        let family = registry().lookup(self.family)?;
        let params = match (&self.params, self.template) {
            (Some(params), _) => params.clone(),
            (None, Some(index)) => {
                let index = index.min(PRESET_COUNT - 1);
                let mut presets = registry().templates_for(family.id, PRESET_COUNT)?;
                presets.swap_remove(index)
            }
            (None, None) => family.default_params(),
        };
        let domain = self.domain.map_or(family.default_domain, |span| {
            family.domain(span.start, span.stop, span.samples)
        });
        debug!(family = family.id, name = family.name, %domain, %params, "resolved selection");
        Ok(Resolved {
            family,
            domain,
            params,
        })
    }
}

impl Resolved {
    /// Evaluate the resolved selection.
    pub fn evaluate(&self) -> Result<Samples> {
        let samples = self.family.evaluate(&self.domain, &self.params)?;
        debug!(
            requested = self.domain.samples,
            kept = samples.len(),
            "evaluated samples"
        );
        Ok(samples)
    }
}

/// Output format for `eval`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SampleFormat {
    /// `x,y` rows with a header line.
    #[default]
    Csv,
    /// A JSON object with metadata and `xs`/`ys` arrays.
    Json,
}

/// Listing of every family, as text lines or a JSON array.
pub fn list(as_json: bool) -> Result<String> {
    let families = registry().list_all();
    if as_json {
        let entries: Vec<_> = families
            .map(|f| {
                json!({
                    "id": f.id,
                    "name": f.name,
                    "kind": f.kind,
                    "formula": f.formula,
                    "parameters": f.parameter_names(),
                    "domain": f.default_domain,
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }
    let mut out = String::new();
    for family in families {
        writeln!(out, "{family}")?;
    }
    Ok(out)
}

/// `count` presets for `family`, one indexed JSON object per line.
pub fn templates(family: u32, count: usize) -> Result<String> {
    let presets = registry().templates_for(family, count)?;
    let mut out = String::new();
    for (i, preset) in presets.iter().enumerate() {
        writeln!(out, "[{i}] {}", serde_json::to_string(preset)?)?;
    }
    Ok(out)
}

/// Evaluate a selection and format the samples.
pub fn eval(selection: &Selection, format: SampleFormat) -> Result<String> {
    let resolved = selection.resolve()?;
    let samples = resolved.evaluate()?;
    match format {
        SampleFormat::Csv => {
            let mut out = String::with_capacity(samples.len() * 24);
            out.push_str("x,y\n");
            for (x, y) in samples.points() {
                writeln!(out, "{x},{y}")?;
            }
            Ok(out)
        }
        SampleFormat::Json => {
            let doc = json!({
                "id": resolved.family.id,
                "name": resolved.family.name,
                "kind": resolved.family.kind,
                "domain": resolved.domain,
                "params": resolved.params,
                "xs": samples.xs,
                "ys": samples.ys,
            });
            Ok(serde_json::to_string(&doc)?)
        }
    }
}

/// Render a selection to a square image of `size` pixels.
pub fn plot(selection: &Selection, size: u32, stroke: StrokeOptions) -> Result<RgbaImage> {
    if size < 16 {
        bail!("image size must be at least 16 pixels, got {size}");
    }
    let resolved = selection.resolve()?;
    let samples = resolved.evaluate()?;
    if samples.is_empty() {
        return Err(anyhow!(
            "{} has no finite samples over {}",
            resolved.family.name,
            resolved.domain
        ));
    }
    if plot_bounds(&samples, resolved.family.kind).is_none() {
        bail!(
            "{} samples over {} span more than can be plotted",
            resolved.family.name,
            resolved.domain
        );
    }
    info!(family = resolved.family.id, points = samples.len(), size, "rendering plot");
    Ok(render_plot_image(
        size,
        &samples,
        resolved.family.kind,
        resolved.domain.step(),
        stroke,
    ))
}
