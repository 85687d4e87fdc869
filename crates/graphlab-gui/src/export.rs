//! "Save plot": the current form rendered to an image file.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use egui::Color32;
use graphlab_render::{PlotPalette, StrokeOptions, plot_bounds, render_plot_image};
use image::Rgba;
use tracing::info;

use crate::{selection::FormState, theme};

/// Side length in pixels of saved plots.
pub const SAVE_SIZE: u32 = 1200;

/// Canvas colors as image pixels.
fn canvas_palette() -> PlotPalette {
    let rgba = |c: Color32| Rgba(c.to_array());
    PlotPalette {
        foreground: rgba(theme::CURVE),
        background: rgba(theme::CANVAS_BACKGROUND),
    }
}

/// Suggested file name for a plot of `family`, e.g. `rose-curve.png`.
pub fn default_file_name(family: &str) -> String {
    let mut stem = String::with_capacity(family.len());
    for c in family.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.ends_with('-') {
            stem.push('-');
        }
    }
    format!("{}.png", stem.trim_matches('-'))
}

/// Render the form's current samples into a `size`×`size` image at `path`.
///
/// The format follows the file extension. Fails without writing anything
/// when the form does not evaluate or has nothing to plot.
pub fn save_plot(form: &mut FormState, path: &Path, size: u32) -> Result<()> {
    let family = form.family();
    let domain = form.domain;
    let samples = form
        .samples()
        .map_err(|e| anyhow!("{}: {e}", family.name))?;
    if plot_bounds(samples, family.kind).is_none() {
        bail!("{} has nothing to plot over {domain}", family.name);
    }

    let stroke = StrokeOptions {
        line_width: 2,
        join_gaps: false,
        grid: true,
        palette: canvas_palette(),
    };
    let image = render_plot_image(size, samples, family.kind, domain.step(), stroke);
    image
        .save(path)
        .with_context(|| format!("could not write {}", path.display()))?;
    info!(path = %path.display(), family = family.id, size, "saved plot");
    Ok(())
}
