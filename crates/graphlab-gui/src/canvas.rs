//! Central canvas: grid, axes and the evaluated curve.

use std::ops::Range;

use egui::{Align2, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, epaint::PathShape, vec2};
use graphlab::{Bounds, Kind, Samples};

use crate::{
    selection::FormState,
    theme::{self, canvas},
};

/// Maps curve coordinates into a screen rectangle (y up in curve space).
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    /// Visible curve-space extent.
    bounds: Bounds,
    /// Target screen rectangle.
    rect: Rect,
}

impl Projection {
    /// Fit `samples` into `rect`.
    ///
    /// Equal-aspect kinds get one scale on both axes, with the slack spread
    /// evenly on the longer screen axis. Returns `None` for empty samples and
    /// for extents that overflow `f64`.
    pub fn fit(samples: &Samples, kind: Kind, rect: Rect) -> Option<Self> {
        let padded = samples.bounds()?.padded(canvas::PADDING);
        let bounds = if kind.equal_aspect() {
            let square = padded.squared();
            let aspect = f64::from(rect.width()) / f64::from(rect.height().max(1.0));
            let (cx, cy) = (
                (square.min_x + square.max_x) / 2.0,
                (square.min_y + square.max_y) / 2.0,
            );
            let half = square.width() / 2.0;
            let (half_x, half_y) = if aspect >= 1.0 {
                (half * aspect, half)
            } else {
                (half, half / aspect)
            };
            Bounds {
                min_x: cx - half_x,
                max_x: cx + half_x,
                min_y: cy - half_y,
                max_y: cy + half_y,
            }
        } else {
            padded
        };
        (bounds.width().is_finite() && bounds.height().is_finite()).then_some(Self { bounds, rect })
    }

    /// Visible curve-space extent.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Screen position of a curve-space point.
    pub fn project(&self, x: f64, y: f64) -> Pos2 {
        let b = &self.bounds;
        let fx = ((x - b.min_x) / b.width()) as f32;
        let fy = ((y - b.min_y) / b.height()) as f32;
        Pos2::new(
            self.rect.left() + fx * self.rect.width(),
            self.rect.bottom() - fy * self.rect.height(),
        )
    }
}

/// A "nice" grid spacing (1, 2 or 5 times a power of ten) near `span / GRID_TICKS`.
fn grid_step(span: f64) -> f64 {
    let raw = span / canvas::GRID_TICKS;
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let nice = match raw / magnitude {
        f if f < 1.5 => 1.0,
        f if f < 3.5 => 2.0,
        f if f < 7.5 => 5.0,
        _ => 10.0,
    };
    nice * magnitude
}

/// Multiples of `step` inside `[min, max]`; empty past `MAX_TICKS`.
fn ticks(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    let count = last.saturating_sub(first).saturating_add(1);
    let count = if count > canvas::MAX_TICKS { 0 } else { count };
    (0..count).map(move |k| (first + k) as f64 * step)
}

/// Grid positions along one axis of `[min, max]`, with their spacing.
fn axis_ticks(min: f64, max: f64) -> (f64, Vec<f64>) {
    let step = grid_step(max - min);
    (step, ticks(min, max, step).collect())
}

/// Text for a tick at `value` on a grid of spacing `step`.
///
/// Uses just enough decimals to tell neighbouring ticks apart, and
/// scientific notation for very small or very large spacings.
fn tick_label(value: f64, step: f64) -> String {
    let value = if value.abs() < step * 1e-6 { 0.0 } else { value };
    if !(1e-4..1e6).contains(&step) {
        return format!("{value:.2e}");
    }
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    format!("{value:.decimals$}")
}

/// Index ranges of the samples to join with one polyline each.
///
/// Cartesian samples are split where the x gap exceeds `GAP_FACTOR` nominal
/// steps, which is where the finite mask dropped points. Other kinds form a
/// single run.
pub fn curve_runs(samples: &Samples, kind: Kind, step: Option<f64>) -> Vec<Range<usize>> {
    if samples.is_empty() {
        return Vec::new();
    }
    let limit = match (kind, step) {
        (Kind::Cartesian, Some(step)) => step.abs() * canvas::GAP_FACTOR,
        _ => return vec![0..samples.len()],
    };

    let mut runs = Vec::new();
    let mut start = 0;
    for (i, pair) in samples.xs.windows(2).enumerate() {
        if (pair[1] - pair[0]).abs() > limit {
            runs.push(start..i + 1);
            start = i + 1;
        }
    }
    runs.push(start..samples.len());
    runs
}

/// Labelled grid lines at a nice spacing per axis, plus the axes through the
/// origin when visible.
fn draw_grid(painter: &Painter, projection: &Projection) {
    let b = projection.bounds();
    let grid = Stroke::new(canvas::GRID_WIDTH, theme::GRID);
    let font = FontId::proportional(theme::font_size::SMALL);
    let rect = projection.rect;

    let (x_step, xs) = axis_ticks(b.min_x, b.max_x);
    for x in xs {
        let sx = projection.project(x, 0.0).x;
        painter.vline(sx, rect.y_range(), grid);
        painter.text(
            Pos2::new(sx, rect.bottom() - 2.0),
            Align2::CENTER_BOTTOM,
            tick_label(x, x_step),
            font.clone(),
            theme::TEXT_SECONDARY,
        );
    }
    let (y_step, ys) = axis_ticks(b.min_y, b.max_y);
    for y in ys {
        let sy = projection.project(0.0, y).y;
        painter.hline(rect.x_range(), sy, grid);
        painter.text(
            Pos2::new(rect.left() + 2.0, sy),
            Align2::LEFT_BOTTOM,
            tick_label(y, y_step),
            font.clone(),
            theme::TEXT_SECONDARY,
        );
    }

    let axis = Stroke::new(canvas::AXIS_WIDTH, theme::AXIS);
    let origin = projection.project(0.0, 0.0);
    if (b.min_x..=b.max_x).contains(&0.0) {
        painter.vline(origin.x, rect.y_range(), axis);
    }
    if (b.min_y..=b.max_y).contains(&0.0) {
        painter.hline(rect.x_range(), origin.y, axis);
    }
}

/// Draw each run as a polyline; single-point runs become dots.
fn draw_curve(painter: &Painter, projection: &Projection, samples: &Samples, runs: &[Range<usize>]) {
    let stroke = Stroke::new(canvas::LINE_WIDTH, theme::CURVE);
    for run in runs {
        let points: Vec<Pos2> = samples.xs[run.clone()]
            .iter()
            .zip(&samples.ys[run.clone()])
            .map(|(&x, &y)| projection.project(x, y))
            .collect();
        match points.as_slice() {
            [] => {}
            [single] => {
                painter.circle_filled(*single, canvas::LINE_WIDTH, theme::CURVE);
            }
            _ => {
                painter.add(PathShape::line(points, stroke));
            }
        }
    }
}

/// Banner across the top of the canvas.
fn draw_banner(painter: &Painter, frame: Rect, message: &str) {
    let banner = Rect::from_min_size(
        frame.min + vec2(canvas::MARGIN, canvas::MARGIN),
        vec2((frame.width() - 2.0 * canvas::MARGIN).max(0.0), 28.0),
    );
    painter.rect_filled(banner, 3.0, theme::ERROR_BACKGROUND);
    painter.text(
        banner.left_center() + vec2(8.0, 0.0),
        Align2::LEFT_CENTER,
        message,
        FontId::proportional(theme::font_size::LABEL),
        theme::ERROR_TEXT,
    );
}

/// Paint the canvas for the current form into the remaining space of `ui`.
pub fn show_canvas(ui: &mut egui::Ui, form: &mut FormState) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let frame = response.rect;
    painter.rect_filled(frame, 0.0, theme::CANVAS_BACKGROUND);
    painter.rect_stroke(
        frame,
        0.0,
        Stroke::new(1.0, theme::BORDER),
        StrokeKind::Inside,
    );

    let plot_rect = frame.shrink(canvas::MARGIN);
    let kind = form.family().kind;
    let step = form.domain.step();
    let domain = form.domain;

    match form.samples() {
        Ok(samples) => match Projection::fit(samples, kind, plot_rect) {
            Some(projection) => {
                draw_grid(&painter, &projection);
                let runs = curve_runs(samples, kind, step);
                draw_curve(&painter, &projection, samples, &runs);
            }
            None => draw_banner(&painter, frame, &format!("no finite samples over {domain}")),
        },
        Err(message) => draw_banner(&painter, frame, message),
    }
}

#[cfg(test)]
mod tests {
    use graphlab::{Params, families::ids, registry};

    use super::*;

    fn samples(xs: &[f64], ys: &[f64]) -> Samples {
        let mut out = Samples::default();
        for (&x, &y) in xs.iter().zip(ys) {
            out.push_finite(x, y);
        }
        out
    }

    #[test]
    fn cartesian_runs_split_at_gaps() {
        let s = samples(&[0.0, 1.0, 2.0, 5.0, 6.0, 9.0], &[0.0; 6]);
        let runs = curve_runs(&s, Kind::Cartesian, Some(1.0));
        assert_eq!(runs, vec![0..3, 3..5, 5..6]);
    }

    #[test]
    fn other_kinds_form_one_run() {
        let s = samples(&[0.0, 10.0, 0.0], &[0.0, 0.0, 5.0]);
        assert_eq!(curve_runs(&s, Kind::Parametric, Some(0.1)), vec![0..3]);
        assert_eq!(curve_runs(&s, Kind::Cartesian, None), vec![0..3]);
        assert!(curve_runs(&Samples::default(), Kind::Polar, None).is_empty());
    }

    #[test]
    fn projection_maps_corners_with_y_up() {
        let s = samples(&[0.0, 10.0], &[0.0, 5.0]);
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(120.0, 60.0));
        let p = Projection::fit(&s, Kind::Cartesian, rect).expect("bounds");
        let b = p.bounds();
        assert_eq!(p.project(b.min_x, b.min_y), Pos2::new(0.0, 60.0));
        assert_eq!(p.project(b.max_x, b.max_y), Pos2::new(120.0, 0.0));
    }

    #[test]
    fn equal_aspect_uses_one_scale() {
        let s = samples(&[-1.0, 1.0], &[-1.0, 1.0]);
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(200.0, 100.0));
        let p = Projection::fit(&s, Kind::Parametric, rect).expect("bounds");
        let b = p.bounds();
        let sx = f64::from(rect.width()) / b.width();
        let sy = f64::from(rect.height()) / b.height();
        assert!((sx - sy).abs() < 1e-9, "{sx} vs {sy}");
    }

    #[test]
    fn overflowing_extent_does_not_fit() {
        let s = samples(&[-1.0, 0.0, 1.0], &[-1e308, 0.0, 1e308]);
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(200.0, 100.0));
        assert!(Projection::fit(&s, Kind::Cartesian, rect).is_none());
    }

    #[test]
    fn flat_curve_grid_stays_small() {
        let params = Params::new().with("a", 1e-9).with("b", 0.0);
        let s = registry()
            .evaluate(ids::LINEAR, None, Some(&params))
            .expect("linear");
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0));
        let b = Projection::fit(&s, Kind::Cartesian, rect).expect("bounds").bounds();
        let (_, xs) = axis_ticks(b.min_x, b.max_x);
        let (_, ys) = axis_ticks(b.min_y, b.max_y);
        assert!((4..=16).contains(&xs.len()), "{} vertical lines", xs.len());
        assert!((4..=16).contains(&ys.len()), "{} horizontal lines", ys.len());
    }

    #[test]
    fn ticks_are_capped() {
        assert_eq!(ticks(0.0, 2.0, 1.0).collect::<Vec<_>>(), [0.0, 1.0, 2.0]);
        assert_eq!(ticks(0.0, 1e12, 1.0).count(), 0);
    }

    #[test]
    fn tick_labels_match_the_spacing() {
        assert_eq!(tick_label(2.0, 1.0), "2");
        assert_eq!(tick_label(-0.5, 0.5), "-0.5");
        assert_eq!(tick_label(0.25, 0.05), "0.25");
        assert_eq!(tick_label(1e-17, 0.1), "0.0");
        assert_eq!(tick_label(3e-9, 1e-9), "3.00e-9");
    }

    #[test]
    fn grid_step_is_nice() {
        assert_eq!(grid_step(8.0), 1.0);
        assert_eq!(grid_step(20.0), 2.0);
        assert!((grid_step(0.4) - 0.05).abs() < 1e-12);
        assert_eq!(grid_step(0.0), 1.0);
    }
}
