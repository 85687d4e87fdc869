//! Raster plots of sampled curves.
//!
//! Small drawing primitives plus [`render_plot_image`], which renders a
//! sampled curve into a square image with a grid and axes. Used by the CLI
//! `plot` command and the GUI "Save plot" action.

use graphlab::{Bounds, Kind, Samples};
use image::{Rgba, RgbaImage};

/// Fraction of each axis extent added around the samples.
const PADDING: f64 = 0.1;

/// A cartesian segment whose x gap exceeds this many nominal steps is not drawn.
const GAP_FACTOR: f64 = 1.5;

/// Target number of grid cells along each axis.
const GRID_TICKS: f64 = 8.0;

/// Grid lines beyond this count on one axis are not drawn at all.
const MAX_TICKS: i64 = 256;

/// Colors used when rendering a plot image.
#[derive(Clone, Copy, Debug)]
pub struct PlotPalette {
    /// Color for the curve stroke.
    pub foreground: Rgba<u8>,
    /// Background fill color.
    pub background: Rgba<u8>,
}

impl PlotPalette {
    /// Grid lines: background nudged towards the foreground.
    fn grid(&self) -> Rgba<u8> {
        mix(self.background, self.foreground, 0.12)
    }

    /// Axis lines: halfway between grid and stroke.
    fn axis(&self) -> Rgba<u8> {
        mix(self.background, self.foreground, 0.4)
    }
}

/// Stroke styling and gap-handling options for rendering.
#[derive(Clone, Copy, Debug)]
pub struct StrokeOptions {
    /// Stroke width in pixels.
    pub line_width: u32,
    /// Connect samples across gaps left by dropped (non-finite) values.
    pub join_gaps: bool,
    /// Draw the background grid.
    pub grid: bool,
    /// Colors for foreground/background.
    pub palette: PlotPalette,
}

/// Linear blend of two colors, `t = 0` gives `a`.
fn mix(a: Rgba<u8>, b: Rgba<u8>, t: f64) -> Rgba<u8> {
    let channel = |i: usize| (f64::from(a.0[i]) * (1.0 - t) + f64::from(b.0[i]) * t).round() as u8;
    Rgba([channel(0), channel(1), channel(2), a.0[3].max(b.0[3])])
}

/// Maps curve coordinates into pixel space (y up in curve space, down in the image).
#[derive(Clone, Copy, Debug)]
struct Viewport {
    /// Visible curve-space extent.
    bounds: Bounds,
    /// Pixel margin on every side.
    margin: f64,
    /// Drawable width and height in pixels.
    inner: f64,
}

impl Viewport {
    /// Fit `bounds` into a `size`×`size` image.
    fn new(bounds: Bounds, size: u32, line_width: u32) -> Self {
        let margin = f64::from(4_u32.saturating_add(line_width / 2));
        let inner = (f64::from(size) - 2.0 * margin).max(1.0);
        Self {
            bounds,
            margin,
            inner,
        }
    }

    /// Pixel position of a curve-space point.
    fn project(&self, x: f64, y: f64) -> (i64, i64) {
        let b = &self.bounds;
        let px = self.margin + (x - b.min_x) / b.width() * self.inner;
        let py = self.margin + (b.max_y - y) / b.height() * self.inner;
        (px.round() as i64, py.round() as i64)
    }
}

/// Visible extent for `samples`: padded, and squared for equal-aspect kinds.
///
/// `None` when there are no samples or the extent overflows `f64`.
pub fn plot_bounds(samples: &Samples, kind: Kind) -> Option<Bounds> {
    let padded = samples.bounds()?.padded(PADDING);
    let bounds = if kind.equal_aspect() {
        padded.squared()
    } else {
        padded
    };
    (bounds.width().is_finite() && bounds.height().is_finite()).then_some(bounds)
}

/// A "nice" grid spacing (1, 2 or 5 times a power of ten) near `span / GRID_TICKS`.
pub fn nice_step(span: f64) -> f64 {
    let raw = span / GRID_TICKS;
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction < 1.5 {
        1.0
    } else if fraction < 3.5 {
        2.0
    } else if fraction < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Multiples of `step` inside `[min, max]`; empty when there are more than
/// [`MAX_TICKS`] of them.
fn ticks(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    let count = last.saturating_sub(first).saturating_add(1);
    let count = if count > MAX_TICKS { 0 } else { count };
    (0..count).map(move |k| (first + k) as f64 * step)
}

/// Put a pixel if the coordinates are inside the image bounds.
fn put_pixel_safe(img: &mut RgbaImage, x: i64, y: i64, col: Rgba<u8>) {
    let w = i64::from(img.width());
    let h = i64::from(img.height());
    if x >= 0 && y >= 0 && x < w && y < h {
        img.put_pixel(x as u32, y as u32, col);
    }
}

/// Stamp a filled square centered on `(cx, cy)` with a given side length.
fn stamp_square(img: &mut RgbaImage, cx: i64, cy: i64, size: u32, col: Rgba<u8>) {
    let radius = (i64::from(size) - 1) / 2;
    let extra = i64::from(size.is_multiple_of(2));
    for y in (cy - radius)..=(cy + radius + extra) {
        for x in (cx - radius)..=(cx + radius + extra) {
            put_pixel_safe(img, x, y, col);
        }
    }
}

/// Draw a Bresenham line into `img` with color `col`.
fn draw_line(
    img: &mut RgbaImage,
    (mut x0, mut y0): (i64, i64),
    (x1, y1): (i64, i64),
    col: Rgba<u8>,
    line_width: u32,
) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp_square(img, x0, y0, line_width, col);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Grid lines at nice spacing plus axis lines through the origin when visible.
fn draw_guides(img: &mut RgbaImage, view: &Viewport, palette: PlotPalette, grid: bool) {
    let b = view.bounds;
    let lo = view.margin.round() as i64;
    let hi = (view.margin + view.inner).round() as i64;
    if grid {
        for x in ticks(b.min_x, b.max_x, nice_step(b.width())) {
            let (px, _) = view.project(x, b.min_y);
            draw_line(img, (px, lo), (px, hi), palette.grid(), 1);
        }
        for y in ticks(b.min_y, b.max_y, nice_step(b.height())) {
            let (_, py) = view.project(b.min_x, y);
            draw_line(img, (lo, py), (hi, py), palette.grid(), 1);
        }
    }
    if b.min_x <= 0.0 && b.max_x >= 0.0 {
        let (px, _) = view.project(0.0, b.min_y);
        draw_line(img, (px, lo), (px, hi), palette.axis(), 1);
    }
    if b.min_y <= 0.0 && b.max_y >= 0.0 {
        let (_, py) = view.project(b.min_x, 0.0);
        draw_line(img, (lo, py), (hi, py), palette.axis(), 1);
    }
}

/// Render a square `size×size` image of `samples`.
///
/// `kind` selects equal-aspect scaling for non-cartesian curves. For
/// cartesian curves `step` is the nominal spacing of the domain; segments
/// spanning more than 1.5 steps are skipped unless `stroke.join_gaps` is set.
pub fn render_plot_image(
    size: u32,
    samples: &Samples,
    kind: Kind,
    step: Option<f64>,
    stroke: StrokeOptions,
) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, stroke.palette.background);
    let Some(bounds) = plot_bounds(samples, kind) else {
        return img;
    };
    let width = stroke.line_width.max(1);
    let view = Viewport::new(bounds, size, width);
    draw_guides(&mut img, &view, stroke.palette, stroke.grid);

    let max_gap = match (kind, step) {
        (Kind::Cartesian, Some(step)) if !stroke.join_gaps => Some(step.abs() * GAP_FACTOR),
        _ => None,
    };

    let mut points = samples.points();
    let Some(first) = points.next() else {
        return img;
    };
    let mut prev = first;
    let mut prev_px = view.project(first.0, first.1);
    stamp_square(&mut img, prev_px.0, prev_px.1, width, stroke.palette.foreground);
    for next in points {
        let next_px = view.project(next.0, next.1);
        let gap = max_gap.is_some_and(|limit| (next.0 - prev.0).abs() > limit);
        if !gap {
            draw_line(&mut img, prev_px, next_px, stroke.palette.foreground, width);
        }
        prev = next;
        prev_px = next_px;
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    const FG: Rgba<u8> = Rgba([200, 10, 10, 255]);
    const BG: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn stroke(join_gaps: bool) -> StrokeOptions {
        StrokeOptions {
            line_width: 1,
            join_gaps,
            grid: false,
            palette: PlotPalette {
                foreground: FG,
                background: BG,
            },
        }
    }

    fn count(img: &RgbaImage, col: Rgba<u8>) -> usize {
        img.pixels().filter(|p| **p == col).count()
    }

    #[test]
    fn nice_steps_are_round_numbers() {
        assert_eq!(nice_step(8.0), 1.0);
        assert_eq!(nice_step(16.0), 2.0);
        assert_eq!(nice_step(40.0), 5.0);
        assert!((nice_step(0.8) - 0.1).abs() < 1e-12);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn empty_samples_give_blank_canvas() {
        let img = render_plot_image(16, &Samples::default(), Kind::Polar, None, stroke(false));
        assert_eq!(count(&img, BG), 256);
    }

    #[test]
    fn diagonal_line_is_drawn() {
        let s = Samples {
            xs: vec![0.0, 1.0],
            ys: vec![0.0, 1.0],
        };
        let img = render_plot_image(64, &s, Kind::Parametric, None, stroke(false));
        assert_eq!(img.get_pixel(32, 32), &FG);
    }

    #[test]
    fn cartesian_gaps_are_skipped_unless_joined() {
        let s = Samples {
            xs: vec![0.0, 1.0, 5.0, 6.0],
            ys: vec![0.0, 0.0, 0.0, 0.0],
        };
        let split = render_plot_image(64, &s, Kind::Cartesian, Some(1.0), stroke(false));
        let joined = render_plot_image(64, &s, Kind::Cartesian, Some(1.0), stroke(true));
        assert!(count(&joined, FG) > count(&split, FG));
        assert_eq!(joined.get_pixel(32, 32), &FG);
        assert_ne!(split.get_pixel(32, 32), &FG);
    }

    #[test]
    fn ticks_are_capped() {
        assert_eq!(ticks(-1.0, 1.0, 0.5).collect::<Vec<_>>(), [-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(ticks(0.0, 1e12, 1.0).count(), 0);
        assert_eq!(ticks(f64::NEG_INFINITY, f64::INFINITY, 1.0).count(), 0);
    }

    #[test]
    fn overflowing_extent_gives_blank_canvas() {
        let s = Samples {
            xs: vec![-1.0, 0.0, 1.0],
            ys: vec![-1e308, 0.0, 1e308],
        };
        assert_eq!(plot_bounds(&s, Kind::Cartesian), None);
        let options = StrokeOptions {
            grid: true,
            ..stroke(false)
        };
        let img = render_plot_image(64, &s, Kind::Cartesian, Some(1.0), options);
        assert_eq!(count(&img, BG), 64 * 64);
    }

    #[test]
    fn flat_curve_keeps_a_bounded_grid() {
        let s = Samples {
            xs: vec![-10.0, 10.0],
            ys: vec![-1e-8, 1e-8],
        };
        let b = plot_bounds(&s, Kind::Cartesian).expect("bounds");
        let rows = ticks(b.min_y, b.max_y, nice_step(b.height())).count();
        let cols = ticks(b.min_x, b.max_x, nice_step(b.width())).count();
        assert!((4..=16).contains(&rows), "{rows} rows");
        assert!((4..=16).contains(&cols), "{cols} columns");
    }

    #[test]
    fn equal_aspect_squares_bounds() {
        let s = Samples {
            xs: vec![-2.0, 2.0],
            ys: vec![-1.0, 1.0],
        };
        let b = plot_bounds(&s, Kind::Polar).expect("bounds");
        assert!((b.width() - b.height()).abs() < 1e-12);
        let c = plot_bounds(&s, Kind::Cartesian).expect("bounds");
        assert!(c.width() > c.height());
    }
}
