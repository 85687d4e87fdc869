//! Centralized theme constants for the graphlab GUI.
//!
//! Colors, spacing and canvas parameters live here so the panel and canvas
//! code only refers to names.
//!
//! # Theme: "Graph Paper"
//!
//! A light canvas with faint blue grid lines and a saturated blue curve, in
//! the spirit of engineering graph paper. Panels stay neutral grey.

use egui::Color32;

// =============================================================================
// COLORS
// =============================================================================

/// Canvas background, slightly warm white.
pub const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(0xfd, 0xfd, 0xf8);

/// Side panel background.
pub const PANEL_BACKGROUND: Color32 = Color32::from_rgb(0xee, 0xef, 0xf2);

/// Curve stroke.
pub const CURVE: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);

/// Grid lines.
pub const GRID: Color32 = Color32::from_rgb(0xdc, 0xe6, 0xf0);

/// Axis lines through the origin.
pub const AXIS: Color32 = Color32::from_rgb(0x8a, 0x9b, 0xad);

/// Canvas border.
pub const BORDER: Color32 = Color32::from_rgb(0xc4, 0xc9, 0xd2);

/// Primary text.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1b, 0x1f, 0x27);

/// Muted text for readouts and tick labels.
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x5b, 0x64, 0x72);

/// Section headings.
pub const TEXT_HEADING: Color32 = Color32::from_rgb(0x12, 0x4e, 0x80);

/// Error banner fill.
pub const ERROR_BACKGROUND: Color32 = Color32::from_rgb(0xfd, 0xe8, 0xe8);

/// Error banner text.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(0xa3, 0x1d, 0x1d);

// =============================================================================
// TYPOGRAPHY AND SPACING
// =============================================================================

/// Font sizes.
pub mod font_size {
    /// Section headings.
    pub const HEADING: f32 = 15.0;
    /// Row labels.
    pub const LABEL: f32 = 13.0;
    /// Formula readout and tick labels.
    pub const SMALL: f32 = 11.0;
}

/// Spacing values.
pub mod spacing {
    /// Gap between related widgets.
    pub const SMALL: f32 = 4.0;
    /// Gap between panel sections.
    pub const SECTION: f32 = 12.0;
    /// Width reserved for row labels.
    pub const LABEL_WIDTH: f32 = 64.0;
    /// Default side panel width.
    pub const PANEL_WIDTH: f32 = 280.0;
}

/// Window geometry.
pub mod window {
    /// Initial window size.
    pub const DEFAULT_SIZE: [f32; 2] = [1100.0, 760.0];
}

/// Canvas drawing parameters.
pub mod canvas {
    /// Margin between the canvas border and the plot area, in points.
    pub const MARGIN: f32 = 16.0;
    /// Fraction of each axis extent added around the samples.
    pub const PADDING: f64 = 0.1;
    /// Target number of grid cells along each axis.
    pub const GRID_TICKS: f64 = 8.0;
    /// Above this many lines on one axis the grid is left out.
    pub const MAX_TICKS: i64 = 256;
    /// Curve stroke width.
    pub const LINE_WIDTH: f32 = 2.0;
    /// Grid stroke width.
    pub const GRID_WIDTH: f32 = 1.0;
    /// Axis stroke width.
    pub const AXIS_WIDTH: f32 = 1.5;
    /// Cartesian segments whose x gap exceeds this many steps are not drawn.
    pub const GAP_FACTOR: f64 = 1.5;
}

// =============================================================================
// EGUI VISUALS CONFIGURATION
// =============================================================================

/// Configure egui visuals with the graph paper theme.
pub fn configure_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = PANEL_BACKGROUND;
    visuals.window_fill = PANEL_BACKGROUND;
    visuals.extreme_bg_color = CANVAS_BACKGROUND;
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.widgets.noninteractive.bg_stroke.color = BORDER;
    visuals.selection.bg_fill = GRID;
    visuals.selection.stroke.color = TEXT_HEADING;
    visuals.slider_trailing_fill = true;
    visuals.window_corner_radius = egui::CornerRadius::same(3);
    visuals.menu_corner_radius = egui::CornerRadius::same(3);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(6.0, 5.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);
    ctx.set_style(style);
}
