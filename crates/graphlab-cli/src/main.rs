//! Command‑line entry point for the `graphlab` tool.
//!
//! Provides subcommands to list curve families, print their presets, dump
//! sampled points, render plots to images, and launch the GUI.

use std::{
    fmt::Display,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colornames::Color;
use graphlab::{Params, registry};
use image::{Rgba, RgbaImage};
use tracing::info;

/// CLI command implementations.
mod cmd;
/// Subscriber setup for `tracing`.
mod logging;

use graphlab_render::{PlotPalette, StrokeOptions};

use crate::cmd::{DomainSpan, SampleFormat, Selection};

/// Resolve a family id or name against the built-in registry.
fn parse_family(s: &str) -> Result<u32, String> {
    registry()
        .find(s)
        .map(|family| family.id)
        .map_err(|e| format!("{e}; run `graphlab list` to see the available families"))
}

/// Parse a JSON object of parameter values.
fn parse_params(s: &str) -> Result<Params, String> {
    serde_json::from_str(s).map_err(|e| {
        format!("invalid parameters '{s}': expected a JSON object of numbers ({e})")
    })
}

/// Parse a named or hex color into an `Rgba` value (alpha defaults to 0xff).
///
/// Supports CSS color names via `colornames`, short/long hex (RGB/RRGGBB),
/// and optional alpha (RGBA/RRGGBBAA) with or without a leading `#`.
fn parse_rgba_color(input: &str) -> Result<Rgba<u8>, String> {
    /// Decode the hex forms; `None` when `hex` is not one of them.
    fn parse_hex_rgba(hex: &str) -> Option<Rgba<u8>> {
        let raw = hex.trim_start_matches('#');
        if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let pair = |i: usize| u8::from_str_radix(&raw[i..i + 2], 16).ok();
        let nibble = |i: usize| u8::from_str_radix(&raw[i..=i], 16).ok().map(|v| v * 17);

        match raw.len() {
            3 => Some(Rgba([nibble(0)?, nibble(1)?, nibble(2)?, 0xff])),
            4 => Some(Rgba([nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?])),
            6 => Some(Rgba([pair(0)?, pair(2)?, pair(4)?, 0xff])),
            8 => Some(Rgba([pair(0)?, pair(2)?, pair(4)?, pair(6)?])),
            _ => None,
        }
    }

    let trimmed = input.trim();
    if let Some(rgba) = parse_hex_rgba(trimmed) {
        return Ok(rgba);
    }

    let color: Color = trimmed.try_into().map_err(|_| {
        format!(
            "invalid color '{input}': use a named color or hex (RGB/RRGGBB with optional alpha, leading '#' optional)"
        )
    })?;
    let (red, green, blue) = color.rgb();
    Ok(Rgba([red, green, blue, 0xff]))
}

#[derive(Parser)]
#[command(name = "graphlab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`).
    #[arg(
        short,
        global = true,
        action = clap::ArgAction::Count,
        help = "Sets the level of verbosity (GRAPHLAB_LOG overrides)"
    )]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Family, preset, parameter and domain arguments shared by `eval` and `plot`.
#[derive(Args, Debug)]
struct SelectionArgs {
    #[arg(help = "Family id or name (see `graphlab list`)", value_parser = parse_family)]
    /// Family id.
    family: u32,

    #[arg(
        short = 't',
        long = "template",
        value_name = "N",
        conflicts_with = "params",
        help = "Use preset N of the first ten (0-9, larger values clamp to 9)"
    )]
    /// Optional preset index.
    template: Option<usize>,

    #[arg(
        short = 'p',
        long = "params",
        value_name = "JSON",
        value_parser = parse_params,
        help = "Parameter values as a JSON object, e.g. '{\"a\": 1, \"b\": 0}'"
    )]
    /// Optional explicit parameters.
    params: Option<Params>,

    #[arg(
        short = 'd',
        long = "domain",
        value_name = "START:STOP:COUNT",
        allow_hyphen_values = true,
        help = "Sampling domain as START:STOP:COUNT or [START, STOP, COUNT]"
    )]
    /// Optional domain override.
    domain: Option<DomainSpan>,
}

impl SelectionArgs {
    /// Convert into a command selection.
    fn into_selection(self) -> Selection {
        Selection {
            family: self.family,
            template: self.template,
            params: self.params,
            domain: self.domain,
        }
    }
}

#[derive(Subcommand)]
/// Subcommands supported by the `graphlab` tool.
enum Commands {
    #[command(about = "List the available curve families")]
    /// List families by ascending id.
    List {
        #[arg(long = "json", help = "Emit a JSON array instead of text")]
        /// Emit JSON.
        json: bool,
    },

    #[command(about = "Print the parameter presets of a family")]
    /// Print presets as indexed JSON objects.
    Templates {
        #[arg(help = "Family id or name (see `graphlab list`)", value_parser = parse_family)]
        /// Family id.
        family: u32,

        #[arg(
            short = 'n',
            long = "count",
            default_value_t = 10,
            value_parser = clap::value_parser!(u16).range(1..),
            help = "Number of presets to print"
        )]
        /// Number of presets.
        count: u16,
    },

    #[command(about = "Evaluate a family and print its samples")]
    /// Evaluate and write samples to stdout.
    Eval {
        /// What to evaluate.
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(
            short = 'f',
            long = "format",
            value_enum,
            default_value = "csv",
            help = "Output format"
        )]
        /// Output format.
        format: SampleFormat,
    },

    #[command(about = "Render a family to an image")]
    /// Render a plot image.
    Plot {
        /// What to plot.
        #[command(flatten)]
        selection: SelectionArgs,

        #[arg(
            short = 's',
            long = "size",
            default_value_t = 800,
            help = "Square image size in pixels"
        )]
        /// Image size in pixels (square output).
        size: u32,

        #[arg(
            short = 'w',
            long = "line-width",
            value_name = "PIXELS",
            default_value_t = 2,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Line width in pixels for the curve stroke"
        )]
        /// Stroke width for the rendered curve.
        line_width: u32,

        #[arg(
            long = "fg",
            visible_alias = "foreground",
            value_parser = parse_rgba_color,
            default_value = "#1f77b4",
            value_name = "HEX",
            help = "Foreground color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
        )]
        /// Stroke color for the curve.
        foreground: Rgba<u8>,

        #[arg(
            long = "bg",
            visible_alias = "background",
            value_parser = parse_rgba_color,
            default_value = "#ffffff",
            value_name = "HEX",
            help = "Background color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
        )]
        /// Background color for the plot.
        background: Rgba<u8>,

        #[arg(long = "no-grid", help = "Do not draw the background grid")]
        /// Skip the grid.
        no_grid: bool,

        #[arg(
            long = "join-gaps",
            help = "Connect cartesian samples across dropped points (poles, undefined values)"
        )]
        /// Draw across mask gaps.
        join_gaps: bool,

        #[arg(help = "Optional output file path; opens a viewer when omitted")]
        /// Optional output file path (launches a viewer when not provided).
        output: Option<PathBuf>,
    },

    #[command(about = "Open GUI window")]
    /// Launch the interactive GUI.
    Gui {
        #[arg(help = "Family to show first", value_parser = parse_family)]
        /// Optional initial family.
        family: Option<u32>,
    },
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => {
            if !ok_msg.is_empty() {
                println!("{ok_msg}");
            }
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Write command output to stdout.
fn emit(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Save an image to disk or show it in an egui viewer when no path is given.
fn deliver_image(image: RgbaImage, output: Option<&Path>, window_title: &str) -> Result<()> {
    if let Some(path) = output {
        image.save(path)?;
        info!(path = %path.display(), "wrote image");
    } else {
        println!("No output file provided; opening viewer (close the window to finish)...");
        egui_img::view_image(window_title, image)?;
    }

    Ok(())
}

/// Handle the `plot` subcommand.
fn handle_plot(
    selection: &Selection,
    size: u32,
    stroke: StrokeOptions,
    output: Option<&Path>,
) -> Result<()> {
    let image = cmd::plot(selection, size, stroke)?;
    let name = registry().lookup(selection.family)?.name;
    deliver_image(image, output, &format!("plot: {name}"))
}

/// Handle the `gui` subcommand.
fn handle_gui(family: Option<u32>) {
    report_ok(
        graphlab_gui::gui_with_options(graphlab_gui::GuiOptions {
            initial_family: family,
            ..graphlab_gui::GuiOptions::default()
        }),
        "OK!",
    );
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::TracingConfig::from_env(cli.v).init() {
        eprintln!("failed to initialise logging: {e}");
    }

    match cli.command {
        Commands::List { json } => report_ok(cmd::list(json).and_then(|t| emit(&t)), ""),
        Commands::Templates { family, count } => report_ok(
            cmd::templates(family, usize::from(count)).and_then(|t| emit(&t)),
            "",
        ),
        Commands::Eval { selection, format } => report_ok(
            cmd::eval(&selection.into_selection(), format).and_then(|t| emit(&t)),
            "",
        ),
        Commands::Plot {
            selection,
            size,
            line_width,
            foreground,
            background,
            no_grid,
            join_gaps,
            output,
        } => report_ok(
            handle_plot(
                &selection.into_selection(),
                size,
                StrokeOptions {
                    line_width,
                    join_gaps,
                    grid: !no_grid,
                    palette: PlotPalette {
                        foreground,
                        background,
                    },
                },
                output.as_deref(),
            ),
            "OK!",
        ),
        Commands::Gui { family } => handle_gui(family),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(parse_rgba_color("#fff"), Ok(Rgba([255, 255, 255, 255])));
        assert_eq!(parse_rgba_color("11223344"), Ok(Rgba([0x11, 0x22, 0x33, 0x44])));
        assert_eq!(parse_rgba_color("red"), Ok(Rgba([255, 0, 0, 255])));
        assert!(parse_rgba_color("#12345").is_err());
    }

    #[test]
    fn families_resolve_by_id_or_name() {
        assert_eq!(parse_family("24"), Ok(24));
        assert_eq!(parse_family("Rose curve"), Ok(24));
        assert!(parse_family("0").is_err());
    }

    #[test]
    fn params_parse_from_json() {
        let p = parse_params(r#"{"b": 2, "a": 1.5}"#).expect("params");
        assert_eq!(p.names().collect::<Vec<_>>(), ["b", "a"]);
        assert!(parse_params("[1, 2]").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
