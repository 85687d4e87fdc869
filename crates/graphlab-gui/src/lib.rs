//! Desktop explorer for the graphlab curve families using egui/eframe.
//!
//! The side panel edits a [`selection::FormState`]; the central canvas draws
//! whatever that form evaluates to.

use std::path::Path;

use anyhow::{Result, anyhow};
use graphlab::{families::ids, registry};
use tracing::{info, warn};

/// Canonical application name used across the GUI.
pub const APP_NAME: &str = "graphlab";

/// Central canvas drawing.
pub mod canvas;
/// Saving the current plot to disk.
pub mod export;
/// Form state and the sample cache.
pub mod selection;
/// Centralized theme constants (colors, spacing, canvas parameters).
pub mod theme;
/// Side panel widgets.
pub mod widgets;

use selection::FormState;

/// Launch configuration for the GUI.
#[derive(Debug, Clone, Copy)]
pub struct GuiOptions {
    /// Family shown at startup; the first family when `None`.
    pub initial_family: Option<u32>,
    /// Initial window size in points.
    pub window_size: [f32; 2],
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            initial_family: None,
            window_size: theme::window::DEFAULT_SIZE,
        }
    }
}

/// The explorer application.
pub struct GraphLabApp {
    /// Form and cached samples.
    form: FormState,
    /// Target of the "Save plot" button.
    save_path: String,
    /// Outcome of the last save, shown under the button.
    save_status: Option<Result<String, String>>,
}

impl GraphLabApp {
    /// Create the app around an already validated form.
    fn with_form(cc: &eframe::CreationContext<'_>, form: FormState) -> Self {
        theme::configure_visuals(&cc.egui_ctx);
        Self {
            save_path: export::default_file_name(form.family().name),
            form,
            save_status: None,
        }
    }

    /// Write the current plot to `save_path` and remember the outcome.
    fn save(&mut self) {
        let path = Path::new(self.save_path.trim());
        self.save_status = Some(
            match export::save_plot(&mut self.form, path, export::SAVE_SIZE) {
                Ok(()) => Ok(format!("saved {}", path.display())),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "could not save plot");
                    Err(format!("{e:#}"))
                }
            },
        );
    }

    /// Export section: path field, button and last outcome.
    fn export_section(&mut self, ui: &mut egui::Ui) {
        widgets::section_header(ui, "Export");
        if widgets::save_row(ui, &mut self.save_path) {
            self.save();
        }
        if let Some(status) = &self.save_status {
            let (text, color) = match status {
                Ok(message) => (message.as_str(), theme::TEXT_SECONDARY),
                Err(message) => (message.as_str(), theme::ERROR_TEXT),
            };
            ui.label(
                egui::RichText::new(text)
                    .size(theme::font_size::SMALL)
                    .color(color),
            );
        }
    }

    /// Side panel contents.
    fn side_panel(&mut self, ui: &mut egui::Ui) {
        widgets::section_header(ui, "Family");
        widgets::family_selector(ui, &mut self.form);

        widgets::section_header(ui, "Parameters");
        widgets::preset_selector(ui, &mut self.form);
        widgets::parameter_rows(ui, &mut self.form);

        widgets::section_header(ui, "Domain");
        widgets::domain_rows(ui, &mut self.form);

        self.export_section(ui);

        let status = match self.form.samples() {
            Ok(samples) => format!("{} points", samples.len()),
            Err(_) => "no plot".to_owned(),
        };
        ui.add_space(theme::spacing::SECTION);
        ui.label(
            egui::RichText::new(status)
                .size(theme::font_size::SMALL)
                .color(theme::TEXT_SECONDARY),
        );
    }
}

impl eframe::App for GraphLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(theme::spacing::PANEL_WIDTH)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.side_panel(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::show_canvas(ui, &mut self.form);
        });
    }
}

/// Run the GUI with the given options.
///
/// An unknown `initial_family` is reported before any window opens.
pub fn gui_with_options(options: GuiOptions) -> Result<()> {
    let initial = match options.initial_family {
        Some(id) => id,
        None => registry().list_all().next().map_or(ids::LINEAR, |f| f.id),
    };
    let form = FormState::new(initial)?;
    info!(family = initial, "starting gui");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(options.window_size)
            .with_title(format!("{APP_NAME} explorer")),
        ..Default::default()
    };

    eframe::run_native(
        &format!("{APP_NAME} explorer"),
        native_options,
        Box::new(move |cc| Ok(Box::new(GraphLabApp::with_form(cc, form)))),
    )
    .map_err(|e| anyhow!(e.to_string()))?;

    Ok(())
}
