//! Side panel widgets. Each function draws one group of controls and writes
//! edits straight into the [`FormState`].

use egui::{self, RichText};
use graphlab::registry;
use tracing::warn;

use crate::{selection::FormState, theme};

/// Heading used at the top of each side panel section.
pub fn section_header(ui: &mut egui::Ui, title: &str) {
    ui.add_space(theme::spacing::SECTION);
    ui.label(
        RichText::new(title)
            .strong()
            .color(theme::TEXT_HEADING)
            .size(theme::font_size::HEADING),
    );
    ui.separator();
}

/// Row with a fixed-width label followed by `add_contents`.
fn labelled_row<R>(
    ui: &mut egui::Ui,
    label: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.horizontal(|ui| {
        ui.add_sized(
            [theme::spacing::LABEL_WIDTH, 0.0],
            egui::Label::new(RichText::new(label).size(theme::font_size::LABEL)),
        );
        ui.add_space(theme::spacing::SMALL);
        add_contents(ui)
    })
    .inner
}

/// Drag speed for a value of magnitude `value`.
fn drag_speed(value: f64) -> f64 {
    (value.abs() * 0.01).clamp(0.001, 1.0)
}

/// Family combo box listing every family by ascending id.
pub fn family_selector(ui: &mut egui::Ui, form: &mut FormState) {
    let current = form.family();
    let mut chosen = current.id;
    egui::ComboBox::from_id_salt("family_selector")
        .width(ui.available_width())
        .selected_text(format!("{:02}. {}", current.id, current.name))
        .show_ui(ui, |ui| {
            for family in registry().list_all() {
                ui.selectable_value(
                    &mut chosen,
                    family.id,
                    format!("{:02}. {}", family.id, family.name),
                );
            }
        });

    if chosen != current.id
        && let Err(e) = form.select_family(chosen)
    {
        warn!(family = chosen, error = %e, "could not select family");
    }

    let family = form.family();
    ui.label(
        RichText::new(format!("{} [{}]", family.formula, family.kind))
            .monospace()
            .size(theme::font_size::SMALL)
            .color(theme::TEXT_SECONDARY),
    );
}

/// One drag value per declared parameter.
pub fn parameter_rows(ui: &mut egui::Ui, form: &mut FormState) {
    let family = form.family();
    for &name in family.parameter_names() {
        let mut value = form.params.get(name).unwrap_or_default();
        let speed = drag_speed(value);
        let changed = labelled_row(ui, name, |ui| {
            ui.add(egui::DragValue::new(&mut value).speed(speed))
                .changed()
        });
        if changed {
            form.set_param(name, value);
        }
    }
}

/// Combo box of the family's presets; choosing one overwrites the parameters.
pub fn preset_selector(ui: &mut egui::Ui, form: &mut FormState) {
    let selected = form
        .preset()
        .map_or_else(|| "custom".to_owned(), |i| format!("preset {i}"));
    let mut chosen = None;
    labelled_row(ui, "preset", |ui| {
        egui::ComboBox::from_id_salt("preset_selector")
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for (i, preset) in form.presets().iter().enumerate() {
                    if ui
                        .selectable_label(form.preset() == Some(i), format!("{i}: {preset}"))
                        .clicked()
                    {
                        chosen = Some(i);
                    }
                }
            });
    });
    if let Some(index) = chosen {
        form.select_preset(index);
    }
}

/// Domain start, stop and sample count fields plus a reset button.
pub fn domain_rows(ui: &mut egui::Ui, form: &mut FormState) {
    let variable = form.domain.kind.variable();
    let start_speed = drag_speed(form.domain.start);
    let stop_speed = drag_speed(form.domain.stop);
    labelled_row(ui, &format!("{variable} from"), |ui| {
        ui.add(egui::DragValue::new(&mut form.domain.start).speed(start_speed));
    });
    labelled_row(ui, &format!("{variable} to"), |ui| {
        ui.add(egui::DragValue::new(&mut form.domain.stop).speed(stop_speed));
    });
    labelled_row(ui, "samples", |ui| {
        ui.add(
            egui::DragValue::new(&mut form.domain.samples)
                .range(1..=100_000)
                .speed(10.0),
        );
    });

    if ui.button("Reset domain").clicked() {
        form.reset_domain();
    }
}

/// Output path field and "Save plot" button; returns whether it was clicked.
pub fn save_row(ui: &mut egui::Ui, path: &mut String) -> bool {
    labelled_row(ui, "file", |ui| {
        ui.add(egui::TextEdit::singleline(path).desired_width(f32::INFINITY));
    });
    ui.add_enabled(!path.trim().is_empty(), egui::Button::new("Save plot"))
        .clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_speed_scales_with_magnitude() {
        assert_eq!(drag_speed(0.0), 0.001);
        assert!((drag_speed(10.0) - 0.1).abs() < 1e-12);
        assert_eq!(drag_speed(-1e6), 1.0);
    }
}
