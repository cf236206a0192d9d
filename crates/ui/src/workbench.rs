//! Comparison workbench window: material slots, blend slider, submit.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use engine::catalog::{Material, MaterialCatalog};
use engine::compute::{ComputeLifecycle, ComputeRequested};
use engine::request::{ComparisonSelection, Slot};

use crate::config_panel::ConfigPanelVisible;

pub fn workbench_ui(
    mut contexts: EguiContexts,
    catalog: Res<MaterialCatalog>,
    lifecycle: Res<ComputeLifecycle>,
    mut selection: ResMut<ComparisonSelection>,
    mut config_visible: ResMut<ConfigPanelVisible>,
    mut submit: EventWriter<ComputeRequested>,
) {
    egui::Window::new("Comparison Workbench")
        .default_width(380.0)
        .show(contexts.ctx_mut(), |ui| {
            material_selector(ui, "Scenario A", Slot::A, &catalog, &mut selection);
            material_selector(ui, "Scenario B", Slot::B, &catalog, &mut selection);

            ui.add_space(6.0);
            ui.label("Blend Percentage (A / B)");
            let mut pct = i32::from(selection.blend_pct_a());
            ui.horizontal(|ui| {
                ui.monospace(format!("{:>3}%", selection.blend_pct_a()));
                ui.add(egui::Slider::new(&mut pct, 0..=100).show_value(false));
                // Complement is derived, never stored: the two readouts
                // cannot drift apart.
                ui.monospace(format!("{:>3}%", selection.blend_pct_b()));
            });
            selection.set_blend_pct(pct);

            ui.add_space(8.0);
            let ready = selection.is_complete() && !lifecycle.is_loading();
            let label = if lifecycle.is_loading() {
                "Calculating..."
            } else {
                "Compute VIU"
            };
            let button =
                egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 26.0));
            if ui.add_enabled(ready, button).clicked() {
                submit.send(ComputeRequested);
            }

            ui.add_space(4.0);
            ui.checkbox(&mut config_visible.0, "Show operational parameters");
        });
}

fn material_selector(
    ui: &mut egui::Ui,
    title: &str,
    slot: Slot,
    catalog: &MaterialCatalog,
    selection: &mut ComparisonSelection,
) {
    let selected_text = selection
        .selected(slot)
        .and_then(|id| catalog.find(id))
        .map(material_label)
        .unwrap_or_else(|| "Select Material".to_string());

    ui.horizontal(|ui| {
        ui.label(title);
        egui::ComboBox::from_id_salt(title)
            .width(240.0)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for material in &catalog.materials {
                    let chosen = selection.selected(slot) == Some(material.id.as_str());
                    if ui
                        .selectable_label(chosen, material_label(material))
                        .clicked()
                    {
                        selection.select(slot, &material.id, catalog);
                    }
                }
            });
    });
}

fn material_label(material: &Material) -> String {
    format!("{} - ${}/t", material.name, material.price_per_ton)
}
