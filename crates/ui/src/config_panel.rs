//! Operational parameter editor window.
//!
//! Every tunable the engine accepts is editable here; edits take effect on
//! the next compute submission and last only for the session.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use engine::params::OperationalParams;

/// Visibility toggle for the parameters window.
#[derive(Resource)]
pub struct ConfigPanelVisible(pub bool);

impl Default for ConfigPanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

pub fn config_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<ConfigPanelVisible>,
    mut params: ResMut<OperationalParams>,
) {
    if !visible.0 {
        return;
    }

    let mut open = true;
    egui::Window::new("Operational Parameters")
        .open(&mut open)
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            param_row(ui, "Electricity cost ($/kWh)", &mut params.electricity_cost, 0.005);
            param_row(ui, "Lime cost ($/t)", &mut params.lime_cost_ton, 1.0);
            param_row(ui, "Iron value ($/t)", &mut params.fe_value_ton, 1.0);
            param_row(ui, "Furnace capacity (t)", &mut params.furnace_capacity_ton, 1.0);
            param_row(ui, "Basicity target (CaO/SiO2)", &mut params.basicity_target, 0.05);
            param_row(ui, "Target carbon (%)", &mut params.target_c, 0.01);
            param_row(ui, "Target copper (%)", &mut params.target_cu, 0.01);
            param_row(ui, "Diluent price ($/t)", &mut params.prime_diluent_price, 1.0);
            param_row(ui, "Diluent copper (%)", &mut params.prime_diluent_pct_cu, 0.001);

            ui.add_space(6.0);
            if ui.button("Reset to defaults").clicked() {
                *params = OperationalParams::default();
            }
        });
    visible.0 = open;
}

fn param_row(ui: &mut egui::Ui, label: &str, value: &mut f64, speed: f64) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::DragValue::new(value).speed(speed));
        });
    });
}
