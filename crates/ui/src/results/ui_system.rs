//! Main results dashboard window.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use engine::compute::ComputeLifecycle;
use engine::waterfall;

use super::panels;
use super::types::{ChartScenario, WaterfallChartState};

/// Displays the results dashboard once a comparison has succeeded.
///
/// The window exists only while the lifecycle holds a result; a new
/// submission clears the result and the window with it, so stale output is
/// never visible next to an in-flight request.
pub fn results_dashboard_ui(
    mut contexts: EguiContexts,
    lifecycle: Res<ComputeLifecycle>,
    mut chart: ResMut<WaterfallChartState>,
) {
    let Some(result) = lifecycle.result() else {
        return;
    };

    egui::Window::new("Results Dashboard")
        .default_width(520.0)
        .show(contexts.ctx_mut(), |ui| {
            panels::render_summary(ui, result);

            ui.add_space(6.0);
            ui.separator();
            panels::render_kpi_table(ui, result);

            ui.add_space(6.0);
            ui.separator();
            ui.heading("Cost Breakdown");
            ui.horizontal(|ui| {
                for scenario in ChartScenario::ALL {
                    let selected = chart.scenario == scenario;
                    if ui
                        .selectable_label(selected, scenario.label(result))
                        .clicked()
                    {
                        chart.scenario = scenario;
                    }
                }
            });

            let breakdown = &chart.scenario.scenario(result).cost_breakdown;
            match waterfall::decompose(breakdown) {
                Ok(segments) => panels::render_waterfall(ui, &segments),
                // Contract violation from the engine: show it, draw nothing.
                Err(err) => {
                    ui.colored_label(panels::COLOR_ERROR, err.to_string());
                }
            }
        });
}
