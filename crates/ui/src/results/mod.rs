//! Results dashboard UI.
//!
//! Shows the engine's comparison output once a computation succeeds:
//! - VIU summary cards ($/net ton) for material A, the blend, and material B
//! - KPI table (yield %, slag volume kg/t, energy credit kWh/t)
//! - Waterfall cost decomposition with a scenario selector
//!
//! All scenario labels come from the `names` the engine returned, never
//! from locally cached selection state.

mod panels;
pub mod types;
mod ui_system;

use bevy::prelude::*;

pub use types::{ChartScenario, WaterfallChartState};
pub use ui_system::results_dashboard_ui;

/// Plugin that registers the results dashboard UI.
pub struct ResultsDashboardPlugin;

impl Plugin for ResultsDashboardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WaterfallChartState>()
            .add_systems(Update, results_dashboard_ui);
    }
}
