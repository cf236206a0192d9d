//! Types and state for the results dashboard.

use bevy::prelude::*;

use engine::results::{ComparisonResult, ScenarioResult};

/// Which scenario's cost breakdown the waterfall chart shows.
///
/// All three breakdowns are available; the original comparison always opens
/// on material A as the primary scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartScenario {
    #[default]
    MaterialA,
    Blend,
    MaterialB,
}

impl ChartScenario {
    pub const ALL: [ChartScenario; 3] =
        [ChartScenario::MaterialA, ChartScenario::Blend, ChartScenario::MaterialB];

    /// Display label, built from the engine-supplied names.
    pub fn label(self, result: &ComparisonResult) -> String {
        match self {
            ChartScenario::MaterialA => result.names.material1.clone(),
            ChartScenario::Blend => "Blended".to_string(),
            ChartScenario::MaterialB => result.names.material2.clone(),
        }
    }

    /// The scenario's slice of a comparison result.
    pub fn scenario(self, result: &ComparisonResult) -> &ScenarioResult {
        match self {
            ChartScenario::MaterialA => &result.material1,
            ChartScenario::Blend => &result.blend,
            ChartScenario::MaterialB => &result.material2,
        }
    }
}

/// Dashboard state: the currently charted scenario.
#[derive(Resource, Debug, Default)]
pub struct WaterfallChartState {
    pub scenario: ChartScenario,
}
