//! Wire data model for the compute response.
//!
//! Everything here is produced by the engine and stored verbatim; the
//! workbench never mutates a result, only derives chart data from it.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Ordered cost-component breakdown for one scenario, in $/net-ton deltas.
///
/// The engine emits this as a JSON object whose member order is load-bearing:
/// the waterfall walks it cumulatively, entry by entry. It is therefore kept
/// as a sequence of `(label, value)` pairs rather than a map, so the type
/// itself cannot lose the order. The first entry is expected to be the
/// `"Base Price"` anchor (enforced by [`crate::waterfall::decompose`], not
/// here).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CostBreakdown(pub Vec<(String, f64)>);

impl CostBreakdown {
    pub fn entries(&self) -> &[(String, f64)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for CostBreakdown {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = CostBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of cost component labels to numeric deltas")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                // MapAccess streams members in document order, which is
                // exactly the order the breakdown must keep.
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, value)) = access.next_entry::<String, f64>()? {
                    entries.push((name, value));
                }
                Ok(CostBreakdown(entries))
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}

/// Per-scenario key performance indicators.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSet {
    pub yield_pct: f64,
    pub slag_volume_kg_per_ton: f64,
    pub kwh_credit_per_ton: f64,
}

/// Full engine output for one evaluated scenario.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub cost_per_net_ton: f64,
    pub cost_breakdown: CostBreakdown,
    pub kpis: KpiSet,
}

/// Display names for the two compared materials, as the engine echoed them.
/// Rendering always uses these, never locally cached labels.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ScenarioNames {
    pub material1: String,
    pub material2: String,
}

/// The engine's complete answer to one comparison request: both single
/// materials plus the blend.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ComparisonResult {
    pub names: ScenarioNames,
    pub material1: ScenarioResult,
    pub material2: ScenarioResult,
    pub blend: ScenarioResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_preserves_document_order() {
        // Labels deliberately out of alphabetical order; a map-backed
        // representation would silently re-sort them.
        let json = r#"{"Base Price": 300.0, "Yield Loss": 14.2,
                       "Energy Credit": -8.5, "Copper Dilution": 3.1}"#;
        let breakdown: CostBreakdown = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = breakdown.entries().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            labels,
            ["Base Price", "Yield Loss", "Energy Credit", "Copper Dilution"]
        );
        assert_eq!(breakdown.entries()[2].1, -8.5);
    }

    #[test]
    fn test_scenario_result_wire_names() {
        let json = r#"{
            "costPerNetTon": 412.07,
            "costBreakdown": {"Base Price": 380.0, "Flux Penalty": 12.0},
            "kpis": {"yieldPct": 92.4, "slagVolumeKgPerTon": 110.0, "kwhCreditPerTon": 31.5}
        }"#;
        let scenario: ScenarioResult = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.cost_per_net_ton, 412.07);
        assert_eq!(scenario.cost_breakdown.len(), 2);
        assert_eq!(scenario.kpis.slag_volume_kg_per_ton, 110.0);
    }
}
