//! Operational parameters for the melting process.
//!
//! A single [`OperationalParams`] resource holds every tunable the engine
//! expects, editable in the UI at runtime. The workbench never interprets
//! these values; they are passed through verbatim in each compute request.
//! Edits live only for the session.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Operational tunables sent with every compute request.
///
/// Field names are the engine's wire names; keep them in sync with the
/// `params` object of `POST /compute`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalParams {
    /// Electricity cost in $/kWh.
    pub electricity_cost: f64,
    /// Lime (flux) cost in $/metric ton.
    pub lime_cost_ton: f64,
    /// Value of iron units in $/ton.
    pub fe_value_ton: f64,
    /// Furnace charge capacity in tons.
    pub furnace_capacity_ton: f64,
    /// Target slag basicity (CaO/SiO2 ratio).
    pub basicity_target: f64,
    /// Target carbon content of the liquid steel, percent.
    pub target_c: f64,
    /// Maximum copper content of the liquid steel, percent.
    pub target_cu: f64,
    /// Price of the clean diluent (e.g. DRI) in $/ton.
    pub prime_diluent_price: f64,
    /// Copper content of the prime diluent, percent.
    pub prime_diluent_pct_cu: f64,
}

impl Default for OperationalParams {
    fn default() -> Self {
        Self {
            electricity_cost: 0.08,
            lime_cost_ton: 150.0,
            fe_value_ton: 400.0,
            furnace_capacity_ton: 100.0,
            basicity_target: 2.5,
            target_c: 0.1,
            target_cu: 0.1,
            prime_diluent_price: 500.0,
            prime_diluent_pct_cu: 0.01,
        }
    }
}
