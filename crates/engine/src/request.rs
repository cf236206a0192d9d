//! User selection state and compute request assembly.

use bevy::prelude::*;
use serde::Serialize;

use crate::catalog::{Material, MaterialCatalog};
use crate::error::EngineError;
use crate::params::OperationalParams;

/// Which comparison slot a material selection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
}

/// The user's current comparison setup: two material slots plus the blend
/// share of slot A. The slot B share is always derived (`100 - blend`), so
/// the two displayed percentages cannot drift apart.
///
/// Selecting the same material in both slots is allowed: the blend then
/// degenerates to that material's own result, which the engine handles
/// without special-casing.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ComparisonSelection {
    slot_a: Option<String>,
    slot_b: Option<String>,
    blend_pct_a: u8,
}

impl Default for ComparisonSelection {
    fn default() -> Self {
        Self {
            slot_a: None,
            slot_b: None,
            blend_pct_a: 50,
        }
    }
}

impl ComparisonSelection {
    /// Select a material for a slot by id. An id that does not resolve
    /// against the catalog clears the slot instead.
    pub fn select(&mut self, slot: Slot, id: &str, catalog: &MaterialCatalog) {
        let resolved = catalog.find(id).map(|m| m.id.clone());
        match slot {
            Slot::A => self.slot_a = resolved,
            Slot::B => self.slot_b = resolved,
        }
    }

    /// Currently selected material id for a slot, if any.
    pub fn selected(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::A => self.slot_a.as_deref(),
            Slot::B => self.slot_b.as_deref(),
        }
    }

    /// Set the blend share of slot A, clamped to 0..=100.
    pub fn set_blend_pct(&mut self, pct: i32) {
        self.blend_pct_a = pct.clamp(0, 100) as u8;
    }

    pub fn blend_pct_a(&self) -> u8 {
        self.blend_pct_a
    }

    /// Derived complement: slot B's share of the blend.
    pub fn blend_pct_b(&self) -> u8 {
        100 - self.blend_pct_a
    }

    pub fn is_complete(&self) -> bool {
        self.slot_a.is_some() && self.slot_b.is_some()
    }

    /// Assemble the compute payload from the current selection.
    ///
    /// Fails with [`EngineError::IncompleteSelection`] if either slot is
    /// empty or its id no longer resolves against the catalog (a slot can
    /// go stale if the catalog it was picked from is replaced).
    pub fn build_request(
        &self,
        catalog: &MaterialCatalog,
        params: &OperationalParams,
    ) -> Result<ComparisonRequest, EngineError> {
        let mat1 = self.slot_a.as_deref().and_then(|id| catalog.find(id));
        let mat2 = self.slot_b.as_deref().and_then(|id| catalog.find(id));
        match (mat1, mat2) {
            (Some(m1), Some(m2)) => Ok(ComparisonRequest {
                material1: m1.clone(),
                material2: m2.clone(),
                blend_pct_mat1: f64::from(self.blend_pct_a),
                params: params.clone(),
            }),
            _ => Err(EngineError::IncompleteSelection),
        }
    }
}

/// JSON payload for `POST /compute`. Field names are the engine's contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRequest {
    pub material1: Material,
    pub material2: Material,
    pub blend_pct_mat1: f64,
    pub params: OperationalParams,
}
