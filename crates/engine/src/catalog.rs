//! Material catalog: the read-only list of selectable charge materials.
//!
//! Fetched once at startup from `GET /materials` on a background task. A
//! failed fetch leaves the catalog empty and flips its status to
//! [`CatalogStatus::Unavailable`], which the UI surfaces as a banner; there
//! is no retry and no crash.

use bevy::prelude::*;
use bevy::tasks::{block_on, AsyncComputeTaskPool, Task};
use serde::{Deserialize, Serialize};

use crate::client::EngineClient;
use crate::config::EngineEndpoint;
use crate::error::EngineError;

/// One selectable charge material.
///
/// Only `id`, `name`, and `price_per_ton` are interpreted client-side. The
/// catalog rows also carry the chemistry columns the engine needs (pct_fe,
/// pct_cu, gangue_sio2, ...); those ride along opaquely in `extra` and are
/// sent back verbatim inside each compute request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub price_per_ton: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Lifecycle of the one-shot catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    /// Fetch still in flight.
    #[default]
    Pending,
    /// Materials loaded.
    Ready,
    /// Fetch failed; holds the user-facing message.
    Unavailable(String),
}

/// Session-wide cached copy of the material catalog.
#[derive(Resource, Debug, Default)]
pub struct MaterialCatalog {
    /// Materials in the order the engine returned them.
    pub materials: Vec<Material>,
    pub status: CatalogStatus,
}

impl MaterialCatalog {
    /// Look up a material by id.
    pub fn find(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }
}

/// Holder for the in-flight catalog fetch task.
#[derive(Resource, Default)]
pub struct CatalogFetch(Option<Task<Result<Vec<Material>, EngineError>>>);

/// Kick off the catalog fetch at startup.
pub fn start_catalog_fetch(endpoint: Res<EngineEndpoint>, mut fetch: ResMut<CatalogFetch>) {
    let client = EngineClient::new(endpoint.0.clone());
    let task = AsyncComputeTaskPool::get().spawn(async move { client.fetch_materials() });
    fetch.0 = Some(task);
}

/// Poll the fetch task and apply its outcome to the catalog resource.
pub fn poll_catalog_fetch(mut fetch: ResMut<CatalogFetch>, mut catalog: ResMut<MaterialCatalog>) {
    let Some(task) = fetch.0.as_mut() else {
        return;
    };
    if let Some(outcome) = block_on(futures_lite::future::poll_once(task)) {
        fetch.0 = None;
        match outcome {
            Ok(materials) => {
                info!("material catalog loaded ({} materials)", materials.len());
                catalog.materials = materials;
                catalog.status = CatalogStatus::Ready;
            }
            Err(err) => {
                warn!("material catalog fetch failed: {err}");
                catalog.materials.clear();
                catalog.status = CatalogStatus::Unavailable(err.to_string());
            }
        }
    }
}
