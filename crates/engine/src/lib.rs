//! Headless engine-side logic for the VIU workbench: material catalog,
//! comparison selection, compute request lifecycle, and the waterfall
//! decomposition of cost breakdowns. No rendering; the `ui` crate reads
//! these resources and writes the events.

use bevy::prelude::*;

pub mod catalog;
pub mod client;
pub mod compute;
pub mod config;
pub mod error;
pub mod params;
pub mod request;
pub mod results;
pub mod waterfall;

/// Registers every engine resource, event, and system.
pub struct EnginePlugin;

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<config::EngineEndpoint>()
            .init_resource::<catalog::MaterialCatalog>()
            .init_resource::<catalog::CatalogFetch>()
            .init_resource::<params::OperationalParams>()
            .init_resource::<request::ComparisonSelection>()
            .init_resource::<compute::ComputeLifecycle>()
            .init_resource::<compute::ActiveComputation>()
            .init_resource::<compute::ValidationNotice>()
            .add_event::<compute::ComputeRequested>()
            .add_systems(Startup, catalog::start_catalog_fetch)
            .add_systems(
                Update,
                (
                    catalog::poll_catalog_fetch,
                    compute::submit_compute_requests,
                    compute::collect_compute_results,
                ),
            );
    }
}
