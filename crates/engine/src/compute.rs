//! Compute request lifecycle: single-flight submission with
//! last-submission-wins supersession.
//!
//! The state machine lives in [`ComputeLifecycle`] as plain transition
//! methods so it can be tested without an app. The Bevy systems around it
//! only move data: a [`ComputeRequested`] event triggers validation and a
//! background POST; a poll system feeds the completion back through the
//! machine, which drops anything tagged with a superseded generation.

use bevy::prelude::*;
use bevy::tasks::{block_on, AsyncComputeTaskPool, Task};

use crate::catalog::MaterialCatalog;
use crate::client::EngineClient;
use crate::config::EngineEndpoint;
use crate::error::EngineError;
use crate::params::OperationalParams;
use crate::request::ComparisonSelection;
use crate::results::ComparisonResult;

/// Fired by the UI when the user presses Compute.
#[derive(Event, Debug, Default)]
pub struct ComputeRequested;

/// Rendering-facing state of the current computation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ComputePhase {
    #[default]
    Idle,
    Loading,
    Ready(ComparisonResult),
    Failed(String),
}

/// Explicit state machine for the compute request lifecycle.
///
/// Each submission gets a monotonically increasing generation; a completion
/// is applied only while its generation is still current. A result for a
/// superseded request therefore can never be rendered, no matter how the
/// two responses interleave.
#[derive(Resource, Debug, Default)]
pub struct ComputeLifecycle {
    phase: ComputePhase,
    generation: u64,
}

impl ComputeLifecycle {
    /// Begin a new submission: discard whatever was shown (result or
    /// error), enter `Loading`, and return the generation tag for the
    /// request about to go out.
    pub fn begin_submit(&mut self) -> u64 {
        self.generation += 1;
        self.phase = ComputePhase::Loading;
        self.generation
    }

    /// Apply a completed request. Completions tagged with a stale
    /// generation are dropped.
    pub fn apply(&mut self, generation: u64, outcome: Result<ComparisonResult, EngineError>) {
        if generation != self.generation {
            debug!(
                "dropping superseded compute result (generation {generation}, current {})",
                self.generation
            );
            return;
        }
        self.phase = match outcome {
            Ok(result) => ComputePhase::Ready(result),
            Err(err) => ComputePhase::Failed(err.to_string()),
        };
    }

    pub fn phase(&self) -> &ComputePhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ComputePhase::Loading)
    }

    pub fn result(&self) -> Option<&ComparisonResult> {
        match &self.phase {
            ComputePhase::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ComputePhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

struct InFlight {
    task: Task<Result<ComparisonResult, EngineError>>,
    generation: u64,
}

/// Holder for the in-flight compute task. Replaced wholesale when a newer
/// submission supersedes it.
#[derive(Resource, Default)]
pub struct ActiveComputation(Option<InFlight>);

/// Message shown when a submission is rejected before any network call.
#[derive(Resource, Debug, Default)]
pub struct ValidationNotice(pub Option<String>);

/// Turn [`ComputeRequested`] events into a validated background POST.
///
/// Validation failures never reach the network: the lifecycle is left
/// untouched and the reason is exposed through [`ValidationNotice`].
#[allow(clippy::too_many_arguments)]
pub fn submit_compute_requests(
    mut events: EventReader<ComputeRequested>,
    endpoint: Res<EngineEndpoint>,
    catalog: Res<MaterialCatalog>,
    params: Res<OperationalParams>,
    selection: Res<ComparisonSelection>,
    mut lifecycle: ResMut<ComputeLifecycle>,
    mut active: ResMut<ActiveComputation>,
    mut notice: ResMut<ValidationNotice>,
) {
    // Collapse a burst of clicks in one frame into a single submission.
    if events.is_empty() {
        return;
    }
    events.clear();

    let request = match selection.build_request(&catalog, &params) {
        Ok(request) => request,
        Err(err) => {
            warn!("compute submission rejected: {err}");
            notice.0 = Some(err.to_string());
            return;
        }
    };
    notice.0 = None;

    let generation = lifecycle.begin_submit();
    info!(
        "submitting comparison (generation {generation}): {} vs {} at {}%",
        request.material1.name, request.material2.name, request.blend_pct_mat1
    );

    let client = EngineClient::new(endpoint.0.clone());
    let task = AsyncComputeTaskPool::get().spawn(async move { client.compute(&request) });
    active.0 = Some(InFlight { task, generation });
}

/// Poll the in-flight task and feed its outcome through the lifecycle.
pub fn collect_compute_results(
    mut active: ResMut<ActiveComputation>,
    mut lifecycle: ResMut<ComputeLifecycle>,
) {
    let Some(inflight) = active.0.as_mut() else {
        return;
    };
    if let Some(outcome) = block_on(futures_lite::future::poll_once(&mut inflight.task)) {
        let generation = inflight.generation;
        active.0 = None;
        if let Err(err) = &outcome {
            warn!("compute request failed: {err}");
        }
        lifecycle.apply(generation, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use httpmock::{Method::POST, MockServer};
    use serde_json::json;

    use crate::catalog::{CatalogStatus, Material};
    use crate::request::Slot;

    fn result_named(name: &str) -> ComparisonResult {
        let mut result = ComparisonResult::default();
        result.names.material1 = name.to_string();
        result
    }

    #[test]
    fn test_submit_enters_loading_and_clears_prior_state() {
        let mut lifecycle = ComputeLifecycle::default();
        let generation = lifecycle.begin_submit();
        lifecycle.apply(generation, Ok(result_named("Shredded Scrap")));
        assert!(lifecycle.result().is_some());

        // New submission: prior result must vanish immediately.
        lifecycle.begin_submit();
        assert!(lifecycle.is_loading());
        assert!(lifecycle.result().is_none());
        assert!(lifecycle.error().is_none());
    }

    #[test]
    fn test_failure_replaces_result_until_resubmit() {
        let mut lifecycle = ComputeLifecycle::default();
        let generation = lifecycle.begin_submit();
        lifecycle.apply(
            generation,
            Err(EngineError::ComputeFailed("bad blend".to_string())),
        );
        assert!(lifecycle.result().is_none());
        assert!(lifecycle.error().unwrap().contains("bad blend"));

        let generation = lifecycle.begin_submit();
        assert!(lifecycle.error().is_none());
        lifecycle.apply(generation, Ok(result_named("Busheling")));
        assert_eq!(lifecycle.result().unwrap().names.material1, "Busheling");
    }

    #[test]
    fn test_stale_result_arriving_late_is_suppressed() {
        let mut lifecycle = ComputeLifecycle::default();
        let gen_a = lifecycle.begin_submit();
        let gen_b = lifecycle.begin_submit();

        // A's response arrives after B was submitted: dropped.
        lifecycle.apply(gen_a, Ok(result_named("A")));
        assert!(lifecycle.is_loading());

        lifecycle.apply(gen_b, Ok(result_named("B")));
        assert_eq!(lifecycle.result().unwrap().names.material1, "B");
    }

    fn harness() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<EngineEndpoint>()
            .init_resource::<MaterialCatalog>()
            .init_resource::<OperationalParams>()
            .init_resource::<ComparisonSelection>()
            .init_resource::<ComputeLifecycle>()
            .init_resource::<ActiveComputation>()
            .init_resource::<ValidationNotice>()
            .add_event::<ComputeRequested>()
            .add_systems(Update, (submit_compute_requests, collect_compute_results));
        app
    }

    fn seeded_catalog() -> MaterialCatalog {
        let materials = ["m1", "m2"]
            .into_iter()
            .map(|id| Material {
                id: id.to_string(),
                name: format!("Material {id}"),
                price_per_ton: 400.0,
                extra: serde_json::Map::new(),
            })
            .collect();
        MaterialCatalog {
            materials,
            status: CatalogStatus::Ready,
        }
    }

    #[test]
    fn test_incomplete_submission_makes_no_network_call() {
        let mut app = harness();
        app.world_mut().send_event(ComputeRequested);
        app.update();

        // No task spawned, lifecycle untouched, reason surfaced.
        assert!(app.world().resource::<ActiveComputation>().0.is_none());
        assert_eq!(
            *app.world().resource::<ComputeLifecycle>().phase(),
            ComputePhase::Idle
        );
        assert!(app.world().resource::<ValidationNotice>().0.is_some());
    }

    #[test]
    fn test_submit_to_ready_pipeline() {
        let server = MockServer::start();
        let scenario = json!({
            "costPerNetTon": 412.5,
            "costBreakdown": {"Base Price": 400.0, "Flux Penalty": 12.5},
            "kpis": {"yieldPct": 92.0, "slagVolumeKgPerTon": 110.0, "kwhCreditPerTon": 30.0}
        });
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/compute");
            then.status(200).json_body(json!({
                "results": {
                    "names": {"material1": "Material m1", "material2": "Material m2"},
                    "material1": scenario,
                    "material2": scenario,
                    "blend": scenario
                }
            }));
        });

        let mut app = harness();
        app.insert_resource(EngineEndpoint(server.url("/api")));
        let catalog = seeded_catalog();
        let mut selection = ComparisonSelection::default();
        selection.select(Slot::A, "m1", &catalog);
        selection.select(Slot::B, "m2", &catalog);
        app.insert_resource(catalog);
        app.insert_resource(selection);

        app.world_mut().send_event(ComputeRequested);
        app.update();
        assert!(app.world().resource::<ComputeLifecycle>().is_loading());

        for _ in 0..400 {
            app.update();
            if app.world().resource::<ComputeLifecycle>().result().is_some() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        mock.assert();
        let lifecycle = app.world().resource::<ComputeLifecycle>();
        let result = lifecycle.result().expect("pipeline never produced a result");
        assert_eq!(result.names.material2, "Material m2");
        assert_eq!(result.blend.cost_per_net_ton, 412.5);
    }

    #[test]
    fn test_stale_result_cannot_overwrite_newer_one() {
        let mut lifecycle = ComputeLifecycle::default();
        let gen_a = lifecycle.begin_submit();
        let gen_b = lifecycle.begin_submit();

        lifecycle.apply(gen_b, Ok(result_named("B")));
        lifecycle.apply(gen_a, Ok(result_named("A")));
        assert_eq!(lifecycle.result().unwrap().names.material1, "B");

        // Same for a stale failure: it must not clobber B's result.
        lifecycle.apply(gen_a, Err(EngineError::ComputeFailed("late".to_string())));
        assert_eq!(lifecycle.result().unwrap().names.material1, "B");
    }
}
