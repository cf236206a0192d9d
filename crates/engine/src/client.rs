//! Blocking HTTP client for the valuation engine.
//!
//! Two endpoints, per the engine contract: `GET {base}/materials` and
//! `POST {base}/compute`. The client is cheap to build and is moved into a
//! task-pool task per call, so no shared connection state needs locking.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::catalog::Material;
use crate::error::EngineError;
use crate::request::ComparisonRequest;
use crate::results::ComparisonResult;

/// Fallback shown when the engine reports failure without an error body.
const GENERIC_COMPUTE_ERROR: &str = "Calculation failed";

/// Thin client over the engine's two endpoints.
#[derive(Debug, Clone)]
pub struct EngineClient {
    base_url: String,
    http: Client,
}

/// Success envelope of `POST /compute`. The engine also returns a
/// `simulationId` and a `summary`; only `results` matters here.
#[derive(Deserialize)]
struct ComputeResponse {
    results: ComparisonResult,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    error: Option<String>,
}

impl EngineClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }

    /// Fetch the material catalog. Any transport failure or non-success
    /// status maps to [`EngineError::CatalogUnavailable`]; the body of an
    /// error response is ignored.
    pub fn fetch_materials(&self) -> Result<Vec<Material>, EngineError> {
        let url = format!("{}/materials", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|err| EngineError::CatalogUnavailable(err.to_string()))?;
        if !response.status().is_success() {
            return Err(EngineError::CatalogUnavailable(format!(
                "engine returned {}",
                response.status()
            )));
        }
        response
            .json()
            .map_err(|err| EngineError::CatalogUnavailable(err.to_string()))
    }

    /// Run one comparison. On a non-success status the engine's `error`
    /// body text is surfaced if present, else a generic message.
    pub fn compute(&self, request: &ComparisonRequest) -> Result<ComparisonResult, EngineError> {
        let url = format!("{}/compute", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .map_err(|err| EngineError::ComputeFailed(err.to_string()))?;
        if !response.status().is_success() {
            let body: ErrorBody = response.json().unwrap_or_default();
            return Err(EngineError::ComputeFailed(
                body.error
                    .unwrap_or_else(|| GENERIC_COMPUTE_ERROR.to_string()),
            ));
        }
        let body: ComputeResponse = response
            .json()
            .map_err(|err| EngineError::ComputeFailed(format!("malformed engine response: {err}")))?;
        Ok(body.results)
    }
}
