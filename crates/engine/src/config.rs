//! Engine endpoint configuration.
//!
//! The base URL is resolved once at startup from the `VIU_ENGINE_URL`
//! environment variable, falling back to a local development engine. Both
//! endpoints (`/materials`, `/compute`) hang off this base.

use bevy::prelude::*;

/// Environment variable overriding the engine base URL.
pub const ENGINE_URL_ENV: &str = "VIU_ENGINE_URL";

/// Base URL used when [`ENGINE_URL_ENV`] is not set.
pub const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:8000/api";

/// Resolved base URL of the valuation engine.
#[derive(Resource, Debug, Clone)]
pub struct EngineEndpoint(pub String);

impl Default for EngineEndpoint {
    fn default() -> Self {
        let url =
            std::env::var(ENGINE_URL_ENV).unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string());
        Self(url)
    }
}
