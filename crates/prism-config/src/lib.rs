#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod gemini;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use cors::*;
pub use gemini::*;
pub use health::*;
pub use server::*;
pub use telemetry::*;

/// Top-level Prism configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Gemini provider configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
