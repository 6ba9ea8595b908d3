use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Model used when a caller does not name one
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Models advertised by the `models` endpoint when none are configured
pub const DEFAULT_MODELS: &[&str] = &["gemini-2.5-flash", "gemini-2.5-pro", "gemini-1.5-flash", "gemini-1.5-pro"];

/// Configuration for the Gemini provider and the gateway in front of it
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key for the Generative Language API
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (tests point this at a mock backend)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model applied when a request omits one
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Ordered model catalog
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    /// Outbound request timeout (e.g. "60s", "2m")
    #[serde(default = "default_timeout")]
    pub timeout: String,
    /// Upper bound on a single health probe
    #[serde(default = "default_health_timeout")]
    pub health_timeout: String,
    /// Path prefix the Gemini routes are mounted under
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            default_model: default_model(),
            models: default_models(),
            timeout: default_timeout(),
            health_timeout: default_health_timeout(),
            route_prefix: default_route_prefix(),
        }
    }
}

impl GeminiConfig {
    /// Parsed outbound request timeout
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if `timeout` is not a valid duration
    pub fn request_timeout(&self) -> Result<Duration, String> {
        parse_duration("timeout", &self.timeout)
    }

    /// Parsed health probe timeout
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if `health_timeout` is not a valid duration
    pub fn probe_timeout(&self) -> Result<Duration, String> {
        parse_duration("health_timeout", &self.health_timeout)
    }
}

fn parse_duration(field: &str, value: &str) -> Result<Duration, String> {
    duration_str::parse(value).map_err(|e| format!("invalid gemini.{field} '{value}': {e}"))
}

fn default_model() -> String {
    DEFAULT_MODEL.to_owned()
}

fn default_models() -> Vec<String> {
    DEFAULT_MODELS.iter().map(|m| (*m).to_owned()).collect()
}

fn default_timeout() -> String {
    "60s".to_owned()
}

fn default_health_timeout() -> String {
    "30s".to_owned()
}

fn default_route_prefix() -> String {
    "/gemini".to_owned()
}
