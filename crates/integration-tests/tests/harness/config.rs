//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use prism_config::{Config, GeminiConfig, ServerConfig};
use secrecy::SecretString;

pub const TEST_API_KEY: &str = "AIza-integration";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with a test key and no upstream override
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                gemini: GeminiConfig {
                    api_key: Some(SecretString::from(TEST_API_KEY)),
                    ..GeminiConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point the provider at a mock backend
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.gemini.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    pub fn with_default_model(mut self, model: &str) -> Self {
        model.clone_into(&mut self.config.gemini.default_model);
        self
    }

    pub fn with_health_timeout(mut self, timeout: &str) -> Self {
        timeout.clone_into(&mut self.config.gemini.health_timeout);
        self
    }

    pub fn with_route_prefix(mut self, prefix: &str) -> Self {
        prefix.clone_into(&mut self.config.gemini.route_prefix);
        self
    }

    /// Disable the liveness endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    pub fn without_api_key(mut self) -> Self {
        self.config.gemini.api_key = None;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
