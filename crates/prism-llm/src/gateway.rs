//! Gateway: owns the provider and turns every outcome into an envelope

use std::sync::Arc;
use std::time::Duration;

use prism_config::GeminiConfig;
use secrecy::ExposeSecret;

use crate::error::ConfigurationError;
use crate::normalize::Normalizer;
use crate::provider::{GoogleProvider, Provider};
use crate::types::{GenerationRequest, HealthState, HealthStatus, Message, ModelCatalog, ResultEnvelope};

/// Prompt dispatched by [`Gateway::health_check`]
pub const HEALTH_CHECK_PROMPT: &str = "Hello, this is a health check.";

/// Initialized gateway handle
///
/// Cloning is cheap; all clones share the same provider client and catalog,
/// none of which change after construction.
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

struct GatewayInner {
    provider: Arc<dyn Provider>,
    normalizer: Normalizer,
    catalog: ModelCatalog,
    credential_configured: bool,
    probe_timeout: Duration,
}

impl Gateway {
    /// Build a gateway backed by the Gemini API
    ///
    /// # Errors
    ///
    /// Fails when the API key is absent or empty, or when a timeout setting
    /// or the HTTP client is invalid.
    pub fn initialize(config: &GeminiConfig) -> Result<Self, ConfigurationError> {
        let provider = GoogleProvider::new(config)?;
        Self::with_provider(config, Arc::new(provider))
    }

    /// Build a gateway around an already constructed provider
    ///
    /// The credential check still applies, so a gateway never exists without
    /// a configured key.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Gateway::initialize`], minus client construction.
    pub fn with_provider(config: &GeminiConfig, provider: Arc<dyn Provider>) -> Result<Self, ConfigurationError> {
        let credential_configured = config
            .api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty());
        if !credential_configured {
            return Err(ConfigurationError::MissingCredential);
        }

        let probe_timeout = config.probe_timeout().map_err(ConfigurationError::InvalidSetting)?;
        let catalog = ModelCatalog::new(config.models.iter().cloned());
        let normalizer = Normalizer::new(config.default_model.as_str());

        tracing::info!(
            provider = provider.name(),
            default_model = normalizer.default_model(),
            models = catalog.models().len(),
            "gateway initialized"
        );

        Ok(Self {
            inner: Arc::new(GatewayInner {
                provider,
                normalizer,
                catalog,
                credential_configured,
                probe_timeout,
            }),
        })
    }

    /// Send a normalized request and wrap whatever comes back
    pub async fn dispatch(&self, request: &GenerationRequest) -> ResultEnvelope {
        match self.inner.provider.invoke(&request.model, &request.content).await {
            Ok(response) => {
                tracing::debug!(model = %request.model, "generation succeeded");
                ResultEnvelope::success(&request.model, response)
            }
            Err(fault) => {
                tracing::warn!(model = %request.model, error = %fault, "generation failed");
                ResultEnvelope::failure(&request.model, fault.to_string())
            }
        }
    }

    pub async fn generate(&self, prompt: &str, model: Option<&str>) -> ResultEnvelope {
        self.dispatch(&self.inner.normalizer.plain(prompt, model)).await
    }

    pub async fn chat(&self, messages: &[Message], model: Option<&str>) -> ResultEnvelope {
        self.dispatch(&self.inner.normalizer.from_conversation(messages, model))
            .await
    }

    pub async fn contextual_generate(&self, prompt: &str, context: &str, model: Option<&str>) -> ResultEnvelope {
        self.dispatch(&self.inner.normalizer.with_context(prompt, context, model))
            .await
    }

    pub async fn analyze_document(&self, content: &str, analysis_type: &str) -> ResultEnvelope {
        self.dispatch(&self.inner.normalizer.for_document(content, analysis_type))
            .await
    }

    pub async fn generate_code(&self, description: &str, language: &str) -> ResultEnvelope {
        self.dispatch(&self.inner.normalizer.for_code_generation(description, language))
            .await
    }

    pub async fn review_code(&self, code: &str, language: &str) -> ResultEnvelope {
        self.dispatch(&self.inner.normalizer.for_code_review(code, language))
            .await
    }

    /// Static model catalog; never touches the network
    pub fn list_models(&self) -> ModelCatalog {
        self.inner.catalog.clone()
    }

    /// Probe the provider with a trivial prompt
    ///
    /// The probe runs as its own task bounded by the configured health
    /// timeout, so a hung or panicking probe still yields an `unhealthy`
    /// status instead of escaping.
    pub async fn health_check(&self) -> HealthStatus {
        let probe = self.inner.normalizer.plain(HEALTH_CHECK_PROMPT, None);
        let gateway = self.clone();
        let mut task = tokio::spawn(async move { gateway.dispatch(&probe).await });

        let (status, error) = match tokio::time::timeout(self.inner.probe_timeout, &mut task).await {
            Ok(Ok(envelope)) if envelope.success => (HealthState::Healthy, None),
            Ok(Ok(envelope)) => (HealthState::Unhealthy, envelope.error),
            Ok(Err(join_error)) => (HealthState::Unhealthy, Some(format!("health probe failed: {join_error}"))),
            Err(_) => {
                task.abort();
                (
                    HealthState::Unhealthy,
                    Some(format!(
                        "health probe timed out after {}s",
                        self.inner.probe_timeout.as_secs_f32()
                    )),
                )
            }
        };

        if status == HealthState::Unhealthy {
            tracing::warn!(error = error.as_deref().unwrap_or_default(), "provider health check failed");
        }

        HealthStatus {
            status,
            credential_configured: self.inner.credential_configured,
            client_ready: true,
            error,
        }
    }
}
