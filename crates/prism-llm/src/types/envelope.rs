use serde::{Deserialize, Serialize};

/// Token usage statistics reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens generated in the completion
    pub completion_tokens: u32,
    /// Total tokens (prompt + completion)
    pub total_tokens: u32,
}

/// Successful provider output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub text: String,
    pub usage: Option<Usage>,
}

/// Uniform result of every generation call
///
/// Exactly one of `text` and `error` is populated, matching `success`.
/// Construct through [`ResultEnvelope::success`] or [`ResultEnvelope::failure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub success: bool,
    pub text: Option<String>,
    /// Model the request was sent to
    pub model: String,
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ResultEnvelope {
    pub fn success(model: impl Into<String>, response: ProviderResponse) -> Self {
        Self {
            success: true,
            text: Some(response.text),
            model: model.into(),
            error: None,
            usage: response.usage,
        }
    }

    pub fn failure(model: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            text: None,
            model: model.into(),
            error: Some(error.into()),
            usage: None,
        }
    }
}

/// Provider reachability as reported by the health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

/// Result of [`crate::Gateway::health_check`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: HealthState,
    pub credential_configured: bool,
    pub client_ready: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
