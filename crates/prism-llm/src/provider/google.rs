//! Google Generative Language API provider implementation

use std::time::Duration;

use async_trait::async_trait;
use prism_config::GeminiConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::Provider;
use crate::convert::google::upstream_error_message;
use crate::error::{ConfigurationError, ProviderFault};
use crate::protocol::google::{GoogleRequest, GoogleResponse};
use crate::types::{Content, ProviderResponse};

/// Default Google Generative Language API base URL
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Generative Language API provider
pub struct GoogleProvider {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    timeout: Duration,
}

impl GoogleProvider {
    /// Create from provider configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingCredential` when no usable API key is
    /// configured, `InvalidSetting` for an unparseable timeout, and `Client` if
    /// the HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, ConfigurationError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ConfigurationError::MissingCredential)?;

        let base_url = match &config.base_url {
            Some(url) => url.clone(),
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| ConfigurationError::InvalidSetting(e.to_string()))?,
        };
        if base_url.cannot_be_a_base() {
            return Err(ConfigurationError::InvalidSetting(format!(
                "gemini.base_url cannot carry a path: {base_url}"
            )));
        }

        let timeout = config.request_timeout().map_err(ConfigurationError::InvalidSetting)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
            timeout,
        })
    }

    /// Build the `generateContent` endpoint URL for a model
    ///
    /// The model is appended as one percent-encoded path segment, so a
    /// caller-supplied name cannot leave `/models/` or add a query.
    fn generate_url(&self, model: &str) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("models")
                .push(&format!("{model}:generateContent"));
        }
        url
    }

    fn classify(&self, error: reqwest::Error) -> ProviderFault {
        if error.is_timeout() {
            ProviderFault::Timeout(self.timeout)
        } else {
            ProviderFault::from(error)
        }
    }
}

#[async_trait]
impl Provider for GoogleProvider {
    fn name(&self) -> &str {
        "google"
    }

    async fn invoke(&self, model: &str, content: &Content) -> Result<ProviderResponse, ProviderFault> {
        let wire_request = GoogleRequest::from(content);
        let url = self.generate_url(model);

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!(provider = self.name(), model, error = %e, "upstream request failed");
                self.classify(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(provider = self.name(), model, status = %status, "upstream returned error");
            return Err(ProviderFault::Upstream {
                status,
                message: upstream_error_message(&body),
            });
        }

        let wire_response: GoogleResponse = response
            .json()
            .await
            .map_err(|e| self.classify(e.without_url()))?;

        ProviderResponse::try_from(wire_response)
    }
}
