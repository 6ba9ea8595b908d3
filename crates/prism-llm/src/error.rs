use std::time::Duration;

use http::StatusCode;
use thiserror::Error;

/// Errors that prevent a [`crate::Gateway`] from being constructed
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No API key, or an empty one
    #[error("gemini api key is not configured")]
    MissingCredential,

    /// A duration setting could not be parsed
    #[error("{0}")]
    InvalidSetting(String),

    /// The HTTP client could not be built
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Failure surfaced by a provider call
///
/// Never escapes [`crate::Gateway::dispatch`]; it is folded into a failed
/// [`crate::types::ResultEnvelope`] with the `Display` text as the error.
#[derive(Debug, Error)]
pub enum ProviderFault {
    /// The request never produced an HTTP response
    #[error("transport error: {0}")]
    Transport(String),

    /// The request did not complete in time
    #[error("request timed out after {}s", .0.as_secs_f32())]
    Timeout(Duration),

    /// Provider answered with a non-success status
    #[error("provider returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    /// Response body could not be understood
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// Response was well-formed but carried no generated text
    #[error("provider returned no text: {0}")]
    EmptyResponse(String),
}

impl From<reqwest::Error> for ProviderFault {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::InvalidResponse(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}
