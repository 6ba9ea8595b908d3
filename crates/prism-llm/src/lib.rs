//! Text-generation gateway over the Google Gemini API
//!
//! Callers hand in prompts, conversations or documents; the [`normalize`]
//! module turns them into provider-ready requests and the [`Gateway`]
//! dispatches them, folding every outcome into a [`ResultEnvelope`].

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod convert;
pub mod error;
pub mod gateway;
#[cfg(feature = "http")]
pub mod handler;
pub mod normalize;
pub mod protocol;
pub mod provider;
pub mod types;

pub use error::{ConfigurationError, ProviderFault};
pub use gateway::{Gateway, HEALTH_CHECK_PROMPT};
#[cfg(feature = "http")]
pub use handler::gemini_router;
pub use normalize::{AnalysisType, Normalizer};
pub use provider::Provider;
pub use types::{GenerationRequest, HealthStatus, Message, ModelCatalog, ResultEnvelope};
