//! Provider trait and the Gemini implementation

pub mod google;

use async_trait::async_trait;

use crate::error::ProviderFault;
use crate::types::{Content, ProviderResponse};

pub use google::GoogleProvider;

/// A text-generation backend
///
/// Implementations report every failure through the returned `Result`;
/// the gateway turns it into an envelope.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Generate text for `content` with `model`
    async fn invoke(&self, model: &str, content: &Content) -> Result<ProviderResponse, ProviderFault>;
}
