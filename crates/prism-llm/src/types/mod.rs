//! Provider-agnostic request, response and envelope types
//!
//! Everything the normalizer produces and the gateway returns lives here;
//! the Gemini wire format is kept separately in [`crate::protocol`].

pub mod catalog;
pub mod envelope;
pub mod message;
pub mod request;

pub use catalog::ModelCatalog;
pub use envelope::{HealthState, HealthStatus, ProviderResponse, ResultEnvelope, Usage};
pub use message::{Message, Role};
pub use request::{BlockRole, Content, ContentBlock, GenerationRequest};
