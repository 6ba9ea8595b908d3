//! Axum route handlers exposing the gateway operations over HTTP
//!
//! Every generation route answers `200 OK` with a [`ResultEnvelope`]; a
//! failed provider call is reported through `success: false`, not through
//! the status code.

use axum::extract::State;
use axum::{Json, Router, routing};
use serde::Deserialize;

use crate::gateway::Gateway;
use crate::types::{HealthStatus, Message, ModelCatalog, ResultEnvelope};

/// Build the Gemini router, mounted under `prefix` (e.g. `/gemini`)
///
/// A root prefix (`/` or empty) serves the routes at the top level.
pub fn gemini_router(gateway: Gateway, prefix: &str) -> Router {
    let routes = Router::new()
        .route("/generate", routing::post(generate))
        .route("/chat", routing::post(chat))
        .route("/context", routing::post(contextual_generate))
        .route("/analyze", routing::post(analyze_document))
        .route("/generate-code", routing::post(generate_code))
        .route("/review-code", routing::post(review_code))
        .route("/models", routing::get(list_models))
        .route("/health", routing::get(health))
        .with_state(gateway);

    match prefix.trim_end_matches('/') {
        "" => routes,
        prefix => Router::new().nest(prefix, routes),
    }
}

// -- Request bodies --

#[derive(Debug, Deserialize)]
struct GenerateBody {
    prompt: String,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatBody {
    messages: Vec<Message>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContextBody {
    prompt: String,
    context: String,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeBody {
    content: String,
    #[serde(default = "default_analysis_type")]
    analysis_type: String,
}

#[derive(Debug, Deserialize)]
struct GenerateCodeBody {
    description: String,
    #[serde(default = "default_language")]
    language: String,
}

#[derive(Debug, Deserialize)]
struct ReviewCodeBody {
    code: String,
    #[serde(default = "default_language")]
    language: String,
}

fn default_analysis_type() -> String {
    "summary".to_owned()
}

fn default_language() -> String {
    "python".to_owned()
}

// -- Handlers --

/// Handle `POST {prefix}/generate`
async fn generate(State(gateway): State<Gateway>, Json(body): Json<GenerateBody>) -> Json<ResultEnvelope> {
    Json(gateway.generate(&body.prompt, body.model.as_deref()).await)
}

/// Handle `POST {prefix}/chat`
async fn chat(State(gateway): State<Gateway>, Json(body): Json<ChatBody>) -> Json<ResultEnvelope> {
    Json(gateway.chat(&body.messages, body.model.as_deref()).await)
}

/// Handle `POST {prefix}/context`
async fn contextual_generate(State(gateway): State<Gateway>, Json(body): Json<ContextBody>) -> Json<ResultEnvelope> {
    Json(
        gateway
            .contextual_generate(&body.prompt, &body.context, body.model.as_deref())
            .await,
    )
}

/// Handle `POST {prefix}/analyze`
async fn analyze_document(State(gateway): State<Gateway>, Json(body): Json<AnalyzeBody>) -> Json<ResultEnvelope> {
    Json(gateway.analyze_document(&body.content, &body.analysis_type).await)
}

/// Handle `POST {prefix}/generate-code`
async fn generate_code(State(gateway): State<Gateway>, Json(body): Json<GenerateCodeBody>) -> Json<ResultEnvelope> {
    Json(gateway.generate_code(&body.description, &body.language).await)
}

/// Handle `POST {prefix}/review-code`
async fn review_code(State(gateway): State<Gateway>, Json(body): Json<ReviewCodeBody>) -> Json<ResultEnvelope> {
    Json(gateway.review_code(&body.code, &body.language).await)
}

/// Handle `GET {prefix}/models`
async fn list_models(State(gateway): State<Gateway>) -> Json<ModelCatalog> {
    Json(gateway.list_models())
}

/// Handle `GET {prefix}/health`
async fn health(State(gateway): State<Gateway>) -> Json<HealthStatus> {
    Json(gateway.health_check().await)
}
