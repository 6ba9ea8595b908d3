//! Mock Gemini backend for integration tests
//!
//! Serves `POST /v1beta/models/{model}:generateContent`, records every call,
//! and answers according to the configured [`Behavior`].

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// How the mock answers generation calls
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Answer with this text and fixed usage numbers
    Reply(String),
    /// Answer with a Google error body and status
    Reject { status: StatusCode, message: String },
    /// Answer 200 with no candidates and a prompt block reason
    Block(String),
    /// Sleep before replying with `ok`
    Delay(Duration),
}

/// A generation call as seen by the backend
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub api_key: Option<String>,
    pub body: Value,
}

struct MockState {
    behavior: Behavior,
    calls: Mutex<Vec<RecordedCall>>,
}

pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockGemini {
    /// Start a mock that replies `Hello from Gemini`
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(Behavior::Reply("Hello from Gemini".to_owned())).await
    }

    pub async fn start_with(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            behavior,
            calls: Mutex::new(Vec::new()),
        });

        // The `{model}:generateContent` segment does not fit a plain path param
        let app = Router::new()
            .route("/v1beta/models/{*method}", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for `[gemini].base_url`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    /// The single recorded call; panics if there is not exactly one
    pub fn only_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one upstream call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate(
    State(state): State<Arc<MockState>>,
    Path(method): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    let Some(model) = method.strip_suffix(":generateContent") else {
        return (StatusCode::NOT_FOUND, "unknown method").into_response();
    };

    state.calls.lock().unwrap().push(RecordedCall {
        model: model.to_owned(),
        api_key: query.get("key").cloned(),
        body,
    });

    match &state.behavior {
        Behavior::Reply(text) => Json(reply(text)).into_response(),
        Behavior::Reject { status, message } => (
            *status,
            Json(json!({
                "error": {"code": status.as_u16(), "message": message, "status": "INVALID_ARGUMENT"}
            })),
        )
            .into_response(),
        Behavior::Block(reason) => Json(json!({"promptFeedback": {"blockReason": reason}})).into_response(),
        Behavior::Delay(delay) => {
            tokio::time::sleep(*delay).await;
            Json(reply("ok")).into_response()
        }
    }
}

fn reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 5, "candidatesTokenCount": 3, "totalTokenCount": 8}
    })
}
