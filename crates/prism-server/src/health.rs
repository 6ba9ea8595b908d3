use axum::response::IntoResponse;
use http::StatusCode;

/// Liveness handler; answers without contacting the provider
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
