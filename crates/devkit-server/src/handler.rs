use axum::extract::State;
use axum::response::Json;
use serde_json::json;

use devkit_protocol::{HealthResponse, TextDiffRequest, TextDiffResponse};

use crate::error::{ServerError, ServerResult};
use crate::router::AppState;

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "devkit-server",
        "version": env!("CARGO_PKG_VERSION"),
        "protocol_version": devkit_protocol::PROTOCOL_VERSION,
        "operations": ["TextDiff"],
    }))
}

/// Compare two texts.
///
/// The engine runs on the blocking pool. Engine failures are part of the
/// response contract and come back as `200` with a non-empty `error`.
pub async fn text_diff_handler(
    State(state): State<AppState>,
    Json(request): Json<TextDiffRequest>,
) -> ServerResult<Json<TextDiffResponse>> {
    let engine = state.engine.clone();
    let result = tokio::task::spawn_blocking(move || {
        engine.compare(&request.original, &request.modified)
    })
    .await
    .map_err(|e| ServerError::Internal(e.to_string()))?;

    if let Err(e) = &result {
        tracing::warn!(error = %e, "text diff rejected");
    }
    Ok(Json(result.into()))
}
