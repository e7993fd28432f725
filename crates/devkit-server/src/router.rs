use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use devkit_diff::DiffEngine;
use devkit_protocol::endpoints;

use crate::config::ServerConfig;
use crate::handler;

/// Shared handler state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub engine: DiffEngine,
}

/// Build the axum router with all Devkit endpoints.
pub fn build_router(config: &ServerConfig) -> Router {
    let state = AppState { engine: DiffEngine::new(config.engine.clone()) };
    let mut router = Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .route(endpoints::TEXT_DIFF, post(handler::text_diff_handler))
        .layer(DefaultBodyLimit::max(config.max_body_bytes));
    if let Some(cors) = cors_layer(&config.cors_origins) {
        router = router.layer(cors);
    }
    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// CORS for the configured origins only; `None` when there are none.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();
    if allowed.is_empty() {
        return None;
    }
    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
