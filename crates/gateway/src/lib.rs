//! HTTP API gateway for PromptDeck.
//!
//! Serves the template catalog, saved-prompt CRUD and a stateless preview
//! endpoint that runs the assembler over a posted prompt.
//!
//! Built on Axum.

pub mod api;

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, header};
use axum::{Router, response::Json, routing::get};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use promptdeck_config::AppConfig;
use promptdeck_core::store::PromptStore;

pub use api::{ApiState, SharedApiState};

/// Build the full router: `/health` plus the JSON API under `/api`.
///
/// Layers applied:
/// - CORS allowing any origin for the JSON methods in use
/// - Request body size limit (`gateway.max_body_bytes`)
/// - HTTP trace logging
pub fn build_router(store: Arc<dyn PromptStore>, max_body_bytes: usize) -> Router {
    let api_state = Arc::new(ApiState { store });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::api_router(api_state))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.gateway.bind_addr();
    let store = promptdeck_store::build_from_config(&config.store)?;

    let app = build_router(store, config.gateway.max_body_bytes);

    info!(addr = %addr, backend = %config.store.backend, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use promptdeck_store::InMemoryStore;
    use tower::ServiceExt;

    fn test_router(max_body_bytes: usize) -> Router {
        build_router(Arc::new(InMemoryStore::new()), max_body_bytes)
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = test_router(1024 * 1024);

        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn api_is_nested() {
        let app = test_router(1024 * 1024);

        let req = Request::builder()
            .uri("/api/templates/tpl-3")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn oversized_body_rejected() {
        let app = test_router(64);

        let body = serde_json::json!({ "sections": { "task": "x".repeat(256) } });
        let req = Request::builder()
            .method("POST")
            .uri("/api/preview")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
