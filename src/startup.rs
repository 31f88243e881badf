//! Router assembly and shared application state.

use axum::{middleware::from_fn, routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers::app::{health_check, hello};
use crate::handlers::metrics::metrics;
use crate::handlers::trips;
use crate::middleware::metrics::metrics_middleware;
use crate::services::StorageConnector;

/// Shared application state, built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: StorageConnector,
}

/// Bind the configured listen port. Bind failure is fatal and propagates
/// to the caller.
pub async fn bind_listener(config: &AppConfig) -> Result<TcpListener, AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
        AppError::from(e)
    })
}

pub fn build_router(state: AppState) -> Router {
    // Mirrors the permissive cross-origin policy of the original deployment.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/hello", get(hello))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .nest("/trip", trips::router())
        .layer(cors)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
