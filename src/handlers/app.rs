use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::ConnectionStatus;
use crate::startup::AppState;

pub async fn hello() -> &'static str {
    "Hello World!"
}

/// Liveness probe. Reports unhealthy while the database is unreachable but
/// never takes the process down with it.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    if let Some(store) = state.storage.store() {
        return match store.health_check().await {
            Ok(()) => (
                StatusCode::OK,
                Json(json!({
                    "status": "ok",
                    "service": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                })),
            ),
            Err(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "service": env!("CARGO_PKG_NAME"),
                    "error": e.to_string()
                })),
            ),
        };
    }

    let error = match state.storage.status() {
        ConnectionStatus::Connecting => "database connection in progress".to_string(),
        ConnectionStatus::Error(e) => e,
        ConnectionStatus::Connected => "database handle unavailable".to_string(),
    };

    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "unhealthy",
            "service": env!("CARGO_PKG_NAME"),
            "error": error
        })),
    )
}
