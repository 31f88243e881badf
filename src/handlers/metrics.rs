use axum::{http::header, response::IntoResponse};

use crate::services::metrics::{get_metrics, METRICS_CONTENT_TYPE};

pub async fn metrics() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)], get_metrics())
}
