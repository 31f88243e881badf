//! Metrics collection and Prometheus export.
//!
//! Installs the exporter and backs the /metrics endpoint handler.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Once, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

/// Content type of the rendered exposition.
pub const METRICS_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
static INIT: Once = Once::new();

/// Install the Prometheus recorder.
///
/// Must run at startup before any metrics are recorded. Repeated calls are
/// no-ops, so integration-test binaries can share one recorder.
pub fn init_metrics() {
    INIT.call_once(|| {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .expect("failed to install Prometheus recorder");

        if METRICS_HANDLE.set(handle).is_err() {
            panic!("failed to set metrics handle: already initialized");
        }

        // Recorded up front so the exposition is never empty.
        let started = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        metrics::gauge!("process_start_time_seconds").set(started);
    });
}

/// Render the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}
