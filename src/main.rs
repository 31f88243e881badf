use dotenvy::dotenv;
use tracing::info;
use trip_service::config::AppConfig;
use trip_service::observability::init_tracing;
use trip_service::services::{init_metrics, StorageConnector};
use trip_service::startup::{bind_listener, build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing("info");

    // Must run before any metrics are recorded.
    init_metrics();

    let config = AppConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    // Connects in the background; server startup does not wait for it and a
    // failed attempt leaves the HTTP surface up.
    let storage = StorageConnector::connect(&config.mongo_uri);

    let app = build_router(AppState {
        config: config.clone(),
        storage,
    });

    let listener = bind_listener(&config).await?;

    info!("Server started at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
