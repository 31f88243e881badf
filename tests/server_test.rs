//! Listener-level tests: bind the configured port for real and drive the
//! served application over HTTP, teacher-style with reqwest.

use trip_service::config::AppConfig;
use trip_service::services::{init_metrics, StorageConnector};
use trip_service::startup::{bind_listener, build_router, AppState};

fn config_with_port(port: u16) -> AppConfig {
    AppConfig {
        port,
        mongo_uri: "mongodb://localhost:27017/TravelMemory-Mern".to_string(),
    }
}

/// Bind the configured port, serve the app in the background, and return
/// the base URL.
async fn spawn_app(config: AppConfig) -> String {
    init_metrics();
    let listener = bind_listener(&config)
        .await
        .expect("failed to bind listener");
    let port = listener.local_addr().unwrap().port();

    let app = build_router(AppState {
        config,
        storage: StorageConnector::disconnected(),
    });
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn bound_listener_serves_hello_over_http() {
    // Port 0 asks the OS for a free port; the served address is whatever
    // was actually bound.
    let address = spawn_app(config_with_port(0)).await;

    let response = reqwest::get(format!("{}/hello", address))
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "Hello World!");
}

#[tokio::test]
async fn listener_binds_the_exact_configured_port() {
    // Grab a free port from the OS, release it, then ask the app to bind
    // that specific port.
    let probe_listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = probe_listener.local_addr().unwrap().port();
    drop(probe_listener);

    let listener = bind_listener(&config_with_port(port))
        .await
        .expect("failed to bind configured port");
    assert_eq!(listener.local_addr().unwrap().port(), port);
}

#[tokio::test]
async fn binding_an_occupied_port_fails() {
    let holder = tokio::net::TcpListener::bind("0.0.0.0:0").await.unwrap();
    let port = holder.local_addr().unwrap().port();

    let result = bind_listener(&config_with_port(port)).await;
    assert!(result.is_err());
}
