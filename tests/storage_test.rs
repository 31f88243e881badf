//! Storage connector lifecycle tests. None of these require a reachable
//! MongoDB instance.

use std::time::Duration;
use trip_service::services::{ConnectionStatus, StorageConnector};

#[tokio::test]
async fn unparseable_uri_settles_to_error_without_crashing() {
    let connector = StorageConnector::connect("mongodb://");

    let status = tokio::time::timeout(Duration::from_secs(5), connector.wait_until_settled())
        .await
        .expect("connector never settled");

    assert!(matches!(status, ConnectionStatus::Error(_)));
    assert!(connector.store().is_none());
}

#[tokio::test]
async fn connect_returns_immediately_and_reports_connecting() {
    // Port 1 never hosts a mongod; server selection keeps the attempt
    // pending well past this assertion.
    let connector = StorageConnector::connect("mongodb://127.0.0.1:1/TravelMemory-Mern");

    assert_ne!(connector.status(), ConnectionStatus::Connected);
    assert!(connector.store().is_none());
}

#[tokio::test]
async fn disconnected_connector_exposes_error_status() {
    let connector = StorageConnector::disconnected();

    assert!(matches!(connector.status(), ConnectionStatus::Error(_)));
    assert_eq!(connector.wait_until_settled().await, connector.status());
    assert!(connector.store().is_none());
}
