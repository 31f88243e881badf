//! MongoDB storage connector.
//!
//! The connection is established by a background task so server startup
//! never waits on the database; its lifecycle is published over a watch
//! channel instead of inline callbacks.

use crate::error::AppError;
use crate::models::Trip;
use mongodb::event::sdam::{SdamEventHandler, ServerHeartbeatFailedEvent};
use mongodb::{
    bson::doc, options::ClientOptions, Client as MongoClient, Collection, Database,
};
use std::sync::Arc;
use tokio::sync::watch;

/// Database name used when the connection string does not carry one.
pub const DEFAULT_DATABASE: &str = "TravelMemory-Mern";

/// Live handle to the trip database.
#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    /// Build a client from the URI and confirm reachability with a ping.
    pub async fn connect(uri: &str) -> Result<Self, AppError> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.sdam_event_handler = Some(Arc::new(HeartbeatLogger));

        let database = options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = MongoClient::with_options(options)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;

        let db = client.database(&database);
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    pub fn trips(&self) -> Collection<Trip> {
        self.db.collection("trips")
    }
}

/// Logs connection drops observed after startup.
struct HeartbeatLogger;

impl SdamEventHandler for HeartbeatLogger {
    fn handle_server_heartbeat_failed_event(&self, event: ServerHeartbeatFailedEvent) {
        tracing::warn!(error = %event.failure, "MongoDB server heartbeat failed");
    }
}

/// Snapshot of the connection lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Error(String),
}

#[derive(Clone)]
enum ConnectionState {
    Connecting,
    Connected(MongoStore),
    Error(String),
}

/// Owns the single database connection attempt for the process.
///
/// Constructed once in the composition root and injected into the router
/// state; handlers resolve the live store at the point of use.
#[derive(Clone)]
pub struct StorageConnector {
    state: watch::Receiver<ConnectionState>,
}

impl StorageConnector {
    /// Start connecting in the background and return immediately.
    ///
    /// A failed attempt is logged and recorded; it never terminates the
    /// process. No automatic retry.
    pub fn connect(uri: &str) -> Self {
        let (tx, rx) = watch::channel(ConnectionState::Connecting);
        let uri = uri.to_string();

        tokio::spawn(async move {
            match MongoStore::connect(&uri).await {
                Ok(store) => {
                    tracing::info!("MongoDB connected");
                    let _ = tx.send(ConnectionState::Connected(store));
                }
                Err(e) => {
                    tracing::error!(error = %e, "MongoDB connection error");
                    let _ = tx.send(ConnectionState::Error(e.to_string()));
                }
            }
        });

        Self { state: rx }
    }

    /// A connector whose connection attempt has already failed. Lets tests
    /// and local tooling exercise the HTTP surface without a database.
    pub fn disconnected() -> Self {
        let (tx, rx) = watch::channel(ConnectionState::Error(
            "no database connection".to_string(),
        ));
        drop(tx);
        Self { state: rx }
    }

    pub fn status(&self) -> ConnectionStatus {
        Self::to_status(&self.state.borrow())
    }

    /// The live store, once connected.
    pub fn store(&self) -> Option<MongoStore> {
        match &*self.state.borrow() {
            ConnectionState::Connected(store) => Some(store.clone()),
            _ => None,
        }
    }

    /// Wait for the connection attempt to resolve either way.
    pub async fn wait_until_settled(&self) -> ConnectionStatus {
        let mut rx = self.state.clone();
        loop {
            let status = Self::to_status(&rx.borrow());
            if status != ConnectionStatus::Connecting {
                return status;
            }
            if rx.changed().await.is_err() {
                return Self::to_status(&rx.borrow());
            }
        }
    }

    fn to_status(state: &ConnectionState) -> ConnectionStatus {
        match state {
            ConnectionState::Connecting => ConnectionStatus::Connecting,
            ConnectionState::Connected(_) => ConnectionStatus::Connected,
            ConnectionState::Error(e) => ConnectionStatus::Error(e.clone()),
        }
    }
}
