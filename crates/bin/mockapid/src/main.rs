//! # mockapid — mockapi daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialise `tracing` logging
//! - Load the JSON document and hand it to the in-memory store
//! - Start the snapshot scheduler on its own task
//! - Build the axum router, injecting the collection service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use mockapi_adapter_http_axum::state::AppState;
use mockapi_adapter_storage_json::JsonSnapshotWriter;
use mockapi_app::ports::CollectionStore;
use mockapi_app::services::collection_service::CollectionService;
use mockapi_app::snapshot::SnapshotScheduler;
use mockapi_app::store::InMemoryStore;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Storage
    let storage = mockapi_adapter_storage_json::Config {
        path: config.storage.path.clone(),
    };
    let document = storage.load().await?;
    let store = Arc::new(InMemoryStore::new(document));
    let writer = storage.writer();

    // Snapshots
    let snapshots = SnapshotScheduler::new(
        Arc::clone(&store),
        writer.clone(),
        config.snapshot_interval(),
    )
    .skip_unchanged(config.snapshot.skip_unchanged)
    .spawn();

    // HTTP
    let state = AppState::new(CollectionService::new(Arc::clone(&store)));
    let app = mockapi_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "mockapid listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    snapshots.abort();
    if config.snapshot.on_shutdown {
        final_snapshot(&store, &writer).await;
    }
    tracing::info!("mockapid stopped");

    Ok(())
}

async fn final_snapshot(store: &InMemoryStore, writer: &JsonSnapshotWriter) {
    let snapshot = store.snapshot().await;
    match writer.write_document(&snapshot.document).await {
        Ok(()) => tracing::info!(revision = snapshot.revision, "final snapshot written"),
        Err(err) => tracing::error!(error = ?err, "final snapshot failed"),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
