//! Arsiva API Server
//!
//! Main entry point for the Arsiva backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arsiva_api::{AppState, create_router};
use arsiva_core::attachment::DocumentStore;
use arsiva_core::storage::{StorageConfig, StorageService};
use arsiva_db::connect;
use arsiva_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arsiva=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // Initialize upload storage (creates the upload root if needed)
    let storage = StorageService::from_config(StorageConfig::new(config.storage.upload_root.clone()))?;
    info!(upload_root = %config.storage.upload_root, "Upload storage ready");

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        documents: Arc::new(DocumentStore::new(storage)),
        admin: Arc::new(config.admin.clone()),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
