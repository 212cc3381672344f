//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for every resource table
//! - The JSON message/error envelope
//! - Attachment download responses

pub mod error;
pub mod routes;
pub mod wire;

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use arsiva_core::attachment::DocumentStore;
use arsiva_shared::config::AdminConfig;

/// Application state shared across handlers.
///
/// Each request runs to completion against the pooled connection and the
/// shared upload directory; there is no other cross-request mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Attachment codec and file store.
    pub documents: Arc<DocumentStore>,
    /// Built-in admin credentials.
    pub admin: Arc<AdminConfig>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
