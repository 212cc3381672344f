//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod accountability_reports;
pub mod auth;
pub mod budget_plans;
pub mod health;
pub mod inventory;
pub mod letters;
pub mod proposals;
pub mod realization_reports;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(proposals::routes())
        .merge(accountability_reports::routes())
        .merge(budget_plans::routes())
        .merge(realization_reports::routes())
        .merge(letters::routes())
        .merge(inventory::routes())
}

/// Builds an attachment download response: resolved MIME type plus a
/// `Content-Disposition` header carrying the suggested filename.
pub(crate) fn download_response(
    content: arsiva_core::attachment::DocumentContent,
) -> impl axum::response::IntoResponse {
    (
        [
            (axum::http::header::CONTENT_TYPE, content.mime_type),
            (
                axum::http::header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", content.download_name),
            ),
        ],
        content.bytes,
    )
}
