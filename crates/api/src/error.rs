//! Request-boundary error conversion.
//!
//! Every failure is converted into [`ApiError`] and rendered as the JSON
//! error envelope `{"error": …}` with the status carried by the underlying
//! [`AppError`]. Nothing is retried and nothing crashes the process; each
//! request fails independently.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use serde_json::json;
use tracing::{error, warn};

use arsiva_core::attachment::AttachmentError;
use arsiva_core::auth::PasswordError;
use arsiva_shared::AppError;

/// Error wrapper returned by every handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self(AppError::Database(err.to_string()))
    }
}

impl From<AttachmentError> for ApiError {
    fn from(err: AttachmentError) -> Self {
        let app = match err {
            AttachmentError::Validation(msg) => AppError::Validation(msg),
            AttachmentError::Decode(e) => AppError::Decode(e.to_string()),
            AttachmentError::NotFound(name) => AppError::NotFound(format!("file {name}")),
            AttachmentError::Storage(e) => AppError::Internal(e.to_string()),
        };
        Self(app)
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        Self(AppError::Internal(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_server_error() {
            error!(error = %self.0, "request failed");
        } else {
            warn!(error = %self.0, "request rejected");
        }

        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Builds the success envelope `{"message": …}`.
pub fn message(text: &str) -> Json<serde_json::Value> {
    Json(json!({ "message": text }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_error_mapping() {
        let err = ApiError::from(AttachmentError::not_found("scan.pdf"));
        assert_eq!(err.0.status_code(), 404);

        let err = ApiError::from(AttachmentError::validation("missing payload"));
        assert_eq!(err.0.status_code(), 400);
    }

    #[test]
    fn test_db_error_is_500() {
        let err = ApiError::from(DbErr::Custom("boom".into()));
        assert_eq!(err.0.status_code(), 500);
    }
}
