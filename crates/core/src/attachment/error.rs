//! Attachment error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Attachment operation errors.
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// Required attachment fields missing or inconsistent on a write.
    #[error("validation error: {0}")]
    Validation(String),

    /// Stored payload is not valid base64. The source data is opaque until
    /// decode, so this must reach the client, not be swallowed.
    #[error("stored payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Referenced file no longer exists under the upload root.
    #[error("file not found: {0}")]
    NotFound(String),

    /// Underlying storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AttachmentError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}
