//! Local-filesystem object store for uploaded files.
//!
//! All file-backed attachments live flat under a single upload root, one file
//! per attachment, named after the sanitized client-supplied filename. Name
//! collisions are last-writer-wins (not deduplicated), and a reader racing a
//! delete may observe a transient not-found; there is no locking around the
//! shared directory. Both are accepted for this internal low-traffic tool.

mod config;
mod error;
mod service;

pub use config::StorageConfig;
pub use error::StorageError;
pub use service::{StorageService, sanitize_filename};
