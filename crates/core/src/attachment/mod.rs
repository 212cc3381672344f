//! Document attachment codec.
//!
//! Converts between the three representations of a user-supplied document:
//!
//! - a data-URI-style base64 string with an embedded MIME-type hint,
//! - a bare base64 payload with the filename stored alongside it,
//! - a file persisted under the upload root via a sanitized name,
//!
//! and reconstructs a download (bytes + MIME type + filename) from whichever
//! representation was persisted. Exactly one representation is active per
//! stored attachment; the representation chosen at write time fixes the
//! read-time path.

mod codec;
mod error;
mod service;
mod types;

pub use codec::{
    FALLBACK_MIME, decode_payload, mime_from_name, resolve_mime, split_data_uri, validate_inline,
};
pub use error::AttachmentError;
pub use service::DocumentStore;
pub use types::{Document, DocumentContent, DocumentPayload, FilePatch, FileUpload, InlineDocument};
