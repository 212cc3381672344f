//! Document store: resolves persisted attachments and manages stored files.

use tracing::{info, warn};

use super::codec;
use super::error::AttachmentError;
use super::types::{Document, DocumentContent, DocumentPayload, FilePatch, FileUpload};
use crate::storage::{StorageError, StorageService, sanitize_filename};

/// Front door for attachment reads and file lifecycle operations.
///
/// Inline payloads are decoded in place; stored files are read from and
/// written to the upload root owned by the wrapped [`StorageService`].
pub struct DocumentStore {
    storage: StorageService,
}

impl DocumentStore {
    /// Create a new document store over the given storage service.
    #[must_use]
    pub fn new(storage: StorageService) -> Self {
        Self { storage }
    }

    /// Resolve a persisted attachment into bytes, MIME type, and download
    /// name.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::Decode`] when an inline payload is not
    /// valid base64, and [`AttachmentError::NotFound`] when a stored file no
    /// longer exists under the upload root (recoverable, surfaces as 404).
    pub async fn open(&self, document: &Document) -> Result<DocumentContent, AttachmentError> {
        match &document.payload {
            DocumentPayload::Inline { data } => {
                let bytes = codec::decode_payload(data)?;
                Ok(DocumentContent {
                    bytes,
                    mime_type: codec::resolve_mime(data, &document.name),
                    download_name: document.name.clone(),
                })
            }
            DocumentPayload::Stored { filename } => {
                let bytes = self.storage.read(filename).await.map_err(|e| match e {
                    StorageError::NotFound { key } => AttachmentError::NotFound(key),
                    other => AttachmentError::Storage(other),
                })?;
                Ok(DocumentContent {
                    bytes,
                    mime_type: codec::mime_from_name(&document.name).to_string(),
                    download_name: document.name.clone(),
                })
            }
        }
    }

    /// Persist an uploaded file under its sanitized name and return that
    /// name, the value to store in the row.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn save_upload(&self, upload: FileUpload) -> Result<String, AttachmentError> {
        let stored = sanitize_filename(&upload.filename);
        self.storage.write(&stored, upload.bytes).await?;
        info!(filename = %stored, "stored uploaded file");
        Ok(stored)
    }

    /// Apply the client's tri-state file intent to the currently stored
    /// filename, returning the new value for the row.
    ///
    /// Keep leaves everything untouched; replace writes the new file and
    /// deletes the superseded one when its name differs; remove clears the
    /// reference and deletes the old file.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage write or delete fails.
    pub async fn apply_patch(
        &self,
        current: Option<&str>,
        patch: FilePatch,
    ) -> Result<Option<String>, AttachmentError> {
        match patch {
            FilePatch::Keep => Ok(current.map(ToString::to_string)),
            FilePatch::Replace(upload) => {
                let stored = self.save_upload(upload).await?;
                if let Some(old) = current
                    && old != stored
                {
                    self.discard(old).await?;
                }
                Ok(Some(stored))
            }
            FilePatch::Remove => {
                if let Some(old) = current {
                    self.discard(old).await?;
                }
                Ok(None)
            }
        }
    }

    /// Delete a stored file, e.g. when its owning row is deleted.
    ///
    /// A file that is already absent is logged and treated as a no-op so the
    /// row operation still succeeds; disk state and row state are eventually,
    /// not atomically, consistent.
    ///
    /// # Errors
    ///
    /// Returns an error only if an existing file fails to delete.
    pub async fn discard(&self, filename: &str) -> Result<(), AttachmentError> {
        if !self.storage.exists(filename).await {
            warn!(filename = %filename, "stored file already absent, nothing to delete");
            return Ok(());
        }
        self.storage.delete(filename).await?;
        info!(filename = %filename, "deleted stored file");
        Ok(())
    }

    /// The underlying storage service.
    #[must_use]
    pub fn storage(&self) -> &StorageService {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageConfig;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    fn temp_store() -> (tempfile::TempDir, DocumentStore) {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let storage = StorageService::from_config(StorageConfig::new(dir.path()))
            .expect("should create storage");
        (dir, DocumentStore::new(storage))
    }

    #[tokio::test]
    async fn test_open_inline_data_uri() {
        let (_dir, store) = temp_store();

        let encoded = STANDARD.encode(b"hello proposal");
        let document = Document::inline("proposal.pdf", format!("data:text/x-test;base64,{encoded}"));

        let content = store.open(&document).await.expect("should resolve");
        assert_eq!(content.bytes, b"hello proposal");
        assert_eq!(content.mime_type, "text/x-test");
        assert_eq!(content.download_name, "proposal.pdf");
    }

    #[tokio::test]
    async fn test_open_inline_bare_payload_uses_extension() {
        let (_dir, store) = temp_store();

        let document = Document::inline("report.docx", STANDARD.encode(b"word bytes"));

        let content = store.open(&document).await.expect("should resolve");
        assert_eq!(content.mime_type, "application/msword");
        assert_eq!(content.bytes, b"word bytes");
    }

    #[tokio::test]
    async fn test_open_inline_malformed_base64() {
        let (_dir, store) = temp_store();

        let document = Document::inline("broken.pdf", "data:application/pdf;base64,@@@@");

        let err = store.open(&document).await.unwrap_err();
        assert!(matches!(err, AttachmentError::Decode(_)));
    }

    #[tokio::test]
    async fn test_save_upload_sanitizes_traversal() {
        let (dir, store) = temp_store();

        let stored = store
            .save_upload(FileUpload {
                filename: "../../etc/passwd".to_string(),
                bytes: b"not a shadow file".to_vec(),
            })
            .await
            .expect("should store");

        assert_eq!(stored, "passwd");
        assert!(dir.path().join("passwd").exists());
        assert!(!dir.path().join("../../etc/passwd").exists());
    }

    #[tokio::test]
    async fn test_open_stored_roundtrip() {
        let (_dir, store) = temp_store();

        let stored = store
            .save_upload(FileUpload {
                filename: "activity.pdf".to_string(),
                bytes: b"%PDF activity".to_vec(),
            })
            .await
            .expect("should store");

        let content = store
            .open(&Document::stored(stored))
            .await
            .expect("should resolve");
        assert_eq!(content.bytes, b"%PDF activity");
        assert_eq!(content.mime_type, "application/pdf");
        assert_eq!(content.download_name, "activity.pdf");
    }

    #[tokio::test]
    async fn test_open_stored_missing_is_not_found() {
        let (_dir, store) = temp_store();

        let err = store
            .open(&Document::stored("vanished.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AttachmentError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_patch_keep_leaves_file_untouched() {
        let (_dir, store) = temp_store();

        let stored = store
            .save_upload(FileUpload {
                filename: "minutes.doc".to_string(),
                bytes: b"original".to_vec(),
            })
            .await
            .expect("should store");

        let next = store
            .apply_patch(Some(&stored), FilePatch::Keep)
            .await
            .expect("keep should succeed");
        assert_eq!(next.as_deref(), Some("minutes.doc"));

        let content = store
            .open(&Document::stored("minutes.doc"))
            .await
            .expect("prior bytes must remain retrievable");
        assert_eq!(content.bytes, b"original");
    }

    #[tokio::test]
    async fn test_patch_replace_deletes_superseded_file() {
        let (_dir, store) = temp_store();

        let old = store
            .save_upload(FileUpload {
                filename: "old.pdf".to_string(),
                bytes: b"old".to_vec(),
            })
            .await
            .expect("should store");

        let next = store
            .apply_patch(
                Some(&old),
                FilePatch::Replace(FileUpload {
                    filename: "new.pdf".to_string(),
                    bytes: b"new".to_vec(),
                }),
            )
            .await
            .expect("replace should succeed");
        assert_eq!(next.as_deref(), Some("new.pdf"));

        assert!(!store.storage().exists("old.pdf").await);
        assert!(store.storage().exists("new.pdf").await);
    }

    #[tokio::test]
    async fn test_patch_replace_same_name_keeps_new_bytes() {
        let (_dir, store) = temp_store();

        let old = store
            .save_upload(FileUpload {
                filename: "same.pdf".to_string(),
                bytes: b"v1".to_vec(),
            })
            .await
            .expect("should store");

        let next = store
            .apply_patch(
                Some(&old),
                FilePatch::Replace(FileUpload {
                    filename: "same.pdf".to_string(),
                    bytes: b"v2".to_vec(),
                }),
            )
            .await
            .expect("replace should succeed");
        assert_eq!(next.as_deref(), Some("same.pdf"));

        let content = store
            .open(&Document::stored("same.pdf"))
            .await
            .expect("should resolve");
        assert_eq!(content.bytes, b"v2");
    }

    #[tokio::test]
    async fn test_patch_remove_clears_reference_and_file() {
        let (_dir, store) = temp_store();

        let stored = store
            .save_upload(FileUpload {
                filename: "gone.pdf".to_string(),
                bytes: b"bytes".to_vec(),
            })
            .await
            .expect("should store");

        let next = store
            .apply_patch(Some(&stored), FilePatch::Remove)
            .await
            .expect("remove should succeed");
        assert!(next.is_none());

        let err = store.open(&Document::stored("gone.pdf")).await.unwrap_err();
        assert!(matches!(err, AttachmentError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_discard_missing_file_is_noop() {
        let (_dir, store) = temp_store();

        store
            .discard("never-existed.pdf")
            .await
            .expect("missing file must not fail the row operation");
    }

    #[tokio::test]
    async fn test_stored_roundtrip_idempotence() {
        let (_dir, store) = temp_store();

        let first = store
            .save_upload(FileUpload {
                filename: "idem.pdf".to_string(),
                bytes: b"stable bytes".to_vec(),
            })
            .await
            .expect("should store");

        let resolved = store
            .open(&Document::stored(first.clone()))
            .await
            .expect("should resolve");

        // Re-storing the resolved bytes under the same name yields
        // byte-identical content.
        let second = store
            .save_upload(FileUpload {
                filename: first,
                bytes: resolved.bytes.clone(),
            })
            .await
            .expect("should re-store");

        let again = store
            .open(&Document::stored(second))
            .await
            .expect("should resolve again");
        assert_eq!(again.bytes, resolved.bytes);
    }
}
