//! Storage service implementation using Apache OpenDAL.

use std::path::Path;

use opendal::{ErrorKind, Operator, services};

use super::config::StorageConfig;
use super::error::StorageError;

/// Storage service for file-backed attachments.
///
/// A thin wrapper around an OpenDAL filesystem operator rooted at the upload
/// directory. All keys are sanitized filenames; callers must not pass raw
/// client input (see [`sanitize_filename`]).
pub struct StorageService {
    operator: Operator,
    config: StorageConfig,
}

impl StorageService {
    /// Create a new storage service from configuration.
    ///
    /// Creates the upload root directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload root cannot be created or the operator
    /// cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&config.upload_root)
            .map_err(|e| StorageError::configuration(e.to_string()))?;

        // Resolve a relative upload root against the working directory once,
        // at startup.
        let root = std::fs::canonicalize(&config.upload_root)
            .map_err(|e| StorageError::configuration(e.to_string()))?;
        let root = root
            .to_str()
            .ok_or_else(|| StorageError::configuration("invalid upload root path"))?;
        let builder = services::Fs::default().root(root);

        let operator = Operator::new(builder)
            .map_err(|e| StorageError::configuration(e.to_string()))?
            .finish();

        Ok(Self { operator, config })
    }

    /// Write file bytes under the upload root.
    ///
    /// An existing file with the same name is overwritten (last writer wins).
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn write(&self, name: &str, bytes: Vec<u8>) -> Result<(), StorageError> {
        self.operator
            .write(name, bytes)
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }

    /// Read file bytes from the upload root.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the file does not exist, e.g.
    /// because it was deleted out of band.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let buffer = self.operator.read(name).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StorageError::not_found(name)
            } else {
                StorageError::from(e)
            }
        })?;
        Ok(buffer.to_vec())
    }

    /// Delete a file from the upload root.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, name: &str) -> Result<(), StorageError> {
        self.operator.delete(name).await.map_err(StorageError::from)
    }

    /// Check if a file exists under the upload root.
    pub async fn exists(&self, name: &str) -> bool {
        match self.operator.stat(name).await {
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(_) => false,
        }
    }

    /// The upload root directory.
    #[must_use]
    pub fn upload_root(&self) -> &Path {
        self.config.upload_root()
    }
}

/// Sanitize a client-supplied filename for use as a path segment.
///
/// Directory components are stripped (only the final component survives) and
/// anything outside ASCII alphanumerics, dots, hyphens, and underscores is
/// replaced with an underscore, so the result always resolves inside the
/// upload root.
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    let last = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    // A bare "." or ".." must not survive as a path segment.
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "_".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_service() -> (tempfile::TempDir, StorageService) {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let service = StorageService::from_config(StorageConfig::new(dir.path()))
            .expect("should create service");
        (dir, service)
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("report.pdf"), "report.pdf");
        assert_eq!(sanitize_filename("my file (1).pdf"), "my_file__1_.pdf");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("..\\..\\boot.ini"), "boot.ini");
        assert_eq!(sanitize_filename(".."), "_");
        assert_eq!(sanitize_filename(""), "_");
    }

    #[tokio::test]
    async fn test_write_read_roundtrip() {
        let (_dir, service) = temp_service();

        service
            .write("report.pdf", b"%PDF-1.4 test".to_vec())
            .await
            .expect("should write");

        let bytes = service.read("report.pdf").await.expect("should read");
        assert_eq!(bytes, b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let (_dir, service) = temp_service();

        let err = service.read("missing.pdf").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_then_exists() {
        let (_dir, service) = temp_service();

        service
            .write("note.doc", b"bytes".to_vec())
            .await
            .expect("should write");
        assert!(service.exists("note.doc").await);

        service.delete("note.doc").await.expect("should delete");
        assert!(!service.exists("note.doc").await);
    }

    #[tokio::test]
    async fn test_last_writer_wins() {
        let (_dir, service) = temp_service();

        service
            .write("receipt.pdf", b"first".to_vec())
            .await
            .expect("should write");
        service
            .write("receipt.pdf", b"second".to_vec())
            .await
            .expect("should overwrite");

        let bytes = service.read("receipt.pdf").await.expect("should read");
        assert_eq!(bytes, b"second");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    // For any input, the sanitized filename contains only safe characters and
    // never a directory separator.
    proptest! {
        #[test]
        fn prop_sanitized_filename_safe_chars(filename in ".*") {
            let sanitized = sanitize_filename(&filename);

            prop_assert!(!sanitized.is_empty());
            for c in sanitized.chars() {
                let is_safe = c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_';
                prop_assert!(is_safe, "Unexpected character in sanitized filename: {}", c);
            }
            prop_assert!(!sanitized.contains('/'));
            prop_assert!(!sanitized.contains('\\'));
            prop_assert!(sanitized.chars().any(|c| c != '.'));
        }
    }
}
