//! Storage configuration types.

use std::path::{Path, PathBuf};

/// Storage service configuration.
///
/// Passed explicitly into [`super::StorageService`] at construction; there is
/// no module-level storage state.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory under which all file-backed attachments are stored.
    pub upload_root: PathBuf,
}

impl StorageConfig {
    /// Create a new storage config rooted at the given directory.
    #[must_use]
    pub fn new(upload_root: impl Into<PathBuf>) -> Self {
        Self {
            upload_root: upload_root.into(),
        }
    }

    /// The upload root directory.
    #[must_use]
    pub fn upload_root(&self) -> &Path {
        &self.upload_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_root() {
        let config = StorageConfig::new("./uploads");
        assert_eq!(config.upload_root(), Path::new("./uploads"));
    }
}
