//! Attachment types and data structures.

/// An inline document as accepted on the base64 write path.
///
/// The data is stored exactly as received: when the client sent a full data
/// URI the header is preserved at rest and consulted again at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineDocument {
    /// Original filename as supplied by the client.
    pub name: String,
    /// Base64 text, with or without a `data:<mime>;base64,` header.
    pub data: String,
}

/// Where an attachment's bytes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentPayload {
    /// Base64 text held in the row itself.
    Inline {
        /// Stored base64 text (full data URI when one was supplied).
        data: String,
    },
    /// File on disk under the upload root; the row holds only this weak
    /// filename reference, never the bytes.
    Stored {
        /// Sanitized filename relative to the upload root.
        filename: String,
    },
}

/// A persisted attachment: declared name plus its active payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Suggested download filename (the originally stored name).
    pub name: String,
    /// The single active payload representation.
    pub payload: DocumentPayload,
}

impl Document {
    /// An attachment backed by inline base64 text.
    #[must_use]
    pub fn inline(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: DocumentPayload::Inline { data: data.into() },
        }
    }

    /// An attachment backed by a file under the upload root. The stored name
    /// doubles as the download name.
    #[must_use]
    pub fn stored(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            name: filename.clone(),
            payload: DocumentPayload::Stored { filename },
        }
    }
}

/// A resolved attachment, ready to serve as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContent {
    /// Decoded file bytes.
    pub bytes: Vec<u8>,
    /// Resolved MIME type.
    pub mime_type: String,
    /// Suggested download filename.
    pub download_name: String,
}

/// An uploaded file from a multipart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Client-supplied filename (not yet sanitized).
    pub filename: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Client intent for the file-backed attachment on an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePatch {
    /// No file field and no removal flag: leave the existing file untouched.
    Keep,
    /// A new file was uploaded: write it, superseding any old file.
    Replace(FileUpload),
    /// Explicit removal: clear the reference and delete the old file.
    Remove,
}
