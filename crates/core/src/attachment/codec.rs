//! Pure encode/decode functions for inline attachments.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::error::AttachmentError;
use super::types::InlineDocument;

/// MIME type served when neither the data-URI header nor the filename
/// extension identifies the document.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Split a stored base64 value into its MIME hint and payload.
///
/// A data URI is split at the *first* comma; everything after it is the
/// payload. A value without a comma is a bare payload with no hint.
#[must_use]
pub fn split_data_uri(value: &str) -> (Option<&str>, &str) {
    match value.split_once(',') {
        Some((header, payload)) => (mime_from_header(header), payload),
        None => (None, value),
    }
}

/// Extract the MIME type from a `data:<mime>;base64` header, if present.
fn mime_from_header(header: &str) -> Option<&str> {
    let media_type = header.split(';').next().unwrap_or(header);
    media_type.strip_prefix("data:").filter(|m| !m.is_empty())
}

/// Infer a MIME type from the filename extension.
///
/// The table is deliberately small: the organization only circulates PDF and
/// Word documents; everything else downloads as a generic binary.
#[must_use]
pub fn mime_from_name(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc" | "docx") => "application/msword",
        _ => FALLBACK_MIME,
    }
}

/// Resolve the MIME type for a stored inline value, first match wins:
/// data-URI header hint, then filename extension, then the binary fallback.
#[must_use]
pub fn resolve_mime(value: &str, name: &str) -> String {
    let (hint, _) = split_data_uri(value);
    hint.map_or_else(|| mime_from_name(name).to_string(), ToString::to_string)
}

/// Decode a stored inline value (header stripped first) into raw bytes.
///
/// # Errors
///
/// Returns [`AttachmentError::Decode`] when the payload is not valid base64.
pub fn decode_payload(value: &str) -> Result<Vec<u8>, AttachmentError> {
    let (_, payload) = split_data_uri(value);
    Ok(STANDARD.decode(payload)?)
}

/// Validate the inline name/payload pair of a write request.
///
/// Both present yields an attachment, both absent yields none (a create with
/// no attachment is legal for nullable columns); one without the other is a
/// validation error.
///
/// # Errors
///
/// Returns [`AttachmentError::Validation`] when exactly one of the pair is
/// supplied, or when either is an empty string.
pub fn validate_inline(
    name: Option<String>,
    data: Option<String>,
) -> Result<Option<InlineDocument>, AttachmentError> {
    match (name, data) {
        (Some(name), Some(data)) if !name.is_empty() && !data.is_empty() => {
            Ok(Some(InlineDocument { name, data }))
        }
        (None, None) => Ok(None),
        _ => Err(AttachmentError::validation(
            "document name and payload must be supplied together",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("report.pdf", "application/pdf")]
    #[case("report.docx", "application/msword")]
    #[case("report.doc", "application/msword")]
    #[case("REPORT.PDF", "application/pdf")]
    #[case("report.xyz", "application/octet-stream")]
    #[case("report", "application/octet-stream")]
    fn test_mime_from_name(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(mime_from_name(name), expected);
    }

    #[test]
    fn test_split_data_uri_with_header() {
        let (hint, payload) = split_data_uri("data:application/pdf;base64,SGVsbG8=");
        assert_eq!(hint, Some("application/pdf"));
        assert_eq!(payload, "SGVsbG8=");
    }

    #[test]
    fn test_split_data_uri_bare_payload() {
        let (hint, payload) = split_data_uri("SGVsbG8=");
        assert_eq!(hint, None);
        assert_eq!(payload, "SGVsbG8=");
    }

    #[test]
    fn test_split_data_uri_headerless_comma() {
        // Malformed header without "data:" still splits at the first comma
        // but yields no hint.
        let (hint, payload) = split_data_uri("application/pdf;base64,SGVsbG8=");
        assert_eq!(hint, None);
        assert_eq!(payload, "SGVsbG8=");
    }

    #[test]
    fn test_resolve_mime_header_wins_over_extension() {
        let mime = resolve_mime("data:image/png;base64,AAAA", "scan.pdf");
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn test_resolve_mime_falls_back_to_extension() {
        assert_eq!(resolve_mime("AAAA", "scan.pdf"), "application/pdf");
        assert_eq!(resolve_mime("AAAA", "scan.bin"), FALLBACK_MIME);
    }

    #[test]
    fn test_decode_payload_strips_header() {
        let bytes = decode_payload("data:text/plain;base64,SGVsbG8gV29ybGQ=").unwrap();
        assert_eq!(bytes, b"Hello World");
    }

    #[test]
    fn test_decode_payload_bare() {
        let bytes = decode_payload("SGVsbG8gV29ybGQ=").unwrap();
        assert_eq!(bytes, b"Hello World");
    }

    #[test]
    fn test_decode_payload_invalid_base64() {
        let err = decode_payload("data:application/pdf;base64,not!!valid").unwrap_err();
        assert!(matches!(err, AttachmentError::Decode(_)));
    }

    #[test]
    fn test_validate_inline_pairs() {
        let doc = validate_inline(Some("a.pdf".into()), Some("AAAA".into()))
            .unwrap()
            .unwrap();
        assert_eq!(doc.name, "a.pdf");

        assert!(validate_inline(None, None).unwrap().is_none());

        assert!(matches!(
            validate_inline(Some("a.pdf".into()), None),
            Err(AttachmentError::Validation(_))
        ));
        assert!(matches!(
            validate_inline(None, Some("AAAA".into())),
            Err(AttachmentError::Validation(_))
        ));
        assert!(matches!(
            validate_inline(Some(String::new()), Some("AAAA".into())),
            Err(AttachmentError::Validation(_))
        ));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use proptest::prelude::*;

    // For any bytes, encoding and wrapping in a data URI decodes back to the
    // same bytes, and the header MIME wins resolution.
    proptest! {
        #[test]
        fn prop_data_uri_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let encoded = STANDARD.encode(&bytes);
            let value = format!("data:application/x-test;base64,{encoded}");

            let decoded = decode_payload(&value).expect("valid payload must decode");
            prop_assert_eq!(decoded, bytes);
            prop_assert_eq!(resolve_mime(&value, "anything.pdf"), "application/x-test");
        }
    }

    // A bare payload round-trips identically and resolution falls back to the
    // extension table.
    proptest! {
        #[test]
        fn prop_bare_payload_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let encoded = STANDARD.encode(&bytes);

            let decoded = decode_payload(&encoded).expect("valid payload must decode");
            prop_assert_eq!(decoded, bytes);
            prop_assert_eq!(resolve_mime(&encoded, "report.pdf"), "application/pdf");
        }
    }
}
