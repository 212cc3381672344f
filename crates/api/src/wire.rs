//! Wire-format helpers for the JSON boundary.
//!
//! The legacy frontend renders unset dates and missing activity files as the
//! string `"-"`. That sentinel is purely a presentation concern: rows and
//! domain types carry proper `Option` values, and the conversion happens only
//! here at the HTTP boundary.

use chrono::NaiveDate;

use arsiva_shared::AppError;

use crate::error::ApiError;

/// Sentinel the frontend uses for "no value".
pub const NULL_SENTINEL: &str = "-";

/// Date format used on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders an optional date, substituting the sentinel when unset.
#[must_use]
pub fn date_to_wire(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || NULL_SENTINEL.to_string(),
        |d| d.format(DATE_FORMAT).to_string(),
    )
}

/// Parses an optional wire date; the sentinel and the empty string mean
/// "no value".
///
/// # Errors
///
/// Returns a validation error when the value is neither empty, the sentinel,
/// nor a `%Y-%m-%d` date.
pub fn wire_to_date(value: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match value {
        None => Ok(None),
        Some(s) if s == NULL_SENTINEL || s.is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| ApiError(AppError::Validation(format!("invalid date: {s}")))),
    }
}

/// Parses a required wire date.
///
/// # Errors
///
/// Returns a validation error when the field is missing, a sentinel, or not
/// a `%Y-%m-%d` date.
pub fn wire_to_required_date(value: Option<&str>, field: &str) -> Result<NaiveDate, ApiError> {
    wire_to_date(value)?
        .ok_or_else(|| ApiError(AppError::Validation(format!("{field} is required"))))
}

/// Requires a non-empty string field.
///
/// # Errors
///
/// Returns a validation error when the field is missing or empty.
pub fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ApiError(AppError::Validation(format!(
            "{field} is required"
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_to_wire_sentinel() {
        assert_eq!(date_to_wire(None), "-");
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        assert_eq!(date_to_wire(Some(date)), "2026-03-14");
    }

    #[test]
    fn test_wire_to_date_accepts_sentinel_and_empty() {
        assert_eq!(wire_to_date(Some("-")).unwrap(), None);
        assert_eq!(wire_to_date(Some("")).unwrap(), None);
        assert_eq!(wire_to_date(None).unwrap(), None);

        let parsed = wire_to_date(Some("2026-03-14")).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2026, 3, 14));
    }

    #[test]
    fn test_wire_to_date_rejects_garbage() {
        let err = wire_to_date(Some("14/03/2026")).unwrap_err();
        assert_eq!(err.0.status_code(), 400);
    }

    #[test]
    fn test_wire_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31);
        assert_eq!(wire_to_date(Some(&date_to_wire(date))).unwrap(), date);
        assert_eq!(wire_to_date(Some(&date_to_wire(None))).unwrap(), None);
    }

    #[test]
    fn test_required_rejects_missing_and_blank() {
        assert!(required(Some("FKDK".into()), "department").is_ok());
        assert!(required(Some("   ".into()), "department").is_err());
        assert!(required(None, "department").is_err());
    }
}
