//! Shared input shape for the four submission tables.

use chrono::NaiveDate;

/// Input for creating or replacing a submission row.
///
/// Proposals and accountability reports store `officer` in their secretary
/// column; budget plans and realization reports in their treasurer column.
/// `document_data` is the inline base64 text exactly as received (full data
/// URI when one was supplied).
#[derive(Debug, Clone)]
pub struct SubmissionInput {
    /// Date the document was received.
    pub received_on: NaiveDate,
    /// Owning department.
    pub department: String,
    /// Program of work the document belongs to.
    pub program_name: String,
    /// Responsible officer (secretary or treasurer).
    pub officer: String,
    /// Declared document filename.
    pub document_name: String,
    /// Inline base64 document text.
    pub document_data: String,
    /// Approval date, unset until the document is approved.
    pub approved_on: Option<NaiveDate>,
}
