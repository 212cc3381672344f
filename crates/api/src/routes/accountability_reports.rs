//! Accountability report routes: CRUD plus document download.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use arsiva_core::attachment::{Document, validate_inline};
use arsiva_db::entities::accountability_reports;
use arsiva_db::repositories::{AccountabilityReportRepository, SubmissionInput};
use arsiva_shared::AppError;

use super::download_response;
use crate::AppState;
use crate::error::{ApiError, message};
use crate::wire::{date_to_wire, required, wire_to_date, wire_to_required_date};

/// Creates the accountability report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/accountability-reports",
            get(list_reports).post(create_report),
        )
        .route("/accountability-reports/{id}", put(update_report))
        .route("/accountability-reports/{id}", delete(delete_report))
        .route("/accountability-reports/{id}/document", get(download_document))
}

/// Request body for creating or replacing an accountability report.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountabilityReportBody {
    /// Date the report came in (`%Y-%m-%d`).
    pub received_on: Option<String>,
    /// Owning department.
    pub department: Option<String>,
    /// Program of work.
    pub program_name: Option<String>,
    /// Responsible secretary.
    pub secretary: Option<String>,
    /// Declared document filename.
    pub document_name: Option<String>,
    /// Inline base64 document (full data URI accepted and kept).
    pub document_data: Option<String>,
    /// Approval date; `"-"` or absent means not approved.
    pub approved_on: Option<String>,
}

impl AccountabilityReportBody {
    fn into_input(self) -> Result<SubmissionInput, ApiError> {
        let document = validate_inline(self.document_name, self.document_data)?
            .ok_or_else(|| AppError::Validation("document name and payload are required".into()))?;

        Ok(SubmissionInput {
            received_on: wire_to_required_date(self.received_on.as_deref(), "receivedOn")?,
            department: required(self.department, "department")?,
            program_name: required(self.program_name, "programName")?,
            officer: required(self.secretary, "secretary")?,
            document_name: document.name,
            document_data: document.data,
            approved_on: wire_to_date(self.approved_on.as_deref())?,
        })
    }
}

/// Response body for an accountability report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountabilityReportResponse {
    /// Row identifier.
    pub id: i32,
    /// Date received.
    pub received_on: String,
    /// Owning department.
    pub department: String,
    /// Program of work.
    pub program_name: String,
    /// Responsible secretary.
    pub secretary: String,
    /// Document filename.
    pub document_name: String,
    /// Inline base64 document as stored.
    pub document_data: String,
    /// Approval date, `"-"` when unset.
    pub approved_on: String,
}

impl From<accountability_reports::Model> for AccountabilityReportResponse {
    fn from(model: accountability_reports::Model) -> Self {
        Self {
            id: model.id,
            received_on: date_to_wire(Some(model.received_on)),
            department: model.department,
            program_name: model.program_name,
            secretary: model.secretary,
            document_name: model.document_name,
            document_data: model.document_data,
            approved_on: date_to_wire(model.approved_on),
        }
    }
}

/// GET /accountability-reports - List all reports.
async fn list_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountabilityReportResponse>>, ApiError> {
    let repo = AccountabilityReportRepository::new((*state.db).clone());

    let items = repo
        .list()
        .await?
        .into_iter()
        .map(AccountabilityReportResponse::from)
        .collect();

    Ok(Json(items))
}

/// POST /accountability-reports - Submit a new report.
async fn create_report(
    State(state): State<AppState>,
    Json(payload): Json<AccountabilityReportBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let repo = AccountabilityReportRepository::new((*state.db).clone());

    let report = repo.create(input).await?;
    info!(id = report.id, "accountability report created");

    Ok((StatusCode::CREATED, message("Accountability report submitted")))
}

/// PUT /accountability-reports/{id} - Replace an existing report.
async fn update_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AccountabilityReportBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let repo = AccountabilityReportRepository::new((*state.db).clone());

    if !repo.update(id, input).await? {
        return Err(AppError::NotFound(format!("accountability report {id}")).into());
    }
    info!(id, "accountability report updated");

    Ok(message("Accountability report updated"))
}

/// DELETE /accountability-reports/{id} - Delete a report.
async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = AccountabilityReportRepository::new((*state.db).clone());

    if !repo.delete(id).await? {
        return Err(AppError::NotFound(format!("accountability report {id}")).into());
    }
    info!(id, "accountability report deleted");

    Ok(message("Accountability report deleted"))
}

/// GET /accountability-reports/{id}/document - Download the report document.
async fn download_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = AccountabilityReportRepository::new((*state.db).clone());

    let report = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError(AppError::NotFound(format!("accountability report {id}"))))?;

    let document = Document::inline(report.document_name, report.document_data);
    let content = state.documents.open(&document).await?;

    Ok(download_response(content))
}
