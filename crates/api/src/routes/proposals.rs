//! Proposal routes: CRUD plus document download.

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
use arsiva_db::entities::proposals;
use arsiva_db::repositories::{ProposalRepository, SubmissionInput};
use arsiva_shared::AppError;

use super::download_response;
use crate::AppState;
use crate::error::{ApiError, message};
use crate::wire::{date_to_wire, required, wire_to_date, wire_to_required_date};

/// Creates the proposal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/proposals", get(list_proposals).post(create_proposal))
        .route("/proposals/{id}", put(update_proposal))
        .route("/proposals/{id}", delete(delete_proposal))
        .route("/proposals/{id}/document", get(download_document))
}

/// Request body for creating or replacing a proposal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalBody {
    /// Date the proposal came in (`%Y-%m-%d`).
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

impl ProposalBody {
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

/// Response body for a proposal.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalResponse {
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

impl From<proposals::Model> for ProposalResponse {
    fn from(model: proposals::Model) -> Self {
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

/// GET /proposals - List all proposals.
async fn list_proposals(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProposalResponse>>, ApiError> {
    let repo = ProposalRepository::new((*state.db).clone());

    let items = repo
        .list()
        .await?
        .into_iter()
        .map(ProposalResponse::from)
        .collect();

    Ok(Json(items))
}

/// POST /proposals - Submit a new proposal.
async fn create_proposal(
    State(state): State<AppState>,
    Json(payload): Json<ProposalBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let repo = ProposalRepository::new((*state.db).clone());

    let proposal = repo.create(input).await?;
    info!(id = proposal.id, "proposal created");

    Ok((StatusCode::CREATED, message("Proposal submitted")))
}

/// PUT /proposals/{id} - Replace an existing proposal.
async fn update_proposal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ProposalBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let repo = ProposalRepository::new((*state.db).clone());

    if !repo.update(id, input).await? {
        return Err(AppError::NotFound(format!("proposal {id}")).into());
    }
    info!(id, "proposal updated");

    Ok(message("Proposal updated"))
}

/// DELETE /proposals/{id} - Delete a proposal.
async fn delete_proposal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProposalRepository::new((*state.db).clone());

    if !repo.delete(id).await? {
        return Err(AppError::NotFound(format!("proposal {id}")).into());
    }
    info!(id, "proposal deleted");

    Ok(message("Proposal deleted"))
}

/// GET /proposals/{id}/document - Download the proposal document.
async fn download_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProposalRepository::new((*state.db).clone());

    let proposal = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError(AppError::NotFound(format!("proposal {id}"))))?;

    let document = Document::inline(proposal.document_name, proposal.document_data);
    let content = state.documents.open(&document).await?;

    Ok(download_response(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_body() -> ProposalBody {
        ProposalBody {
            received_on: Some("2026-02-01".into()),
            department: Some("Dakwah".into()),
            program_name: Some("Kajian Rutin".into()),
            secretary: Some("Aisyah".into()),
            document_name: Some("proposal.pdf".into()),
            document_data: Some("data:application/pdf;base64,AAAA".into()),
            approved_on: Some("-".into()),
        }
    }

    #[test]
    fn test_into_input_accepts_full_body() {
        let input = full_body().into_input().unwrap();
        assert_eq!(input.officer, "Aisyah");
        assert_eq!(input.document_data, "data:application/pdf;base64,AAAA");
        assert!(input.approved_on.is_none());
    }

    #[test]
    fn test_into_input_requires_document() {
        let mut body = full_body();
        body.document_name = None;
        body.document_data = None;
        let err = body.into_input().unwrap_err();
        assert_eq!(err.0.status_code(), 400);
    }

    #[test]
    fn test_into_input_rejects_half_attachment() {
        let mut body = full_body();
        body.document_data = None;
        let err = body.into_input().unwrap_err();
        assert_eq!(err.0.status_code(), 400);
    }

    #[test]
    fn test_into_input_rejects_missing_scalar() {
        let mut body = full_body();
        body.department = None;
        let err = body.into_input().unwrap_err();
        assert_eq!(err.0.status_code(), 400);
    }
}
