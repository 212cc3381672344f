//! Budget plan routes: CRUD plus document download.

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
use arsiva_db::entities::budget_plans;
use arsiva_db::repositories::{BudgetPlanRepository, SubmissionInput};
use arsiva_shared::AppError;

use super::download_response;
use crate::AppState;
use crate::error::{ApiError, message};
use crate::wire::{date_to_wire, required, wire_to_date, wire_to_required_date};

/// Creates the budget plan routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budget-plans", get(list_plans).post(create_plan))
        .route("/budget-plans/{id}", put(update_plan))
        .route("/budget-plans/{id}", delete(delete_plan))
        .route("/budget-plans/{id}/document", get(download_document))
}

/// Request body for creating or replacing a budget plan.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlanBody {
    /// Date the plan came in (`%Y-%m-%d`).
    pub received_on: Option<String>,
    /// Owning department.
    pub department: Option<String>,
    /// Program of work.
    pub program_name: Option<String>,
    /// Responsible treasurer.
    pub treasurer: Option<String>,
    /// Declared document filename.
    pub document_name: Option<String>,
    /// Inline base64 document (full data URI accepted and kept).
    pub document_data: Option<String>,
    /// Approval date; `"-"` or absent means not approved.
    pub approved_on: Option<String>,
}

impl BudgetPlanBody {
    fn into_input(self) -> Result<SubmissionInput, ApiError> {
        let document = validate_inline(self.document_name, self.document_data)?
            .ok_or_else(|| AppError::Validation("document name and payload are required".into()))?;

        Ok(SubmissionInput {
            received_on: wire_to_required_date(self.received_on.as_deref(), "receivedOn")?,
            department: required(self.department, "department")?,
            program_name: required(self.program_name, "programName")?,
            officer: required(self.treasurer, "treasurer")?,
            document_name: document.name,
            document_data: document.data,
            approved_on: wire_to_date(self.approved_on.as_deref())?,
        })
    }
}

/// Response body for a budget plan.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlanResponse {
    /// Row identifier.
    pub id: i32,
    /// Date received.
    pub received_on: String,
    /// Owning department.
    pub department: String,
    /// Program of work.
    pub program_name: String,
    /// Responsible treasurer.
    pub treasurer: String,
    /// Document filename.
    pub document_name: String,
    /// Inline base64 document as stored.
    pub document_data: String,
    /// Approval date, `"-"` when unset.
    pub approved_on: String,
}

impl From<budget_plans::Model> for BudgetPlanResponse {
    fn from(model: budget_plans::Model) -> Self {
        Self {
            id: model.id,
            received_on: date_to_wire(Some(model.received_on)),
            department: model.department,
            program_name: model.program_name,
            treasurer: model.treasurer,
            document_name: model.document_name,
            document_data: model.document_data,
            approved_on: date_to_wire(model.approved_on),
        }
    }
}

/// GET /budget-plans - List all budget plans.
async fn list_plans(
    State(state): State<AppState>,
) -> Result<Json<Vec<BudgetPlanResponse>>, ApiError> {
    let repo = BudgetPlanRepository::new((*state.db).clone());

    let items = repo
        .list()
        .await?
        .into_iter()
        .map(BudgetPlanResponse::from)
        .collect();

    Ok(Json(items))
}

/// POST /budget-plans - Submit a new budget plan.
async fn create_plan(
    State(state): State<AppState>,
    Json(payload): Json<BudgetPlanBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let repo = BudgetPlanRepository::new((*state.db).clone());

    let plan = repo.create(input).await?;
    info!(id = plan.id, "budget plan created");

    Ok((StatusCode::CREATED, message("Budget plan submitted")))
}

/// PUT /budget-plans/{id} - Replace an existing budget plan.
async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<BudgetPlanBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let repo = BudgetPlanRepository::new((*state.db).clone());

    if !repo.update(id, input).await? {
        return Err(AppError::NotFound(format!("budget plan {id}")).into());
    }
    info!(id, "budget plan updated");

    Ok(message("Budget plan updated"))
}

/// DELETE /budget-plans/{id} - Delete a budget plan.
async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = BudgetPlanRepository::new((*state.db).clone());

    if !repo.delete(id).await? {
        return Err(AppError::NotFound(format!("budget plan {id}")).into());
    }
    info!(id, "budget plan deleted");

    Ok(message("Budget plan deleted"))
}

/// GET /budget-plans/{id}/document - Download the budget plan document.
async fn download_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = BudgetPlanRepository::new((*state.db).clone());

    let plan = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError(AppError::NotFound(format!("budget plan {id}"))))?;

    let document = Document::inline(plan.document_name, plan.document_data);
    let content = state.documents.open(&document).await?;

    Ok(download_response(content))
}
