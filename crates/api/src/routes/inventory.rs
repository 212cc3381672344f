//! Inventory routes: CRUD plus payment-receipt download.
//!
//! The payment receipt is an optional inline attachment: a nested object
//! carrying the filename and base64 text together. A create or update
//! without one stores null; supplying only half the pair is rejected.

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
use arsiva_db::entities::inventory_items;
use arsiva_db::repositories::{InventoryItemInput, InventoryRepository};
use arsiva_shared::AppError;

use super::download_response;
use crate::AppState;
use crate::error::{ApiError, message};
use crate::wire::{DATE_FORMAT, required, wire_to_date};

/// Creates the inventory routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(list_items).post(create_item))
        .route("/inventory/{id}", put(update_item))
        .route("/inventory/{id}", delete(delete_item))
        .route("/inventory/{id}/receipt", get(download_receipt))
}

/// Inline payment receipt as sent and returned on the wire.
#[derive(Debug, Deserialize, Serialize)]
pub struct Receipt {
    /// Receipt filename.
    pub name: Option<String>,
    /// Receipt base64 text (full data URI accepted and kept).
    pub data: Option<String>,
}

/// Request body for creating or replacing an inventory item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemBody {
    /// Renter name.
    pub name: Option<String>,
    /// Renting agency or institution.
    pub agency: Option<String>,
    /// Date the rental request letter came in.
    pub letter_in_on: Option<String>,
    /// Pickup date.
    pub pickup_on: Option<String>,
    /// Return date.
    pub return_on: Option<String>,
    /// Rental period label.
    pub rental_period: Option<String>,
    /// Down-payment / settled status label.
    pub payment_status: Option<String>,
    /// Optional payment receipt.
    pub receipt: Option<Receipt>,
}

impl InventoryItemBody {
    fn into_input(self) -> Result<InventoryItemInput, ApiError> {
        let (receipt_name, receipt_data) = match self.receipt {
            Some(receipt) => match validate_inline(receipt.name, receipt.data)? {
                Some(doc) => (Some(doc.name), Some(doc.data)),
                None => (None, None),
            },
            None => (None, None),
        };

        Ok(InventoryItemInput {
            name: required(self.name, "name")?,
            agency: required(self.agency, "agency")?,
            letter_in_on: wire_to_date(self.letter_in_on.as_deref())?,
            pickup_on: wire_to_date(self.pickup_on.as_deref())?,
            return_on: wire_to_date(self.return_on.as_deref())?,
            rental_period: self.rental_period,
            payment_status: self.payment_status,
            receipt_name,
            receipt_data,
        })
    }
}

/// Response body for an inventory item.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemResponse {
    /// Row identifier.
    pub id: i32,
    /// Renter name.
    pub name: String,
    /// Renting agency or institution.
    pub agency: String,
    /// Date the rental request letter came in.
    pub letter_in_on: Option<String>,
    /// Pickup date.
    pub pickup_on: Option<String>,
    /// Return date.
    pub return_on: Option<String>,
    /// Rental period label.
    pub rental_period: Option<String>,
    /// Down-payment / settled status label.
    pub payment_status: Option<String>,
    /// Payment receipt, absent when none was stored.
    pub receipt: Option<Receipt>,
}

impl From<inventory_items::Model> for InventoryItemResponse {
    fn from(model: inventory_items::Model) -> Self {
        let receipt = match (model.receipt_name, model.receipt_data) {
            (Some(name), Some(data)) => Some(Receipt {
                name: Some(name),
                data: Some(data),
            }),
            _ => None,
        };

        Self {
            id: model.id,
            name: model.name,
            agency: model.agency,
            letter_in_on: model
                .letter_in_on
                .map(|d| d.format(DATE_FORMAT).to_string()),
            pickup_on: model.pickup_on.map(|d| d.format(DATE_FORMAT).to_string()),
            return_on: model.return_on.map(|d| d.format(DATE_FORMAT).to_string()),
            rental_period: model.rental_period,
            payment_status: model.payment_status,
            receipt,
        }
    }
}

/// GET /inventory - List all inventory items.
async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryItemResponse>>, ApiError> {
    let repo = InventoryRepository::new((*state.db).clone());

    let items = repo
        .list()
        .await?
        .into_iter()
        .map(InventoryItemResponse::from)
        .collect();

    Ok(Json(items))
}

/// POST /inventory - Record a new inventory rental.
async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<InventoryItemBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let repo = InventoryRepository::new((*state.db).clone());

    let item = repo.create(input).await?;
    info!(id = item.id, "inventory item created");

    Ok((StatusCode::CREATED, message("Inventory item recorded")))
}

/// PUT /inventory/{id} - Replace an existing inventory item.
async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<InventoryItemBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let repo = InventoryRepository::new((*state.db).clone());

    if !repo.update(id, input).await? {
        return Err(AppError::NotFound(format!("inventory item {id}")).into());
    }
    info!(id, "inventory item updated");

    Ok(message("Inventory item updated"))
}

/// DELETE /inventory/{id} - Delete an inventory item.
async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = InventoryRepository::new((*state.db).clone());

    if !repo.delete(id).await? {
        return Err(AppError::NotFound(format!("inventory item {id}")).into());
    }
    info!(id, "inventory item deleted");

    Ok(message("Inventory item deleted"))
}

/// GET /inventory/{id}/receipt - Download the payment receipt.
async fn download_receipt(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = InventoryRepository::new((*state.db).clone());

    let item = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError(AppError::NotFound(format!("inventory item {id}"))))?;

    let (name, data) = match (item.receipt_name, item.receipt_data) {
        (Some(name), Some(data)) => (name, data),
        _ => {
            return Err(AppError::NotFound("no receipt attached to this item".into()).into());
        }
    };

    let content = state.documents.open(&Document::inline(name, data)).await?;

    Ok(download_response(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_body() -> InventoryItemBody {
        InventoryItemBody {
            name: Some("Tenda".into()),
            agency: Some("UKM Pramuka".into()),
            letter_in_on: Some("2026-02-01".into()),
            pickup_on: None,
            return_on: None,
            rental_period: Some("3 hari".into()),
            payment_status: Some("DP".into()),
            receipt: None,
        }
    }

    #[test]
    fn test_into_input_without_receipt_stores_null() {
        let input = bare_body().into_input().unwrap();
        assert!(input.receipt_name.is_none());
        assert!(input.receipt_data.is_none());
    }

    #[test]
    fn test_into_input_with_receipt_pair() {
        let mut body = bare_body();
        body.receipt = Some(Receipt {
            name: Some("receipt.pdf".into()),
            data: Some("data:application/pdf;base64,AAAA".into()),
        });
        let input = body.into_input().unwrap();
        assert_eq!(input.receipt_name.as_deref(), Some("receipt.pdf"));
    }

    #[test]
    fn test_into_input_rejects_half_receipt() {
        let mut body = bare_body();
        body.receipt = Some(Receipt {
            name: Some("receipt.pdf".into()),
            data: None,
        });
        let err = body.into_input().unwrap_err();
        assert_eq!(err.0.status_code(), 400);
    }

    #[test]
    fn test_into_input_accepts_empty_receipt_object() {
        let mut body = bare_body();
        body.receipt = Some(Receipt {
            name: None,
            data: None,
        });
        let input = body.into_input().unwrap();
        assert!(input.receipt_name.is_none());
    }
}
