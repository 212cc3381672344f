//! Incoming-letter routes: CRUD, multipart activity-file handling, download.
//!
//! Letters are the one resource whose attachment lives on disk instead of in
//! the row. Creates are plain JSON and start without a file; updates arrive
//! as multipart forms carrying the scalar fields plus the tri-state file
//! intent (keep / replace / remove).

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use arsiva_core::attachment::{Document, FilePatch, FileUpload};
use arsiva_db::entities::letters;
use arsiva_db::repositories::{LetterInput, LetterRepository};
use arsiva_shared::AppError;

use super::download_response;
use crate::AppState;
use crate::error::{ApiError, message};
use crate::wire::{NULL_SENTINEL, date_to_wire, required, wire_to_date, wire_to_required_date};

/// Creates the letter routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/letters", get(list_letters).post(create_letter))
        .route("/letters/{id}", put(update_letter))
        .route("/letters/{id}", delete(delete_letter))
        .route("/letters/{id}/file", get(download_file))
}

/// Request body for creating a letter (no file at create time).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterBody {
    /// Date the letter came in (`%Y-%m-%d`).
    pub received_on: Option<String>,
    /// Kind of letter.
    pub letter_type: Option<String>,
    /// Sender name.
    pub name: Option<String>,
    /// Sending agency or institution.
    pub agency: Option<String>,
    /// Approval date; `"-"` or absent means not approved.
    pub approved_on: Option<String>,
}

impl LetterBody {
    fn into_input(self) -> Result<LetterInput, ApiError> {
        Ok(LetterInput {
            received_on: wire_to_required_date(self.received_on.as_deref(), "receivedOn")?,
            letter_type: required(self.letter_type, "letterType")?,
            name: required(self.name, "name")?,
            agency: required(self.agency, "agency")?,
            approved_on: wire_to_date(self.approved_on.as_deref())?,
        })
    }
}

/// Response body for a letter.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterResponse {
    /// Row identifier.
    pub id: i32,
    /// Date received.
    pub received_on: String,
    /// Kind of letter.
    pub letter_type: String,
    /// Sender name.
    pub name: String,
    /// Sending agency or institution.
    pub agency: String,
    /// Approval date, `"-"` when unset.
    pub approved_on: String,
    /// Stored activity filename, `"-"` when none.
    pub activity_file: String,
}

impl From<letters::Model> for LetterResponse {
    fn from(model: letters::Model) -> Self {
        Self {
            id: model.id,
            received_on: date_to_wire(Some(model.received_on)),
            letter_type: model.letter_type,
            name: model.name,
            agency: model.agency,
            approved_on: date_to_wire(model.approved_on),
            activity_file: model
                .activity_file
                .unwrap_or_else(|| NULL_SENTINEL.to_string()),
        }
    }
}

/// Scalar fields collected from the multipart update form.
#[derive(Debug, Default)]
struct LetterForm {
    received_on: Option<String>,
    letter_type: Option<String>,
    name: Option<String>,
    agency: Option<String>,
    approved_on: Option<String>,
    remove_file: bool,
    upload: Option<FileUpload>,
}

impl LetterForm {
    /// Drains the multipart stream into scalar fields plus the file intent.
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
            let field_name = field.name().unwrap_or_default().to_string();
            match field_name.as_str() {
                "receivedOn" => form.received_on = Some(field.text().await.map_err(bad_multipart)?),
                "letterType" => form.letter_type = Some(field.text().await.map_err(bad_multipart)?),
                "name" => form.name = Some(field.text().await.map_err(bad_multipart)?),
                "agency" => form.agency = Some(field.text().await.map_err(bad_multipart)?),
                "approvedOn" => form.approved_on = Some(field.text().await.map_err(bad_multipart)?),
                "removeFile" => {
                    form.remove_file = field.text().await.map_err(bad_multipart)? == "true";
                }
                "activityFile" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.map_err(bad_multipart)?;
                    // An empty file input means "keep whatever is there".
                    if !filename.is_empty() {
                        form.upload = Some(FileUpload {
                            filename,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    fn into_parts(self) -> Result<(LetterInput, FilePatch), ApiError> {
        let patch = if self.remove_file {
            FilePatch::Remove
        } else if let Some(upload) = self.upload {
            FilePatch::Replace(upload)
        } else {
            FilePatch::Keep
        };

        let input = LetterBody {
            received_on: self.received_on,
            letter_type: self.letter_type,
            name: self.name,
            agency: self.agency,
            approved_on: self.approved_on,
        }
        .into_input()?;

        Ok((input, patch))
    }
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError(AppError::Validation(format!("invalid multipart form: {err}")))
}

/// GET /letters - List all letters, newest received first.
async fn list_letters(State(state): State<AppState>) -> Result<Json<Vec<LetterResponse>>, ApiError> {
    let repo = LetterRepository::new((*state.db).clone());

    let items = repo
        .list()
        .await?
        .into_iter()
        .map(LetterResponse::from)
        .collect();

    Ok(Json(items))
}

/// POST /letters - Log a new incoming letter.
async fn create_letter(
    State(state): State<AppState>,
    Json(payload): Json<LetterBody>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input()?;
    let repo = LetterRepository::new((*state.db).clone());

    let letter = repo.create(input).await?;
    info!(id = letter.id, "letter created");

    Ok((StatusCode::CREATED, message("Letter recorded")))
}

/// PUT /letters/{id} - Replace a letter, applying the tri-state file intent.
async fn update_letter(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let (input, patch) = LetterForm::read(multipart).await?.into_parts()?;

    let repo = LetterRepository::new((*state.db).clone());
    let letter = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError(AppError::NotFound(format!("letter {id}"))))?;

    // Resolve the file intent first; a row update that then fails leaves the
    // new file in place without a rollback (known, accepted gap).
    let activity_file = state
        .documents
        .apply_patch(letter.activity_file.as_deref(), patch)
        .await?;

    if !repo.update(id, input, activity_file).await? {
        return Err(AppError::NotFound(format!("letter {id}")).into());
    }
    info!(id, "letter updated");

    Ok(message("Letter updated"))
}

/// DELETE /letters/{id} - Delete a letter and its backing activity file.
async fn delete_letter(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = LetterRepository::new((*state.db).clone());

    let letter = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError(AppError::NotFound(format!("letter {id}"))))?;

    if !repo.delete(id).await? {
        return Err(AppError::NotFound(format!("letter {id}")).into());
    }

    // The row is gone; an already-missing file is a logged no-op inside
    // discard, so the delete still succeeds.
    if let Some(filename) = letter.activity_file {
        state.documents.discard(&filename).await?;
    }
    info!(id, "letter deleted");

    Ok(message("Letter deleted"))
}

/// GET /letters/{id}/file - Download the activity file from disk.
async fn download_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = LetterRepository::new((*state.db).clone());

    let letter = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError(AppError::NotFound(format!("letter {id}"))))?;

    let filename = letter.activity_file.ok_or_else(|| {
        ApiError(AppError::NotFound("no file associated with this letter".into()))
    })?;

    let content = state.documents.open(&Document::stored(filename)).await?;

    Ok(download_response(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_body_validation() {
        let body = LetterBody {
            received_on: Some("2026-01-10".into()),
            letter_type: Some("Invitation".into()),
            name: Some("Budi".into()),
            agency: Some("BEM".into()),
            approved_on: Some("-".into()),
        };
        let input = body.into_input().unwrap();
        assert!(input.approved_on.is_none());

        let missing = LetterBody {
            received_on: None,
            letter_type: Some("Invitation".into()),
            name: Some("Budi".into()),
            agency: Some("BEM".into()),
            approved_on: None,
        };
        assert_eq!(missing.into_input().unwrap_err().0.status_code(), 400);
    }

    #[test]
    fn test_form_intent_resolution() {
        let keep = LetterForm {
            received_on: Some("2026-01-10".into()),
            letter_type: Some("Request".into()),
            name: Some("Sari".into()),
            agency: Some("HMJ".into()),
            ..Default::default()
        };
        let (_, patch) = keep.into_parts().unwrap();
        assert_eq!(patch, FilePatch::Keep);

        let remove = LetterForm {
            received_on: Some("2026-01-10".into()),
            letter_type: Some("Request".into()),
            name: Some("Sari".into()),
            agency: Some("HMJ".into()),
            remove_file: true,
            ..Default::default()
        };
        let (_, patch) = remove.into_parts().unwrap();
        assert_eq!(patch, FilePatch::Remove);

        let replace = LetterForm {
            received_on: Some("2026-01-10".into()),
            letter_type: Some("Request".into()),
            name: Some("Sari".into()),
            agency: Some("HMJ".into()),
            upload: Some(FileUpload {
                filename: "activity.pdf".into(),
                bytes: vec![1, 2, 3],
            }),
            ..Default::default()
        };
        let (_, patch) = replace.into_parts().unwrap();
        assert!(matches!(patch, FilePatch::Replace(_)));
    }

    #[test]
    fn test_remove_flag_wins_over_upload() {
        let form = LetterForm {
            received_on: Some("2026-01-10".into()),
            letter_type: Some("Request".into()),
            name: Some("Sari".into()),
            agency: Some("HMJ".into()),
            approved_on: None,
            remove_file: true,
            upload: Some(FileUpload {
                filename: "activity.pdf".into(),
                bytes: vec![1],
            }),
        };
        let (_, patch) = form.into_parts().unwrap();
        assert_eq!(patch, FilePatch::Remove);
    }
}
