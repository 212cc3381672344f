//! Authentication routes: register and a single credential check.
//!
//! There is no token or session protocol; login answers with a role and
//! nothing else. The configured admin credentials are checked before the
//! users table and never touch the store.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use arsiva_core::auth::{hash_password, verify_password};
use arsiva_db::UserRepository;
use arsiva_shared::AppError;

use crate::error::ApiError;
use crate::wire::required;
use crate::AppState;

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Request body for registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Plain password, hashed before storage.
    pub password: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: Option<String>,
    /// Plain password.
    pub password: Option<String>,
}

/// POST /auth/register - Register a new user.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = required(payload.username, "username")?;
    let email = required(payload.email, "email")?;
    let password = required(payload.password, "password")?;

    let user_repo = UserRepository::new((*state.db).clone());

    if user_repo.username_exists(&username).await? {
        return Err(AppError::Conflict(format!("username {username} is already taken")).into());
    }

    let password_hash = hash_password(&password)?;
    let user = user_repo.create(&username, &email, &password_hash).await?;

    info!(user_id = user.id, username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Registration successful" })),
    ))
}

/// POST /auth/login - Check credentials and answer with a role.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = required(payload.username, "username")?;
    let password = required(payload.password, "password")?;

    // Built-in admin account, checked before the users table.
    if username == state.admin.username && password == state.admin.password {
        info!(username = %username, "admin logged in");
        return Ok(Json(
            json!({ "message": "Login successful", "role": "admin" }),
        ));
    }

    let user_repo = UserRepository::new((*state.db).clone());

    if let Some(user) = user_repo.find_by_username(&username).await?
        && verify_password(&password, &user.password_hash)?
    {
        info!(user_id = user.id, "user logged in");
        return Ok(Json(json!({ "message": "Login successful", "role": "user" })));
    }

    info!(username = %username, "failed login attempt");
    Err(AppError::Unauthorized("invalid username or password".into()).into())
}
