//! Authentication routes - login, register, logout

use anyhow::Context;
use axum::{
    extract::Extension,
    extract::rejection::JsonRejection,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::domains::auth::actions::{login, register, LoginCredentials, LoginResult, RegisterResult};
use crate::domains::users::models::user::NewUser;
use crate::domains::users::UserData;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Login/register response body
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserData,
    pub token: String,
}

/// POST /api/auth/login
pub async fn login_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<LoginCredentials>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(credentials) = payload
        .map_err(|_| ApiError::BadRequest("Email and password are required".to_string()))?;

    let result = login(credentials, &state.jwt_service, &state.db_pool)
        .await
        .context("Login failed")?;

    match result {
        LoginResult::Authenticated { user, token } => Ok(Json(AuthResponse {
            user: user.into(),
            token,
        })),
        LoginResult::UnknownEmail => Err(ApiError::Unauthorized),
    }
}

/// POST /api/auth/register
pub async fn register_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let Json(input) =
        payload.map_err(|_| ApiError::BadRequest("Invalid user data".to_string()))?;

    let result = register(input, &state.jwt_service, &state.db_pool)
        .await
        .context("Registration failed")?;

    match result {
        RegisterResult::Registered { user, token } => Ok((
            StatusCode::CREATED,
            Json(AuthResponse {
                user: user.into(),
                token,
            }),
        )),
        RegisterResult::EmailTaken => Err(ApiError::BadRequest(
            "Email already registered".to_string(),
        )),
    }
}

/// POST /api/auth/logout
///
/// Tokens are not persisted server-side, so logout is a client-side
/// operation; the endpoint exists for API symmetry.
pub async fn logout_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Logged out successfully" }))
}
