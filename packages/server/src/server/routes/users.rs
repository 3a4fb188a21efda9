//! User routes - profile CRUD and donor/seeker lookups

use anyhow::Context;
use axum::{
    extract::{Extension, Path},
    extract::rejection::JsonRejection,
    http::StatusCode,
    Json,
};

use crate::domains::users::models::user::{NewUser, User, UserUpdate};
use crate::domains::users::UserData;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// GET /api/users
pub async fn list_users(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<UserData>>, ApiError> {
    let users = User::find_all(&state.db_pool)
        .await
        .context("Failed to fetch users")?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /api/users/:id
pub async fn get_user(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserData>, ApiError> {
    let user = User::find_by_id(id, &state.db_pool)
        .await
        .context("Failed to fetch user")?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(user.into()))
}

/// POST /api/users
pub async fn create_user(
    Extension(state): Extension<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<UserData>), ApiError> {
    let Json(input) =
        payload.map_err(|_| ApiError::BadRequest("Invalid user data".to_string()))?;

    let user = User::create(input, &state.db_pool)
        .await
        .context("Failed to create user")?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /api/users/:id
pub async fn update_user(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> Result<Json<UserData>, ApiError> {
    let Json(updates) =
        payload.map_err(|_| ApiError::BadRequest("Invalid user data".to_string()))?;

    let user = User::update(id, updates, &state.db_pool)
        .await
        .context("Failed to update user")?
        .ok_or(ApiError::NotFound("User"))?;

    Ok(Json(user.into()))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = User::delete(id, &state.db_pool)
        .await
        .context("Failed to delete user")?;

    if !deleted {
        return Err(ApiError::NotFound("User"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/users/blood-group/:blood_group/:user_type
pub async fn get_users_by_blood_group(
    Extension(state): Extension<AppState>,
    Path((blood_group, user_type)): Path<(String, String)>,
) -> Result<Json<Vec<UserData>>, ApiError> {
    let users = User::find_by_blood_group(&blood_group, &user_type, &state.db_pool)
        .await
        .context("Failed to fetch users by blood group")?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /api/users/location/:location/:user_type
pub async fn get_users_by_location(
    Extension(state): Extension<AppState>,
    Path((location, user_type)): Path<(String, String)>,
) -> Result<Json<Vec<UserData>>, ApiError> {
    let users = User::find_by_location(&location, &user_type, &state.db_pool)
        .await
        .context("Failed to fetch users by location")?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /api/users/donors/:blood_group
pub async fn get_available_donors(
    Extension(state): Extension<AppState>,
    Path(blood_group): Path<String>,
) -> Result<Json<Vec<UserData>>, ApiError> {
    let users = User::find_by_blood_group(&blood_group, "donor", &state.db_pool)
        .await
        .context("Failed to fetch donors")?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /api/users/seekers/:blood_group
pub async fn get_available_seekers(
    Extension(state): Extension<AppState>,
    Path(blood_group): Path<String>,
) -> Result<Json<Vec<UserData>>, ApiError> {
    let users = User::find_by_blood_group(&blood_group, "seeker", &state.db_pool)
        .await
        .context("Failed to fetch seekers")?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
