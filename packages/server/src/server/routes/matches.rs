//! Match routes - pairing record CRUD, candidate lookup and auto-matching

use anyhow::Context;
use axum::{
    extract::{Extension, Path, Query},
    extract::rejection::JsonRejection,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::domains::matching::actions::create_automatic_matches;
use crate::domains::matching::models::match_record::{Match, MatchUpdate, NewMatch};
use crate::domains::matching::MatchData;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// GET /api/matches
pub async fn list_matches(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<MatchData>>, ApiError> {
    let matches = Match::find_all(&state.db_pool)
        .await
        .context("Failed to fetch matches")?;

    Ok(Json(matches.into_iter().map(Into::into).collect()))
}

/// GET /api/matches/:id
pub async fn get_match(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MatchData>, ApiError> {
    let m = Match::find_by_id(id, &state.db_pool)
        .await
        .context("Failed to fetch match")?
        .ok_or(ApiError::NotFound("Match"))?;

    Ok(Json(m.into()))
}

/// POST /api/matches
pub async fn create_match(
    Extension(state): Extension<AppState>,
    payload: Result<Json<NewMatch>, JsonRejection>,
) -> Result<(StatusCode, Json<MatchData>), ApiError> {
    let Json(input) =
        payload.map_err(|_| ApiError::BadRequest("Invalid match data".to_string()))?;

    let m = Match::create(input, &state.db_pool)
        .await
        .context("Failed to create match")?;

    Ok((StatusCode::CREATED, Json(m.into())))
}

/// PUT /api/matches/:id
pub async fn update_match(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<MatchUpdate>, JsonRejection>,
) -> Result<Json<MatchData>, ApiError> {
    let Json(updates) =
        payload.map_err(|_| ApiError::BadRequest("Invalid match data".to_string()))?;

    let m = Match::update(id, updates, &state.db_pool)
        .await
        .context("Failed to update match")?
        .ok_or(ApiError::NotFound("Match"))?;

    Ok(Json(m.into()))
}

/// DELETE /api/matches/:id
pub async fn delete_match(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = Match::delete(id, &state.db_pool)
        .await
        .context("Failed to delete match")?;

    if !deleted {
        return Err(ApiError::NotFound("Match"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/matches/user/:user_id
///
/// Lists matches where the user is the donor.
pub async fn get_matches_by_user(
    Extension(state): Extension<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<MatchData>>, ApiError> {
    let matches = Match::find_by_donor(user_id, &state.db_pool)
        .await
        .context("Failed to fetch user matches")?;

    Ok(Json(matches.into_iter().map(Into::into).collect()))
}

/// GET /api/matches/seeker/:seeker_id
pub async fn get_matches_by_seeker(
    Extension(state): Extension<AppState>,
    Path(seeker_id): Path<i32>,
) -> Result<Json<Vec<MatchData>>, ApiError> {
    let matches = Match::find_by_seeker(seeker_id, &state.db_pool)
        .await
        .context("Failed to fetch seeker matches")?;

    Ok(Json(matches.into_iter().map(Into::into).collect()))
}

/// GET /api/matches/status/:status
pub async fn get_matches_by_status(
    Extension(state): Extension<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<MatchData>>, ApiError> {
    let matches = Match::find_by_status(&status, &state.db_pool)
        .await
        .context("Failed to fetch matches by status")?;

    Ok(Json(matches.into_iter().map(Into::into).collect()))
}

/// GET /api/matches/find/:blood_group/:location
///
/// The location segment is part of the public route shape but does not
/// filter yet; candidates are pending matches of the blood group.
pub async fn find_potential_matches(
    Extension(state): Extension<AppState>,
    Path((blood_group, _location)): Path<(String, String)>,
) -> Result<Json<Vec<MatchData>>, ApiError> {
    let matches = Match::find_potential(&blood_group, &state.db_pool)
        .await
        .context("Failed to find potential matches")?;

    Ok(Json(matches.into_iter().map(Into::into).collect()))
}

#[derive(Debug, Deserialize)]
pub struct HighCompatibilityParams {
    #[serde(rename = "minScore", default = "default_min_score")]
    pub min_score: i32,
}

fn default_min_score() -> i32 {
    80
}

/// GET /api/matches/high-compatibility?minScore=80
pub async fn get_high_compatibility_matches(
    Extension(state): Extension<AppState>,
    Query(params): Query<HighCompatibilityParams>,
) -> Result<Json<Vec<MatchData>>, ApiError> {
    let matches = Match::find_high_compatibility(params.min_score, &state.db_pool)
        .await
        .context("Failed to fetch high compatibility matches")?;

    Ok(Json(matches.into_iter().map(Into::into).collect()))
}

/// POST /api/matches/auto-match/:blood_group
pub async fn auto_match(
    Extension(state): Extension<AppState>,
    Path(blood_group): Path<String>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let result = create_automatic_matches(&blood_group, &state.db_pool)
        .await
        .context("Failed to create automatic matches")?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("Automatic matches created for blood group: {}", blood_group),
            "created": result.created,
        })),
    ))
}
