//! Donation routes - donation record CRUD and lookups

use anyhow::Context;
use axum::{
    extract::{Extension, Path},
    extract::rejection::JsonRejection,
    http::StatusCode,
    Json,
};

use crate::domains::donations::models::donation::{Donation, DonationUpdate, NewDonation};
use crate::domains::donations::DonationData;
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// GET /api/donations
pub async fn list_donations(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<DonationData>>, ApiError> {
    let donations = Donation::find_all(&state.db_pool)
        .await
        .context("Failed to fetch donations")?;

    Ok(Json(donations.into_iter().map(Into::into).collect()))
}

/// GET /api/donations/:id
pub async fn get_donation(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DonationData>, ApiError> {
    let donation = Donation::find_by_id(id, &state.db_pool)
        .await
        .context("Failed to fetch donation")?
        .ok_or(ApiError::NotFound("Donation"))?;

    Ok(Json(donation.into()))
}

/// POST /api/donations
pub async fn create_donation(
    Extension(state): Extension<AppState>,
    payload: Result<Json<NewDonation>, JsonRejection>,
) -> Result<(StatusCode, Json<DonationData>), ApiError> {
    let Json(input) =
        payload.map_err(|_| ApiError::BadRequest("Invalid donation data".to_string()))?;

    let donation = Donation::create(input, &state.db_pool)
        .await
        .context("Failed to create donation")?;

    Ok((StatusCode::CREATED, Json(donation.into())))
}

/// PUT /api/donations/:id
pub async fn update_donation(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<DonationUpdate>, JsonRejection>,
) -> Result<Json<DonationData>, ApiError> {
    let Json(updates) =
        payload.map_err(|_| ApiError::BadRequest("Invalid donation data".to_string()))?;

    let donation = Donation::update(id, updates, &state.db_pool)
        .await
        .context("Failed to update donation")?
        .ok_or(ApiError::NotFound("Donation"))?;

    Ok(Json(donation.into()))
}

/// DELETE /api/donations/:id
pub async fn delete_donation(
    Extension(state): Extension<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = Donation::delete(id, &state.db_pool)
        .await
        .context("Failed to delete donation")?;

    if !deleted {
        return Err(ApiError::NotFound("Donation"));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/donations/user/:user_id
///
/// Lists donations where the user is the donor.
pub async fn get_donations_by_user(
    Extension(state): Extension<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<DonationData>>, ApiError> {
    let donations = Donation::find_by_donor(user_id, &state.db_pool)
        .await
        .context("Failed to fetch user donations")?;

    Ok(Json(donations.into_iter().map(Into::into).collect()))
}

/// GET /api/donations/seeker/:seeker_id
pub async fn get_donations_by_seeker(
    Extension(state): Extension<AppState>,
    Path(seeker_id): Path<i32>,
) -> Result<Json<Vec<DonationData>>, ApiError> {
    let donations = Donation::find_by_seeker(seeker_id, &state.db_pool)
        .await
        .context("Failed to fetch seeker donations")?;

    Ok(Json(donations.into_iter().map(Into::into).collect()))
}

/// GET /api/donations/blood-group/:blood_group
pub async fn get_donations_by_blood_group(
    Extension(state): Extension<AppState>,
    Path(blood_group): Path<String>,
) -> Result<Json<Vec<DonationData>>, ApiError> {
    let donations = Donation::find_by_blood_group(&blood_group, &state.db_pool)
        .await
        .context("Failed to fetch donations by blood group")?;

    Ok(Json(donations.into_iter().map(Into::into).collect()))
}

/// GET /api/donations/status/:status
pub async fn get_donations_by_status(
    Extension(state): Extension<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<DonationData>>, ApiError> {
    let donations = Donation::find_by_status(&status, &state.db_pool)
        .await
        .context("Failed to fetch donations by status")?;

    Ok(Json(donations.into_iter().map(Into::into).collect()))
}

/// GET /api/donations/urgency/:urgency
pub async fn get_donations_by_urgency(
    Extension(state): Extension<AppState>,
    Path(urgency): Path<String>,
) -> Result<Json<Vec<DonationData>>, ApiError> {
    let donations = Donation::find_by_urgency(&urgency, &state.db_pool)
        .await
        .context("Failed to fetch donations by urgency")?;

    Ok(Json(donations.into_iter().map(Into::into).collect()))
}

/// GET /api/donations/critical
pub async fn get_critical_pending_donations(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<DonationData>>, ApiError> {
    let donations = Donation::find_critical_pending(&state.db_pool)
        .await
        .context("Failed to fetch critical donations")?;

    Ok(Json(donations.into_iter().map(Into::into).collect()))
}
