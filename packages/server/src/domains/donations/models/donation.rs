use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

/// Donation model - SQL persistence layer
///
/// Links a donor and a seeker and records what was (or is scheduled to be)
/// donated. Status moves through pending/completed/cancelled; urgency is
/// critical or normal. Neither is enforced beyond column types.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Donation {
    pub id: i32,
    pub donor_id: Option<i32>,
    pub seeker_id: Option<i32>,
    pub blood_group: String,
    pub amount: Option<Decimal>, // in ml
    pub donation_type: String,   // "whole_blood", "platelets", "plasma"
    pub location: String,
    pub status: String,  // "pending", "completed", "cancelled"
    pub urgency: String, // "critical", "normal"
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a donation row
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub donor_id: Option<i32>,
    pub seeker_id: Option<i32>,
    pub blood_group: String,
    pub amount: Option<Decimal>,
    pub donation_type: String,
    pub location: String,
    pub status: Option<String>,
    pub urgency: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
}

/// Partial update payload; absent fields leave the column unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationUpdate {
    pub donor_id: Option<i32>,
    pub seeker_id: Option<i32>,
    pub blood_group: Option<String>,
    pub amount: Option<Decimal>,
    pub donation_type: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub urgency: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
}

impl Donation {
    /// Find donation by ID
    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM donations WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find all donations
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM donations ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Find donations where the given user is the donor
    pub async fn find_by_donor(user_id: i32, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM donations WHERE donor_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find donations where the given user is the seeker
    pub async fn find_by_seeker(user_id: i32, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM donations WHERE seeker_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find donations by blood group
    pub async fn find_by_blood_group(blood_group: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM donations WHERE blood_group = $1 ORDER BY created_at DESC",
        )
        .bind(blood_group)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find donations by status
    pub async fn find_by_status(status: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM donations WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find donations by urgency
    pub async fn find_by_urgency(urgency: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM donations WHERE urgency = $1 ORDER BY created_at DESC",
        )
        .bind(urgency)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find critical donations that are still pending
    pub async fn find_critical_pending(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM donations
             WHERE urgency = 'critical' AND status = 'pending'
             ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert a new donation row
    ///
    /// Status defaults to 'pending' and urgency to 'normal' when unset.
    pub async fn create(input: NewDonation, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO donations (
                donor_id, seeker_id, blood_group, amount, donation_type,
                location, status, urgency, scheduled_date, completed_date
             )
             VALUES ($1, $2, $3, $4, $5, $6,
                     COALESCE($7, 'pending'), COALESCE($8, 'normal'), $9, $10)
             RETURNING *",
        )
        .bind(input.donor_id)
        .bind(input.seeker_id)
        .bind(input.blood_group)
        .bind(input.amount)
        .bind(input.donation_type)
        .bind(input.location)
        .bind(input.status)
        .bind(input.urgency)
        .bind(input.scheduled_date)
        .bind(input.completed_date)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Apply a partial update and bump updated_at
    pub async fn update(
        id: i32,
        updates: DonationUpdate,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE donations SET
                donor_id = COALESCE($2, donor_id),
                seeker_id = COALESCE($3, seeker_id),
                blood_group = COALESCE($4, blood_group),
                amount = COALESCE($5, amount),
                donation_type = COALESCE($6, donation_type),
                location = COALESCE($7, location),
                status = COALESCE($8, status),
                urgency = COALESCE($9, urgency),
                scheduled_date = COALESCE($10, scheduled_date),
                completed_date = COALESCE($11, completed_date),
                updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(updates.donor_id)
        .bind(updates.seeker_id)
        .bind(updates.blood_group)
        .bind(updates.amount)
        .bind(updates.donation_type)
        .bind(updates.location)
        .bind(updates.status)
        .bind(updates.urgency)
        .bind(updates.scheduled_date)
        .bind(updates.completed_date)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a donation row, returning whether a row was removed
    pub async fn delete(id: i32, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM donations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
