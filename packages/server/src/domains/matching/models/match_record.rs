use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

/// Match model - SQL persistence layer
///
/// A proposed donor/seeker pairing. Status moves through
/// pending/accepted/declined.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Match {
    pub id: i32,
    pub donor_id: Option<i32>,
    pub seeker_id: Option<i32>,
    pub blood_group: String,
    pub distance: Option<Decimal>, // in miles
    pub compatibility_score: Option<i32>, // 0-100
    pub status: String, // "pending", "accepted", "declined"
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a match row
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub donor_id: Option<i32>,
    pub seeker_id: Option<i32>,
    pub blood_group: String,
    pub distance: Option<Decimal>,
    pub compatibility_score: Option<i32>,
    pub status: Option<String>,
}

/// Partial update payload; absent fields leave the column unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    pub donor_id: Option<i32>,
    pub seeker_id: Option<i32>,
    pub blood_group: Option<String>,
    pub distance: Option<Decimal>,
    pub compatibility_score: Option<i32>,
    pub status: Option<String>,
}

impl Match {
    /// Find match by ID
    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM matches WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find all matches
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM matches ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Find matches where the given user is the donor
    pub async fn find_by_donor(user_id: i32, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM matches WHERE donor_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find matches where the given user is the seeker
    pub async fn find_by_seeker(user_id: i32, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM matches WHERE seeker_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find matches by status
    pub async fn find_by_status(status: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM matches WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find pending matches for a blood group
    ///
    /// This is the whole candidate filter: blood group equality plus
    /// pending status. Location is not considered here.
    pub async fn find_potential(blood_group: &str, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM matches
             WHERE blood_group = $1 AND status = 'pending'
             ORDER BY created_at DESC",
        )
        .bind(blood_group)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find matches at or above a compatibility score, best first
    pub async fn find_high_compatibility(min_score: i32, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM matches
             WHERE compatibility_score >= $1
             ORDER BY compatibility_score DESC",
        )
        .bind(min_score)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert a new match row
    ///
    /// Status defaults to 'pending' when unset.
    pub async fn create(input: NewMatch, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO matches (
                donor_id, seeker_id, blood_group, distance,
                compatibility_score, status
             )
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'pending'))
             RETURNING *",
        )
        .bind(input.donor_id)
        .bind(input.seeker_id)
        .bind(input.blood_group)
        .bind(input.distance)
        .bind(input.compatibility_score)
        .bind(input.status)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Apply a partial update and bump updated_at
    pub async fn update(id: i32, updates: MatchUpdate, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE matches SET
                donor_id = COALESCE($2, donor_id),
                seeker_id = COALESCE($3, seeker_id),
                blood_group = COALESCE($4, blood_group),
                distance = COALESCE($5, distance),
                compatibility_score = COALESCE($6, compatibility_score),
                status = COALESCE($7, status),
                updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(updates.donor_id)
        .bind(updates.seeker_id)
        .bind(updates.blood_group)
        .bind(updates.distance)
        .bind(updates.compatibility_score)
        .bind(updates.status)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a match row, returning whether a row was removed
    pub async fn delete(id: i32, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
