use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

/// User model - SQL persistence layer
///
/// A user is either a donor or a seeker. The medical profile columns
/// (blood group, location, availability) drive the lookup queries used
/// for matching.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub blood_group: String,
    pub location: String,
    pub age: i32,
    pub weight: Option<Decimal>,
    pub user_type: String, // "donor" or "seeker"
    pub is_available: Option<bool>,
    pub last_donation: Option<DateTime<Utc>>,
    pub medical_conditions: Option<String>,
    pub emergency_contact: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a user row.
///
/// Status-like columns stay free-form text; nothing beyond column types is
/// validated here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub blood_group: String,
    pub location: String,
    pub age: i32,
    pub weight: Option<Decimal>,
    pub user_type: String,
    pub is_available: Option<bool>,
    pub last_donation: Option<DateTime<Utc>>,
    pub medical_conditions: Option<String>,
    pub emergency_contact: Option<String>,
}

/// Partial update payload; absent fields leave the column unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub blood_group: Option<String>,
    pub location: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<Decimal>,
    pub user_type: Option<String>,
    pub is_available: Option<bool>,
    pub last_donation: Option<DateTime<Utc>>,
    pub medical_conditions: Option<String>,
    pub emergency_contact: Option<String>,
}

impl User {
    /// Find user by ID
    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find user by email (unique column)
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Check whether an email is already registered
    pub async fn email_exists(email: &str, pool: &PgPool) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
    }

    /// Find all users
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Find available users of a type by blood group
    pub async fn find_by_blood_group(
        blood_group: &str,
        user_type: &str,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM users
             WHERE blood_group = $1
               AND user_type = $2
               AND is_available = TRUE
             ORDER BY created_at DESC",
        )
        .bind(blood_group)
        .bind(user_type)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Find available users of a type by location
    pub async fn find_by_location(
        location: &str,
        user_type: &str,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM users
             WHERE location = $1
               AND user_type = $2
               AND is_available = TRUE
             ORDER BY created_at DESC",
        )
        .bind(location)
        .bind(user_type)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert a new user row
    ///
    /// Availability defaults to TRUE when the payload leaves it unset.
    pub async fn create(input: NewUser, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (
                name, email, phone, blood_group, location, age, weight,
                user_type, is_available, last_donation, medical_conditions,
                emergency_contact
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, TRUE), $10, $11, $12)
             RETURNING *",
        )
        .bind(input.name)
        .bind(input.email)
        .bind(input.phone)
        .bind(input.blood_group)
        .bind(input.location)
        .bind(input.age)
        .bind(input.weight)
        .bind(input.user_type)
        .bind(input.is_available)
        .bind(input.last_donation)
        .bind(input.medical_conditions)
        .bind(input.emergency_contact)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Apply a partial update and bump updated_at
    pub async fn update(id: i32, updates: UserUpdate, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                blood_group = COALESCE($5, blood_group),
                location = COALESCE($6, location),
                age = COALESCE($7, age),
                weight = COALESCE($8, weight),
                user_type = COALESCE($9, user_type),
                is_available = COALESCE($10, is_available),
                last_donation = COALESCE($11, last_donation),
                medical_conditions = COALESCE($12, medical_conditions),
                emergency_contact = COALESCE($13, emergency_contact),
                updated_at = now()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(updates.name)
        .bind(updates.email)
        .bind(updates.phone)
        .bind(updates.blood_group)
        .bind(updates.location)
        .bind(updates.age)
        .bind(updates.weight)
        .bind(updates.user_type)
        .bind(updates.is_available)
        .bind(updates.last_donation)
        .bind(updates.medical_conditions)
        .bind(updates.emergency_contact)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a user row, returning whether a row was removed
    pub async fn delete(id: i32, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
