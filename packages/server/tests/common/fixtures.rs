//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.
//! Tests share one database, so every row carries unique marker strings
//! (emails, blood groups, locations) to stay isolated.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use server_core::domains::donations::models::donation::{Donation, NewDonation};
use server_core::domains::matching::models::match_record::{Match, NewMatch};
use server_core::domains::users::models::user::{NewUser, User};

/// A unique email address for a test user
pub fn unique_email(tag: &str) -> String {
    format!("{}-{}@example.com", tag, Uuid::new_v4())
}

/// A unique free-form marker (blood group / location) for test isolation
pub fn unique_marker(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Create an available test user of the given type
pub async fn create_test_user(
    pool: &PgPool,
    user_type: &str,
    blood_group: &str,
    location: &str,
) -> Result<User> {
    User::create(
        NewUser {
            name: format!("Test {}", user_type),
            email: unique_email(user_type),
            phone: None,
            blood_group: blood_group.to_string(),
            location: location.to_string(),
            age: 30,
            weight: None,
            user_type: user_type.to_string(),
            is_available: Some(true),
            last_donation: None,
            medical_conditions: None,
            emergency_contact: None,
        },
        pool,
    )
    .await
}

/// Create an unavailable test user of the given type
pub async fn create_unavailable_test_user(
    pool: &PgPool,
    user_type: &str,
    blood_group: &str,
    location: &str,
) -> Result<User> {
    User::create(
        NewUser {
            name: format!("Unavailable {}", user_type),
            email: unique_email(user_type),
            phone: None,
            blood_group: blood_group.to_string(),
            location: location.to_string(),
            age: 30,
            weight: None,
            user_type: user_type.to_string(),
            is_available: Some(false),
            last_donation: None,
            medical_conditions: None,
            emergency_contact: None,
        },
        pool,
    )
    .await
}

/// Create a test donation
pub async fn create_test_donation(
    pool: &PgPool,
    donor_id: Option<i32>,
    blood_group: &str,
    status: &str,
    urgency: &str,
) -> Result<Donation> {
    Donation::create(
        NewDonation {
            donor_id,
            seeker_id: None,
            blood_group: blood_group.to_string(),
            amount: None,
            donation_type: "whole_blood".to_string(),
            location: "Test Donation Center".to_string(),
            status: Some(status.to_string()),
            urgency: Some(urgency.to_string()),
            scheduled_date: None,
            completed_date: None,
        },
        pool,
    )
    .await
}

/// Create a test match
pub async fn create_test_match(
    pool: &PgPool,
    donor_id: Option<i32>,
    seeker_id: Option<i32>,
    blood_group: &str,
    status: &str,
    compatibility_score: Option<i32>,
) -> Result<Match> {
    Match::create(
        NewMatch {
            donor_id,
            seeker_id,
            blood_group: blood_group.to_string(),
            distance: None,
            compatibility_score,
            status: Some(status.to_string()),
        },
        pool,
    )
    .await
}
