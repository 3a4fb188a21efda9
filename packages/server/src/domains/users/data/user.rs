use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domains::users::models::user::User;

/// User REST data type
///
/// Public API representation of a user (for JSON responses). Field names
/// serialize in camelCase to match the client wire format.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: i32,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            blood_group: user.blood_group,
            location: user.location,
            age: user.age,
            weight: user.weight,
            user_type: user.user_type,
            is_available: user.is_available,
            last_donation: user.last_donation,
            medical_conditions: user.medical_conditions,
            emergency_contact: user.emergency_contact,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
