use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domains::donations::models::donation::Donation;

/// Donation REST data type (public API representation)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationData {
    pub id: i32,
    pub donor_id: Option<i32>,
    pub seeker_id: Option<i32>,
    pub blood_group: String,
    pub amount: Option<Decimal>,
    pub donation_type: String,
    pub location: String,
    pub status: String,
    pub urgency: String,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Donation> for DonationData {
    fn from(donation: Donation) -> Self {
        Self {
            id: donation.id,
            donor_id: donation.donor_id,
            seeker_id: donation.seeker_id,
            blood_group: donation.blood_group,
            amount: donation.amount,
            donation_type: donation.donation_type,
            location: donation.location,
            status: donation.status,
            urgency: donation.urgency,
            scheduled_date: donation.scheduled_date,
            completed_date: donation.completed_date,
            created_at: donation.created_at,
            updated_at: donation.updated_at,
        }
    }
}
