use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domains::matching::models::match_record::Match;

/// Match REST data type (public API representation)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchData {
    pub id: i32,
    pub donor_id: Option<i32>,
    pub seeker_id: Option<i32>,
    pub blood_group: String,
    pub distance: Option<Decimal>,
    pub compatibility_score: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Match> for MatchData {
    fn from(m: Match) -> Self {
        Self {
            id: m.id,
            donor_id: m.donor_id,
            seeker_id: m.seeker_id,
            blood_group: m.blood_group,
            distance: m.distance,
            compatibility_score: m.compatibility_score,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
