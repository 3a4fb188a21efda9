//! Automatic match creation for a blood group

use anyhow::Result;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::domains::matching::models::match_record::{Match, NewMatch};
use crate::domains::matching::utils::compatibility::{compatibility_score, AUTO_MATCH_THRESHOLD};
use crate::domains::users::models::user::User;

/// Result of an automatic matching pass
#[derive(Debug, Clone, Copy)]
pub struct AutoMatchResult {
    /// Number of match rows created
    pub created: u32,
}

/// Pair every available donor of a blood group with every available seeker
/// of the same group, and persist a pending match for each pair scoring at
/// least [`AUTO_MATCH_THRESHOLD`].
pub async fn create_automatic_matches(blood_group: &str, pool: &PgPool) -> Result<AutoMatchResult> {
    let donors = User::find_by_blood_group(blood_group, "donor", pool).await?;
    let seekers = User::find_by_blood_group(blood_group, "seeker", pool).await?;

    info!(
        blood_group,
        donors = donors.len(),
        seekers = seekers.len(),
        "Running automatic matching"
    );

    let mut created = 0;

    for seeker in &seekers {
        for donor in &donors {
            let score = compatibility_score(donor, seeker);

            if score < AUTO_MATCH_THRESHOLD {
                debug!(
                    donor_id = donor.id,
                    seeker_id = seeker.id,
                    score,
                    "Pair below threshold, skipping"
                );
                continue;
            }

            let input = NewMatch {
                donor_id: Some(donor.id),
                seeker_id: Some(seeker.id),
                blood_group: blood_group.to_string(),
                distance: Some(estimate_distance(&donor.location, &seeker.location)),
                compatibility_score: Some(score),
                status: None,
            };

            Match::create(input, pool).await?;
            created += 1;
        }
    }

    info!(blood_group, created, "Automatic matching complete");

    Ok(AutoMatchResult { created })
}

/// Distance between two free-form locations, in miles.
///
/// Zero when the strings are equal ignoring case; otherwise a random value
/// in [1, 51). Placeholder until a geocoding service is wired in.
fn estimate_distance(a: &str, b: &str) -> Decimal {
    if a.eq_ignore_ascii_case(b) {
        return Decimal::ZERO;
    }

    let miles = rand::thread_rng().gen_range(1.0..51.0);
    Decimal::from_f64(miles).unwrap_or(Decimal::ONE).round_dp(1)
}
