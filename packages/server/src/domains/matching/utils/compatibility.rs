//! Pure utility functions for donor/seeker compatibility scoring
//!
//! These functions contain NO side effects - they implement the scoring
//! used when matches are created automatically for a blood group.

use crate::domains::users::models::user::User;

/// Score contribution for an exact blood group match
pub const BLOOD_GROUP_WEIGHT: i32 = 50;

/// Score contribution for overlapping location strings
pub const LOCATION_WEIGHT: i32 = 30;

/// Score contribution for an available donor
pub const AVAILABILITY_WEIGHT: i32 = 20;

/// Minimum score at which an automatic match is persisted
pub const AUTO_MATCH_THRESHOLD: i32 = 50;

/// Score a (donor, seeker) pair on a 0-100 scale.
///
/// - +50 when blood groups are equal
/// - +30 when either location string contains the other (case-insensitive)
/// - +20 when the donor is available
///
/// The sum is capped at 100.
pub fn compatibility_score(donor: &User, seeker: &User) -> i32 {
    let mut score = 0;

    if donor.blood_group == seeker.blood_group {
        score += BLOOD_GROUP_WEIGHT;
    }

    if locations_overlap(&donor.location, &seeker.location) {
        score += LOCATION_WEIGHT;
    }

    if donor.is_available.unwrap_or(false) {
        score += AVAILABILITY_WEIGHT;
    }

    score.min(100)
}

/// Whether one location string contains the other, ignoring case.
///
/// Locations are free-form text ("Minneapolis", "Minneapolis, MN"), so
/// substring containment in either direction counts as overlap.
pub fn locations_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}
