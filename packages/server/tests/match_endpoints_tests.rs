//! Integration tests for match endpoints, including the candidate lookup
//! and automatic matching.

mod common;

use common::{
    create_test_match, create_test_user, create_unavailable_test_user, unique_marker, ApiClient,
    TestHarness,
};
use axum::http::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn create_match_defaults_to_pending(ctx: &TestHarness) {
    let client = ApiClient::new(ctx);
    let donor = create_test_user(&ctx.db_pool, "donor", "O-", "Springfield")
        .await
        .unwrap();
    let seeker = create_test_user(&ctx.db_pool, "seeker", "O-", "Springfield")
        .await
        .unwrap();

    let (status, body) = client
        .post(
            "/api/matches",
            json!({
                "donorId": donor.id,
                "seekerId": seeker.id,
                "bloodGroup": "O-",
                "compatibilityScore": 85
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["compatibilityScore"], 85);
    assert!(body["distance"].is_null());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn update_match_accepts_pairing(ctx: &TestHarness) {
    let client = ApiClient::new(ctx);
    let m = create_test_match(&ctx.db_pool, None, None, "A+", "pending", Some(70))
        .await
        .unwrap();

    let (status, body) = client
        .put(&format!("/api/matches/{}", m.id), json!({ "status": "accepted" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "accepted");
    assert_eq!(body["compatibilityScore"], 70);

    let (status, body) = client
        .put("/api/matches/999999", json!({ "status": "accepted" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Match not found");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn matches_by_user_lists_donor_side(ctx: &TestHarness) {
    let client = ApiClient::new(ctx);
    let donor = create_test_user(&ctx.db_pool, "donor", "B-", "Springfield")
        .await
        .unwrap();
    let seeker = create_test_user(&ctx.db_pool, "seeker", "B-", "Springfield")
        .await
        .unwrap();

    create_test_match(&ctx.db_pool, Some(donor.id), Some(seeker.id), "B-", "pending", None)
        .await
        .unwrap();

    let (status, body) = client.get(&format!("/api/matches/user/{}", donor.id)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["donorId"], donor.id);

    // The seeker side has its own listing
    let (status, body) = client
        .get(&format!("/api/matches/seeker/{}", seeker.id))
        .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["seekerId"], seeker.id);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn find_potential_filters_blood_group_and_pending(ctx: &TestHarness) {
    let client = ApiClient::new(ctx);
    let blood_group = unique_marker("bg");

    let pending = create_test_match(&ctx.db_pool, None, None, &blood_group, "pending", None)
        .await
        .unwrap();
    create_test_match(&ctx.db_pool, None, None, &blood_group, "accepted", None)
        .await
        .unwrap();
    create_test_match(&ctx.db_pool, None, None, &unique_marker("bg"), "pending", None)
        .await
        .unwrap();

    // The location segment is accepted but does not narrow the results
    let (status, body) = client
        .get(&format!("/api/matches/find/{}/Anywhere", blood_group))
        .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], pending.id);
    assert_eq!(rows[0]["status"], "pending");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn high_compatibility_filters_and_sorts(ctx: &TestHarness) {
    let client = ApiClient::new(ctx);
    let blood_group = unique_marker("bg");

    let strong = create_test_match(&ctx.db_pool, None, None, &blood_group, "pending", Some(95))
        .await
        .unwrap();
    let weak = create_test_match(&ctx.db_pool, None, None, &blood_group, "pending", Some(40))
        .await
        .unwrap();

    let (status, body) = client
        .get("/api/matches/high-compatibility?minScore=90")
        .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert!(rows.iter().any(|r| r["id"] == strong.id));
    assert!(!rows.iter().any(|r| r["id"] == weak.id));
    assert!(rows
        .iter()
        .all(|r| r["compatibilityScore"].as_i64().unwrap() >= 90));

    // Best matches come first
    let scores: Vec<i64> = rows
        .iter()
        .map(|r| r["compatibilityScore"].as_i64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn auto_match_pairs_available_donors_and_seekers(ctx: &TestHarness) {
    let client = ApiClient::new(ctx);
    let blood_group = unique_marker("bg");
    let location = unique_marker("loc");

    let donor = create_test_user(&ctx.db_pool, "donor", &blood_group, &location)
        .await
        .unwrap();
    let seeker = create_test_user(&ctx.db_pool, "seeker", &blood_group, &location)
        .await
        .unwrap();
    // Unavailable donors are excluded from the candidate pool entirely
    create_unavailable_test_user(&ctx.db_pool, "donor", &blood_group, &location)
        .await
        .unwrap();

    let (status, body) = client
        .post(&format!("/api/matches/auto-match/{}", blood_group), json!({}))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["created"], 1);

    let (status, body) = client.get(&format!("/api/matches/user/{}", donor.id)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["seekerId"], seeker.id);
    assert_eq!(rows[0]["status"], "pending");
    // Same blood group + same location + available donor = full score
    assert_eq!(rows[0]["compatibilityScore"], 100);
    // Identical locations collapse to zero distance
    assert_eq!(rows[0]["distance"], "0");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn auto_match_without_seekers_creates_nothing(ctx: &TestHarness) {
    let client = ApiClient::new(ctx);
    let blood_group = unique_marker("bg");

    create_test_user(&ctx.db_pool, "donor", &blood_group, "Springfield")
        .await
        .unwrap();

    let (status, body) = client
        .post(&format!("/api/matches/auto-match/{}", blood_group), json!({}))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["created"], 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn delete_match_removes_row(ctx: &TestHarness) {
    let client = ApiClient::new(ctx);
    let m = create_test_match(&ctx.db_pool, None, None, "AB+", "pending", None)
        .await
        .unwrap();

    let (status, _) = client.delete(&format!("/api/matches/{}", m.id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = client.get(&format!("/api/matches/{}", m.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Match not found");
}
