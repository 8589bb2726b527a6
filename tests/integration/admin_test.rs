//! Integration tests for administrative release and reset.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{ADMIN_KEY, TestApp, test_config};

async fn release(app: &TestApp, station: &str, key: &str) -> helpers::TestResponse {
    app.request(
        "POST",
        "/api/release",
        Some(json!({ "station": station, "adminKey": key })),
        Some("192.0.2.1"),
    )
    .await
}

async fn reset_all(app: &TestApp, key: &str) -> helpers::TestResponse {
    app.request(
        "POST",
        "/api/reset-all",
        Some(json!({ "adminKey": key })),
        Some("192.0.2.1"),
    )
    .await
}

#[tokio::test]
async fn test_release_frees_station_but_not_budget() {
    let app = TestApp::new();
    app.reserve("Bastille", "10.0.0.1").await;

    let response = release(&app, "Bastille", ADMIN_KEY).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true }));
    assert!(app.stations().await.iter().all(|(_, reserved)| !reserved));

    // Released station is claimable by someone else
    assert_eq!(app.reserve("Bastille", "10.0.0.2").await.status, StatusCode::OK);

    // The original claimant's attempt stays spent
    assert_eq!(
        app.reserve("Nation", "10.0.0.1").await.status,
        StatusCode::TOO_MANY_REQUESTS
    );
}

#[tokio::test]
async fn test_release_with_wrong_key_is_forbidden() {
    let app = TestApp::new();
    app.reserve("Bastille", "10.0.0.1").await;

    let response = release(&app, "Bastille", "guess").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");
    assert!(app.stations().await.contains(&("Bastille".to_string(), true)));
}

#[tokio::test]
async fn test_release_checks_credential_before_state() {
    let app = TestApp::new();

    let response = release(&app, "Nation", "guess").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_release_of_free_station_is_rejected() {
    let app = TestApp::new();

    let response = release(&app, "Nation", ADMIN_KEY).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[tokio::test]
async fn test_admin_auth_alias_is_accepted() {
    let app = TestApp::new();
    app.reserve("Nation", "10.0.0.1").await;

    let response = app
        .request(
            "POST",
            "/api/release",
            Some(json!({ "station": "Nation", "adminAuth": ADMIN_KEY })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_reset_all_is_idempotent() {
    let app = TestApp::new();
    app.reserve("Bastille", "10.0.0.1").await;
    app.reserve("Nation", "10.0.0.2").await;

    assert_eq!(reset_all(&app, ADMIN_KEY).await.status, StatusCode::OK);
    assert!(app.stations().await.iter().all(|(_, reserved)| !reserved));
    assert_eq!(app.state.reservations.registry().reservation_count().await, 0);

    assert_eq!(reset_all(&app, ADMIN_KEY).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_reset_all_with_wrong_key_changes_nothing() {
    let app = TestApp::new();
    app.reserve("Bastille", "10.0.0.1").await;

    let response = reset_all(&app, "guess").await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.state.reservations.registry().reservation_count().await, 1);
}

#[tokio::test]
async fn test_admin_calls_without_json_body_are_forbidden() {
    let app = TestApp::new();
    app.reserve("Bastille", "10.0.0.1").await;

    let response = app
        .request_raw("POST", "/api/reset-all", "", None, Some("192.0.2.1"))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");

    let body = json!({ "station": "Bastille", "adminKey": ADMIN_KEY }).to_string();
    let response = app
        .request_raw("POST", "/api/release", &body, None, Some("192.0.2.1"))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.state.reservations.registry().reservation_count().await, 1);
}

#[tokio::test]
async fn test_admin_empty_json_body_is_forbidden() {
    let app = TestApp::new();

    let response = app
        .request_raw(
            "POST",
            "/api/reset-all",
            "",
            Some("application/json"),
            Some("192.0.2.1"),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_disabled_without_secret() {
    let mut config = test_config();
    config.admin.secret = String::new();
    let app = TestApp::with_config(config);

    assert_eq!(reset_all(&app, "").await.status, StatusCode::FORBIDDEN);
    assert_eq!(release(&app, "Nation", "").await.status, StatusCode::FORBIDDEN);
}
