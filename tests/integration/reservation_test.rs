//! Integration tests for station listing and reservation.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{STATIONS, TestApp, test_config};

fn generous_app(points: u32) -> TestApp {
    let mut config = test_config();
    config.reservation.points_per_window = points;
    TestApp::with_config(config)
}

#[tokio::test]
async fn test_list_stations_in_catalog_order() {
    let app = TestApp::new();

    let stations = app.stations().await;

    let names: Vec<&str> = stations.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, STATIONS);
    assert!(stations.iter().all(|(_, reserved)| !reserved));
}

#[tokio::test]
async fn test_reserve_success_marks_station() {
    let app = TestApp::new();

    let response = app.reserve("Nation", "10.0.0.1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true, "station": "Nation" }));

    let stations = app.stations().await;
    assert!(stations.contains(&("Nation".to_string(), true)));
    assert!(stations.contains(&("Bastille".to_string(), false)));
}

#[tokio::test]
async fn test_taken_station_is_rejected() {
    let app = TestApp::new();

    assert_eq!(app.reserve("Bastille", "10.0.0.1").await.status, StatusCode::OK);

    let response = app.reserve("Bastille", "10.0.0.2").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "CONFLICT");
    assert_eq!(
        app.state
            .reservations
            .registry()
            .held_by("Bastille")
            .await
            .unwrap()
            .as_str(),
        "10.0.0.1"
    );
}

#[tokio::test]
async fn test_second_attempt_in_window_is_rate_limited() {
    let app = TestApp::new();

    assert_eq!(app.reserve("Bastille", "10.0.0.1").await.status, StatusCode::OK);

    let response = app.reserve("Nation", "10.0.0.1").await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.error_code(), "RATE_LIMITED");
    assert!(!app.stations().await.contains(&("Nation".to_string(), true)));
}

#[tokio::test]
async fn test_identity_holds_at_most_one_station() {
    let app = generous_app(5);

    assert_eq!(app.reserve("Bastille", "10.0.0.1").await.status, StatusCode::OK);

    let response = app.reserve("Nation", "10.0.0.1").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "CONFLICT");
    assert_eq!(app.state.reservations.registry().reservation_count().await, 1);
}

#[tokio::test]
async fn test_unknown_station_spends_the_attempt() {
    let app = TestApp::new();

    let response = app.reserve("Atlantis", "10.0.0.1").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app.reserve("Bastille", "10.0.0.1").await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_missing_station_is_invalid() {
    let app = generous_app(2);

    let response = app
        .request("POST", "/api/reserve", Some(json!({})), Some("10.0.0.1"))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_non_string_station_is_invalid_and_spends_the_attempt() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/reserve",
            Some(json!({ "station": 42 })),
            Some("10.0.0.1"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert_eq!(app.state.reservations.limiter().tracked(), 1);

    assert_eq!(
        app.reserve("Bastille", "10.0.0.1").await.status,
        StatusCode::TOO_MANY_REQUESTS
    );
}

#[tokio::test]
async fn test_malformed_json_gets_error_body() {
    let app = TestApp::new();

    let response = app
        .request_raw(
            "POST",
            "/api/reserve",
            "{\"station\":",
            Some("application/json"),
            Some("10.0.0.1"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_body_without_json_content_type_is_ignored() {
    let app = TestApp::new();

    let response = app
        .request_raw(
            "POST",
            "/api/reserve",
            r#"{"station":"Bastille"}"#,
            None,
            Some("10.0.0.1"),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    assert_eq!(app.state.reservations.limiter().tracked(), 1);
}

#[tokio::test]
async fn test_slot_alias_is_accepted() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/reserve",
            Some(json!({ "slot": "Oberkampf" })),
            Some("10.0.0.1"),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["station"], "Oberkampf");
}

#[tokio::test]
async fn test_unidentifiable_client_is_rejected_without_spending() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/reserve",
            Some(json!({ "station": "Bastille" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.state.reservations.limiter().tracked(), 0);
}

#[tokio::test]
async fn test_mapped_ipv6_and_ipv4_share_a_budget() {
    let app = TestApp::new();

    assert_eq!(
        app.reserve("Bastille", "::ffff:10.0.0.1").await.status,
        StatusCode::OK
    );
    assert_eq!(
        app.reserve("Nation", "10.0.0.1").await.status,
        StatusCode::TOO_MANY_REQUESTS
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_claims_have_one_winner() {
    let app = std::sync::Arc::new(TestApp::new());

    let mut tasks = Vec::new();
    for i in 0..32 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            app.reserve("Bastille", &format!("10.1.0.{i}")).await.status
        }));
    }

    let mut winners = 0;
    for task in tasks {
        let status = task.await.unwrap();
        if status == StatusCode::OK {
            winners += 1;
        } else {
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }
    assert_eq!(winners, 1);
    assert_eq!(app.state.reservations.registry().reservation_count().await, 1);
}

#[tokio::test]
async fn test_health_reports_counts() {
    let app = TestApp::new();
    app.reserve("Nation", "10.0.0.1").await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["reservations"], 1);
    assert_eq!(response.body["stations"], STATIONS.len());
    assert_eq!(response.body["observers"], 0);
}

#[tokio::test]
async fn test_security_headers_on_every_response() {
    let app = TestApp::new();

    let ok = app.request("GET", "/api/stations", None, None).await;
    let rejected = app.reserve("Atlantis", "10.0.0.1").await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);

    for response in [&ok, &rejected] {
        assert_eq!(response.headers["x-content-type-options"], "nosniff");
        assert_eq!(response.headers["x-frame-options"], "SAMEORIGIN");
        assert_eq!(response.headers["referrer-policy"], "no-referrer");
        assert!(response.headers.contains_key("strict-transport-security"));
        assert!(response.headers.contains_key("content-security-policy"));
    }
}

#[tokio::test]
async fn test_security_headers_can_be_disabled() {
    let mut config = test_config();
    config.server.security_headers = false;
    let app = TestApp::with_config(config);

    let response = app.request("GET", "/api/stations", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.headers.contains_key("x-content-type-options"));
}
