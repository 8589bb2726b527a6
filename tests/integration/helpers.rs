//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use metro_api::{AppState, build_app};
use metro_core::config::AppConfig;

/// Admin secret configured for every test application.
pub const ADMIN_KEY: &str = "test-admin-key";

/// Stations in the test catalog.
pub const STATIONS: [&str; 3] = ["Bastille", "Nation", "Oberkampf"];

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for driving the domain directly
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with a small catalog
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application from an explicit configuration
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::from_config(config);
        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Send a request as `client` (sent as `X-Forwarded-For`)
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        client: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(client) = client {
            req = req.header("X-Forwarded-For", client);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request through the router
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Send a raw body with an optional content type as `client`
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: &str,
        content_type: Option<&str>,
        client: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(content_type) = content_type {
            req = req.header("Content-Type", content_type);
        }
        if let Some(client) = client {
            req = req.header("X-Forwarded-For", client);
        }

        let req = req
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// POST /api/reserve as `client`
    pub async fn reserve(&self, station: &str, client: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/reserve",
            Some(serde_json::json!({ "station": station })),
            Some(client),
        )
        .await
    }

    /// GET /api/stations, as `(name, reserved)` pairs
    pub async fn stations(&self) -> Vec<(String, bool)> {
        let response = self.request("GET", "/api/stations", None, None).await;
        assert_eq!(response.status, StatusCode::OK);
        response
            .body
            .as_array()
            .expect("station list")
            .iter()
            .map(|s| {
                (
                    s["name"].as_str().expect("name").to_string(),
                    s["reserved"].as_bool().expect("reserved"),
                )
            })
            .collect()
    }
}

/// Default configuration with the test catalog and admin secret
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.catalog.stations = Some(STATIONS.iter().map(|s| s.to_string()).collect());
    config.admin.secret = ADMIN_KEY.to_string();
    config
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `error` code of an error body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
