//! Shared test helpers for integration tests.
//!
//! These tests exercise the real router against a live PostgreSQL
//! instance; run them with a `config/test.toml` pointing at a throwaway
//! database, e.g. `cargo test -- --ignored --test-threads=1`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use villastay_api::state::AppState;
use villastay_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct assertions on stored state
    pub db_pool: PgPool,
}

/// A decoded response from the router.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Decoded JSON body; `Null` for bodiless responses.
    pub body: Value,
    /// `Location` header, if any.
    pub location: Option<String>,
}

impl TestApp {
    /// Create a new test application against a clean database.
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = villastay_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        villastay_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = AppState::new(config, db_pool.clone());
        let router = villastay_api::router::build_router(state);

        Self { router, db_pool }
    }

    /// Reset both tables and identity sequences.
    async fn clean_database(pool: &PgPool) {
        sqlx::query("TRUNCATE villa_numbers, villas RESTART IDENTITY CASCADE")
            .execute(pool)
            .await
            .expect("Failed to clean database");
    }

    /// Send a request and decode the response.
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Body is not JSON")
        };

        TestResponse {
            status,
            body,
            location,
        }
    }

    /// Create a villa directly through the API and return its id.
    pub async fn create_villa(&self, name: &str) -> i32 {
        let response = self
            .request(
                "POST",
                "/api/villas",
                Some(serde_json::json!({
                    "name": name,
                    "details": "test villa",
                    "rate": 150.0,
                    "sqft": 100,
                    "occupancy": 4,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["result"]["id"]
            .as_i64()
            .expect("created villa id") as i32
    }
}
