//! Integration tests for the villa number endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_create_with_missing_villa_fails() {
    let app = common::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/villa-numbers",
            Some(json!({"villa_no": 101, "special_details": "corner unit", "villa_id": 9999})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["is_success"], false);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM villa_numbers")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_villa_number_lifecycle() {
    let app = common::TestApp::new().await;
    let villa_id = app.create_villa("Pool View").await;

    // Create with an externally assigned number
    let response = app
        .request(
            "POST",
            "/api/villa-numbers",
            Some(json!({"villa_no": 101, "special_details": "corner unit", "villa_id": villa_id})),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["result"]["villa_no"], 101);
    assert_eq!(response.location.as_deref(), Some("/api/villa-numbers/101"));

    // Duplicate number is rejected
    let response = app
        .request(
            "POST",
            "/api/villa-numbers",
            Some(json!({"villa_no": 101, "special_details": "other", "villa_id": villa_id})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Duplicate detail text is rejected case-insensitively
    let response = app
        .request(
            "POST",
            "/api/villa-numbers",
            Some(json!({"villa_no": 102, "special_details": "Corner Unit", "villa_id": villa_id})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    // Read
    let response = app.request("GET", "/api/villa-numbers/101", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["result"]["special_details"], "corner unit");

    // Delete
    let response = app.request("DELETE", "/api/villa-numbers/101", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", "/api/villa-numbers/101", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_update_villa_no_mismatch_is_bad_request() {
    let app = common::TestApp::new().await;
    let villa_id = app.create_villa("Pool View").await;
    app.request(
        "POST",
        "/api/villa-numbers",
        Some(json!({"villa_no": 101, "special_details": "corner unit", "villa_id": villa_id})),
    )
    .await;

    let response = app
        .request(
            "PUT",
            "/api/villa-numbers/101",
            Some(json!({"villa_no": 102, "special_details": "renamed", "villa_id": villa_id})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let details: String =
        sqlx::query_scalar("SELECT special_details FROM villa_numbers WHERE villa_no = 101")
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(details, "corner unit");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_patch_villa_number_detail() {
    let app = common::TestApp::new().await;
    let villa_id = app.create_villa("Pool View").await;
    app.request(
        "POST",
        "/api/villa-numbers",
        Some(json!({"villa_no": 101, "special_details": "corner unit", "villa_id": villa_id})),
    )
    .await;

    let response = app
        .request(
            "PATCH",
            "/api/villa-numbers/101",
            Some(json!([{"op": "replace", "path": "/special_details", "value": "sea facing"}])),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", "/api/villa-numbers/101", None).await;
    assert_eq!(response.body["result"]["special_details"], "sea facing");
    assert_eq!(response.body["result"]["villa_id"], villa_id);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_list_filtered_by_villa_and_cascade_delete() {
    let app = common::TestApp::new().await;
    let first = app.create_villa("Pool View").await;
    let second = app.create_villa("Beach View").await;

    for (no, details, villa_id) in [
        (101, "first unit", first),
        (102, "second unit", first),
        (201, "other villa unit", second),
    ] {
        let response = app
            .request(
                "POST",
                "/api/villa-numbers",
                Some(json!({"villa_no": no, "special_details": details, "villa_id": villa_id})),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request("GET", &format!("/api/villa-numbers?villa_id={first}"), None)
        .await;
    let items = response.body["result"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["villa_no"], 101);

    // Deleting the villa removes its units
    let response = app.request("DELETE", &format!("/api/villas/{first}"), None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM villa_numbers")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
