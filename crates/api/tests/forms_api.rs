mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{assert_status, build_test_app, post_json};

// ---------------------------------------------------------------------------
// POST /api/contact
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_with_all_fields_creates_submission_and_lead() {
    let (app, store) = build_test_app();

    let response = post_json(
        &app,
        "/api/contact",
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "(305) 555-0100",
            "message": "How late are you open on Saturdays?"
        }),
    )
    .await;

    let body = assert_status(response, StatusCode::OK).await;
    assert_eq!(body["success"], serde_json::Value::Bool(true));
    assert!(body["id"].is_string());

    // One contact record plus one CRM lead.
    assert_eq!(store.record_count().await, 2);
}

#[tokio::test]
async fn contact_missing_message_is_rejected_and_writes_nothing() {
    let (app, store) = build_test_app();

    let response = post_json(
        &app,
        "/api/contact",
        json!({ "name": "Jane Doe", "email": "jane@example.com" }),
    )
    .await;

    let body = assert_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["error"], "Name, email, and message are required");
    assert_eq!(store.record_count().await, 0);
}

#[tokio::test]
async fn contact_with_empty_strings_is_rejected_and_writes_nothing() {
    let (app, store) = build_test_app();

    // Present-but-blank fields fail the same required check as absent ones.
    let response = post_json(
        &app,
        "/api/contact",
        json!({ "name": "", "email": "", "message": "" }),
    )
    .await;

    let body = assert_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["error"], "Name, email, and message are required");
    assert_eq!(store.record_count().await, 0);
}

// ---------------------------------------------------------------------------
// POST /api/quote
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quote_accepts_loan_amount_as_string_or_number() {
    let (app, store) = build_test_app();

    let response = post_json(
        &app,
        "/api/quote",
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "(305) 555-0100",
            "loanAmount": "500",
            "city": "Miami",
            "state": "FL"
        }),
    )
    .await;
    assert_status(response, StatusCode::OK).await;

    let response = post_json(
        &app,
        "/api/quote",
        json!({
            "name": "John Doe",
            "email": "john@example.com",
            "phone": "(813) 555-0100",
            "loanAmount": 350
        }),
    )
    .await;
    assert_status(response, StatusCode::OK).await;

    // Two quotes plus two leads.
    assert_eq!(store.record_count().await, 4);
}

#[tokio::test]
async fn quote_missing_phone_is_rejected() {
    let (app, store) = build_test_app();

    let response = post_json(
        &app,
        "/api/quote",
        json!({ "name": "Jane Doe", "email": "jane@example.com" }),
    )
    .await;

    let body = assert_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["error"], "Name, email, and phone are required");
    assert_eq!(store.record_count().await, 0);
}

// ---------------------------------------------------------------------------
// POST /api/callback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn callback_requires_name_and_phone() {
    let (app, store) = build_test_app();

    let response = post_json(&app, "/api/callback", json!({ "name": "Jane Doe" })).await;
    let body = assert_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["error"], "Name and phone are required");

    let response = post_json(
        &app,
        "/api/callback",
        json!({
            "name": "Jane Doe",
            "phone": "(305) 555-0100",
            "preferredTime": "morning",
            "urgency": "today"
        }),
    )
    .await;
    assert_status(response, StatusCode::OK).await;

    // One callback plus one lead.
    assert_eq!(store.record_count().await, 2);
}

// ---------------------------------------------------------------------------
// POST /api/subscribe
// ---------------------------------------------------------------------------

#[tokio::test]
async fn subscribe_twice_keeps_a_single_subscriber() {
    let (app, store) = build_test_app();

    let first = post_json(
        &app,
        "/api/subscribe",
        json!({ "email": "jane@example.com", "city": "Miami", "state": "FL" }),
    )
    .await;
    let first_body = assert_status(first, StatusCode::OK).await;

    let second = post_json(&app, "/api/subscribe", json!({ "email": "jane@example.com" })).await;
    let second_body = assert_status(second, StatusCode::OK).await;

    assert_eq!(first_body["id"], second_body["id"]);
    assert_eq!(store.subscriber_count().await, 1);
}

#[tokio::test]
async fn callback_with_whitespace_phone_is_rejected() {
    let (app, store) = build_test_app();

    let response = post_json(
        &app,
        "/api/callback",
        json!({ "name": "Jane Doe", "phone": "   " }),
    )
    .await;

    let body = assert_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["error"], "Name and phone are required");
    assert_eq!(store.record_count().await, 0);
}

#[tokio::test]
async fn subscribe_ignores_email_casing() {
    let (app, store) = build_test_app();

    let first = post_json(&app, "/api/subscribe", json!({ "email": "Jane@Example.com" })).await;
    let first_body = assert_status(first, StatusCode::OK).await;

    let second = post_json(&app, "/api/subscribe", json!({ "email": "jane@example.com" })).await;
    let second_body = assert_status(second, StatusCode::OK).await;

    assert_eq!(first_body["id"], second_body["id"]);
    assert_eq!(store.subscriber_count().await, 1);
}

#[tokio::test]
async fn subscribe_rejects_malformed_email() {
    let (app, store) = build_test_app();

    let response = post_json(&app, "/api/subscribe", json!({ "email": "not-an-email" })).await;
    let body = assert_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(store.subscriber_count().await, 0);
}

#[tokio::test]
async fn subscribe_requires_an_email() {
    let (app, _store) = build_test_app();

    let response = post_json(&app, "/api/subscribe", json!({ "name": "Jane Doe" })).await;
    let body = assert_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["error"], "Email is required");
}
