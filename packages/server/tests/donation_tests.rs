//! Integration tests for the donation endpoint.

mod common;

use crate::common::*;
use axum::http::StatusCode;
use serde_json::json;
use server_core::kernel::test_dependencies::{MockMailer, MockPaymentGateway};
use server_core::server::error::PAYMENT_ERROR_MESSAGE;
use test_context::test_context;

async fn donations_from(ctx: &TestHarness, email: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM donations WHERE donor_email = $1")
        .bind(email)
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap()
}

fn donor_email() -> String {
    format!("{}@example.com", unique_token())
}

#[test_context(TestHarness)]
#[tokio::test]
async fn one_time_donation_creates_intent_and_record(ctx: &mut TestHarness) {
    let email = donor_email();

    let response = ctx
        .http()
        .post_json(
            "/process-donation/",
            &json!({
                "amount": "25.50",
                "donation_type": "one_time",
                "donor_name": "Jane Doe",
                "donor_email": email,
                "message": "Keep going!",
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["client_secret"], "pi_mock_1_secret");
    assert!(body["donation_id"].as_str().is_some());

    let calls = ctx.payments.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].amount_cents, 2550);
    assert_eq!(calls[0].currency, "usd");
    assert_eq!(calls[0].metadata["donor_email"], email);
    assert_eq!(calls[0].metadata["donation_type"], "one_time");
    assert!(!calls[0].save_for_future_use);

    let stripe_id: String =
        sqlx::query_scalar("SELECT stripe_payment_id FROM donations WHERE donor_email = $1")
            .bind(&email)
            .fetch_one(&ctx.db_pool)
            .await
            .unwrap();
    assert_eq!(stripe_id, "pi_mock_1");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn monthly_donation_saves_card_for_future_use(ctx: &mut TestHarness) {
    let response = ctx
        .http()
        .post_json(
            "/process-donation/",
            &json!({
                "amount": 10,
                "donation_type": "monthly",
                "donor_name": "Kofi",
                "donor_email": donor_email(),
                "is_anonymous": true,
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let calls = ctx.payments.calls();
    assert_eq!(calls[0].amount_cents, 1000);
    assert!(calls[0].save_for_future_use);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn invalid_amount_is_rejected_before_payment(ctx: &mut TestHarness) {
    let email = donor_email();

    let response = ctx
        .http()
        .post_json(
            "/process-donation/",
            &json!({
                "amount": "0.50",
                "donation_type": "one_time",
                "donor_name": "Jane",
                "donor_email": email,
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert!(body["errors"]["amount"].is_array());
    assert_eq!(ctx.payments.call_count(), 0);
    assert_eq!(donations_from(ctx, &email).await, 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn fraction_of_a_cent_is_rejected_before_payment(ctx: &mut TestHarness) {
    let email = donor_email();

    let response = ctx
        .http()
        .post_json(
            "/process-donation/",
            &json!({
                "amount": "1.005",
                "donation_type": "one_time",
                "donor_name": "Jane",
                "donor_email": email,
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["errors"]["amount"][0],
        "Ensure that there are no more than 2 decimal places."
    );
    assert_eq!(ctx.payments.call_count(), 0);
    assert_eq!(donations_from(ctx, &email).await, 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_donation_type_is_rejected(ctx: &mut TestHarness) {
    let response = ctx
        .http()
        .post_json(
            "/process-donation/",
            &json!({
                "amount": "5",
                "donation_type": "weekly",
                "donor_name": "Jane",
                "donor_email": donor_email(),
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["errors"]["donation_type"].is_array());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn malformed_json_is_bad_request(ctx: &mut TestHarness) {
    let response = ctx
        .http()
        .post_raw_json("/process-donation/", "{not json")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["success"], false);
    assert_eq!(ctx.payments.call_count(), 0);
}

#[tokio::test]
async fn payment_failure_records_nothing() {
    let ctx = TestHarness::with_mocks(
        MockPaymentGateway::failing("card_declined"),
        MockMailer::new(),
    )
    .await
    .unwrap();
    let email = donor_email();

    let response = ctx
        .http()
        .post_json(
            "/process-donation/",
            &json!({
                "amount": "50",
                "donation_type": "one_time",
                "donor_name": "Jane",
                "donor_email": email,
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["error"], PAYMENT_ERROR_MESSAGE);
    // Processor details never reach the visitor
    assert!(!response.body.contains("card_declined"));
    assert_eq!(donations_from(&ctx, &email).await, 0);
}
