//! Integration tests for the contact form.

mod common;

use crate::common::*;
use axum::http::StatusCode;
use server_core::kernel::test_dependencies::{MockMailer, MockPaymentGateway};
use server_core::server::views::pages::CONTACT_SUCCESS_MESSAGE;
use test_context::test_context;

async fn contacts_with_subject(ctx: &TestHarness, subject: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE subject = $1")
        .bind(subject)
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap()
}

#[test_context(TestHarness)]
#[tokio::test]
async fn valid_submission_stores_message_and_notifies_team(ctx: &mut TestHarness) {
    let subject = format!("Partnership {}", unique_token());

    let response = ctx
        .http()
        .post_form(
            "/contact/",
            &[
                ("name", "Jane Doe"),
                ("email", "jane@example.com"),
                ("subject", &subject),
                ("message", "We'd like to sponsor a workshop."),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/contact/?sent=1"));
    assert_eq!(contacts_with_subject(ctx, &subject).await, 1);

    let sent = ctx.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "team@gywan.org");
    assert_eq!(
        sent[0].subject,
        format!("New Contact Form Submission: {}", subject)
    );
    assert!(sent[0].body.contains("Name: Jane Doe"));
}

#[tokio::test]
async fn mail_failure_still_stores_message() {
    let ctx = TestHarness::with_mocks(MockPaymentGateway::new(), MockMailer::failing())
        .await
        .unwrap();
    let subject = format!("Volunteering {}", unique_token());

    let response = ctx
        .http()
        .post_form(
            "/contact/",
            &[
                ("name", "Kofi"),
                ("email", "kofi@example.com"),
                ("subject", &subject),
                ("message", "How can I help?"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(contacts_with_subject(&ctx, &subject).await, 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn invalid_submission_rerenders_with_errors(ctx: &mut TestHarness) {
    let subject = format!("Incomplete {}", unique_token());

    let response = ctx
        .http()
        .post_form(
            "/contact/",
            &[
                ("name", ""),
                ("email", "not-an-email"),
                ("subject", &subject),
                ("message", "Hello"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("This field is required."));
    assert!(response.body.contains("Enter a valid email address."));
    // Submitted values are kept in the form
    assert!(response.body.contains(&subject));
    assert_eq!(contacts_with_subject(ctx, &subject).await, 0);
    assert!(ctx.mailer.sent().is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn success_message_shown_after_redirect(ctx: &mut TestHarness) {
    let http = ctx.http();

    let after = http.get("/contact/?sent=1").await;
    assert_eq!(after.status, StatusCode::OK);
    assert!(after.body.contains(CONTACT_SUCCESS_MESSAGE));

    let before = http.get("/contact/").await;
    assert!(!before.body.contains(CONTACT_SUCCESS_MESSAGE));
}
