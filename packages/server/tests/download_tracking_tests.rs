//! Integration tests for resource download tracking.

mod common;

use crate::common::*;
use axum::http::StatusCode;
use server_core::domains::resources::ResourceCategory;
use server_core::server::routes::RESOURCE_NOT_FOUND_MESSAGE;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn each_post_increments_the_count(ctx: &mut TestHarness) {
    let title = format!("Safety Guide {}", unique_token());
    let resource = create_test_resource(&ctx.db_pool, &title, ResourceCategory::Guide)
        .await
        .unwrap();
    let path = format!("/api/track-download/{}/", resource.id);
    let http = ctx.http();

    let first = http.post_empty(&path).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.json()["success"], true);
    assert_eq!(first.json()["download_count"], 1);

    let second = http.post_empty(&path).await;
    assert_eq!(second.json()["download_count"], 2);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_resource_is_404(ctx: &mut TestHarness) {
    let http = ctx.http();
    let missing = format!("/api/track-download/{}/", uuid::Uuid::new_v4());

    for path in [missing.as_str(), "/api/track-download/not-a-uuid/"] {
        let response = http.post_empty(path).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", path);
        assert_eq!(response.json()["error"], RESOURCE_NOT_FOUND_MESSAGE);
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn get_does_not_count(ctx: &mut TestHarness) {
    let title = format!("Policy Brief {}", unique_token());
    let resource = create_test_resource(&ctx.db_pool, &title, ResourceCategory::Policy)
        .await
        .unwrap();

    let response = ctx
        .http()
        .get(&format!("/api/track-download/{}/", resource.id))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let count: i32 = sqlx::query_scalar("SELECT download_count FROM resources WHERE id = $1")
        .bind(resource.id)
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
