//! Integration tests for the public HTML pages.

mod common;

use crate::common::*;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use server_core::domains::blog::models::{BlogPost, CreateBlogPost};
use server_core::domains::events::models::{CreateEvent, Event};
use server_core::domains::resources::ResourceCategory;
use server_core::domains::stories::models::{CreateStory, Story};
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn home_page_lists_upcoming_events(ctx: &mut TestHarness) {
    let title = format!("Home Event {}", unique_token());
    create_test_event(&ctx.db_pool, &title).await.unwrap();

    let response = ctx.http().get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("GYWAN"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn static_pages_render(ctx: &mut TestHarness) {
    let http = ctx.http();
    for path in ["/about/", "/team/", "/contact/", "/donate/"] {
        let response = http.get(path).await;
        assert_eq!(response.status, StatusCode::OK, "{} failed", path);
        assert!(response.body.contains("<html"), "{} is not a page", path);
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn donate_page_exposes_stripe_public_key(ctx: &mut TestHarness) {
    let title = format!("Impact {}", unique_token());
    create_test_impact_story(&ctx.db_pool, &title).await.unwrap();

    let response = ctx.http().get("/donate/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("pk_test_123"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn event_search_filters_by_title(ctx: &mut TestHarness) {
    let token = unique_token();
    let matching = format!("Leadership Summit {}", token);
    let other = format!("Leadership Summit {}", unique_token());
    create_test_event(&ctx.db_pool, &matching).await.unwrap();
    create_test_event(&ctx.db_pool, &other).await.unwrap();

    let response = ctx.http().get(&format!("/events/?q={}", token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&matching));
    assert!(!response.body.contains(&other));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn event_search_ignores_case_and_covers_description_and_location(ctx: &mut TestHarness) {
    let token = unique_token();
    let by_description = format!("Reading Circle {}", unique_token());
    let by_location = format!("Harvest Fair {}", unique_token());
    Event::create(
        CreateEvent::builder()
            .title(by_description.as_str())
            .description(format!("<p>Hosted by {}</p>", token))
            .date(Utc::now() + Duration::days(3))
            .location("Accra")
            .build(),
        &ctx.db_pool,
    )
    .await
    .unwrap();
    Event::create(
        CreateEvent::builder()
            .title(by_location.as_str())
            .description("<p>Music and food.</p>")
            .date(Utc::now() + Duration::days(4))
            .location(format!("Cape Coast {}", token))
            .build(),
        &ctx.db_pool,
    )
    .await
    .unwrap();

    let response = ctx
        .http()
        .get(&format!("/events/?q={}", token.to_uppercase()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&by_description));
    assert!(response.body.contains(&by_location));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn story_search_matches_author(ctx: &mut TestHarness) {
    let token = unique_token();
    let title = format!("Back To School {}", unique_token());
    Story::create(
        CreateStory::builder()
            .title(title.as_str())
            .content("<p>A second chance.</p>")
            .author(format!("Efua {}", token))
            .build(),
        &ctx.db_pool,
    )
    .await
    .unwrap();

    let response = ctx
        .http()
        .get(&format!("/stories/?q={}", token.to_uppercase()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&title));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn blog_search_matches_tags(ctx: &mut TestHarness) {
    let token = unique_token();
    let title = format!("Field Notes {}", unique_token());
    BlogPost::create(
        CreateBlogPost::builder()
            .title(title.as_str())
            .content("<p>From the north.</p>")
            .author("GYWAN Team")
            .excerpt("From the north.")
            .tags(format!("health, {}", token))
            .build(),
        &ctx.db_pool,
    )
    .await
    .unwrap();

    let response = ctx
        .http()
        .get(&format!("/blog/?q={}", token.to_uppercase()))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&title));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn lists_show_ten_per_page(ctx: &mut TestHarness) {
    let token = unique_token();
    for day in 1..=11 {
        Event::create(
            CreateEvent::builder()
                .title(format!("Paged {} #{:02}", token, day))
                .description("<p>Weekly club.</p>")
                .date(Utc::now() + Duration::days(day))
                .location("Ho")
                .build(),
            &ctx.db_pool,
        )
        .await
        .unwrap();
    }
    let http = ctx.http();

    // Newest date first, so the earliest event is alone on page 2
    let first = http.get(&format!("/events/?q={}", token)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert!(first.body.contains("Page 1 of 2"));
    assert!(first.body.contains(&format!("Paged {} #11", token)));
    assert!(first.body.contains(&format!("Paged {} #02", token)));
    assert!(!first.body.contains(&format!("Paged {} #01", token)));

    let second = http.get(&format!("/events/?q={}&page=2", token)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert!(second.body.contains("Page 2 of 2"));
    assert!(second.body.contains(&format!("Paged {} #01", token)));
    for day in 2..=11 {
        assert!(!second.body.contains(&format!("Paged {} #{:02}", token, day)));
    }

    let beyond = http.get(&format!("/events/?q={}&page=3", token)).await;
    assert_eq!(beyond.status, StatusCode::NOT_FOUND);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn inactive_events_are_hidden(ctx: &mut TestHarness) {
    let token = unique_token();
    let title = format!("Cancelled Meetup {}", token);
    let event = create_inactive_event(&ctx.db_pool, &title).await.unwrap();

    let http = ctx.http();
    let list = http.get(&format!("/events/?q={}", token)).await;
    assert!(!list.body.contains(&title));

    let detail = http.get(&format!("/events/{}/", event.slug)).await;
    assert_eq!(detail.status, StatusCode::NOT_FOUND);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn event_detail_renders_by_slug(ctx: &mut TestHarness) {
    let title = format!("Girls Code Day {}", unique_token());
    let event = create_test_event(&ctx.db_pool, &title).await.unwrap();

    let response = ctx.http().get(&format!("/events/{}/", event.slug)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&title));
    assert!(response.body.contains("Accra"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_slug_is_404(ctx: &mut TestHarness) {
    let http = ctx.http();
    for path in ["/events/nope/", "/stories/nope/", "/blog/nope/"] {
        let response = http.get(path).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", path);
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn story_list_and_detail(ctx: &mut TestHarness) {
    let token = unique_token();
    let title = format!("Finding My Voice {}", token);
    let story = create_test_story(&ctx.db_pool, &title).await.unwrap();

    let http = ctx.http();
    let list = http.get(&format!("/stories/?q={}", token)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(list.body.contains(&title));

    let detail = http.get(&format!("/stories/{}/", story.slug)).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Ama Mensah"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unpublished_blog_posts_are_hidden(ctx: &mut TestHarness) {
    let token = unique_token();
    let published = format!("Published Post {}", token);
    let draft = format!("Draft Post {}", token);
    create_test_blog_post(&ctx.db_pool, &published, true).await.unwrap();
    let draft_post = create_test_blog_post(&ctx.db_pool, &draft, false).await.unwrap();

    let http = ctx.http();
    let list = http.get(&format!("/blog/?q={}", token)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(list.body.contains(&published));
    assert!(!list.body.contains(&draft));

    let detail = http.get(&format!("/blog/{}/", draft_post.slug)).await;
    assert_eq!(detail.status, StatusCode::NOT_FOUND);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn blog_detail_shows_tags(ctx: &mut TestHarness) {
    let title = format!("Tagged Post {}", unique_token());
    let post = create_test_blog_post(&ctx.db_pool, &title, true).await.unwrap();

    let response = ctx.http().get(&format!("/blog/{}/", post.slug)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("advocacy"));
    assert!(response.body.contains("education"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn resource_list_filters_by_category(ctx: &mut TestHarness) {
    let token = unique_token();
    let report = format!("Annual Report {}", token);
    let guide = format!("Starter Guide {}", token);
    create_test_resource(&ctx.db_pool, &report, ResourceCategory::Report)
        .await
        .unwrap();
    create_test_resource(&ctx.db_pool, &guide, ResourceCategory::Guide)
        .await
        .unwrap();

    let response = ctx
        .http()
        .get(&format!("/resources/?q={}&category=report", token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&report));
    assert!(!response.body.contains(&guide));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_resource_category_lists_nothing(ctx: &mut TestHarness) {
    let token = unique_token();
    let title = format!("Toolkit {}", token);
    create_test_resource(&ctx.db_pool, &title, ResourceCategory::Toolkit)
        .await
        .unwrap();

    let response = ctx
        .http()
        .get(&format!("/resources/?q={}&category=podcast", token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.body.contains(&title));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn invalid_page_numbers_are_404(ctx: &mut TestHarness) {
    let http = ctx.http();
    for path in ["/events/?page=abc", "/stories/?page=0", "/blog/?page=100000"] {
        let response = http.get(path).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", path);
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn last_page_is_accepted(ctx: &mut TestHarness) {
    let response = ctx.http().get("/events/?page=last").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn missing_trailing_slash_redirects(ctx: &mut TestHarness) {
    let http = ctx.http();

    let response = http.get("/events?q=summit").await;
    assert_eq!(response.status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.location(), Some("/events/?q=summit"));

    let response = http.get("/about").await;
    assert_eq!(response.location(), Some("/about/"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_file_path_is_404(ctx: &mut TestHarness) {
    let response = ctx.http().get("/favicon.ico").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn static_assets_are_served(ctx: &mut TestHarness) {
    let response = ctx.http().get("/static/site.css").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get("content-type").unwrap().to_str().unwrap(),
        "text/css"
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn health_check_reports_database(ctx: &mut TestHarness) {
    let response = ctx.http().get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["ok"], true);
}
