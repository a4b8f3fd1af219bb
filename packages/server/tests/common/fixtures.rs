//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data. Titles
//! should carry a unique token so slugs never collide in the shared database.

use anyhow::Result;
use chrono::{Duration, Utc};
use sqlx::PgPool;

use server_core::domains::blog::models::{BlogPost, CreateBlogPost};
use server_core::domains::events::models::{CreateEvent, Event};
use server_core::domains::impact::models::{CreateImpactStory, ImpactStory};
use server_core::domains::resources::models::{CreateResource, Resource, ResourceCategory};
use server_core::domains::stories::models::{CreateStory, Story};

/// Active event a week from now
pub async fn create_test_event(pool: &PgPool, title: &str) -> Result<Event> {
    Event::create(
        CreateEvent::builder()
            .title(title)
            .description("<p>Join us for a community workshop.</p>")
            .date(Utc::now() + Duration::days(7))
            .location("Accra")
            .build(),
        pool,
    )
    .await
}

pub async fn create_inactive_event(pool: &PgPool, title: &str) -> Result<Event> {
    Event::create(
        CreateEvent::builder()
            .title(title)
            .description("<p>Cancelled.</p>")
            .date(Utc::now() + Duration::days(7))
            .location("Accra")
            .is_active(false)
            .build(),
        pool,
    )
    .await
}

pub async fn create_test_story(pool: &PgPool, title: &str) -> Result<Story> {
    Story::create(
        CreateStory::builder()
            .title(title)
            .content("<p>How one mentor changed everything.</p>")
            .author("Ama Mensah")
            .location("Kumasi")
            .build(),
        pool,
    )
    .await
}

pub async fn create_test_blog_post(pool: &PgPool, title: &str, published: bool) -> Result<BlogPost> {
    BlogPost::create(
        CreateBlogPost::builder()
            .title(title)
            .content("<p>Notes from the field.</p>")
            .author("GYWAN Team")
            .excerpt("Notes from the field.")
            .tags("advocacy, education")
            .published(published)
            .build(),
        pool,
    )
    .await
}

pub async fn create_test_resource(
    pool: &PgPool,
    title: &str,
    category: ResourceCategory,
) -> Result<Resource> {
    Resource::create(
        CreateResource::builder()
            .title(title)
            .description("A practical guide.")
            .file_url("/media/resources/files/guide.pdf")
            .category(category)
            .build(),
        pool,
    )
    .await
}

pub async fn create_test_impact_story(pool: &PgPool, title: &str) -> Result<ImpactStory> {
    ImpactStory::create(
        CreateImpactStory::builder()
            .title(title)
            .quote("GYWAN gave me a voice.")
            .location("Tamale")
            .image_url("/media/impact_stories/portrait.jpg")
            .build(),
        pool,
    )
    .await
}
