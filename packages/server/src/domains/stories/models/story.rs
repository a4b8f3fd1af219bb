use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::utils::{clean_slug, like_pattern, slug_or_title};
use crate::common::{AdminFilter, PageWindow, StoryId};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub slug: String,
    /// Admin-authored HTML
    pub content: String,
    pub author: String,
    pub location: String,

    // Social links (blank when unset)
    pub facebook_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
    pub twitter_url: String,

    pub image_url: Option<String>,
    pub featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateStory {
    pub title: String,
    #[builder(default, setter(strip_option))]
    pub slug: Option<String>,
    pub content: String,
    pub author: String,
    #[builder(default)]
    pub location: String,
    #[builder(default)]
    pub facebook_url: String,
    #[builder(default)]
    pub instagram_url: String,
    #[builder(default)]
    pub youtube_url: String,
    #[builder(default)]
    pub twitter_url: String,
    #[builder(default, setter(strip_option))]
    pub image_url: Option<String>,
    #[builder(default = false)]
    pub featured: bool,
    #[builder(default = true)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStory {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub location: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub twitter_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub is_active: Option<bool>,
}

impl Story {
    pub async fn find_by_id(id: StoryId, pool: &PgPool) -> Result<Option<Self>> {
        let story = sqlx::query_as::<_, Self>("SELECT * FROM stories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(story)
    }

    pub async fn find_active_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Self>> {
        let story = sqlx::query_as::<_, Self>(
            "SELECT * FROM stories WHERE slug = $1 AND is_active = true",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await?;
        Ok(story)
    }

    /// Newest active stories, for the home page
    pub async fn find_latest(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let stories = sqlx::query_as::<_, Self>(
            "SELECT * FROM stories WHERE is_active = true ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(stories)
    }

    pub async fn count_public(search: Option<&str>, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM stories
            WHERE is_active = true
              AND ($1::text IS NULL OR title ILIKE $1 OR content ILIKE $1 OR author ILIKE $1)
            "#,
        )
        .bind(like_pattern(search))
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    pub async fn find_public_page(
        search: Option<&str>,
        window: &PageWindow,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let stories = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM stories
            WHERE is_active = true
              AND ($1::text IS NULL OR title ILIKE $1 OR content ILIKE $1 OR author ILIKE $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(like_pattern(search))
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(pool)
        .await?;
        Ok(stories)
    }

    /// Admin list: `flag` filters on `featured`
    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let stories = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM stories
            WHERE ($1::text IS NULL OR title ILIKE $1 OR content ILIKE $1 OR author ILIKE $1
                   OR location ILIKE $1)
              AND ($2::bool IS NULL OR is_active = $2)
              AND ($3::bool IS NULL OR featured = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.is_active)
        .bind(filter.flag)
        .fetch_all(pool)
        .await?;
        Ok(stories)
    }

    pub async fn create(input: CreateStory, pool: &PgPool) -> Result<Self> {
        let slug = slug_or_title(input.slug.as_deref(), &input.title)?;

        let story = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO stories (
                id, title, slug, content, author, location,
                facebook_url, instagram_url, youtube_url, twitter_url,
                image_url, featured, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(StoryId::new())
        .bind(&input.title)
        .bind(&slug)
        .bind(&input.content)
        .bind(&input.author)
        .bind(&input.location)
        .bind(&input.facebook_url)
        .bind(&input.instagram_url)
        .bind(&input.youtube_url)
        .bind(&input.twitter_url)
        .bind(&input.image_url)
        .bind(input.featured)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(story)
    }

    pub async fn update(id: StoryId, input: UpdateStory, pool: &PgPool) -> Result<Self> {
        let slug = clean_slug(input.slug.as_deref())?;

        let story = sqlx::query_as::<_, Self>(
            r#"
            UPDATE stories SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                content = COALESCE($4, content),
                author = COALESCE($5, author),
                location = COALESCE($6, location),
                facebook_url = COALESCE($7, facebook_url),
                instagram_url = COALESCE($8, instagram_url),
                youtube_url = COALESCE($9, youtube_url),
                twitter_url = COALESCE($10, twitter_url),
                image_url = COALESCE($11, image_url),
                featured = COALESCE($12, featured),
                is_active = COALESCE($13, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(slug)
        .bind(&input.content)
        .bind(&input.author)
        .bind(&input.location)
        .bind(&input.facebook_url)
        .bind(&input.instagram_url)
        .bind(&input.youtube_url)
        .bind(&input.twitter_url)
        .bind(&input.image_url)
        .bind(input.featured)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(story)
    }

    pub async fn delete(id: StoryId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM stories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
