use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::utils::{clean_slug, like_pattern, slug_or_title};
use crate::common::{AdminFilter, EventId, PageWindow};

/// Event model - shown on the home page while upcoming and on /events/
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub slug: String,
    /// Admin-authored HTML
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,

    // Social links (blank when unset)
    pub facebook_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
    pub twitter_url: String,

    pub image_url: Option<String>,
    pub featured: bool,
    pub registration_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an event. A blank slug is derived from the title.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateEvent {
    pub title: String,
    #[builder(default, setter(strip_option))]
    pub slug: Option<String>,
    pub description: String,
    pub date: DateTime<Utc>,
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
    #[builder(default)]
    pub registration_url: String,
    #[builder(default = true)]
    pub is_active: bool,
}

/// Input for updating an event. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub twitter_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub registration_url: Option<String>,
    pub is_active: Option<bool>,
}

impl Event {
    pub async fn find_by_id(id: EventId, pool: &PgPool) -> Result<Option<Self>> {
        let event = sqlx::query_as::<_, Self>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(event)
    }

    /// Active event by slug, for the detail page
    pub async fn find_active_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Self>> {
        let event = sqlx::query_as::<_, Self>(
            "SELECT * FROM events WHERE slug = $1 AND is_active = true",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await?;
        Ok(event)
    }

    /// Soonest active events that haven't started yet
    pub async fn find_upcoming(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let events = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM events
            WHERE is_active = true AND date >= NOW()
            ORDER BY date ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(events)
    }

    /// Count active events matching the public search
    pub async fn count_public(search: Option<&str>, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM events
            WHERE is_active = true
              AND ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1 OR location ILIKE $1)
            "#,
        )
        .bind(like_pattern(search))
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// One page of active events matching the public search, newest date first
    pub async fn find_public_page(
        search: Option<&str>,
        window: &PageWindow,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let events = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM events
            WHERE is_active = true
              AND ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1 OR location ILIKE $1)
            ORDER BY date DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(like_pattern(search))
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(pool)
        .await?;
        Ok(events)
    }

    /// Admin list: `flag` filters on `featured`
    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let events = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM events
            WHERE ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1 OR location ILIKE $1)
              AND ($2::bool IS NULL OR is_active = $2)
              AND ($3::bool IS NULL OR featured = $3)
            ORDER BY date DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.is_active)
        .bind(filter.flag)
        .fetch_all(pool)
        .await?;
        Ok(events)
    }

    pub async fn create(input: CreateEvent, pool: &PgPool) -> Result<Self> {
        let slug = slug_or_title(input.slug.as_deref(), &input.title)?;

        let event = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO events (
                id, title, slug, description, date, location,
                facebook_url, instagram_url, youtube_url, twitter_url,
                image_url, featured, registration_url, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(EventId::new())
        .bind(&input.title)
        .bind(&slug)
        .bind(&input.description)
        .bind(input.date)
        .bind(&input.location)
        .bind(&input.facebook_url)
        .bind(&input.instagram_url)
        .bind(&input.youtube_url)
        .bind(&input.twitter_url)
        .bind(&input.image_url)
        .bind(input.featured)
        .bind(&input.registration_url)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(event)
    }

    pub async fn update(id: EventId, input: UpdateEvent, pool: &PgPool) -> Result<Self> {
        let slug = clean_slug(input.slug.as_deref())?;

        let event = sqlx::query_as::<_, Self>(
            r#"
            UPDATE events SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                date = COALESCE($5, date),
                location = COALESCE($6, location),
                facebook_url = COALESCE($7, facebook_url),
                instagram_url = COALESCE($8, instagram_url),
                youtube_url = COALESCE($9, youtube_url),
                twitter_url = COALESCE($10, twitter_url),
                image_url = COALESCE($11, image_url),
                featured = COALESCE($12, featured),
                registration_url = COALESCE($13, registration_url),
                is_active = COALESCE($14, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(slug)
        .bind(&input.description)
        .bind(input.date)
        .bind(&input.location)
        .bind(&input.facebook_url)
        .bind(&input.instagram_url)
        .bind(&input.youtube_url)
        .bind(&input.twitter_url)
        .bind(&input.image_url)
        .bind(input.featured)
        .bind(&input.registration_url)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(event)
    }

    /// Returns false when no row had this id
    pub async fn delete(id: EventId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the event has a date in the future
    pub fn is_upcoming(&self) -> bool {
        self.date >= Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let input = CreateEvent::builder()
            .title("Youth Summit")
            .description("<p>Join us</p>")
            .date(Utc::now())
            .location("Nairobi")
            .build();

        assert!(input.slug.is_none());
        assert!(input.is_active);
        assert!(!input.featured);
        assert!(input.registration_url.is_empty());
    }
}
