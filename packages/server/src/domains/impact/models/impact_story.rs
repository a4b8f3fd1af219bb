use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::utils::like_pattern;
use crate::common::{AdminFilter, ImpactStoryId};

/// Short quote shown beside the donation form. Has no active flag.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ImpactStory {
    pub id: ImpactStoryId,
    pub title: String,
    pub quote: String,
    pub location: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateImpactStory {
    pub title: String,
    pub quote: String,
    pub location: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateImpactStory {
    pub title: Option<String>,
    pub quote: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
}

impl ImpactStory {
    pub async fn find_by_id(id: ImpactStoryId, pool: &PgPool) -> Result<Option<Self>> {
        let story = sqlx::query_as::<_, Self>("SELECT * FROM impact_stories WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(story)
    }

    pub async fn find_latest(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let stories = sqlx::query_as::<_, Self>(
            "SELECT * FROM impact_stories ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(stories)
    }

    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let stories = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM impact_stories
            WHERE ($1::text IS NULL OR title ILIKE $1 OR quote ILIKE $1 OR location ILIKE $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .fetch_all(pool)
        .await?;
        Ok(stories)
    }

    pub async fn create(input: CreateImpactStory, pool: &PgPool) -> Result<Self> {
        let story = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO impact_stories (id, title, quote, location, image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(ImpactStoryId::new())
        .bind(&input.title)
        .bind(&input.quote)
        .bind(&input.location)
        .bind(&input.image_url)
        .fetch_one(pool)
        .await?;
        Ok(story)
    }

    pub async fn update(
        id: ImpactStoryId,
        input: UpdateImpactStory,
        pool: &PgPool,
    ) -> Result<Self> {
        let story = sqlx::query_as::<_, Self>(
            r#"
            UPDATE impact_stories SET
                title = COALESCE($2, title),
                quote = COALESCE($3, quote),
                location = COALESCE($4, location),
                image_url = COALESCE($5, image_url)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.quote)
        .bind(&input.location)
        .bind(&input.image_url)
        .fetch_one(pool)
        .await?;
        Ok(story)
    }

    pub async fn delete(id: ImpactStoryId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM impact_stories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
