use anyhow::{ensure, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::utils::like_pattern;
use crate::common::{AdminFilter, ImpactStatId};

/// A headline figure such as "10K+ girls reached"
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ImpactStat {
    pub id: ImpactStatId,
    pub label: String,
    /// Display text, e.g. "10K+" or "85%"
    pub value: String,
    pub description: String,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateImpactStat {
    pub label: String,
    pub value: String,
    #[builder(default)]
    pub description: String,
    #[builder(default, setter(strip_option))]
    pub image_url: Option<String>,
    #[builder(default = 0)]
    pub display_order: i32,
    #[builder(default = true)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateImpactStat {
    pub label: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl std::fmt::Display for ImpactStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

impl ImpactStat {
    pub async fn find_by_id(id: ImpactStatId, pool: &PgPool) -> Result<Option<Self>> {
        let stat = sqlx::query_as::<_, Self>("SELECT * FROM impact_stats WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(stat)
    }

    /// Active stats in display order
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        let stats = sqlx::query_as::<_, Self>(
            "SELECT * FROM impact_stats WHERE is_active = true ORDER BY display_order ASC, created_at ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(stats)
    }

    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let stats = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM impact_stats
            WHERE ($1::text IS NULL OR label ILIKE $1 OR description ILIKE $1)
              AND ($2::bool IS NULL OR is_active = $2)
            ORDER BY display_order ASC, created_at ASC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.is_active)
        .fetch_all(pool)
        .await?;
        Ok(stats)
    }

    pub async fn create(input: CreateImpactStat, pool: &PgPool) -> Result<Self> {
        ensure!(input.display_order >= 0, "Display order must be zero or greater");

        let stat = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO impact_stats (id, label, value, description, image_url, display_order, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(ImpactStatId::new())
        .bind(&input.label)
        .bind(&input.value)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.display_order)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(stat)
    }

    pub async fn update(id: ImpactStatId, input: UpdateImpactStat, pool: &PgPool) -> Result<Self> {
        if let Some(order) = input.display_order {
            ensure!(order >= 0, "Display order must be zero or greater");
        }

        let stat = sqlx::query_as::<_, Self>(
            r#"
            UPDATE impact_stats SET
                label = COALESCE($2, label),
                value = COALESCE($3, value),
                description = COALESCE($4, description),
                image_url = COALESCE($5, image_url),
                display_order = COALESCE($6, display_order),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.label)
        .bind(&input.value)
        .bind(&input.description)
        .bind(&input.image_url)
        .bind(input.display_order)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(stat)
    }

    pub async fn delete(id: ImpactStatId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM impact_stats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
