use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::utils::like_pattern;
use crate::common::{AdminFilter, SupporterId};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Supporter {
    pub id: SupporterId,
    pub name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateSupporter {
    pub name: String,
    pub role: String,
    #[builder(default, setter(strip_option))]
    pub image_url: Option<String>,
    #[builder(default = true)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSupporter {
    pub name: Option<String>,
    pub role: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl Supporter {
    pub async fn find_by_id(id: SupporterId, pool: &PgPool) -> Result<Option<Self>> {
        let supporter = sqlx::query_as::<_, Self>("SELECT * FROM supporters WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(supporter)
    }

    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        let supporters = sqlx::query_as::<_, Self>(
            "SELECT * FROM supporters WHERE is_active = true ORDER BY created_at ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(supporters)
    }

    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let supporters = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM supporters
            WHERE ($1::text IS NULL OR name ILIKE $1 OR role ILIKE $1)
              AND ($2::bool IS NULL OR is_active = $2)
            ORDER BY created_at ASC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.is_active)
        .fetch_all(pool)
        .await?;
        Ok(supporters)
    }

    pub async fn create(input: CreateSupporter, pool: &PgPool) -> Result<Self> {
        let supporter = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO supporters (id, name, role, image_url, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(SupporterId::new())
        .bind(&input.name)
        .bind(&input.role)
        .bind(&input.image_url)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(supporter)
    }

    pub async fn update(id: SupporterId, input: UpdateSupporter, pool: &PgPool) -> Result<Self> {
        let supporter = sqlx::query_as::<_, Self>(
            r#"
            UPDATE supporters SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                image_url = COALESCE($4, image_url),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.role)
        .bind(&input.image_url)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(supporter)
    }

    pub async fn delete(id: SupporterId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM supporters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
