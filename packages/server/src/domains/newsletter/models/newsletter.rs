use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::utils::like_pattern;
use crate::common::{AdminFilter, NewsletterId};

/// Newsletter subscription. Emails are unique.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Newsletter {
    pub id: NewsletterId,
    pub email: String,
    pub name: String,
    pub subscribed: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateNewsletter {
    pub email: String,
    #[builder(default)]
    pub name: String,
}

impl std::fmt::Display for Newsletter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.email)
    }
}

impl Newsletter {
    pub async fn find_by_id(id: NewsletterId, pool: &PgPool) -> Result<Option<Self>> {
        let subscription =
            sqlx::query_as::<_, Self>("SELECT * FROM newsletter_subscriptions WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(subscription)
    }

    /// Admin list: `flag` filters on `subscribed`
    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let subscriptions = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM newsletter_subscriptions
            WHERE ($1::text IS NULL OR email ILIKE $1 OR name ILIKE $1)
              AND ($2::bool IS NULL OR is_active = $2)
              AND ($3::bool IS NULL OR subscribed = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.is_active)
        .bind(filter.flag)
        .fetch_all(pool)
        .await?;
        Ok(subscriptions)
    }

    /// Insert unless the email is already subscribed; `None` on a duplicate
    pub async fn create_if_new(input: CreateNewsletter, pool: &PgPool) -> Result<Option<Self>> {
        let subscription = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO newsletter_subscriptions (id, email, name)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(NewsletterId::new())
        .bind(&input.email)
        .bind(&input.name)
        .fetch_optional(pool)
        .await?;
        Ok(subscription)
    }

    pub async fn set_subscribed(id: NewsletterId, subscribed: bool, pool: &PgPool) -> Result<Self> {
        let subscription = sqlx::query_as::<_, Self>(
            r#"
            UPDATE newsletter_subscriptions SET subscribed = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(subscribed)
        .fetch_one(pool)
        .await?;
        Ok(subscription)
    }

    pub async fn delete(id: NewsletterId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM newsletter_subscriptions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
