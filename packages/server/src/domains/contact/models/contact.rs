use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::utils::like_pattern;
use crate::common::{AdminFilter, ContactId};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.subject, self.name)
    }
}

impl Contact {
    pub async fn find_by_id(id: ContactId, pool: &PgPool) -> Result<Option<Self>> {
        let contact = sqlx::query_as::<_, Self>("SELECT * FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(contact)
    }

    pub async fn count_all(pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Admin list: `flag` filters on `is_read`
    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let contacts = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM contacts
            WHERE ($1::text IS NULL OR name ILIKE $1 OR email ILIKE $1 OR subject ILIKE $1
                   OR message ILIKE $1)
              AND ($2::bool IS NULL OR is_active = $2)
              AND ($3::bool IS NULL OR is_read = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.is_active)
        .bind(filter.flag)
        .fetch_all(pool)
        .await?;
        Ok(contacts)
    }

    pub async fn create(input: CreateContact, pool: &PgPool) -> Result<Self> {
        let contact = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO contacts (id, name, email, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(ContactId::new())
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.subject)
        .bind(&input.message)
        .fetch_one(pool)
        .await?;
        Ok(contact)
    }

    pub async fn set_read(id: ContactId, is_read: bool, pool: &PgPool) -> Result<Self> {
        let contact = sqlx::query_as::<_, Self>(
            r#"
            UPDATE contacts SET is_read = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(is_read)
        .fetch_one(pool)
        .await?;
        Ok(contact)
    }

    pub async fn delete(id: ContactId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
