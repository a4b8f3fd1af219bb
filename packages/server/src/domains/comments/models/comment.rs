use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::common::utils::{like_pattern, truncate_chars};
use crate::common::{AdminFilter, BlogPostId, CommentId, EventId, StoryId};

pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Commentable type enum for type-safe querying
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommentableType {
    Event,
    Story,
    BlogPost,
}

impl std::fmt::Display for CommentableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommentableType::Event => write!(f, "event"),
            CommentableType::Story => write!(f, "story"),
            CommentableType::BlogPost => write!(f, "blog_post"),
        }
    }
}

impl std::str::FromStr for CommentableType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "event" => Ok(CommentableType::Event),
            "story" => Ok(CommentableType::Story),
            "blog_post" => Ok(CommentableType::BlogPost),
            _ => Err(anyhow::anyhow!("Invalid commentable type: {}", s)),
        }
    }
}

/// The record a comment hangs off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentTarget {
    pub kind: CommentableType,
    pub id: Uuid,
}

impl From<EventId> for CommentTarget {
    fn from(id: EventId) -> Self {
        Self {
            kind: CommentableType::Event,
            id: id.into_uuid(),
        }
    }
}

impl From<StoryId> for CommentTarget {
    fn from(id: StoryId) -> Self {
        Self {
            kind: CommentableType::Story,
            id: id.into_uuid(),
        }
    }
}

impl From<BlogPostId> for CommentTarget {
    fn from(id: BlogPostId) -> Self {
        Self {
            kind: CommentableType::BlogPost,
            id: id.into_uuid(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: CommentId,
    pub name: String,
    pub email: String,
    pub text: String,
    pub commentable_type: Option<String>,
    pub commentable_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateComment {
    pub text: String,
    #[builder(default = ANONYMOUS_NAME.to_string())]
    pub name: String,
    #[builder(default)]
    pub email: String,
    #[builder(default, setter(strip_option))]
    pub target: Option<CommentTarget>,
}

impl std::fmt::Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, truncate_chars(&self.text, 50))
    }
}

impl Comment {
    pub async fn find_by_id(id: CommentId, pool: &PgPool) -> Result<Option<Self>> {
        let comment = sqlx::query_as::<_, Self>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(comment)
    }

    /// Newest comments across the whole site, attached or not
    pub async fn recent(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let comments = sqlx::query_as::<_, Self>(
            "SELECT * FROM comments ORDER BY created_at DESC, id DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(comments)
    }

    /// Newest comments on one record
    pub async fn recent_for(target: CommentTarget, limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let comments = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM comments
            WHERE commentable_type = $1 AND commentable_id = $2
            ORDER BY created_at DESC, id DESC
            LIMIT $3
            "#,
        )
        .bind(target.kind.to_string())
        .bind(target.id)
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(comments)
    }

    /// Admin list: `kind` filters on `commentable_type`
    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let comments = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM comments
            WHERE ($1::text IS NULL OR name ILIKE $1 OR email ILIKE $1 OR text ILIKE $1)
              AND ($2::text IS NULL OR commentable_type = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.kind.as_deref())
        .fetch_all(pool)
        .await?;
        Ok(comments)
    }

    pub async fn create(input: CreateComment, pool: &PgPool) -> Result<Self> {
        let comment = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO comments (id, name, email, text, commentable_type, commentable_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(CommentId::new())
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.text)
        .bind(input.target.map(|t| t.kind.to_string()))
        .bind(input.target.map(|t| t.id))
        .fetch_one(pool)
        .await?;
        Ok(comment)
    }

    /// Anonymous comment from a list page
    pub async fn create_unattached(text: &str, pool: &PgPool) -> Result<Self> {
        Self::create(CreateComment::builder().text(text).build(), pool).await
    }

    /// Named comment on one record
    pub async fn create_for(
        target: CommentTarget,
        name: &str,
        email: &str,
        text: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        Self::create(
            CreateComment::builder()
                .text(text)
                .name(name)
                .email(email)
                .target(target)
                .build(),
            pool,
        )
        .await
    }

    pub async fn delete(id: CommentId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commentable_type_round_trips() {
        for kind in [CommentableType::Event, CommentableType::Story, CommentableType::BlogPost] {
            assert_eq!(kind.to_string().parse::<CommentableType>().unwrap(), kind);
        }
        assert!("resource".parse::<CommentableType>().is_err());
    }

    #[test]
    fn builder_defaults_to_anonymous_unattached() {
        let input = CreateComment::builder().text("Great work!").build();
        assert_eq!(input.name, ANONYMOUS_NAME);
        assert!(input.email.is_empty());
        assert!(input.target.is_none());
    }

    #[test]
    fn display_truncates_text_to_50_chars() {
        let comment = Comment {
            id: CommentId::new(),
            name: "Amina".to_string(),
            email: String::new(),
            text: "x".repeat(80),
            commentable_type: None,
            commentable_id: None,
            created_at: Utc::now(),
        };
        assert_eq!(comment.to_string(), format!("Amina - {}", "x".repeat(50)));
    }

    #[test]
    fn target_from_typed_ids() {
        let id = EventId::new();
        let target = CommentTarget::from(id);
        assert_eq!(target.kind, CommentableType::Event);
        assert_eq!(target.id, id.into_uuid());
    }
}
