use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::utils::like_pattern;
use crate::common::{AdminFilter, TeamMemberId};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: Option<String>,

    // Profile links (blank when unset)
    pub twitter: String,
    pub instagram: String,
    pub facebook: String,
    pub linkedin: String,

    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateTeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    #[builder(default, setter(strip_option))]
    pub image_url: Option<String>,
    #[builder(default)]
    pub twitter: String,
    #[builder(default)]
    pub instagram: String,
    #[builder(default)]
    pub facebook: String,
    #[builder(default)]
    pub linkedin: String,
    #[builder(default = true)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub is_active: Option<bool>,
}

impl TeamMember {
    pub async fn find_by_id(id: TeamMemberId, pool: &PgPool) -> Result<Option<Self>> {
        let member = sqlx::query_as::<_, Self>("SELECT * FROM team_members WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(member)
    }

    /// Active members, oldest first
    pub async fn find_active(pool: &PgPool) -> Result<Vec<Self>> {
        let members = sqlx::query_as::<_, Self>(
            "SELECT * FROM team_members WHERE is_active = true ORDER BY created_at ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(members)
    }

    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let members = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM team_members
            WHERE ($1::text IS NULL OR name ILIKE $1 OR role ILIKE $1 OR bio ILIKE $1)
              AND ($2::bool IS NULL OR is_active = $2)
            ORDER BY created_at ASC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.is_active)
        .fetch_all(pool)
        .await?;
        Ok(members)
    }

    pub async fn create(input: CreateTeamMember, pool: &PgPool) -> Result<Self> {
        let member = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO team_members (
                id, name, role, bio, image_url, twitter, instagram, facebook, linkedin, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(TeamMemberId::new())
        .bind(&input.name)
        .bind(&input.role)
        .bind(&input.bio)
        .bind(&input.image_url)
        .bind(&input.twitter)
        .bind(&input.instagram)
        .bind(&input.facebook)
        .bind(&input.linkedin)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(member)
    }

    pub async fn update(id: TeamMemberId, input: UpdateTeamMember, pool: &PgPool) -> Result<Self> {
        let member = sqlx::query_as::<_, Self>(
            r#"
            UPDATE team_members SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                bio = COALESCE($4, bio),
                image_url = COALESCE($5, image_url),
                twitter = COALESCE($6, twitter),
                instagram = COALESCE($7, instagram),
                facebook = COALESCE($8, facebook),
                linkedin = COALESCE($9, linkedin),
                is_active = COALESCE($10, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.role)
        .bind(&input.bio)
        .bind(&input.image_url)
        .bind(&input.twitter)
        .bind(&input.instagram)
        .bind(&input.facebook)
        .bind(&input.linkedin)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(member)
    }

    pub async fn delete(id: TeamMemberId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
