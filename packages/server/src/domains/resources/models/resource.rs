use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::utils::like_pattern;
use crate::common::{AdminFilter, PageWindow, ResourceId};

/// Resource category enum for type-safe filtering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Guide,
    Report,
    Toolkit,
    Policy,
    Research,
    #[default]
    Other,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 6] = [
        ResourceCategory::Guide,
        ResourceCategory::Report,
        ResourceCategory::Toolkit,
        ResourceCategory::Policy,
        ResourceCategory::Research,
        ResourceCategory::Other,
    ];

    /// Human label used for the category filter links
    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Guide => "Guides",
            ResourceCategory::Report => "Reports",
            ResourceCategory::Toolkit => "Toolkits",
            ResourceCategory::Policy => "Policy Briefs",
            ResourceCategory::Research => "Research",
            ResourceCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceCategory::Guide => write!(f, "guide"),
            ResourceCategory::Report => write!(f, "report"),
            ResourceCategory::Toolkit => write!(f, "toolkit"),
            ResourceCategory::Policy => write!(f, "policy"),
            ResourceCategory::Research => write!(f, "research"),
            ResourceCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ResourceCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "guide" => Ok(ResourceCategory::Guide),
            "report" => Ok(ResourceCategory::Report),
            "toolkit" => Ok(ResourceCategory::Toolkit),
            "policy" => Ok(ResourceCategory::Policy),
            "research" => Ok(ResourceCategory::Research),
            "other" => Ok(ResourceCategory::Other),
            _ => Err(anyhow::anyhow!("Invalid resource category: {}", s)),
        }
    }
}

/// Resource model - a downloadable file
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub description: String,
    pub file_url: String,
    pub image_url: Option<String>,
    pub category: String,
    /// Only changed through `increment_download_count`
    pub download_count: i32,
    pub featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateResource {
    pub title: String,
    pub description: String,
    pub file_url: String,
    #[builder(default, setter(strip_option))]
    pub image_url: Option<String>,
    #[builder(default)]
    pub category: ResourceCategory,
    #[builder(default = false)]
    pub featured: bool,
    #[builder(default = true)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateResource {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<ResourceCategory>,
    pub featured: Option<bool>,
    pub is_active: Option<bool>,
}

impl Resource {
    pub async fn find_by_id(id: ResourceId, pool: &PgPool) -> Result<Option<Self>> {
        let resource = sqlx::query_as::<_, Self>("SELECT * FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(resource)
    }

    /// Newest active resources, for the home page
    pub async fn find_latest(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let resources = sqlx::query_as::<_, Self>(
            "SELECT * FROM resources WHERE is_active = true ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(resources)
    }

    /// Count active resources, optionally in one category.
    ///
    /// The category is matched as given, so an unknown value counts nothing.
    pub async fn count_public(category: Option<&str>, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM resources
            WHERE is_active = true AND ($1::text IS NULL OR category = $1)
            "#,
        )
        .bind(non_empty(category))
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    pub async fn find_public_page(
        category: Option<&str>,
        window: &PageWindow,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let resources = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM resources
            WHERE is_active = true AND ($1::text IS NULL OR category = $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(non_empty(category))
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(pool)
        .await?;
        Ok(resources)
    }

    /// Admin list: `flag` filters on `featured`, `kind` on `category`
    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let resources = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM resources
            WHERE ($1::text IS NULL OR title ILIKE $1 OR description ILIKE $1)
              AND ($2::bool IS NULL OR is_active = $2)
              AND ($3::bool IS NULL OR featured = $3)
              AND ($4::text IS NULL OR category = $4)
            ORDER BY created_at DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.is_active)
        .bind(filter.flag)
        .bind(non_empty(filter.kind.as_deref()))
        .fetch_all(pool)
        .await?;
        Ok(resources)
    }

    pub async fn create(input: CreateResource, pool: &PgPool) -> Result<Self> {
        let resource = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO resources (
                id, title, description, file_url, image_url, category, featured, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(ResourceId::new())
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.file_url)
        .bind(&input.image_url)
        .bind(input.category.to_string())
        .bind(input.featured)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(resource)
    }

    pub async fn update(id: ResourceId, input: UpdateResource, pool: &PgPool) -> Result<Self> {
        let resource = sqlx::query_as::<_, Self>(
            r#"
            UPDATE resources SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                file_url = COALESCE($4, file_url),
                image_url = COALESCE($5, image_url),
                category = COALESCE($6, category),
                featured = COALESCE($7, featured),
                is_active = COALESCE($8, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.file_url)
        .bind(&input.image_url)
        .bind(input.category.map(|c| c.to_string()))
        .bind(input.featured)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(resource)
    }

    /// Single-statement increment so concurrent downloads are all counted.
    /// `None` when the resource doesn't exist.
    pub async fn increment_download_count(id: ResourceId, pool: &PgPool) -> Result<Option<i32>> {
        let count = sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE resources SET download_count = download_count + 1
            WHERE id = $1
            RETURNING download_count
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(count)
    }

    pub async fn delete(id: ResourceId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub fn category_enum(&self) -> Option<ResourceCategory> {
        self.category.parse().ok()
    }

    /// Label for the stored category, falling back to the raw value
    pub fn category_label(&self) -> String {
        self.category_enum()
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| self.category.clone())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_strings() {
        for category in ResourceCategory::ALL {
            let parsed: ResourceCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("brochure".parse::<ResourceCategory>().is_err());
    }

    #[test]
    fn default_category_is_other() {
        assert_eq!(ResourceCategory::default(), ResourceCategory::Other);
        assert_eq!(ResourceCategory::Policy.label(), "Policy Briefs");
    }

    #[test]
    fn empty_category_means_no_filter() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("  ")), Some("  "));
        assert_eq!(non_empty(Some("guide")), Some("guide"));
        assert_eq!(non_empty(None), None);
    }
}
