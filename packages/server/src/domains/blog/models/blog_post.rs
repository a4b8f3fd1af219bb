use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::utils::{clean_slug, like_pattern, slug_or_title, tag_list};
use crate::common::{AdminFilter, BlogPostId, PageWindow};

/// Blog post model. Only `published AND is_active` posts reach the public site.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub slug: String,
    /// Admin-authored HTML
    pub content: String,
    /// Display name of the writing admin
    pub author: String,
    pub image_url: Option<String>,
    pub excerpt: String,

    // Social links (blank when unset)
    pub facebook_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
    pub twitter_url: String,

    /// Comma separated
    pub tags: String,
    pub featured: bool,
    pub published: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateBlogPost {
    pub title: String,
    #[builder(default, setter(strip_option))]
    pub slug: Option<String>,
    pub content: String,
    pub author: String,
    #[builder(default, setter(strip_option))]
    pub image_url: Option<String>,
    pub excerpt: String,
    #[builder(default)]
    pub facebook_url: String,
    #[builder(default)]
    pub instagram_url: String,
    #[builder(default)]
    pub youtube_url: String,
    #[builder(default)]
    pub twitter_url: String,
    #[builder(default)]
    pub tags: String,
    #[builder(default = false)]
    pub featured: bool,
    #[builder(default = true)]
    pub published: bool,
    #[builder(default = true)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub excerpt: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub twitter_url: Option<String>,
    pub tags: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub is_active: Option<bool>,
}

impl BlogPost {
    pub async fn find_by_id(id: BlogPostId, pool: &PgPool) -> Result<Option<Self>> {
        let post = sqlx::query_as::<_, Self>("SELECT * FROM blog_posts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(post)
    }

    /// Published, active post by slug
    pub async fn find_visible_by_slug(slug: &str, pool: &PgPool) -> Result<Option<Self>> {
        let post = sqlx::query_as::<_, Self>(
            "SELECT * FROM blog_posts WHERE slug = $1 AND published = true AND is_active = true",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await?;
        Ok(post)
    }

    pub async fn count_public(search: Option<&str>, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM blog_posts
            WHERE published = true AND is_active = true
              AND ($1::text IS NULL OR title ILIKE $1 OR content ILIKE $1 OR tags ILIKE $1)
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
        let posts = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM blog_posts
            WHERE published = true AND is_active = true
              AND ($1::text IS NULL OR title ILIKE $1 OR content ILIKE $1 OR tags ILIKE $1)
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(like_pattern(search))
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(pool)
        .await?;
        Ok(posts)
    }

    /// Admin list: `flag` filters on `published`
    pub async fn find_for_admin(filter: &AdminFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let posts = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM blog_posts
            WHERE ($1::text IS NULL OR title ILIKE $1 OR content ILIKE $1 OR excerpt ILIKE $1
                   OR tags ILIKE $1)
              AND ($2::bool IS NULL OR is_active = $2)
              AND ($3::bool IS NULL OR published = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(like_pattern(filter.search.as_deref()))
        .bind(filter.is_active)
        .bind(filter.flag)
        .fetch_all(pool)
        .await?;
        Ok(posts)
    }

    pub async fn create(input: CreateBlogPost, pool: &PgPool) -> Result<Self> {
        let slug = slug_or_title(input.slug.as_deref(), &input.title)?;

        let post = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO blog_posts (
                id, title, slug, content, author, image_url, excerpt,
                facebook_url, instagram_url, youtube_url, twitter_url,
                tags, featured, published, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(BlogPostId::new())
        .bind(&input.title)
        .bind(&slug)
        .bind(&input.content)
        .bind(&input.author)
        .bind(&input.image_url)
        .bind(&input.excerpt)
        .bind(&input.facebook_url)
        .bind(&input.instagram_url)
        .bind(&input.youtube_url)
        .bind(&input.twitter_url)
        .bind(&input.tags)
        .bind(input.featured)
        .bind(input.published)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(post)
    }

    pub async fn update(id: BlogPostId, input: UpdateBlogPost, pool: &PgPool) -> Result<Self> {
        let slug = clean_slug(input.slug.as_deref())?;

        let post = sqlx::query_as::<_, Self>(
            r#"
            UPDATE blog_posts SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                content = COALESCE($4, content),
                author = COALESCE($5, author),
                image_url = COALESCE($6, image_url),
                excerpt = COALESCE($7, excerpt),
                facebook_url = COALESCE($8, facebook_url),
                instagram_url = COALESCE($9, instagram_url),
                youtube_url = COALESCE($10, youtube_url),
                twitter_url = COALESCE($11, twitter_url),
                tags = COALESCE($12, tags),
                featured = COALESCE($13, featured),
                published = COALESCE($14, published),
                is_active = COALESCE($15, is_active),
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
        .bind(&input.image_url)
        .bind(&input.excerpt)
        .bind(&input.facebook_url)
        .bind(&input.instagram_url)
        .bind(&input.youtube_url)
        .bind(&input.twitter_url)
        .bind(&input.tags)
        .bind(input.featured)
        .bind(input.published)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(post)
    }

    pub async fn delete(id: BlogPostId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Trimmed tags; empty when `tags` is blank
    pub fn tags_list(&self) -> Vec<String> {
        tag_list(&self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_tags(tags: &str) -> BlogPost {
        BlogPost {
            id: BlogPostId::new(),
            title: "Why Girls' Education Matters".to_string(),
            slug: "why-girls-education-matters".to_string(),
            content: "<p>Body</p>".to_string(),
            author: "Amina".to_string(),
            image_url: None,
            excerpt: "Short".to_string(),
            facebook_url: String::new(),
            instagram_url: String::new(),
            youtube_url: String::new(),
            twitter_url: String::new(),
            tags: tags.to_string(),
            featured: false,
            published: true,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn tags_list_splits_and_trims() {
        let post = post_with_tags("education, advocacy ,health");
        assert_eq!(post.tags_list(), vec!["education", "advocacy", "health"]);
    }

    #[test]
    fn empty_tags_give_empty_list() {
        assert!(post_with_tags("").tags_list().is_empty());
    }
}
