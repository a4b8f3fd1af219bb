use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::domains::blog::models::{BlogPost, CreateBlogPost, UpdateBlogPost};

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A blog post")]
pub struct BlogPostData {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub excerpt: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
    pub twitter_url: String,
    pub tags: String,
    /// `tags` split on commas
    pub tags_list: Vec<String>,
    pub featured: bool,
    pub published: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostData {
    fn from(post: BlogPost) -> Self {
        let tags_list = post.tags_list();
        Self {
            id: post.id.to_string(),
            title: post.title,
            slug: post.slug,
            content: post.content,
            author: post.author,
            image_url: post.image_url,
            excerpt: post.excerpt,
            facebook_url: post.facebook_url,
            instagram_url: post.instagram_url,
            youtube_url: post.youtube_url,
            twitter_url: post.twitter_url,
            tags: post.tags,
            tags_list,
            featured: post.featured,
            published: post.published,
            is_active: post.is_active,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateBlogPostInput {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    /// Defaults to the signed-in admin's email
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub excerpt: String,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub twitter_url: Option<String>,
    pub tags: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub is_active: Option<bool>,
}

impl CreateBlogPostInput {
    pub fn into_create(self, default_author: &str) -> CreateBlogPost {
        CreateBlogPost {
            title: self.title,
            slug: self.slug,
            content: self.content,
            author: self
                .author
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| default_author.to_string()),
            image_url: self.image_url,
            excerpt: self.excerpt,
            facebook_url: self.facebook_url.unwrap_or_default(),
            instagram_url: self.instagram_url.unwrap_or_default(),
            youtube_url: self.youtube_url.unwrap_or_default(),
            twitter_url: self.twitter_url.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            featured: self.featured.unwrap_or(false),
            published: self.published.unwrap_or(true),
            is_active: self.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpdateBlogPostInput {
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

impl From<UpdateBlogPostInput> for UpdateBlogPost {
    fn from(input: UpdateBlogPostInput) -> Self {
        UpdateBlogPost {
            title: input.title,
            slug: input.slug,
            content: input.content,
            author: input.author,
            image_url: input.image_url,
            excerpt: input.excerpt,
            facebook_url: input.facebook_url,
            instagram_url: input.instagram_url,
            youtube_url: input.youtube_url,
            twitter_url: input.twitter_url,
            tags: input.tags,
            featured: input.featured,
            published: input.published,
            is_active: input.is_active,
        }
    }
}
