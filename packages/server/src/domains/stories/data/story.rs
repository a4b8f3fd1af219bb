use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::domains::stories::models::{CreateStory, Story, UpdateStory};

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A story shared on the public site")]
pub struct StoryData {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: String,
    pub location: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
    pub twitter_url: String,
    pub image_url: Option<String>,
    pub featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Story> for StoryData {
    fn from(story: Story) -> Self {
        Self {
            id: story.id.to_string(),
            title: story.title,
            slug: story.slug,
            content: story.content,
            author: story.author,
            location: story.location,
            facebook_url: story.facebook_url,
            instagram_url: story.instagram_url,
            youtube_url: story.youtube_url,
            twitter_url: story.twitter_url,
            image_url: story.image_url,
            featured: story.featured,
            is_active: story.is_active,
            created_at: story.created_at,
            updated_at: story.updated_at,
        }
    }
}

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateStoryInput {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub author: String,
    pub location: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub twitter_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub is_active: Option<bool>,
}

impl From<CreateStoryInput> for CreateStory {
    fn from(input: CreateStoryInput) -> Self {
        CreateStory {
            title: input.title,
            slug: input.slug,
            content: input.content,
            author: input.author,
            location: input.location.unwrap_or_default(),
            facebook_url: input.facebook_url.unwrap_or_default(),
            instagram_url: input.instagram_url.unwrap_or_default(),
            youtube_url: input.youtube_url.unwrap_or_default(),
            twitter_url: input.twitter_url.unwrap_or_default(),
            image_url: input.image_url,
            featured: input.featured.unwrap_or(false),
            is_active: input.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpdateStoryInput {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub location: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub twitter_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub is_active: Option<bool>,
}

impl From<UpdateStoryInput> for UpdateStory {
    fn from(input: UpdateStoryInput) -> Self {
        UpdateStory {
            title: input.title,
            slug: input.slug,
            content: input.content,
            author: input.author,
            location: input.location,
            facebook_url: input.facebook_url,
            instagram_url: input.instagram_url,
            youtube_url: input.youtube_url,
            twitter_url: input.twitter_url,
            image_url: input.image_url,
            featured: input.featured,
            is_active: input.is_active,
        }
    }
}
