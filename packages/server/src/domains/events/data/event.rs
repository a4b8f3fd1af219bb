use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::domains::events::models::{CreateEvent, Event, UpdateEvent};

/// Event GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "An event listed on the public site")]
pub struct EventData {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
    pub twitter_url: String,
    pub image_url: Option<String>,
    pub featured: bool,
    pub registration_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for EventData {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            slug: event.slug,
            description: event.description,
            date: event.date,
            location: event.location,
            facebook_url: event.facebook_url,
            instagram_url: event.instagram_url,
            youtube_url: event.youtube_url,
            twitter_url: event.twitter_url,
            image_url: event.image_url,
            featured: event.featured,
            registration_url: event.registration_url,
            is_active: event.is_active,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// Input for creating an event from the admin API
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateEventInput {
    pub title: String,
    /// Derived from the title when omitted or blank
    pub slug: Option<String>,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub twitter_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub registration_url: Option<String>,
    pub is_active: Option<bool>,
}

impl From<CreateEventInput> for CreateEvent {
    fn from(input: CreateEventInput) -> Self {
        CreateEvent {
            title: input.title,
            slug: input.slug,
            description: input.description,
            date: input.date,
            location: input.location,
            facebook_url: input.facebook_url.unwrap_or_default(),
            instagram_url: input.instagram_url.unwrap_or_default(),
            youtube_url: input.youtube_url.unwrap_or_default(),
            twitter_url: input.twitter_url.unwrap_or_default(),
            image_url: input.image_url,
            featured: input.featured.unwrap_or(false),
            registration_url: input.registration_url.unwrap_or_default(),
            is_active: input.is_active.unwrap_or(true),
        }
    }
}

/// Input for updating an event; omitted fields are left unchanged
#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpdateEventInput {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub twitter_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub registration_url: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateEventInput> for UpdateEvent {
    fn from(input: UpdateEventInput) -> Self {
        UpdateEvent {
            title: input.title,
            slug: input.slug,
            description: input.description,
            date: input.date,
            location: input.location,
            facebook_url: input.facebook_url,
            instagram_url: input.instagram_url,
            youtube_url: input.youtube_url,
            twitter_url: input.twitter_url,
            image_url: input.image_url,
            featured: input.featured,
            registration_url: input.registration_url,
            is_active: input.is_active,
        }
    }
}
