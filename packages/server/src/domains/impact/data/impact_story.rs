use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::domains::impact::models::{CreateImpactStory, ImpactStory, UpdateImpactStory};

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A quote shown on the donate page")]
pub struct ImpactStoryData {
    pub id: String,
    pub title: String,
    pub quote: String,
    pub location: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<ImpactStory> for ImpactStoryData {
    fn from(story: ImpactStory) -> Self {
        Self {
            id: story.id.to_string(),
            title: story.title,
            quote: story.quote,
            location: story.location,
            image_url: story.image_url,
            created_at: story.created_at,
        }
    }
}

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateImpactStoryInput {
    pub title: String,
    pub quote: String,
    pub location: String,
    pub image_url: String,
}

impl From<CreateImpactStoryInput> for CreateImpactStory {
    fn from(input: CreateImpactStoryInput) -> Self {
        CreateImpactStory {
            title: input.title,
            quote: input.quote,
            location: input.location,
            image_url: input.image_url,
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpdateImpactStoryInput {
    pub title: Option<String>,
    pub quote: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
}

impl From<UpdateImpactStoryInput> for UpdateImpactStory {
    fn from(input: UpdateImpactStoryInput) -> Self {
        UpdateImpactStory {
            title: input.title,
            quote: input.quote,
            location: input.location,
            image_url: input.image_url,
        }
    }
}
