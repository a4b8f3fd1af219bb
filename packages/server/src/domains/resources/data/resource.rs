use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::domains::resources::models::{CreateResource, Resource, ResourceCategory, UpdateResource};

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A downloadable resource")]
pub struct ResourceData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub file_url: String,
    pub image_url: Option<String>,
    /// guide, report, toolkit, policy, research or other
    pub category: String,
    pub category_label: String,
    /// Read-only; bumped by the download tracking endpoint
    pub download_count: i32,
    pub featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Resource> for ResourceData {
    fn from(resource: Resource) -> Self {
        let category_label = resource.category_label();
        Self {
            id: resource.id.to_string(),
            title: resource.title,
            description: resource.description,
            file_url: resource.file_url,
            image_url: resource.image_url,
            category: resource.category,
            category_label,
            download_count: resource.download_count,
            featured: resource.featured,
            is_active: resource.is_active,
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        }
    }
}

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateResourceInput {
    pub title: String,
    pub description: String,
    pub file_url: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub is_active: Option<bool>,
}

impl TryFrom<CreateResourceInput> for CreateResource {
    type Error = anyhow::Error;

    fn try_from(input: CreateResourceInput) -> anyhow::Result<Self> {
        let category = match input.category.as_deref() {
            Some(c) => c.parse::<ResourceCategory>()?,
            None => ResourceCategory::default(),
        };

        Ok(CreateResource {
            title: input.title,
            description: input.description,
            file_url: input.file_url,
            image_url: input.image_url,
            category,
            featured: input.featured.unwrap_or(false),
            is_active: input.is_active.unwrap_or(true),
        })
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpdateResourceInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub is_active: Option<bool>,
}

impl TryFrom<UpdateResourceInput> for UpdateResource {
    type Error = anyhow::Error;

    fn try_from(input: UpdateResourceInput) -> anyhow::Result<Self> {
        let category = input
            .category
            .as_deref()
            .map(str::parse::<ResourceCategory>)
            .transpose()?;

        Ok(UpdateResource {
            title: input.title,
            description: input.description,
            file_url: input.file_url,
            image_url: input.image_url,
            category,
            featured: input.featured,
            is_active: input.is_active,
        })
    }
}
