use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::domains::team::models::{CreateSupporter, Supporter, UpdateSupporter};

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A supporter listed on the team page")]
pub struct SupporterData {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Supporter> for SupporterData {
    fn from(supporter: Supporter) -> Self {
        Self {
            id: supporter.id.to_string(),
            name: supporter.name,
            role: supporter.role,
            image_url: supporter.image_url,
            is_active: supporter.is_active,
            created_at: supporter.created_at,
            updated_at: supporter.updated_at,
        }
    }
}

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateSupporterInput {
    pub name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl From<CreateSupporterInput> for CreateSupporter {
    fn from(input: CreateSupporterInput) -> Self {
        CreateSupporter {
            name: input.name,
            role: input.role,
            image_url: input.image_url,
            is_active: input.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpdateSupporterInput {
    pub name: Option<String>,
    pub role: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateSupporterInput> for UpdateSupporter {
    fn from(input: UpdateSupporterInput) -> Self {
        UpdateSupporter {
            name: input.name,
            role: input.role,
            image_url: input.image_url,
            is_active: input.is_active,
        }
    }
}
