use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::domains::impact::models::{CreateImpactStat, ImpactStat, UpdateImpactStat};

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A headline impact figure")]
pub struct ImpactStatData {
    pub id: String,
    pub label: String,
    pub value: String,
    pub description: String,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    /// "{label}: {value}"
    pub display: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ImpactStat> for ImpactStatData {
    fn from(stat: ImpactStat) -> Self {
        let display = stat.to_string();
        Self {
            id: stat.id.to_string(),
            label: stat.label,
            value: stat.value,
            description: stat.description,
            image_url: stat.image_url,
            display_order: stat.display_order,
            is_active: stat.is_active,
            display,
            created_at: stat.created_at,
            updated_at: stat.updated_at,
        }
    }
}

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateImpactStatInput {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl From<CreateImpactStatInput> for CreateImpactStat {
    fn from(input: CreateImpactStatInput) -> Self {
        CreateImpactStat {
            label: input.label,
            value: input.value,
            description: input.description.unwrap_or_default(),
            image_url: input.image_url,
            display_order: input.display_order.unwrap_or(0),
            is_active: input.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpdateImpactStatInput {
    pub label: Option<String>,
    pub value: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl From<UpdateImpactStatInput> for UpdateImpactStat {
    fn from(input: UpdateImpactStatInput) -> Self {
        UpdateImpactStat {
            label: input.label,
            value: input.value,
            description: input.description,
            image_url: input.image_url,
            display_order: input.display_order,
            is_active: input.is_active,
        }
    }
}
