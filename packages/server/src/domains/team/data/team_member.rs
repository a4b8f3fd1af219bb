use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use serde::{Deserialize, Serialize};

use crate::domains::team::models::{CreateTeamMember, TeamMember, UpdateTeamMember};

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A member of the team")]
pub struct TeamMemberData {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: Option<String>,
    pub twitter: String,
    pub instagram: String,
    pub facebook: String,
    pub linkedin: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TeamMember> for TeamMemberData {
    fn from(member: TeamMember) -> Self {
        Self {
            id: member.id.to_string(),
            name: member.name,
            role: member.role,
            bio: member.bio,
            image_url: member.image_url,
            twitter: member.twitter,
            instagram: member.instagram,
            facebook: member.facebook,
            linkedin: member.linkedin,
            is_active: member.is_active,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateTeamMemberInput {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub is_active: Option<bool>,
}

impl From<CreateTeamMemberInput> for CreateTeamMember {
    fn from(input: CreateTeamMemberInput) -> Self {
        CreateTeamMember {
            name: input.name,
            role: input.role,
            bio: input.bio,
            image_url: input.image_url,
            twitter: input.twitter.unwrap_or_default(),
            instagram: input.instagram.unwrap_or_default(),
            facebook: input.facebook.unwrap_or_default(),
            linkedin: input.linkedin.unwrap_or_default(),
            is_active: input.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpdateTeamMemberInput {
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

impl From<UpdateTeamMemberInput> for UpdateTeamMember {
    fn from(input: UpdateTeamMemberInput) -> Self {
        UpdateTeamMember {
            name: input.name,
            role: input.role,
            bio: input.bio,
            image_url: input.image_url,
            twitter: input.twitter,
            instagram: input.instagram,
            facebook: input.facebook,
            linkedin: input.linkedin,
            is_active: input.is_active,
        }
    }
}
