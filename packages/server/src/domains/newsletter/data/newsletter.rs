use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domains::newsletter::models::{CreateNewsletter, Newsletter};

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A newsletter subscription")]
pub struct NewsletterData {
    pub id: String,
    pub email: String,
    pub name: String,
    pub subscribed: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Newsletter> for NewsletterData {
    fn from(subscription: Newsletter) -> Self {
        Self {
            id: subscription.id.to_string(),
            email: subscription.email,
            name: subscription.name,
            subscribed: subscription.subscribed,
            is_active: subscription.is_active,
            created_at: subscription.created_at,
            updated_at: subscription.updated_at,
        }
    }
}

/// Sign-up form, posted form-encoded by the site's newsletter widget
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewsletterForm {
    #[serde(default)]
    #[validate(
        custom(function = "crate::common::forms::required"),
        email(message = "Enter a valid email address.")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Ensure this value has at most 200 characters."))]
    pub name: String,
}

impl From<NewsletterForm> for CreateNewsletter {
    fn from(form: NewsletterForm) -> Self {
        CreateNewsletter {
            email: form.email.trim().to_string(),
            name: form.name.trim().to_string(),
        }
    }
}
