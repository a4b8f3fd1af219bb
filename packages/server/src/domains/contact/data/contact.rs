use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domains::contact::models::{Contact, CreateContact};

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A message sent through the contact page")]
pub struct ContactData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub is_active: bool,
    /// "{subject} - {name}"
    pub display: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactData {
    fn from(contact: Contact) -> Self {
        let display = contact.to_string();
        Self {
            id: contact.id.to_string(),
            name: contact.name,
            email: contact.email,
            subject: contact.subject,
            message: contact.message,
            is_read: contact.is_read,
            is_active: contact.is_active,
            display,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}

/// Contact page form, posted form-encoded
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(
        custom(function = "crate::common::forms::required"),
        length(max = 200, message = "Ensure this value has at most 200 characters.")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[serde(default)]
    #[validate(
        custom(function = "crate::common::forms::required"),
        length(max = 200, message = "Ensure this value has at most 200 characters.")
    )]
    pub subject: String,

    #[serde(default)]
    #[validate(custom(function = "crate::common::forms::required"))]
    pub message: String,
}

impl From<ContactForm> for CreateContact {
    fn from(form: ContactForm) -> Self {
        CreateContact {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            subject: form.subject.trim().to_string(),
            message: form.message,
        }
    }
}
