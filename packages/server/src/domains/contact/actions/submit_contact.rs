use tracing::{info, warn};
use validator::Validate;

use crate::common::{FormErrors, FormSubmitError};
use crate::domains::contact::data::ContactForm;
use crate::domains::contact::models::{Contact, CreateContact};
use crate::kernel::{OutgoingEmail, ServerDeps};

/// Notification sent to the site's inbox for a new message
pub fn contact_notification(contact: &Contact, to: &str) -> OutgoingEmail {
    OutgoingEmail {
        to: to.to_string(),
        subject: format!("New Contact Form Submission: {}", contact.subject),
        body: format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            contact.name, contact.email, contact.message
        ),
    }
}

/// Store a contact message and notify the team by email.
///
/// A failed email is logged; the message is still stored.
pub async fn submit_contact(form: ContactForm, deps: &ServerDeps) -> Result<Contact, FormSubmitError> {
    form.validate()
        .map_err(|e| FormSubmitError::Invalid(FormErrors::from(e)))?;

    let contact = Contact::create(CreateContact::from(form), &deps.db_pool).await?;
    info!(contact_id = %contact.id, "Contact message received");

    let email = contact_notification(&contact, &deps.settings.notification_email);
    if let Err(e) = deps.mailer.send(email).await {
        warn!(contact_id = %contact.id, error = %e, "Email sending failed");
    }

    Ok(contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ContactId;
    use chrono::Utc;

    #[test]
    fn notification_matches_site_format() {
        let contact = Contact {
            id: ContactId::new(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Partnership".to_string(),
            message: "Let's talk.".to_string(),
            is_read: false,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let email = contact_notification(&contact, "team@gywan.org");
        assert_eq!(email.to, "team@gywan.org");
        assert_eq!(email.subject, "New Contact Form Submission: Partnership");
        assert_eq!(
            email.body,
            "Name: Jane\nEmail: jane@example.com\n\nMessage:\nLet's talk."
        );
    }
}
