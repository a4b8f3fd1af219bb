use tracing::info;
use validator::Validate;

use crate::common::{FormErrors, FormSubmitError};
use crate::domains::newsletter::data::NewsletterForm;
use crate::domains::newsletter::models::{CreateNewsletter, Newsletter};
use crate::kernel::ServerDeps;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Newsletter Subscription with this Email already exists.";

/// Subscribe an email to the newsletter.
///
/// A second sign-up with the same email is a field error on `email`.
pub async fn subscribe(form: NewsletterForm, deps: &ServerDeps) -> Result<Newsletter, FormSubmitError> {
    // Validate the trimmed values so " a@b.org " is accepted
    let form = NewsletterForm {
        email: form.email.trim().to_string(),
        name: form.name.trim().to_string(),
    };
    form.validate()
        .map_err(|e| FormSubmitError::Invalid(FormErrors::from(e)))?;

    let created = Newsletter::create_if_new(CreateNewsletter::from(form), &deps.db_pool).await?;

    match created {
        Some(subscription) => {
            info!(newsletter_id = %subscription.id, "Newsletter subscription created");
            Ok(subscription)
        }
        None => Err(FormSubmitError::Invalid(FormErrors::single(
            "email",
            DUPLICATE_EMAIL_MESSAGE,
        ))),
    }
}
