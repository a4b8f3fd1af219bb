use axum::{extract::Extension, Form, Json};
use serde_json::{json, Value};

use crate::common::FormSubmitError;
use crate::domains::newsletter::actions::subscribe;
use crate::domains::newsletter::NewsletterForm;
use crate::server::app::AppState;
use crate::server::error::AppError;

pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing!";
pub const INVALID_METHOD_MESSAGE: &str = "Invalid request method";

/// POST /newsletter-subscribe/ (form-encoded `email`, `name`)
///
/// Field errors come back with a 200 so the footer widget can show them.
pub async fn newsletter_subscribe(
    Extension(state): Extension<AppState>,
    Form(form): Form<NewsletterForm>,
) -> Result<Json<Value>, AppError> {
    match subscribe(form, &state.deps).await {
        Ok(_) => Ok(Json(json!({
            "success": true,
            "message": SUBSCRIBED_MESSAGE,
        }))),
        Err(FormSubmitError::Invalid(errors)) => Ok(Json(json!({
            "success": false,
            "errors": errors,
        }))),
        Err(FormSubmitError::Internal(e)) => Err(AppError::Internal(e)),
    }
}

/// GET /newsletter-subscribe/
pub async fn newsletter_subscribe_get() -> Json<Value> {
    Json(json!({
        "success": false,
        "error": INVALID_METHOD_MESSAGE,
    }))
}
