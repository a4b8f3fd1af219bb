//! HTTP boundary errors.
//!
//! JSON endpoints answer with `{"success": false, "error": ...}`; HTML pages
//! render the site's 404/500 pages. Internal causes are logged, never sent.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::{FormErrors, FormSubmitError, InvalidPage};
use crate::server::views;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";
pub const PAYMENT_ERROR_MESSAGE: &str = "Payment processing failed. Please try again.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid form submission")]
    Validation(FormErrors),

    #[error("Payment failed: {0}")]
    Payment(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) | AppError::Payment(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show a visitor
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound => "Not found".to_string(),
            AppError::BadRequest(message) => message.clone(),
            AppError::Validation(errors) => errors
                .first_message()
                .unwrap_or("Invalid form submission")
                .to_string(),
            AppError::Payment(_) => PAYMENT_ERROR_MESSAGE.to_string(),
            AppError::Internal(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    fn log(&self) {
        match self {
            AppError::Internal(e) => tracing::error!(error = ?e, "Internal error"),
            AppError::Payment(message) => tracing::error!(error = %message, "Payment error"),
            _ => {}
        }
    }
}

impl From<FormSubmitError> for AppError {
    fn from(error: FormSubmitError) -> Self {
        match error {
            FormSubmitError::Invalid(errors) => AppError::Validation(errors),
            FormSubmitError::Internal(e) => AppError::Internal(e),
        }
    }
}

impl From<InvalidPage> for AppError {
    fn from(_: InvalidPage) -> Self {
        AppError::NotFound
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let body = match &self {
            AppError::Validation(errors) => json!({
                "success": false,
                "error": self.public_message(),
                "errors": errors,
            }),
            _ => json!({
                "success": false,
                "error": self.public_message(),
            }),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Error from an HTML page handler
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Page not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<InvalidPage> for PageError {
    fn from(_: InvalidPage) -> Self {
        PageError::NotFound
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => {
                (StatusCode::NOT_FOUND, Html(views::errors::not_found())).into_response()
            }
            PageError::Internal(e) => {
                tracing::error!(error = ?e, "Page rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::errors::server_error()),
                )
                    .into_response()
            }
        }
    }
}
