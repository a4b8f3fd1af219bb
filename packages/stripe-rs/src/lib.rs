// Thin client for the slice of the Stripe REST API the site uses.
// https://docs.stripe.com/api/payment_intents/create

pub mod models;

use reqwest::{header, Client};
use thiserror::Error;

pub use crate::models::{ApiErrorResponse, CreatePaymentIntent, PaymentIntent};

pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

#[derive(Debug, Error)]
pub enum StripeError {
    #[error("request to Stripe failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Stripe returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse Stripe response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct StripeOptions {
    pub secret_key: String,
    pub api_base: String,
}

impl StripeOptions {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StripeService {
    options: StripeOptions,
    client: Client,
}

impl StripeService {
    pub fn new(options: StripeOptions) -> Self {
        Self {
            options,
            client: Client::new(),
        }
    }

    pub async fn create_payment_intent(
        &self,
        params: &CreatePaymentIntent,
    ) -> Result<PaymentIntent, StripeError> {
        let url = format!(
            "{base}/v1/payment_intents",
            base = self.options.api_base.trim_end_matches('/')
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.options.secret_key)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .form(&params.to_form())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Stripe rejected payment intent");
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(StripeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<PaymentIntent>()
            .await
            .map_err(|e| StripeError::Parse(e.to_string()))
    }
}
