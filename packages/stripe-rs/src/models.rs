use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parameters for `POST /v1/payment_intents`.
#[derive(Debug, Clone, Default)]
pub struct CreatePaymentIntent {
    /// Amount in the smallest currency unit (cents for usd).
    pub amount: i64,
    pub currency: String,
    pub metadata: BTreeMap<String, String>,
    pub description: Option<String>,
    pub receipt_email: Option<String>,
    /// `off_session` keeps the payment method around for later charges.
    pub setup_future_usage: Option<String>,
}

impl CreatePaymentIntent {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Flatten into Stripe's bracketed form encoding (`metadata[key]=value`).
    pub fn to_form(&self) -> Vec<(String, String)> {
        let mut form = vec![
            ("amount".to_string(), self.amount.to_string()),
            ("currency".to_string(), self.currency.clone()),
        ];

        for (key, value) in &self.metadata {
            form.push((format!("metadata[{}]", key), value.clone()));
        }
        if let Some(description) = &self.description {
            form.push(("description".to_string(), description.clone()));
        }
        if let Some(email) = &self.receipt_email {
            form.push(("receipt_email".to_string(), email.clone()));
        }
        if let Some(usage) = &self.setup_future_usage {
            form.push(("setup_future_usage".to_string(), usage.clone()));
        }

        form
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

/// Error envelope returned by the Stripe API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_contains_bracketed_metadata() {
        let params = CreatePaymentIntent::new(2500, "usd")
            .with_metadata("donor_name", "Ada")
            .with_metadata("donation_type", "monthly");

        let form = params.to_form();

        assert!(form.contains(&("amount".to_string(), "2500".to_string())));
        assert!(form.contains(&("currency".to_string(), "usd".to_string())));
        assert!(form.contains(&("metadata[donor_name]".to_string(), "Ada".to_string())));
        assert!(form.contains(&("metadata[donation_type]".to_string(), "monthly".to_string())));
        assert!(!form.iter().any(|(k, _)| k == "setup_future_usage"));
    }

    #[test]
    fn optional_fields_only_when_set() {
        let mut params = CreatePaymentIntent::new(100, "usd");
        params.setup_future_usage = Some("off_session".to_string());

        let form = params.to_form();

        assert!(form.contains(&("setup_future_usage".to_string(), "off_session".to_string())));
        assert!(!form.iter().any(|(k, _)| k == "description"));
    }
}
