//! Field-level form errors, shared by HTML forms and the JSON endpoints.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Outcome of a failed form submission
#[derive(Debug, Error)]
pub enum FormSubmitError {
    #[error("Invalid form submission")]
    Invalid(FormErrors),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Field name → messages, serialized as `{"email": ["Enter a valid email address."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first_message(&self) -> Option<&str> {
        self.0.values().flatten().next().map(String::as_str)
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_errors = FormErrors::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", error.code));
                form_errors.add(&field.to_string(), message);
            }
        }
        form_errors
    }
}

/// Custom validator: rejects empty and whitespace-only values.
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed(REQUIRED_MESSAGE));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(email(message = "Enter a valid email address."))]
        email: String,
        #[validate(custom(function = "required"))]
        name: String,
    }

    #[test]
    fn collects_validator_messages_per_field() {
        let sample = Sample {
            email: "nope".to_string(),
            name: "   ".to_string(),
        };
        let errors = FormErrors::from(sample.validate().unwrap_err());

        assert_eq!(errors.get("email"), ["Enter a valid email address."]);
        assert_eq!(errors.get("name"), ["This field is required."]);
        assert!(errors.get("message").is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let errors = FormErrors::single("email", "Taken.");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "email": ["Taken."] }));
    }
}
