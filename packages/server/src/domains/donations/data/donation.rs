use std::borrow::Cow;

use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domains::donations::models::{Donation, DonationType};

/// Largest amount a NUMERIC(10, 2) column holds
const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Donation GraphQL data type. Everything except `processed` is read-only.
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "A donation pledged through the donate page")]
pub struct DonationData {
    pub id: String,
    /// Decimal dollars, e.g. "25.00"
    pub amount: String,
    pub donation_type: String,
    pub donor_name: String,
    pub donor_email: String,
    pub stripe_payment_id: String,
    pub is_anonymous: bool,
    pub message: String,
    pub processed: bool,
    pub is_active: bool,
    /// "$25.00 - Jane Doe"
    pub display: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Donation> for DonationData {
    fn from(donation: Donation) -> Self {
        let display = donation.to_string();
        Self {
            id: donation.id.to_string(),
            amount: donation.amount.to_string(),
            donation_type: donation.donation_type,
            donor_name: donation.donor_name,
            donor_email: donation.donor_email,
            stripe_payment_id: donation.stripe_payment_id,
            is_anonymous: donation.is_anonymous,
            message: donation.message,
            processed: donation.processed,
            is_active: donation.is_active,
            display,
            created_at: donation.created_at,
            updated_at: donation.updated_at,
        }
    }
}

/// JSON body posted by the donate page
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DonationRequest {
    /// Dollars; accepts a JSON number or a numeric string
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,

    #[validate(custom(function = "validate_donation_type"))]
    pub donation_type: String,

    #[validate(
        custom(function = "crate::common::forms::required"),
        length(max = 200, message = "Ensure this value has at most 200 characters.")
    )]
    pub donor_name: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub donor_email: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub is_anonymous: bool,
}

impl DonationRequest {
    /// Only meaningful after `validate()` succeeded
    pub fn kind(&self) -> DonationType {
        self.donation_type.parse().unwrap_or_default()
    }
}

fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount < Decimal::ONE {
        return Err(validation_error(
            "min_value",
            "Ensure this value is greater than or equal to 1.00.",
        ));
    }
    if amount.normalize().scale() > 2 {
        return Err(validation_error(
            "max_decimal_places",
            "Ensure that there are no more than 2 decimal places.",
        ));
    }
    if *amount > MAX_AMOUNT {
        return Err(validation_error(
            "max_value",
            "Ensure that there are no more than 10 digits in total.",
        ));
    }
    Ok(())
}

fn validate_donation_type(donation_type: &str) -> Result<(), ValidationError> {
    donation_type
        .parse::<DonationType>()
        .map(|_| ())
        .map_err(|_| {
            validation_error(
                "invalid_choice",
                "Select a valid choice. That choice is not one of the available choices.",
            )
        })
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}
