use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tracing::{error, info};
use validator::Validate;

use crate::common::FormErrors;
use crate::domains::donations::data::DonationRequest;
use crate::domains::donations::models::{CreateDonation, Donation, DonationType};
use crate::kernel::{PaymentIntentRequest, ServerDeps};

pub const DONATION_CURRENCY: &str = "usd";

/// What the donate page needs to confirm the card payment
#[derive(Debug, Clone)]
pub struct DonationReceipt {
    pub donation: Donation,
    pub client_secret: String,
}

#[derive(Debug, Error)]
pub enum DonationError {
    #[error("Invalid donation")]
    Invalid(FormErrors),

    #[error("Payment processor rejected the request")]
    Payment(#[source] anyhow::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Dollars to cents, rounding half away from zero.
pub fn amount_to_cents(amount: Decimal) -> Result<i64> {
    (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| anyhow!("Amount {} does not fit in cents", amount))
}

/// Validate the request, create a Stripe payment intent and record the
/// donation against the intent id.
///
/// Nothing is stored when the payment intent can't be created.
pub async fn process_donation(
    request: DonationRequest,
    deps: &ServerDeps,
) -> Result<DonationReceipt, DonationError> {
    request
        .validate()
        .map_err(|e| DonationError::Invalid(FormErrors::from(e)))?;

    let donation_type = request.kind();
    let amount_cents = amount_to_cents(request.amount)?;

    let mut metadata = BTreeMap::new();
    metadata.insert("donor_name".to_string(), request.donor_name.clone());
    metadata.insert("donor_email".to_string(), request.donor_email.clone());
    metadata.insert("donation_type".to_string(), donation_type.to_string());

    let intent = deps
        .payments
        .create_payment_intent(PaymentIntentRequest {
            amount_cents,
            currency: DONATION_CURRENCY.to_string(),
            metadata,
            save_for_future_use: donation_type == DonationType::Monthly,
        })
        .await
        .map_err(|e| {
            error!(error = %e, amount_cents, "Failed to create payment intent");
            DonationError::Payment(e)
        })?;

    let donation = Donation::create(
        CreateDonation::builder()
            .amount(request.amount)
            .donation_type(donation_type)
            .donor_name(request.donor_name)
            .donor_email(request.donor_email)
            .stripe_payment_id(intent.id.clone())
            .is_anonymous(request.is_anonymous)
            .message(request.message)
            .build(),
        &deps.db_pool,
    )
    .await?;

    info!(
        donation_id = %donation.id,
        payment_intent = %intent.id,
        amount_cents,
        donation_type = %donation_type,
        "Donation recorded"
    );

    Ok(DonationReceipt {
        donation,
        client_secret: intent.client_secret,
    })
}
