use axum::{body::Bytes, extract::Extension, Json};
use serde::Serialize;
use tracing::{error, warn};

use crate::domains::donations::actions::{process_donation, DonationError};
use crate::domains::donations::DonationRequest;
use crate::server::app::AppState;
use crate::server::error::{AppError, GENERIC_ERROR_MESSAGE};

#[derive(Debug, Serialize)]
pub struct DonationResponse {
    pub success: bool,
    pub client_secret: String,
    pub donation_id: String,
}

/// Every donation failure is a 400 for the donate page script.
fn donation_error(error: DonationError) -> AppError {
    match error {
        DonationError::Invalid(errors) => AppError::Validation(errors),
        DonationError::Payment(e) => AppError::Payment(e.to_string()),
        DonationError::Internal(e) => {
            error!(error = ?e, "Donation could not be recorded");
            AppError::BadRequest(GENERIC_ERROR_MESSAGE.to_string())
        }
    }
}

/// POST /process-donation/ with a JSON body
pub async fn process_donation_handler(
    Extension(state): Extension<AppState>,
    body: Bytes,
) -> Result<Json<DonationResponse>, AppError> {
    let request: DonationRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Malformed donation request");
        AppError::BadRequest("Invalid donation request".to_string())
    })?;

    let receipt = process_donation(request, &state.deps)
        .await
        .map_err(donation_error)?;

    Ok(Json(DonationResponse {
        success: true,
        client_secret: receipt.client_secret,
        donation_id: receipt.donation.id.to_string(),
    }))
}
