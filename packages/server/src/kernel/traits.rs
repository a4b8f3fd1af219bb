// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Domain actions (process a donation, submit the contact form) take these
// through ServerDeps so tests can swap in the doubles from test_dependencies.
//
// Naming convention: Base* for trait names (e.g., BaseMailer)

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// Payment Gateway Trait (Infrastructure - Stripe)
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntentRequest {
    /// Smallest currency unit (cents).
    pub amount_cents: i64,
    pub currency: String,
    pub metadata: BTreeMap<String, String>,
    /// Keep the payment method for later off-session charges (monthly giving).
    pub save_for_future_use: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[async_trait]
pub trait BasePaymentGateway: Send + Sync {
    /// Create a payment intent the browser will confirm with the client secret
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<CreatedPaymentIntent>;
}

// =============================================================================
// Mailer Trait (Infrastructure - SMTP)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait BaseMailer: Send + Sync {
    /// Send a plain-text email from the configured sender address
    async fn send(&self, email: OutgoingEmail) -> Result<()>;
}
