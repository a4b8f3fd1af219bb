//! Server dependencies (using traits for testability)
//!
//! Central container handed to every domain action. External services sit
//! behind the Base* traits so tests can inject doubles.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use stripe::{CreatePaymentIntent, StripeService};

use crate::config::SiteSettings;
use crate::domains::auth::JwtService;
use crate::kernel::{
    BaseMailer, BasePaymentGateway, CreatedPaymentIntent, PaymentIntentRequest,
};

// =============================================================================
// StripeService Adapter (implements BasePaymentGateway trait)
// =============================================================================

/// Wrapper around StripeService that implements BasePaymentGateway trait
pub struct StripeAdapter(pub Arc<StripeService>);

impl StripeAdapter {
    pub fn new(service: Arc<StripeService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BasePaymentGateway for StripeAdapter {
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<CreatedPaymentIntent> {
        let mut params = CreatePaymentIntent::new(request.amount_cents, request.currency);
        params.metadata = request.metadata;
        if request.save_for_future_use {
            params.setup_future_usage = Some("off_session".to_string());
        }

        let intent = self.0.create_payment_intent(&params).await?;
        let client_secret = intent
            .client_secret
            .ok_or_else(|| anyhow::anyhow!("Stripe returned no client secret for {}", intent.id))?;

        Ok(CreatedPaymentIntent {
            id: intent.id,
            client_secret,
        })
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub payments: Arc<dyn BasePaymentGateway>,
    pub mailer: Arc<dyn BaseMailer>,
    pub jwt_service: Arc<JwtService>,
    pub settings: Arc<SiteSettings>,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        payments: Arc<dyn BasePaymentGateway>,
        mailer: Arc<dyn BaseMailer>,
        jwt_service: Arc<JwtService>,
        settings: Arc<SiteSettings>,
    ) -> Self {
        Self {
            db_pool,
            payments,
            mailer,
            jwt_service,
            settings,
        }
    }
}
