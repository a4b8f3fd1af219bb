// TestDependencies - mock implementations for testing
//
// Recording doubles for the payment gateway and mailer. Tests build a
// ServerDeps around them and assert on the captured calls.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseMailer, BasePaymentGateway, CreatedPaymentIntent, OutgoingEmail, PaymentIntentRequest};

// =============================================================================
// Mock Payment Gateway
// =============================================================================

#[derive(Clone, Default)]
pub struct MockPaymentGateway {
    calls: Arc<Mutex<Vec<PaymentIntentRequest>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent call fails with this message
    pub fn failing(message: &str) -> Self {
        let mock = Self::new();
        *mock.failure.lock().unwrap() = Some(message.to_string());
        mock
    }

    pub fn calls(&self) -> Vec<PaymentIntentRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BasePaymentGateway for MockPaymentGateway {
    async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
    ) -> Result<CreatedPaymentIntent> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(request);

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(anyhow::anyhow!(message));
        }

        let n = calls.len();
        Ok(CreatedPaymentIntent {
            id: format!("pi_mock_{}", n),
            client_secret: format!("pi_mock_{}_secret", n),
        })
    }
}

// =============================================================================
// Mock Mailer
// =============================================================================

#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose transport always errors
    pub fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<()> {
        if self.fail {
            return Err(anyhow::anyhow!("SMTP connection refused"));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}
