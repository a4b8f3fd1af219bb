//! SMTP mailer (lettre). With no SMTP host configured it runs in no-op
//! mode and only logs what it would have sent.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{info, warn};

use crate::config::SmtpSettings;
use crate::kernel::{BaseMailer, OutgoingEmail};

#[derive(Clone)]
pub struct SmtpMailer {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self> {
        let from = settings
            .from_email
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid DEFAULT_FROM_EMAIL: {}", settings.from_email))?;

        let transport = if settings.host.trim().is_empty() {
            warn!("SMTP_HOST not configured; mailer will operate in no-op mode");
            None
        } else {
            let builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
                .context("Failed to configure SMTP transport")?
                .port(settings.port);

            let builder = match (&settings.username, &settings.password) {
                (Some(username), Some(password)) => {
                    builder.credentials(Credentials::new(username.clone(), password.clone()))
                }
                _ => builder,
            };

            Some(Arc::new(builder.build()))
        };

        Ok(Self { transport, from })
    }

    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }
}

#[async_trait]
impl BaseMailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<()> {
        let Some(transport) = &self.transport else {
            info!(
                subject = %email.subject,
                recipient = %email.to,
                "Mailer in no-op mode; skipping send"
            );
            return Ok(());
        };

        let to = email
            .to
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid recipient address: {}", email.to))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.clone())
            .header(header::ContentType::TEXT_PLAIN)
            .body(email.body)
            .context("Failed to build email message")?;

        transport
            .send(message)
            .await
            .context("Failed to send email")?;

        info!(subject = %email.subject, "Email sent");
        Ok(())
    }
}
