use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

pub const SITE_NAME: &str = "GYWAN";
pub const SITE_DESCRIPTION: &str = "Girls and Young Women's Advocacy Network";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub stripe_secret_key: String,
    pub stripe_public_key: String,
    pub stripe_api_base: String,
    pub smtp: SmtpSettings,
    pub notification_email: String,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub admin_email: Option<String>,
    pub admin_password_sha256: Option<String>,
    pub media_root: String,
    pub debug: bool,
}

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from_email: String,
}

/// Values the pages and domain actions read at request time.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_description: String,
    pub stripe_public_key: String,
    /// Inbox that receives contact form notifications.
    pub notification_email: String,
    pub admin_email: Option<String>,
    pub admin_password_sha256: Option<String>,
    pub debug: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let from_email =
            env::var("DEFAULT_FROM_EMAIL").unwrap_or_else(|_| "noreply@gywan.org".to_string());

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            stripe_secret_key: env::var("STRIPE_SECRET_KEY")
                .context("STRIPE_SECRET_KEY must be set")?,
            stripe_public_key: env::var("STRIPE_PUBLIC_KEY")
                .context("STRIPE_PUBLIC_KEY must be set")?,
            stripe_api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| stripe::DEFAULT_API_BASE.to_string()),
            smtp: SmtpSettings {
                host: env::var("SMTP_HOST").unwrap_or_default(),
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse()
                    .context("SMTP_PORT must be a valid number")?,
                username: env::var("SMTP_USERNAME").ok(),
                password: env::var("SMTP_PASSWORD").ok(),
                from_email: from_email.clone(),
            },
            notification_email: env::var("NOTIFICATION_EMAIL").unwrap_or(from_email),
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "gywan".to_string()),
            admin_email: env::var("ADMIN_EMAIL").ok().filter(|s| !s.trim().is_empty()),
            admin_password_sha256: env::var("ADMIN_PASSWORD_SHA256")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            media_root: env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".to_string()),
            debug: parse_bool(env::var("DEBUG").ok().as_deref()),
        })
    }

    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            site_name: SITE_NAME.to_string(),
            site_description: SITE_DESCRIPTION.to_string(),
            stripe_public_key: self.stripe_public_key.clone(),
            notification_email: self.notification_email.clone(),
            admin_email: self.admin_email.clone(),
            admin_password_sha256: self.admin_password_sha256.clone(),
            debug: self.debug,
        }
    }
}

impl SiteSettings {
    /// Settings for tests and tooling that never talk to real services.
    pub fn for_tests() -> Self {
        SiteSettings {
            site_name: SITE_NAME.to_string(),
            site_description: SITE_DESCRIPTION.to_string(),
            stripe_public_key: "pk_test_123".to_string(),
            notification_email: "team@gywan.org".to_string(),
            admin_email: None,
            admin_password_sha256: None,
            debug: true,
        }
    }
}

fn parse_bool(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_common_truthy_values() {
        assert!(parse_bool(Some("true")));
        assert!(parse_bool(Some(" TRUE ")));
        assert!(parse_bool(Some("1")));
        assert!(!parse_bool(Some("false")));
        assert!(!parse_bool(Some("")));
        assert!(!parse_bool(None));
    }
}
