use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::domains::auth::password::verify_password;
use crate::kernel::ServerDeps;

/// Check admin credentials and issue a 24h admin JWT.
///
/// Fails the same way for an unknown email and a wrong password.
pub async fn admin_login(email: &str, password: &str, deps: &ServerDeps) -> Result<String> {
    let settings = &deps.settings;

    let (Some(admin_email), Some(digest)) = (
        settings.admin_email.as_deref(),
        settings.admin_password_sha256.as_deref(),
    ) else {
        warn!("Admin login attempted but no admin account is configured");
        return Err(anyhow!("Admin login is not configured"));
    };

    let email = email.trim();
    if !email.eq_ignore_ascii_case(admin_email.trim()) || !verify_password(password, digest) {
        warn!("Rejected admin login");
        return Err(anyhow!("Invalid email or password"));
    }

    let token = deps.jwt_service.create_token(admin_email, true)?;
    info!(admin_email = %admin_email, "Admin signed in");

    Ok(token)
}
