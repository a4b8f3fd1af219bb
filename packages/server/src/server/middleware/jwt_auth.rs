use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::domains::auth::{Claims, JwtService};

/// Signed-in admin, taken from a verified JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
    pub is_admin: bool,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.sub,
            is_admin: claims.is_admin,
        }
    }
}

/// Attach an `AuthUser` extension when the request carries a valid token.
///
/// Requests without one continue anonymously; resolvers decide what needs
/// a signed-in admin.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(user) = authenticate(request.headers(), &jwt_service) {
        debug!(email = %user.email, is_admin = user.is_admin, "Request authenticated");
        request.extensions_mut().insert(user);
    }

    next.run(request).await
}

fn authenticate(headers: &HeaderMap, jwt_service: &JwtService) -> Option<AuthUser> {
    let token = bearer_token(headers)?;
    match jwt_service.verify_token(token) {
        Ok(claims) => Some(claims.into()),
        Err(e) => {
            debug!(error = %e, "Ignoring invalid token");
            None
        }
    }
}

/// Token from `Authorization: Bearer <token>`; a bare token is accepted too.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .unwrap_or(value)
        .trim();

    (!token.is_empty()).then_some(token)
}
