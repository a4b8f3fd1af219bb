use juniper::{FieldError, FieldResult};
use sqlx::PgPool;

use crate::kernel::ServerDeps;
use crate::server::middleware::AuthUser;

/// GraphQL request context
///
/// Built per request from the shared dependencies and the (optional)
/// authenticated admin the JWT middleware found.
#[derive(Clone)]
pub struct GraphQLContext {
    pub deps: ServerDeps,
    pub auth_user: Option<AuthUser>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(deps: ServerDeps, auth_user: Option<AuthUser>) -> Self {
        Self { deps, auth_user }
    }

    pub fn deps(&self) -> &ServerDeps {
        &self.deps
    }

    pub fn db_pool(&self) -> &PgPool {
        &self.deps.db_pool
    }

    pub fn require_auth(&self) -> FieldResult<&AuthUser> {
        self.auth_user
            .as_ref()
            .ok_or_else(|| FieldError::new("Authentication required", juniper::Value::null()))
    }

    pub fn require_admin(&self) -> FieldResult<&AuthUser> {
        let user = self.require_auth()?;
        if !user.is_admin {
            return Err(FieldError::new(
                "Admin access required",
                juniper::Value::null(),
            ));
        }
        Ok(user)
    }
}
