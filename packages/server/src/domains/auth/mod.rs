//! Auth domain - admin sign-in for the GraphQL admin interface
//!
//! A single admin account is configured through `ADMIN_EMAIL` and
//! `ADMIN_PASSWORD_SHA256`; a successful login returns a 24h JWT.

pub mod actions;
pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtService};
pub use password::{hash_password, verify_password};
