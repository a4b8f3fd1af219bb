//! Auth domain actions

mod admin_login;

pub use admin_login::*;
