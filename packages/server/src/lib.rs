// GYWAN site server - core library
//
// Public pages, form and donation endpoints, and the admin GraphQL API for
// the Girls and Young Women's Advocacy Network website.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
