// HTTP server setup (Axum + HTML views + admin GraphQL)
pub mod app;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod routes;
pub mod static_files;
pub mod views;

pub use app::*;
pub use error::{AppError, PageError};
pub use graphql::*;
