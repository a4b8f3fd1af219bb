// GraphQL schema and context (admin interface)
pub mod context;
pub mod schema;

pub use context::*;
pub use schema::*;
