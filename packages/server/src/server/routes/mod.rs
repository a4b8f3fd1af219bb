// HTTP routes
pub mod donations;
pub mod downloads;
pub mod graphql;
pub mod health;
pub mod newsletter;
pub mod pages;

pub use donations::*;
pub use downloads::*;
pub use graphql::*;
pub use health::*;
pub use newsletter::*;
