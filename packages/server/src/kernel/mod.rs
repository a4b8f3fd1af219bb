//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod mailer;
pub mod test_dependencies;
pub mod traits;

pub use deps::{ServerDeps, StripeAdapter};
pub use mailer::SmtpMailer;
pub use traits::*;
