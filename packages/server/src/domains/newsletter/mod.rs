//! Newsletter domain - email sign-ups from the site footer and home page

pub mod actions;
pub mod data;
pub mod models;

pub use data::{NewsletterData, NewsletterForm};
pub use models::{CreateNewsletter, Newsletter};
