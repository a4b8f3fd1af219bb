//! Contact domain - messages sent through the contact page

pub mod actions;
pub mod data;
pub mod models;

pub use data::{ContactData, ContactForm};
pub use models::{Contact, CreateContact};
