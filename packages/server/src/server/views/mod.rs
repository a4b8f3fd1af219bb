//! Server-rendered HTML.
//!
//! Every renderer returns a complete document wrapped in the shared layout.
//! Visitor and admin supplied text goes through [`escape`]; the rich content
//! fields (event description, story content, blog content) are admin-authored
//! HTML and are written as stored.

pub mod components;
pub mod content;
pub mod errors;
pub mod layout;
pub mod pages;

pub use components::escape;
