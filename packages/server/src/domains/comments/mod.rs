//! Comments domain - visitor comments on list and detail pages
//!
//! A comment is either attached to one event, story or blog post through
//! `commentable_type`/`commentable_id`, or left unattached from a list page.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{CommentData, CommentForm};
pub use models::{Comment, CommentTarget, CommentableType, CreateComment};
