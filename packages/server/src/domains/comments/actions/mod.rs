//! Comment actions

mod post_comment;

pub use post_comment::*;
