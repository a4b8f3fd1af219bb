//! Blog domain - posts written by the site's admins

pub mod data;
pub mod models;

pub use data::{BlogPostData, CreateBlogPostInput, UpdateBlogPostInput};
pub use models::{BlogPost, CreateBlogPost, UpdateBlogPost};
