//! Stories domain - first-person accounts from the network's members

pub mod data;
pub mod models;

pub use data::{CreateStoryInput, StoryData, UpdateStoryInput};
pub use models::{CreateStory, Story, UpdateStory};
