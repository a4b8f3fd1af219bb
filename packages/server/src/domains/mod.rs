// Business domains
pub mod auth;
pub mod blog;
pub mod comments;
pub mod contact;
pub mod donations;
pub mod events;
pub mod impact;
pub mod newsletter;
pub mod resources;
pub mod stories;
pub mod team;
