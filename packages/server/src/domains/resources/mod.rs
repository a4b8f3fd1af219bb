//! Resources domain - downloadable guides, reports and toolkits
//!
//! Files live under the media root; the model keeps their URL and a
//! download counter bumped by the download tracking endpoint.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{CreateResourceInput, ResourceData, UpdateResourceInput};
pub use models::{CreateResource, Resource, ResourceCategory, UpdateResource};
