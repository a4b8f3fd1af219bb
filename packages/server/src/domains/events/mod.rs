//! Events domain - dated happenings listed on the home and events pages

pub mod data;
pub mod models;

pub use data::{CreateEventInput, EventData, UpdateEventInput};
pub use models::{CreateEvent, Event, UpdateEvent};
