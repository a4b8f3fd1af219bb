// Common types and utilities shared across the application

pub mod entity_ids;
pub mod forms;
pub mod id;
pub mod pagination;
pub mod types;
pub mod utils;

pub use entity_ids::*;
pub use forms::{FormErrors, FormSubmitError};
pub use id::Id;
pub use pagination::{InvalidPage, PageRequest, PageWindow, Paginator, LIST_PAGE_SIZE};
pub use types::*;
