//! Newsletter actions

mod subscribe;

pub use subscribe::*;
