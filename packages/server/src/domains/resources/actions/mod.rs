//! Resource actions

mod track_download;

pub use track_download::*;
