//! Donation actions

mod process_donation;

pub use process_donation::*;
