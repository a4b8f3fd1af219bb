//! Donations domain - one-off and monthly gifts paid through Stripe
//!
//! The browser confirms the card payment with the client secret returned
//! by `process_donation`; the server only creates the payment intent and
//! records the pledge.

pub mod actions;
pub mod data;
pub mod models;

pub use data::{DonationData, DonationRequest};
pub use models::{CreateDonation, Donation, DonationType};
