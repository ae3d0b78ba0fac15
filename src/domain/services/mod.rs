//! Domain Services
//!
//! Stateless, pure functions over the hardware sets and projects.
//! - `availability` - derived free units per hardware set
//! - `mutation` - membership toggling and clamped checkout adjustment

pub mod availability;
pub mod mutation;

pub use availability::{checked_out, compute_availability, Availability, SetAvailability};
pub use mutation::{
    adjust_checkout, adjust_checkout_with_outcome, toggle_membership, CheckoutAdjustment,
};
