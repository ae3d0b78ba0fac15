//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod ids;
mod outcome;

pub use ids::{HardwareSetId, ProjectId};
pub use outcome::CheckoutOutcome;
