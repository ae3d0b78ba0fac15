//! Session module
//!
//! One process-lifetime of in-memory ledger state, driven by actions.

mod action;
mod report;
mod use_case;

pub use action::{parse_script, Action};
pub use report::{ActionReport, ActionStatus, BlockReason};
pub use use_case::Session;
