//! hwmgr - project membership and shared hardware checkout
//!
//! Keeps a ledger of hardware sets (fixed capacity) and projects (membership
//! plus checked-out quantities) for one session, derives availability on
//! every read, and applies membership toggles and clamped checkout
//! adjustments without ever failing.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Action, ActionReport, LedgerView, Session};
pub use config::Config;
pub use domain::entities::{Dataset, HardwareSet, Ledger, Project};
pub use domain::services::{adjust_checkout, compute_availability, toggle_membership, Availability};
pub use domain::value_objects::{CheckoutOutcome, HardwareSetId, ProjectId};
pub use error::{HwError, HwResult};
