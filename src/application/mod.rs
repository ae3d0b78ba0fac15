//! Application Layer
//!
//! Use cases that sit between the presentation layer and the ledger.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain the accounting rules (those are in Domain)
//!
//! ## Use Cases
//!
//! - `Session` - applies user actions to the ledger and logs them
//! - `LedgerView` - presentation-ready snapshot of the ledger

pub mod session;
pub mod view;

pub use session::{parse_script, Action, ActionReport, ActionStatus, BlockReason, Session};
pub use view::{HardwareRow, LedgerView, ProjectCard, SetSummary, HIGH_USAGE_PERCENT};
