//! Domain Entities
//!
//! - `HardwareSet` - a pool of units with fixed capacity
//! - `Project` - membership flag and checked-out allocations
//! - `Ledger` - owned state container for one session
//! - `Dataset` - the seed a ledger is built from

mod dataset;
mod hardware_set;
mod ledger;
mod project;

pub use dataset::{Dataset, DatasetWarning};
pub use hardware_set::HardwareSet;
pub use ledger::{Ledger, LedgerSummary};
pub use project::{Allocation, Allocations, Project};
