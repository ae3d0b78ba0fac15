//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All file access lives here.
//!
//! ## Structure
//!
//! - `repositories/` - seed dataset sources (built-in, TOML/JSON file)

pub mod repositories;

pub use repositories::{BuiltinDatasetRepository, FsDatasetRepository};
