//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Choosing the dataset source (built-in or file)
//!
//! Rendering lives in the binary's `ui` module.

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_dataset_repository;
