//! Configuration module for hwmgr
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HWMGR_*)
//! 3. Project config (./hwmgr.toml)
//! 4. User config (~/.config/hwmgr/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_layered, ConfigWarning, LoadedConfig};
pub use types::{ColorMode, Config, DatasetConfig, OutputConfig, SessionConfig, Verbosity};
