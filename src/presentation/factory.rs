//! Use Case Factory
//!
//! Picks the dataset source a session is seeded from.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::config::Config;
use crate::domain::ports::DatasetRepository;
use crate::infrastructure::{BuiltinDatasetRepository, FsDatasetRepository};

/// Pick the dataset source: an explicit path wins, then the config, then
/// the built-in reference dataset.
pub fn create_dataset_repository(
    cli_dataset: Option<&Path>,
    config: &Config,
) -> Box<dyn DatasetRepository> {
    match cli_dataset.or(config.dataset.path.as_deref()) {
        Some(path) => Box::new(FsDatasetRepository::new(path)),
        None => Box::new(BuiltinDatasetRepository::new()),
    }
}
