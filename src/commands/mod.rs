//! Command handlers
//!
//! Each handler seeds a session, drives it, and renders through `ui`.

pub mod apply;
pub mod interactive;
pub mod show;

use std::path::Path;

use anyhow::Result;

use hwmgr::application::Session;
use hwmgr::config::Config;
use hwmgr::presentation::create_dataset_repository;

use crate::ui::context::UiContext;
use crate::ui::output::print_dataset_warnings;

/// Seed a session from the configured dataset and report its warnings.
///
/// Returns the session and a description of where the data came from.
pub(crate) fn open_session(
    dataset: Option<&Path>,
    config: &Config,
    ui: &UiContext,
) -> Result<(Session, String)> {
    let repo = create_dataset_repository(dataset, config);
    let (session, warnings) = Session::from_repository(repo.as_ref())?;
    print_dataset_warnings(&warnings, ui);
    Ok((session, repo.describe()))
}
