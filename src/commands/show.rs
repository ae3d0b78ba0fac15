//! Show command handler
//!
//! Prints the ledger: availability per hardware set and one card per project.

use std::path::Path;

use anyhow::{anyhow, Result};

use hwmgr::application::LedgerView;
use hwmgr::config::Config;
use hwmgr::ProjectId;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, LedgerEvent, StartEvent};
use crate::ui::views::ledger::LedgerScreen;

pub fn cmd_show(
    project: Option<&str>,
    dataset: Option<&Path>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new("show"))?;
    }

    let (session, source) = super::open_session(dataset, config, ui)?;
    let mut view = LedgerView::build(session.ledger());

    if let Some(id) = project {
        let id = ProjectId::from(id);
        if view.project(&id).is_none() {
            return Err(anyhow!("unknown project '{}'", id));
        }
        view.projects.retain(|card| card.id == id);
    }

    if ui.json {
        emit_event(&LedgerEvent::new(&source, &view))?;
        emit_event(&CompleteEvent::success("show"))?;
        return Ok(());
    }

    print!("{}", LedgerScreen::new(&view, &source).render(ui.color, ui.unicode));
    Ok(())
}
