//! Apply command handler
//!
//! Reads a script of actions (file or stdin), applies them in order and
//! prints one line per action followed by the resulting ledger.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use hwmgr::application::{parse_script, ActionStatus, LedgerView};
use hwmgr::config::Config;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{ActionEvent, CompleteEvent, LedgerEvent, StartEvent};
use crate::ui::views::apply::{render_report_line, render_summary};
use crate::ui::views::ledger::LedgerScreen;

pub fn cmd_apply(
    script: &Path,
    strict: bool,
    dataset: Option<&Path>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let text = read_script(script)?;
    let actions = parse_script(&text)
        .with_context(|| format!("failed to parse {}", display_name(script)))?;

    if ui.json {
        emit_event(&StartEvent::new("apply"))?;
    }

    let (mut session, source) = super::open_session(dataset, config, ui)?;
    tracing::info!(count = actions.len(), "applying actions");

    for action in actions {
        let report = session.apply(action);

        if ui.json {
            emit_event(&ActionEvent::new(&report))?;
        } else {
            println!("{}", render_report_line(&report, ui.color, ui.unicode));
        }

        if let ActionStatus::Blocked { reason } = report.status {
            if strict {
                bail!("action {} ({}) blocked: {}", report.seq, report.action, reason);
            }
        }
    }

    let view = LedgerView::build(session.ledger());
    if ui.json {
        emit_event(&LedgerEvent::new(&source, &view))?;
        emit_event(&CompleteEvent::success("apply"))?;
        return Ok(());
    }

    println!();
    print!("{}", render_summary(session.log(), ui.color, ui.unicode));
    println!();
    print!("{}", LedgerScreen::new(&view, &source).render(ui.color, ui.unicode));
    Ok(())
}

fn read_script(script: &Path) -> Result<String> {
    if script == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read actions from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(script)
        .with_context(|| format!("failed to read {}", script.display()))
}

fn display_name(script: &Path) -> String {
    if script == Path::new("-") {
        "stdin".to_string()
    } else {
        script.display().to_string()
    }
}
