//! Interactive session
//!
//! Pick a project, then join or leave it and move hardware one step at a
//! time. Every choice becomes an `Action` applied to the session, so the
//! rules are the same as for `hwmgr apply`.

use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::Select;

use hwmgr::application::{Action, LedgerView, ProjectCard, Session};
use hwmgr::config::Config;
use hwmgr::ProjectId;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme::HwTheme;
use crate::ui::views::apply::{render_report_line, render_summary};
use crate::ui::views::ledger::{render_card, render_header};

/// One entry of the per-project menu; `None` goes back to the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MenuItem {
    pub label: String,
    pub action: Option<Action>,
}

pub fn cmd_interactive(dataset: Option<&Path>, config: &Config, ui: &UiContext) -> Result<()> {
    if !ui.can_prompt() {
        bail!("interactive mode needs a terminal; use `hwmgr show` or `hwmgr apply` instead");
    }

    let (mut session, source) = super::open_session(dataset, config, ui)?;
    let theme = HwTheme::new(ui.unicode);
    let step = config.session.effective_step();

    loop {
        let view = LedgerView::build(session.ledger());
        println!();
        print!("{}", render_header(&view, &source, ui.color, ui.unicode));
        println!();

        let mut items: Vec<String> = view
            .projects
            .iter()
            .map(|card| project_label(card, ui.unicode))
            .collect();
        items.push("Quit".to_string());

        let Some(choice) = Select::with_theme(&theme)
            .with_prompt("Choose a project")
            .items(&items)
            .default(0)
            .interact_opt()?
        else {
            break;
        };
        let Some(card) = view.projects.get(choice) else {
            break;
        };

        project_loop(&mut session, &card.id, step, &theme, ui)?;
    }

    if !session.log().is_empty() {
        println!();
        print!("{}", render_summary(session.log(), ui.color, ui.unicode));
    }
    Ok(())
}

fn project_loop(
    session: &mut Session,
    id: &ProjectId,
    step: u32,
    theme: &HwTheme,
    ui: &UiContext,
) -> Result<()> {
    loop {
        let view = LedgerView::build(session.ledger());
        let Some(card) = view.project(id) else {
            return Ok(());
        };

        println!();
        print!("{}", render_card(card, ui.color, ui.unicode));

        let menu = project_menu(card, step);
        let labels: Vec<&str> = menu.iter().map(|item| item.label.as_str()).collect();
        let Some(choice) = Select::with_theme(theme)
            .with_prompt(format!("{}: what next?", card.name))
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };

        let Some(action) = menu.into_iter().nth(choice).and_then(|item| item.action) else {
            return Ok(());
        };
        let report = session.apply(action);
        println!("{}", render_report_line(&report, ui.color, ui.unicode));
    }
}

fn project_label(card: &ProjectCard, unicode: bool) -> String {
    let badge = if card.is_member {
        Icon::Member
    } else {
        Icon::Guest
    };
    format!("{} {} ({})", badge.render(unicode), card.name, card.id)
}

/// Menu entries for one project, mirroring which buttons the card enables.
pub(crate) fn project_menu(card: &ProjectCard, step: u32) -> Vec<MenuItem> {
    let project = card.id.clone();
    let mut items = Vec::new();

    if !card.is_member {
        items.push(MenuItem {
            label: "Join project".to_string(),
            action: Some(Action::Join { project }),
        });
    } else {
        for row in &card.rows {
            if row.can_increase {
                items.push(MenuItem {
                    label: format!(
                        "Check out {} x {} ({} available)",
                        step, row.name, row.available
                    ),
                    action: Some(Action::CheckOut {
                        project: project.clone(),
                        set: row.set_id.clone(),
                        qty: step,
                    }),
                });
            }
            if row.can_decrease {
                let qty = step.min(row.qty);
                items.push(MenuItem {
                    label: format!(
                        "Check in {} x {} ({} checked out)",
                        qty, row.name, row.qty
                    ),
                    action: Some(Action::CheckIn {
                        project: project.clone(),
                        set: row.set_id.clone(),
                        qty,
                    }),
                });
            }
        }
        items.push(MenuItem {
            label: "Leave project".to_string(),
            action: Some(Action::Leave { project }),
        });
    }

    items.push(MenuItem {
        label: "Back".to_string(),
        action: None,
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwmgr::infrastructure::repositories::reference_dataset;
    use hwmgr::Ledger;

    fn view() -> LedgerView {
        LedgerView::build(&Ledger::from(reference_dataset()))
    }

    fn labels(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn guest_can_only_join() {
        let view = view();
        let menu = project_menu(&view.projects[1], 1);

        assert_eq!(labels(&menu), vec!["Join project", "Back"]);
        assert_eq!(
            menu[0].action,
            Some(Action::Join {
                project: ProjectId::from("p2")
            })
        );
        assert_eq!(menu[1].action, None);
    }

    #[test]
    fn member_gets_checkout_and_checkin_per_set() {
        let view = view();
        let menu = project_menu(&view.projects[0], 2);

        assert_eq!(
            labels(&menu),
            vec![
                "Check out 2 x HW Set A (12 available)",
                "Check in 2 x HW Set A (6 checked out)",
                "Check out 2 x HW Set B (7 available)",
                "Check in 2 x HW Set B (2 checked out)",
                "Check out 2 x Sensors Kit (6 available)",
                "Leave project",
                "Back",
            ]
        );
    }

    #[test]
    fn exhausted_set_offers_no_checkout() {
        let ledger = Ledger::from(reference_dataset()).adjust_checkout(
            &ProjectId::from("p1"),
            &"hs3".into(),
            8,
        );
        let view = LedgerView::build(&ledger);
        let menu = project_menu(&view.projects[0], 1);

        assert!(!labels(&menu).iter().any(|l| l.contains("Check out 1 x Sensors Kit")));
        assert!(labels(&menu).contains(&"Check in 1 x Sensors Kit (6 checked out)"));
    }

    #[test]
    fn check_in_sends_the_quantity_it_shows() {
        let view = view();
        let menu = project_menu(&view.projects[0], 5);

        let item = menu
            .iter()
            .find(|i| i.label == "Check in 2 x HW Set B (2 checked out)")
            .unwrap();
        let action = item.action.clone().unwrap();
        assert_eq!(
            action,
            Action::CheckIn {
                project: ProjectId::from("p1"),
                set: "hs2".into(),
                qty: 2,
            }
        );

        let mut session = hwmgr::Session::new(Ledger::from(reference_dataset()));
        let report = session.apply(action);
        assert!(!report.status.is_clamped());
        assert!(!report.status.is_blocked());
    }

    #[test]
    fn project_label_shows_membership_badge() {
        let view = view();
        assert_eq!(project_label(&view.projects[0], false), "[x] Autonomous Cart (p1)");
        assert_eq!(project_label(&view.projects[1], true), "○ Smart Greenhouse (p2)");
    }
}
