//! Action log rendering for `hwmgr apply`

use hwmgr::application::{ActionReport, ActionStatus, BlockReason};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActionTally {
    pub applied: usize,
    pub clamped: usize,
    pub unchanged: usize,
    pub blocked: usize,
}

impl ActionTally {
    pub fn from_reports(reports: &[ActionReport]) -> Self {
        let mut tally = Self::default();
        for report in reports {
            match &report.status {
                ActionStatus::Blocked { .. } => tally.blocked += 1,
                ActionStatus::NoChange => tally.unchanged += 1,
                status if status.is_clamped() => tally.clamped += 1,
                _ => tally.applied += 1,
            }
        }
        tally
    }
}

pub fn render_report_line(
    report: &ActionReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, text) = match &report.status {
        ActionStatus::Blocked { .. } => (Icon::Error, ColoredText::error(report.summary())),
        ActionStatus::NoChange => (Icon::Arrow, ColoredText::dim(report.summary())),
        status if status.is_clamped() => (Icon::Warning, ColoredText::warning(report.summary())),
        _ => (Icon::Success, ColoredText::plain(report.summary())),
    };
    format!(
        "{} {:>3}. {}",
        icon.colored(supports_color, supports_unicode),
        report.seq,
        text.render(supports_color)
    )
}

pub fn render_summary(
    reports: &[ActionReport],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let tally = ActionTally::from_reports(reports);
    let mut summary = if tally.blocked == 0 && tally.clamped == 0 {
        ResultSummary::success("Actions Applied")
    } else {
        ResultSummary::partial("Actions Applied")
    };

    summary.add_stat("applied", tally.applied);
    if tally.clamped > 0 {
        summary.add_stat("clamped to availability", tally.clamped);
    }
    if tally.unchanged > 0 {
        summary.add_stat("without effect", tally.unchanged);
    }
    if tally.blocked > 0 {
        summary.add_stat("blocked", tally.blocked);
    }

    for report in reports {
        if let ActionStatus::Blocked { reason } = report.status {
            summary.add_warning(format!("#{} {}: {}", report.seq, report.action, reason));
        }
    }

    let not_member = ActionStatus::Blocked {
        reason: BlockReason::NotMember,
    };
    if reports.iter().any(|r| r.status == not_member) {
        summary.with_next_step("add `join <project>` before checking hardware out");
    }

    summary.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwmgr::application::{parse_script, Session};
    use hwmgr::infrastructure::repositories::reference_dataset;
    use hwmgr::Ledger;

    fn run(script: &str) -> Vec<ActionReport> {
        let mut session = Session::new(Ledger::from(reference_dataset()));
        session.apply_all(parse_script(script).unwrap())
    }

    #[test]
    fn tally_counts_each_kind() {
        let reports = run("checkout p1 hs1 2\ncheckout p1 hs3 50\ncheckout p2 hs1 1\njoin p1\n");
        let tally = ActionTally::from_reports(&reports);

        assert_eq!(
            tally,
            ActionTally {
                applied: 1,
                clamped: 1,
                unchanged: 1,
                blocked: 1,
            }
        );
    }

    #[test]
    fn report_line_marks_blocked_actions() {
        let reports = run("checkout p2 hs1 1");
        let line = render_report_line(&reports[0], false, false);

        assert!(line.starts_with("[FAIL]"));
        assert!(line.contains("join the project first"));
    }

    #[test]
    fn summary_suggests_join_for_non_members() {
        let reports = run("checkout p2 hs1 1");
        let rendered = render_summary(&reports, false, false);

        assert!(rendered.contains("[WARN] Actions Applied"));
        assert!(rendered.contains("1 blocked"));
        assert!(rendered.contains("#1 checkout p2 hs1 1: join the project first"));
        assert!(rendered.contains("join <project>"));
    }

    #[test]
    fn summary_success_when_everything_applied() {
        let reports = run("join p2\ncheckout p2 hs2 1");
        let rendered = render_summary(&reports, false, false);

        assert!(rendered.contains("[OK] Actions Applied"));
        assert!(rendered.contains("2 applied"));
    }
}
