//! Session Use Case
//!
//! Owns the ledger for one run and plays the part of the page that sits in
//! front of it: membership is required before hardware can be moved, and
//! every applied action is logged in memory. The ledger operations stay
//! total; the checks here only decide whether to call them.

use crate::domain::entities::{DatasetWarning, Ledger};
use crate::domain::ports::DatasetRepository;
use crate::domain::value_objects::{HardwareSetId, ProjectId};
use crate::error::HwResult;

use super::action::Action;
use super::report::{ActionReport, ActionStatus, BlockReason};

#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: Ledger,
    log: Vec<ActionReport>,
}

impl Session {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            log: Vec::new(),
        }
    }

    /// Seed a session from a dataset source.
    ///
    /// Returns the dataset's non-fatal warnings alongside the session.
    pub fn from_repository(repo: &dyn DatasetRepository) -> HwResult<(Self, Vec<DatasetWarning>)> {
        let dataset = repo.load()?;
        let warnings = dataset.validate()?;

        tracing::info!(
            source = %repo.describe(),
            hardware_sets = dataset.hardware_sets.len(),
            projects = dataset.projects.len(),
            "dataset loaded"
        );
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        Ok((Self::new(Ledger::from(dataset)), warnings))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Every action applied so far, oldest first
    pub fn log(&self) -> &[ActionReport] {
        &self.log
    }

    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<ActionReport> {
        actions.into_iter().map(|a| self.apply(a)).collect()
    }

    pub fn apply(&mut self, action: Action) -> ActionReport {
        let (status, qty, available) = self.execute(&action);
        let report = ActionReport {
            seq: self.log.len() + 1,
            action,
            status,
            qty,
            available,
        };

        tracing::debug!(seq = report.seq, "{}", report.summary());
        self.log.push(report.clone());
        report
    }

    fn execute(&mut self, action: &Action) -> (ActionStatus, Option<u32>, Option<u32>) {
        let project_id = action.project();
        let Some(project) = self.ledger.project(project_id) else {
            return (blocked(BlockReason::UnknownProject), None, None);
        };
        let is_member = project.is_member();

        if let Some((set_id, delta)) = action.checkout_delta() {
            if self.ledger.hardware_set(set_id).is_none() {
                return (blocked(BlockReason::UnknownHardwareSet), None, None);
            }
            if !is_member {
                return (blocked(BlockReason::NotMember), None, None);
            }
            let status = self.adjust(project_id, set_id, delta);
            let qty = self.ledger.project(project_id).map(|p| p.qty(set_id));
            let available = self.ledger.availability().available(set_id);
            return (status, qty, Some(available));
        }

        let wants_member = match action {
            Action::Join { .. } => true,
            Action::Leave { .. } => false,
            _ => !is_member,
        };
        if wants_member == is_member {
            return (ActionStatus::NoChange, None, None);
        }

        self.replace_ledger(|ledger| ledger.toggle_membership(project_id));
        (
            ActionStatus::MembershipChanged {
                is_member: wants_member,
            },
            None,
            None,
        )
    }

    fn adjust(&mut self, project_id: &ProjectId, set_id: &HardwareSetId, delta: i64) -> ActionStatus {
        let ledger = std::mem::take(&mut self.ledger);
        let (ledger, outcome) = ledger.adjust_checkout_with_outcome(project_id, set_id, delta);
        self.ledger = ledger;

        if outcome.applied() == 0 && !outcome.is_clamped() {
            ActionStatus::NoChange
        } else {
            ActionStatus::Checkout(outcome)
        }
    }

    fn replace_ledger(&mut self, f: impl FnOnce(Ledger) -> Ledger) {
        let ledger = std::mem::take(&mut self.ledger);
        self.ledger = f(ledger);
    }
}

fn blocked(reason: BlockReason) -> ActionStatus {
    ActionStatus::Blocked { reason }
}
