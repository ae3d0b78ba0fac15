//! Ledger entity - the session's state container
//!
//! Owns the hardware sets and the projects. Mutations consume the ledger and
//! return the next one, so a reader holding a `&Ledger` only ever sees a
//! complete snapshot. Hardware sets are never changed after construction.

use serde::Serialize;

use crate::domain::entities::{Dataset, HardwareSet, Project};
use crate::domain::services::{self, Availability};
use crate::domain::value_objects::{CheckoutOutcome, HardwareSetId, ProjectId};

/// Joined versus total project counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub joined: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ledger {
    hardware_sets: Vec<HardwareSet>,
    projects: Vec<Project>,
}

impl Ledger {
    pub fn new(hardware_sets: Vec<HardwareSet>, projects: Vec<Project>) -> Self {
        Self {
            hardware_sets,
            projects,
        }
    }

    pub fn hardware_sets(&self) -> &[HardwareSet] {
        &self.hardware_sets
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
    }

    pub fn hardware_set(&self, id: &HardwareSetId) -> Option<&HardwareSet> {
        self.hardware_sets.iter().find(|s| s.id() == id)
    }

    /// Recompute availability from the current collections.
    pub fn availability(&self) -> Availability {
        services::compute_availability(&self.hardware_sets, &self.projects)
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            joined: self.projects.iter().filter(|p| p.is_member()).count(),
            total: self.projects.len(),
        }
    }

    pub fn toggle_membership(self, project_id: &ProjectId) -> Self {
        let projects = services::toggle_membership(&self.projects, project_id);
        Self { projects, ..self }
    }

    pub fn adjust_checkout(self, project_id: &ProjectId, set_id: &HardwareSetId, delta: i64) -> Self {
        self.adjust_checkout_with_outcome(project_id, set_id, delta).0
    }

    pub fn adjust_checkout_with_outcome(
        self,
        project_id: &ProjectId,
        set_id: &HardwareSetId,
        delta: i64,
    ) -> (Self, CheckoutOutcome) {
        let adjustment = services::adjust_checkout_with_outcome(
            &self.projects,
            &self.hardware_sets,
            project_id,
            set_id,
            delta,
        );
        (
            Self {
                projects: adjustment.projects,
                ..self
            },
            adjustment.outcome,
        )
    }
}

impl From<Dataset> for Ledger {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset.hardware_sets, dataset.projects)
    }
}
