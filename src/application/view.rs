//! Ledger view models
//!
//! Presentation-ready snapshots of the ledger: a header summary with one
//! entry per hardware set, and one card per project with a row per set.
//! Button enablement mirrors what the ledger would accept: only members
//! can move hardware, nothing can be returned below zero, and nothing can be
//! taken from an exhausted set.

use serde::Serialize;

use crate::domain::entities::{Ledger, LedgerSummary, Project};
use crate::domain::services::Availability;
use crate::domain::value_objects::{HardwareSetId, ProjectId};

/// Usage above this percentage is highlighted
pub const HIGH_USAGE_PERCENT: u8 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetSummary {
    pub set_id: HardwareSetId,
    pub name: String,
    pub capacity: u32,
    pub available: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardwareRow {
    pub set_id: HardwareSetId,
    pub name: String,
    /// Units this project holds
    pub qty: u32,
    pub capacity: u32,
    pub available: u32,
    /// Units held across all projects
    pub in_use: u32,
    pub utilization_percent: u8,
    pub can_increase: bool,
    pub can_decrease: bool,
    pub high_usage: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub members: u32,
    pub is_member: bool,
    pub rows: Vec<HardwareRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerView {
    pub summary: LedgerSummary,
    pub sets: Vec<SetSummary>,
    pub projects: Vec<ProjectCard>,
}

impl LedgerView {
    pub fn build(ledger: &Ledger) -> Self {
        let availability = ledger.availability();

        let sets = ledger
            .hardware_sets()
            .iter()
            .map(|set| SetSummary {
                set_id: set.id().clone(),
                name: set.name().to_string(),
                capacity: set.capacity(),
                available: availability.available(set.id()),
            })
            .collect();

        let projects = ledger
            .projects()
            .iter()
            .map(|p| project_card(ledger, &availability, p))
            .collect();

        Self {
            summary: ledger.summary(),
            sets,
            projects,
        }
    }

    pub fn project(&self, id: &ProjectId) -> Option<&ProjectCard> {
        self.projects.iter().find(|c| &c.id == id)
    }
}

fn project_card(ledger: &Ledger, availability: &Availability, project: &Project) -> ProjectCard {
    let rows = ledger
        .hardware_sets()
        .iter()
        .map(|set| {
            let qty = project.qty(set.id());
            let available = availability.available(set.id());
            let utilization_percent = availability.utilization_percent(set.id());
            HardwareRow {
                set_id: set.id().clone(),
                name: set.name().to_string(),
                qty,
                capacity: set.capacity(),
                available,
                in_use: availability.in_use(set.id()),
                utilization_percent,
                can_increase: project.is_member() && available > 0,
                can_decrease: project.is_member() && qty > 0,
                high_usage: utilization_percent > HIGH_USAGE_PERCENT,
            }
        })
        .collect();

    ProjectCard {
        id: project.id().clone(),
        name: project.name().to_string(),
        description: project.description().to_string(),
        tags: project.tags().to_vec(),
        members: project.members(),
        is_member: project.is_member(),
        rows,
    }
}
