//! Mutation service
//!
//! The two state transitions of the ledger. Both are total: unknown ids and
//! out-of-range deltas are absorbed by clamping or by matching nothing, and
//! neither function ever returns an error. Inputs are never modified; each
//! call returns a complete new project collection.

use crate::domain::entities::{HardwareSet, Project};
use crate::domain::services::availability::compute_availability;
use crate::domain::value_objects::{CheckoutOutcome, HardwareSetId, ProjectId};

/// New project collection plus what happened to the requested delta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutAdjustment {
    pub projects: Vec<Project>,
    pub outcome: CheckoutOutcome,
}

/// Flip `is_member` on the project with `project_id`.
///
/// Every other project (and every hardware mapping) passes through as-is.
pub fn toggle_membership(projects: &[Project], project_id: &ProjectId) -> Vec<Project> {
    projects
        .iter()
        .map(|p| {
            if p.id() == project_id {
                tracing::debug!(project = %project_id, is_member = !p.is_member(), "membership toggled");
                p.clone().with_membership(!p.is_member())
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Move `delta` units of `set_id` into (positive) or out of (negative) a
/// project, clamped so the project never goes below zero and the set never
/// goes over capacity.
pub fn adjust_checkout(
    projects: &[Project],
    hardware_sets: &[HardwareSet],
    project_id: &ProjectId,
    set_id: &HardwareSetId,
    delta: i64,
) -> Vec<Project> {
    adjust_checkout_with_outcome(projects, hardware_sets, project_id, set_id, delta).projects
}

/// Same as [`adjust_checkout`], but also reports whether the delta was
/// applied in full, reduced, or had no effect.
pub fn adjust_checkout_with_outcome(
    projects: &[Project],
    hardware_sets: &[HardwareSet],
    project_id: &ProjectId,
    set_id: &HardwareSetId,
    delta: i64,
) -> CheckoutAdjustment {
    // Availability is taken from the collection as it was before this call.
    let currently_available = i64::from(
        compute_availability(hardware_sets, projects).available(set_id),
    );

    let mut outcome = CheckoutOutcome::Unchanged;
    let projects = projects
        .iter()
        .map(|p| {
            if p.id() != project_id {
                return p.clone();
            }

            let current_qty = i64::from(p.qty(set_id));
            let next_qty = clamp_next_qty(current_qty, delta, currently_available);

            outcome = CheckoutOutcome::classify(delta, next_qty - current_qty);
            if outcome.is_clamped() {
                tracing::debug!(
                    project = %project_id,
                    set = %set_id,
                    requested = delta,
                    applied = next_qty - current_qty,
                    available = currently_available,
                    "checkout clamped"
                );
            } else {
                tracing::debug!(project = %project_id, set = %set_id, qty = next_qty, "checkout adjusted");
            }

            // next_qty never exceeds current + available, both of which fit in u32
            let next_qty = u32::try_from(next_qty).unwrap_or(u32::MAX);
            p.clone().with_qty(set_id.clone(), next_qty)
        })
        .collect();

    CheckoutAdjustment { projects, outcome }
}

fn clamp_next_qty(current_qty: i64, delta: i64, currently_available: i64) -> i64 {
    let mut next_qty = current_qty.saturating_add(delta);
    if next_qty < 0 {
        next_qty = 0;
    }
    if delta > 0 && delta > currently_available {
        next_qty = current_qty + currently_available.max(0);
    }
    next_qty
}
