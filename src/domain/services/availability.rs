//! Availability service
//!
//! Derives, for every hardware set, how many units are still free given what
//! all projects currently hold. Always recomputed from the complete
//! collections; nothing here is cached.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{HardwareSet, Project};
use crate::domain::value_objects::HardwareSetId;

/// Capacity and free units of one hardware set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetAvailability {
    pub capacity: u32,
    pub available: u32,
}

impl SetAvailability {
    /// Units currently checked out, as seen through the availability floor
    pub fn in_use(&self) -> u32 {
        self.capacity.saturating_sub(self.available)
    }

    /// Share of capacity in use, rounded, capped at 100.
    ///
    /// A zero-capacity set reports 0.
    pub fn utilization_percent(&self) -> u8 {
        if self.capacity == 0 {
            return 0;
        }
        let percent = (f64::from(self.in_use()) / f64::from(self.capacity) * 100.0).round();
        percent.min(100.0) as u8
    }
}

/// Availability keyed by hardware-set id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Availability(BTreeMap<HardwareSetId, SetAvailability>);

impl Availability {
    pub fn get(&self, set_id: &HardwareSetId) -> Option<&SetAvailability> {
        self.0.get(set_id)
    }

    /// Free units of `set_id`; unknown sets have nothing available.
    pub fn available(&self, set_id: &HardwareSetId) -> u32 {
        self.0.get(set_id).map(|a| a.available).unwrap_or(0)
    }

    pub fn in_use(&self, set_id: &HardwareSetId) -> u32 {
        self.0.get(set_id).map(SetAvailability::in_use).unwrap_or(0)
    }

    pub fn utilization_percent(&self, set_id: &HardwareSetId) -> u8 {
        self.0
            .get(set_id)
            .map(SetAvailability::utilization_percent)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HardwareSetId, &SetAvailability)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Total units of `set_id` checked out across every project.
pub fn checked_out(projects: &[Project], set_id: &HardwareSetId) -> u64 {
    projects.iter().map(|p| u64::from(p.qty(set_id))).sum()
}

/// Compute `max(0, capacity - checked_out)` for every hardware set.
pub fn compute_availability(hardware_sets: &[HardwareSet], projects: &[Project]) -> Availability {
    let map = hardware_sets
        .iter()
        .map(|set| {
            let total_out = checked_out(projects, set.id());
            let available = u64::from(set.capacity()).saturating_sub(total_out);
            (
                set.id().clone(),
                SetAvailability {
                    capacity: set.capacity(),
                    // available <= capacity, so it always fits back into u32
                    available: available as u32,
                },
            )
        })
        .collect();

    Availability(map)
}
