//! Dataset entity - the seed a session starts from
//!
//! A dataset is read once at session start. Duplicate ids make it unusable;
//! other inconsistencies are reported as warnings and left as-is so the user
//! can see them.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{HardwareSet, Project};
use crate::domain::services::availability::checked_out;
use crate::domain::value_objects::{HardwareSetId, ProjectId};
use crate::error::{HwError, HwResult};

/// Hardware sets and projects as loaded from a seed source
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, alias = "hardwareSets")]
    pub hardware_sets: Vec<HardwareSet>,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Keys the reader skipped, as dotted paths (`projects.0.is_memeber`)
    #[serde(skip)]
    pub unknown_keys: Vec<String>,
}

/// Non-fatal problem found in a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetWarning {
    /// A project holds units of a set that does not exist
    UnknownHardwareSet {
        project: ProjectId,
        set: HardwareSetId,
    },
    /// Seeded checkouts already exceed the set's capacity
    OverCapacity {
        set: HardwareSetId,
        checked_out: u64,
        capacity: u32,
    },
    /// The seed file has a key nothing reads; its value was dropped
    UnknownKey { key: String },
}

impl fmt::Display for DatasetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetWarning::UnknownHardwareSet { project, set } => {
                write!(f, "project '{}' references unknown hardware set '{}'", project, set)
            }
            DatasetWarning::OverCapacity {
                set,
                checked_out,
                capacity,
            } => write!(
                f,
                "hardware set '{}' has {} units checked out but capacity {}",
                set, checked_out, capacity
            ),
            DatasetWarning::UnknownKey { key } => {
                write!(f, "unknown dataset key '{}' was ignored", key)
            }
        }
    }
}

impl Dataset {
    pub fn new(hardware_sets: Vec<HardwareSet>, projects: Vec<Project>) -> Self {
        Self {
            hardware_sets,
            projects,
            unknown_keys: Vec::new(),
        }
    }

    pub fn with_unknown_keys(mut self, keys: Vec<String>) -> Self {
        self.unknown_keys = keys;
        self
    }

    /// Check ids are unique and collect warnings for everything else.
    pub fn validate(&self) -> HwResult<Vec<DatasetWarning>> {
        let mut seen = BTreeSet::new();
        for set in &self.hardware_sets {
            if !seen.insert(set.id().as_str()) {
                return Err(HwError::DuplicateId {
                    kind: "hardware set",
                    id: set.id().to_string(),
                });
            }
        }

        let mut seen = BTreeSet::new();
        for project in &self.projects {
            if !seen.insert(project.id().as_str()) {
                return Err(HwError::DuplicateId {
                    kind: "project",
                    id: project.id().to_string(),
                });
            }
        }

        let known: BTreeSet<&HardwareSetId> = self.hardware_sets.iter().map(|s| s.id()).collect();
        let mut warnings: Vec<DatasetWarning> = self
            .unknown_keys
            .iter()
            .map(|key| DatasetWarning::UnknownKey { key: key.clone() })
            .collect();

        for project in &self.projects {
            for allocation in project.hardware().iter() {
                if !known.contains(&allocation.set_id) {
                    warnings.push(DatasetWarning::UnknownHardwareSet {
                        project: project.id().clone(),
                        set: allocation.set_id.clone(),
                    });
                }
            }
        }

        for set in &self.hardware_sets {
            let total = checked_out(&self.projects, set.id());
            if total > u64::from(set.capacity()) {
                warnings.push(DatasetWarning::OverCapacity {
                    set: set.id().clone(),
                    checked_out: total,
                    capacity: set.capacity(),
                });
            }
        }

        Ok(warnings)
    }
}
