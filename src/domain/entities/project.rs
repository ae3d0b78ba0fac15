//! Project entity - membership flag plus checked-out hardware
//!
//! A project's hardware is a list of `(set id, qty)` allocations kept in
//! insertion order. A missing entry means `qty = 0`, and equality follows
//! that rule: an explicit zero entry and an absent entry compare equal.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{HardwareSetId, ProjectId};

/// Units of one hardware set checked out by a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    #[serde(alias = "setId")]
    pub set_id: HardwareSetId,
    pub qty: u32,
}

impl Allocation {
    pub fn new(set_id: impl Into<HardwareSetId>, qty: u32) -> Self {
        Self {
            set_id: set_id.into(),
            qty,
        }
    }
}

/// Per-project mapping from hardware set to checked-out quantity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Allocations(Vec<Allocation>);

impl Allocations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity checked out from `set_id` (0 when there is no entry)
    pub fn qty(&self, set_id: &HardwareSetId) -> u32 {
        self.0
            .iter()
            .find(|a| &a.set_id == set_id)
            .map(|a| a.qty)
            .unwrap_or(0)
    }

    /// Replace the entry for `set_id`, appending one if none exists.
    pub fn with_qty(mut self, set_id: &HardwareSetId, qty: u32) -> Self {
        match self.0.iter_mut().find(|a| &a.set_id == set_id) {
            Some(entry) => entry.qty = qty,
            None => self.0.push(Allocation::new(set_id.clone(), qty)),
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Allocation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

}

impl PartialEq for Allocations {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().all(|a| other.qty(&a.set_id) == a.qty)
            && other.0.iter().all(|a| self.qty(&a.set_id) == a.qty)
    }
}

impl Eq for Allocations {}

impl FromIterator<Allocation> for Allocations {
    fn from_iter<I: IntoIterator<Item = Allocation>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Allocations::new(), |acc, a| acc.with_qty(&a.set_id, a.qty))
    }
}

/// A project the user can join and check hardware out for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    /// Team headcount shown next to the name
    #[serde(default)]
    members: u32,
    #[serde(default, alias = "isMember")]
    is_member: bool,
    #[serde(default)]
    hardware: Allocations,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            members: 0,
            is_member: false,
            hardware: Allocations::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_members(mut self, members: u32) -> Self {
        self.members = members;
        self
    }

    pub fn with_membership(mut self, is_member: bool) -> Self {
        self.is_member = is_member;
        self
    }

    /// Set the checked-out quantity for one hardware set.
    pub fn with_qty(mut self, set_id: impl Into<HardwareSetId>, qty: u32) -> Self {
        self.hardware = self.hardware.with_qty(&set_id.into(), qty);
        self
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn members(&self) -> u32 {
        self.members
    }

    pub fn is_member(&self) -> bool {
        self.is_member
    }

    pub fn hardware(&self) -> &Allocations {
        &self.hardware
    }

    /// Quantity of `set_id` checked out by this project
    pub fn qty(&self, set_id: &HardwareSetId) -> u32 {
        self.hardware.qty(set_id)
    }
}
