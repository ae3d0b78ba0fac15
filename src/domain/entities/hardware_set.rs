//! HardwareSet entity - a named pool of identical units
//!
//! Capacity is fixed for the lifetime of the session. There is deliberately
//! no way to change it after construction.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::HardwareSetId;

/// A shared pool of hardware with a fixed total capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareSet {
    id: HardwareSetId,
    name: String,
    capacity: u32,
}

impl HardwareSet {
    pub fn new(id: impl Into<HardwareSetId>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
        }
    }

    pub fn id(&self) -> &HardwareSetId {
        &self.id
    }

    /// Display label
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}
