//! Built-in Dataset Repository
//!
//! The reference dataset every session starts from unless a dataset file
//! is configured: three hardware sets and three projects.

use crate::domain::entities::{Dataset, HardwareSet, Project};
use crate::domain::ports::DatasetRepository;
use crate::error::HwResult;

/// Serves the compiled-in reference dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDatasetRepository;

impl BuiltinDatasetRepository {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetRepository for BuiltinDatasetRepository {
    fn load(&self) -> HwResult<Dataset> {
        Ok(reference_dataset())
    }

    fn describe(&self) -> String {
        "built-in reference dataset".to_string()
    }
}

/// The reference seed: hardware sets `hs1`..`hs3`, projects `p1`..`p3`.
pub fn reference_dataset() -> Dataset {
    let hardware_sets = vec![
        HardwareSet::new("hs1", "HW Set A", 20),
        HardwareSet::new("hs2", "HW Set B", 12),
        HardwareSet::new("hs3", "Sensors Kit", 8),
    ];

    let projects = vec![
        Project::new("p1", "Autonomous Cart")
            .with_description(
                "Self-driving cart using stereo vision. Tracks, avoids obstacles, and delivers snacks.",
            )
            .with_tags(["Robotics", "Vision"])
            .with_members(4)
            .with_membership(true)
            .with_qty("hs1", 6)
            .with_qty("hs2", 2),
        Project::new("p2", "Smart Greenhouse")
            .with_description(
                "IoT greenhouse with environmental control and data logging (ESP32 + Cloud).",
            )
            .with_tags(["IoT", "Cloud"])
            .with_members(3)
            .with_qty("hs2", 3)
            .with_qty("hs3", 2),
        Project::new("p3", "AR Campus Tour")
            .with_description(
                "Mobile AR app overlaying campus history and POIs; markerless tracking.",
            )
            .with_tags(["AR", "Mobile"])
            .with_members(5)
            .with_qty("hs1", 2),
    ];

    Dataset::new(hardware_sets, projects)
}
