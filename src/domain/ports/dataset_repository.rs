//! Dataset repository port - abstracts where the session seed comes from.

use crate::domain::entities::Dataset;
use crate::error::HwResult;

/// Source of the hardware sets and projects a session starts with.
///
/// Implementations are read-only; nothing is ever written back.
pub trait DatasetRepository {
    /// Load the seed dataset.
    fn load(&self) -> HwResult<Dataset>;

    /// Short human-readable description of the source (for headers and logs).
    fn describe(&self) -> String;
}
