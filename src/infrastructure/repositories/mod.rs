//! Repository implementations

mod builtin_dataset;
mod fs_dataset;

pub use builtin_dataset::{reference_dataset, BuiltinDatasetRepository};
pub use fs_dataset::{DatasetFormat, FsDatasetRepository};
