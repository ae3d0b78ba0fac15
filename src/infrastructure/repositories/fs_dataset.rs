//! File-backed Dataset Repository
//!
//! Reads a seed dataset from a `.toml` or `.json` file. The file is only
//! ever read; session changes are never written back.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Dataset;
use crate::domain::ports::DatasetRepository;
use crate::error::{HwError, HwResult};

/// Dataset file encodings we understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Toml,
    Json,
}

impl DatasetFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> HwResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "toml" => Ok(DatasetFormat::Toml),
            "json" => Ok(DatasetFormat::Json),
            _ => Err(HwError::UnsupportedDatasetFormat {
                file: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Loads the seed dataset from a file on disk
#[derive(Debug, Clone)]
pub struct FsDatasetRepository {
    path: PathBuf,
}

impl FsDatasetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetRepository for FsDatasetRepository {
    fn load(&self) -> HwResult<Dataset> {
        let format = DatasetFormat::from_path(&self.path)?;

        if !self.path.exists() {
            return Err(HwError::DatasetNotFound {
                path: self.path.clone(),
            });
        }

        let content = fs::read_to_string(&self.path)?;
        parse_dataset(&content, format).map_err(|message| HwError::InvalidDataset {
            file: self.path.clone(),
            message,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse a dataset, keeping the paths of any keys serde skipped so they can
/// be reported instead of silently dropped.
fn parse_dataset(content: &str, format: DatasetFormat) -> Result<Dataset, String> {
    let mut unknown_keys: Vec<String> = Vec::new();
    let collect = |path: serde_ignored::Path<'_>| unknown_keys.push(path.to_string());

    let dataset: Dataset = match format {
        DatasetFormat::Toml => {
            let deserializer = toml::de::Deserializer::new(content);
            serde_ignored::deserialize(deserializer, collect).map_err(|e| e.to_string())?
        }
        DatasetFormat::Json => {
            let mut deserializer = serde_json::Deserializer::from_str(content);
            let dataset =
                serde_ignored::deserialize(&mut deserializer, collect).map_err(|e| e.to_string())?;
            deserializer.end().map_err(|e| e.to_string())?;
            dataset
        }
    };

    Ok(dataset.with_unknown_keys(unknown_keys))
}
