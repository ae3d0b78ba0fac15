//! Configuration loading
//!
//! Hierarchy, highest priority first:
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables (`HWMGR_*`)
//! 3. Project config (`./hwmgr.toml`)
//! 4. User config (`<config dir>/hwmgr/config.toml`)
//! 5. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HwError, HwResult};

use super::types::{ColorMode, Config, Verbosity};

/// File name of the project-level config
pub const PROJECT_CONFIG_FILE: &str = "hwmgr.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A config together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` for defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HwResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HwError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let (Some(dataset), Some(dir)) = (config.dataset.path.as_mut(), path.parent()) {
        if dataset.is_relative() {
            *dataset = dir.join(&*dataset);
        }
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the config file that applies, if any.
pub fn discover(project_root: Option<&Path>) -> Option<PathBuf> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            return Some(project_config);
        }
    }

    let user_config = user_config_path()?;
    user_config.exists().then_some(user_config)
}

/// Load the first config in the hierarchy, failing on broken files.
pub fn load_layered(project_root: Option<&Path>) -> HwResult<LoadedConfig> {
    let Some(source) = discover(project_root) else {
        return Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            source: None,
            warnings: Vec::new(),
        });
    };

    let (config, warnings) = load_with_warnings(&source)?;
    tracing::debug!(path = %source.display(), "loaded config");
    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source: Some(source),
        warnings,
    })
}

/// `<config dir>/hwmgr/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hwmgr").join("config.toml"))
}

/// Apply environment variable overrides (HWMGR_* prefix)
fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // HWMGR_DATASET
    if let Some(path) = get_env("HWMGR_DATASET").filter(|p| !p.is_empty()) {
        config.dataset.path = Some(PathBuf::from(path));
    }

    // HWMGR_VERBOSITY
    if let Some(verbosity) = get_env("HWMGR_VERBOSITY") {
        config.output.verbosity = Verbosity::parse_lenient(&verbosity);
    }

    // HWMGR_COLOR
    if let Some(color) = get_env("HWMGR_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    // HWMGR_STEP (ignored unless a positive integer)
    if let Some(step) = get_env("HWMGR_STEP").and_then(|s| s.trim().parse::<u32>().ok()) {
        if step > 0 {
            config.session.step = step;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "dataset",
        "path",
        "output",
        "verbosity",
        "color",
        "unicode",
        "session",
        "step",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
