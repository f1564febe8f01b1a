//! Project manifest (swatch.yaml) parsing.
//!
//! The manifest sets batch defaults and where design files live.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::batch::DEFAULT_BATCH_SIZE;
use crate::error::{Result, SwatchError};
use crate::source::DEFAULT_MAX_LATENCY_MS;

/// Project manifest loaded from swatch.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Number of sample designs fetched by `swatch run`.
    pub designs: u32,

    /// Upper bound for the sample source's fetch delay.
    pub max_latency_ms: u64,

    /// Directories to scan for design files.
    /// When empty, `swatch run` uses the sample source.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            designs: DEFAULT_BATCH_SIZE,
            max_latency_ms: DEFAULT_MAX_LATENCY_MS,
            sources: vec![],
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a swatch.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check swatch.yaml syntax".to_string()),
        })
    }

    /// Render the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| SwatchError::Parse {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Check if design files should come from disk rather than the sample source.
    pub fn uses_files(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }
}

/// Minimal glob matching: `*.ext`, `dir/*`, `**/dir/*`, or a substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix("**/") {
        return match rest.strip_suffix("/*") {
            Some(dir) => path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir)),
            None => path.contains(rest),
        };
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
    }

    path.contains(pattern)
}
