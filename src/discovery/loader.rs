//! Design loader - parses discovered files into designs.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SwatchError};
use crate::types::Design;

use super::scanner::{detect_design_format, DesignFormat};

/// Parse design file content.
///
/// A file holds either one design or a list of them. The document's shape
/// picks the target type first, so a malformed design reports serde's own
/// message with its location.
pub fn parse_designs(content: &str, format: DesignFormat) -> Result<Vec<Design>> {
    let parsed: std::result::Result<Vec<Design>, String> = match format {
        DesignFormat::Json => parse_json(content).map_err(|e| e.to_string()),
        DesignFormat::Yaml => parse_yaml(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| SwatchError::Parse {
        message,
        help: Some("Expected a design object or a list of designs".to_string()),
    })
}

fn parse_json(content: &str) -> serde_json::Result<Vec<Design>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if value.is_array() {
        serde_json::from_str(content)
    } else {
        serde_json::from_str(content).map(|design| vec![design])
    }
}

fn parse_yaml(content: &str) -> serde_yaml::Result<Vec<Design>> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    if value.is_sequence() {
        serde_yaml::from_str(content)
    } else {
        serde_yaml::from_str(content).map(|design| vec![design])
    }
}

/// Load all designs from one file.
pub fn load_design_file(path: &Path) -> Result<Vec<Design>> {
    let format = detect_design_format(path).unwrap_or(DesignFormat::Json);

    let content = fs::read_to_string(path).map_err(|e| SwatchError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let designs = parse_designs(&content, format)?;
    debug!(path = %path.display(), count = designs.len(), "loaded design file");
    Ok(designs)
}

/// Load designs from every path, reporting all failures together.
pub fn load_designs(paths: &[impl AsRef<Path>]) -> Result<Vec<Design>> {
    let mut designs = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    for path in paths {
        let path = path.as_ref();
        match load_design_file(path) {
            Ok(loaded) => designs.extend(loaded),
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }

    if !errors.is_empty() {
        return Err(SwatchError::Parse {
            message: format!("Failed to load {} file(s):\n  {}", errors.len(), errors.join("\n  ")),
            help: Some("Fix the errors above and try again".to_string()),
        });
    }

    Ok(designs)
}
