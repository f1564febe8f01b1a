//! Design file discovery and loading.
//!
//! Finds design files from a project directory, either from the sources
//! listed in a `swatch.yaml` manifest or from explicit paths.
//!
//! # Example
//!
//! ```ignore
//! use swatch::discovery::discover;
//!
//! let result = discover("./my-project")?;
//! let designs = result.load()?;
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Design;

pub use loader::{load_design_file, load_designs, parse_designs};
pub use manifest::Manifest;
pub use scanner::{detect_design_format, scan_directory, scan_sources, DesignFormat, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "swatch.yaml";

/// Result of discovering design files in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no swatch.yaml was found).
    pub manifest: Manifest,

    /// Whether a swatch.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered design files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Parse every discovered design file.
    pub fn load(&self) -> Result<Vec<Design>> {
        load_designs(&self.scan.designs)
    }
}

/// Discover design files in a project directory.
///
/// Reads `swatch.yaml` from the root if present and scans its sources.
/// Without a manifest, or with no sources listed, nothing is scanned.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let manifest_path = root.join(MANIFEST_FILENAME);
    let (manifest, has_manifest) = if manifest_path.exists() {
        (Manifest::load(&manifest_path)?, true)
    } else {
        (Manifest::default(), false)
    };

    let scan = scan_sources(&manifest.sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Collect design files from explicit paths (no manifest lookup).
///
/// Directories are scanned; files are taken as given.
pub fn discover_paths(paths: &[PathBuf]) -> ScanResult {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else {
            scan.designs.push(path.clone());
        }
    }

    scan
}
