//! Init command implementation.
//!
//! Generates a `swatch.yaml` manifest, listing any directories that
//! already hold design files.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover_paths, Manifest, MANIFEST_FILENAME};
use crate::error::{Result, SwatchError};
use crate::output::{display_path, plural, Printer};
use crate::source::sample_shapes;
use crate::types::Design;

/// Directory the sample design is written to.
const SAMPLE_DIR: &str = "designs";

/// Initialize a swatch project by generating a swatch.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing swatch.yaml
    #[arg(long)]
    pub force: bool,

    /// Also write the sample catalogue as designs/sample.design.json
    #[arg(long)]
    pub sample: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(SwatchError::Validation {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    if args.sample {
        write_sample(&args.path)?;
    }

    printer.status("Scanning", &display_path(&args.path));
    let scan = discover_paths(&[args.path.clone()]);

    // Parent directories of every design file, relative to the project root
    let sources: BTreeSet<String> = scan
        .designs
        .iter()
        .filter_map(|file| file.parent())
        .map(|parent| {
            let relative = parent.strip_prefix(&args.path).unwrap_or(parent);
            if relative == Path::new("") {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            }
        })
        .collect();

    let manifest = Manifest {
        sources: sources.iter().cloned().collect(),
        ..Default::default()
    };

    fs::write(&manifest_path, manifest.to_yaml()?).map_err(|e| SwatchError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !sources.is_empty() {
        let dirs: Vec<&str> = sources.iter().map(|s| s.as_str()).collect();
        printer.info("Discovered", &dirs.join(", "));
    }

    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(scan.total(), "design file", "design files")
        ),
    );

    Ok(())
}

fn write_sample(root: &Path) -> Result<()> {
    let dir = root.join(SAMPLE_DIR);
    let path = dir.join("sample.design.json");

    let json = serde_json::to_string_pretty(&Design::new(1, sample_shapes())).map_err(|e| {
        SwatchError::Parse {
            message: format!("Failed to serialize sample design: {}", e),
            help: None,
        }
    })?;

    fs::create_dir_all(&dir)
        .and_then(|_| fs::write(&path, json))
        .map_err(|e| SwatchError::Io {
            path: path.clone(),
            message: format!("Failed to write sample design: {}", e),
        })
}
