//! Average command implementation.
//!
//! Averages design files directly, without the batch machinery.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover_paths, load_designs};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::report::DesignReport;

/// Average the designs in the given files
#[derive(Args, Debug)]
pub struct AverageArgs {
    /// Design files or directories to scan
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Only print design averages, not per-shape lines
    #[arg(long)]
    pub summary: bool,
}

pub fn run(args: AverageArgs, printer: &Printer) -> Result<()> {
    let reports = collect_reports(&args.files, printer)?;
    super::print_reports(&reports, args.json, !args.summary)
}

/// Load and average every design under `files`.
pub(crate) fn collect_reports(files: &[PathBuf], printer: &Printer) -> Result<Vec<DesignReport>> {
    let scan = discover_paths(files);
    let designs = load_designs(&scan.designs)?;

    printer.status(
        "Averaging",
        &format!(
            "{} from {}",
            plural(designs.len(), "design", "designs"),
            plural(scan.total(), "file", "files")
        ),
    );

    Ok(designs.iter().map(DesignReport::from_design).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    use crate::report::render_text;

    #[test]
    fn test_average_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.design.yaml");
        fs::write(
            &path,
            "designId: 1\nshapes:\n  - shapeId: dot\n    color: '#FFF'\n  - shapeId: pair\n    color: {r: 1, g: 2, b: 3}\n    children:\n      - shapeId: a\n        color: {r: 2, g: 3, b: 5}\n      - shapeId: b\n        color: {r: 4, g: 5, b: 1}\n",
        )
        .unwrap();

        let reports = collect_reports(&[path], &Printer::with_color(false)).unwrap();

        // shapes (255, 255, 255) and (2, 3, 3) average to (128.5, 129, 129)
        assert_eq!(
            render_text(&reports, true),
            "Design 1 rgb(128.5, 129, 129)\n  dot rgb(255, 255, 255)\n  pair rgb(2, 3, 3)\n"
        );
    }

    #[test]
    fn test_average_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.design.json"), r#"{"designId": 2, "shapes": []}"#).unwrap();
        fs::write(dir.path().join("a.design.json"), r#"{"designId": 1, "shapes": []}"#).unwrap();

        let reports = collect_reports(&[dir.path().to_path_buf()], &Printer::with_color(false)).unwrap();

        let ids: Vec<_> = reports.iter().map(|r| r.design_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(render_text(&reports, false), "Design 1 (no shapes)\nDesign 2 (no shapes)\n");
    }

    #[test]
    fn test_average_missing_file() {
        let dir = tempdir().unwrap();
        let result = collect_reports(&[dir.path().join("missing.design.json")], &Printer::with_color(false));
        assert!(result.is_err());
    }

    #[test]
    fn test_run_prints_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.design.json");
        fs::write(&path, r#"{"designId": 3, "shapes": []}"#).unwrap();

        let args = AverageArgs {
            files: vec![path],
            json: true,
            summary: true,
        };
        run(args, &Printer::with_color(false)).unwrap();
    }
}
