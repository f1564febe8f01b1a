//! Run command implementation.
//!
//! Fetches a batch of designs concurrently and reports each design's
//! average colour.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Args;
use tracing::warn;

use crate::batch::{run_batch, sequential_ids};
use crate::discovery::discover;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::report::DesignReport;
use crate::source::{CatalogSource, DesignSource, SampleSource};
use crate::types::DesignId;

/// Fetch a batch of designs and report their average colours
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Project directory (where swatch.yaml lives)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Number of sample designs to fetch
    #[arg(long, short = 'n')]
    pub designs: Option<u32>,

    /// Upper bound for the sample source's fetch delay, in milliseconds
    #[arg(long)]
    pub max_latency_ms: Option<u64>,

    /// Use the sample source even when swatch.yaml lists design sources
    #[arg(long)]
    pub sample: bool,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Include per-shape averages
    #[arg(long)]
    pub details: bool,
}

pub async fn run(args: RunArgs, printer: &Printer) -> Result<()> {
    let reports = collect_reports(&args, printer).await?;
    super::print_reports(&reports, args.json, args.details)
}

/// Fetch and average the batch selected by `args`.
pub(crate) async fn collect_reports(args: &RunArgs, printer: &Printer) -> Result<Vec<DesignReport>> {
    let discovery = discover(&args.path)?;
    let manifest = &discovery.manifest;

    let (source, ids): (Arc<dyn DesignSource>, Vec<DesignId>) = if manifest.uses_files() && !args.sample {
        let designs = discovery.load()?;
        printer.status(
            "Loaded",
            &format!(
                "{} from {}",
                plural(designs.len(), "design", "designs"),
                display_path(&discovery.root)
            ),
        );

        let ignored = ignored_sample_flags(args);
        if !ignored.is_empty() {
            warn!(flags = ?ignored, "sample flags ignored for file sources");
            printer.warning(
                "Ignoring",
                &format!("{} (only used with the sample source)", ignored.join(", ")),
            );
        }

        let loaded = designs.len();
        let catalog = CatalogSource::new(designs);
        let replaced = loaded - catalog.len();
        if replaced > 0 {
            warn!(replaced, "duplicate design ids in sources");
            printer.warning(
                "Duplicate",
                &format!("{} share an id with a later design", plural(replaced, "design", "designs")),
            );
        }

        let ids = catalog.design_ids().unwrap_or_default();
        let source: Arc<dyn DesignSource> = Arc::new(catalog);
        (source, ids)
    } else {
        let count = args.designs.unwrap_or(manifest.designs);
        let latency = Duration::from_millis(args.max_latency_ms.unwrap_or(manifest.max_latency_ms));
        let source: Arc<dyn DesignSource> = Arc::new(SampleSource::new(latency));
        (source, sequential_ids(count))
    };

    printer.status("Fetching", &plural(ids.len(), "design", "designs"));
    let started = Instant::now();

    let reports = run_batch(source, &ids).await?;

    let empty = reports.iter().filter(|r| r.average.is_none()).count();
    if empty > 0 {
        printer.warning("Skipped", &format!("{} with no shapes", plural(empty, "design", "designs")));
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {:.2}s",
            plural(reports.len(), "design", "designs"),
            started.elapsed().as_secs_f64()
        ),
    );

    Ok(reports)
}

/// Flags given on the command line that only steer the sample source.
fn ignored_sample_flags(args: &RunArgs) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if args.designs.is_some() {
        flags.push("--designs");
    }
    if args.max_latency_ms.is_some() {
        flags.push("--max-latency-ms");
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    use crate::report::render_text;
    use crate::types::Colour;

    fn args(path: PathBuf) -> RunArgs {
        RunArgs {
            path,
            designs: Some(3),
            max_latency_ms: Some(0),
            sample: false,
            json: true,
            details: false,
        }
    }

    fn file_project(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("swatch.yaml"), "sources:\n  - designs/\n").unwrap();
        fs::create_dir_all(dir.path().join("designs")).unwrap();
        for (name, content) in files {
            fs::write(dir.path().join("designs").join(name), content).unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn test_run_sample_batch() {
        let dir = tempdir().unwrap();
        let reports = collect_reports(&args(dir.path().to_path_buf()), &Printer::with_color(false))
            .await
            .unwrap();

        let ids: Vec<DesignId> = reports.iter().map(|r| r.design_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            render_text(&reports, false),
            "Design 1 rgb(180.9, 198.3, 249)\n\
             Design 2 rgb(180.9, 198.3, 249)\n\
             Design 3 rgb(180.9, 198.3, 249)\n"
        );
    }

    #[tokio::test]
    async fn test_run_uses_manifest_count() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("swatch.yaml"), "designs: 2\nmax_latency_ms: 0\n").unwrap();
        let mut args = args(dir.path().to_path_buf());
        args.designs = None;
        args.max_latency_ms = None;

        let reports = collect_reports(&args, &Printer::with_color(false)).await.unwrap();
        assert_eq!(reports.len(), 2);
    }

    #[tokio::test]
    async fn test_run_from_files() {
        let dir = file_project(&[(
            "one.design.json",
            r##"{"designId": 5, "shapes": [{"shapeId": "dot", "color": "#000"}]}"##,
        )]);

        let reports = collect_reports(&args(dir.path().to_path_buf()), &Printer::with_color(false))
            .await
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].design_id, 5);
        assert_eq!(reports[0].average, Some(Colour::ZERO));
        assert_eq!(render_text(&reports, true), "Design 5 rgb(0, 0, 0)\n  dot rgb(0, 0, 0)\n");
    }

    #[tokio::test]
    async fn test_run_duplicate_ids_keep_last() {
        let dir = file_project(&[
            ("a.design.json", r##"{"designId": 1, "shapes": [{"shapeId": "a", "color": "#000"}]}"##),
            ("b.design.json", r##"{"designId": 1, "shapes": [{"shapeId": "b", "color": "#FFF"}]}"##),
        ]);

        let reports = collect_reports(&args(dir.path().to_path_buf()), &Printer::with_color(false))
            .await
            .unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].average, Some(Colour::WHITE));
    }

    #[tokio::test]
    async fn test_run_reports_bad_files() {
        let dir = file_project(&[("bad.design.json", "{")]);

        let result = collect_reports(&args(dir.path().to_path_buf()), &Printer::with_color(false)).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_ignored_sample_flags() {
        let mut args = args(PathBuf::from("."));
        assert_eq!(ignored_sample_flags(&args), vec!["--designs", "--max-latency-ms"]);

        args.designs = None;
        args.max_latency_ms = None;
        assert!(ignored_sample_flags(&args).is_empty());
    }
}
