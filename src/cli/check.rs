//! Check command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::{discover_paths, load_designs};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_designs};

/// Check design files without averaging
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Design files or directories to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let scan = discover_paths(&args.files);
    let designs = load_designs(&scan.designs)?;

    printer.status("Checking", &plural(designs.len(), "design", "designs"));

    let result = validate_designs(&designs);
    print_diagnostics(&result, printer);

    let errors = result.error_count();
    let warnings = result.warning_count();
    if errors > 0 {
        printer.error(
            "Failed",
            &format!("{}, {}", plural(errors, "error", "errors"), plural(warnings, "warning", "warnings")),
        );
    } else if warnings > 0 {
        printer.warning("Finished", &plural(warnings, "warning", "warnings"));
    } else {
        printer.status("Finished", "no problems found");
    }

    result.into_result().map(|_| ())
}
