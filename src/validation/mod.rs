//! Validation for design files.
//!
//! Runs a suite of checks over loaded designs and reports errors and
//! warnings. Used by `swatch check`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::types::Design;

/// Run all checks against the designs.
pub fn validate_designs(designs: &[Design]) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty_designs(designs));
    result.merge(checks::check_non_finite(designs));
    result.merge(checks::check_out_of_range(designs));
    result.merge(checks::check_duplicate_designs(designs));
    result.merge(checks::check_empty_ids(designs));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("{}[{}]: {}", label, d.code, d.message);
        eprintln!("  {} {}", printer.dim("-->"), d.location());
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.cyan("help:"), help);
        }
    }
}
