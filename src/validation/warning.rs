//! Diagnostic types for design checks.

use std::fmt;

use crate::error::{Result, SwatchError};
use crate::types::DesignId;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single finding about a design.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code, e.g. `swatch::check::non-finite`.
    pub code: &'static str,
    /// Design the finding belongs to.
    pub design: DesignId,
    /// Shape path within the design (`fish/fish-fin`), if any.
    pub shape: Option<String>,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: &'static str, design: DesignId, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, design, message.into())
    }

    pub fn warning(code: &'static str, design: DesignId, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, design, message.into())
    }

    fn new(severity: Severity, code: &'static str, design: DesignId, message: String) -> Self {
        Self {
            severity,
            code,
            design,
            shape: None,
            message,
            help: None,
        }
    }

    /// Attach the shape path the finding refers to.
    pub fn at(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Where the finding is, e.g. `design 3` or `design 3 > fish/fish-fin`.
    pub fn location(&self) -> String {
        match &self.shape {
            Some(shape) => format!("design {} > {}", self.design, shape),
            None => format!("design {}", self.design),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}: {}", self.severity, self.code, self.location(), self.message)
    }
}

/// Collects diagnostics from checks.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == severity).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Check if there are no diagnostics at all.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Fail with a validation error if any error diagnostics were found.
    pub fn into_result(self) -> Result<Self> {
        let errors = self.error_count();
        if errors == 0 {
            return Ok(self);
        }

        Err(SwatchError::Validation {
            message: format!("{} error(s), {} warning(s)", errors, self.warning_count()),
            help: Some("Run `swatch check` on the design files for details".to_string()),
        })
    }
}
