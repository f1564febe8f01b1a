use miette::Diagnostic;
use thiserror::Error;

use crate::types::DesignId;

/// Main error type for swatch operations
#[derive(Error, Diagnostic, Debug)]
pub enum SwatchError {
    #[error("IO error: {0}")]
    #[diagnostic(code(swatch::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(swatch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(swatch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown design: {0}")]
    #[diagnostic(
        code(swatch::source::unknown),
        help("Check the design files listed in swatch.yaml sources")
    )]
    UnknownDesign(DesignId),

    #[error("Fetch error: {message}")]
    #[diagnostic(code(swatch::fetch))]
    Fetch {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Task error: {0}")]
    #[diagnostic(code(swatch::task))]
    Task(#[from] tokio::task::JoinError),

    #[error("Validation error: {message}")]
    #[diagnostic(code(swatch::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, SwatchError>;
