//! swatch - Average colours of nested design shapes
//!
//! A library for computing the effective colour of shape trees and for
//! averaging batches of designs fetched concurrently from a source.

pub mod average;
pub mod batch;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod report;
pub mod source;
pub mod types;
pub mod validation;

pub use average::{average_colour, design_average, mean_colour, reduce_shapes, shape_averages, ShapeAverage};
pub use batch::{fetch_all, run_batch, sequential_ids, DEFAULT_BATCH_SIZE};
pub use discovery::{discover, discover_paths, load_designs, DiscoveryResult, Manifest};
pub use error::{Result, SwatchError};
pub use report::{render_json, render_text, DesignReport};
pub use source::{sample_shapes, CatalogSource, DesignSource, SampleSource};
pub use types::{round_tenths, Colour, Design, DesignId, ShapeNode};
pub use validation::{validate_designs, Diagnostic, Severity, ValidationResult};
