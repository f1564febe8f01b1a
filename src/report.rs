//! Per-design results and their renderings.

use serde::Serialize;

use crate::average::{reduce_shapes, shape_averages, ShapeAverage};
use crate::error::{Result, SwatchError};
use crate::types::{Colour, Design, DesignId};

/// The reported result for one design.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignReport {
    pub design_id: DesignId,

    /// Design average; `None` when the design has no shapes.
    #[serde(flatten)]
    pub average: Option<Colour>,

    /// Per-shape breakdown, in design order.
    pub shapes: Vec<ShapeAverage>,
}

impl DesignReport {
    /// Average a design and keep the per-shape results.
    pub fn from_design(design: &Design) -> Self {
        let shapes = shape_averages(design);

        Self {
            design_id: design.design_id,
            average: reduce_shapes(design.design_id, &shapes),
            shapes,
        }
    }

    /// One-line summary, e.g. `Design 1 rgb(180.9, 198.3, 249)`.
    pub fn summary(&self) -> String {
        match self.average {
            Some(colour) => format!("Design {} {}", self.design_id, colour),
            None => format!("Design {} (no shapes)", self.design_id),
        }
    }

    /// Indented lines, one per top-level shape.
    pub fn shape_lines(&self) -> Vec<String> {
        self.shapes
            .iter()
            .map(|s| format!("  {} {}", s.shape_id, s.colour))
            .collect()
    }
}

/// Render reports as a text block, optionally with per-shape lines.
pub fn render_text(reports: &[DesignReport], details: bool) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&report.summary());
        out.push('\n');
        if details {
            for line in report.shape_lines() {
                out.push_str(&line);
                out.push('\n');
            }
        }
    }
    out
}

/// Render reports as a pretty JSON array.
pub fn render_json(reports: &[DesignReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).map_err(|e| SwatchError::Parse {
        message: format!("Failed to serialize reports: {}", e),
        help: None,
    })
}
