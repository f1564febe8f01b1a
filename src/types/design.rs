//! Design documents: a named set of top-level shapes.

use serde::{Deserialize, Serialize};

use super::ShapeNode;

/// Identifier of a design within a source.
pub type DesignId = u32;

/// A design: an id and its top-level shapes.
///
/// The shapes are siblings; there is no implicit root above them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub design_id: DesignId,

    #[serde(default)]
    pub shapes: Vec<ShapeNode>,
}

impl Design {
    pub fn new(design_id: DesignId, shapes: Vec<ShapeNode>) -> Self {
        Self { design_id, shapes }
    }

    /// Check if the design has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Total number of nodes across all shape trees.
    pub fn node_count(&self) -> usize {
        self.shapes.iter().map(ShapeNode::node_count).sum()
    }
}
