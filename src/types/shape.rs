//! Shape tree nodes.
//!
//! A shape owns a colour and an ordered list of child shapes. Children are
//! owned outright, so a shape tree can never contain a cycle.
//!
//! # Example
//!
//! ```json
//! {
//!   "shapeId": "person",
//!   "color": { "r": 255, "g": 255, "b": 252 },
//!   "children": [
//!     { "shapeId": "person-head", "color": "#FFFFFF" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::Colour;

/// A node in a design's colour tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeNode {
    /// Opaque identifier. Not used by the averaging itself.
    pub shape_id: String,

    /// The node's own colour.
    #[serde(rename = "color", alias = "colour")]
    pub colour: Colour,

    /// Child shapes, in order.
    #[serde(default)]
    pub children: Vec<ShapeNode>,
}

impl ShapeNode {
    /// Create a shape with the given children.
    pub fn new(shape_id: impl Into<String>, colour: Colour, children: Vec<ShapeNode>) -> Self {
        Self {
            shape_id: shape_id.into(),
            colour,
            children,
        }
    }

    /// Create a shape with no children.
    pub fn leaf(shape_id: impl Into<String>, colour: Colour) -> Self {
        Self::new(shape_id, colour, Vec::new())
    }

    /// Check if the shape has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in the tree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(ShapeNode::depth).max().unwrap_or(0)
    }

    /// Total number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Iterate over this node and all descendants in pre-order.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }
}

/// Pre-order iterator over a shape tree.
pub struct Nodes<'a> {
    stack: Vec<&'a ShapeNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a ShapeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
