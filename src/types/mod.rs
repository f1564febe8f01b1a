//! Core domain types for swatch.
//!
//! This module contains the fundamental types used throughout the tool:
//! - `Colour` - real-valued RGB colour
//! - `ShapeNode` - a coloured node with ordered child shapes
//! - `Design` - a set of top-level shapes under one id

mod colour;
mod design;
mod shape;

pub use colour::{round_tenths, Colour};
pub use design::{Design, DesignId};
pub use shape::{Nodes, ShapeNode};
