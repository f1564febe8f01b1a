//! Checks over loaded designs.
//!
//! Each check takes the designs and returns a `ValidationResult`.

use std::collections::HashMap;

use crate::types::{Design, ShapeNode};

use super::warning::{Diagnostic, ValidationResult};

/// Designs with no shapes have no average.
pub fn check_empty_designs(designs: &[Design]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for design in designs.iter().filter(|d| d.is_empty()) {
        result.push(
            Diagnostic::error("swatch::check::empty-design", design.design_id, "Design has no shapes")
                .with_help("Add at least one shape"),
        );
    }

    result
}

/// Channels must be finite; NaN or infinity poisons every ancestor.
pub fn check_non_finite(designs: &[Design]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for design in designs {
        walk(design, |path, shape| {
            if !shape.colour.is_finite() {
                result.push(
                    Diagnostic::error(
                        "swatch::check::non-finite",
                        design.design_id,
                        format!("Colour {} is not finite", shape.colour),
                    )
                    .at(path),
                );
            }
        });
    }

    result
}

/// Channels outside 0-255 are allowed but usually a typo.
pub fn check_out_of_range(designs: &[Design]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for design in designs {
        walk(design, |path, shape| {
            if shape.colour.is_finite() && !shape.colour.in_gamut() {
                result.push(
                    Diagnostic::warning(
                        "swatch::check::out-of-range",
                        design.design_id,
                        format!("Colour {} is outside 0-255", shape.colour),
                    )
                    .at(path),
                );
            }
        });
    }

    result
}

/// Two designs with the same id: the later one wins in a catalog.
pub fn check_duplicate_designs(designs: &[Design]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<u32, usize> = HashMap::new();

    for design in designs {
        let count = seen.entry(design.design_id).or_default();
        *count += 1;
        if *count == 2 {
            result.push(
                Diagnostic::warning(
                    "swatch::check::duplicate-design",
                    design.design_id,
                    "Design id is used more than once",
                )
                .with_help("Later designs replace earlier ones with the same id"),
            );
        }
    }

    result
}

/// Shapes without an id make diagnostics and reports hard to read.
pub fn check_empty_ids(designs: &[Design]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for design in designs {
        walk(design, |path, shape| {
            if shape.shape_id.trim().is_empty() {
                result.push(
                    Diagnostic::warning("swatch::check::empty-id", design.design_id, "Shape has no shapeId")
                        .at(path),
                );
            }
        });
    }

    result
}

/// Visit every shape of a design with its slash-separated path.
fn walk(design: &Design, mut visit: impl FnMut(&str, &ShapeNode)) {
    let mut stack: Vec<(String, &ShapeNode)> = design
        .shapes
        .iter()
        .rev()
        .map(|s| (s.shape_id.clone(), s))
        .collect();

    while let Some((path, shape)) = stack.pop() {
        visit(&path, shape);
        for child in shape.children.iter().rev() {
            stack.push((format!("{}/{}", path, child.shape_id), child));
        }
    }
}
