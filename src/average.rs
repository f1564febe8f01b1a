//! Colour averaging over shape trees.
//!
//! A shape's effective colour is the midpoint between its own colour and
//! the mean of its children's effective colours, rounded to tenths. Each
//! node is rounded once, when its own value is finalised, and parents sum
//! those already-rounded values. Rounding therefore compounds with depth;
//! a single rounding at the root gives different numbers on deep trees.

use serde::Serialize;
use tracing::{debug, warn};

use crate::types::{Colour, Design, DesignId, ShapeNode};

/// Effective colour of a shape tree.
///
/// A leaf returns its own colour unchanged. Recursion depth follows tree
/// depth; callers hand in finite trees (guaranteed by ownership).
pub fn average_colour(shape: &ShapeNode) -> Colour {
    if shape.is_leaf() {
        return shape.colour;
    }

    let sum = shape
        .children
        .iter()
        .map(average_colour)
        .fold(Colour::ZERO, |acc, c| acc + c);

    sum.div(shape.children.len())
        .midpoint(shape.colour)
        .round_tenths()
}

/// Effective colour of one top-level shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeAverage {
    pub shape_id: String,
    #[serde(flatten)]
    pub colour: Colour,
}

/// Effective colour of every top-level shape in a design, in order.
pub fn shape_averages(design: &Design) -> Vec<ShapeAverage> {
    design
        .shapes
        .iter()
        .map(|shape| ShapeAverage {
            shape_id: shape.shape_id.clone(),
            colour: average_colour(shape),
        })
        .collect()
}

/// Mean of already-computed shape colours, rounded to tenths.
///
/// Returns `None` for an empty slice.
pub fn mean_colour(colours: &[Colour]) -> Option<Colour> {
    if colours.is_empty() {
        return None;
    }

    let sum = colours.iter().fold(Colour::ZERO, |acc, &c| acc + c);
    Some(sum.div(colours.len()).round_tenths())
}

/// Average colour of a design: the mean of its top-level shape averages.
///
/// This is a flat reduction over the per-shape results. A design with no
/// shapes has no average.
pub fn design_average(design: &Design) -> Option<Colour> {
    reduce_shapes(design.design_id, &shape_averages(design))
}

/// Reduce already-computed shape averages to the design's average.
pub fn reduce_shapes(design_id: DesignId, shapes: &[ShapeAverage]) -> Option<Colour> {
    let colours: Vec<Colour> = shapes.iter().map(|s| s.colour).collect();
    let average = mean_colour(&colours);

    match average {
        Some(colour) => debug!(design = design_id, %colour, "averaged design"),
        None => warn!(design = design_id, "design has no shapes"),
    }

    average
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::sample_shapes;
    use pretty_assertions::assert_eq;

    fn rgb(r: f64, g: f64, b: f64) -> Colour {
        Colour::rgb(r, g, b)
    }

    fn person_fixture() -> ShapeNode {
        ShapeNode::new(
            "person",
            rgb(1.0, 2.0, 3.0),
            vec![
                ShapeNode::leaf("person-head", rgb(2.0, 3.0, 5.0)),
                ShapeNode::leaf("person-body", rgb(4.0, 5.0, 1.0)),
                ShapeNode::new(
                    "person-legs",
                    rgb(6.0, 2.0, 3.0),
                    vec![
                        ShapeNode::leaf("person-legs-1", rgb(2.0, 3.0, 5.0)),
                        ShapeNode::leaf("person-legs-2", rgb(4.0, 5.0, 1.0)),
                        ShapeNode::leaf("person-legs-3", rgb(6.0, 2.0, 3.0)),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_leaf_returns_own_colour() {
        let leaf = ShapeNode::leaf("basic-shape", rgb(1.0, 2.0, 3.0));
        assert_eq!(average_colour(&leaf), rgb(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_leaf_is_not_rounded() {
        let leaf = ShapeNode::leaf("fine", rgb(0.123, 4.56, -7.89));
        assert_eq!(average_colour(&leaf), rgb(0.123, 4.56, -7.89));
    }

    #[test]
    fn test_nested_children() {
        assert_eq!(average_colour(&person_fixture()), rgb(2.3, 2.8, 3.0));
    }

    #[test]
    fn test_single_level() {
        // children mean (3, 4, 3); midpoint with (1, 2, 3) is (2, 3, 3)
        let shape = ShapeNode::new(
            "pair",
            rgb(1.0, 2.0, 3.0),
            vec![
                ShapeNode::leaf("a", rgb(2.0, 3.0, 5.0)),
                ShapeNode::leaf("b", rgb(4.0, 5.0, 1.0)),
            ],
        );
        assert_eq!(average_colour(&shape), rgb(2.0, 3.0, 3.0));
    }

    #[test]
    fn test_rounding_tie_goes_up() {
        // (0 + 0.5) / 2 = 0.25 -> 0.3 and (0 - 0.5) / 2 = -0.25 -> -0.2
        let shape = ShapeNode::new(
            "tie",
            rgb(0.0, 0.0, 0.0),
            vec![ShapeNode::leaf("child", rgb(0.5, -0.5, 0.0))],
        );
        assert_eq!(average_colour(&shape), rgb(0.3, -0.2, 0.0));
    }

    #[test]
    fn test_rounds_each_level_before_summing() {
        let inner = ShapeNode::new(
            "inner",
            rgb(0.0, 0.0, 0.0),
            vec![ShapeNode::leaf("leaf", rgb(0.3, 0.0, 0.0))],
        );
        // inner r: (0.3 + 0) / 2 = 0.15 -> 0.2
        let outer = ShapeNode::new("outer", rgb(0.0, 0.0, 0.0), vec![inner]);
        // outer r: (0.2 + 0) / 2 = 0.1; unrounded would be 0.075 -> 0.1
        assert_eq!(average_colour(&outer).r, 0.1);

        let deeper = ShapeNode::new("deeper", rgb(0.0, 0.0, 0.0), vec![outer]);
        // deeper r: (0.1 + 0) / 2 = 0.05 -> 0.1; unrounded 0.0375 -> 0.0
        assert_eq!(average_colour(&deeper).r, 0.1);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let shape = person_fixture();
        let snapshot = shape.clone();

        let _ = average_colour(&shape);

        assert_eq!(shape, snapshot);
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let shape = person_fixture();
        assert_eq!(average_colour(&shape), average_colour(&shape));
    }

    #[test]
    fn test_result_is_independent_of_input() {
        let leaf = ShapeNode::leaf("leaf", rgb(1.0, 2.0, 3.0));
        let mut result = average_colour(&leaf);
        result.r = 99.0;
        assert_eq!(result.r, 99.0);
        assert_eq!(leaf.colour, rgb(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_sample_shapes() {
        let design = Design::new(1, sample_shapes());
        let averages: Vec<(String, Colour)> = shape_averages(&design)
            .into_iter()
            .map(|s| (s.shape_id, s.colour))
            .collect();

        assert_eq!(
            averages,
            vec![
                ("basic-shape".to_string(), rgb(55.0, 40.0, 255.0)),
                ("person".to_string(), rgb(220.8, 255.0, 252.5)),
                ("zigzag-polygon".to_string(), rgb(205.0, 255.0, 252.0)),
                ("fish".to_string(), rgb(202.9, 186.4, 232.9)),
                ("person".to_string(), rgb(220.8, 255.0, 252.5)),
            ]
        );
    }

    #[test]
    fn test_sample_design_average() {
        let design = Design::new(1, sample_shapes());
        assert_eq!(design_average(&design), Some(rgb(180.9, 198.3, 249.0)));
    }

    #[test]
    fn test_design_average_single_shape() {
        let design = Design::new(2, vec![person_fixture()]);
        assert_eq!(design_average(&design), Some(average_colour(&person_fixture())));
    }

    #[test]
    fn test_design_average_ignores_shape_order() {
        let mut shapes = sample_shapes();
        let forward = design_average(&Design::new(1, shapes.clone()));
        shapes.reverse();
        let backward = design_average(&Design::new(1, shapes));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_design_average_empty() {
        assert_eq!(design_average(&Design::new(3, vec![])), None);
    }

    #[test]
    fn test_reduce_shapes_matches_design_average() {
        let design = Design::new(1, sample_shapes());
        let shapes = shape_averages(&design);

        assert_eq!(reduce_shapes(1, &shapes), design_average(&design));
        assert_eq!(reduce_shapes(2, &[]), None);
    }

    #[test]
    fn test_mean_colour() {
        assert_eq!(mean_colour(&[]), None);
        assert_eq!(
            mean_colour(&[rgb(1.0, 2.0, 3.0), rgb(2.0, 2.0, 2.0)]),
            Some(rgb(1.5, 2.0, 2.5))
        );
        assert_eq!(mean_colour(&[rgb(0.0, 0.0, 0.0), rgb(0.0, 0.0, 0.0), rgb(1.0, 0.0, 0.0)]).map(|c| c.r), Some(0.3));
    }

    #[test]
    fn test_shape_average_json() {
        let avg = ShapeAverage {
            shape_id: "fish".to_string(),
            colour: rgb(202.9, 186.4, 232.9),
        };
        assert_eq!(
            serde_json::to_string(&avg).unwrap(),
            r#"{"shapeId":"fish","r":202.9,"g":186.4,"b":232.9}"#
        );
    }
}
