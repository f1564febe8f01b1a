//! Stub source returning a fixed sample catalogue.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::types::{Colour, Design, DesignId, ShapeNode};

use super::DesignSource;

/// Default upper bound for the artificial fetch delay.
pub const DEFAULT_MAX_LATENCY_MS: u64 = 4000;

/// Returns the same sample shapes for every id, after a random delay.
#[derive(Debug, Clone)]
pub struct SampleSource {
    max_latency: Duration,
}

impl SampleSource {
    /// Create a source whose fetches take up to `max_latency`.
    pub fn new(max_latency: Duration) -> Self {
        Self { max_latency }
    }

    /// Create a source that answers immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Pick a delay uniformly in `[0, max_latency)`.
    fn latency(&self) -> Duration {
        let max_ms = self.max_latency.as_millis() as u64;
        if max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::random_range(0..max_ms))
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_MAX_LATENCY_MS))
    }
}

#[async_trait]
impl DesignSource for SampleSource {
    async fn fetch_design(&self, id: DesignId) -> Result<Design> {
        let delay = self.latency();
        debug!(design = id, delay_ms = delay.as_millis() as u64, "fetching sample design");

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        Ok(Design::new(id, sample_shapes()))
    }
}

/// The sample catalogue: a plain shape, two people, a polygon and a fish.
pub fn sample_shapes() -> Vec<ShapeNode> {
    let rgb = Colour::rgb;

    let person = || {
        ShapeNode::new(
            "person",
            rgb(255.0, 255.0, 252.0),
            vec![
                ShapeNode::leaf("person-head", rgb(255.0, 255.0, 255.0)),
                ShapeNode::leaf("person-body", rgb(205.0, 255.0, 252.0)),
                ShapeNode::leaf("person-legs", rgb(100.0, 255.0, 252.0)),
            ],
        )
    };

    let fish = ShapeNode::new(
        "fish",
        rgb(205.0, 255.0, 252.0),
        vec![
            ShapeNode::leaf("fish-eyes", rgb(255.0, 255.0, 255.0)),
            ShapeNode::new(
                "fish-fin",
                rgb(100.0, 66.0, 74.0),
                vec![
                    ShapeNode::leaf("fish-fin-part-1", rgb(93.0, 54.0, 55.0)),
                    ShapeNode::leaf("fish-fin-part-2", rgb(33.0, 255.0, 255.0)),
                    ShapeNode::leaf("fish-fin-part-3", rgb(128.0, 53.0, 255.0)),
                ],
            ),
            ShapeNode::leaf("fish-tail", rgb(255.0, 5.0, 255.0)),
        ],
    );

    vec![
        ShapeNode::leaf("basic-shape", rgb(55.0, 40.0, 255.0)),
        person(),
        ShapeNode::leaf("zigzag-polygon", rgb(205.0, 255.0, 252.0)),
        fish,
        person(),
    ]
}
