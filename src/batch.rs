//! Batch driver: fetch many designs at once, then report on each.
//!
//! Every fetch is spawned before any is awaited, and the batch waits for
//! all of them before a single design is averaged. Completion order does
//! not matter; results come back in the order the ids were given.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tracing::{debug, info};

use crate::error::{Result, SwatchError};
use crate::report::DesignReport;
use crate::source::DesignSource;
use crate::types::{Design, DesignId};

/// Default number of designs in a sample batch.
pub const DEFAULT_BATCH_SIZE: u32 = 10;

/// Ids `1..=count`.
pub fn sequential_ids(count: u32) -> Vec<DesignId> {
    (1..=count).collect()
}

/// Fetch every id concurrently and wait for all of them.
///
/// If any fetch fails the whole batch fails, after every fetch has
/// finished, with one error naming each failed id.
pub async fn fetch_all(source: Arc<dyn DesignSource>, ids: &[DesignId]) -> Result<Vec<Design>> {
    let started = Instant::now();

    let handles: Vec<_> = ids
        .iter()
        .map(|&id| {
            let source = Arc::clone(&source);
            tokio::spawn(async move { (id, source.fetch_design(id).await) })
        })
        .collect();

    debug!(count = handles.len(), "spawned fetches");

    let mut designs = Vec::with_capacity(ids.len());
    let mut failures: Vec<String> = Vec::new();

    for joined in join_all(handles).await {
        let (id, fetched) = joined?;
        match fetched {
            Ok(design) => designs.push(design),
            Err(e) => failures.push(format!("design {}: {}", id, e)),
        }
    }

    if !failures.is_empty() {
        return Err(SwatchError::Fetch {
            message: format!(
                "Failed to fetch {} design(s):\n  {}",
                failures.len(),
                failures.join("\n  ")
            ),
            help: None,
        });
    }

    info!(
        count = designs.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fetched batch"
    );

    Ok(designs)
}

/// Fetch a batch and average each design.
pub async fn run_batch(source: Arc<dyn DesignSource>, ids: &[DesignId]) -> Result<Vec<DesignReport>> {
    let designs = fetch_all(source, ids).await?;
    Ok(designs.iter().map(DesignReport::from_design).collect())
}
