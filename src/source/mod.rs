//! Design sources.
//!
//! A source hands out designs by id. Fetches are asynchronous so a batch
//! can issue many of them at once; see [`crate::batch`].

mod catalog;
mod sample;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Design, DesignId};

pub use catalog::CatalogSource;
pub use sample::{sample_shapes, SampleSource, DEFAULT_MAX_LATENCY_MS};

/// Something that can fetch a design by id.
#[async_trait]
pub trait DesignSource: Send + Sync {
    /// Fetch one design.
    async fn fetch_design(&self, id: DesignId) -> Result<Design>;

    /// Ids this source knows about, if it can enumerate them.
    fn design_ids(&self) -> Option<Vec<DesignId>> {
        None
    }
}
