//! In-memory source backed by loaded design files.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Result, SwatchError};
use crate::types::{Design, DesignId};

use super::DesignSource;

/// Serves a fixed set of designs keyed by id.
///
/// Later designs replace earlier ones with the same id.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    designs: BTreeMap<DesignId, Design>,
}

impl CatalogSource {
    pub fn new(designs: impl IntoIterator<Item = Design>) -> Self {
        Self {
            designs: designs.into_iter().map(|d| (d.design_id, d)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }
}

#[async_trait]
impl DesignSource for CatalogSource {
    async fn fetch_design(&self, id: DesignId) -> Result<Design> {
        debug!(design = id, "fetching catalog design");
        self.designs
            .get(&id)
            .cloned()
            .ok_or(SwatchError::UnknownDesign(id))
    }

    fn design_ids(&self) -> Option<Vec<DesignId>> {
        Some(self.designs.keys().copied().collect())
    }
}
