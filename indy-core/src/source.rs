//! Collaborator traits for the pipeline.
//!
//! The pipeline never talks to the network itself. Retrieval, name and
//! region lookups, and delivery all happen behind these traits so the
//! HTTP adapters and the in-memory mocks are interchangeable.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ConstellationId, CostIndexEntry, RegionId, ResolvedName, SovereigntyRecord, SystemId};

/// Source of sovereignty structure records.
#[async_trait]
pub trait SovereigntySource: Send + Sync {
    /// Fetch every sovereignty structure currently known.
    async fn sovereignty_records(&self) -> Result<Vec<SovereigntyRecord>>;
}

/// Batch id to name resolution.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Resolve ids to names.
    ///
    /// Results may come back in any order; callers re-associate by id.
    async fn resolve_names(&self, ids: &[i64]) -> Result<Vec<ResolvedName>>;
}

/// Region and constellation membership lookups.
#[async_trait]
pub trait RegionResolver: Send + Sync {
    async fn constellations_of_region(&self, region_id: RegionId) -> Result<Vec<ConstellationId>>;

    async fn systems_of_constellation(&self, constellation_id: ConstellationId) -> Result<Vec<SystemId>>;
}

/// Source of per-system industry cost indices.
#[async_trait]
pub trait IndexSource: Send + Sync {
    async fn cost_indices(&self) -> Result<Vec<CostIndexEntry>>;
}

/// Delivery channel for the finished report.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel name used in logs and delivery errors.
    fn channel(&self) -> &str;

    async fn send(&self, text: &str) -> Result<()>;
}
