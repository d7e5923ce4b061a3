//! In-memory collaborators for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use crate::activity::Activity;
use crate::error::{IndyError, Result};
use crate::source::*;
use crate::types::*;

/// Mock game universe.
///
/// Implements every data-source trait from a fixed, hand-built dataset and
/// counts the calls made against it.
#[derive(Default)]
pub struct MockUniverse {
    sovereignty: Vec<SovereigntyRecord>,
    names: HashMap<i64, String>,
    regions: Vec<(RegionId, Vec<ConstellationId>)>,
    constellations: HashMap<ConstellationId, Vec<SystemId>>,
    indices: Vec<CostIndexEntry>,
    reverse_names: bool,
    sovereignty_down: AtomicBool,
    name_calls: AtomicU32,
    region_calls: AtomicU32,
    constellation_calls: AtomicU32,
}

impl MockUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system with a name and place it in a constellation.
    pub fn with_system(mut self, constellation_id: ConstellationId, id: SystemId, name: &str) -> Self {
        self.names.insert(id, name.to_string());
        self.constellations.entry(constellation_id).or_default().push(id);
        self
    }

    /// Declare a region and the constellations it contains.
    pub fn with_region(mut self, region_id: RegionId, constellations: &[ConstellationId]) -> Self {
        self.regions.push((region_id, constellations.to_vec()));
        self
    }

    pub fn with_sovereignty(mut self, record: SovereigntyRecord) -> Self {
        self.sovereignty.push(record);
        self
    }

    pub fn with_index(mut self, system_id: SystemId, activity: Activity, cost_index: f64) -> Self {
        self.indices.push(CostIndexEntry::new(system_id, activity, cost_index));
        self
    }

    /// Return resolved names in reverse request order.
    pub fn with_reversed_names(mut self) -> Self {
        self.reverse_names = true;
        self
    }

    /// Make the sovereignty endpoint fail.
    pub fn with_sovereignty_down(self) -> Self {
        self.sovereignty_down.store(true, Ordering::SeqCst);
        self
    }

    pub fn name_calls(&self) -> u32 {
        self.name_calls.load(Ordering::SeqCst)
    }

    pub fn region_calls(&self) -> u32 {
        self.region_calls.load(Ordering::SeqCst)
    }

    pub fn constellation_calls(&self) -> u32 {
        self.constellation_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SovereigntySource for MockUniverse {
    async fn sovereignty_records(&self) -> Result<Vec<SovereigntyRecord>> {
        if self.sovereignty_down.load(Ordering::SeqCst) {
            return Err(IndyError::DataSource("Mock sovereignty source disabled".to_string()));
        }
        Ok(self.sovereignty.clone())
    }
}

#[async_trait]
impl NameResolver for MockUniverse {
    async fn resolve_names(&self, ids: &[i64]) -> Result<Vec<ResolvedName>> {
        self.name_calls.fetch_add(1, Ordering::SeqCst);

        let mut resolved: Vec<ResolvedName> = ids
            .iter()
            .filter_map(|id| {
                self.names.get(id).map(|name| ResolvedName {
                    id: *id,
                    name: name.clone(),
                })
            })
            .collect();

        if self.reverse_names {
            resolved.reverse();
        }
        Ok(resolved)
    }
}

#[async_trait]
impl RegionResolver for MockUniverse {
    async fn constellations_of_region(&self, region_id: RegionId) -> Result<Vec<ConstellationId>> {
        self.region_calls.fetch_add(1, Ordering::SeqCst);

        self.regions
            .iter()
            .find(|(id, _)| *id == region_id)
            .map(|(_, constellations)| constellations.clone())
            .ok_or_else(|| IndyError::Resolution(format!("Unknown region {}", region_id)))
    }

    async fn systems_of_constellation(&self, constellation_id: ConstellationId) -> Result<Vec<SystemId>> {
        self.constellation_calls.fetch_add(1, Ordering::SeqCst);

        self.constellations
            .get(&constellation_id)
            .cloned()
            .ok_or_else(|| IndyError::Resolution(format!("Unknown constellation {}", constellation_id)))
    }
}

#[async_trait]
impl IndexSource for MockUniverse {
    async fn cost_indices(&self) -> Result<Vec<CostIndexEntry>> {
        Ok(self.indices.clone())
    }
}

/// Notifier that keeps every message it is sent.
pub struct RecordingNotifier {
    channel: String,
    sent: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Reject every send with a delivery error.
    pub fn failing(channel: impl Into<String>) -> Self {
        Self {
            fail: true,
            ..Self::new(channel)
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn channel(&self) -> &str {
        &self.channel
    }

    async fn send(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(IndyError::delivery(&self.channel, "Mock notifier disabled"));
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(text.to_string());
        }
        Ok(())
    }
}
