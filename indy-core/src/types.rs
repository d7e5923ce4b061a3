//! Value types flowing through the pipeline

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::activity::Activity;

pub type SystemId = i64;
pub type AllianceId = i64;
pub type RegionId = i64;
pub type ConstellationId = i64;
pub type StructureTypeId = i64;

/// Territorial Claim Unit
pub const TCU_STRUCTURE_TYPE: StructureTypeId = 32226;
/// Infrastructure Hub
pub const IHUB_STRUCTURE_TYPE: StructureTypeId = 32458;

/// Structure types whose presence marks a system as held by an alliance.
pub const QUALIFYING_STRUCTURE_TYPES: [StructureTypeId; 2] =
    [TCU_STRUCTURE_TYPE, IHUB_STRUCTURE_TYPE];

/// A sovereignty structure as reported by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SovereigntyRecord {
    pub solar_system_id: SystemId,
    /// Absent for structures nobody holds
    #[serde(default)]
    pub alliance_id: Option<AllianceId>,
    pub structure_type_id: StructureTypeId,
}

impl SovereigntyRecord {
    pub fn new(solar_system_id: SystemId, alliance_id: AllianceId, structure_type_id: StructureTypeId) -> Self {
        Self {
            solar_system_id,
            alliance_id: Some(alliance_id),
            structure_type_id,
        }
    }

    /// True when the structure type confers a territorial claim.
    pub fn is_claim_structure(&self) -> bool {
        QUALIFYING_STRUCTURE_TYPES.contains(&self.structure_type_id)
    }
}

/// An id/name pair returned by name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedName {
    pub id: i64,
    pub name: String,
}

/// A system held by one of the tracked alliances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedSystem {
    pub id: SystemId,
    pub name: String,
}

impl ManagedSystem {
    pub fn new(id: SystemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Cost index of one activity in one system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostIndexEntry {
    pub solar_system_id: SystemId,
    pub activity: Activity,
    /// Fraction, e.g. `0.15` for 15%
    pub cost_index: f64,
}

impl CostIndexEntry {
    pub fn new(solar_system_id: SystemId, activity: Activity, cost_index: f64) -> Self {
        Self {
            solar_system_id,
            activity,
            cost_index,
        }
    }
}

/// A system's cost index ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMetric {
    pub system_name: String,
    pub cost_index: f64,
}

/// Ranked metrics per activity, highest cost index first.
pub type ActivityReport = BTreeMap<Activity, Vec<RankedMetric>>;
