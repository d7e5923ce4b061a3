//! ESI response shapes
//!
//! Only the fields the pipeline reads are modelled; serde ignores the rest.

use serde::{Deserialize, Serialize};

use indy_core::{ConstellationId, SystemId};

/// Response from `GET /universe/regions/{id}/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionInfo {
    #[serde(default)]
    pub name: String,
    pub constellations: Vec<ConstellationId>,
}

/// Response from `GET /universe/constellations/{id}/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstellationInfo {
    #[serde(default)]
    pub name: String,
    pub systems: Vec<SystemId>,
}

/// Entry from `POST /universe/names/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameEntry {
    pub id: i64,
    pub name: String,
    /// e.g. "solar_system", "alliance"
    #[serde(default)]
    pub category: String,
}

/// Entry from `GET /industry/systems/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustrySystem {
    pub solar_system_id: SystemId,
    pub cost_indices: Vec<ActivityIndex>,
}

/// One activity's index inside [`IndustrySystem`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityIndex {
    /// Kept as a string so unknown activities do not fail the whole payload
    pub activity: String,
    pub cost_index: f64,
}
