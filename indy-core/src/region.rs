//! Region allow-list filtering

use std::collections::HashSet;
use tracing::debug;

use crate::error::Result;
use crate::source::RegionResolver;
use crate::types::{ManagedSystem, RegionId, SystemId};

/// Every system id reachable from the given regions.
///
/// Issues one lookup per distinct region and one per constellation found.
pub async fn systems_in_regions(regions: &[RegionId], resolver: &dyn RegionResolver) -> Result<HashSet<SystemId>> {
    let mut visited = HashSet::new();
    let mut systems = HashSet::new();

    for &region_id in regions {
        if !visited.insert(region_id) {
            continue;
        }

        let constellations = resolver.constellations_of_region(region_id).await?;
        debug!(region_id, constellations = constellations.len(), "Resolved region");

        for constellation_id in constellations {
            let members = resolver.systems_of_constellation(constellation_id).await?;
            systems.extend(members);
        }
    }

    Ok(systems)
}

/// Keep only systems inside the allowed regions, in input order.
pub async fn filter_by_region(
    systems: Vec<ManagedSystem>,
    regions: &[RegionId],
    resolver: &dyn RegionResolver,
) -> Result<Vec<ManagedSystem>> {
    let allowed = systems_in_regions(regions, resolver).await?;

    Ok(systems
        .into_iter()
        .filter(|s| allowed.contains(&s.id))
        .collect())
}
