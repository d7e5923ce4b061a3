//! Sovereignty to owned-system resolution

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::error::{IndyError, Result};
use crate::source::NameResolver;
use crate::types::{AllianceId, ManagedSystem, SovereigntyRecord, SystemId};

/// Ids of systems claimed by any of `alliances`, first occurrence order.
pub fn claimed_system_ids(records: &[SovereigntyRecord], alliances: &HashSet<AllianceId>) -> Vec<SystemId> {
    let mut seen = HashSet::new();

    records
        .iter()
        .filter(|r| r.alliance_id.is_some_and(|a| alliances.contains(&a)))
        .filter(|r| r.is_claim_structure())
        .map(|r| r.solar_system_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Resolve the systems held by the tracked alliances, names included.
///
/// Names are fetched in one batched call and matched back by id, so the
/// output keeps the order of [`claimed_system_ids`].
pub async fn resolve_owned_systems(
    records: &[SovereigntyRecord],
    alliances: &HashSet<AllianceId>,
    names: &dyn NameResolver,
) -> Result<Vec<ManagedSystem>> {
    let ids = claimed_system_ids(records, alliances);
    debug!(claimed = ids.len(), "Filtered sovereignty records");

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let resolved: HashMap<i64, String> = names
        .resolve_names(&ids)
        .await?
        .into_iter()
        .map(|n| (n.id, n.name))
        .collect();

    ids.into_iter()
        .map(|id| match resolved.get(&id) {
            Some(name) if !name.is_empty() => Ok(ManagedSystem::new(id, name.clone())),
            _ => Err(IndyError::Resolution(format!("No name returned for system {}", id))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockUniverse;
    use crate::types::{IHUB_STRUCTURE_TYPE, TCU_STRUCTURE_TYPE};

    const ALLIANCE: AllianceId = 99000001;
    const OTHER_ALLIANCE: AllianceId = 99000002;

    fn alliances() -> HashSet<AllianceId> {
        HashSet::from([ALLIANCE])
    }

    #[test]
    fn test_filters_by_alliance_and_structure() {
        let records = vec![
            SovereigntyRecord::new(1, ALLIANCE, TCU_STRUCTURE_TYPE),
            SovereigntyRecord::new(2, OTHER_ALLIANCE, TCU_STRUCTURE_TYPE),
            SovereigntyRecord::new(3, ALLIANCE, 35833),
            SovereigntyRecord::new(4, ALLIANCE, IHUB_STRUCTURE_TYPE),
            SovereigntyRecord {
                solar_system_id: 5,
                alliance_id: None,
                structure_type_id: IHUB_STRUCTURE_TYPE,
            },
        ];

        assert_eq!(claimed_system_ids(&records, &alliances()), vec![1, 4]);
    }

    #[test]
    fn test_deduplicates_first_occurrence() {
        let records = vec![
            SovereigntyRecord::new(7, ALLIANCE, IHUB_STRUCTURE_TYPE),
            SovereigntyRecord::new(3, ALLIANCE, TCU_STRUCTURE_TYPE),
            SovereigntyRecord::new(7, ALLIANCE, TCU_STRUCTURE_TYPE),
            SovereigntyRecord::new(7, ALLIANCE, IHUB_STRUCTURE_TYPE),
        ];

        assert_eq!(claimed_system_ids(&records, &alliances()), vec![7, 3]);
    }

    #[tokio::test]
    async fn test_names_reassociated_by_id() {
        let universe = MockUniverse::new()
            .with_system(1, 30000142, "Jita")
            .with_system(1, 30002187, "Amarr")
            .with_reversed_names();
        let records = vec![
            SovereigntyRecord::new(30000142, ALLIANCE, TCU_STRUCTURE_TYPE),
            SovereigntyRecord::new(30002187, ALLIANCE, TCU_STRUCTURE_TYPE),
        ];

        let systems = resolve_owned_systems(&records, &alliances(), &universe)
            .await
            .unwrap();

        assert_eq!(
            systems,
            vec![
                ManagedSystem::new(30000142, "Jita"),
                ManagedSystem::new(30002187, "Amarr"),
            ]
        );
        assert_eq!(universe.name_calls(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_records_yield_one_system() {
        let universe = MockUniverse::new().with_system(1, 30000142, "Jita");
        let records = vec![
            SovereigntyRecord::new(30000142, ALLIANCE, TCU_STRUCTURE_TYPE),
            SovereigntyRecord::new(30000142, ALLIANCE, TCU_STRUCTURE_TYPE),
        ];

        let systems = resolve_owned_systems(&records, &alliances(), &universe)
            .await
            .unwrap();
        assert_eq!(systems, vec![ManagedSystem::new(30000142, "Jita")]);
    }

    #[tokio::test]
    async fn test_missing_name_is_resolution_error() {
        let universe = MockUniverse::new();
        let records = vec![SovereigntyRecord::new(30000142, ALLIANCE, TCU_STRUCTURE_TYPE)];

        let result = resolve_owned_systems(&records, &alliances(), &universe).await;
        assert!(matches!(result, Err(IndyError::Resolution(_))));
    }

    #[tokio::test]
    async fn test_no_claims_skips_name_lookup() {
        let universe = MockUniverse::new();
        let records = vec![SovereigntyRecord::new(30000142, OTHER_ALLIANCE, TCU_STRUCTURE_TYPE)];

        let systems = resolve_owned_systems(&records, &alliances(), &universe)
            .await
            .unwrap();
        assert!(systems.is_empty());
        assert_eq!(universe.name_calls(), 0);
    }
}
