//! Per-activity cost index aggregation

use std::collections::{HashMap, HashSet};

use crate::activity::{Activity, ActivitySettings};
use crate::types::{ActivityReport, CostIndexEntry, ManagedSystem, RankedMetric, SystemId};

/// Collect, for every configured activity, the managed systems whose cost
/// index is strictly above `threshold`, highest first.
///
/// Only the first entry per (system, activity) counts. Ties keep the order
/// in which entries appear in `index_data`. Every configured activity gets a
/// key in the result, even when nothing qualifies.
pub fn aggregate(
    index_data: &[CostIndexEntry],
    systems: &[ManagedSystem],
    activities: &ActivitySettings,
    threshold: f64,
) -> ActivityReport {
    let mut report: ActivityReport = activities
        .iter()
        .map(|c| (c.activity, Vec::new()))
        .collect();

    let by_id: HashMap<SystemId, &ManagedSystem> = systems.iter().map(|s| (s.id, s)).collect();
    let mut seen: HashSet<(SystemId, Activity)> = HashSet::new();

    for entry in index_data {
        let Some(system) = by_id.get(&entry.solar_system_id) else {
            continue;
        };
        let Some(metrics) = report.get_mut(&entry.activity) else {
            continue;
        };
        if !seen.insert((entry.solar_system_id, entry.activity)) {
            continue;
        }

        if entry.cost_index > threshold {
            metrics.push(RankedMetric {
                system_name: system.name.clone(),
                cost_index: entry.cost_index,
            });
        }
    }

    for metrics in report.values_mut() {
        // sort_by is stable
        metrics.sort_by(|a, b| b.cost_index.total_cmp(&a.cost_index));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jita_amarr() -> Vec<ManagedSystem> {
        vec![
            ManagedSystem::new(30000142, "Jita"),
            ManagedSystem::new(30002187, "Amarr"),
        ]
    }

    fn names(metrics: &[RankedMetric]) -> Vec<&str> {
        metrics.iter().map(|m| m.system_name.as_str()).collect()
    }

    #[test]
    fn test_above_threshold_is_reported() {
        let data = vec![CostIndexEntry::new(30000142, Activity::Manufacturing, 0.15)];
        let report = aggregate(&data, &jita_amarr(), &ActivitySettings::all_enabled(), 0.10);

        assert_eq!(
            report[&Activity::Manufacturing],
            vec![RankedMetric {
                system_name: "Jita".to_string(),
                cost_index: 0.15
            }]
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let data = vec![
            CostIndexEntry::new(30000142, Activity::Manufacturing, 0.10),
            CostIndexEntry::new(30002187, Activity::Manufacturing, 0.1000001),
        ];
        let report = aggregate(&data, &jita_amarr(), &ActivitySettings::all_enabled(), 0.10);

        assert_eq!(names(&report[&Activity::Manufacturing]), vec!["Amarr"]);
    }

    #[test]
    fn test_sorted_descending() {
        let data = vec![
            CostIndexEntry::new(30000142, Activity::Reaction, 0.20),
            CostIndexEntry::new(30002187, Activity::Reaction, 0.30),
        ];
        let report = aggregate(&data, &jita_amarr(), &ActivitySettings::all_enabled(), 0.0);

        let reaction = &report[&Activity::Reaction];
        assert_eq!(names(reaction), vec!["Amarr", "Jita"]);
        assert!(reaction.windows(2).all(|w| w[0].cost_index >= w[1].cost_index));
    }

    #[test]
    fn test_ties_keep_data_order() {
        let data = vec![
            CostIndexEntry::new(30002187, Activity::Invention, 0.05),
            CostIndexEntry::new(30000142, Activity::Invention, 0.05),
        ];
        let report = aggregate(&data, &jita_amarr(), &ActivitySettings::all_enabled(), 0.0);

        assert_eq!(names(&report[&Activity::Invention]), vec!["Amarr", "Jita"]);
    }

    #[test]
    fn test_every_activity_has_an_entry() {
        let report = aggregate(&[], &jita_amarr(), &ActivitySettings::none_enabled(), 0.0);

        assert_eq!(report.len(), Activity::ALL.len());
        assert!(report.values().all(Vec::is_empty));
    }

    #[test]
    fn test_ignores_unmanaged_systems() {
        let data = vec![
            CostIndexEntry::new(30000001, Activity::Manufacturing, 0.9),
            CostIndexEntry::new(30000142, Activity::Manufacturing, 0.2),
        ];
        let report = aggregate(&data, &jita_amarr(), &ActivitySettings::all_enabled(), 0.0);

        assert_eq!(names(&report[&Activity::Manufacturing]), vec!["Jita"]);
    }

    #[test]
    fn test_first_entry_per_activity_wins() {
        let data = vec![
            CostIndexEntry::new(30000142, Activity::Copying, 0.01),
            CostIndexEntry::new(30000142, Activity::Copying, 0.50),
        ];
        let report = aggregate(&data, &jita_amarr(), &ActivitySettings::all_enabled(), 0.02);

        assert!(report[&Activity::Copying].is_empty());
    }

    #[test]
    fn test_activities_tracked_independently() {
        let data = vec![
            CostIndexEntry::new(30000142, Activity::Manufacturing, 0.15),
            CostIndexEntry::new(30000142, Activity::ResearchingTimeEfficiency, 0.02),
            CostIndexEntry::new(30000142, Activity::ResearchingMaterialEfficiency, 0.12),
        ];
        let report = aggregate(&data, &jita_amarr(), &ActivitySettings::all_enabled(), 0.10);

        assert_eq!(report[&Activity::Manufacturing].len(), 1);
        assert_eq!(report[&Activity::ResearchingMaterialEfficiency].len(), 1);
        assert!(report[&Activity::ResearchingTimeEfficiency].is_empty());
    }
}
