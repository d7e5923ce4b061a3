//! Industry activities and their per-run display configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Industry activities that publish a cost index.
///
/// Variant order is the canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Manufacturing,
    Reaction,
    ResearchingMaterialEfficiency,
    ResearchingTimeEfficiency,
    Invention,
    Copying,
}

impl Activity {
    /// All activities in canonical report order.
    pub const ALL: [Activity; 6] = [
        Activity::Manufacturing,
        Activity::Reaction,
        Activity::ResearchingMaterialEfficiency,
        Activity::ResearchingTimeEfficiency,
        Activity::Invention,
        Activity::Copying,
    ];

    /// Key used by ESI and the configuration file.
    pub fn key(&self) -> &'static str {
        match self {
            Activity::Manufacturing => "manufacturing",
            Activity::Reaction => "reaction",
            Activity::ResearchingMaterialEfficiency => "researching_material_efficiency",
            Activity::ResearchingTimeEfficiency => "researching_time_efficiency",
            Activity::Invention => "invention",
            Activity::Copying => "copying",
        }
    }

    /// Section title used in the report.
    pub fn display_name(&self) -> &'static str {
        match self {
            Activity::Manufacturing => "Manufacturing",
            Activity::Reaction => "Reaction",
            Activity::ResearchingMaterialEfficiency => "ME Research",
            Activity::ResearchingTimeEfficiency => "TE Research",
            Activity::Invention => "Invention",
            Activity::Copying => "Copying",
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string is not a known activity key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown activity: {0}")]
pub struct UnknownActivity(pub String);

impl FromStr for Activity {
    type Err = UnknownActivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activity::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| UnknownActivity(s.to_string()))
    }
}

/// Display configuration for one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityConfig {
    pub activity: Activity,
    /// Whether the report includes a section for this activity
    pub enabled: bool,
    pub display_name: String,
}

/// Configuration for every recognized activity, in canonical order.
///
/// Always holds exactly one entry per [`Activity`], so downstream stages can
/// rely on every key being present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySettings {
    configs: Vec<ActivityConfig>,
}

impl ActivitySettings {
    /// Build from the set of activities the operator enabled. Everything
    /// else is present but disabled.
    pub fn from_enabled<I>(enabled: I) -> Self
    where
        I: IntoIterator<Item = Activity>,
    {
        let enabled: Vec<Activity> = enabled.into_iter().collect();
        let configs = Activity::ALL
            .into_iter()
            .map(|activity| ActivityConfig {
                activity,
                enabled: enabled.contains(&activity),
                display_name: activity.display_name().to_string(),
            })
            .collect();

        Self { configs }
    }

    pub fn all_enabled() -> Self {
        Self::from_enabled(Activity::ALL)
    }

    pub fn none_enabled() -> Self {
        Self::from_enabled(std::iter::empty())
    }

    /// Configs in canonical order, enabled or not.
    pub fn iter(&self) -> impl Iterator<Item = &ActivityConfig> {
        self.configs.iter()
    }

    pub fn get(&self, activity: Activity) -> Option<&ActivityConfig> {
        self.configs.iter().find(|c| c.activity == activity)
    }

    pub fn is_enabled(&self, activity: Activity) -> bool {
        self.get(activity).is_some_and(|c| c.enabled)
    }

    /// Enabled activities in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = Activity> + '_ {
        self.configs.iter().filter(|c| c.enabled).map(|c| c.activity)
    }
}

impl Default for ActivitySettings {
    fn default() -> Self {
        Self::none_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_key_round_trip() {
        for activity in Activity::ALL {
            assert_eq!(activity.key().parse::<Activity>(), Ok(activity));
        }
        assert_eq!(
            "ship_building".parse::<Activity>(),
            Err(UnknownActivity("ship_building".to_string()))
        );
    }

    #[test]
    fn test_settings_cover_every_activity() {
        let settings = ActivitySettings::from_enabled([Activity::Reaction]);

        let order: Vec<Activity> = settings.iter().map(|c| c.activity).collect();
        assert_eq!(order, Activity::ALL.to_vec());

        assert!(settings.is_enabled(Activity::Reaction));
        assert!(!settings.is_enabled(Activity::Manufacturing));
        assert_eq!(
            settings.get(Activity::ResearchingTimeEfficiency).unwrap().display_name,
            "TE Research"
        );
    }

    #[test]
    fn test_enabled_in_canonical_order() {
        let settings = ActivitySettings::from_enabled([Activity::Copying, Activity::Manufacturing]);
        let enabled: Vec<Activity> = settings.enabled().collect();
        assert_eq!(enabled, vec![Activity::Manufacturing, Activity::Copying]);
    }
}
