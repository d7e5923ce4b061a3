//! Config loading integration tests

use std::io::Write;
use std::path::Path;

use indy_bot::{BotConfig, ConfigError, WebhookFlags};
use indy_core::Activity;

fn write_config(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_json_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        "config.json",
        r#"{
            "alliance_IDs": [99003581],
            "regions": [10000060],
            "enabled_indices": {
                "manufacturing": true,
                "reaction": true,
                "researching_material_efficiency": false,
                "researching_time_efficiency": false,
                "invention": false,
                "copying": false
            },
            "display_threshold": 0.0,
            "webhooks": { "slack": true, "discord": false },
            "verbose": false
        }"#,
    );

    let config = BotConfig::load(&path).unwrap();

    assert_eq!(config.pipeline.regions, vec![10000060]);
    assert!(config.pipeline.alliances.contains(&99003581));
    assert_eq!(config.webhooks, WebhookFlags { slack: true, discord: false });

    let enabled: Vec<Activity> = config.pipeline.activities.enabled().collect();
    assert_eq!(enabled, vec![Activity::Manufacturing, Activity::Reaction]);
}

#[test]
fn test_load_toml_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        "indy-bot.toml",
        r#"
alliance_IDs = [99003581, 1354830081]
regions = [10000060]
display_threshold = 0.05
verbose = true

[enabled_indices]
invention = true
copying = false

[webhooks]
discord = true
"#,
    );

    let config = BotConfig::load(&path).unwrap();

    assert_eq!(config.pipeline.alliances.len(), 2);
    assert_eq!(config.pipeline.display_threshold, 0.05);
    assert!(config.verbose);
    assert_eq!(config.webhooks, WebhookFlags { slack: false, discord: true });
    assert!(config.pipeline.activities.is_enabled(Activity::Invention));
    assert!(!config.pipeline.activities.is_enabled(Activity::Copying));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = BotConfig::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_missing_required_key() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        "config.json",
        r#"{ "alliance_IDs": [1], "regions": [], "webhooks": {} }"#,
    );

    let err = BotConfig::load(&path).unwrap_err();
    match err {
        ConfigError::Json(e) => assert!(e.to_string().contains("display_threshold")),
        other => panic!("unexpected error: {:?}", other),
    }
}
