//! Configuration for indy-bot
//!
//! CLI arguments via clap, and the report configuration file. The file is
//! JSON (`config.json`) unless its extension is `.toml`.

use clap::Parser;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use indy_core::{Activity, ActivitySettings, AllianceId, IndyError, PipelineSettings, RegionId};

use crate::esi::DEFAULT_ESI_URL;

/// indy-bot - alliance industry cost index reports
#[derive(Parser, Debug, Clone)]
#[command(name = "indy-bot")]
#[command(version)]
#[command(about = "Posts industry cost indices for alliance space to Slack and Discord")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "INDY_BOT_CONFIG", default_value = "config.json")]
    pub config: PathBuf,

    /// ESI base URL
    #[arg(long, env = "INDY_BOT_ESI_URL", default_value = DEFAULT_ESI_URL)]
    pub esi_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "INDY_BOT_REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "INDY_BOT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Print the report to stdout (in addition to the config file setting)
    #[arg(short, long)]
    pub verbose: bool,

    /// Build and print the report without posting to any webhook
    #[arg(long)]
    pub dry_run: bool,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown activity in enabled_indices: {0}")]
    UnknownActivity(String),

    #[error("display_threshold must be a finite, non-negative number, got {0}")]
    InvalidThreshold(f64),

    #[error("Environment variable {0} is not set")]
    MissingEnv(String),
}

impl From<ConfigError> for IndyError {
    fn from(e: ConfigError) -> Self {
        IndyError::Config(e.to_string())
    }
}

/// Which webhooks receive the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct WebhookFlags {
    #[serde(default)]
    pub slack: bool,

    #[serde(default)]
    pub discord: bool,
}

/// Configuration file as written by the operator
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Alliances whose sovereignty is tracked
    #[serde(rename = "alliance_IDs")]
    pub alliance_ids: Vec<AllianceId>,

    /// Region allow-list
    pub regions: Vec<RegionId>,

    /// Activity key -> whether its section is shown
    #[serde(default)]
    pub enabled_indices: BTreeMap<String, bool>,

    /// Cost indices at or below this fraction are hidden
    pub display_threshold: f64,

    pub webhooks: WebhookFlags,

    /// Echo the report to stdout
    #[serde(default)]
    pub verbose: bool,
}

impl ConfigFile {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Validate and convert into runtime settings.
    pub fn validate(self) -> Result<BotConfig, ConfigError> {
        if !self.display_threshold.is_finite() || self.display_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.display_threshold));
        }

        let mut enabled = Vec::new();
        for (key, on) in &self.enabled_indices {
            let activity: Activity = key
                .parse()
                .map_err(|_| ConfigError::UnknownActivity(key.clone()))?;
            if *on {
                enabled.push(activity);
            }
        }

        let mut seen = HashSet::new();
        let regions = self
            .regions
            .into_iter()
            .filter(|r| seen.insert(*r))
            .collect();

        Ok(BotConfig {
            pipeline: PipelineSettings {
                alliances: self.alliance_ids.into_iter().collect(),
                regions,
                activities: ActivitySettings::from_enabled(enabled),
                display_threshold: self.display_threshold,
            },
            webhooks: self.webhooks,
            verbose: self.verbose,
        })
    }
}

/// Validated configuration for one run
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub pipeline: PipelineSettings,
    pub webhooks: WebhookFlags,
    pub verbose: bool,
}

impl BotConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let file = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => ConfigFile::from_toml(&content)?,
            _ => ConfigFile::from_json(&content)?,
        };

        file.validate()
    }
}
