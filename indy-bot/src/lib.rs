//! Indy Bot - industry cost index reports for alliance space
//!
//! Wires the `indy-core` pipeline to its real collaborators:
//! - ESI over HTTP for sovereignty, names, regions and cost indices
//! - Slack and Discord webhooks for delivery
//! - A JSON or TOML configuration file plus CLI/env overrides
//!
//! Meant to be run on a schedule (cron, systemd timer). Each invocation is
//! one independent run; a failed run exits non-zero and posts nothing.

pub mod config;
pub mod esi;
pub mod http;
pub mod webhook;

pub use config::{Args, BotConfig, ConfigError, ConfigFile, WebhookFlags};
pub use esi::{EsiClient, EsiError, DEFAULT_ESI_URL};
pub use webhook::{configured_notifiers, WebhookKind, WebhookNotifier};
