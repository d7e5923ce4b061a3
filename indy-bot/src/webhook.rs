//! Slack and Discord webhook delivery
//!
//! Webhook URLs are secrets, so they come from the environment rather than
//! the config file. The variable is read on every send.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;

use indy_core::{IndyError, Notifier};

use crate::config::{ConfigError, WebhookFlags};

pub const SLACK_WEBHOOK_ENV: &str = "INDY_BOT_SLACK_WEBHOOK_URL";
pub const DISCORD_WEBHOOK_ENV: &str = "INDY_BOT_DISCORD_WEBHOOK_URL";

/// Supported webhook flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookKind {
    Slack,
    Discord,
}

impl WebhookKind {
    pub fn channel(&self) -> &'static str {
        match self {
            WebhookKind::Slack => "slack",
            WebhookKind::Discord => "discord",
        }
    }

    pub fn env_var(&self) -> &'static str {
        match self {
            WebhookKind::Slack => SLACK_WEBHOOK_ENV,
            WebhookKind::Discord => DISCORD_WEBHOOK_ENV,
        }
    }
}

#[derive(Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct DiscordPayload<'a> {
    content: &'a str,
}

#[derive(Debug, Clone)]
enum Endpoint {
    /// Read from this environment variable at send time
    Env(String),
    Fixed(String),
}

/// Posts the report to a chat webhook
pub struct WebhookNotifier {
    kind: WebhookKind,
    endpoint: Endpoint,
    client: Client,
}

impl WebhookNotifier {
    /// Notifier reading its URL from the kind's standard environment variable.
    pub fn new(kind: WebhookKind, client: Client) -> Self {
        Self::from_env_var(kind, kind.env_var(), client)
    }

    pub fn from_env_var(kind: WebhookKind, var: impl Into<String>, client: Client) -> Self {
        Self {
            kind,
            endpoint: Endpoint::Env(var.into()),
            client,
        }
    }

    /// Notifier posting to a fixed URL.
    pub fn with_url(kind: WebhookKind, url: impl Into<String>, client: Client) -> Self {
        Self {
            kind,
            endpoint: Endpoint::Fixed(url.into()),
            client,
        }
    }

    pub fn kind(&self) -> WebhookKind {
        self.kind
    }

    fn resolve_url(&self) -> Result<String, ConfigError> {
        match &self.endpoint {
            Endpoint::Fixed(url) => Ok(url.clone()),
            Endpoint::Env(var) => std::env::var(var)
                .ok()
                .filter(|url| !url.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnv(var.clone())),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn channel(&self) -> &str {
        self.kind.channel()
    }

    async fn send(&self, text: &str) -> indy_core::Result<()> {
        let url = self.resolve_url()?;

        let request = self.client.post(&url);
        let request = match self.kind {
            WebhookKind::Slack => request.json(&SlackPayload { text }),
            WebhookKind::Discord => request.json(&DiscordPayload { content: text }),
        };

        let response = request
            .send()
            .await
            .map_err(|e| IndyError::delivery(self.channel(), e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(IndyError::delivery(self.channel(), format!("HTTP {}: {}", status, body)));
        }

        Ok(())
    }
}

/// Notifiers enabled by the config's webhook flags, Slack first.
pub fn configured_notifiers(flags: WebhookFlags, client: &Client) -> Vec<Arc<dyn Notifier>> {
    let mut notifiers: Vec<Arc<dyn Notifier>> = Vec::new();

    if flags.slack {
        notifiers.push(Arc::new(WebhookNotifier::new(WebhookKind::Slack, client.clone())));
    }
    if flags.discord {
        notifiers.push(Arc::new(WebhookNotifier::new(WebhookKind::Discord, client.clone())));
    }

    notifiers
}
