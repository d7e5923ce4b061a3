//! Shared HTTP client construction

use reqwest::{header, Client};
use std::time::Duration;

/// Sent with every request so ESI can identify the caller.
pub const USER_AGENT: &str = concat!("indy-bot/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for ESI and webhooks.
pub fn build_client(timeout_secs: u64) -> reqwest::Result<Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

    Client::builder()
        .default_headers(headers)
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}
