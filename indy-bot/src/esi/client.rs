//! HTTP client for the ESI endpoints the report needs

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use tracing::debug;

use indy_core::{
    Activity, ConstellationId, CostIndexEntry, IndexSource, IndyError, NameResolver, RegionId,
    RegionResolver, ResolvedName, SovereigntyRecord, SovereigntySource, SystemId,
};

use super::types::*;

/// Public ESI base URL
pub const DEFAULT_ESI_URL: &str = "https://esi.evetech.net/latest";

/// ESI refuses name lookups with more ids than this
pub const NAMES_BATCH_LIMIT: usize = 1000;

/// Errors from a single ESI request
#[derive(Debug, thiserror::Error)]
pub enum EsiError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// ESI returned a non-success status
    #[error("ESI returned {status} for {url}: {message}")]
    Status {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),
}

/// ESI client implementing every pipeline data source
pub struct EsiClient {
    base_url: String,
    client: Client,
}

impl EsiClient {
    /// Create a client for `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, EsiError> {
        let url = self.url(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        Self::handle_response(response, url).await
    }

    async fn post_names(&self, ids: &[i64]) -> Result<Vec<NameEntry>, EsiError> {
        let url = self.url("/universe/names/");
        debug!(%url, ids = ids.len(), "POST");

        let response = self
            .client
            .post(&url)
            .header(header::CACHE_CONTROL, "no-cache")
            .json(ids)
            .send()
            .await?;
        Self::handle_response(response, url).await
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        url: String,
    ) -> Result<T, EsiError> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(EsiError::NotFound(url));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(EsiError::Status { status, url, message });
        }

        Ok(response.json().await?)
    }
}

/// Flatten ESI's per-system layout into one entry per (system, activity).
///
/// Activities the report does not know about are skipped.
pub fn flatten_cost_indices(systems: Vec<IndustrySystem>) -> Vec<CostIndexEntry> {
    let mut entries = Vec::new();

    for system in systems {
        for index in system.cost_indices {
            match index.activity.parse::<Activity>() {
                Ok(activity) => entries.push(CostIndexEntry::new(
                    system.solar_system_id,
                    activity,
                    index.cost_index,
                )),
                Err(e) => debug!(system = system.solar_system_id, "Skipping cost index: {}", e),
            }
        }
    }

    entries
}

#[async_trait]
impl SovereigntySource for EsiClient {
    async fn sovereignty_records(&self) -> indy_core::Result<Vec<SovereigntyRecord>> {
        self.get("/sovereignty/structures/")
            .await
            .map_err(|e| IndyError::DataSource(e.to_string()))
    }
}

#[async_trait]
impl NameResolver for EsiClient {
    async fn resolve_names(&self, ids: &[i64]) -> indy_core::Result<Vec<ResolvedName>> {
        let mut resolved = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(NAMES_BATCH_LIMIT) {
            let names = self
                .post_names(chunk)
                .await
                .map_err(|e| IndyError::Resolution(e.to_string()))?;
            resolved.extend(names.into_iter().map(|n| ResolvedName { id: n.id, name: n.name }));
        }

        Ok(resolved)
    }
}

#[async_trait]
impl RegionResolver for EsiClient {
    async fn constellations_of_region(&self, region_id: RegionId) -> indy_core::Result<Vec<ConstellationId>> {
        let region: RegionInfo = self
            .get(&format!("/universe/regions/{}/", region_id))
            .await
            .map_err(|e| IndyError::Resolution(format!("region {}: {}", region_id, e)))?;
        debug!(region_id, name = %region.name, "Region resolved");
        Ok(region.constellations)
    }

    async fn systems_of_constellation(&self, constellation_id: ConstellationId) -> indy_core::Result<Vec<SystemId>> {
        let constellation: ConstellationInfo = self
            .get(&format!("/universe/constellations/{}/", constellation_id))
            .await
            .map_err(|e| IndyError::Resolution(format!("constellation {}: {}", constellation_id, e)))?;
        Ok(constellation.systems)
    }
}

#[async_trait]
impl IndexSource for EsiClient {
    async fn cost_indices(&self) -> indy_core::Result<Vec<CostIndexEntry>> {
        let systems: Vec<IndustrySystem> = self
            .get("/industry/systems/")
            .await
            .map_err(|e| IndyError::DataSource(e.to_string()))?;
        Ok(flatten_cost_indices(systems))
    }
}
