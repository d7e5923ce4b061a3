//! ReportPipeline - sequences one reporting run end to end.
//!
//! sovereignty → owned systems → region filter → cost indices →
//! aggregation → report text → notifiers

use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use crate::activity::ActivitySettings;
use crate::aggregate::aggregate;
use crate::error::Result;
use crate::ownership::resolve_owned_systems;
use crate::region::filter_by_region;
use crate::report::build_report;
use crate::source::{IndexSource, NameResolver, Notifier, RegionResolver, SovereigntySource};
use crate::types::{AllianceId, RegionId};

/// Everything a run needs to know about what to report.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Alliances whose systems are tracked
    pub alliances: HashSet<AllianceId>,
    /// Region allow-list
    pub regions: Vec<RegionId>,
    pub activities: ActivitySettings,
    /// Exclusive lower bound for a cost index to be listed
    pub display_threshold: f64,
}

/// One reporting run over a set of collaborators.
pub struct ReportPipeline {
    settings: PipelineSettings,
    sovereignty: Arc<dyn SovereigntySource>,
    names: Arc<dyn NameResolver>,
    regions: Arc<dyn RegionResolver>,
    indices: Arc<dyn IndexSource>,
    notifiers: Vec<Arc<dyn Notifier>>,
    echo: bool,
}

impl ReportPipeline {
    /// Create a pipeline backed by a single source implementing every lookup.
    pub fn new<S>(settings: PipelineSettings, source: Arc<S>) -> Self
    where
        S: SovereigntySource + NameResolver + RegionResolver + IndexSource + 'static,
    {
        Self {
            settings,
            sovereignty: source.clone(),
            names: source.clone(),
            regions: source.clone(),
            indices: source,
            notifiers: Vec::new(),
            echo: false,
        }
    }

    /// Add a delivery channel. Channels are used in the order added.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifiers.push(notifier);
        self
    }

    /// Print the report to stdout after delivery.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Fetch, filter, aggregate and render without delivering.
    pub async fn build_report(&self) -> Result<String> {
        let records = self.sovereignty.sovereignty_records().await?;
        info!(records = records.len(), "Fetched sovereignty structures");

        let owned = resolve_owned_systems(&records, &self.settings.alliances, self.names.as_ref()).await?;
        info!(systems = owned.len(), "Resolved alliance systems");

        let in_scope = filter_by_region(owned, &self.settings.regions, self.regions.as_ref()).await?;
        info!(systems = in_scope.len(), regions = self.settings.regions.len(), "Applied region filter");

        let index_data = self.indices.cost_indices().await?;
        info!(entries = index_data.len(), "Fetched cost indices");

        let report = aggregate(
            &index_data,
            &in_scope,
            &self.settings.activities,
            self.settings.display_threshold,
        );

        Ok(build_report(&report, &self.settings.activities))
    }

    /// Build the report and hand it to every notifier.
    ///
    /// Stops at the first failure; nothing is delivered if the report could
    /// not be built.
    pub async fn run(&self) -> Result<String> {
        let report = self.build_report().await?;

        for notifier in &self.notifiers {
            notifier.send(&report).await?;
            info!(channel = notifier.channel(), "Report delivered");
        }

        if self.echo {
            println!("{}", report);
        }

        Ok(report)
    }
}
