//! Indy Core - alliance cost index reporting pipeline
//!
//! Turns raw sovereignty and industry data into a per-activity cost index
//! report for the systems a set of alliances hold:
//! - Ownership: claim structures → deduplicated, named systems
//! - Region filter: keep systems inside the operator's region allow-list
//! - Aggregation: per-activity indices above a threshold, highest first
//! - Report: fenced text sections ready for a chat webhook
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            ReportPipeline               │
//! └────────────────┬────────────────────────┘
//!                  │
//!      ┌───────────┴───────────┐
//!      ▼                       ▼
//! ┌─────────────┐       ┌─────────────┐
//! │ Sources     │       │ Notifiers   │
//! │ (ESI, mock) │       │ (webhooks)  │
//! └─────────────┘       └─────────────┘
//! ```

pub mod activity;
pub mod aggregate;
pub mod error;
pub mod format;
pub mod mock;
pub mod ownership;
pub mod pipeline;
pub mod region;
pub mod report;
pub mod source;
pub mod types;

// Re-export main types for convenience
pub use activity::{Activity, ActivityConfig, ActivitySettings, UnknownActivity};
pub use aggregate::aggregate;
pub use error::{IndyError, Result};
pub use format::format_index;
pub use ownership::{claimed_system_ids, resolve_owned_systems};
pub use pipeline::{PipelineSettings, ReportPipeline};
pub use region::filter_by_region;
pub use report::build_report;
pub use source::{IndexSource, NameResolver, Notifier, RegionResolver, SovereigntySource};
pub use types::*;
