//! EVE Swagger Interface (ESI) data source
//!
//! Implements the pipeline's data-source traits over the public ESI REST API:
//! - `GET  /sovereignty/structures/`
//! - `POST /universe/names/`
//! - `GET  /universe/regions/{id}/` and `/universe/constellations/{id}/`
//! - `GET  /industry/systems/`

pub mod client;
pub mod types;

pub use client::{flatten_cost_indices, EsiClient, EsiError, DEFAULT_ESI_URL, NAMES_BATCH_LIMIT};
pub use types::*;
