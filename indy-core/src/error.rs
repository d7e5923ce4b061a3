//! Error types for the reporting pipeline

use thiserror::Error;

/// Pipeline error
///
/// Every variant aborts the current run. Nothing in the pipeline retries or
/// degrades to a partial report.
#[derive(Debug, Error)]
pub enum IndyError {
    /// Upstream retrieval or parsing failed
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Name, region or constellation lookup failed
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A notifier could not deliver the report
    #[error("Delivery to {channel} failed: {message}")]
    Delivery { channel: String, message: String },
}

impl IndyError {
    pub fn delivery(channel: impl Into<String>, message: impl Into<String>) -> Self {
        IndyError::Delivery {
            channel: channel.into(),
            message: message.into(),
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, IndyError>;
