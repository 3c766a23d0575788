//! Error types for codegraph-cpd
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;
use crate::shared::models::{TextPointer, TextRange};

/// Main error type for CPD token aggregation
#[derive(Debug, Error)]
pub enum CpdError {
    /// Token submitted before the end of the previously accepted token
    #[error("Tokens of file {file} should be provided in order.\nPrevious token: {previous}\nLast token: {current}")]
    OutOfOrder {
        file: String,
        previous: TextRange,
        current: TextRange,
    },

    /// Range whose start is after its end
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: TextPointer, end: TextPointer },

    /// Operation not allowed in the current session state
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Duplication sink refused the finalized lines
    #[error("Sink error: {0}")]
    Sink(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CpdError {
    /// Create a precondition error
    pub fn precondition(msg: impl Into<String>) -> Self {
        CpdError::Precondition(msg.into())
    }

    /// Create a sink error
    pub fn sink(msg: impl Into<String>) -> Self {
        CpdError::Sink(msg.into())
    }

    /// Whether the session that produced this error must be discarded
    pub fn is_fatal(&self) -> bool {
        matches!(self, CpdError::OutOfOrder { .. } | CpdError::Precondition(_))
    }
}

/// Result type alias for CPD operations
pub type Result<T> = std::result::Result<T, CpdError>;
