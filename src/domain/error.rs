//! Error types for the role tagger.
//!
//! This module defines the centralized error type [`TaggerError`] and a type alias
//! [`Result`] used at the host boundary (storage, themes, worker IPC). The tagging
//! core itself never fails: anomalies there degrade to no-ops.

use thiserror::Error;

/// The main error type for role tagger operations.
///
/// Every variant belongs to the host side of the plugin. Persisted-state problems
/// are reported here and then recovered by the caller with a safe fallback, so they
/// never reach the [`TagController`](crate::tagging::TagController).
///
/// # Examples
///
/// ```
/// use role_tagger::TaggerError;
///
/// fn validate_candidate(id: &str) -> Result<(), TaggerError> {
///     if id.trim().is_empty() {
///         return Err(TaggerError::Config("candidate id must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_candidate(" ").is_err());
/// ```
#[derive(Debug, Error)]
pub enum TaggerError {
    /// Storage operation failed.
    ///
    /// Occurs when a persisted value cannot be read back in the expected shape or
    /// the backend cannot complete a write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for role tagger operations.
pub type Result<T> = std::result::Result<T, TaggerError>;
