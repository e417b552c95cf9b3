// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid {field} pattern for backend '{backend}': {reason}")]
    InvalidPattern {
        backend: String,
        field: &'static str,
        reason: String,
    },
    #[error("Invalid service name: '{0}'")]
    InvalidServiceName(String),
    #[error("Invalid preference suffix '{suffix}' for backend '{backend}'")]
    InvalidSuffix { backend: String, suffix: String },
    #[error("Backend already registered: {0}")]
    DuplicateBackend(String),
    #[error("Unknown backend: {0}")]
    UnknownBackend(String),
    #[error("API key has an invalid format")]
    InvalidApiKey,
    #[error("Search URL is not accepted: {0}")]
    InvalidSearchUrl(String),
    #[error("Description must be 5-150 characters without control characters")]
    InvalidDescription,
    #[error("Query already saved: {0}")]
    DuplicateQuery(String),
    #[error("No saved query at index {index} ({len} saved)")]
    QueryIndexOutOfRange { index: usize, len: usize },
    #[error("Corrupt value for preference '{key}': {reason}")]
    CorruptPreference { key: String, reason: String },
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Network error: {0}")]
    Network(String),
}
