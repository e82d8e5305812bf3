//! Error types for listing-audit.
//!
//! Extraction and evaluation are total and never produce these errors. They
//! belong to the boundary around the core: URL validation, retrieval done by
//! the caller, and anything that should not have happened.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Message returned when the source identifier is not a recognized product URL.
pub const INVALID_URL_MESSAGE: &str =
    "Invalid Amazon URL provided. Please enter a valid Amazon product URL.";

/// Error type for audit operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source URL is missing or does not belong to a known marketplace.
    #[error("{0}")]
    InvalidUrl(String),

    /// The page could not be retrieved. Built by the retrieval layer and
    /// passed through unchanged.
    #[error("Failed to fetch Amazon page: {message}")]
    Retrieval {
        /// Status returned by the remote server.
        status: u16,
        /// Status text or transport failure description.
        message: String,
    },

    /// A defect surfaced while running the pipeline.
    #[error("Failed to analyze the Amazon URL: {0}")]
    Unexpected(String),
}

impl Error {
    /// Builds the standard invalid-URL rejection.
    #[must_use]
    pub fn invalid_url() -> Self {
        Self::InvalidUrl(INVALID_URL_MESSAGE.to_string())
    }

    /// HTTP-style status a request handler should answer with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidUrl(_) => 400,
            Self::Retrieval { status, .. } => *status,
            Self::Unexpected(_) => 500,
        }
    }
}

/// Result type alias for audit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Serializable error payload handed back across the boundary.
///
/// Carries the originating URL so failed requests can be traced back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub message: String,
    pub details: String,
    pub url: String,
    pub timestamp: String,
}

impl ErrorReport {
    /// Builds a report for `err` raised while handling `url`.
    #[must_use]
    pub fn new(err: &Error, url: &str) -> Self {
        let url = if url.trim().is_empty() {
            "No URL provided".to_string()
        } else {
            url.to_string()
        };

        Self {
            message: err.to_string(),
            details: format!("{err:?}"),
            url,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
