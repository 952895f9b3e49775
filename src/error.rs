//! Error types for the harvester.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// Invalid date format.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2025-01-01)")]
    InvalidDate(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Versions listing request returned a non-success status.
    #[error("Versions listing request failed with status {status}")]
    VersionsRequest { status: reqwest::StatusCode },

    /// Target title absent from the versions listing.
    #[error("Title {title} not found in versions listing")]
    VersionNotFound { title: u32 },

    /// Full-title XML request returned a non-success status.
    #[error("Full XML request for date {date} failed with status {status}: {body}")]
    FetchFailed {
        date: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// Versions listing body was not valid JSON.
    #[error("Versions listing parse failed: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// CSV serialization error.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;
