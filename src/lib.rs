//! Topcap: a top-K market value crawler
//!
//! This crate crawls a financial data site: it discovers company detail pages
//! from a listing page, fetches and parses each page concurrently, keeps only
//! the K companies with the largest market value, and persists that bounded
//! set to SQLite.

pub mod company;
pub mod config;
pub mod crawler;
pub mod listing;
pub mod output;
pub mod storage;

use thiserror::Error;

/// Main error type for Topcap operations
#[derive(Debug, Error)]
pub enum TopcapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Failed to load listing page {url}: {message}")]
    Listing { url: String, message: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Per-page failure reasons.
///
/// Each of these is terminal for the URL it came from: the page's result
/// becomes a discarded record and the crawl carries on. None are retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Page unreachable, or the fetch/transport failed
    #[error("failed to load page: {0}")]
    Load(String),

    /// None of the expected cells were found; assume a different page template
    #[error("page has format different than expected")]
    FormatMismatch,

    /// Market value cell present but not numeric after separator stripping
    #[error("market value '{0}' is not numeric")]
    ValueParse(String),
}

/// Result type alias for Topcap operations
pub type Result<T> = std::result::Result<T, TopcapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use company::{Company, PageOutcome};
pub use config::Config;
