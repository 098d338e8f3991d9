use serde::Deserialize;

/// Main configuration structure for Topcap
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub source: SourceConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Number of highest-valued companies to retain
    #[serde(rename = "top-k")]
    pub top_k: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "fetch-timeout-secs", default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_fetch_timeout() -> u64 {
    30
}

/// Where the crawl starts and which links it follows
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Base URL of the crawled site, with trailing slash
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Listing page path, relative to the base URL
    #[serde(rename = "listing-path")]
    pub listing_path: String,

    /// Href prefix identifying detail page links on the listing page
    #[serde(rename = "detail-prefix")]
    pub detail_prefix: String,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}
