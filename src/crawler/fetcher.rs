//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with a proper user agent string
//! - GET requests for listing and detail pages
//! - Classifying transport failures into [`PageError::Load`]
//!
//! There is no retry logic: a single fetch failure is terminal for that URL
//! within one crawl pass.

use crate::config::CrawlerConfig;
use crate::config::UserAgentConfig;
use crate::PageError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `crawler` - Crawler behavior configuration (request timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        user_agent.crawler_name,
        user_agent.crawler_version,
        user_agent.contact_url,
        user_agent.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(crawler.fetch_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body with a single GET request
///
/// Any transport failure (connect error, timeout, TLS) and any non-success
/// HTTP status is collapsed into [`PageError::Load`]; the caller never sees a
/// partial body.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The page body
/// * `Err(PageError)` - Why the page could not be loaded
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, PageError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| PageError::Load(classify_reqwest_error(&e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(PageError::Load(format!("HTTP {}", status.as_u16())));
    }

    response
        .text()
        .await
        .map_err(|e| PageError::Load(classify_reqwest_error(&e)))
}

/// Maps a reqwest error to a short human-readable reason
fn classify_reqwest_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timeout".to_string()
    } else if e.is_connect() {
        "connection refused".to_string()
    } else {
        e.to_string()
    }
}
