//! URL supplier: builds the list of detail pages to crawl
//!
//! The listing page is one big table where each row links to one company
//! detail page. Discovery is a one-shot parse performed before the parallel
//! pipeline starts; the resulting list is immutable input for the crawl and
//! its order defines the merge order of the result stream.

use crate::config::SourceConfig;
use crate::crawler::fetch_page;
use crate::TopcapError;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Fetches the listing page and returns the detail URLs in document order
///
/// A failure here aborts the crawl: without the URL list there is nothing to
/// fan out over. This is unlike per-page failures, which are absorbed.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `source` - Source site configuration (base URL, listing path, prefix)
pub async fn discover_detail_urls(
    client: &Client,
    source: &SourceConfig,
) -> Result<Vec<Url>, TopcapError> {
    let base = Url::parse(&source.base_url)?;
    let listing_url = base.join(&source.listing_path)?;

    tracing::info!("discovering detail pages from {}", listing_url);

    let body = fetch_page(client, &listing_url)
        .await
        .map_err(|e| TopcapError::Listing {
            url: listing_url.to_string(),
            message: e.to_string(),
        })?;

    let urls = parse_listing(&body, &base, &source.detail_prefix);
    tracing::info!("discovered {} detail pages", urls.len());

    Ok(urls)
}

/// Parses a listing page body into detail URLs
///
/// Walks the table rows skipping the header row, takes each row's first
/// anchor, and keeps hrefs starting with `detail_prefix`, resolved against
/// `base`. Rows without an anchor and anchors pointing elsewhere are skipped
/// silently; a malformed href is skipped too.
pub fn parse_listing(html: &str, base: &Url, detail_prefix: &str) -> Vec<Url> {
    let document = Html::parse_document(html);

    let row_selector = match Selector::parse("tr") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };
    let anchor_selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let mut urls = Vec::new();

    // The first row is the table header.
    for row in document.select(&row_selector).skip(1) {
        let Some(anchor) = row.select(&anchor_selector).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        if !href.starts_with(detail_prefix) {
            continue;
        }

        match base.join(href) {
            Ok(url) => urls.push(url),
            Err(e) => tracing::debug!("skipping malformed href '{}': {}", href, e),
        }
    }

    urls
}
