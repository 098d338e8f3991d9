//! Parallel fetch pipeline: fan-out workers, fan-in multiplexer
//!
//! One worker task is spawned per URL (unbounded fan-out, one page each).
//! Every worker emits exactly one [`PageOutcome`] through its private oneshot
//! slot, success or failure, then terminates. A forwarding task drains the
//! slots strictly in URL-enumeration order into a single bounded channel, so
//! the merged stream order is the URL list order regardless of which fetch
//! completes first. The merged channel closes only after every slot has been
//! drained, which is the aggregator's termination signal.

use crate::company::PageOutcome;
use crate::crawler::extractor::extract;
use crate::crawler::fetcher::fetch_page;
use reqwest::Client;
use tokio::sync::{mpsc, oneshot};
use url::Url;

/// Capacity of the merged result channel
///
/// Small on purpose: results are consumed one at a time by the aggregator,
/// the buffer only smooths bursts of simultaneous completions.
const RESULT_BUFFER: usize = 3;

/// Spawns one fetch-parse worker per URL and returns the merged result stream
///
/// The receiver yields exactly one outcome per URL, in URL-enumeration order,
/// then closes. A worker that dies without reporting (task panic) is logged
/// and its slot skipped, so the stream still terminates.
///
/// # Arguments
///
/// * `client` - Shared HTTP client, cloned into each worker
/// * `urls` - The detail page URLs to crawl, in enumeration order
pub fn spawn_workers(client: Client, urls: Vec<Url>) -> mpsc::Receiver<PageOutcome> {
    let (tx, rx) = mpsc::channel(RESULT_BUFFER);

    // One oneshot slot per worker, kept in URL order for the fan-in pass.
    let mut slots = Vec::with_capacity(urls.len());

    for url in urls {
        let (slot_tx, slot_rx) = oneshot::channel();
        let client = client.clone();

        tokio::spawn(async move {
            let outcome = fetch_and_extract(&client, url).await;
            // The receiver only goes away if the whole crawl was dropped.
            let _ = slot_tx.send(outcome);
        });

        slots.push(slot_rx);
    }

    // Fan-in: drain each worker's single result in enumeration order. Dropping
    // `tx` at the end closes the merged stream.
    tokio::spawn(async move {
        for (index, slot) in slots.into_iter().enumerate() {
            match slot.await {
                Ok(outcome) => {
                    if tx.send(outcome).await.is_err() {
                        // Consumer hung up; nothing left to forward to.
                        return;
                    }
                }
                Err(_) => {
                    tracing::warn!("worker {} died without reporting a result", index);
                }
            }
        }
    });

    rx
}

/// The body of one fetch-parse worker: single GET, then extraction
///
/// Fetch failures short-circuit as `Load` outcomes without invoking the
/// extractor. No retries; one URL, one outcome.
async fn fetch_and_extract(client: &Client, url: Url) -> PageOutcome {
    tracing::debug!("crawling {}", url);

    let result = match fetch_page(client, &url).await {
        Ok(body) => extract(&body),
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        tracing::info!("discarding {}: {}", url, e);
    }

    PageOutcome { url, result }
}
