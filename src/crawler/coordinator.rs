//! Crawl coordinator - wires discovery, pipeline, aggregation, persistence
//!
//! One crawl pass:
//! 1. Open storage and record the run
//! 2. Build the HTTP client
//! 3. Discover the detail URL list from the listing page
//! 4. Fan out one worker per URL, fan results back into one stream
//! 5. Aggregate the stream into the bounded top-K set
//! 6. Replace the persisted result set with the new one
//!
//! Per-page failures never abort the pass: the crawl always completes and
//! persists whatever valid records it found, even if that is fewer than K
//! or zero.

use crate::config::Config;
use crate::crawler::aggregator::collect_top;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::pipeline::spawn_workers;
use crate::listing::discover_detail_urls;
use crate::storage::{open_storage, persist_companies, SqliteStorage, Storage};
use crate::TopcapError;
use reqwest::Client;
use std::path::Path;

/// Main crawl coordinator structure
pub struct Coordinator {
    config: Config,
    storage: SqliteStorage,
    client: Client,
    run_id: i64,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Opens the database, records the run start, and builds the HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `config_hash` - SHA-256 hash of the config file, stored on the run
    pub fn new(config: Config, config_hash: &str) -> Result<Self, TopcapError> {
        let mut storage = open_storage(Path::new(&config.output.database_path))?;
        let run_id = storage.create_run(config_hash)?;

        let client = build_http_client(&config.user_agent, &config.crawler)?;

        Ok(Self {
            config,
            storage,
            client,
            run_id,
        })
    }

    /// Runs one complete crawl pass
    pub async fn run(&mut self) -> Result<(), TopcapError> {
        tracing::info!("starting crawl run {}", self.run_id);
        let start_time = std::time::Instant::now();

        let result = self.crawl_and_persist().await;

        match &result {
            Ok(()) => {
                self.storage.complete_run(self.run_id)?;
                tracing::info!("crawl run {} completed in {:?}", self.run_id, start_time.elapsed());
            }
            Err(e) => {
                tracing::error!("crawl run {} failed: {}", self.run_id, e);
                self.storage.fail_run(self.run_id)?;
            }
        }

        result
    }

    async fn crawl_and_persist(&mut self) -> Result<(), TopcapError> {
        let urls = discover_detail_urls(&self.client, &self.config.source).await?;

        let results = spawn_workers(self.client.clone(), urls);
        let top = collect_top(results, self.config.crawler.top_k).await;

        tracing::info!(
            "retained {} of at most {} companies",
            top.len(),
            self.config.crawler.top_k
        );

        // The persisted set is a snapshot of this pass; the previous one is
        // cleared only now that a replacement exists.
        self.storage.clear_companies()?;
        let inserted = persist_companies(&mut self.storage, &top, self.run_id);

        if inserted < top.len() {
            tracing::warn!("persisted {} of {} retained companies", inserted, top.len());
        }

        Ok(())
    }
}

/// Runs the complete crawl operation
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `config_hash` - SHA-256 hash of the config file content
///
/// # Returns
///
/// * `Ok(())` - Crawl completed and results were persisted
/// * `Err(TopcapError)` - Discovery, storage, or client construction failed
pub async fn run_crawl(config: Config, config_hash: &str) -> Result<(), TopcapError> {
    let mut coordinator = Coordinator::new(config, config_hash)?;
    coordinator.run().await
}
