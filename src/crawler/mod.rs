//! Crawler module for fetching and ranking company detail pages
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with error classification
//! - Positional field extraction from detail pages
//! - Parallel fan-out of one worker per URL, fanned back into a single stream
//! - Bounded top-K aggregation over that stream
//! - Overall crawl coordination

mod aggregator;
mod coordinator;
mod extractor;
mod fetcher;
mod pipeline;

pub use aggregator::{collect_top, TopK};
pub use coordinator::{run_crawl, Coordinator};
pub use extractor::extract;
pub use fetcher::{build_http_client, fetch_page};
pub use pipeline::spawn_workers;
