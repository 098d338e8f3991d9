//! Bounded top-K aggregation over the merged result stream
//!
//! [`TopK`] owns the fixed-capacity collection; [`TopK::offer`] is the only
//! mutation entry point, so the scan-for-minimum and the replacement can never
//! interleave with another update. Serialization of updates comes from the
//! pipeline shape itself: every outcome flows through the single-consumer
//! merged channel and is applied by one task, one at a time.
//!
//! The linear minimum scan is O(K) per update, which is fine for the small K
//! this crawler runs with. A min-heap would bring that to O(log K) behind the
//! same `offer` contract if K ever grows.

use crate::company::{Company, PageOutcome};
use tokio::sync::mpsc;

/// A bounded collection holding the K largest-value companies seen so far
#[derive(Debug)]
pub struct TopK {
    capacity: usize,
    companies: Vec<Company>,
}

impl TopK {
    /// Creates an empty collection with room for `capacity` companies
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            companies: Vec::with_capacity(capacity),
        }
    }

    /// Offers a company to the collection; returns whether it was retained
    ///
    /// Below capacity the company is inserted unconditionally. At capacity it
    /// replaces the current minimum-value member iff its value is strictly
    /// larger; otherwise it is discarded. When several members share the
    /// minimum value, the first one in collection order is the eviction
    /// candidate — callers must not rely on which one that is.
    pub fn offer(&mut self, company: Company) -> bool {
        if self.companies.len() < self.capacity {
            self.companies.push(company);
            return true;
        }

        match self.min_index() {
            Some(min_index) if company.market_value > self.companies[min_index].market_value => {
                self.companies[min_index] = company;
                true
            }
            _ => false,
        }
    }

    /// Index of the current minimum-value member, `None` when empty
    fn min_index(&self) -> Option<usize> {
        let mut min_index = 0;
        for (i, company) in self.companies.iter().enumerate() {
            if company.market_value < self.companies[min_index].market_value {
                min_index = i;
            }
        }
        if self.companies.is_empty() {
            None
        } else {
            Some(min_index)
        }
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Consumes the collection, yielding the retained companies
    pub fn into_companies(self) -> Vec<Company> {
        self.companies
    }
}

/// Drains the merged stream into a [`TopK`] and returns the final set
///
/// Failed outcomes are discarded here — this is the single absorption point
/// for per-page errors; each discard has already been reported by the worker
/// that produced it. Consumption ends when the stream closes, i.e. when every
/// worker has reported.
pub async fn collect_top(mut results: mpsc::Receiver<PageOutcome>, k: usize) -> Vec<Company> {
    let mut top = TopK::new(k);
    let mut seen = 0usize;
    let mut discarded = 0usize;

    while let Some(outcome) = results.recv().await {
        seen += 1;
        match outcome.result {
            Ok(company) => {
                top.offer(company);
            }
            Err(_) => {
                discarded += 1;
            }
        }
    }

    tracing::info!(
        "aggregation complete: {} pages seen, {} discarded, {} retained",
        seen,
        discarded,
        top.len()
    );

    top.into_companies()
}
