//! Domain types for crawled companies
//!
//! A [`Company`] is created by the extractor and immutable afterwards: it is
//! either retained by the top-K aggregator or discarded. Failed pages never
//! produce a `Company` at all; they surface as the `Err` side of a
//! [`PageOutcome`], so the "failed records are never persisted" invariant is
//! enforced by the type system rather than by a status check.

use crate::PageError;
use serde::Serialize;
use url::Url;

/// A successfully parsed company detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Full company name
    pub company_name: String,

    /// Ticker / stock short code
    pub stock_name: String,

    /// Market value in whole currency units; the top-K selection key
    pub market_value: i64,

    /// Free-form percentage/trend text, extracted verbatim
    pub oscillation: String,
}

/// The single result a fetch-parse worker emits for one URL
#[derive(Debug, Clone)]
pub struct PageOutcome {
    /// The detail page this outcome belongs to
    pub url: Url,

    /// Parsed record, or the reason the page was discarded
    pub result: Result<Company, PageError>,
}

impl PageOutcome {
    pub fn ok(url: Url, company: Company) -> Self {
        Self {
            url,
            result: Ok(company),
        }
    }

    pub fn failed(url: Url, error: PageError) -> Self {
        Self {
            url,
            result: Err(error),
        }
    }
}
