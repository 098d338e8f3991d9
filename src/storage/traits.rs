//! Storage trait definition
//!
//! The trait exists so the aggregation and reporting logic can be exercised
//! against stub storage in tests, without a live database file.

use crate::company::Company;
use crate::storage::RunRecord;
use thiserror::Error;

/// Storage-specific errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Run {0} not found")]
    RunNotFound(i64),
}

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Persistence boundary for crawl runs and the company result set
pub trait Storage {
    // ===== Run Management =====

    /// Records the start of a crawl run, returning its id
    fn create_run(&mut self, config_hash: &str) -> StorageResult<i64>;

    /// Marks a run completed and stamps its finish time
    fn complete_run(&mut self, run_id: i64) -> StorageResult<()>;

    /// Marks a run failed and stamps its finish time
    fn fail_run(&mut self, run_id: i64) -> StorageResult<()>;

    /// Returns the most recent run, if any
    fn latest_run(&self) -> StorageResult<Option<RunRecord>>;

    // ===== Company Result Set =====

    /// Removes the previously persisted result set
    fn clear_companies(&mut self) -> StorageResult<()>;

    /// Inserts a single company, attributed to the given run
    fn insert_company(&mut self, company: &Company, run_id: i64) -> StorageResult<()>;

    /// Loads the persisted result set, largest market value first
    fn load_companies(&self) -> StorageResult<Vec<Company>>;

    /// Number of persisted companies
    fn count_companies(&self) -> StorageResult<i64>;
}
