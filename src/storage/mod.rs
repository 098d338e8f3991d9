//! Storage module for persisting crawl results
//!
//! This module handles all database operations:
//! - SQLite database initialization and schema management
//! - Crawl run tracking (provenance: when, with which config)
//! - Persisting and loading the bounded company result set

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStorage;
pub use traits::{Storage, StorageError, StorageResult};

use crate::company::Company;
use crate::TopcapError;
use std::path::Path;

/// Initializes or opens a storage database
///
/// The handle is opened once at process start and passed explicitly to
/// whatever needs it; there is no process-wide connection.
pub fn open_storage(path: &Path) -> Result<SqliteStorage, TopcapError> {
    SqliteStorage::new(path)
}

/// Persists the final company set as a batch, tolerating per-record failures
///
/// Each record is inserted individually; a failed insert is logged and does
/// not abort the rest of the batch. Returns the number of records actually
/// inserted.
pub fn persist_companies(storage: &mut dyn Storage, companies: &[Company], run_id: i64) -> usize {
    let mut inserted = 0;

    for company in companies {
        match storage.insert_company(company, run_id) {
            Ok(()) => {
                tracing::info!("stored company {}", company.company_name);
                inserted += 1;
            }
            Err(e) => {
                tracing::warn!("failed to store company {}: {}", company.company_name, e);
            }
        }
    }

    inserted
}

/// Represents a crawl run
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub id: i64,
    pub started_at: String,
    pub finished_at: Option<String>,
    pub config_hash: String,
    pub status: RunStatus,
}

/// Status of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Running,
    Completed,
    Failed,
}

impl RunStatus {
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "running" => Some(Self::Running),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}
