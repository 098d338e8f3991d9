//! Read-side of the persisted result set
//!
//! The crawl writes the bounded company set to SQLite; this module serves it
//! back out as JSON, using the same field names the upstream consumers of the
//! original endpoint expect (`companyName`, `stockName`, ...).

use crate::company::Company;
use crate::storage::Storage;
use crate::TopcapError;

/// Loads the persisted companies, largest market value first
pub fn load_companies(storage: &dyn Storage) -> Result<Vec<Company>, TopcapError> {
    Ok(storage.load_companies()?)
}

/// Serializes the persisted result set as pretty-printed JSON
///
/// # Arguments
///
/// * `storage` - The storage backend holding the persisted set
///
/// # Returns
///
/// * `Ok(String)` - JSON array of company objects
/// * `Err(TopcapError)` - Storage or serialization failure
pub fn export_companies_json(storage: &dyn Storage) -> Result<String, TopcapError> {
    let companies = load_companies(storage)?;
    Ok(serde_json::to_string_pretty(&companies)?)
}
