//! # Record Sources
//!
//! The view engine works on a fixed, already validated collection. A
//! [`RecordSource`] is whatever supplies it:
//!
//! - [`fs::JsonFileSource`]: a JSON array of records on disk
//! - [`memory::InMemorySource`]: records held in memory, for tests and embedding
//!
//! Sources are read once; nothing here writes records back.

use crate::error::{CreditError, Result};
use crate::model::Record;
use std::collections::HashSet;

pub mod fs;
pub mod memory;

pub trait RecordSource {
    /// Loads the full collection, in source order.
    fn load(&self) -> Result<Vec<Record>>;
}

/// Rejects a collection in which an id appears twice.
pub fn ensure_unique_ids(records: &[Record]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(CreditError::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}
