use super::{ensure_unique_ids, RecordSource};
use crate::error::{CreditError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads records from a JSON array file.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Record>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            CreditError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", self.path.display(), e),
            ))
        })?;
        let records: Vec<Record> = serde_json::from_str(&content)?;
        ensure_unique_ids(&records)?;
        debug!(path = %self.path.display(), count = records.len(), "records loaded");
        Ok(records)
    }
}
