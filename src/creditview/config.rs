use crate::certificate::DEFAULT_TIMESTAMP_FORMAT;
use crate::error::{CreditError, Result};
use crate::pipeline::{ViewOptions, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_DELAY_MS};
use chrono::format::{Item, StrftimeItems};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const MAX_SEARCH_DELAY_MS: u64 = 60 * 60 * 1000;

/// Configuration for creditview, stored in .creditview/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewConfig {
    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Quiet period before typed search text is applied, in milliseconds
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,

    /// strftime pattern for the certificate timestamp
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Where certificates are saved when no directory is given
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_search_delay_ms() -> u64 {
    DEFAULT_SEARCH_DELAY_MS as u64
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_delay_ms: default_search_delay_ms(),
            timestamp_format: default_timestamp_format(),
            output_dir: None,
        }
    }
}

impl ViewConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ViewConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CreditError::invalid(
                "page_size",
                "0",
                "a positive integer",
            ));
        }
        if self.search_delay_ms > MAX_SEARCH_DELAY_MS {
            return Err(CreditError::Config(format!(
                "search_delay_ms must be at most {}, got {}",
                MAX_SEARCH_DELAY_MS, self.search_delay_ms
            )));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(CreditError::Config(format!(
                "invalid timestamp_format: {:?}",
                self.timestamp_format
            )));
        }
        Ok(())
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            page_size: self.page_size,
            search_delay: TimeDelta::milliseconds(self.search_delay_ms as i64),
        }
    }
}
