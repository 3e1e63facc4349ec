use crate::error::{CreditError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a credit. Parsed case-insensitively, always rendered lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Status {
    Active,
    Retired,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Retired => "retired",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CreditError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "retired" => Ok(Status::Retired),
            _ => Err(CreditError::invalid("status", s, "active, retired")),
        }
    }
}

impl TryFrom<String> for Status {
    type Error = CreditError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// One carbon-credit entry. Records are read-only once loaded.
///
/// The field aliases accept the dashboard export format
/// (`unic_id`, `project_name`, `vintage`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(alias = "unic_id")]
    pub id: String,
    #[serde(alias = "project_name")]
    pub name: String,
    /// Vintage year.
    #[serde(alias = "vintage")]
    pub year: i32,
    pub status: Status,
}

impl Record {
    pub fn new(id: impl Into<String>, name: impl Into<String>, year: i32, status: Status) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            year,
            status,
        }
    }
}
