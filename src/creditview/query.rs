//! Query parameters for the view pipeline.
//!
//! Every enum here parses from the strings a presentation layer hands over
//! (`"all"`, `"name"`, `"desc"`...). Unknown values are rejected with
//! [`CreditError::InvalidInput`], never coerced to a default.

use crate::error::{CreditError, Result};
use crate::model::Status;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Active,
    Retired,
}

impl TypeFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Active => status == Status::Active,
            TypeFilter::Retired => status == Status::Retired,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Active => "active",
            TypeFilter::Retired => "retired",
        }
    }
}

impl FromStr for TypeFilter {
    type Err = CreditError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "active" => Ok(TypeFilter::Active),
            "retired" => Ok(TypeFilter::Retired),
            _ => Err(CreditError::invalid("type filter", s, "all, active, retired")),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Source order.
    #[default]
    None,
    Name,
    Year,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Name => "name",
            SortKey::Year => "year",
        }
    }
}

impl FromStr for SortKey {
    type Err = CreditError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(SortKey::None),
            "name" | "project_name" => Ok(SortKey::Name),
            "year" | "vintage" => Ok(SortKey::Year),
            _ => Err(CreditError::invalid("sort key", s, "none, name, year")),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CreditError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(CreditError::invalid(
                "sort direction",
                s,
                "ascending, descending",
            )),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The query a [`crate::pipeline::ViewPipeline`] derives its view from.
///
/// Only the pipeline mutates it; everyone else gets a read-only reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub(crate) type_filter: TypeFilter,
    pub(crate) search_text: String,
    pub(crate) sort_key: SortKey,
    pub(crate) sort_direction: SortDirection,
    pub(crate) page_size: usize,
    pub(crate) page_number: usize,
}

impl QueryState {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            type_filter: TypeFilter::All,
            search_text: String::new(),
            sort_key: SortKey::None,
            sort_direction: SortDirection::Ascending,
            page_size,
            page_number: 1,
        }
    }

    pub fn type_filter(&self) -> TypeFilter {
        self.type_filter
    }

    /// The search text currently applied (after debounce).
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }
}
