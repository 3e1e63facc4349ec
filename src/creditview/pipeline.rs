//! # View Pipeline
//!
//! Derives the visible page of records from a fixed source collection and a
//! [`QueryState`]:
//!
//! ```text
//! source ──► type filter ──► search filter ──► stable sort ──► filtered set ──► page slice
//! ```
//!
//! ## Recompute vs. slicing
//!
//! Filtering and sorting happen in one place, `recompute`, which
//! always starts over from the full source collection. Every setter that changes
//! a filter or the sort calls it exactly once. Changing the page never
//! re-filters: it only moves the window over the already derived set.
//!
//! ## Search debounce
//!
//! [`ViewPipeline::set_search_text`] does not touch the view. The text is parked in
//! a [`Debouncer`] and only applied by [`ViewPipeline::poll`] once input has been
//! quiet for the configured delay (500 ms by default). A newer input replaces the
//! parked one, so a burst of keystrokes costs a single recompute.
//!
//! The pipeline is single-threaded and owned by one caller; it holds no locks.

use crate::clock::{Clock, SystemClock};
use crate::debounce::Debouncer;
use crate::error::{CreditError, Result};
use crate::model::Record;
use crate::query::{QueryState, SortDirection, SortKey, TypeFilter};
use crate::source::ensure_unique_ids;
use chrono::TimeDelta;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_PAGE_SIZE: usize = 9;
pub const DEFAULT_SEARCH_DELAY_MS: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub page_size: usize,
    pub search_delay: TimeDelta,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_delay: TimeDelta::milliseconds(DEFAULT_SEARCH_DELAY_MS),
        }
    }
}

/// A source record plus the lowercase keys filtering and sorting compare on.
#[derive(Debug)]
struct Entry {
    record: Record,
    /// Lowercased, accents kept. Used for search and as the sort tiebreak.
    name_key: String,
    /// Lowercased with accents stripped. Primary name sort key.
    name_fold: String,
    year_text: String,
}

impl Entry {
    fn new(record: Record) -> Self {
        Self {
            name_key: record.name.to_lowercase(),
            name_fold: fold_name(&record.name),
            year_text: record.year.to_string(),
            record,
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.name_key.contains(needle) || self.year_text.contains(needle)
    }
}

/// Read-only snapshot of the current page, for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub records: Vec<Record>,
    pub page_number: usize,
    pub last_page: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub query: QueryState,
}

pub struct ViewPipeline<C: Clock = SystemClock> {
    entries: Vec<Entry>,
    state: QueryState,
    search: Debouncer<String>,
    /// Indexes into `entries`, filtered and sorted.
    filtered: Vec<usize>,
    clock: C,
    revision: u64,
}

impl ViewPipeline<SystemClock> {
    /// A pipeline with the default page size and debounce on the wall clock.
    pub fn with_defaults(records: Vec<Record>) -> Result<Self> {
        Self::new(records, ViewOptions::default(), SystemClock)
    }
}

impl<C: Clock> ViewPipeline<C> {
    pub fn new(records: Vec<Record>, options: ViewOptions, clock: C) -> Result<Self> {
        if options.page_size == 0 {
            return Err(CreditError::invalid("page size", "0", "a positive integer"));
        }

        ensure_unique_ids(&records)?;

        let mut pipeline = Self {
            entries: records.into_iter().map(Entry::new).collect(),
            state: QueryState::new(options.page_size),
            search: Debouncer::new(options.search_delay),
            filtered: Vec::new(),
            clock,
            revision: 0,
        };
        pipeline.recompute();
        Ok(pipeline)
    }

    pub fn query(&self) -> &QueryState {
        &self.state
    }

    /// Search text typed but not yet applied.
    pub fn pending_search(&self) -> Option<&str> {
        self.search.pending().map(String::as_str)
    }

    /// Number of recomputes so far. Hosts redraw when it changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        self.state.type_filter = filter;
        self.state.page_number = 1;
        self.recompute();
    }

    /// Parks `raw` until input has been quiet for the debounce delay.
    /// Call [`poll`](Self::poll) from the event loop to apply it.
    pub fn set_search_text(&mut self, raw: impl Into<String>) {
        let now = self.clock.now();
        if self.search.schedule(raw.into(), now) {
            debug!("pending search replaced");
        }
    }

    /// Applies the pending search if its delay has elapsed.
    ///
    /// Returns `true` if the view was recomputed.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        match self.search.take_due(now) {
            Some(text) => {
                self.apply_search(text);
                true
            }
            None => false,
        }
    }

    /// Applies the pending search immediately, ignoring the delay.
    pub fn flush_search(&mut self) -> bool {
        match self.search.flush() {
            Some(text) => {
                self.apply_search(text);
                true
            }
            None => false,
        }
    }

    fn apply_search(&mut self, text: String) {
        self.state.search_text = text;
        self.state.page_number = 1;
        self.recompute();
    }

    /// Selects a sort key. Selecting the current key again flips the direction;
    /// selecting a different key keeps the direction. The page is kept.
    pub fn set_sort(&mut self, key: SortKey) {
        if key == self.state.sort_key {
            self.state.sort_direction = self.state.sort_direction.flipped();
        } else {
            self.state.sort_key = key;
        }
        self.recompute();
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        if direction != self.state.sort_direction {
            self.state.sort_direction = direction;
            self.recompute();
        }
    }

    /// Moves to page `n`, clamped to `1..=last_page`.
    pub fn set_page(&mut self, n: usize) {
        self.state.page_number = n.clamp(1, self.last_page());
    }

    pub fn next_page(&mut self) {
        self.set_page(self.state.page_number + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.state.page_number.saturating_sub(1));
    }

    pub fn has_next_page(&self) -> bool {
        self.state.page_number < self.last_page()
    }

    pub fn has_previous_page(&self) -> bool {
        self.state.page_number > 1
    }

    pub fn page_number(&self) -> usize {
        self.state.page_number
    }

    /// `max(1, ceil(filtered / page_size))`: an empty result still has one page.
    pub fn last_page(&self) -> usize {
        self.filtered.len().div_ceil(self.state.page_size).max(1)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// The whole filtered and sorted set.
    pub fn filtered(&self) -> impl Iterator<Item = &Record> + '_ {
        self.filtered.iter().map(|&i| &self.entries[i].record)
    }

    /// Records on the current page, at most `page_size` of them.
    pub fn visible_page(&self) -> Vec<&Record> {
        let start = (self.state.page_number - 1) * self.state.page_size;
        self.filtered
            .iter()
            .skip(start)
            .take(self.state.page_size)
            .map(|&i| &self.entries[i].record)
            .collect()
    }

    pub fn page_view(&self) -> PageView {
        PageView {
            records: self.visible_page().into_iter().cloned().collect(),
            page_number: self.state.page_number,
            last_page: self.last_page(),
            total: self.filtered.len(),
            has_previous: self.has_previous_page(),
            has_next: self.has_next_page(),
            query: self.state.clone(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Record> {
        self.entries
            .iter()
            .map(|e| &e.record)
            .find(|r| r.id == id)
    }

    /// Rebuilds the filtered set from the full source collection.
    fn recompute(&mut self) {
        let type_filter = self.state.type_filter;
        let needle = self.state.search_text.trim().to_lowercase();

        let mut filtered: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| type_filter.matches(e.record.status))
            .filter(|(_, e)| needle.is_empty() || e.matches_search(&needle))
            .map(|(i, _)| i)
            .collect();

        let key = self.state.sort_key;
        let direction = self.state.sort_direction;
        let entries = &self.entries;
        // `sort_by` is stable: ties keep source order in both directions.
        filtered.sort_by(|&a, &b| {
            let ord = compare(&entries[a], &entries[b], key);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });

        self.filtered = filtered;
        self.revision += 1;
        debug!(
            revision = self.revision,
            filtered = self.filtered.len(),
            type_filter = %type_filter,
            sort = %key,
            direction = %direction,
            "view recomputed"
        );
    }
}

/// Lowercase, compatibility-decompose, drop combining marks: `Éco` sorts as `eco`.
fn fold_name(name: &str) -> String {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn compare(a: &Entry, b: &Entry, key: SortKey) -> Ordering {
    match key {
        SortKey::None => Ordering::Equal,
        SortKey::Name => a
            .name_fold
            .cmp(&b.name_fold)
            .then_with(|| a.name_key.cmp(&b.name_key)),
        SortKey::Year => a.record.year.cmp(&b.record.year),
    }
}
