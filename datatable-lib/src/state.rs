//! View state owned by one table instance.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header glyph for this direction, `↕` when unsorted.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Unsorted => "↕",
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Sort, filters, and expanded row positions of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Key and direction together, so a set key is never `Unsorted`.
    sort: Option<(String, SortDirection)>,
    filters: BTreeMap<String, String>,
    expanded: BTreeSet<usize>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Sort
    // -------------------------------------------------------------------------

    pub fn sort_key(&self) -> Option<&str> {
        self.sort.as_ref().map(|(key, _)| key.as_str())
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort
            .as_ref()
            .map(|(_, dir)| *dir)
            .unwrap_or(SortDirection::Unsorted)
    }

    /// Direction applied to `key`, `Unsorted` if another column is sorted.
    pub fn direction_for(&self, key: &str) -> SortDirection {
        match &self.sort {
            Some((k, dir)) if k == key => *dir,
            _ => SortDirection::Unsorted,
        }
    }

    /// Advance the sort cycle for `key`.
    ///
    /// A different (or no) key starts ascending, ascending flips to
    /// descending, and descending clears the sort.
    pub fn cycle_sort(&mut self, key: &str) {
        self.sort = match self.sort.take() {
            Some((k, SortDirection::Ascending)) if k == key => {
                Some((k, SortDirection::Descending))
            }
            Some((k, SortDirection::Descending)) if k == key => None,
            _ => Some((key.to_string(), SortDirection::Ascending)),
        };
        log::debug!(
            "sort cycled on '{}': {:?} {:?}",
            key,
            self.sort_key(),
            self.sort_direction()
        );
    }

    /// `Unsorted` clears the sort.
    pub fn set_sort(&mut self, key: impl Into<String>, direction: SortDirection) {
        self.sort = match direction {
            SortDirection::Unsorted => None,
            dir => Some((key.into(), dir)),
        };
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    // -------------------------------------------------------------------------
    // Filters
    // -------------------------------------------------------------------------

    /// Store the filter text for `key`. Empty text is kept but matches all.
    pub fn set_filter(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        let text = text.into();
        log::trace!("filter '{}' = {:?}", key, text);
        self.filters.insert(key, text);
    }

    /// Stored filter text for `key`, empty if none.
    pub fn filter(&self, key: &str) -> &str {
        self.filters.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// Filters that actually constrain the display.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    /// Flip expansion of a display position. Returns the new state.
    pub fn toggle_expanded(&mut self, position: usize) -> bool {
        let expanded = if self.expanded.remove(&position) {
            false
        } else {
            self.expanded.insert(position);
            true
        };
        log::debug!("row {} expanded: {}", position, expanded);
        expanded
    }

    pub fn is_expanded(&self, position: usize) -> bool {
        self.expanded.contains(&position)
    }

    pub fn expanded(&self) -> &BTreeSet<usize> {
        &self.expanded
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}
