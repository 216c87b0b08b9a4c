//! Table-wide configuration flags.

use serde::Deserialize;
use serde::Serialize;

/// Field consulted by default to decide whether a row can expand.
pub const DEFAULT_EXPAND_FIELD: &str = "details";

/// Table-wide flags.
///
/// Every flag has a default, so a partial definition deserializes cleanly:
///
/// ```
/// use datatable_lib::TableOptions;
///
/// let options: TableOptions = serde_json::from_str(r#"{"expandable": true}"#).unwrap();
/// assert!(options.expandable);
/// assert!(options.sortable);
/// assert_eq!(options.expand_field, "details");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TableOptions {
    /// Global sort toggle.
    pub sortable: bool,
    /// Global filter toggle.
    pub filterable: bool,
    /// Adds a leading toggle column and per-row expansion.
    pub expandable: bool,
    /// Row field whose presence gates the expansion toggle.
    pub expand_field: String,
    pub striped: bool,
    pub hoverable: bool,
    pub compact: bool,
    /// Suppress the header row.
    pub headerless: bool,
    /// Suppress the summary footer.
    pub footerless: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            sortable: true,
            filterable: true,
            expandable: false,
            expand_field: DEFAULT_EXPAND_FIELD.to_string(),
            striped: true,
            hoverable: true,
            compact: false,
            headerless: false,
            footerless: false,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sortable(mut self, on: bool) -> Self {
        self.sortable = on;
        self
    }

    pub fn filterable(mut self, on: bool) -> Self {
        self.filterable = on;
        self
    }

    pub fn expandable(mut self, on: bool) -> Self {
        self.expandable = on;
        self
    }

    pub fn expand_field(mut self, field: impl Into<String>) -> Self {
        self.expand_field = field.into();
        self
    }

    pub fn striped(mut self, on: bool) -> Self {
        self.striped = on;
        self
    }

    pub fn hoverable(mut self, on: bool) -> Self {
        self.hoverable = on;
        self
    }

    pub fn compact(mut self, on: bool) -> Self {
        self.compact = on;
        self
    }

    pub fn headerless(mut self, on: bool) -> Self {
        self.headerless = on;
        self
    }

    pub fn footerless(mut self, on: bool) -> Self {
        self.footerless = on;
        self
    }
}
