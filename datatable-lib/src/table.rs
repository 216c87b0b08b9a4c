//! The tabular view engine.

use std::fmt;

use crate::column::{Column, ExpansionRenderer, validate_columns};
use crate::content::Content;
use crate::filter;
use crate::options::TableOptions;
use crate::row::Row;
use crate::sort;
use crate::state::ViewState;

/// Derive the displayed sequence as source indices.
///
/// Pure function of the rows and view state: filters apply (when
/// `filterable`) as a conjunction of every non-empty filter, then the
/// survivors are stable-sorted on the sort key, if any.
pub fn derive_display(rows: &[Row], state: &ViewState, filterable: bool) -> Vec<usize> {
    let mut indices: Vec<usize> = if filterable {
        let active: Vec<(&str, &str)> = state.active_filters().collect();
        (0..rows.len())
            .filter(|&i| filter::row_matches_all(&rows[i], active.iter().copied()))
            .collect()
    } else {
        (0..rows.len()).collect()
    };

    if let Some(key) = state.sort_key() {
        sort::sort_indices(&mut indices, rows, key, state.sort_direction());
    }
    indices
}

/// A sortable, filterable table with optional expandable rows.
///
/// `DataTable` owns the caller's rows, the column set, table options, and
/// the per-instance [`ViewState`]. Every state or data change rebuilds the
/// display mapping (display position → source row) synchronously, so
/// [`displayed`](Self::displayed) is always the derivation of the current
/// inputs.
///
/// Replacing the rows with [`set_rows`](Self::set_rows) keeps the view
/// state, including expanded positions.
///
/// # Example
///
/// ```
/// use datatable_lib::{Column, DataTable, Row};
///
/// let mut table = DataTable::new(vec![Column::new("n", "N")]).with_rows(vec![
///     Row::new().set("n", 3),
///     Row::new().set("n", 1),
///     Row::new().set("n", 2),
/// ]);
///
/// table.click_header("n");
/// let shown: Vec<String> = table.displayed().map(|r| r.text("n")).collect();
/// assert_eq!(shown, ["1", "2", "3"]);
/// ```
#[derive(Clone)]
pub struct DataTable {
    columns: Vec<Column>,
    options: TableOptions,
    rows: Vec<Row>,
    state: ViewState,
    expansion: Option<ExpansionRenderer>,
    /// Source row index for each display position.
    display: Vec<usize>,
}

impl DataTable {
    /// Create a table over `columns` with default options and no rows.
    pub fn new(columns: Vec<Column>) -> Self {
        if let Err(e) = validate_columns(&columns) {
            log::warn!("table created with invalid columns: {}", e);
        }
        Self {
            columns,
            options: TableOptions::default(),
            rows: Vec::new(),
            state: ViewState::new(),
            expansion: None,
            display: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self.rebuild();
        self
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Set the expanded-row renderer.
    pub fn with_expansion<F>(mut self, render: F) -> Self
    where
        F: Fn(&Row) -> Content + Send + Sync + 'static,
    {
        self.expansion = Some(std::sync::Arc::new(render));
        self
    }

    pub fn with_expansion_renderer(mut self, renderer: ExpansionRenderer) -> Self {
        self.expansion = Some(renderer);
        self
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Replace the options. View state is kept.
    pub fn set_options(&mut self, options: TableOptions) {
        self.options = options;
        self.rebuild();
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Replace the rows. View state is kept.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.rebuild();
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    // -------------------------------------------------------------------------
    // Capabilities
    // -------------------------------------------------------------------------

    /// Whether clicking `column`'s header cycles the sort.
    pub fn is_sortable(&self, column: &Column) -> bool {
        self.options.sortable && column.sortable
    }

    /// Whether `column` shows a filter box.
    pub fn is_filterable(&self, column: &Column) -> bool {
        self.options.filterable && column.filterable
    }

    /// Whether the leading toggle column is present.
    pub fn has_toggle_column(&self) -> bool {
        self.options.expandable
    }

    /// Whether `row` gets an expansion toggle: the table is expandable, a
    /// renderer is set, and the row's expand field is truthy.
    pub fn can_expand(&self, row: &Row) -> bool {
        self.options.expandable
            && self.expansion.is_some()
            && row.value(&self.options.expand_field).is_truthy()
    }

    /// Number of columns a full-width cell spans.
    pub fn span(&self) -> usize {
        self.columns.len() + usize::from(self.has_toggle_column())
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Handle a click on the header of column `key`.
    ///
    /// Cycles the sort (ascending, descending, off) on sortable columns.
    /// Returns `false` and leaves the state untouched otherwise.
    pub fn click_header(&mut self, key: &str) -> bool {
        let sortable = self.column(key).is_some_and(|c| self.is_sortable(c));
        if !sortable {
            log::trace!("header click on '{}' ignored", key);
            return false;
        }
        self.state.cycle_sort(key);
        self.rebuild();
        true
    }

    /// Store filter text for column `key`. Applied immediately.
    pub fn set_filter(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.state.set_filter(key, text);
        self.rebuild();
    }

    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
        self.rebuild();
    }

    /// Flip the expansion of display position `position`.
    ///
    /// Positions without a toggle control are left alone. Returns the new
    /// expanded state, or `None` if there was no control to click.
    pub fn toggle_row(&mut self, position: usize) -> Option<bool> {
        let row = self.row_at(position)?;
        if !self.can_expand(row) {
            return None;
        }
        Some(self.state.toggle_expanded(position))
    }

    /// Whether display position `position` shows its expansion panel.
    pub fn is_row_expanded(&self, position: usize) -> bool {
        self.state.is_expanded(position)
            && self.row_at(position).is_some_and(|row| self.can_expand(row))
    }

    // -------------------------------------------------------------------------
    // Derived display
    // -------------------------------------------------------------------------

    fn rebuild(&mut self) {
        self.display = derive_display(&self.rows, &self.state, self.options.filterable);
        log::trace!(
            "display rebuilt: {} of {} rows",
            self.display.len(),
            self.rows.len()
        );
    }

    /// Source row indices in display order.
    pub fn displayed_indices(&self) -> &[usize] {
        &self.display
    }

    /// Rows in display order.
    pub fn displayed(&self) -> impl Iterator<Item = &Row> + '_ {
        self.display.iter().map(|&i| &self.rows[i])
    }

    pub fn displayed_len(&self) -> usize {
        self.display.len()
    }

    /// Row at display position `position`.
    pub fn row_at(&self, position: usize) -> Option<&Row> {
        self.display.get(position).map(|&i| &self.rows[i])
    }

    /// Expansion content for display position `position`, if expanded.
    pub fn expansion_content(&self, position: usize) -> Option<Content> {
        if !self.is_row_expanded(position) {
            return None;
        }
        let row = self.row_at(position)?;
        self.expansion.as_ref().map(|render| render(row))
    }
}

impl fmt::Debug for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("options", &self.options)
            .field("rows", &self.rows.len())
            .field("state", &self.state)
            .field("expansion", &self.expansion.is_some())
            .field("display", &self.display)
            .finish()
    }
}
