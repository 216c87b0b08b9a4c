//! Column descriptors.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::content::Content;
use crate::error::{Result, TableError};
use crate::row::Row;
use crate::value::Value;

/// Custom cell renderer: `(field value, whole row) -> content`.
pub type CellRenderer = Arc<dyn Fn(&Value, &Row) -> Content + Send + Sync>;

/// Custom expansion renderer: `row -> content`.
pub type ExpansionRenderer = Arc<dyn Fn(&Row) -> Content + Send + Sync>;

/// A table column definition.
///
/// Columns are sortable and filterable unless turned off here or globally
/// through [`TableOptions`](crate::TableOptions).
///
/// # Example
///
/// ```
/// use datatable_lib::{Column, Content, Span, Tone, Value};
///
/// let columns = vec![
///     Column::new("slot", "Slot"),
///     Column::new("item", "Item").filterable(false),
///     Column::new("have", "Have").render(|value, _row| {
///         match value {
///             Value::Bool(true) => Content::styled(Span::new("Yes").tone(Tone::Success)),
///             _ => Content::styled(Span::new("No").tone(Tone::Danger)),
///         }
///     }),
/// ];
/// assert!(datatable_lib::validate_columns(&columns).is_ok());
/// ```
#[derive(Clone)]
pub struct Column {
    /// Field read off each row.
    pub key: String,
    /// Header label.
    pub header: String,
    pub sortable: bool,
    pub filterable: bool,
    renderer: Option<CellRenderer>,
}

impl Column {
    /// Create a new column with the given key and header.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: true,
            filterable: true,
            renderer: None,
        }
    }

    /// Set whether clicking this column's header cycles the sort.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set whether this column shows a filter box.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Set a custom cell renderer.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value, &Row) -> Content + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(render));
        self
    }

    /// Set a shared cell renderer.
    pub fn renderer(mut self, renderer: CellRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Render this column's cell for `row`.
    ///
    /// Without a renderer the field's default text form is used; missing and
    /// null fields render as empty content.
    pub fn render_cell(&self, row: &Row) -> Content {
        let value = row.value(&self.key);
        match &self.renderer {
            Some(render) => render(value, row),
            None => Content::text(value.to_string()),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

/// Check that a column set is non-empty and its keys are unique.
pub fn validate_columns(columns: &[Column]) -> Result<()> {
    if columns.is_empty() {
        return Err(TableError::EmptyColumns);
    }
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.key.as_str()) {
            return Err(TableError::DuplicateColumn(column.key.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let column = Column::new("name", "Name");
        assert!(column.sortable);
        assert!(column.filterable);
        assert!(!column.has_renderer());
    }

    #[test]
    fn test_render_cell_default_text() {
        let column = Column::new("n", "N");
        let row = Row::new().set("n", 4.0);
        assert_eq!(column.render_cell(&row).plain(), "4");
        assert!(column.render_cell(&Row::new()).is_empty());
    }

    #[test]
    fn test_render_cell_custom() {
        let column = Column::new("n", "N").render(|v, row| {
            Content::text(format!("{} of {}", v, row.text("total")))
        });
        let row = Row::new().set("n", 1).set("total", 5);
        assert_eq!(column.render_cell(&row).plain(), "1 of 5");
    }

    #[test]
    fn test_validate_columns() {
        assert_eq!(validate_columns(&[]), Err(TableError::EmptyColumns));
        let dup = [Column::new("a", "A"), Column::new("a", "Again")];
        assert_eq!(
            validate_columns(&dup),
            Err(TableError::DuplicateColumn("a".into()))
        );
        assert!(validate_columns(&[Column::new("a", "A"), Column::new("b", "B")]).is_ok());
    }
}
