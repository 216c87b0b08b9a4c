//! Table definition files.
//!
//! A definition is a JSON document:
//!
//! ```json
//! {
//!   "columns": [
//!     { "key": "slot", "header": "Slot" },
//!     { "key": "have", "header": "Have", "format": "yes_no" }
//!   ],
//!   "options": { "expandable": true },
//!   "rows": [
//!     { "slot": "Head", "have": true, "details": { "source": "Raid" } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use datatable_lib::{Column, DataTable, Row, TableOptions, validate_columns};

use crate::error::AppError;
use crate::format::{self, CellFormat};

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDef {
    pub key: String,
    /// Defaults to the humanized key.
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default = "yes")]
    pub sortable: bool,
    #[serde(default = "yes")]
    pub filterable: bool,
    #[serde(default)]
    pub format: CellFormat,
}

impl ColumnDef {
    pub fn to_column(&self) -> Column {
        let header = self
            .header
            .clone()
            .unwrap_or_else(|| format::humanize(&self.key));
        let column = Column::new(self.key.clone(), header)
            .sortable(self.sortable)
            .filterable(self.filterable);
        match self.format.renderer() {
            Some(renderer) => column.renderer(renderer),
            None => column,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableDefinition {
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub options: TableOptions,
    #[serde(default)]
    pub rows: Vec<serde_json::Value>,
}

impl TableDefinition {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| AppError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Build the table. Rows must be JSON objects.
    pub fn into_table(self) -> Result<DataTable, AppError> {
        let columns: Vec<Column> = self.columns.iter().map(ColumnDef::to_column).collect();
        validate_columns(&columns)?;

        let rows = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(index, value)| match value {
                serde_json::Value::Object(map) => Ok(Row::from(map)),
                _ => Err(AppError::RowShape { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expand_field = self.options.expand_field.clone();
        log::info!(
            "loaded table: {} columns, {} rows",
            columns.len(),
            rows.len()
        );

        Ok(DataTable::new(columns)
            .with_options(self.options)
            .with_expansion(move |row| format::details(row.value(&expand_field)))
            .with_rows(rows))
    }
}
