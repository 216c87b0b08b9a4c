//! Sortable, filterable data tables with expandable rows.
//!
//! The crate is a presentation engine: the caller supplies rows and column
//! descriptors, the engine owns per-instance view state (sort, filters,
//! expanded rows) and derives the displayed sequence from it.
//!
//! ```
//! use datatable_lib::{Column, DataTable, LayoutConfig, Row, TableOptions};
//!
//! let mut table = DataTable::new(vec![
//!     Column::new("name", "Name"),
//!     Column::new("have", "Have"),
//! ])
//! .with_options(TableOptions::new().footerless(false))
//! .with_rows(vec![
//!     Row::new().set("name", "A").set("have", true),
//!     Row::new().set("name", "B").set("have", false),
//!     Row::new().set("name", "C").set("have", true),
//! ]);
//!
//! table.set_filter("have", "y");
//! let names: Vec<String> = table.displayed().map(|r| r.text("name")).collect();
//! assert_eq!(names, ["A", "C"]);
//!
//! let text = table.to_text(&LayoutConfig::default());
//! assert!(text.ends_with("Showing 2 of 3 rows"));
//! ```

pub mod column;
pub mod content;
pub mod error;
pub mod filter;
pub mod options;
pub mod render;
pub mod row;
pub mod sort;
pub mod state;
pub mod table;
pub mod value;

pub use column::{CellRenderer, Column, ExpansionRenderer, validate_columns};
pub use content::{Content, Line, Span, Tone};
pub use error::{Result, TableError};
pub use options::TableOptions;
pub use render::{
    Body, HeaderCell, HitRegion, HitTarget, LayoutConfig, LineRole, RenderedRow, RenderedTable,
    StyledLine, TextLayout,
};
pub use row::Row;
pub use state::{SortDirection, ViewState};
pub use table::{DataTable, derive_display};
pub use value::Value;
