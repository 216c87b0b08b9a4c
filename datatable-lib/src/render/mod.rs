//! Rendering.
//!
//! [`DataTable::render`] produces a [`RenderedTable`]: the visual structure
//! of the table (header cells with sort affordance and filter box, body
//! rows with optional toggle and expansion panel, empty placeholder, and
//! footer) independent of any output device. [`layout`] turns that into
//! styled text lines for terminals.

pub mod layout;
pub mod text;

pub use layout::{HitRegion, HitTarget, LayoutConfig, LineRole, StyledLine, TextLayout};

use crate::content::Content;
use crate::state::SortDirection;
use crate::table::DataTable;

/// Placeholder shown when no row survives the filters.
pub const NO_DATA: &str = "No data found";
pub const EXPAND_LABEL: &str = "Expand row";
pub const COLLAPSE_LABEL: &str = "Collapse row";

/// Presentation-only flags carried through to the output device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presentation {
    pub striped: bool,
    pub hoverable: bool,
    pub compact: bool,
}

/// Filter input shown under a header label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBox {
    pub placeholder: String,
    pub value: String,
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    /// Sort affordance; `None` when the column cannot be sorted.
    pub sort: Option<SortDirection>,
    pub filter: Option<FilterBox>,
}

impl HeaderCell {
    /// Sort glyph, if the column is sortable.
    pub fn indicator(&self) -> Option<&'static str> {
        self.sort.map(SortDirection::indicator)
    }
}

/// Expansion toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub expanded: bool,
}

impl Toggle {
    pub fn glyph(self) -> &'static str {
        if self.expanded { "▼" } else { "▶" }
    }

    pub fn label(self) -> &'static str {
        if self.expanded {
            COLLAPSE_LABEL
        } else {
            EXPAND_LABEL
        }
    }
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Position in the displayed sequence.
    pub position: usize,
    /// Toggle control; `None` for rows that cannot expand.
    pub toggle: Option<Toggle>,
    pub cells: Vec<Content>,
    /// Expansion panel, present only while expanded.
    pub expansion: Option<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Nothing to show: one placeholder cell spanning `span` columns.
    Empty { message: &'static str, span: usize },
    Rows(Vec<RenderedRow>),
}

impl Body {
    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            Body::Empty { .. } => &[],
            Body::Rows(rows) => rows,
        }
    }
}

/// Visual structure of a table at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub presentation: Presentation,
    /// `None` when headerless.
    pub header: Option<Vec<HeaderCell>>,
    /// Whether a leading toggle column is present.
    pub toggle_column: bool,
    pub body: Body,
    /// Summary caption; `None` when footerless or nothing is displayed.
    pub footer: Option<String>,
    /// Number of data columns.
    pub columns: usize,
}

impl RenderedTable {
    /// Total columns including the toggle column.
    pub fn span(&self) -> usize {
        self.columns + usize::from(self.toggle_column)
    }
}

/// Footer caption for `shown` of `total` rows.
pub fn summary(shown: usize, total: usize) -> String {
    format!("Showing {} of {} rows", shown, total)
}

impl DataTable {
    /// Render the current display.
    pub fn render(&self) -> RenderedTable {
        let options = self.options();
        let state = self.state();

        let header = (!options.headerless).then(|| {
            self.columns()
                .iter()
                .map(|column| HeaderCell {
                    key: column.key.clone(),
                    label: column.header.clone(),
                    sort: self
                        .is_sortable(column)
                        .then(|| state.direction_for(&column.key)),
                    filter: self.is_filterable(column).then(|| FilterBox {
                        placeholder: format!("Filter {}...", column.header),
                        value: state.filter(&column.key).to_string(),
                    }),
                })
                .collect()
        });

        let body = if self.displayed_len() == 0 {
            Body::Empty {
                message: NO_DATA,
                span: self.span(),
            }
        } else {
            Body::Rows(
                self.displayed()
                    .enumerate()
                    .map(|(position, row)| {
                        let toggle = self.can_expand(row).then(|| Toggle {
                            expanded: state.is_expanded(position),
                        });
                        RenderedRow {
                            position,
                            toggle,
                            cells: self.columns().iter().map(|c| c.render_cell(row)).collect(),
                            expansion: self.expansion_content(position),
                        }
                    })
                    .collect(),
            )
        };

        let footer = (!options.footerless && self.displayed_len() > 0)
            .then(|| summary(self.displayed_len(), self.rows().len()));

        RenderedTable {
            presentation: Presentation {
                striped: options.striped,
                hoverable: options.hoverable,
                compact: options.compact,
            },
            header,
            toggle_column: self.has_toggle_column(),
            body,
            footer,
            columns: self.columns().len(),
        }
    }

    /// Render and lay out as styled text.
    pub fn layout(&self, config: &LayoutConfig) -> TextLayout {
        layout::layout(&self.render(), config)
    }

    /// Render as plain text.
    pub fn to_text(&self, config: &LayoutConfig) -> String {
        self.layout(config).to_plain()
    }
}
