//! Text layout for terminals.
//!
//! Turns a [`RenderedTable`] into box-drawn, styled lines plus the hit
//! regions a front-end needs to route clicks back to header, filter,
//! toggle, or row targets.

use crate::content::{Content, Line, Span, Tone};
use crate::render::text::{display_width, fit_line};
use crate::render::{Body, HeaderCell, RenderedRow, RenderedTable};
use crate::state::SortDirection;

/// Layout limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Total width available, borders included. `None` is unbounded.
    pub max_width: Option<usize>,
    /// Widest a single data column may grow.
    pub max_column_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: None,
            max_column_width: 40,
        }
    }
}

impl LayoutConfig {
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = width.max(1);
        self
    }
}

/// What a laid-out line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Border,
    Header,
    Filter,
    /// Body line of display position `position`. `stripe` marks alternate rows.
    Row { position: usize, stripe: bool },
    Expansion { position: usize },
    Empty,
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub role: LineRole,
    pub line: Line,
}

/// Click target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// Sortable header label of column `key`.
    Header(String),
    /// Filter box of column `key`.
    Filter(String),
    /// Expansion toggle of a display position.
    Toggle(usize),
    /// Anywhere on a body row.
    Row(usize),
}

/// Rectangle (one line high) that routes clicks to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub y: usize,
    pub x: usize,
    pub width: usize,
    pub target: HitTarget,
}

impl HitRegion {
    fn contains(&self, x: usize, y: usize) -> bool {
        y == self.y && x >= self.x && x < self.x + self.width
    }
}

/// Laid-out table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLayout {
    pub lines: Vec<StyledLine>,
    pub hits: Vec<HitRegion>,
    /// Width of the boxed table in columns.
    pub width: usize,
}

impl TextLayout {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Most specific target at `(x, y)`.
    pub fn hit_test(&self, x: usize, y: usize) -> Option<&HitTarget> {
        self.hits
            .iter()
            .rev()
            .find(|region| region.contains(x, y))
            .map(|region| &region.target)
    }

    /// First line index belonging to display position `position`.
    pub fn row_line(&self, position: usize) -> Option<usize> {
        self.lines.iter().position(
            |l| matches!(l.role, LineRole::Row { position: p, .. } if p == position),
        )
    }

    pub fn to_plain(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.line.plain())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drop roles and hit regions, e.g. to nest a table in other content.
    pub fn into_content(self) -> Content {
        Content {
            lines: self.lines.into_iter().map(|l| l.line).collect(),
        }
    }
}

// =============================================================================
// Geometry
// =============================================================================

const TOGGLE_WIDTH: usize = 1;
const MIN_COLUMN_WIDTH: usize = 1;

struct Grid {
    pad: usize,
    /// Content width of each segment, toggle segment first when present.
    widths: Vec<usize>,
    /// Content x offset of each segment.
    starts: Vec<usize>,
    toggle: bool,
}

impl Grid {
    fn new(pad: usize, widths: Vec<usize>, toggle: bool) -> Self {
        let mut starts = Vec::with_capacity(widths.len());
        let mut x = 1;
        for w in &widths {
            starts.push(x + pad);
            x += w + 2 * pad + 1;
        }
        Self {
            pad,
            widths,
            starts,
            toggle,
        }
    }

    fn total_width(widths: &[usize], pad: usize) -> usize {
        widths.iter().map(|w| w + 2 * pad).sum::<usize>() + widths.len() + 1
    }

    fn width(&self) -> usize {
        Self::total_width(&self.widths, self.pad)
    }

    /// Width available to a full-span cell.
    fn inner_width(&self) -> usize {
        self.width().saturating_sub(2 + 2 * self.pad)
    }

    /// Index of data column `i` among segments.
    fn segment(&self, i: usize) -> usize {
        i + usize::from(self.toggle)
    }

    fn border(&self, left: &str, mid: &str, right: &str) -> Line {
        let mut text = String::from(left);
        for (i, w) in self.widths.iter().enumerate() {
            if i > 0 {
                text.push_str(mid);
            }
            text.push_str(&"─".repeat(w + 2 * self.pad));
        }
        text.push_str(right);
        Line::from(Span::new(text).tone(Tone::Muted))
    }

    fn segmented(&self, cells: &[Line]) -> Line {
        let bar = || Span::new("│").tone(Tone::Muted);
        let pad = " ".repeat(self.pad);
        let mut line = Line::new().span(bar());
        for (cell, &w) in cells.iter().zip(&self.widths) {
            if self.pad > 0 {
                line.push(Span::new(pad.clone()));
            }
            line.spans.extend(fit_line(cell, w).spans);
            if self.pad > 0 {
                line.push(Span::new(pad.clone()));
            }
            line.push(bar());
        }
        line
    }

    fn spanning(&self, content: &Line) -> Line {
        let bar = || Span::new("│").tone(Tone::Muted);
        let pad = " ".repeat(self.pad);
        let mut line = Line::new().span(bar());
        if self.pad > 0 {
            line.push(Span::new(pad.clone()));
        }
        line.spans.extend(fit_line(content, self.inner_width()).spans);
        if self.pad > 0 {
            line.push(Span::new(pad));
        }
        line.push(bar());
        line
    }
}

fn header_label(cell: &HeaderCell) -> Line {
    let mut line = Line::from(Span::new(cell.label.clone()).bold());
    if let Some(dir) = cell.sort {
        let tone = if dir == SortDirection::Unsorted {
            Tone::Muted
        } else {
            Tone::Accent
        };
        line.push(Span::new(" "));
        line.push(Span::new(dir.indicator()).tone(tone));
    }
    line
}

fn filter_box(cell: &HeaderCell) -> Line {
    match &cell.filter {
        Some(f) if !f.value.is_empty() => Line::from(Span::new(f.value.clone()).tone(Tone::Accent)),
        Some(f) => Line::from(Span::new(f.placeholder.clone()).tone(Tone::Muted)),
        None => Line::new(),
    }
}

fn column_widths(table: &RenderedTable, config: &LayoutConfig) -> Vec<usize> {
    let mut widths = vec![MIN_COLUMN_WIDTH; table.columns];

    if let Some(header) = &table.header {
        for (w, cell) in widths.iter_mut().zip(header) {
            *w = (*w).max(header_label(cell).width());
            if let Some(f) = &cell.filter {
                *w = (*w).max(display_width(&f.value));
            }
        }
    }
    for row in table.body.rows() {
        for (w, cell) in widths.iter_mut().zip(&row.cells) {
            *w = (*w).max(cell.width());
        }
    }
    for w in &mut widths {
        *w = (*w).min(config.max_column_width.max(MIN_COLUMN_WIDTH));
    }
    widths
}

/// Shrink the widest data columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], fixed: usize, pad: usize, max_width: usize) {
    let segments = widths.len() + usize::from(fixed > 0);
    let overhead = segments * 2 * pad + segments + 1 + fixed;
    loop {
        let total = overhead + widths.iter().sum::<usize>();
        if total <= max_width {
            return;
        }
        let Some(widest) = widths
            .iter_mut()
            .filter(|w| **w > MIN_COLUMN_WIDTH)
            .max_by_key(|w| **w)
        else {
            return;
        };
        *widest -= 1;
    }
}

/// Widest full-span line: the empty-body message or an expansion panel line.
fn spanning_width(table: &RenderedTable) -> usize {
    match &table.body {
        Body::Empty { message, .. } => display_width(message),
        Body::Rows(rows) => rows
            .iter()
            .filter_map(|row| row.expansion.as_ref())
            .map(Content::width)
            .max()
            .unwrap_or(0),
    }
}

/// Grow the last data column until a full-span line of `needed` columns
/// fits between the outer borders.
fn widen_for_spanning(widths: &mut [usize], needed: usize, fixed: usize, pad: usize) {
    let segments = widths.len() + usize::from(fixed > 0);
    let total = widths.iter().sum::<usize>() + fixed + segments * (2 * pad + 1) + 1;
    let inner = total.saturating_sub(2 + 2 * pad);
    if needed > inner {
        if let Some(last) = widths.last_mut() {
            *last += needed - inner;
        }
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Lay out a rendered table as styled text.
pub fn layout(table: &RenderedTable, config: &LayoutConfig) -> TextLayout {
    let pad = if table.presentation.compact { 0 } else { 1 };
    let mut data_widths = column_widths(table, config);
    let fixed = if table.toggle_column { TOGGLE_WIDTH } else { 0 };
    widen_for_spanning(&mut data_widths, spanning_width(table), fixed, pad);
    if let Some(max) = config.max_width {
        fit_widths(&mut data_widths, fixed, pad, max);
    }

    let mut widths = Vec::with_capacity(data_widths.len() + 1);
    if table.toggle_column {
        widths.push(TOGGLE_WIDTH);
    }
    widths.extend(data_widths);
    let grid = Grid::new(pad, widths, table.toggle_column);

    let mut out = TextLayout {
        width: grid.width(),
        ..Default::default()
    };
    let push = |out: &mut TextLayout, role: LineRole, line: Line| {
        out.lines.push(StyledLine { role, line });
        out.lines.len() - 1
    };

    push(&mut out, LineRole::Border, grid.border("┌", "┬", "┐"));

    if let Some(header) = &table.header {
        let mut cells: Vec<Line> = Vec::new();
        if table.toggle_column {
            cells.push(Line::new());
        }
        cells.extend(header.iter().map(header_label));
        let y = push(&mut out, LineRole::Header, grid.segmented(&cells));
        for (i, cell) in header.iter().enumerate() {
            if cell.sort.is_some() {
                let seg = grid.segment(i);
                out.hits.push(HitRegion {
                    y,
                    x: grid.starts[seg],
                    width: grid.widths[seg],
                    target: HitTarget::Header(cell.key.clone()),
                });
            }
        }

        if header.iter().any(|c| c.filter.is_some()) {
            let mut cells: Vec<Line> = Vec::new();
            if table.toggle_column {
                cells.push(Line::new());
            }
            cells.extend(header.iter().map(filter_box));
            let y = push(&mut out, LineRole::Filter, grid.segmented(&cells));
            for (i, cell) in header.iter().enumerate() {
                if cell.filter.is_some() {
                    let seg = grid.segment(i);
                    out.hits.push(HitRegion {
                        y,
                        x: grid.starts[seg],
                        width: grid.widths[seg],
                        target: HitTarget::Filter(cell.key.clone()),
                    });
                }
            }
        }

        push(&mut out, LineRole::Border, grid.border("├", "┼", "┤"));
    }

    match &table.body {
        Body::Empty { message, .. } => {
            let line = Line::from(Span::new(*message).tone(Tone::Muted));
            push(&mut out, LineRole::Empty, grid.spanning(&line));
        }
        Body::Rows(rows) => {
            for row in rows {
                layout_row(&mut out, &grid, row, table.presentation.striped);
            }
        }
    }

    push(&mut out, LineRole::Border, grid.border("└", "┴", "┘"));

    if let Some(footer) = &table.footer {
        push(
            &mut out,
            LineRole::Footer,
            Line::from(Span::new(footer.clone()).tone(Tone::Muted)),
        );
    }

    out
}

fn layout_row(out: &mut TextLayout, grid: &Grid, row: &RenderedRow, striped: bool) {
    let height = row.cells.iter().map(Content::height).max().unwrap_or(0).max(1);
    let role = LineRole::Row {
        position: row.position,
        stripe: striped && row.position % 2 == 1,
    };

    for k in 0..height {
        let mut cells: Vec<Line> = Vec::with_capacity(grid.widths.len());
        if grid.toggle {
            let toggle = match row.toggle {
                Some(t) if k == 0 => Line::from(Span::new(t.glyph()).tone(Tone::Accent)),
                _ => Line::new(),
            };
            cells.push(toggle);
        }
        cells.extend(
            row.cells
                .iter()
                .map(|c| c.lines.get(k).cloned().unwrap_or_default()),
        );

        out.lines.push(StyledLine {
            role,
            line: grid.segmented(&cells),
        });
        let y = out.lines.len() - 1;
        out.hits.push(HitRegion {
            y,
            x: 0,
            width: grid.width(),
            target: HitTarget::Row(row.position),
        });
        if k == 0 && row.toggle.is_some() {
            out.hits.push(HitRegion {
                y,
                x: grid.starts[0],
                width: TOGGLE_WIDTH,
                target: HitTarget::Toggle(row.position),
            });
        }
    }

    if let Some(expansion) = &row.expansion {
        let role = LineRole::Expansion {
            position: row.position,
        };
        let lines = if expansion.lines.is_empty() {
            vec![Line::new()]
        } else {
            expansion.lines.clone()
        };
        for line in &lines {
            out.lines.push(StyledLine {
                role,
                line: grid.spanning(line),
            });
        }
    }
}
