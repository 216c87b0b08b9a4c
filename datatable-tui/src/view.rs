//! Frame composition.
//!
//! Builds what one screen shows from the app state: the scrolled table
//! lines with row backgrounds, then a status line and a help line.

use datatable_lib::render::{COLLAPSE_LABEL, EXPAND_LABEL};
use datatable_lib::{Line, LineRole, Span, Tone};

use crate::app::App;
use crate::keybinds::{BROWSE_HELP, FILTER_HELP, Mode};

/// Lines reserved below the table.
pub const STATUS_HEIGHT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    None,
    Stripe,
    Cursor,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    pub line: Line,
    pub background: Background,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<FrameLine>,
}

/// Compose a frame of at most `height` lines.
pub fn compose(app: &App, height: usize) -> Frame {
    let hoverable = app.table().options().hoverable;
    let table_height = height.saturating_sub(STATUS_HEIGHT);

    let mut lines: Vec<FrameLine> = app
        .visible_lines()
        .iter()
        .take(table_height)
        .map(|styled| {
            let background = match styled.role {
                LineRole::Row { position, .. } | LineRole::Expansion { position }
                    if hoverable && position == app.cursor() =>
                {
                    Background::Cursor
                }
                LineRole::Row { stripe: true, .. } => Background::Stripe,
                _ => Background::None,
            };
            FrameLine {
                line: styled.line.clone(),
                background,
            }
        })
        .collect();

    while lines.len() < table_height {
        lines.push(FrameLine {
            line: Line::new(),
            background: Background::None,
        });
    }

    if height >= STATUS_HEIGHT {
        lines.push(FrameLine {
            line: status_line(app),
            background: Background::Status,
        });
        let help = match app.mode() {
            Mode::Browse => BROWSE_HELP,
            Mode::Filter => FILTER_HELP,
        };
        lines.push(FrameLine {
            line: Line::new().span(Span::new(help).tone(Tone::Muted)),
            background: Background::None,
        });
    }

    Frame { lines }
}

/// Focused column, its sort direction and filter text, then the cursor
/// row's expansion hint.
fn status_line(app: &App) -> Line {
    let table = app.table();
    let Some(column) = table.columns().get(app.focus()) else {
        return Line::new();
    };

    let mut line = Line::new()
        .span(Span::new(" "))
        .span(Span::new(column.header.clone()).bold().tone(Tone::Accent));

    if table.is_sortable(column) {
        let direction = table.state().direction_for(&column.key);
        line.push(Span::new(format!("  sort {}", direction.indicator())));
    }
    if table.is_filterable(column) {
        let text = table.state().filter(&column.key);
        let tone = if app.mode() == Mode::Filter {
            Tone::Warning
        } else {
            Tone::Default
        };
        line.push(Span::new("  filter: "));
        line.push(Span::new(text.to_string()).tone(tone));
        if app.mode() == Mode::Filter {
            line.push(Span::new("_").tone(Tone::Warning));
        }
    }
    let expandable = table
        .row_at(app.cursor())
        .is_some_and(|row| table.can_expand(row));
    if app.mode() == Mode::Browse && expandable {
        let hint = if table.is_row_expanded(app.cursor()) {
            COLLAPSE_LABEL
        } else {
            EXPAND_LABEL
        };
        line.push(Span::new(format!("  enter: {}", hint)).tone(Tone::Muted));
    }
    line
}
