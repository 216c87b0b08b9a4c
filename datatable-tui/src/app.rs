//! Interactive session state.
//!
//! `App` owns the table and the session-only UI state (focused column, row
//! cursor, scroll offset, input mode). It knows nothing about the terminal:
//! actions and clicks come in, a [`TextLayout`] comes out.

use datatable_lib::{DataTable, HitTarget, LayoutConfig, LineRole, StyledLine, TextLayout};

use crate::keybinds::{Action, Mode};

pub struct App {
    table: DataTable,
    config: LayoutConfig,
    layout: TextLayout,
    /// Focused column index.
    focus: usize,
    /// Display position of the row cursor.
    cursor: usize,
    /// First layout line shown.
    scroll: usize,
    /// Lines available to the table.
    viewport: usize,
    mode: Mode,
    quit: bool,
}

impl App {
    pub fn new(table: DataTable, config: LayoutConfig) -> Self {
        let layout = table.layout(&config);
        Self {
            table,
            config,
            layout,
            focus: 0,
            cursor: 0,
            scroll: 0,
            viewport: usize::MAX,
            mode: Mode::Browse,
            quit: false,
        }
    }

    pub fn table(&self) -> &DataTable {
        &self.table
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Key of the focused column.
    pub fn focused_key(&self) -> Option<&str> {
        self.table.columns().get(self.focus).map(|c| c.key.as_str())
    }

    /// Resize to a `width` x `height` table area.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.config.max_width = Some(width);
        self.viewport = height.max(1);
        self.relayout();
    }

    /// Lines currently scrolled into view.
    pub fn visible_lines(&self) -> &[StyledLine] {
        let start = self.scroll.min(self.layout.lines.len());
        let end = start.saturating_add(self.viewport).min(self.layout.lines.len());
        &self.layout.lines[start..end]
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    pub fn apply(&mut self, action: Action) {
        log::trace!("action {:?}", action);
        match action {
            Action::Quit => self.quit = true,
            Action::FocusPrev => {
                self.focus = self.focus.saturating_sub(1);
            }
            Action::FocusNext => {
                let last = self.table.columns().len().saturating_sub(1);
                self.focus = (self.focus + 1).min(last);
            }
            Action::CycleSort => {
                if let Some(key) = self.focused_key().map(String::from) {
                    self.table.click_header(&key);
                }
            }
            Action::EditFilter => {
                let filterable = self
                    .table
                    .columns()
                    .get(self.focus)
                    .is_some_and(|c| self.table.is_filterable(c));
                if filterable {
                    self.mode = Mode::Filter;
                }
            }
            Action::FilterInput(c) => self.edit_filter(|text| text.push(c)),
            Action::FilterBackspace => self.edit_filter(|text| {
                text.pop();
            }),
            Action::FinishFilter => self.mode = Mode::Browse,
            Action::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorDown => self.cursor = self.cursor.saturating_add(1),
            Action::PageUp => self.cursor = self.cursor.saturating_sub(self.page()),
            Action::PageDown => self.cursor = self.cursor.saturating_add(self.page()),
            Action::Top => self.cursor = 0,
            Action::Bottom => self.cursor = usize::MAX,
            Action::ToggleRow => {
                self.table.toggle_row(self.cursor);
            }
            Action::ClearFilters => self.table.clear_filters(),
        }
        self.relayout();
    }

    fn page(&self) -> usize {
        self.viewport.saturating_sub(1).clamp(1, 1 << 16)
    }

    fn edit_filter(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(key) = self.focused_key().map(String::from) else {
            return;
        };
        let mut text = self.table.state().filter(&key).to_string();
        edit(&mut text);
        self.table.set_filter(key, text);
    }

    /// Route a click at table coordinates `(x, y)`.
    pub fn click(&mut self, x: usize, y: usize) {
        if y >= self.viewport {
            return;
        }
        let line = self.scroll + y;
        let Some(target) = self.layout.hit_test(x, line).cloned() else {
            return;
        };
        log::debug!("click at ({}, {}) -> {:?}", x, line, target);
        match target {
            HitTarget::Header(key) => {
                self.focus_key(&key);
                self.table.click_header(&key);
            }
            HitTarget::Filter(key) => {
                self.focus_key(&key);
                self.mode = Mode::Filter;
            }
            HitTarget::Toggle(position) => {
                self.cursor = position;
                self.table.toggle_row(position);
            }
            HitTarget::Row(position) => self.cursor = position,
        }
        self.relayout();
    }

    pub fn scroll_by(&mut self, delta: isize) {
        if delta < 0 {
            self.cursor = self.cursor.saturating_sub(delta.unsigned_abs());
        } else {
            self.cursor = self.cursor.saturating_add(delta as usize);
        }
        self.relayout();
    }

    fn focus_key(&mut self, key: &str) {
        if let Some(i) = self.table.columns().iter().position(|c| c.key == key) {
            self.focus = i;
        }
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    fn relayout(&mut self) {
        let len = self.table.displayed_len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.layout = self.table.layout(&self.config);
        self.scroll_to_cursor();
    }

    /// Line range `[first, last]` drawn for display position `position`.
    fn row_lines(&self, position: usize) -> Option<(usize, usize)> {
        let first = self.layout.row_line(position)?;
        let last = self.layout.lines[first..]
            .iter()
            .take_while(|l| match l.role {
                LineRole::Row { position: p, .. } | LineRole::Expansion { position: p } => {
                    p == position
                }
                _ => false,
            })
            .count()
            + first
            - 1;
        Some((first, last))
    }

    fn scroll_to_cursor(&mut self) {
        let max_scroll = self.layout.lines.len().saturating_sub(self.viewport);
        if let Some((first, last)) = self.row_lines(self.cursor) {
            if last >= self.scroll.saturating_add(self.viewport) {
                self.scroll = last + 1 - self.viewport.min(last + 1);
            }
            if first < self.scroll {
                self.scroll = first;
            }
        }
        self.scroll = self.scroll.min(max_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datatable_lib::{Column, Content, Row, SortDirection, TableOptions};

    fn app() -> App {
        let table = DataTable::new(vec![
            Column::new("name", "Name"),
            Column::new("n", "N").filterable(false),
        ])
        .with_options(TableOptions::new().expandable(true))
        .with_expansion(|row| Content::text(row.text("details")))
        .with_rows(vec![
            Row::new().set("name", "b").set("n", 2).set("details", "more"),
            Row::new().set("name", "a").set("n", 1),
            Row::new().set("name", "c").set("n", 3),
        ]);
        App::new(table, LayoutConfig::default())
    }

    #[test]
    fn test_cycle_sort_on_focused_column() {
        let mut app = app();
        app.apply(Action::FocusNext);
        app.apply(Action::CycleSort);
        assert_eq!(app.table().state().sort_key(), Some("n"));
        assert_eq!(
            app.table().state().sort_direction(),
            SortDirection::Ascending
        );
    }

    #[test]
    fn test_focus_is_clamped() {
        let mut app = app();
        app.apply(Action::FocusPrev);
        assert_eq!(app.focus(), 0);
        for _ in 0..5 {
            app.apply(Action::FocusNext);
        }
        assert_eq!(app.focus(), 1);
    }

    #[test]
    fn test_filter_editing() {
        let mut app = app();
        app.apply(Action::EditFilter);
        assert_eq!(app.mode(), Mode::Filter);
        app.apply(Action::FilterInput('c'));
        assert_eq!(app.table().displayed_len(), 1);
        app.apply(Action::FilterBackspace);
        assert_eq!(app.table().displayed_len(), 3);
        assert_eq!(app.table().state().filter("name"), "");
        app.apply(Action::FinishFilter);
        assert_eq!(app.mode(), Mode::Browse);
    }

    #[test]
    fn test_unfilterable_column_stays_in_browse() {
        let mut app = app();
        app.apply(Action::FocusNext);
        app.apply(Action::EditFilter);
        assert_eq!(app.mode(), Mode::Browse);
    }

    #[test]
    fn test_cursor_is_clamped_to_display() {
        let mut app = app();
        app.apply(Action::Bottom);
        assert_eq!(app.cursor(), 2);
        app.apply(Action::EditFilter);
        app.apply(Action::FilterInput('a'));
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_toggle_row_at_cursor() {
        let mut app = app();
        app.apply(Action::ToggleRow);
        assert!(app.table().is_row_expanded(0));
        app.apply(Action::CursorDown);
        app.apply(Action::ToggleRow);
        assert!(!app.table().state().is_expanded(1));
    }

    #[test]
    fn test_click_header_sorts() {
        let mut app = app();
        let y = app
            .layout
            .lines
            .iter()
            .position(|l| l.role == LineRole::Header)
            .unwrap();
        let region = app
            .layout
            .hits
            .iter()
            .find(|h| h.target == HitTarget::Header("n".into()))
            .cloned()
            .unwrap();
        app.click(region.x, y);
        assert_eq!(app.focus(), 1);
        assert_eq!(app.table().state().sort_key(), Some("n"));
    }

    #[test]
    fn test_click_toggle_expands() {
        let mut app = app();
        let y = app.layout.row_line(0).unwrap();
        app.click(2, y);
        assert!(app.table().is_row_expanded(0));
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut app = app();
        app.resize(80, 3);
        app.apply(Action::Bottom);
        let lines = app.visible_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().any(|l| matches!(
            l.role,
            LineRole::Row { position: 2, .. }
        )));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
