//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse,
    /// Keystrokes edit the focused column's filter.
    Filter,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FocusPrev,
    FocusNext,
    /// Same as clicking the focused column's header.
    CycleSort,
    EditFilter,
    FilterInput(char),
    FilterBackspace,
    FinishFilter,
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    ToggleRow,
    ClearFilters,
    Quit,
}

/// One line of help per binding shown in the status bar.
pub const BROWSE_HELP: &str =
    "←/→ column  s sort  / filter  ↑/↓ row  enter expand  c clear  q quit";
pub const FILTER_HELP: &str = "type to filter  backspace delete  enter/esc done";

/// Map a key event to an action for `mode`.
pub fn action_for(key: KeyEvent, mode: Mode) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        Mode::Filter => match key.code {
            KeyCode::Char(c) => Some(Action::FilterInput(c)),
            KeyCode::Backspace => Some(Action::FilterBackspace),
            KeyCode::Enter | KeyCode::Esc => Some(Action::FinishFilter),
            _ => None,
        },
        Mode::Browse => match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::Char('s') => Some(Action::CycleSort),
            KeyCode::Char('/') | KeyCode::Char('f') => Some(Action::EditFilter),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
            KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleRow),
            KeyCode::Char('c') => Some(Action::ClearFilters),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
    }
}
