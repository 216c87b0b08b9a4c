//! Displayable content produced by cell and expansion renderers.
//!
//! Content is a small styled-text model: lines of spans, each span carrying
//! a semantic [`Tone`] and a bold flag. Front-ends map tones onto their own
//! palette.

use unicode_width::UnicodeWidthStr;

/// Semantic color of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Default,
    Muted,
    Accent,
    Success,
    Warning,
    Danger,
}

/// A run of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// One line of spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

/// Renderable content: zero or more lines.
///
/// Empty content (no lines, or only empty spans) renders as an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    pub lines: Vec<Line>,
}

impl Content {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Plain text content. Embedded newlines start new lines.
    pub fn text(text: impl AsRef<str>) -> Self {
        let text = text.as_ref();
        if text.is_empty() {
            return Self::empty();
        }
        Self {
            lines: text.split('\n').map(|l| Line::from(Span::new(l))).collect(),
        }
    }

    /// Single-span styled content.
    pub fn styled(span: Span) -> Self {
        Self {
            lines: vec![Line::from(span)],
        }
    }

    pub fn line(mut self, line: impl Into<Line>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn push_line(&mut self, line: impl Into<Line>) {
        self.lines.push(line.into());
    }

    /// Appends all lines of `other`.
    pub fn extend(&mut self, other: Content) {
        self.lines.extend(other.lines);
    }

    pub fn is_empty(&self) -> bool {
        self.lines
            .iter()
            .all(|l| l.spans.iter().all(|s| s.text.is_empty()))
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Widest line in terminal columns.
    pub fn width(&self) -> usize {
        self.lines.iter().map(Line::width).max().unwrap_or(0)
    }

    /// Plain text with lines joined by `\n`.
    pub fn plain(&self) -> String {
        self.lines
            .iter()
            .map(Line::plain)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::text(s)
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::text(s)
    }
}

impl From<Span> for Content {
    fn from(span: Span) -> Self {
        Content::styled(span)
    }
}
