//! Fitting styled lines into fixed-width cells.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::content::{Line, Span};

const ELLIPSIS: &str = "…";

pub fn display_width(s: &str) -> usize {
    s.width()
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Fit a styled line into exactly `width` columns.
///
/// Longer lines are cut with `…` (styled like the span that was cut);
/// shorter lines are padded with unstyled spaces.
pub fn fit_line(line: &Line, width: usize) -> Line {
    let mut out = Line::new();
    let total = line.width();

    if total <= width {
        out.spans = line.spans.iter().filter(|s| !s.text.is_empty()).cloned().collect();
        if total < width {
            out.push(Span::new(" ".repeat(width - total)));
        }
        return out;
    }
    if width == 0 {
        return out;
    }

    let mut used = 0;
    let budget = width - 1;
    for span in &line.spans {
        let remaining = budget - used;
        let span_width = span.width();
        if span_width <= remaining {
            out.push(span.clone());
            used += span_width;
            continue;
        }

        let mut text = String::new();
        for ch in span.text.chars() {
            let w = char_width(ch);
            if used + w > budget {
                break;
            }
            text.push(ch);
            used += w;
        }
        text.push_str(ELLIPSIS);
        used += 1;
        out.push(Span {
            text,
            ..span.clone()
        });
        break;
    }

    if used < width {
        out.push(Span::new(" ".repeat(width - used)));
    }
    out
}
