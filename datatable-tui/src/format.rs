//! Cell formats and the details panel renderer.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use datatable_lib::{
    CellRenderer, Column, Content, DataTable, LayoutConfig, Line, Row, Span, TableOptions, Tone,
    Value,
};

/// How a column draws its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellFormat {
    /// Default text form.
    #[default]
    Plain,
    /// Booleans as a green `Yes` / red `No`.
    YesNo,
    Bold,
    /// Lists joined by `, `.
    List,
}

impl CellFormat {
    /// Renderer for this format, `None` for plain text.
    pub fn renderer(self) -> Option<CellRenderer> {
        match self {
            CellFormat::Plain => None,
            CellFormat::YesNo => Some(Arc::new(|value: &Value, _: &Row| yes_no(value))),
            CellFormat::Bold => Some(Arc::new(|value: &Value, _: &Row| {
                Content::styled(Span::new(value.to_string()).bold())
            })),
            CellFormat::List => Some(Arc::new(|value: &Value, _: &Row| list(value))),
        }
    }
}

fn yes_no(value: &Value) -> Content {
    match value {
        Value::Bool(true) => Content::styled(Span::new("Yes").tone(Tone::Success)),
        Value::Bool(false) => Content::styled(Span::new("No").tone(Tone::Danger)),
        other => Content::text(other.to_string()),
    }
}

fn list(value: &Value) -> Content {
    match value {
        Value::List(items) => Content::text(
            items
                .iter()
                .map(Value::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => Content::text(other.to_string()),
    }
}

/// Turn a field name into a label: `setBonus` and `set_bonus` become
/// `Set Bonus`.
pub fn humanize(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_numeric();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Details panel
// =============================================================================

/// Render a row's details payload for its expansion panel.
///
/// Maps list each entry under a bold label. Lists of objects become a
/// nested table; other lists become bullet lines.
pub fn details(value: &Value) -> Content {
    let mut out = Content::empty();
    match value {
        Value::Map(map) => {
            for (key, entry) in map {
                section(&mut out, &humanize(key), entry, 0);
            }
        }
        Value::List(items) => list_block(&mut out, items, 0),
        other => out.push_line(Span::new(other.to_string())),
    }
    out
}

fn indent(depth: usize) -> Span {
    Span::new("  ".repeat(depth))
}

fn section(out: &mut Content, label: &str, value: &Value, depth: usize) {
    match value {
        Value::Null => {}
        Value::Map(map) => {
            out.push_line(Line::new().span(indent(depth)).span(label_span(label)));
            for (key, entry) in map {
                section(out, &humanize(key), entry, depth + 1);
            }
        }
        Value::List(items) if items.is_empty() => {}
        Value::List(items) => {
            out.push_line(Line::new().span(indent(depth)).span(label_span(label)));
            list_block(out, items, depth);
        }
        scalar => out.push_line(
            Line::new()
                .span(indent(depth))
                .span(label_span(label))
                .span(Span::new(" "))
                .span(Span::new(scalar.to_string())),
        ),
    }
}

fn label_span(label: &str) -> Span {
    Span::new(format!("{}:", label)).bold()
}

fn list_block(out: &mut Content, items: &[Value], depth: usize) {
    if !items.is_empty() && items.iter().all(|v| v.as_map().is_some()) {
        for line in nested_table(items).lines {
            let mut indented = Line::new().span(indent(depth));
            indented.spans.extend(line.spans);
            out.push_line(indented);
        }
        return;
    }
    for item in items {
        out.push_line(
            Line::new()
                .span(indent(depth + 1))
                .span(Span::new("• ").tone(Tone::Muted))
                .span(Span::new(item.to_string())),
        );
    }
}

/// A compact, static table over a list of objects.
fn nested_table(items: &[Value]) -> Content {
    let mut keys: Vec<&str> = Vec::new();
    let mut rows = Vec::with_capacity(items.len());
    for map in items.iter().filter_map(Value::as_map) {
        for key in map.keys() {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
        rows.push(to_row(map));
    }

    let columns = keys
        .iter()
        .map(|key| Column::new(*key, humanize(key)))
        .collect();
    DataTable::new(columns)
        .with_options(
            TableOptions::new()
                .sortable(false)
                .filterable(false)
                .compact(true)
                .footerless(true),
        )
        .with_rows(rows)
        .layout(&LayoutConfig::default())
        .into_content()
}

fn to_row(map: &BTreeMap<String, Value>) -> Row {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(s: &str) -> Value {
        Value::from(serde_json::from_str::<serde_json::Value>(s).unwrap())
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("setBonus"), "Set Bonus");
        assert_eq!(humanize("item_level"), "Item Level");
        assert_eq!(humanize("notes"), "Notes");
        assert_eq!(humanize("ID"), "ID");
    }

    #[test]
    fn test_yes_no() {
        let render = CellFormat::YesNo.renderer().unwrap();
        let yes = render(&Value::Bool(true), &Row::new());
        assert_eq!(yes.plain(), "Yes");
        assert_eq!(yes.lines[0].spans[0].tone, Tone::Success);
        assert_eq!(render(&Value::Bool(false), &Row::new()).plain(), "No");
        assert_eq!(render(&Value::Null, &Row::new()).plain(), "");
    }

    #[test]
    fn test_list_format() {
        let render = CellFormat::List.renderer().unwrap();
        let value = json(r#"["Emerald", "Ruby"]"#);
        assert_eq!(render(&value, &Row::new()).plain(), "Emerald, Ruby");
    }

    #[test]
    fn test_plain_has_no_renderer() {
        assert!(CellFormat::Plain.renderer().is_none());
    }

    #[test]
    fn test_details_scalars_and_bullets() {
        let content = details(&json(
            r#"{"source": "Raid", "stats": ["+10 Str", "+5 Sta"], "gem": null}"#,
        ));
        assert_eq!(
            content.plain(),
            "Source: Raid\nStats:\n  • +10 Str\n  • +5 Sta"
        );
    }

    #[test]
    fn test_details_nested_table() {
        let content = details(&json(
            r#"{"alternatives": [{"name": "Ring", "source": "Vendor"}, {"name": "Band"}]}"#,
        ));
        let text = content.plain();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Alternatives:");
        assert_eq!(lines[1], "┌────┬──────┐");
        assert_eq!(lines[2], "│Name│Source│");
        assert_eq!(lines[4], "│Ring│Vendor│");
        assert_eq!(lines[5], "│Band│      │");
    }
}
