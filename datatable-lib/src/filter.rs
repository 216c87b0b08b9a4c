//! Row filtering.

use crate::row::Row;
use crate::value::Value;

const AFFIRMATIVE: [&str; 2] = ["yes", "true"];
const NEGATIVE: [&str; 2] = ["no", "false"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolQuery {
    True,
    False,
    /// No boolean passes.
    Neither,
}

/// Interpret a normalized (lowercased, trimmed) filter as a boolean query.
///
/// The affirmative words win when the text is a prefix of both sets, which
/// only happens for empty text.
pub fn bool_query(needle: &str) -> BoolQuery {
    if AFFIRMATIVE.iter().any(|w| w.starts_with(needle)) {
        BoolQuery::True
    } else if NEGATIVE.iter().any(|w| w.starts_with(needle)) {
        BoolQuery::False
    } else {
        BoolQuery::Neither
    }
}

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Does `value` satisfy a normalized filter?
pub fn value_matches(value: &Value, needle: &str) -> bool {
    match value {
        Value::Bool(b) => match bool_query(needle) {
            BoolQuery::True => *b,
            BoolQuery::False => !*b,
            BoolQuery::Neither => false,
        },
        other => other.to_string().to_lowercase().contains(needle),
    }
}

/// Does `row` satisfy the filter `text` on `field`?
///
/// Empty text always matches. A missing field is empty text.
pub fn row_matches(row: &Row, field: &str, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    value_matches(row.value(field), &normalize(text))
}

pub fn row_matches_all<'a, I>(row: &Row, filters: I) -> bool
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    filters
        .into_iter()
        .all(|(field, text)| row_matches(row, field, text))
}
