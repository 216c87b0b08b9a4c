//! Row ordering.

pub mod collate;

use std::cmp::Ordering;

use crate::row::Row;
use crate::state::SortDirection;
use crate::value::Value;

/// Compare two field values.
///
/// Equal values tie. Two numbers compare numerically and two non-numbers by
/// collation of their default text forms, so a missing field sorts as empty
/// text. In a mixed column numbers come first, which keeps the order total.
/// A plain text comparison of such pairs would put `"1"` before `5`; see the
/// mixed-type sort note in DESIGN.md.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collate::compare(&a.to_string(), &b.to_string()),
    }
}

/// Compare two rows on `field` in `direction`. `Unsorted` ties everything.
pub fn compare_rows(a: &Row, b: &Row, field: &str, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Unsorted => Ordering::Equal,
        SortDirection::Ascending => compare_values(a.value(field), b.value(field)),
        SortDirection::Descending => compare_values(a.value(field), b.value(field)).reverse(),
    }
}

/// Stable-sort source indices by the rows they point at.
pub fn sort_indices(indices: &mut [usize], rows: &[Row], field: &str, direction: SortDirection) {
    if direction == SortDirection::Unsorted {
        return;
    }
    indices.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b], field, direction));
}
