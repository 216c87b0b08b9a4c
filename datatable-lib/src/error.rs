//! Error types

use thiserror::Error;

/// Problems with a column set.
///
/// View operations never fail; these are only reported by
/// [`validate_columns`](crate::column::validate_columns) for callers that
/// want to reject bad definitions up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("a table needs at least one column")]
    EmptyColumns,
    #[error("duplicate column key '{0}'")]
    DuplicateColumn(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
