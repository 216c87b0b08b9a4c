//! Application error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use datatable_lib::TableError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid table definition: {0}")]
    Table(#[from] TableError),
    #[error("row {index} is not an object")]
    RowShape { index: usize },
    #[error("terminal error: {0}")]
    Terminal(io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}
