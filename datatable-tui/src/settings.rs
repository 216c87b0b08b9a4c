//! User settings.
//!
//! Read from `settings.json` in the config directory. Every field is
//! optional; a missing file means defaults.

use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use simplelog::LevelFilter;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// Overrides the definition's `compact` flag.
    pub compact: Option<bool>,
    /// Overrides the definition's `striped` flag.
    pub striped: Option<bool>,
    /// Widest a single column may grow.
    pub max_column_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            compact: None,
            striped: None,
            max_column_width: 40,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(AppError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&text).map_err(|source| AppError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parsed log level, falling back to `Info` on unknown names.
    pub fn level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"log_level": "debug", "compact": true}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.level(), LevelFilter::Debug);
        assert_eq!(settings.compact, Some(true));
        assert_eq!(settings.striped, None);
        assert_eq!(settings.max_column_width, 40);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Settings::load(&path), Err(AppError::Json { .. })));
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let settings = Settings {
            log_level: "loud".into(),
            ..Default::default()
        };
        assert_eq!(settings.level(), LevelFilter::Info);
    }
}
