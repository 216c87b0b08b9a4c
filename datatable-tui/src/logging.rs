//! File logging.

use std::fs::{self, File};

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;
use crate::paths;

/// Initialize the file logger at `level`.
///
/// Logs go to `latest.log` in the cache directory after rotating the
/// previous one. Without a cache directory logging is disabled.
pub fn init(level: LevelFilter) -> Result<(), AppError> {
    let (Some(cache), Some(log_path)) = (paths::cache_dir(), paths::log_file()) else {
        return Ok(());
    };
    fs::create_dir_all(&cache).map_err(|e| AppError::Logging(e.to_string()))?;
    paths::rotate_logs(&cache);

    let log_file = File::create(&log_path)
        .map_err(|e| AppError::Logging(e.to_string()))?;
    WriteLogger::init(level, Config::default(), log_file)
        .map_err(|e| AppError::Logging(e.to_string()))?;

    log::info!("logging to {}", log_path.display());
    Ok(())
}
