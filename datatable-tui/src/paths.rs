//! Where the viewer keeps its files.
//!
//! Settings live in the platform config directory, logs in the cache
//! directory. Both come from `directories`, so XDG rules apply on Linux.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const LATEST_LOG: &str = "latest.log";
const SETTINGS_FILE: &str = "settings.json";

/// Archived logs kept after rotation.
const KEEP_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "datatable", "datatable")
}

pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// `settings.json` in the config directory.
pub fn settings_file() -> Option<PathBuf> {
    Some(config_dir()?.join(SETTINGS_FILE))
}

/// `latest.log` in the cache directory.
pub fn log_file() -> Option<PathBuf> {
    Some(cache_dir()?.join(LATEST_LOG))
}

/// Archive the previous `latest.log` under a timestamp and prune old
/// archives. Failures are ignored.
pub fn rotate_logs(cache: &Path) {
    let latest = cache.join(LATEST_LOG);
    if latest.is_file() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{}.log", stamp)));
    }
    prune_logs(cache, KEEP_LOGS);
}

/// Archived logs in `cache`, oldest first. Timestamped names sort
/// chronologically.
fn archived_logs(cache: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(cache) else {
        return Vec::new();
    };
    let mut logs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .collect();
    logs.sort();
    logs
}

fn prune_logs(cache: &Path, keep: usize) {
    let logs = archived_logs(cache);
    let excess = logs.len().saturating_sub(keep);
    for path in &logs[..excess] {
        if let Err(e) = fs::remove_file(path) {
            log::debug!("could not remove {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_archives_latest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LATEST_LOG), "old").unwrap();

        rotate_logs(dir.path());

        assert!(!dir.path().join(LATEST_LOG).exists());
        assert_eq!(archived_logs(dir.path()).len(), 1);
    }

    #[test]
    fn test_prune_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        for day in 1..=5 {
            fs::write(dir.path().join(format!("2026010{}_000000.log", day)), "x").unwrap();
        }
        fs::write(dir.path().join(LATEST_LOG), "current").unwrap();
        fs::write(dir.path().join("notes.txt"), "keep").unwrap();

        prune_logs(dir.path(), 2);

        let names: Vec<String> = archived_logs(dir.path())
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["20260104_000000.log", "20260105_000000.log"]);
        assert!(dir.path().join(LATEST_LOG).exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_missing_cache_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(archived_logs(&dir.path().join("absent")).is_empty());
    }
}
