//! File-backed tracing subscriber. The terminal belongs to the UI, so log
//! output goes to `arcade.log` in the arcade directory.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `arcade=trace`).
pub const LOG_FILTER_ENV: &str = "ARCADE_LOG";

pub const LOG_FILE_NAME: &str = "arcade.log";

fn open_log_file(dir: &Path) -> io::Result<(File, PathBuf)> {
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Filter from `ARCADE_LOG`, defaulting to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `<dir>/arcade.log`.
/// Returns the log file path.
pub fn init(dir: &Path) -> io::Result<PathBuf> {
    let (file, path) = open_log_file(dir)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_log_file_creates_file() {
        let dir = std::env::temp_dir().join(format!("arcade_logging_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let (_file, path) = open_log_file(&dir).unwrap();
        assert!(path.exists());
        assert!(path.ends_with(LOG_FILE_NAME));
        std::fs::remove_dir_all(&dir).ok();
    }
}
