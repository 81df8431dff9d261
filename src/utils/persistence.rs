//! JSON persistence helpers for save files under the arcade directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the arcade directory.
pub const ARCADE_HOME_ENV: &str = "ARCADE_HOME";

/// Get the arcade data directory (`$ARCADE_HOME`, else `~/.arcade/`),
/// creating it if needed.
pub fn arcade_dir() -> io::Result<PathBuf> {
    let dir = match std::env::var_os(ARCADE_HOME_ENV) {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let home_dir = dirs::home_dir().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Could not determine home directory",
                )
            })?;
            home_dir.join(".arcade")
        }
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable save file");
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "arcade_persistence_{}_{}",
            name,
            std::process::id()
        ));
        fs::remove_dir_all(&dir).ok();
        dir
    }

    #[test]
    fn test_load_missing_returns_default() {
        let dir = scratch_dir("missing");
        let val: Vec<String> = load_json_or_default(&dir.join("nonexistent.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let val: Vec<u32> = load_json_or_default(&path);
        assert!(val.is_empty());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("nested").join("data.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default(&path);
        assert_eq!(loaded, data);

        fs::remove_dir_all(&dir).ok();
    }
}
