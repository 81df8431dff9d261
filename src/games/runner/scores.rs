//! Per-skin score files and history export.

use super::types::{HighScore, RunnerSkin, ScoreBook, ScoreRecord};
use crate::utils::persistence::{arcade_dir, load_json_or_default, save_json};
use std::io;
use std::path::{Path, PathBuf};

/// Reads and writes runner scores under one directory.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    root: PathBuf,
}

impl ScoreStore {
    /// Store rooted at the arcade directory.
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::at(arcade_dir()?))
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn high_score_path(&self, skin: RunnerSkin) -> PathBuf {
        self.root.join(format!("{}_high_score.json", skin.key()))
    }

    pub fn history_path(&self, skin: RunnerSkin) -> PathBuf {
        self.root.join(format!("{}_score_history.json", skin.key()))
    }

    /// Load a skin's scores. Missing or corrupt files load as empty.
    pub fn load(&self, skin: RunnerSkin) -> ScoreBook {
        let history: Vec<ScoreRecord> = load_json_or_default(&self.history_path(skin));
        let high_score: HighScore = load_json_or_default(&self.high_score_path(skin));
        ScoreBook {
            history,
            high_score,
        }
    }

    pub fn save(&self, skin: RunnerSkin, book: &ScoreBook) -> io::Result<()> {
        save_json(&self.history_path(skin), &book.history)?;
        save_json(&self.high_score_path(skin), &book.high_score)?;
        tracing::debug!(skin = skin.key(), runs = book.history.len(), "scores saved");
        Ok(())
    }

    /// Write the history to `exports/<Skin>_Score_History_<date>.json` and
    /// return the file's path.
    pub fn export_history(&self, skin: RunnerSkin, book: &ScoreBook) -> io::Result<PathBuf> {
        let date = chrono::Utc::now().format("%Y-%m-%d");
        let path = self
            .root
            .join("exports")
            .join(format!("{}_Score_History_{}.json", skin.label(), date));
        save_json(&path, &book.history)?;
        tracing::info!(path = %path.display(), "score history exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_store(name: &str) -> ScoreStore {
        let dir = std::env::temp_dir().join(format!("arcade_scores_{}_{}", name, std::process::id()));
        fs::remove_dir_all(&dir).ok();
        ScoreStore::at(dir)
    }

    fn record(distance: u32) -> ScoreRecord {
        ScoreRecord {
            distance,
            jumps: 3,
            max_height: 117.55,
            min_height: 0.0,
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn test_file_names_per_skin() {
        let store = ScoreStore::at("/tmp/x");
        assert!(store.high_score_path(RunnerSkin::Dino).ends_with("dino_high_score.json"));
        assert!(store.history_path(RunnerSkin::Bike).ends_with("bike_score_history.json"));
    }

    #[test]
    fn test_load_from_empty_dir_is_default() {
        let store = temp_store("empty");
        assert_eq!(store.load(RunnerSkin::Dino), ScoreBook::default());
    }

    #[test]
    fn test_save_load_roundtrip_keeps_skins_apart() {
        let store = temp_store("roundtrip");
        let mut book = ScoreBook::default();
        book.record(record(10), 10);
        book.record(record(25), 10);
        store.save(RunnerSkin::Dino, &book).unwrap();

        assert_eq!(store.load(RunnerSkin::Dino), book);
        assert_eq!(store.load(RunnerSkin::Bike), ScoreBook::default());

        fs::remove_dir_all(store.root()).ok();
    }

    #[test]
    fn test_saved_json_uses_camel_case_keys() {
        let store = temp_store("keys");
        let mut book = ScoreBook::default();
        book.record(record(10), 10);
        store.save(RunnerSkin::Bike, &book).unwrap();

        let json = fs::read_to_string(store.high_score_path(RunnerSkin::Bike)).unwrap();
        assert!(json.contains("\"maxHeight\""));

        fs::remove_dir_all(store.root()).ok();
    }

    #[test]
    fn test_export_history() {
        let store = temp_store("export");
        let mut book = ScoreBook::default();
        book.record(record(10), 10);
        let path = store.export_history(RunnerSkin::Bike, &book).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("Bike_Score_History_"));
        assert!(name.ends_with(".json"));
        assert!(path.parent().unwrap().ends_with("exports"));

        let exported: Vec<ScoreRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(exported, book.history);

        fs::remove_dir_all(store.root()).ok();
    }
}
