//! JSON-backed leaderboard file.
//!
//! The whole list is read, merged, and written back in one go. Storage
//! problems never reach the game: a bad read is an empty board and a bad
//! write is logged and dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::ranking::{merge, LeaderboardEntry};
use crate::player::PlayerProgress;
use crate::utils::persistence;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("leaderboard file {path} is not a valid entry list: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in `~/.flycast/leaderboard.json`.
    pub fn in_home_dir() -> io::Result<Self> {
        Ok(Self::new(persistence::save_path(
            crate::core::constants::LEADERBOARD_FILE,
        )?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full list. Missing, unreadable, or malformed files all
    /// come back as an empty board.
    pub fn load(&self) -> Vec<LeaderboardEntry> {
        if !self.path.exists() {
            log::debug!("no leaderboard at {}, starting empty", self.path.display());
            return Vec::new();
        }
        match self.try_load() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("{e}; treating leaderboard as empty");
                Vec::new()
            }
        }
    }

    /// Writes the full list, dropping any failure.
    pub fn save(&self, entries: &[LeaderboardEntry]) {
        if let Err(e) = self.try_save(entries) {
            log::warn!("{e}; leaderboard update dropped");
        }
    }

    /// Load, merge `player`, save. Returns the merged board even when the
    /// write failed.
    pub fn record(&self, player: &PlayerProgress) -> Vec<LeaderboardEntry> {
        let entries = merge(self.load(), player);
        self.save(&entries);
        entries
    }

    fn try_load(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let json = fs::read_to_string(&self.path).map_err(|source| LeaderboardError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| LeaderboardError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn try_save(&self, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        let io_err = |source| LeaderboardError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(entries).map_err(|source| {
            LeaderboardError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn temp_store() -> LeaderboardStore {
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "flycast-store-test-{}-{}",
            std::process::id(),
            id
        ));
        fs::create_dir_all(&dir).unwrap();
        LeaderboardStore::new(dir.join("leaderboard.json"))
    }

    fn cleanup(store: &LeaderboardStore) {
        if let Some(dir) = store.path().parent() {
            fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let store = temp_store();
        assert!(store.load().is_empty());
        cleanup(&store);
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let store = temp_store();
        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_empty());

        // valid JSON, wrong shape
        fs::write(store.path(), r#"{"name": "Alex"}"#).unwrap();
        assert!(store.load().is_empty());
        cleanup(&store);
    }

    #[test]
    fn test_incomplete_row_does_not_cost_other_players() {
        let store = temp_store();
        fs::write(
            store.path(),
            r#"[{"name": "Sam", "total_fish": 5, "best_size": 20, "xp": 900},
                {"total_fish": 1}]"#,
        )
        .unwrap();
        let mut alex = PlayerProgress::new("Alex");
        alex.add_catch("Brown Trout", 14);
        alex.add_xp(140);

        store.record(&alex);

        let names: Vec<String> = store.load().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["Sam", "Alex", ""]);
        let sam = &store.load()[0];
        assert_eq!(sam.rank_key(), (5, 20, 900));
        cleanup(&store);
    }

    #[test]
    fn test_record_persists_merged_board() {
        let store = temp_store();
        let mut alex = PlayerProgress::new("Alex");
        alex.add_catch("Brown Trout", 14);
        alex.add_xp(140);

        let board = store.record(&alex);
        assert_eq!(board.len(), 1);

        let reloaded = store.load();
        assert_eq!(reloaded, board);
        assert_eq!(reloaded[0].rank_key(), (1, 14, 140));
        cleanup(&store);
    }

    #[test]
    fn test_record_updates_existing_player() {
        let store = temp_store();
        let mut alex = PlayerProgress::new("Alex");
        alex.add_catch("Brown Trout", 14);
        alex.add_xp(140);
        store.record(&alex);

        let mut sam = PlayerProgress::new("Sam");
        sam.add_catch("Striped Bass", 20);
        sam.add_xp(200);
        store.record(&sam);

        alex.add_catch("Brook Trout", 10);
        alex.add_xp(100);
        let board = store.record(&alex);

        assert_eq!(board.len(), 2);
        assert_eq!(board[0].name, "Alex");
        assert_eq!(board[0].rank_key(), (2, 14, 240));
        assert_eq!(store.load(), board);
        cleanup(&store);
    }

    #[test]
    fn test_unwritable_store_still_returns_board() {
        let store = temp_store();
        // a directory where the file should be makes every write fail
        fs::create_dir_all(store.path()).unwrap();

        let mut alex = PlayerProgress::new("Alex");
        alex.add_catch("Brown Trout", 14);
        let board = store.record(&alex);
        assert_eq!(board.len(), 1);
        assert!(store.load().is_empty());
        cleanup(&store);
    }
}
