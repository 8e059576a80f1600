//! Session configuration.

use std::path::PathBuf;

use crate::core::constants::{DEFAULT_GRID_SIZE, LEADERBOARD_ENV_VAR, LEADERBOARD_FILE};
use crate::leaderboard::LeaderboardStore;
use crate::location::{clamp_size, Location};

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Name the player starts with
    pub player_name: String,

    /// Location selected at start and after a reset
    pub location: Location,

    /// Grid side length (clamped to 4-26)
    pub grid_size: usize,

    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,

    /// Leaderboard file; None means the environment override or ~/.flycast/
    pub leaderboard_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Angler".to_string(),
            location: Location::MountainStream,
            grid_size: DEFAULT_GRID_SIZE,
            seed: None,
            leaderboard_path: None,
        }
    }
}

impl GameConfig {
    /// Grid size after clamping to the supported range.
    pub fn effective_grid_size(&self) -> usize {
        clamp_size(self.grid_size)
    }

    /// Picks the leaderboard file: explicit path, then `FLYCAST_LEADERBOARD`,
    /// then `~/.flycast/leaderboard.json`, and finally `leaderboard.json` in
    /// the working directory when no home directory is available.
    pub fn leaderboard_store(&self) -> LeaderboardStore {
        if let Some(path) = &self.leaderboard_path {
            return LeaderboardStore::new(path.clone());
        }
        if let Some(path) = std::env::var_os(LEADERBOARD_ENV_VAR).filter(|p| !p.is_empty()) {
            return LeaderboardStore::new(PathBuf::from(path));
        }
        LeaderboardStore::in_home_dir().unwrap_or_else(|e| {
            log::warn!("{e}; keeping the leaderboard in the working directory");
            LeaderboardStore::new(LEADERBOARD_FILE)
        })
    }
}
