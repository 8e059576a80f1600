//! Leaderboard merge and ordering.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::player::PlayerProgress;

/// One row per player name.
///
/// Missing fields deserialize as empty or 0, so one incomplete row in a
/// hand-edited or older file never costs the rest of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total_fish: u32,
    #[serde(default)]
    pub best_size: u32,
    #[serde(default)]
    pub xp: u64,
    #[serde(default)]
    pub last_updated: String,
}

impl LeaderboardEntry {
    /// Ranking key, compared descending.
    pub fn rank_key(&self) -> (u32, u32, u64) {
        (self.total_fish, self.best_size, self.xp)
    }
}

/// UTC timestamp in the stored form, e.g. `2026-10-16T09:30:00.123456Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Merges `player` into `entries` stamped with the current time.
pub fn merge(entries: Vec<LeaderboardEntry>, player: &PlayerProgress) -> Vec<LeaderboardEntry> {
    merge_at(entries, player, Utc::now())
}

/// Merges `player` into `entries` and re-sorts.
///
/// The first entry with the player's exact name is overwritten; otherwise a
/// new entry is appended. The list is then stably sorted by fish caught,
/// best size, and xp, all descending. Nothing is ever dropped.
pub fn merge_at(
    mut entries: Vec<LeaderboardEntry>,
    player: &PlayerProgress,
    now: DateTime<Utc>,
) -> Vec<LeaderboardEntry> {
    let total_fish = player.total_fish();
    let best_size = player.best_size();
    let xp = player.xp();
    let last_updated = format_timestamp(now);

    match entries.iter_mut().find(|e| e.name == player.name()) {
        Some(existing) => {
            existing.total_fish = total_fish;
            existing.best_size = best_size;
            existing.xp = xp;
            existing.last_updated = last_updated;
        }
        None => entries.push(LeaderboardEntry {
            name: player.name().to_string(),
            total_fish,
            best_size,
            xp,
            last_updated,
        }),
    }

    sort_entries(&mut entries);
    entries
}

/// Stable descending sort on [`LeaderboardEntry::rank_key`]; ties keep
/// their current order.
pub fn sort_entries(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
}

/// The leading `n` entries.
pub fn top(entries: &[LeaderboardEntry], n: usize) -> &[LeaderboardEntry] {
    &entries[..n.min(entries.len())]
}
