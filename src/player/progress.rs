//! Catch record and level progression for one angler.

use crate::core::constants::XP_PER_LEVEL;

/// One landed fish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchRecord {
    pub species: String,
    pub size_inches: u32,
}

/// Progress for a single player.
///
/// Experience only grows, level is always `xp / 1000`, and the catch record
/// is append-only in the order fish were landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProgress {
    name: String,
    xp: u64,
    level: u32,
    catch_record: Vec<CatchRecord>,
}

impl PlayerProgress {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            xp: 0,
            level: 0,
            catch_record: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn catch_record(&self) -> &[CatchRecord] {
        &self.catch_record
    }

    pub fn total_fish(&self) -> u32 {
        self.catch_record.len() as u32
    }

    /// Largest fish ever landed, 0 with an empty record.
    pub fn best_size(&self) -> u32 {
        self.catch_record
            .iter()
            .map(|c| c.size_inches)
            .max()
            .unwrap_or(0)
    }

    /// Renames the player. Blank names are refused and leave the old one.
    pub fn rename(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.name = trimmed.to_string();
        true
    }

    /// Appends a catch. Identical catches are kept as separate entries.
    pub fn add_catch(&mut self, species: impl Into<String>, size_inches: u32) {
        self.catch_record.push(CatchRecord {
            species: species.into(),
            size_inches,
        });
    }

    /// Adds experience and recomputes the level.
    ///
    /// Returns the new level when this call crossed at least one level
    /// boundary, `None` otherwise.
    pub fn add_xp(&mut self, amount: u64) -> Option<u32> {
        self.xp = self.xp.saturating_add(amount);
        let previous = self.level;
        let recomputed = level_for_xp(self.xp);
        if recomputed > previous {
            self.level = recomputed;
            log::info!("{} reached level {}", self.name, recomputed);
            Some(recomputed)
        } else {
            None
        }
    }

    /// Experience still needed to reach the next level.
    pub fn xp_to_next_level(&self) -> u64 {
        (self.level as u64 + 1) * XP_PER_LEVEL - self.xp
    }
}

pub fn level_for_xp(xp: u64) -> u32 {
    (xp / XP_PER_LEVEL).min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_at_zero() {
        let p = PlayerProgress::new("Alex");
        assert_eq!(p.name(), "Alex");
        assert_eq!(p.xp(), 0);
        assert_eq!(p.level(), 0);
        assert_eq!(p.total_fish(), 0);
        assert_eq!(p.best_size(), 0);
    }

    #[test]
    fn test_add_catch_preserves_order_and_duplicates() {
        let mut p = PlayerProgress::new("Alex");
        p.add_catch("Brown Trout", 14);
        p.add_catch("Brook Trout", 9);
        p.add_catch("Brown Trout", 14);
        let species: Vec<&str> = p.catch_record().iter().map(|c| c.species.as_str()).collect();
        assert_eq!(species, vec!["Brown Trout", "Brook Trout", "Brown Trout"]);
        assert_eq!(p.total_fish(), 3);
        assert_eq!(p.best_size(), 14);
    }

    #[test]
    fn test_add_xp_zero_never_changes_level() {
        let mut p = PlayerProgress::new("Alex");
        p.add_xp(999);
        assert_eq!(p.add_xp(0), None);
        assert_eq!(p.level(), 0);
        p.add_xp(1);
        assert_eq!(p.level(), 1);
        assert_eq!(p.add_xp(0), None);
        assert_eq!(p.level(), 1);
    }

    #[test]
    fn test_level_tracks_xp_after_every_call() {
        let mut p = PlayerProgress::new("Alex");
        for amount in [60, 240, 0, 700, 1, 2500, 30, 0, 9999] {
            p.add_xp(amount);
            assert_eq!(p.level() as u64, p.xp() / 1000);
        }
    }

    #[test]
    fn test_level_up_notification_only_on_increase() {
        let mut p = PlayerProgress::new("Alex");
        assert_eq!(p.add_xp(500), None);
        assert_eq!(p.add_xp(500), Some(1));
        assert_eq!(p.add_xp(100), None);
        // skipping levels reports the level reached
        assert_eq!(p.add_xp(3000), Some(4));
    }

    #[test]
    fn test_xp_to_next_level() {
        let mut p = PlayerProgress::new("Alex");
        assert_eq!(p.xp_to_next_level(), 1000);
        p.add_xp(1250);
        assert_eq!(p.xp_to_next_level(), 750);
    }

    #[test]
    fn test_rename_rejects_blank() {
        let mut p = PlayerProgress::new("Alex");
        assert!(!p.rename("   "));
        assert_eq!(p.name(), "Alex");
        assert!(p.rename("  Sam "));
        assert_eq!(p.name(), "Sam");
    }
}
