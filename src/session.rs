//! A single player's game: location, grid, gear, and progress.
//!
//! The session is a plain value owned by the caller; front ends drive it
//! one command at a time and render what it returns.

use crate::config::GameConfig;
use crate::core::rng::RandomSource;
use crate::fishing::{
    CastTarget, CatchOutcome, EncounterResolver, FightInput, FishEncounter, InvalidTarget,
};
use crate::gear::{Fly, Leader, Loadout, Rod, Selection};
use crate::leaderboard::LeaderboardStore;
use crate::location::{generate_grid, scatter_fish, Grid, Location};
use crate::player::PlayerProgress;

/// What a cast produced, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastReport {
    pub narrative: String,
    pub encounter: Option<FishEncounter>,
    /// Set when the target was refused; nothing else changed.
    pub rejected: Option<InvalidTarget>,
    pub level_up: Option<u32>,
    /// Player state after the cast.
    pub progress: PlayerProgress,
}

impl CastReport {
    /// `None` for a refused cast.
    pub fn outcome(&self) -> Option<CatchOutcome> {
        if self.rejected.is_some() {
            return None;
        }
        Some(
            self.encounter
                .as_ref()
                .map_or(CatchOutcome::NoBite, |e| e.outcome),
        )
    }
}

pub struct GameSession<R> {
    config: GameConfig,
    rng: R,
    resolver: EncounterResolver,
    location: Location,
    grid: Grid,
    loadout: Loadout,
    progress: PlayerProgress,
}

impl<R: RandomSource> GameSession<R> {
    /// Starts at the configured location with starter gear and a fresh grid.
    pub fn new(config: GameConfig, mut rng: R) -> Self {
        let location = config.location.clone();
        let grid = generate_grid(location.archetype(), config.effective_grid_size(), &mut rng);
        let progress = PlayerProgress::new(config.player_name.clone());
        Self {
            config,
            rng,
            resolver: EncounterResolver::default(),
            location,
            grid,
            loadout: Loadout::default(),
            progress,
        }
    }

    /// Swaps in different encounter tunables.
    pub fn with_resolver(mut self, resolver: EncounterResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Throws away progress and gear and starts over at the configured
    /// location. The player keeps their current name.
    pub fn reset(&mut self) -> String {
        let name = self.progress.name().to_string();
        self.progress = PlayerProgress::new(name);
        self.loadout = Loadout::default();
        self.location = self.config.location.clone();
        self.regenerate();
        "New game started. Build gear, pick a location, and cast!".to_string()
    }

    pub fn rename(&mut self, name: &str) -> String {
        if self.progress.rename(name) {
            format!("Name set to: {}", self.progress.name())
        } else {
            "Name cannot be empty.".to_string()
        }
    }

    pub fn equip_default_gear(&mut self) -> String {
        self.loadout = Loadout::default();
        format!("Built default gear: {}.", self.loadout)
    }

    pub fn equip(&mut self, loadout: Loadout) {
        self.loadout = loadout;
    }

    pub fn equip_rod(&mut self, selection: Selection<Rod>) -> String {
        let message = describe_selection("Rod", &selection.value, &selection.notices);
        self.loadout.rod = selection.value;
        message
    }

    pub fn equip_leader(&mut self, selection: Selection<Leader>) -> String {
        let message = describe_selection("Leader", &selection.value, &selection.notices);
        self.loadout.leader = selection.value;
        message
    }

    pub fn equip_fly(&mut self, selection: Selection<Fly>) -> String {
        let message = describe_selection("Fly", &selection.value, &selection.notices);
        self.loadout.fly = selection.value;
        message
    }

    /// Moves to `name` and generates a new grid for it.
    pub fn select_location(&mut self, name: &str) -> String {
        let name = if name.trim().is_empty() {
            Location::MountainStream.name().to_string()
        } else {
            name.trim().to_string()
        };
        self.location = Location::from_name(&name);
        self.regenerate();
        format!("Location set to: {}.", self.location)
    }

    /// Runs the fish finder over the current grid.
    pub fn scout_fish(&mut self) -> String {
        match scatter_fish(&mut self.grid, &mut self.rng) {
            0 => "The fish finder shows nothing but rock.".to_string(),
            n => format!("The fish finder lights up {} fish.", n),
        }
    }

    /// Casts at `token` ("c4", "auto", or blank). A refused target comes back
    /// as narrative with `rejected` set.
    pub fn cast(&mut self, token: &str, fight: &mut impl FightInput) -> CastReport {
        let result = CastTarget::parse(token).and_then(|target| {
            self.resolver.resolve_cast(
                &mut self.grid,
                target,
                &self.loadout,
                &self.location,
                &mut self.progress,
                fight,
                &mut self.rng,
            )
        });

        match result {
            Ok(resolution) => CastReport {
                narrative: resolution.narrative(),
                encounter: resolution.encounter,
                rejected: None,
                level_up: resolution.level_up,
                progress: self.progress.clone(),
            },
            Err(rejection) => {
                log::debug!("cast refused: {rejection}");
                let narrative = format!("Cast refused: {rejection}.");
                CastReport {
                    narrative,
                    encounter: None,
                    rejected: Some(rejection),
                    level_up: None,
                    progress: self.progress.clone(),
                }
            }
        }
    }

    /// Casts, then updates the leaderboard if a fish was landed.
    pub fn cast_and_record(
        &mut self,
        token: &str,
        fight: &mut impl FightInput,
        store: &LeaderboardStore,
    ) -> CastReport {
        let before = self.progress.total_fish();
        let report = self.cast(token, fight);
        if self.progress.total_fish() > before {
            store.record(&self.progress);
        }
        report
    }

    fn regenerate(&mut self) {
        self.grid = generate_grid(
            self.location.archetype(),
            self.config.effective_grid_size(),
            &mut self.rng,
        );
    }
}

fn describe_selection<T: std::fmt::Display>(kind: &str, value: &T, notices: &[String]) -> String {
    let mut lines: Vec<String> = notices.to_vec();
    lines.push(format!("{} ready: {}.", kind, value));
    lines.join("\n")
}
