//! Cast resolution.
//!
//! A cast runs in a fixed order: validate the target, roll for a bite, roll
//! species and size, fight, then decide the catch. Only a landed fish
//! touches the player's progress.

use super::generation::{roll_bite, roll_fish_action, roll_size, roll_species};
use super::types::{
    CastResolution, CastTarget, CatchOutcome, FightInput, FightRound, FishEncounter,
    InvalidTarget,
};
use crate::core::constants::{BITE_THRESHOLD, FIGHT_ROUNDS, ROUNDS_TO_LAND, XP_PER_INCH};
use crate::core::rng::RandomSource;
use crate::gear::Loadout;
use crate::location::{Grid, Location};
use crate::player::PlayerProgress;

/// Tunables for the encounter engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterResolver {
    /// A unit draw must exceed this for a bite.
    pub bite_threshold: f64,
    pub fight_rounds: u8,
    /// Rounds the angler must win to land the fish.
    pub rounds_to_land: u8,
    pub xp_per_inch: u64,
}

impl Default for EncounterResolver {
    fn default() -> Self {
        Self {
            bite_threshold: BITE_THRESHOLD,
            fight_rounds: FIGHT_ROUNDS,
            rounds_to_land: ROUNDS_TO_LAND,
            xp_per_inch: XP_PER_INCH,
        }
    }
}

/// Checks a target against the fish-finder layer and resolves `Auto` to a
/// random water cell.
pub fn validate_target(
    grid: &Grid,
    target: CastTarget,
    rng: &mut impl RandomSource,
) -> Result<(usize, usize), InvalidTarget> {
    match target {
        CastTarget::Auto => {
            let water = grid.water_cells();
            if water.is_empty() {
                return Err(InvalidTarget::NoOpenWater);
            }
            Ok(water[rng.index(water.len())])
        }
        CastTarget::At { row, col } => {
            if !grid.in_bounds(row, col) {
                return Err(InvalidTarget::OutOfBounds {
                    row,
                    col,
                    size: grid.size(),
                });
            }
            match grid.fishfinder_at(row, col) {
                Some(cell) if cell.is_water() => Ok((row, col)),
                _ => Err(InvalidTarget::OnLand { row, col }),
            }
        }
    }
}

impl EncounterResolver {
    /// Resolves one cast.
    ///
    /// On a valid target the overhead layer gets the cast marker whatever
    /// happens next. `loadout.leader` and `loadout.fly` only colour the
    /// narrative; the rod is the only piece that changes the odds.
    #[allow(clippy::too_many_arguments)]
    pub fn resolve_cast(
        &self,
        grid: &mut Grid,
        target: CastTarget,
        loadout: &Loadout,
        location: &Location,
        progress: &mut PlayerProgress,
        fight: &mut impl FightInput,
        rng: &mut impl RandomSource,
    ) -> Result<CastResolution, InvalidTarget> {
        let (row, col) = validate_target(grid, target, rng)?;
        grid.mark_cast(row, col);

        let mut messages = vec![format!(
            "You cast your {} to {} at {}.",
            loadout.fly.pattern,
            Grid::coordinate_label(row, col),
            location
        )];

        if !roll_bite(self.bite_threshold, rng) {
            messages.push("The fly drifts through untouched. No bite this time.".to_string());
            return Ok(CastResolution {
                row,
                col,
                encounter: None,
                level_up: None,
                messages,
            });
        }

        let species = roll_species(location, rng);
        let size_inches = roll_size(&loadout.rod, species, rng);
        messages.push(format!(
            "Fish on! A {} takes the {} on your {} tippet.",
            species, loadout.fly.pattern, loadout.leader.tippet
        ));

        let rounds = self.fight(species, fight, rng);
        messages.extend(rounds.iter().map(FightRound::describe));
        let rounds_won = rounds.iter().filter(|r| r.won).count() as u8;

        let mut level_up = None;
        let outcome = if rounds_won >= self.rounds_to_land {
            let xp = size_inches as u64 * self.xp_per_inch;
            progress.add_catch(species, size_inches);
            level_up = progress.add_xp(xp);

            log::info!(
                "{} landed a {}\" {} (+{} xp)",
                progress.name(),
                size_inches,
                species,
                xp
            );
            messages.push(format!(
                "You landed a {}\" {}! +{} XP",
                size_inches, species, xp
            ));
            if let Some(level) = level_up {
                messages.push(format!("Level up! You are now level {}.", level));
            }
            CatchOutcome::Landed
        } else {
            log::debug!(
                "{} escaped after {}/{} rounds",
                species,
                rounds_won,
                self.fight_rounds
            );
            messages.push(format!(
                "The {} throws the hook and escapes ({} of {} rounds won).",
                species, rounds_won, self.fight_rounds
            ));
            CatchOutcome::Escaped
        };

        Ok(CastResolution {
            row,
            col,
            encounter: Some(FishEncounter {
                species: species.to_string(),
                size_inches,
                outcome,
                rounds,
            }),
            level_up,
            messages,
        })
    }

    /// Plays every round; the angler moves first, the fish draws blind.
    fn fight(
        &self,
        species: &str,
        input: &mut impl FightInput,
        rng: &mut impl RandomSource,
    ) -> Vec<FightRound> {
        (1..=self.fight_rounds)
            .map(|round| {
                let player = input.next_action(round, species);
                let fish = roll_fish_action(rng);
                let won = player.beats(fish);
                log::debug!(
                    "round {}: player {} vs fish {} -> {}",
                    round,
                    player.name(),
                    fish.name(),
                    if won { "won" } else { "lost" }
                );
                FightRound {
                    round,
                    player,
                    fish,
                    won,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{pick, pick_in_range, ScriptedSource};
    use crate::fishing::types::{FightAction, ScriptedActions};
    use crate::location::{FishfinderCell, OverheadCell};

    /// Draw that makes the fish choose `action`.
    fn fish_move(action: FightAction) -> f64 {
        let idx = FightAction::ALL.iter().position(|a| *a == action).unwrap();
        pick(idx, 3)
    }

    fn lake_grid() -> Grid {
        let mut grid = Grid::open_water(10);
        for col in 0..10 {
            grid.set_fishfinder(0, col, FishfinderCell::Land);
        }
        grid
    }

    fn steady_x3() -> ScriptedActions {
        ScriptedActions::new([FightAction::SteadyPressure; 3])
    }

    #[test]
    fn test_cast_on_land_is_rejected_without_mutation() {
        let mut grid = lake_grid();
        let mut progress = PlayerProgress::new("Alex");
        let mut rng = ScriptedSource::new([0.99]);
        let before = progress.clone();

        let result = EncounterResolver::default().resolve_cast(
            &mut grid,
            CastTarget::At { row: 0, col: 4 },
            &Loadout::default(),
            &Location::MountainStream,
            &mut progress,
            &mut steady_x3(),
            &mut rng,
        );

        assert_eq!(result, Err(InvalidTarget::OnLand { row: 0, col: 4 }));
        assert_eq!(progress, before);
        assert_eq!(grid.cast_marker(), None);
        // no draws consumed
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_cast_out_of_bounds_is_rejected() {
        let mut grid = lake_grid();
        let mut progress = PlayerProgress::new("Alex");
        let result = EncounterResolver::default().resolve_cast(
            &mut grid,
            CastTarget::At { row: 10, col: 2 },
            &Loadout::default(),
            &Location::MountainStream,
            &mut progress,
            &mut steady_x3(),
            &mut ScriptedSource::new([0.99]),
        );
        assert_eq!(
            result,
            Err(InvalidTarget::OutOfBounds {
                row: 10,
                col: 2,
                size: 10
            })
        );
    }

    #[test]
    fn test_low_draw_means_no_bite() {
        for draw in [0.0, 0.35, 0.70] {
            let mut grid = lake_grid();
            let mut progress = PlayerProgress::new("Alex");
            let resolution = EncounterResolver::default()
                .resolve_cast(
                    &mut grid,
                    CastTarget::At { row: 5, col: 5 },
                    &Loadout::default(),
                    &Location::MountainStream,
                    &mut progress,
                    &mut steady_x3(),
                    &mut ScriptedSource::new([draw]),
                )
                .unwrap();
            assert_eq!(resolution.outcome(), CatchOutcome::NoBite);
            assert_eq!(progress.total_fish(), 0);
            assert_eq!(progress.xp(), 0);
            // the cast still shows on the overhead view
            assert_eq!(grid.overhead_at(5, 5), Some(OverheadCell::CastMarker));
        }
    }

    #[test]
    fn test_two_round_wins_land_the_fish() {
        let mut grid = lake_grid();
        let mut progress = PlayerProgress::new("Alex");
        // bite, Brown Trout (index 1 of 4), 14", fish: give, give, pull
        let mut rng = ScriptedSource::new([
            0.9,
            pick(1, 4),
            pick_in_range(14, 6, 24),
            fish_move(FightAction::GiveLine),
            fish_move(FightAction::GiveLine),
            fish_move(FightAction::PullHard),
        ]);

        let resolution = EncounterResolver::default()
            .resolve_cast(
                &mut grid,
                CastTarget::At { row: 3, col: 2 },
                &Loadout::default(),
                &Location::MountainStream,
                &mut progress,
                &mut steady_x3(),
                &mut rng,
            )
            .unwrap();

        let encounter = resolution.encounter.as_ref().unwrap();
        assert_eq!(encounter.species, "Brown Trout");
        assert_eq!(encounter.size_inches, 14);
        assert_eq!(encounter.outcome, CatchOutcome::Landed);
        assert_eq!(encounter.rounds_won(), 2);
        assert_eq!(progress.total_fish(), 1);
        assert_eq!(progress.xp(), 140);
        assert_eq!(resolution.level_up, None);
        assert!(resolution.narrative().contains("You landed a 14\" Brown Trout! +140 XP"));
    }

    #[test]
    fn test_one_round_win_lets_fish_escape() {
        let mut grid = lake_grid();
        let mut progress = PlayerProgress::new("Alex");
        // fish: give (win), steady (tie), pull (loss)
        let mut rng = ScriptedSource::new([
            0.9,
            pick(0, 4),
            pick_in_range(20, 6, 24),
            fish_move(FightAction::GiveLine),
            fish_move(FightAction::SteadyPressure),
            fish_move(FightAction::PullHard),
        ]);

        let resolution = EncounterResolver::default()
            .resolve_cast(
                &mut grid,
                CastTarget::At { row: 3, col: 2 },
                &Loadout::default(),
                &Location::MountainStream,
                &mut progress,
                &mut steady_x3(),
                &mut rng,
            )
            .unwrap();

        assert_eq!(resolution.outcome(), CatchOutcome::Escaped);
        assert_eq!(resolution.encounter.unwrap().rounds_won(), 1);
        assert_eq!(progress.total_fish(), 0);
        assert_eq!(progress.xp(), 0);
    }

    #[test]
    fn test_fight_asks_for_three_moves_in_order() {
        let mut grid = lake_grid();
        let mut progress = PlayerProgress::new("Alex");
        let mut rounds_asked = Vec::new();
        let mut input = |round: u8, species: &str| {
            rounds_asked.push((round, species.to_string()));
            FightAction::PullHard
        };
        let mut rng = ScriptedSource::new([
            0.9,
            pick(2, 4),
            0.0,
            fish_move(FightAction::SteadyPressure),
            fish_move(FightAction::SteadyPressure),
            fish_move(FightAction::SteadyPressure),
        ]);

        let resolution = EncounterResolver::default()
            .resolve_cast(
                &mut grid,
                CastTarget::At { row: 9, col: 9 },
                &Loadout::default(),
                &Location::MountainStream,
                &mut progress,
                &mut input,
                &mut rng,
            )
            .unwrap();

        assert_eq!(
            rounds_asked,
            vec![
                (1, "Rainbow Trout".to_string()),
                (2, "Rainbow Trout".to_string()),
                (3, "Rainbow Trout".to_string()),
            ]
        );
        assert_eq!(resolution.outcome(), CatchOutcome::Landed);
        assert_eq!(progress.xp(), 60);
    }

    #[test]
    fn test_landing_across_level_boundary_reports_level_up() {
        let mut grid = lake_grid();
        let mut progress = PlayerProgress::new("Alex");
        progress.add_xp(900);
        let mut rng = ScriptedSource::new([
            0.9,
            pick(0, 4),
            pick_in_range(24, 6, 24),
            fish_move(FightAction::GiveLine),
            fish_move(FightAction::GiveLine),
            fish_move(FightAction::GiveLine),
        ]);

        let resolution = EncounterResolver::default()
            .resolve_cast(
                &mut grid,
                CastTarget::At { row: 4, col: 4 },
                &Loadout::default(),
                &Location::MountainStream,
                &mut progress,
                &mut steady_x3(),
                &mut rng,
            )
            .unwrap();

        assert_eq!(resolution.level_up, Some(1));
        assert_eq!(progress.xp(), 1140);
        assert!(resolution.narrative().contains("Level up!"));
    }

    #[test]
    fn test_auto_target_lands_on_water() {
        let mut grid = lake_grid();
        let mut progress = PlayerProgress::new("Alex");
        // first draw picks the cell, second is no bite
        let mut rng = ScriptedSource::new([0.0, 0.1]);
        let resolution = EncounterResolver::default()
            .resolve_cast(
                &mut grid,
                CastTarget::Auto,
                &Loadout::default(),
                &Location::AlpineLake,
                &mut progress,
                &mut steady_x3(),
                &mut rng,
            )
            .unwrap();
        // row 0 is land, so the first water cell is a2
        assert_eq!((resolution.row, resolution.col), (1, 0));
        assert_eq!(grid.cast_marker(), Some((1, 0)));
    }

    #[test]
    fn test_auto_target_without_water_is_rejected() {
        let mut grid = Grid::open_water(4);
        for r in 0..4 {
            for c in 0..4 {
                grid.set_fishfinder(r, c, FishfinderCell::Land);
            }
        }
        let mut progress = PlayerProgress::new("Alex");
        let result = EncounterResolver::default().resolve_cast(
            &mut grid,
            CastTarget::Auto,
            &Loadout::default(),
            &Location::RiverBend,
            &mut progress,
            &mut steady_x3(),
            &mut ScriptedSource::new([0.9]),
        );
        assert_eq!(result, Err(InvalidTarget::NoOpenWater));
    }

    #[test]
    fn test_fish_present_cells_are_castable() {
        let mut grid = lake_grid();
        grid.set_fishfinder(6, 6, FishfinderCell::FishPresent);
        assert_eq!(
            validate_target(
                &grid,
                CastTarget::At { row: 6, col: 6 },
                &mut ScriptedSource::new([0.0])
            ),
            Ok((6, 6))
        );
    }

    #[test]
    fn test_unknown_location_hooks_generic_fish() {
        let mut grid = lake_grid();
        let mut progress = PlayerProgress::new("Alex");
        let mut rng = ScriptedSource::new([
            0.9,
            0.5,
            pick_in_range(8, 6, 24),
            fish_move(FightAction::GiveLine),
            fish_move(FightAction::GiveLine),
            fish_move(FightAction::GiveLine),
        ]);
        let resolution = EncounterResolver::default()
            .resolve_cast(
                &mut grid,
                CastTarget::At { row: 2, col: 2 },
                &Loadout::default(),
                &Location::from_name("Drainage Ditch"),
                &mut progress,
                &mut steady_x3(),
                &mut rng,
            )
            .unwrap();
        assert_eq!(resolution.encounter.unwrap().species, "Generic Fish");
        assert_eq!(progress.catch_record()[0].size_inches, 8);
    }
}
