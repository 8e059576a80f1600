//! Fish rolls: bites, species, sizes, and fish fight moves.

use super::types::FightAction;
use crate::core::constants::{
    FISH_SIZE_MAX, FISH_SIZE_MIN, HEAVY_ROD_BASS_SIZE_FLOOR, HEAVY_ROD_MIN_WEIGHT,
    LIGHT_ROD_TROUT_SIZE_CAP, LIGHT_ROD_WEIGHT,
};
use crate::core::rng::RandomSource;
use crate::gear::Rod;
use crate::location::Location;

/// One unit draw; a fish bites when it lands strictly above `threshold`.
pub fn roll_bite(threshold: f64, rng: &mut impl RandomSource) -> bool {
    rng.unit() > threshold
}

/// Uniform pick from the location's species table.
pub fn roll_species(location: &Location, rng: &mut impl RandomSource) -> &'static str {
    let table = location.species();
    table[rng.index(table.len())]
}

/// Inclusive size range in inches for `species` on `rod`.
///
/// - 3-weight rods can't hold trout above 18"
/// - 7-weight and heavier rods don't bother with bass under 10"
pub fn size_bounds(rod: &Rod, species: &str) -> (u32, u32) {
    let mut min = FISH_SIZE_MIN;
    let mut max = FISH_SIZE_MAX;

    if rod.weight_class == LIGHT_ROD_WEIGHT && species.contains("Trout") {
        max = max.min(LIGHT_ROD_TROUT_SIZE_CAP);
    }
    if rod.weight_class >= HEAVY_ROD_MIN_WEIGHT && species.contains("Bass") {
        min = min.max(HEAVY_ROD_BASS_SIZE_FLOOR);
    }

    (min, max)
}

pub fn roll_size(rod: &Rod, species: &str, rng: &mut impl RandomSource) -> u32 {
    let (min, max) = size_bounds(rod, species);
    rng.range_inclusive(min, max)
}

/// The fish picks its move without looking at the angler's.
pub fn roll_fish_action(rng: &mut impl RandomSource) -> FightAction {
    FightAction::ALL[rng.index(FightAction::ALL.len())]
}
