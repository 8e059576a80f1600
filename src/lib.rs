//! Flycast - Text-Driven Fly-Fishing Library
//!
//! Grid generation, fishing encounters, player progress, and the
//! leaderboard, exposed for the terminal front end and for testing.

pub mod config;
pub mod core;
pub mod fishing;
pub mod gear;
pub mod leaderboard;
pub mod location;
pub mod player;
pub mod session;
pub mod utils;

pub use config::GameConfig;
pub use core::rng::{RandomSource, RngSource, ScriptedSource};
pub use fishing::{
    CastTarget, CatchOutcome, EncounterResolver, FightAction, FightInput, FishEncounter,
    InvalidTarget,
};
pub use gear::{Fly, Leader, Loadout, Rod};
pub use leaderboard::{LeaderboardEntry, LeaderboardStore};
pub use location::{Archetype, Grid, Location};
pub use player::PlayerProgress;
pub use session::{CastReport, GameSession};
