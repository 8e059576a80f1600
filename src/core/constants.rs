// Grid
pub const DEFAULT_GRID_SIZE: usize = 10;
pub const MIN_GRID_SIZE: usize = 4;
pub const MAX_GRID_SIZE: usize = 26; // one letter per column

// River banks (cells of land per side, per row)
pub const RIVER_BANK_MIN: usize = 1;
pub const RIVER_BANK_MAX: usize = 3;

// Lake shoreline: top and bottom rows roll land independently
pub const LAKE_SHORE_ROWS: usize = 2;
pub const LAKE_SHORE_LAND_CHANCE: f64 = 0.7;

// Stream channel
pub const STREAM_CHANNEL_MIN: usize = 3;
pub const STREAM_CHANNEL_MAX: usize = 5;

// Fish-finder overlay
pub const FISH_MARKERS_MIN: usize = 5;
pub const FISH_MARKERS_MAX: usize = 10;

// Encounters
pub const BITE_THRESHOLD: f64 = 0.70; // a bite needs a draw strictly above this
pub const FISH_SIZE_MIN: u32 = 6;
pub const FISH_SIZE_MAX: u32 = 24;
pub const LIGHT_ROD_WEIGHT: u8 = 3;
pub const LIGHT_ROD_TROUT_SIZE_CAP: u32 = 18;
pub const HEAVY_ROD_MIN_WEIGHT: u8 = 7;
pub const HEAVY_ROD_BASS_SIZE_FLOOR: u32 = 10;
pub const FIGHT_ROUNDS: u8 = 3;
pub const ROUNDS_TO_LAND: u8 = 2;
pub const XP_PER_INCH: u64 = 10;

// Progression
pub const XP_PER_LEVEL: u64 = 1000;

// Leaderboard
pub const LEADERBOARD_FILE: &str = "leaderboard.json";
pub const LEADERBOARD_ENV_VAR: &str = "FLYCAST_LEADERBOARD";
pub const LEADERBOARD_DISPLAY_LIMIT: usize = 10;
