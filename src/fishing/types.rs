//! Fishing encounter data structures.
//!
//! Everything here lives for a single cast. Only a landed fish outlives it,
//! folded into the player's catch record.

use thiserror::Error;

use crate::location::Grid;

/// Where a cast is aimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastTarget {
    /// Let the engine pick a water cell.
    Auto,
    At { row: usize, col: usize },
}

impl CastTarget {
    /// Parses a caller token: column letter then 1-based row ("c4", "J10").
    /// "auto" or a blank token means [`CastTarget::Auto`]. Bounds are not
    /// checked here; validation against the grid does that.
    pub fn parse(token: &str) -> Result<CastTarget, InvalidTarget> {
        let token = token.trim();
        if token.is_empty() || token.eq_ignore_ascii_case("auto") {
            return Ok(CastTarget::Auto);
        }

        let malformed = || InvalidTarget::Malformed {
            token: token.to_string(),
        };

        let mut chars = token.chars();
        let letter = chars.next().ok_or_else(malformed)?;
        if !letter.is_ascii_alphabetic() {
            return Err(malformed());
        }
        let col = (letter.to_ascii_lowercase() as u8 - b'a') as usize;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let row: usize = digits.parse().map_err(|_| malformed())?;
        if row == 0 {
            return Err(malformed());
        }

        Ok(CastTarget::At { row: row - 1, col })
    }
}

/// Why a cast was refused. The cast never happened, so nothing changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTarget {
    #[error("'{token}' is not a cast target; use a letter and a row number like c4, or auto")]
    Malformed { token: String },
    #[error("{} is off the map; targets run a1 to {}", label(.row, .col), corner_label(.size))]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("{} is dry land; cast into the water", label(.row, .col))]
    OnLand { row: usize, col: usize },
    #[error("there is no open water to cast into")]
    NoOpenWater,
}

fn label(row: &usize, col: &usize) -> String {
    Grid::coordinate_label(*row, *col)
}

fn corner_label(size: &usize) -> String {
    let last = size.saturating_sub(1);
    Grid::coordinate_label(last, last)
}

/// Moves available to both angler and fish during a fight round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FightAction {
    SteadyPressure,
    GiveLine,
    PullHard,
}

impl FightAction {
    pub const ALL: [FightAction; 3] = [
        FightAction::SteadyPressure,
        FightAction::GiveLine,
        FightAction::PullHard,
    ];

    /// The single fish move this player move wins against.
    pub fn defeats(&self) -> FightAction {
        match self {
            FightAction::SteadyPressure => FightAction::GiveLine,
            FightAction::GiveLine => FightAction::PullHard,
            FightAction::PullHard => FightAction::SteadyPressure,
        }
    }

    pub fn beats(&self, fish: FightAction) -> bool {
        self.defeats() == fish
    }

    /// Accepts "s"/"g"/"p" or the spelled-out move.
    pub fn parse(input: &str) -> Option<FightAction> {
        match input.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "s" | "steady" | "steady pressure" => Some(FightAction::SteadyPressure),
            "g" | "give" | "give line" => Some(FightAction::GiveLine),
            "p" | "pull" | "pull hard" => Some(FightAction::PullHard),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FightAction::SteadyPressure => "steady pressure",
            FightAction::GiveLine => "give line",
            FightAction::PullHard => "pull hard",
        }
    }

    fn as_player_move(&self) -> &'static str {
        match self {
            FightAction::SteadyPressure => "you keep steady pressure",
            FightAction::GiveLine => "you give line",
            FightAction::PullHard => "you pull hard",
        }
    }

    fn as_fish_move(&self) -> &'static str {
        match self {
            FightAction::SteadyPressure => "the fish holds steady",
            FightAction::GiveLine => "the fish runs for line",
            FightAction::PullHard => "the fish thrashes hard",
        }
    }
}

/// Supplies the angler's move for each fight round.
pub trait FightInput {
    fn next_action(&mut self, round: u8, species: &str) -> FightAction;
}

impl<F> FightInput for F
where
    F: FnMut(u8, &str) -> FightAction,
{
    fn next_action(&mut self, round: u8, species: &str) -> FightAction {
        self(round, species)
    }
}

/// Plays a fixed list of moves, repeating the last one if the fight runs long.
#[derive(Debug, Clone)]
pub struct ScriptedActions {
    actions: Vec<FightAction>,
    cursor: usize,
}

impl ScriptedActions {
    pub fn new(actions: impl IntoIterator<Item = FightAction>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            cursor: 0,
        }
    }
}

impl FightInput for ScriptedActions {
    fn next_action(&mut self, _round: u8, _species: &str) -> FightAction {
        let action = self
            .actions
            .get(self.cursor)
            .or_else(|| self.actions.last())
            .copied()
            .unwrap_or(FightAction::SteadyPressure);
        self.cursor += 1;
        action
    }
}

/// One exchange in a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FightRound {
    pub round: u8,
    pub player: FightAction,
    pub fish: FightAction,
    pub won: bool,
}

impl FightRound {
    pub fn describe(&self) -> String {
        format!(
            "Round {}: {}; {}. {}",
            self.round,
            self.player.as_player_move(),
            self.fish.as_fish_move(),
            if self.won {
                "You gain line."
            } else {
                "The fish gains ground."
            }
        )
    }
}

/// How a cast ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    NoBite,
    Landed,
    Escaped,
}

/// A hooked fish and how the fight went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FishEncounter {
    pub species: String,
    pub size_inches: u32,
    pub outcome: CatchOutcome,
    pub rounds: Vec<FightRound>,
}

impl FishEncounter {
    pub fn rounds_won(&self) -> u8 {
        self.rounds.iter().filter(|r| r.won).count() as u8
    }
}

/// Result of one valid cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastResolution {
    /// Validated cell the fly landed on.
    pub row: usize,
    pub col: usize,
    /// `None` when nothing bit.
    pub encounter: Option<FishEncounter>,
    /// Level reached if this cast levelled the player up.
    pub level_up: Option<u32>,
    pub messages: Vec<String>,
}

impl CastResolution {
    pub fn outcome(&self) -> CatchOutcome {
        self.encounter
            .as_ref()
            .map_or(CatchOutcome::NoBite, |e| e.outcome)
    }

    pub fn narrative(&self) -> String {
        self.messages.join("\n")
    }
}
