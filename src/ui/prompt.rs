//! Line-based input: the command parser and the fight prompt.

use std::io::{self, BufRead, Write};

use flycast::FightAction;
use flycast::FightInput;

/// One parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Cast(String),
    Location(String),
    Locations,
    Gear,
    DefaultGear,
    Rod(Vec<String>),
    Leader(Vec<String>),
    Fly(Vec<String>),
    Scout,
    Name(String),
    Stats,
    Board,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };
        let args = || -> Vec<String> { rest.split_whitespace().map(str::to_string).collect() };

        Some(match word.to_lowercase().as_str() {
            "cast" | "c" => Command::Cast(rest.to_string()),
            "location" | "loc" => Command::Location(rest.to_string()),
            "locations" => Command::Locations,
            "gear" if rest.eq_ignore_ascii_case("default") => Command::DefaultGear,
            "gear" => Command::Gear,
            "rod" => Command::Rod(args()),
            "leader" => Command::Leader(args()),
            // fly args are split on commas: pattern, category, size
            "fly" => Command::Fly(rest.split(',').map(|s| s.trim().to_string()).collect()),
            "scout" => Command::Scout,
            "name" => Command::Name(rest.to_string()),
            "stats" => Command::Stats,
            "board" | "leaderboard" => Command::Board,
            "reset" => Command::Reset,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        })
    }
}

pub const HELP: &str = "\
Commands:
  cast <a1..j10|auto>          cast at a cell (blank or auto picks water)
  location <name>              move; regenerates the water
  locations                    list known locations
  gear                         show current gear
  gear default                 starter gear
  rod <len> <weight> <material>
  leader <material> <tippet> <len>     e.g. leader fluoro 4X 9
  fly <pattern>, <category>, <size>    e.g. fly Copper John, Nymphs, 16
  scout                        run the fish finder
  name <name>                  change your name
  stats                        level, xp, and catches
  board                        top 10 leaderboard
  reset                        start over
  quit";

/// Asks the player for each fight move on the terminal.
pub struct PromptedFight<'a, R: BufRead> {
    input: &'a mut R,
}

impl<'a, R: BufRead> PromptedFight<'a, R> {
    pub fn new(input: &'a mut R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> FightInput for PromptedFight<'_, R> {
    fn next_action(&mut self, round: u8, species: &str) -> FightAction {
        loop {
            print!(
                "  Round {} vs the {}: [s]teady pressure, [g]ive line, [p]ull hard > ",
                round, species
            );
            io::stdout().flush().ok();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                // end of input: hold on and hope
                Ok(0) | Err(_) => return FightAction::SteadyPressure,
                Ok(_) => {}
            }
            if let Some(action) = FightAction::parse(&line) {
                return action;
            }
            println!("  Pick s, g, or p.");
        }
    }
}
