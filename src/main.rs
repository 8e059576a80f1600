mod ui;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;

use flycast::core::constants::{DEFAULT_GRID_SIZE, LEADERBOARD_DISPLAY_LIMIT};
use flycast::gear::{select_fly, select_leader, select_rod};
use flycast::leaderboard::top;
use flycast::utils::build_info::version_line;
use flycast::{GameConfig, GameSession, LeaderboardStore, Location, RandomSource, RngSource};
use ui::fishing_scene::{render_catches, render_grid, render_leaderboard, render_status};
use ui::prompt::{Command, PromptedFight, HELP};

#[derive(Debug, Parser)]
#[command(name = "flycast", version)]
#[command(about = "Text-driven fly-fishing: build gear, pick water, cast, and fight fish")]
struct Args {
    /// Angler name shown on the leaderboard
    #[arg(long, default_value = "Angler")]
    name: String,

    /// Starting location
    #[arg(long, default_value = "Mountain Stream")]
    location: String,

    /// Grid side length (4-26)
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: usize,

    /// RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Leaderboard file (default: $FLYCAST_LEADERBOARD or ~/.flycast/leaderboard.json)
    #[arg(long)]
    leaderboard: Option<PathBuf>,
}

impl From<Args> for GameConfig {
    fn from(args: Args) -> Self {
        GameConfig {
            player_name: args.name,
            location: Location::from_name(&args.location),
            grid_size: args.grid_size,
            seed: args.seed,
            leaderboard_path: args.leaderboard,
        }
    }
}

fn parse_u8(arg: Option<&String>) -> Option<u8> {
    arg.and_then(|s| s.trim().trim_end_matches('\'').parse().ok())
}

fn show_board(store: &LeaderboardStore) {
    let board = store.load();
    println!("{}", render_leaderboard(top(&board, LEADERBOARD_DISPLAY_LIMIT)));
}

fn show_view<R: RandomSource>(session: &GameSession<R>) {
    println!();
    println!(
        "{}",
        render_status(session.location(), session.loadout(), session.progress())
    );
    println!();
    print!("{}", render_grid(session.grid()));
}

fn main() -> Result<()> {
    env_logger::init();

    let config: GameConfig = Args::parse().into();
    let store = config.leaderboard_store();
    let rng = RngSource::from_seed_or_entropy(config.seed);
    let mut session = GameSession::new(config, rng);

    println!("{}", "#".repeat(60));
    println!("Welcome to Flycast - fly fishing in your terminal");
    println!("{}", version_line().dark_grey());
    println!("{}", "#".repeat(60));
    println!("Leaderboard: {}", store.path().display());
    println!("Type 'help' for commands.");
    show_view(&session);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print!("\n{} > ", session.progress().name().to_string().cyan());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Cast(token) => {
                let mut fight = PromptedFight::new(&mut input);
                let report = session.cast_and_record(&token, &mut fight, &store);
                println!("{}", report.narrative);
                show_view(&session);
            }
            Command::Location(name) => {
                println!("{}", session.select_location(&name));
                show_view(&session);
            }
            Command::Locations => {
                for location in Location::KNOWN {
                    println!(
                        "  {:<16} {:<7} {}",
                        location.name(),
                        location.archetype().name(),
                        location.species().join(", ")
                    );
                }
            }
            Command::Gear => println!("{}", session.loadout()),
            Command::DefaultGear => println!("{}", session.equip_default_gear()),
            Command::Rod(args) => {
                let material = args.get(2).map(String::as_str).unwrap_or("");
                let selection = select_rod(parse_u8(args.first()), parse_u8(args.get(1)), material);
                println!("{}", session.equip_rod(selection));
            }
            Command::Leader(args) => {
                let material = args.first().map(String::as_str).unwrap_or("");
                let tippet = args.get(1).map(String::as_str).unwrap_or("");
                let selection = select_leader(material, tippet, parse_u8(args.get(2)));
                println!("{}", session.equip_leader(selection));
            }
            Command::Fly(args) => {
                let pattern = args.first().map(String::as_str).unwrap_or("");
                let category = args.get(1).map(String::as_str).unwrap_or("");
                let selection = select_fly(pattern, category, parse_u8(args.get(2)));
                println!("{}", session.equip_fly(selection));
            }
            Command::Scout => {
                println!("{}", session.scout_fish());
                show_view(&session);
            }
            Command::Name(name) => println!("{}", session.rename(&name)),
            Command::Stats => {
                show_view(&session);
                println!("{}", render_catches(session.progress()));
            }
            Command::Board => show_board(&store),
            Command::Reset => {
                println!("{}", session.reset());
                show_view(&session);
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Unknown(text) => {
                println!("Unknown command: {}. Type 'help' for commands.", text)
            }
        }
    }

    println!("Tight lines, {}!", session.progress().name());
    Ok(())
}
