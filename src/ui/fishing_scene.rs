//! Text rendering of the fishing view.
//!
//! Layout:
//! ```text
//!  Mountain Stream (stream)          Alex  Lv 0  140 XP  1 fish
//!
//!    FISH FINDER                OVERHEAD
//!     a b c d e f g h i j        a b c d e f g h i j
//!   1 # # # # ~ ~ ~ # # #      1 . . . . . . . . . .
//!   2 # # # ~ ~ ~ * # # #      2 . . . . . X . . . .
//! ```

use crossterm::style::{StyledContent, Stylize};
use flycast::leaderboard::LeaderboardEntry;
use flycast::location::{FishfinderCell, Grid, OverheadCell};
use flycast::player::PlayerProgress;
use flycast::{Loadout, Location};

fn finder_cell(cell: FishfinderCell) -> StyledContent<char> {
    match cell {
        FishfinderCell::Water => cell.symbol().blue(),
        FishfinderCell::Land => cell.symbol().dark_green(),
        FishfinderCell::FishPresent => cell.symbol().yellow().bold(),
    }
}

fn overhead_cell(cell: OverheadCell) -> StyledContent<char> {
    match cell {
        OverheadCell::Empty => cell.symbol().dark_grey(),
        OverheadCell::CastMarker => cell.symbol().red().bold(),
    }
}

fn column_header(size: usize) -> String {
    let letters: Vec<String> = (0..size)
        .map(|c| Grid::column_label(c).to_string())
        .collect();
    format!("    {}", letters.join(" "))
}

/// Both grid layers side by side.
pub fn render_grid(grid: &Grid) -> String {
    let size = grid.size();
    let width = size * 2 + 4;
    let mut out = String::new();

    out.push_str(&format!(
        "  {:<w$}  {}\n",
        "FISH FINDER",
        "OVERHEAD",
        w = width
    ));
    let header = column_header(size);
    out.push_str(&format!("{:<w$}  {}\n", header, header, w = width + 2));

    for (r, (finder_row, overhead_row)) in grid
        .fishfinder()
        .iter()
        .zip(grid.overhead())
        .enumerate()
    {
        let finder: Vec<String> = finder_row.iter().map(|c| finder_cell(*c).to_string()).collect();
        let overhead: Vec<String> = overhead_row
            .iter()
            .map(|c| overhead_cell(*c).to_string())
            .collect();
        // styled cells carry escape codes, so pad by hand
        out.push_str(&format!(
            "{:>3} {}{}{:>3} {}\n",
            r + 1,
            finder.join(" "),
            " ".repeat(4),
            r + 1,
            overhead.join(" ")
        ));
    }
    out
}

pub fn render_status(location: &Location, loadout: &Loadout, progress: &PlayerProgress) -> String {
    format!(
        "{} ({})   {}  Lv {}  {} XP ({} to next)  {} fish, best {}\"\nGear: {}",
        location.to_string().bold(),
        location.archetype().name(),
        progress.name().to_string().cyan(),
        progress.level(),
        progress.xp(),
        progress.xp_to_next_level(),
        progress.total_fish(),
        progress.best_size(),
        loadout
    )
}

pub fn render_catches(progress: &PlayerProgress) -> String {
    if progress.catch_record().is_empty() {
        return "No fish landed yet.".to_string();
    }
    progress
        .catch_record()
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:>3}. {}\" {}", i + 1, c.size_inches, c.species))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_leaderboard(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "The leaderboard is empty. Land a fish to get on it!".to_string();
    }
    let mut out = format!(
        "{:>3}  {:<20} {:>5} {:>5} {:>8}\n",
        "#", "Angler", "Fish", "Best", "XP"
    );
    for (i, e) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<20} {:>5} {:>4}\" {:>8}\n",
            i + 1,
            e.name,
            e.total_fish,
            e.best_size,
            e.xp
        ));
    }
    out
}
