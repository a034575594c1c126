//! Terminal front-end for the maze crates.
//!
//! Generates a maze, picks or accepts two endpoints, solves, and prints the
//! grid with one coloured block per cell.

use std::error::Error;
use std::io::{self, Write};

use clap::{ArgAction, Parser};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use maze::{CellState, GenConfig, GridModel, Maze, MazeConfig, MazeError, PathRange, Point, Role};

#[derive(Parser, Debug)]
#[command(name = "maze-demo")]
#[command(author, version, about = "Generate a maze and print its shortest route")]
pub struct Cli {
    /// Side length of the square maze
    #[arg(short, long, default_value_t = 20)]
    pub size: usize,

    /// Seed for a reproducible maze
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell as ROW,COL (default: a cell of the largest open region)
    #[arg(long, value_parser = parse_cell)]
    pub start: Option<Point>,

    /// End cell as ROW,COL (default: the cell farthest from the start)
    #[arg(long, value_parser = parse_cell)]
    pub end: Option<Point>,

    /// Each open cell becomes a wall with probability 1/N
    #[arg(long, default_value_t = 5)]
    pub wall_one_in: u32,

    /// Also show the cells the search expanded
    #[arg(long)]
    pub explored: bool,

    /// Print glyphs instead of coloured blocks
    #[arg(long)]
    pub no_color: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> MazeConfig {
        MazeConfig {
            size: self.size,
            seed: self.seed,
            generator: GenConfig {
                wall_one_in: self.wall_one_in,
                ..GenConfig::default()
            },
            mark_explored: self.explored,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Parse `ROW,COL`.
pub fn parse_cell(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column: {e}"))?;
    Ok(Point::new(row, col))
}

/// Pick a start cell in the largest open region and an end cell as far
/// from it as possible. `None` if no two open cells are connected.
pub fn pick_endpoints(model: &GridModel, start: Option<Point>) -> Option<(Point, Point)> {
    let mut pr = PathRange::new(model.bounds());
    let start = match start {
        Some(p) => p,
        None => *pr.largest_region(model).first()?,
    };
    let end = pr.farthest(model, start)?.pos;
    Some((start, end))
}

fn cell_color(state: CellState) -> Color {
    match state {
        CellState::Wall => Color::Black,
        CellState::Path => Color::White,
        CellState::Visited => Color::Green,
        CellState::ShortestPath => Color::Red,
        CellState::Start => Color::Blue,
        CellState::End => Color::Yellow,
    }
}

/// Write the grid, one line per row.
pub fn render(model: &GridModel, color: bool, out: &mut impl Write) -> io::Result<()> {
    if !color {
        return write!(out, "{model}");
    }
    let size = model.size();
    for (i, (_, state)) in model.grid().iter().enumerate() {
        queue!(out, SetBackgroundColor(cell_color(state)), Print("  "))?;
        if (i + 1) % size == 0 {
            queue!(out, ResetColor, Print("\n"))?;
        }
    }
    out.flush()
}

pub fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut maze = Maze::new(cli.config());

    let (start, end) = match (cli.start, cli.end) {
        (Some(s), Some(e)) => (s, e),
        (start, end) => {
            let (s, far) =
                pick_endpoints(maze.model(), start).ok_or("the maze has no two connected open cells")?;
            (s, end.unwrap_or(far))
        }
    };
    log::debug!("endpoints {start} and {end}");
    maze.designate_point(start.row, start.col, Role::Start)?;
    maze.designate_point(end.row, end.col, Role::End)?;

    let outcome = maze.solve();

    let mut stdout = io::stdout().lock();
    render(maze.model(), !cli.no_color, &mut stdout)?;
    match outcome {
        Ok(report) => {
            writeln!(stdout, "Shortest path from {start} to {end}: {} steps", report.length)?;
            if cli.explored {
                writeln!(stdout, "Cells explored: {}", report.explored.len())?;
            }
        }
        Err(e @ MazeError::Unreachable { .. }) => writeln!(stdout, "{e}")?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cells() {
        assert_eq!(parse_cell("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_cell(" 1 , 12 "), Ok(Point::new(1, 12)));
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("a,1").is_err());
    }

    #[test]
    fn cli_maps_onto_config() {
        let cli = Cli::parse_from(["maze-demo", "--size", "9", "--seed", "4", "--explored", "-vv"]);
        let cfg = cli.config();
        assert_eq!(cfg.size, 9);
        assert_eq!(cfg.seed, Some(4));
        assert!(cfg.mark_explored);
        assert_eq!(cfg.generator, GenConfig::default());
        assert_eq!(cli.log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn picks_far_ends_of_largest_region() {
        let m = GridModel::parse(
            "
######
#.#..#
###..#
#....#
#....#
######",
        )
        .unwrap();
        let (start, end) = pick_endpoints(&m, None).unwrap();
        assert_eq!(start, Point::new(1, 3));
        assert_eq!(end, Point::new(4, 1));
        assert_eq!(pick_endpoints(&m, Some(Point::new(1, 1))), None);
    }

    #[test]
    fn plain_render_matches_display() {
        let m = GridModel::new(4);
        let mut out = Vec::new();
        render(&m, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), m.to_string());
    }

    #[test]
    fn colour_render_has_one_line_per_row() {
        let m = GridModel::new(5);
        let mut out = Vec::new();
        render(&m, true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\n').count(), 5);
    }
}
