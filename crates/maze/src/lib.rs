//! **maze**: generate a grid maze and find shortest routes through it.
//!
//! This is the surface a presentation layer talks to. It re-exports the
//! model, generator and solver types and offers two ways in:
//!
//! - free functions ([`generate_maze`], [`designate_point`], [`solve`],
//!   [`reset`]) working on a caller-owned [`GridModel`];
//! - the [`Maze`] session, which also owns the generator and guards
//!   against overlapping solves.
//!
//! ```
//! use maze::{Maze, MazeConfig, Role};
//!
//! let mut maze = Maze::new(MazeConfig { size: 9, seed: Some(1), ..Default::default() });
//! let open: Vec<_> = maze
//!     .model()
//!     .grid()
//!     .iter()
//!     .filter(|&(_, c)| c == maze::CellState::Path)
//!     .map(|(p, _)| p)
//!     .collect();
//! maze.designate_point(open[0].row, open[0].col, Role::Start).unwrap();
//! maze.designate_point(open[1].row, open[1].col, Role::End).unwrap();
//! match maze.solve() {
//!     Ok(report) => assert_eq!(report.path.len(), report.length + 1),
//!     Err(e) => println!("{e}"),
//! }
//! ```

pub mod config;
pub mod session;

pub use config::MazeConfig;
pub use maze_core::{CellState, Grid, GridModel, LayoutError, MazeError, Point, Range, RejectReason, Role};
pub use maze_gen::{GenConfig, GenStats, MazeGen, generate_maze};
pub use maze_paths::{PathRange, SolveOptions, SolveReport, solve_between};
pub use session::{FinishedSolve, Maze, SolveJob};

/// Assign `role` to the cell at (`row`, `col`) of `model`.
///
/// Rejected (with nothing changed) when the cell is not open path or the
/// role is already taken.
pub fn designate_point(model: &mut GridModel, row: i32, col: i32, role: Role) -> Result<(), MazeError> {
    model.designate(Point::new(row, col), role)
}

/// Solve between the endpoints designated on `model` and mark the route.
pub fn solve(model: &mut GridModel) -> Result<SolveReport, MazeError> {
    maze_paths::solve(model, SolveOptions::default())
}

/// Replace `model` with a fresh, unsolved `size`×`size` maze drawn from new
/// entropy.
pub fn reset(model: &mut GridModel, size: usize) -> GenStats {
    MazeGen::from_entropy().generate_into(model, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_functions_cover_a_round() {
        let mut model = GridModel::new(5);
        designate_point(&mut model, 1, 1, Role::Start).unwrap();
        assert_eq!(
            designate_point(&mut model, 0, 0, Role::End),
            Err(MazeError::PointRejected(RejectReason::NotPath {
                point: Point::new(0, 0),
                state: CellState::Wall
            }))
        );
        designate_point(&mut model, 3, 3, Role::End).unwrap();
        let report = solve(&mut model).unwrap();
        assert_eq!(report.length, 4);

        reset(&mut model, 8);
        assert_eq!(model.size(), 8);
        assert_eq!(model.endpoints(), None);
        assert_eq!(model.grid().count(CellState::ShortestPath), 0);
    }

    #[test]
    fn seeded_generation_is_repeatable() {
        assert_eq!(generate_maze(10, Some(3)), generate_maze(10, Some(3)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = MazeConfig {
            size: 31,
            seed: Some(99),
            generator: GenConfig {
                pillar_step: 2,
                wall_one_in: 6,
            },
            mark_explored: true,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let cfg: MazeConfig = serde_json::from_str(r#"{"size":12}"#).unwrap();
        assert_eq!(cfg.size, 12);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.generator, GenConfig::default());
    }
}
