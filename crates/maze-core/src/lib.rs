//! **maze-core**: the grid model shared by the maze crates.
//!
//! This crate provides geometry primitives, the [`CellState`] enumeration,
//! an owned square [`Grid`], and [`GridModel`], which couples a grid with
//! its start and end points and enforces the maze invariants (walled border,
//! endpoints only on open cells).

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod model;

pub use cell::CellState;
pub use error::{LayoutError, MazeError, RejectReason};
pub use geom::{Point, Range};
pub use grid::Grid;
pub use model::{GridModel, Role};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn model_round_trip() {
        let mut m = GridModel::new(6);
        assert!(m.set_start(Point::new(1, 1)));
        assert!(m.set_cell(Point::new(2, 3), CellState::Wall));
        let json = serde_json::to_string(&m).unwrap();
        let back: GridModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn cell_state_is_a_plain_tag() {
        let json = serde_json::to_string(&CellState::ShortestPath).unwrap();
        assert_eq!(json, "\"ShortestPath\"");
    }
}
