//! Error types shared by the maze crates.

use std::fmt;

use crate::cell::CellState;
use crate::geom::Point;
use crate::model::Role;

/// Every recoverable condition a maze operation can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A coordinate lies outside the `size`×`size` grid.
    OutOfRange { point: Point, size: usize },
    /// A start/end designation was refused.
    PointRejected(RejectReason),
    /// A solve was requested before both endpoints were chosen.
    PointsNotSet,
    /// A solve is already in progress on this maze.
    AlreadySolving,
    /// No traversable route connects the endpoints.
    Unreachable { start: Point, end: Point },
    /// A text layout could not be read.
    Layout(LayoutError),
}

/// Why a start/end designation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The target cell is not a plain `Path` cell.
    NotPath { point: Point, state: CellState },
    /// The requested role already has a cell.
    RoleAssigned(Role),
}

/// Errors that can occur when parsing a maze layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Lines have inconsistent widths, or the block is not square.
    InconsistentSize { rows: usize, cols: usize },
    /// A character that is not a cell glyph was found.
    InvalidRune { ch: char, pos: Point },
    /// A border cell is not a wall.
    OpenBorder(Point),
    /// More than one cell claims the same endpoint role.
    DuplicateRole(Role),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { point, size } => {
                write!(f, "cell {point} is outside the {size}x{size} grid")
            }
            Self::PointRejected(reason) => write!(f, "point rejected: {reason}"),
            Self::PointsNotSet => f.write_str("set both the start and end points first"),
            Self::AlreadySolving => f.write_str("a solve is already in progress"),
            Self::Unreachable { start, end } => {
                write!(f, "no path from {start} to {end}")
            }
            Self::Layout(e) => write!(f, "invalid layout: {e}"),
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPath { point, state } => {
                write!(f, "cell {point} is {state}, not an open path")
            }
            Self::RoleAssigned(role) => write!(f, "{role} point is already set"),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize { rows, cols } => {
                write!(f, "expected a square block, found a line of {cols} cells in {rows} rows")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::OpenBorder(p) => write!(f, "border cell {p} is not a wall"),
            Self::DuplicateRole(role) => write!(f, "more than one {role} cell"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<LayoutError> for MazeError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<RejectReason> for MazeError {
    fn from(r: RejectReason) -> Self {
        Self::PointRejected(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cell() {
        let e = MazeError::OutOfRange {
            point: Point::new(7, 2),
            size: 5,
        };
        assert_eq!(e.to_string(), "cell (7, 2) is outside the 5x5 grid");

        let e = MazeError::from(RejectReason::NotPath {
            point: Point::new(0, 0),
            state: CellState::Wall,
        });
        assert_eq!(e.to_string(), "point rejected: cell (0, 0) is wall, not an open path");

        let e = MazeError::from(RejectReason::RoleAssigned(Role::End));
        assert_eq!(e.to_string(), "point rejected: end point is already set");
    }

    #[test]
    fn layout_error_is_the_source() {
        use std::error::Error;
        let e = MazeError::from(LayoutError::OpenBorder(Point::new(0, 1)));
        assert!(e.source().is_some());
        assert!(MazeError::PointsNotSet.source().is_none());
    }
}
