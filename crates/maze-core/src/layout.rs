//! Reading a [`GridModel`] back from its text form.
//!
//! A layout is a square block of cell glyphs (see [`CellState::glyph`]), one
//! line per row. This is the same format `GridModel`'s `Display` writes, so
//! fixed mazes can be written inline in tests and fixtures:
//!
//! ```text
//! #####
//! #S..#
//! #.#.#
//! #..E#
//! #####
//! ```

use std::str::FromStr;

use crate::cell::CellState;
use crate::error::{LayoutError, MazeError};
use crate::geom::Point;
use crate::grid::Grid;
use crate::model::{GridModel, Role};

impl GridModel {
    /// Parse a layout. Surrounding blank lines are ignored; `\r\n` line
    /// endings are accepted.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s
            .trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let size = lines.len();
        if size == 0 {
            return Ok(GridModel::new(0));
        }

        let mut grid = Grid::new(size, CellState::Wall);
        let bounds = grid.bounds();
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            let cols = line.chars().count();
            if cols != size {
                return Err(LayoutError::InconsistentSize { rows: size, cols });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(row as i32, col as i32);
                let state = CellState::from_glyph(ch).ok_or(LayoutError::InvalidRune { ch, pos })?;
                if bounds.is_border(pos) && state != CellState::Wall {
                    return Err(LayoutError::OpenBorder(pos));
                }
                let slot = match state {
                    CellState::Start => Some((&mut start, Role::Start)),
                    CellState::End => Some((&mut end, Role::End)),
                    _ => None,
                };
                if let Some((slot, role)) = slot {
                    if slot.replace(pos).is_some() {
                        return Err(LayoutError::DuplicateRole(role));
                    }
                }
                grid.set(pos, state);
            }
        }

        Ok(GridModel::from_parts(grid, start, end))
    }
}

impl FromStr for GridModel {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GridModel::parse(s)?)
    }
}
