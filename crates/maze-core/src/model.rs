//! [`GridModel`]: the maze grid together with its start and end points.

use std::fmt;

use crate::cell::CellState;
use crate::error::{MazeError, RejectReason};
use crate::geom::{Point, Range};
use crate::grid::Grid;

/// Which endpoint a designation targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Start,
    End,
}

impl Role {
    /// The cell state a designated cell takes.
    #[inline]
    pub const fn state(self) -> CellState {
        match self {
            Role::Start => CellState::Start,
            Role::End => CellState::End,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Start => "start",
            Role::End => "end",
        })
    }
}

/// A square maze grid plus its optional endpoints.
///
/// Border cells are always `Wall`. Interior cells are `Wall` or `Path`
/// until endpoints are designated or a solve marks its result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridModel {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
}

impl GridModel {
    /// Create a fresh `size`×`size` model: border walls, open interior, no
    /// endpoints.
    pub fn new(size: usize) -> Self {
        let mut model = Self {
            grid: Grid::new(size, CellState::Path),
            start: None,
            end: None,
        };
        model.reset(size);
        model
    }

    /// Rebuild as a fresh `size`×`size` model. Never fails.
    pub fn reset(&mut self, size: usize) {
        if self.grid.size() != size {
            self.grid = Grid::new(size, CellState::Path);
        }
        let bounds = self.grid.bounds();
        self.grid.map_cells(|p, _| {
            if bounds.is_border(p) {
                CellState::Wall
            } else {
                CellState::Path
            }
        });
        self.start = None;
        self.end = None;
    }

    /// Build a model from an already-validated grid and endpoints.
    pub(crate) fn from_parts(grid: Grid, start: Option<Point>, end: Option<Point>) -> Self {
        Self { grid, start, end }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The range covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    /// Read-only access to the cells, for renderers.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Both endpoints, if both are set.
    #[inline]
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((self.start?, self.end?))
    }

    /// Fail with [`MazeError::OutOfRange`] unless `p` is inside the grid.
    pub fn check_bounds(&self, p: Point) -> Result<(), MazeError> {
        if self.grid.contains(p) {
            Ok(())
        } else {
            Err(MazeError::OutOfRange {
                point: p,
                size: self.size(),
            })
        }
    }

    /// State of the cell at `p`.
    pub fn cell_state(&self, p: Point) -> Result<CellState, MazeError> {
        self.grid.at(p).ok_or(MazeError::OutOfRange {
            point: p,
            size: self.size(),
        })
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_traversable(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(CellState::is_traversable)
    }

    /// In-bounds orthogonal neighbours of `p` in the order
    /// +row, +col, -row, -col.
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.grid.contains(n))
    }

    /// Assign `role` to the cell at `p`.
    ///
    /// The cell must currently be a plain `Path` cell and the role must not
    /// already be assigned; otherwise nothing changes.
    pub fn designate(&mut self, p: Point, role: Role) -> Result<(), MazeError> {
        let state = self.cell_state(p)?;
        if state != CellState::Path {
            log::debug!("refusing {role} at {p}: cell is {state}");
            return Err(RejectReason::NotPath { point: p, state }.into());
        }
        let slot = match role {
            Role::Start => &mut self.start,
            Role::End => &mut self.end,
        };
        if slot.is_some() {
            log::debug!("refusing {role} at {p}: already set");
            return Err(RejectReason::RoleAssigned(role).into());
        }
        *slot = Some(p);
        self.grid.set(p, role.state());
        log::debug!("{role} point set: {p}");
        Ok(())
    }

    /// Set the start point. Silently does nothing (returning `false`) if
    /// the cell is not `Path` or the start is already set.
    pub fn set_start(&mut self, p: Point) -> bool {
        self.designate(p, Role::Start).is_ok()
    }

    /// Set the end point. Silently does nothing (returning `false`) if the
    /// cell is not `Path` or the end is already set.
    pub fn set_end(&mut self, p: Point) -> bool {
        self.designate(p, Role::End).is_ok()
    }

    /// Overwrite an interior, non-endpoint cell.
    ///
    /// Border cells, endpoint cells and endpoint states are refused so the
    /// model invariants hold; returns whether the cell was written.
    pub fn set_cell(&mut self, p: Point, state: CellState) -> bool {
        if state.is_endpoint() || self.bounds().is_border(p) {
            return false;
        }
        match self.grid.at(p) {
            Some(current) if !current.is_endpoint() => self.grid.set(p, state),
            _ => false,
        }
    }

    /// Turn every `Visited` and `ShortestPath` cell back into `Path`.
    /// Returns the number of cells cleared.
    pub fn clear_solution(&mut self) -> usize {
        let mut cleared = 0;
        self.grid.map_cells(|_, c| {
            if c.is_solution_mark() {
                cleared += 1;
                CellState::Path
            } else {
                c
            }
        });
        cleared
    }

    /// Return both endpoint cells to `Path` and unset them.
    pub fn clear_endpoints(&mut self) {
        for p in [self.start.take(), self.end.take()].into_iter().flatten() {
            self.grid.set(p, CellState::Path);
        }
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for (i, (_, c)) in self.grid.iter().enumerate() {
            write!(f, "{}", c.glyph())?;
            if (i + 1) % size == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
