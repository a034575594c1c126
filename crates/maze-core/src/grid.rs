//! The [`Grid`] type: an owned, square 2D matrix of [`CellState`]s.
//!
//! Cells are stored flat in row-major order. Unlike a shared-buffer view,
//! a `Grid` is a plain value: cloning it copies the cells.

use crate::cell::CellState;
use crate::geom::{Point, Range, RangeIter};

/// An N×N matrix of cell states.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<CellState>,
    size: usize,
}

impl Grid {
    /// Create a `size`×`size` grid filled with `fill`.
    pub fn new(size: usize, fill: CellState) -> Self {
        Self {
            cells: vec![fill; size * size],
            size,
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The range covered by this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.row as usize * self.size + p.col as usize)
        } else {
            None
        }
    }

    /// Read the cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Write the cell at `p`. Returns `false` (and does nothing) if `p` is
    /// outside the grid.
    #[inline]
    pub fn set(&mut self, p: Point, state: CellState) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// Replace every cell with `f(point, old)`.
    pub fn map_cells(&mut self, mut f: impl FnMut(Point, CellState) -> CellState) {
        let size = self.size;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let p = Point::new((i / size) as i32, (i % size) as i32);
            *cell = f(p, *cell);
        }
    }

    /// Count how many cells equal `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Row-major iterator over `(Point, CellState)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, CellState)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, CellState);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        let i = p.row as usize * self.grid.size + p.col as usize;
        Some((p, self.grid.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Point, CellState);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}
