use maze_core::{Point, Range};

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Frontier entry for the uniform-cost search
// ---------------------------------------------------------------------------

/// A queued `(distance, cell)` pair, ordered so that `BinaryHeap` (a
/// max-heap) pops the smallest distance first. Equal distances pop in
/// insertion order, which keeps search traces reproducible.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) dist: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Search state for one grid rectangle.
///
/// `PathRange` owns the distance and predecessor tables, the BFS map and
/// flood-fill labels so that repeated queries on same-sized grids reuse
/// their allocations. Every query reinitialises the tables it uses.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // uniform-cost search
    pub(crate) distance: Vec<i32>,
    pub(crate) predecessor: Vec<Option<usize>>,
    // BFS
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_results: Vec<PathNode>,
    // regions
    pub(crate) region_labels: Vec<i32>,
    pub(crate) region_cells: Vec<usize>,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            distance: vec![UNREACHABLE; len],
            predecessor: vec![None; len],
            bfs_map: vec![UNREACHABLE; len],
            bfs_results: Vec::new(),
            region_labels: vec![-1; len],
            region_cells: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, resizing the tables.
    pub fn set_range(&mut self, rng: Range) {
        if rng == self.rng {
            return;
        }
        let len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.distance.clear();
        self.distance.resize(len, UNREACHABLE);
        self.predecessor.clear();
        self.predecessor.resize(len, None);
        self.bfs_map.clear();
        self.bfs_map.resize(len, UNREACHABLE);
        self.bfs_results.clear();
        self.region_labels.clear();
        self.region_labels.resize(len, -1);
        self.region_cells.clear();
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Best-known distance to `p` from the last
    /// [`shortest_path`](Self::shortest_path) call, or [`UNREACHABLE`].
    ///
    /// Cells the search never reached (including those beyond an early exit)
    /// report [`UNREACHABLE`].
    pub fn distance_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.distance[i],
            None => UNREACHABLE,
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let col = (p.col - self.rng.min.col) as usize;
        let row = (p.row - self.rng.min.row) as usize;
        Some(row * self.width + col)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let col = (idx % self.width) as i32 + self.rng.min.col;
        let row = (idx / self.width) as i32 + self.rng.min.row;
        Point::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn frontier_pops_smallest_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, dist: 3, seq: 0 });
        heap.push(NodeRef { idx: 1, dist: 1, seq: 1 });
        heap.push(NodeRef { idx: 2, dist: 1, seq: 2 });
        heap.push(NodeRef { idx: 3, dist: 2, seq: 3 });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn index_round_trip() {
        let pr = PathRange::new(Range::new(2, 3, 6, 8));
        for p in pr.range().iter() {
            let i = pr.idx(p).unwrap();
            assert_eq!(pr.point(i), p);
        }
        assert_eq!(pr.idx(Point::new(0, 0)), None);
    }

    #[test]
    fn set_range_resizes_tables() {
        let mut pr = PathRange::new(Range::square(5));
        pr.set_range(Range::square(20));
        assert_eq!(pr.range(), Range::square(20));
        assert_eq!(pr.distance.len(), 400);
        assert_eq!(pr.predecessor.len(), 400);
        assert_eq!(pr.width, 20);
        pr.set_range(Range::square(3));
        assert_eq!(pr.bfs_map.len(), 9);
    }
}
