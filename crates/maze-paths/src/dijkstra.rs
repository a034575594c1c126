use std::collections::BinaryHeap;

use maze_core::Point;

use crate::PathRange;
use crate::pathrange::{NodeRef, UNREACHABLE};
use crate::traits::WeightedPather;

/// A shortest path found by [`PathRange::shortest_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Every cell from start to goal, both included.
    pub path: Vec<Point>,
    /// Total cost of the path (the number of steps on a unit-cost maze).
    pub cost: i32,
    /// Cells whose distance was finalised, in the order they were expanded.
    pub explored: Vec<Point>,
}

/// Result of a single shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(PathResult),
    Unreachable,
}

impl SearchOutcome {
    /// The path result, if one was found.
    pub fn found(self) -> Option<PathResult> {
        match self {
            SearchOutcome::Found(r) => Some(r),
            SearchOutcome::Unreachable => None,
        }
    }
}

impl PathRange {
    /// Compute the shortest path from `from` to `to` with a uniform-cost
    /// (Dijkstra) search.
    ///
    /// The frontier is a binary heap with lazy deletion: an entry whose
    /// distance exceeds the cell's best-known distance is stale and is
    /// skipped when popped. The search stops as soon as `to` is popped, or
    /// when the frontier runs dry.
    pub fn shortest_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> SearchOutcome {
        let (Some(start_idx), Some(goal_idx)) = (self.idx(from), self.idx(to)) else {
            return SearchOutcome::Unreachable;
        };

        self.distance.fill(UNREACHABLE);
        self.predecessor.fill(None);
        self.distance[start_idx] = 0;

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            dist: 0,
            seq,
        });

        let mut explored = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if current.dist > self.distance[ci] {
                continue;
            }

            let cp = self.point(ci);
            explored.push(cp);

            if ci == goal_idx {
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current.dist + pather.cost(cp, np);
                if tentative >= self.distance[ni] {
                    continue;
                }
                self.distance[ni] = tentative;
                self.predecessor[ni] = Some(ci);
                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    dist: tentative,
                    seq,
                });
            }
        }

        self.nbuf = nbuf;

        let cost = self.distance[goal_idx];
        if cost == UNREACHABLE {
            return SearchOutcome::Unreachable;
        }

        // Walk predecessor links back to the start, whose link is never set.
        let mut path = vec![to];
        let mut ci = goal_idx;
        while let Some(prev) = self.predecessor[ci] {
            path.push(self.point(prev));
            ci = prev;
        }
        path.reverse();

        SearchOutcome::Found(PathResult {
            path,
            cost,
            explored,
        })
    }
}
