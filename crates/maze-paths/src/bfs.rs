//! Breadth-first step counts from one cell.
//!
//! On a unit-cost maze these equal the uniform-cost distances, so the map
//! doubles as an independent check on [`PathRange::shortest_path`].

use maze_core::Point;

use crate::PathRange;
use crate::pathrange::{PathNode, UNREACHABLE};
use crate::traits::Pather;

impl PathRange {
    /// Count steps from `from` to every cell it can reach.
    ///
    /// Returns the reached cells in visit order, `from` first with cost 0.
    /// Costs never decrease along the slice. Empty when `from` is outside
    /// the range.
    pub fn bfs_map<P: Pather>(&mut self, pather: &P, from: Point) -> &[PathNode] {
        self.bfs_map.fill(UNREACHABLE);
        self.bfs_results.clear();
        let Some(origin) = self.idx(from) else {
            return &self.bfs_results;
        };
        self.bfs_map[origin] = 0;
        self.bfs_results.push(PathNode { pos: from, cost: 0 });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        // The result list is the queue: entries behind `head` are done.
        let mut head = 0;
        while let Some(&PathNode { pos, cost }) = self.bfs_results.get(head) {
            head += 1;
            nbuf.clear();
            pather.neighbors(pos, &mut nbuf);
            for &next in &nbuf {
                match self.idx(next) {
                    Some(i) if self.bfs_map[i] == UNREACHABLE => {
                        self.bfs_map[i] = cost + 1;
                        self.bfs_results.push(PathNode {
                            pos: next,
                            cost: cost + 1,
                        });
                    }
                    _ => {}
                }
            }
        }
        self.nbuf = nbuf;
        &self.bfs_results
    }

    /// Step count to `p` from the last [`bfs_map`](Self::bfs_map) origin, or
    /// [`UNREACHABLE`].
    pub fn bfs_at(&self, p: Point) -> i32 {
        self.idx(p).map_or(UNREACHABLE, |i| self.bfs_map[i])
    }

    /// A cell as many steps from `from` as any other reachable cell.
    ///
    /// `None` when nothing but `from` itself is reachable.
    pub fn farthest<P: Pather>(&mut self, pather: &P, from: Point) -> Option<PathNode> {
        self.bfs_map(pather, from)
            .last()
            .copied()
            .filter(|n| n.cost > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::GridModel;

    const HOOK: &str = "
#####
#...#
###.#
#...#
#####";

    #[test]
    fn steps_go_around_walls() {
        let m = GridModel::parse(HOOK).unwrap();
        let mut pr = PathRange::new(m.bounds());
        let reached = pr.bfs_map(&m, Point::new(1, 1));
        assert_eq!(reached.len(), 7);
        assert!(reached.windows(2).all(|w| w[0].cost <= w[1].cost));
        assert_eq!(pr.bfs_at(Point::new(3, 1)), 6);
        assert_eq!(pr.bfs_at(Point::new(2, 1)), UNREACHABLE);
        assert_eq!(pr.bfs_at(Point::new(8, 8)), UNREACHABLE);
    }

    #[test]
    fn farthest_cell_ends_the_hook() {
        let m = GridModel::parse(HOOK).unwrap();
        let mut pr = PathRange::new(m.bounds());
        let far = pr.farthest(&m, Point::new(1, 1)).unwrap();
        assert_eq!(far, PathNode { pos: Point::new(3, 1), cost: 6 });
        // A wall has no neighbours.
        assert_eq!(pr.farthest(&m, Point::new(0, 0)), None);
        assert!(pr.bfs_map(&m, Point::new(-1, 0)).is_empty());
    }
}
