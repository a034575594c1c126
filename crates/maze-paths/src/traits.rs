use maze_core::{GridModel, Point};

/// Minimal pathfinding interface: provides neighbour enumeration.
pub trait Pather {
    /// Append the neighbours reachable in one step from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// A maze moves orthogonally between non-wall cells at unit cost.
///
/// Walls have no neighbours, so a search or flood fill never leaves one.
impl Pather for GridModel {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if !self.is_traversable(p) {
            return;
        }
        buf.extend(self.neighbors4(p).filter(|&n| self.is_traversable(n)));
    }
}

impl WeightedPather for GridModel {
    #[inline]
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_neighbors_skip_walls() {
        let m = GridModel::parse(
            "
#####
#...#
#.#.#
#...#
#####",
        )
        .unwrap();
        let mut buf = Vec::new();
        m.neighbors(Point::new(1, 2), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 3), Point::new(1, 1)]);

        buf.clear();
        m.neighbors(Point::new(2, 2), &mut buf);
        assert!(buf.is_empty());
        assert_eq!(m.cost(Point::new(1, 1), Point::new(1, 2)), 1);
    }
}
