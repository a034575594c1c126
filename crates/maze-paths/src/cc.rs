//! Regions: sets of open cells that can reach each other.

use maze_core::{GridModel, Point};

use crate::PathRange;
use crate::traits::Pather;

impl PathRange {
    /// Label every cell reachable from flat index `seed` with `label`.
    ///
    /// On return `region_cells` holds the region's indices in visit order.
    fn flood<P: Pather>(&mut self, pather: &P, seed: usize, label: i32) {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        self.region_cells.clear();
        self.region_cells.push(seed);
        self.region_labels[seed] = label;

        let mut next = 0;
        while let Some(&ci) = self.region_cells.get(next) {
            next += 1;
            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);
            for &np in &nbuf {
                if let Some(ni) = self.idx(np).filter(|&ni| self.region_labels[ni] < 0) {
                    self.region_labels[ni] = label;
                    self.region_cells.push(ni);
                }
            }
        }
        self.nbuf = nbuf;
    }

    /// The cells reachable from `p`, `p` first. Empty when `p` is outside
    /// the range.
    pub fn region<P: Pather>(&mut self, pather: &P, p: Point) -> Vec<Point> {
        self.region_labels.fill(-1);
        let Some(seed) = self.idx(p) else {
            return Vec::new();
        };
        self.flood(pather, seed, 0);
        self.region_cells.iter().map(|&i| self.point(i)).collect()
    }

    /// Whether `b` can be reached from `a`.
    pub fn connected<P: Pather>(&mut self, pather: &P, a: Point, b: Point) -> bool {
        let (Some(ai), Some(bi)) = (self.idx(a), self.idx(b)) else {
            return false;
        };
        self.region_labels.fill(-1);
        self.flood(pather, ai, 0);
        self.region_labels[bi] == 0
    }

    /// The largest region of open cells in `model`, in row-major order.
    ///
    /// Of two regions of equal size the one whose first cell comes first
    /// wins. Empty when the maze has no open cell.
    pub fn largest_region(&mut self, model: &GridModel) -> Vec<Point> {
        self.set_range(model.bounds());
        self.region_labels.fill(-1);

        let mut best: Vec<usize> = Vec::new();
        let mut regions = 0;
        for i in 0..self.region_labels.len() {
            if self.region_labels[i] >= 0 || !model.is_traversable(self.point(i)) {
                continue;
            }
            self.flood(model, i, regions);
            regions += 1;
            if self.region_cells.len() > best.len() {
                best.clone_from(&self.region_cells);
            }
        }
        log::debug!("{regions} open regions, largest has {} cells", best.len());

        best.sort_unstable();
        best.into_iter().map(|i| self.point(i)).collect()
    }
}
