use maze_core::Point;

/// Manhattan (L1) distance between two points: the shortest possible path
/// length between them on an open 4-connected grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
