use gridwalk_core::{Coord, Point};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Manhattan distance from the ground projection of `c` to `goal`.
///
/// The time axis, if any, is ignored.
#[inline]
pub fn spatial_manhattan<C: Coord>(c: C, goal: Point) -> i32 {
    manhattan(c.spatial(), goal)
}
