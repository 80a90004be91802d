use gridwalk_core::{Coord, Point};

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// The search state type.
    type Coord: Coord;

    /// Append the valid (in-bounds, unblocked) successors of `p` into
    /// `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Self::Coord, buf: &mut Vec<Self::Coord>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Self::Coord, to: Self::Coord) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to the ground
    /// point `goal`. Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Self::Coord, goal: Point) -> i32;
}
