//! The [`Coord`] trait: what the search layer needs from a state coordinate.

use std::fmt::Debug;
use std::hash::Hash;

use crate::geom::{Point, TimePoint};

/// A fixed-size integer coordinate usable as a search state.
///
/// Every coordinate has a ground-plane projection. Time-expanded
/// coordinates also carry an elapsed-time axis; static ones report time 0
/// and ignore it when placed.
pub trait Coord: Copy + Eq + Hash + Debug {
    /// Number of axes.
    const DIMS: usize;

    /// Value along axis `i` (`0 <= i < DIMS`).
    fn axis(self, i: usize) -> i32;

    /// Ground-plane projection.
    fn spatial(self) -> Point;

    /// Elapsed time, or 0 for static coordinates.
    fn time(self) -> i32;

    /// Build the coordinate at ground point `p` and time `t`.
    fn place(p: Point, t: i32) -> Self;
}

impl Coord for Point {
    const DIMS: usize = 2;

    #[inline]
    fn axis(self, i: usize) -> i32 {
        match i {
            0 => self.x,
            1 => self.y,
            _ => panic!("Point has no axis {i}"),
        }
    }

    #[inline]
    fn spatial(self) -> Point {
        self
    }

    #[inline]
    fn time(self) -> i32 {
        0
    }

    #[inline]
    fn place(p: Point, _t: i32) -> Self {
        p
    }
}

impl Coord for TimePoint {
    const DIMS: usize = 3;

    #[inline]
    fn axis(self, i: usize) -> i32 {
        match i {
            0 => self.x,
            1 => self.y,
            2 => self.t,
            _ => panic!("TimePoint has no axis {i}"),
        }
    }

    #[inline]
    fn spatial(self) -> Point {
        self.ground()
    }

    #[inline]
    fn time(self) -> i32 {
        self.t
    }

    #[inline]
    fn place(p: Point, t: i32) -> Self {
        p.at_time(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_ignores_time() {
        let p = <Point as Coord>::place(Point::new(4, 2), 99);
        assert_eq!(p, Point::new(4, 2));
        assert_eq!(p.time(), 0);
        assert_eq!((p.axis(0), p.axis(1)), (4, 2));
    }

    #[test]
    fn time_point_axes() {
        let p = <TimePoint as Coord>::place(Point::new(4, 2), 9);
        assert_eq!(p.spatial(), Point::new(4, 2));
        assert_eq!(p.time(), 9);
        assert_eq!([p.axis(0), p.axis(1), p.axis(2)], [4, 2, 9]);
    }
}
