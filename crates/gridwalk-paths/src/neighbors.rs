//! Move sets for 4-connected grids.

use gridwalk_core::{Point, TimePoint};

/// Cardinal offsets (up, right, down, left).
pub const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// Cardinal offsets plus staying in place.
pub const CARDINAL_OR_WAIT: [Point; 5] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::ZERO,
];

/// Push the 4-directional neighbors of `p` for which `keep` returns `true`.
pub fn cardinal(p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
    for d in CARDINAL {
        let n = p + d;
        if keep(n) {
            buf.push(n);
        }
    }
}

/// Push the time-expanded successors of `p`: the four cardinal moves and a
/// wait, each one tick later, keeping those for which `keep` returns `true`.
pub fn cardinal_or_wait(p: TimePoint, buf: &mut Vec<TimePoint>, keep: impl Fn(TimePoint) -> bool) {
    for d in CARDINAL_OR_WAIT {
        let n = p.tick(d);
        if keep(n) {
            buf.push(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_filters() {
        let mut buf = Vec::new();
        cardinal(Point::new(0, 0), &mut buf, |n| n.x >= 0 && n.y >= 0);
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn timed_moves_advance_the_clock() {
        let mut buf = Vec::new();
        cardinal_or_wait(TimePoint::new(2, 2, 5), &mut buf, |_| true);
        assert_eq!(buf.len(), 5);
        assert!(buf.iter().all(|n| n.t == 6));
        assert!(buf.contains(&TimePoint::new(2, 2, 6)));
    }
}
