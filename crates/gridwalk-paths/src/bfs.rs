//! Breadth-first search over the same [`Pather`] interface as A*.
//!
//! Every step costs 1, which makes BFS an independent reference for the
//! A* engine on unit-cost worlds.

use std::collections::{HashMap, VecDeque};

use gridwalk_core::{Coord, Point};

use crate::traits::Pather;

/// Unweighted distance from `start` to the first coordinate whose spatial
/// projection is `goal`, or `None` if none is reachable.
pub fn bfs_cost<P: Pather>(pather: &P, start: P::Coord, goal: Point) -> Option<i32> {
    if start.spatial() == goal {
        return Some(0);
    }
    let mut dist: HashMap<P::Coord, i32> = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    let mut nbuf = Vec::with_capacity(8);

    while let Some(c) = queue.pop_front() {
        let d = dist[&c];
        nbuf.clear();
        pather.neighbors(c, &mut nbuf);
        for &n in nbuf.iter() {
            if dist.contains_key(&n) {
                continue;
            }
            if n.spatial() == goal {
                return Some(d + 1);
            }
            dist.insert(n, d + 1);
            queue.push_back(n);
        }
    }
    None
}

/// Unweighted distances from `start` to every reachable coordinate.
pub fn bfs_distances<P: Pather>(pather: &P, start: P::Coord) -> HashMap<P::Coord, i32> {
    let mut dist: HashMap<P::Coord, i32> = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    let mut nbuf = Vec::with_capacity(8);

    while let Some(c) = queue.pop_front() {
        let d = dist[&c];
        nbuf.clear();
        pather.neighbors(c, &mut nbuf);
        for &n in nbuf.iter() {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors;
    use gridwalk_core::Range;

    struct Open(Range);

    impl Pather for Open {
        type Coord = Point;
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            neighbors::cardinal(p, buf, |n| self.0.contains(n));
        }
    }

    #[test]
    fn distances_cover_the_range() {
        let rng = Range::new(0, 0, 4, 3);
        let dist = bfs_distances(&Open(rng), Point::new(0, 0));
        assert_eq!(dist.len(), rng.len());
        assert_eq!(dist[&Point::new(3, 2)], 5);
    }

    #[test]
    fn cost_matches_distance_map() {
        let rng = Range::new(0, 0, 5, 5);
        let dist = bfs_distances(&Open(rng), Point::new(2, 2));
        for p in rng {
            assert_eq!(bfs_cost(&Open(rng), Point::new(2, 2), p), Some(dist[&p]));
        }
    }

    #[test]
    fn unreachable_goal() {
        let rng = Range::new(0, 0, 3, 3);
        assert_eq!(bfs_cost(&Open(rng), Point::new(0, 0), Point::new(5, 5)), None);
    }
}
