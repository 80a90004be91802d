//! Static 4-connected mazes over an [`OccupancyField`].
//!
//! ```text
//! S..#
//! .#.#
//! ...E
//! ```
//!
//! `#` is a wall, `.` is open floor, `S` and `E` are optional open cells
//! marking a start and a goal.

use gridwalk_core::{OccupancyField, Point, Range};
use gridwalk_paths::{
    AstarPather, Path, Pather, WeightedPather, astar_cost, astar_path, manhattan, neighbors,
};

use crate::error::ParseError;
use crate::text::{mark_once, scan};

/// A walled grid searched with unit-cost cardinal moves.
#[derive(Debug, Clone)]
pub struct Maze {
    walls: OccupancyField<Point>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl Maze {
    /// Parse a maze from text.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cells = Vec::new();
        let mut start = None;
        let mut goal = None;
        let rng = scan(input, |p, ch| {
            match ch {
                '#' => cells.push(p),
                '.' => {}
                'S' => mark_once(&mut start, ch, p)?,
                'E' => mark_once(&mut goal, ch, p)?,
                _ => return Err(ParseError::InvalidSymbol { ch, pos: p }),
            }
            Ok(())
        })?;
        let mut walls = OccupancyField::from_range(rng);
        for p in cells {
            walls.set(p);
        }
        log::debug!("maze: {} with {} walls", rng, walls.count_blocked());
        Ok(Self { walls, start, goal })
    }

    /// Wrap an existing field; there are no start or goal markers.
    pub fn from_field(walls: OccupancyField<Point>) -> Self {
        Self {
            walls,
            start: None,
            goal: None,
        }
    }

    /// The maze extent.
    pub fn range(&self) -> Range {
        self.walls.range()
    }

    /// The underlying wall field.
    pub fn walls(&self) -> &OccupancyField<Point> {
        &self.walls
    }

    /// The `S` marker, if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The `E` marker, if any.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Whether `p` is inside the maze and not a wall.
    pub fn is_open(&self, p: Point) -> bool {
        self.walls.in_bounds(p) && !self.walls.test(p)
    }

    /// Shortest cost from `from` to `to`.
    pub fn shortest(&self, from: Point, to: Point) -> Option<i32> {
        astar_cost(self, from, to)
    }

    /// Shortest path from `from` to `to`.
    pub fn shortest_path(&self, from: Point, to: Point) -> Option<Path<Point>> {
        astar_path(self, from, to)
    }

    /// Shortest cost between the `S` and `E` markers.
    pub fn solve(&self) -> Result<Option<i32>, ParseError> {
        let start = self.start.ok_or(ParseError::MissingStart)?;
        let goal = self.goal.ok_or(ParseError::MissingGoal)?;
        Ok(self.shortest(start, goal))
    }
}

impl Pather for Maze {
    type Coord = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        neighbors::cardinal(p, buf, |n| self.is_open(n));
    }
}

impl WeightedPather for Maze {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for Maze {
    fn estimate(&self, from: Point, goal: Point) -> i32 {
        manhattan(from, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_paths::{Leg, bfs_cost, bfs_distances, compose};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const SMALL: &str = "\
S..#
.#.#
...E";

    fn random_maze(rng: &mut StdRng, w: i32, h: i32, density: f64) -> Maze {
        let mut walls = OccupancyField::from_range(Range::new(0, 0, w, h));
        for p in Range::new(0, 0, w, h) {
            if rng.random_bool(density) {
                walls.set(p);
            }
        }
        Maze::from_field(walls)
    }

    fn open_cells(maze: &Maze) -> Vec<Point> {
        maze.range().iter().filter(|&p| maze.is_open(p)).collect()
    }

    #[test]
    fn parse_small() {
        let m = Maze::parse(SMALL).unwrap();
        assert_eq!(m.range(), Range::new(0, 0, 4, 3));
        assert_eq!(m.start(), Some(Point::new(0, 0)));
        assert_eq!(m.goal(), Some(Point::new(3, 2)));
        assert_eq!(m.walls().count_blocked(), 3);
        assert!(!m.is_open(Point::new(1, 1)));
        assert!(!m.is_open(Point::new(-1, 0)));
        assert_eq!(m.solve(), Ok(Some(5)));
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        let err = Maze::parse("S.x\n..E").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidSymbol {
                ch: 'x',
                pos: Point::new(2, 0)
            }
        );
    }

    #[test]
    fn solve_needs_markers() {
        let m = Maze::parse("...\n..E").unwrap();
        assert_eq!(m.solve(), Err(ParseError::MissingStart));
        let m = Maze::parse("S..\n...").unwrap();
        assert_eq!(m.solve(), Err(ParseError::MissingGoal));
    }

    #[test]
    fn open_grid_costs_are_manhattan() {
        let m = Maze::parse(".......\n.......\n.......\n.......\n.......").unwrap();
        let cells = open_cells(&m);
        for &a in &cells {
            for &b in &cells {
                assert_eq!(m.shortest(a, b), Some(manhattan(a, b)), "{a} -> {b}");
            }
        }
    }

    #[test]
    fn matches_breadth_first_search_on_random_mazes() {
        let mut rng = StdRng::seed_from_u64(0x6d617a65);
        for _ in 0..60 {
            let w = rng.random_range(1..=10);
            let h = rng.random_range(1..=10);
            let m = random_maze(&mut rng, w, h, 0.3);
            let cells = open_cells(&m);
            if cells.is_empty() {
                continue;
            }
            for _ in 0..8 {
                let a = cells[rng.random_range(0..cells.len())];
                let b = cells[rng.random_range(0..cells.len())];
                assert_eq!(m.shortest(a, b), bfs_cost(&m, a, b), "{a} -> {b}");
            }
        }
    }

    #[test]
    fn paths_are_valid_walks() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..30 {
            let m = random_maze(&mut rng, 10, 10, 0.25);
            let cells = open_cells(&m);
            if cells.len() < 2 {
                continue;
            }
            let a = cells[0];
            let b = cells[cells.len() - 1];
            let Some(path) = m.shortest_path(a, b) else {
                assert_eq!(bfs_cost(&m, a, b), None);
                continue;
            };
            assert_eq!(path.steps.len() as i32, path.cost + 1);
            assert_eq!(path.steps[0], a);
            assert_eq!(*path.steps.last().unwrap(), b);
            for pair in path.steps.windows(2) {
                assert_eq!(manhattan(pair[0], pair[1]), 1);
                assert!(m.is_open(pair[1]));
            }
        }
    }

    #[test]
    fn repeated_searches_are_idempotent() {
        let mut rng = StdRng::seed_from_u64(11);
        let m = random_maze(&mut rng, 10, 10, 0.3);
        let cells = open_cells(&m);
        let (a, b) = (cells[0], cells[cells.len() - 1]);
        let first = m.shortest(a, b);
        for _ in 0..10 {
            assert_eq!(m.shortest(a, b), first);
        }
    }

    #[test]
    fn heuristic_never_overestimates() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..20 {
            let m = random_maze(&mut rng, 8, 8, 0.3);
            for goal in open_cells(&m) {
                // Moves are symmetric, so distances from the goal are
                // distances to it.
                for (p, true_cost) in bfs_distances(&m, goal) {
                    assert!(m.estimate(p, goal) <= true_cost, "{p} -> {goal}");
                }
            }
        }
    }

    #[test]
    fn enclosed_goal_has_no_path() {
        let m = Maze::parse(
            "\
S......
...#...
..#E#..
...#...
.......",
        )
        .unwrap();
        assert_eq!(m.solve(), Ok(None));
        assert!(m.shortest_path(Point::new(0, 0), Point::new(3, 2)).is_none());
    }

    #[test]
    fn three_leg_round_trip_sums_single_legs() {
        let m = Maze::parse(
            "\
S.#.....
..#.##..
....#..E",
        )
        .unwrap();
        let (s, e) = (m.start().unwrap(), m.goal().unwrap());
        let there = Leg::new(s, e);
        let route = compose(&m, &[there, there.reversed(), there], 0).unwrap();
        let single = [
            m.shortest(s, e).unwrap(),
            m.shortest(e, s).unwrap(),
            m.shortest(s, e).unwrap(),
        ];
        assert_eq!(route.legs, single);
        assert_eq!(route.total, single.iter().sum::<i32>());
    }
}
