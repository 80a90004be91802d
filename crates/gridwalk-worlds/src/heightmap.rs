//! Elevation-constrained climbing on a letter grid.
//!
//! Each cell holds an elevation `a` (lowest) to `z` (highest). `S` marks the
//! start at elevation `a` and `E` the summit at elevation `z`. A step may
//! go down any amount but up at most one level.

use gridwalk_core::{Point, Range};
use gridwalk_paths::{
    AstarPather, Path, Pather, WeightedPather, astar_cost, astar_path, manhattan, neighbors,
};

use crate::error::ParseError;
use crate::render::trace_path;
use crate::text::{mark_once, scan};

/// A parsed height map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    heights: Vec<u8>,
    rng: Range,
    start: Point,
    goal: Point,
}

impl HeightMap {
    /// Parse a height map. Exactly one `S` and one `E` are required.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut heights = Vec::with_capacity(input.len());
        let mut start = None;
        let mut goal = None;
        let rng = scan(input, |p, ch| {
            let h = match ch {
                'S' => {
                    mark_once(&mut start, ch, p)?;
                    0
                }
                'E' => {
                    mark_once(&mut goal, ch, p)?;
                    25
                }
                'a'..='z' => ch as u8 - b'a',
                _ => return Err(ParseError::InvalidSymbol { ch, pos: p }),
            };
            heights.push(h);
            Ok(())
        })?;
        let start = start.ok_or(ParseError::MissingStart)?;
        let goal = goal.ok_or(ParseError::MissingGoal)?;
        log::debug!("heightmap: {rng}, start {start}, summit {goal}");
        Ok(Self {
            heights,
            rng,
            start,
            goal,
        })
    }

    /// The map extent.
    pub fn range(&self) -> Range {
        self.rng
    }

    /// The `S` position.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The `E` position.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Elevation at `p` (0 for `a` through 25 for `z`), or `None` outside
    /// the map.
    pub fn elevation(&self, p: Point) -> Option<u8> {
        if !self.rng.contains(p) {
            return None;
        }
        let i = (p.y - self.rng.min.y) * self.rng.width() + (p.x - self.rng.min.x);
        Some(self.heights[i as usize])
    }

    /// Whether a single step from `from` to `to` is allowed.
    pub fn can_step(&self, from: Point, to: Point) -> bool {
        match (self.elevation(from), self.elevation(to)) {
            (Some(a), Some(b)) => b <= a + 1,
            _ => false,
        }
    }

    /// Fewest steps from `S` to `E`.
    pub fn climb(&self) -> Option<i32> {
        astar_cost(self, self.start, self.goal)
    }

    /// A shortest route from `S` to `E`.
    pub fn climb_path(&self) -> Option<Path<Point>> {
        astar_path(self, self.start, self.goal)
    }

    /// Every lowest-elevation cell, `S` included.
    pub fn trailheads(&self) -> impl Iterator<Item = Point> + '_ {
        self.rng.iter().filter(|&p| self.elevation(p) == Some(0))
    }

    /// The trailhead with the shortest climb to `E`, and that climb's cost.
    ///
    /// Each trailhead is searched independently.
    pub fn best_trailhead(&self) -> Option<(Point, i32)> {
        let mut best: Option<(Point, i32)> = None;
        let mut tried = 0;
        for p in self.trailheads() {
            tried += 1;
            let Some(cost) = astar_cost(self, p, self.goal) else {
                continue;
            };
            if best.is_none_or(|(_, b)| cost < b) {
                best = Some((p, cost));
            }
        }
        log::debug!("heightmap: searched {tried} trailheads, best {best:?}");
        best
    }

    /// Render the map as letters, `S` and `E`, with `path` traced over it.
    pub fn render(&self, path: &[Point]) -> String {
        let glyph = |p: Point| {
            if p == self.start {
                'S'
            } else if p == self.goal {
                'E'
            } else {
                self.elevation(p).map_or(' ', |h| (b'a' + h) as char)
            }
        };
        trace_path(self.rng, glyph, path)
    }
}

impl Pather for HeightMap {
    type Coord = Point;

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        neighbors::cardinal(p, buf, |n| self.can_step(p, n));
    }
}

impl WeightedPather for HeightMap {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for HeightMap {
    fn estimate(&self, from: Point, goal: Point) -> i32 {
        manhattan(from, goal)
    }
}
