//! Blizzard valleys: a walled basin crossed while hazards drift through it.
//!
//! ```text
//! #.######
//! #>>.<^<#
//! #.<..<<#
//! #>v.><>#
//! #<^v^^>#
//! ######.#
//! ```
//!
//! The gap in the top wall is the entry and the gap in the bottom wall the
//! exit. Every tick each blizzard (`^ > v <`) moves one cell in its heading
//! and wraps around inside the interior. Each tick a walker moves to a
//! cardinal neighbor or waits, and must never share a cell with a wall or a
//! blizzard.
//!
//! Blizzard motion repeats every `lcm(interior width, interior height)`
//! ticks, so the whole simulation fits in a [`PeriodicField`] with that
//! many layers. Searches run up to a finite time horizon that a
//! [`GrowthPolicy`] enlarges when no route fits.

use gridwalk_core::{PeriodicField, Point, Range, TimePoint};
use gridwalk_paths::{
    AstarPather, CapacityExceeded, GrowthPolicy, Leg, Path, Pather, Route, WeightedPather,
    astar_cost, astar_path, compose, neighbors, spatial_manhattan,
};

use crate::error::ParseError;
use crate::text::{mark_once, scan};

/// Direction a blizzard travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Parse `^`, `>`, `v` or `<`.
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '^' => Some(Self::North),
            '>' => Some(Self::East),
            'v' => Some(Self::South),
            '<' => Some(Self::West),
            _ => None,
        }
    }

    /// The map symbol for this heading.
    pub fn symbol(self) -> char {
        match self {
            Self::North => '^',
            Self::East => '>',
            Self::South => 'v',
            Self::West => '<',
        }
    }

    /// One tick of motion.
    pub fn offset(self) -> Point {
        match self {
            Self::North => Point::new(0, -1),
            Self::East => Point::new(1, 0),
            Self::South => Point::new(0, 1),
            Self::West => Point::new(-1, 0),
        }
    }
}

/// A blizzard's starting cell and heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blizzard {
    pub pos: Point,
    pub heading: Heading,
}

impl Blizzard {
    /// Where the blizzard is after `t` ticks inside `interior`.
    pub fn position_at(self, interior: Range, t: i32) -> Point {
        let size = interior.size();
        let d = self.heading.offset() * t;
        let rel = self.pos - interior.min + d;
        interior.min + Point::new(rel.x.rem_euclid(size.x), rel.y.rem_euclid(size.y))
    }
}

/// Move one cell along `d`, re-entering the opposite side of `interior`
/// when leaving it.
fn drift(interior: Range, p: Point, d: Point) -> Point {
    let n = p + d;
    let wrap = |v: i32, lo: i32, hi: i32| {
        if v < lo {
            hi - 1
        } else if v >= hi {
            lo
        } else {
            v
        }
    };
    Point::new(
        wrap(n.x, interior.min.x, interior.max.x),
        wrap(n.y, interior.min.y, interior.max.y),
    )
}

fn gcd(a: i32, b: i32) -> i32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// A parsed blizzard valley.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valley {
    rng: Range,
    walls: Vec<Point>,
    blizzards: Vec<Blizzard>,
    entry: Point,
    exit: Point,
}

impl Valley {
    /// Parse a valley.
    ///
    /// The outer ring must be walls except for exactly one gap in the top
    /// row (the entry) and one in the bottom row (the exit). Blizzards may
    /// only start inside the interior, which must not be empty. Walls inside
    /// the interior are allowed and block at every tick.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut walls = Vec::new();
        let mut open = Vec::new();
        let mut blizzards = Vec::new();
        let rng = scan(input, |p, ch| {
            match ch {
                '#' => walls.push(p),
                '.' => open.push(p),
                _ => match Heading::from_symbol(ch) {
                    Some(heading) => blizzards.push(Blizzard { pos: p, heading }),
                    None => return Err(ParseError::InvalidSymbol { ch, pos: p }),
                },
            }
            Ok(())
        })?;

        let interior = Self::interior_of(rng);
        if interior.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some(b) = blizzards.iter().find(|b| !interior.contains(b.pos)) {
            return Err(ParseError::InvalidSymbol {
                ch: b.heading.symbol(),
                pos: b.pos,
            });
        }

        let mut entry = None;
        let mut exit = None;
        for &p in open.iter().filter(|&&p| !interior.contains(p)) {
            if p.y == rng.min.y {
                mark_once(&mut entry, '.', p)?;
            } else if p.y == rng.max.y - 1 {
                mark_once(&mut exit, '.', p)?;
            } else {
                return Err(ParseError::InvalidSymbol { ch: '.', pos: p });
            }
        }
        let entry = entry.ok_or(ParseError::MissingStart)?;
        let exit = exit.ok_or(ParseError::MissingGoal)?;

        log::debug!(
            "valley: {rng}, {} blizzards, entry {entry}, exit {exit}",
            blizzards.len()
        );
        Ok(Self {
            rng,
            walls,
            blizzards,
            entry,
            exit,
        })
    }

    fn interior_of(rng: Range) -> Range {
        if rng.width() < 3 || rng.height() < 3 {
            return Range::default();
        }
        Range::new(rng.min.x + 1, rng.min.y + 1, rng.max.x - 1, rng.max.y - 1)
    }

    /// The full extent, walls included.
    pub fn range(&self) -> Range {
        self.rng
    }

    /// The area blizzards move in.
    pub fn interior(&self) -> Range {
        Self::interior_of(self.rng)
    }

    /// The gap in the top wall.
    pub fn entry(&self) -> Point {
        self.entry
    }

    /// The gap in the bottom wall.
    pub fn exit(&self) -> Point {
        self.exit
    }

    /// Blizzards at their starting positions.
    pub fn blizzards(&self) -> &[Blizzard] {
        &self.blizzards
    }

    /// Ticks after which every blizzard is back where it started.
    pub fn cycle(&self) -> i32 {
        let size = self.interior().size();
        size.x / gcd(size.x, size.y) * size.y
    }

    /// Build the occupancy of the valley over `cycle() * multiplier` ticks.
    ///
    /// Each blizzard is stepped through one full cycle; walls are blocked on
    /// every layer.
    pub fn field(&self, multiplier: u32) -> PeriodicField {
        let period = self.cycle();
        let horizon = period.saturating_mul(i32::try_from(multiplier).unwrap_or(i32::MAX));
        let mut field = PeriodicField::new(self.rng, period, horizon);
        for &w in &self.walls {
            field.block_always(w);
        }
        let interior = self.interior();
        for b in &self.blizzards {
            let mut p = b.pos;
            for t in 0..period {
                field.set(p.at_time(t));
                p = drift(interior, p, b.heading.offset());
            }
        }
        field
    }

    /// Fewest ticks from the entry (at tick 0) to the exit.
    pub fn crossing(&self, policy: &GrowthPolicy) -> Result<i32, CapacityExceeded> {
        policy.run(|m| {
            let field = self.field(m);
            astar_cost(&Drift(&field), self.entry.at_time(0), self.exit)
        })
    }

    /// A fastest crossing, one step per tick.
    pub fn crossing_path(
        &self,
        policy: &GrowthPolicy,
    ) -> Result<Path<TimePoint>, CapacityExceeded> {
        policy.run(|m| {
            let field = self.field(m);
            astar_path(&Drift(&field), self.entry.at_time(0), self.exit)
        })
    }

    /// Entry to exit, back to the entry, and to the exit again, each leg
    /// leaving as soon as the previous one arrived.
    pub fn round_trip(&self, policy: &GrowthPolicy) -> Result<Route, CapacityExceeded> {
        let there = Leg::new(self.entry, self.exit);
        let legs = [there, there.reversed(), there];
        policy.run(|m| {
            let field = self.field(m);
            compose(&Drift(&field), &legs, 0)
        })
    }

    /// Draw the valley as it looks at tick `t`. Cells holding more than one
    /// blizzard show the count.
    pub fn render_at(&self, t: i32) -> String {
        let interior = self.interior();
        let mut counts = vec![(0u32, ' '); self.rng.len()];
        let rng = self.rng;
        let idx = |p: Point| ((p.y - rng.min.y) * rng.width() + (p.x - rng.min.x)) as usize;
        for b in &self.blizzards {
            let slot = &mut counts[idx(b.position_at(interior, t))];
            slot.0 += 1;
            slot.1 = b.heading.symbol();
        }
        let mut out = String::with_capacity(self.rng.len() + self.rng.height() as usize);
        for p in self.rng {
            let ch = match counts[idx(p)] {
                _ if self.walls.contains(&p) => '#',
                (0, _) => '.',
                (1, symbol) => symbol,
                (n, _) => char::from_digit(n.min(9), 10).unwrap_or('*'),
            };
            out.push(ch);
            if p.x == self.rng.max.x - 1 {
                out.push('\n');
            }
        }
        out
    }
}

/// Time-expanded pather over a [`PeriodicField`]: cardinal moves and waits,
/// one tick each, onto in-bounds unblocked cells.
#[derive(Debug, Clone, Copy)]
pub struct Drift<'a>(pub &'a PeriodicField);

impl Pather for Drift<'_> {
    type Coord = TimePoint;

    fn neighbors(&self, p: TimePoint, buf: &mut Vec<TimePoint>) {
        neighbors::cardinal_or_wait(p, buf, |n| self.0.in_bounds(n) && !self.0.test(n));
    }
}

impl WeightedPather for Drift<'_> {
    fn cost(&self, _from: TimePoint, _to: TimePoint) -> i32 {
        1
    }
}

impl AstarPather for Drift<'_> {
    fn estimate(&self, from: TimePoint, goal: Point) -> i32 {
        spatial_manhattan(from, goal)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn blizzard_json() {
        let b = Blizzard {
            pos: Point::new(3, 1),
            heading: Heading::West,
        };
        let json = serde_json::to_string(&b).unwrap();
        let back: Blizzard = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
