//! Occupancy fields: dense "is this cell blocked?" bitmaps over a bounded
//! coordinate space.
//!
//! [`OccupancyField`] works for any [`Coord`] and maps a coordinate to a
//! linear offset with per-axis strides. [`PeriodicField`] stores one layer
//! per tick of a repeating hazard cycle and exposes a longer time axis (the
//! *horizon*) on top of it.

use crate::coord::Coord;
use crate::geom::{Point, Range, TimePoint};

// ---------------------------------------------------------------------------
// OccupancyField
// ---------------------------------------------------------------------------

/// A dense boolean field over the half-open box `[min, max)`.
///
/// Every in-bounds coordinate owns exactly one bit. Querying an
/// out-of-bounds coordinate is a caller bug; check with
/// [`in_bounds`](Self::in_bounds) first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyField<C> {
    min: C,
    max: C,
    strides: Vec<usize>,
    cells: Vec<bool>,
}

impl<C: Coord> OccupancyField<C> {
    /// Create an all-open field covering `[min, max)`.
    pub fn new(min: C, max: C) -> Self {
        let mut strides = Vec::with_capacity(C::DIMS);
        let mut len = 1usize;
        for i in 0..C::DIMS {
            strides.push(len);
            len *= (max.axis(i) - min.axis(i)).max(0) as usize;
        }
        Self {
            min,
            max,
            strides,
            cells: vec![false; len],
        }
    }

    /// Inclusive lower corner.
    #[inline]
    pub fn min(&self) -> C {
        self.min
    }

    /// Exclusive upper corner.
    #[inline]
    pub fn max(&self) -> C {
        self.max
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the field has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the field on every axis.
    #[inline]
    pub fn in_bounds(&self, c: C) -> bool {
        (0..C::DIMS).all(|i| c.axis(i) >= self.min.axis(i) && c.axis(i) < self.max.axis(i))
    }

    #[inline]
    fn offset(&self, c: C) -> usize {
        debug_assert!(self.in_bounds(c), "{c:?} outside occupancy field");
        (0..C::DIMS)
            .map(|i| (c.axis(i) - self.min.axis(i)) as usize * self.strides[i])
            .sum()
    }

    /// Whether `c` is blocked.
    #[inline]
    pub fn test(&self, c: C) -> bool {
        self.cells[self.offset(c)]
    }

    /// Mark `c` as blocked.
    #[inline]
    pub fn set(&mut self, c: C) {
        let i = self.offset(c);
        self.cells[i] = true;
    }

    /// Mark `c` as open.
    #[inline]
    pub fn clear(&mut self, c: C) {
        let i = self.offset(c);
        self.cells[i] = false;
    }

    /// Number of blocked cells.
    pub fn count_blocked(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }
}

impl OccupancyField<Point> {
    /// Create an all-open 2D field covering `rng`.
    pub fn from_range(rng: Range) -> Self {
        Self::new(rng.min, rng.max)
    }

    /// The 2D extent of the field.
    pub fn range(&self) -> Range {
        Range {
            min: self.min,
            max: self.max,
        }
    }
}

// ---------------------------------------------------------------------------
// PeriodicField
// ---------------------------------------------------------------------------

/// A time-expanded field whose occupancy repeats every `period` ticks.
///
/// Only `period` layers are stored. Time coordinates are valid in
/// `[0, horizon)`; layer lookups use `t mod period`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodicField {
    layers: OccupancyField<TimePoint>,
    ground: Range,
    period: i32,
    horizon: i32,
}

impl PeriodicField {
    /// Create an all-open field over `ground` with the given cycle length
    /// and time horizon.
    pub fn new(ground: Range, period: i32, horizon: i32) -> Self {
        let period = period.max(1);
        Self {
            layers: OccupancyField::new(ground.min.at_time(0), ground.max.at_time(period)),
            ground,
            period,
            horizon: horizon.max(0),
        }
    }

    /// Cycle length in ticks.
    #[inline]
    pub fn period(&self) -> i32 {
        self.period
    }

    /// Exclusive upper bound of the time axis.
    #[inline]
    pub fn horizon(&self) -> i32 {
        self.horizon
    }

    /// The ground-plane extent.
    #[inline]
    pub fn ground(&self) -> Range {
        self.ground
    }

    #[inline]
    fn layer(&self, c: TimePoint) -> TimePoint {
        TimePoint::new(c.x, c.y, c.t.rem_euclid(self.period))
    }

    /// Whether `c` is on the ground plane and within `[0, horizon)`.
    #[inline]
    pub fn in_bounds(&self, c: TimePoint) -> bool {
        self.ground.contains(c.ground()) && c.t >= 0 && c.t < self.horizon
    }

    /// Whether `c` is blocked.
    #[inline]
    pub fn test(&self, c: TimePoint) -> bool {
        self.layers.test(self.layer(c))
    }

    /// Mark `(x, y, t mod period)` as blocked.
    #[inline]
    pub fn set(&mut self, c: TimePoint) {
        let c = self.layer(c);
        self.layers.set(c);
    }

    /// Block `p` at every tick.
    pub fn block_always(&mut self, p: Point) {
        for t in 0..self.period {
            self.layers.set(p.at_time(t));
        }
    }

    /// Number of blocked cells across all stored layers.
    pub fn count_blocked(&self) -> usize {
        self.layers.count_blocked()
    }
}
