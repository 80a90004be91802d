//! **gridwalk-core**: core types for grid search.
//!
//! Geometry primitives, the [`Coord`] trait implemented by every search
//! state, occupancy fields over static and time-expanded grids, and a thin
//! helper for reading line-oriented input.

pub mod coord;
pub mod field;
pub mod geom;
pub mod input;

pub use coord::Coord;
pub use field::{OccupancyField, PeriodicField};
pub use geom::{Point, Range, RangeIter, TimePoint};
