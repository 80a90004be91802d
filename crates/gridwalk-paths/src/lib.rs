//! Shortest-path search over grid-shaped state spaces.
//!
//! This crate provides:
//!
//! - **A\*** best-first search ([`AstarSearch`], [`astar_cost`], [`astar_path`])
//!   over any [`Coord`](gridwalk_core::Coord): static 2D grids or
//!   time-expanded grids with moving obstacles
//! - a [`Frontier`] open set that treats the caller's record table as the
//!   source of truth for scores
//! - **BFS** reference searches ([`bfs_cost`], [`bfs_distances`])
//! - multi-leg routes ([`compose`]) that carry elapsed time from leg to leg
//! - a [`GrowthPolicy`] for retrying over a longer time horizon
//!
//! Every search owns its state and drops it on return; nothing is cached
//! between calls.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | cost relaxation |
//! | [`AstarPather`] : [`WeightedPather`] | A*, route composition |

mod astar;
mod bfs;
mod composer;
mod distance;
mod error;
mod frontier;
mod growth;
pub mod neighbors;
mod traits;

pub use astar::{AstarSearch, Path, SearchState, astar_cost, astar_path};
pub use bfs::{bfs_cost, bfs_distances};
pub use composer::{Leg, Route, compose};
pub use distance::{manhattan, spatial_manhattan};
pub use error::CapacityExceeded;
pub use frontier::Frontier;
pub use growth::GrowthPolicy;
pub use traits::{AstarPather, Pather, WeightedPather};
