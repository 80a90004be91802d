//! Text-defined grid worlds and their searches.
//!
//! - [`Maze`]: walls and open floor, unit-cost cardinal moves
//! - [`HeightMap`]: letter elevations with a one-level climbing limit
//! - [`Valley`]: a walled basin with drifting blizzards, searched in
//!   space-time under a [`GrowthPolicy`](gridwalk_paths::GrowthPolicy)

mod error;
mod heightmap;
mod maze;
pub mod render;
mod text;
mod valley;

pub use error::ParseError;
pub use heightmap::HeightMap;
pub use maze::Maze;
pub use valley::{Blizzard, Drift, Heading, Valley};
