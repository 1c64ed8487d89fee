//! __Bag O' Life__ is a generalized Life-like cellular automaton
//! whose cells remember their ages.
//!
//! Each cell holds an age: `0` for dead, otherwise the number of
//! consecutive generations it has been alive, saturating at an age limit.
//! The rule is given by birth and survival sets of neighbor counts, where
//! the 3×3 neighborhood includes the cell itself. In age-weighted mode,
//! a neighbor only counts when its age is in a configured set.
//!
//! Ages are displayed through a [`Palette`] derived from a catalog of
//! color schemes.
//!
//! # Example
//!
//! ```rust
//! use bagolife_lib::Config;
//!
//! // The default rule is B24/S456; use Conway's Life instead.
//! let config = Config::new(8, 8).set_preset(Some(0));
//! let mut world = config.world().unwrap();
//! world.seed(&[[1u32, 1, 1]]).unwrap();
//!
//! world.step();
//! assert_eq!(world.generation(), 1);
//! assert_eq!(world.grid().population(), 5);
//! ```

mod cadence;
mod config;
mod error;
mod grid;
#[cfg(feature = "read-rle")]
mod pattern;
pub mod palette;
pub mod rules;
mod world;

pub use cadence::Cadence;
pub use config::{age_limit, Config, MAX_RESOLUTION, MAX_SIZE, MIN_RESOLUTION, MIN_SIZE};
pub use error::Error;
pub use grid::{Age, Coord, Grid, Pattern, BORN, DEAD};
#[cfg(feature = "read-rle")]
pub use pattern::{parse_pattern, parse_plaintext, parse_rle};
pub use palette::{derive_palette, Palette, PaletteSettings, Rgb, Selection};
pub use rules::{randomize, select_preset, AgeLife, AgeSet, Counts, Life, RuleSet};
pub use world::{step, World};
