//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the level rules: map parsing, derived grids, entity
//! placement, enemy and player movement, and win/lose detection. It has no
//! dependencies on the terminal, timing, or I/O beyond reading map files, which
//! makes it:
//!
//! - **Deterministic**: the same seed produces the same tiles and enemy paths
//! - **Testable**: every rule is a plain function over plain data
//! - **Portable**: the engine drives it from any frontend (terminal, headless)
//!
//! # Module Structure
//!
//! - [`map`]: ASCII map parsing into a column-major [`RawMap`]
//! - [`grid`]: [`WalkabilityGrid`] and [`TileGrid`] derived from a map
//! - [`entities`]: start/exit/enemy extraction from marker characters
//! - [`npc`]: enemy movement policies
//! - [`player`]: held-key movement resolution
//! - [`collision`]: caught / escaped checks
//! - [`level`]: one playable map bundling all of the above
//! - [`rng`]: seedable random source
//!
//! # Example
//!
//! ```
//! use tile_escape_core::{collision, Level, LevelOptions, SimpleRng};
//! use tile_escape_core::types::{Direction, HeldKeys, LevelOutcome};
//!
//! let mut level = Level::parse("demo", "S X", &LevelOptions::default(), &mut SimpleRng::new(1)).unwrap();
//! let east = HeldKeys::from_directions(&[Direction::East]);
//! level.tick_player(east);
//! level.tick_player(east);
//! assert_eq!(collision::resolve(&level), Some(LevelOutcome::Cleared));
//! ```

pub mod collision;
pub mod entities;
pub mod grid;
pub mod level;
pub mod map;
pub mod npc;
pub mod player;
pub mod rng;

pub use tile_escape_types as types;

// Re-export commonly used types for convenience
pub use entities::{Entities, Npc, NpcSprite};
pub use grid::{TileGrid, WalkabilityGrid};
pub use level::{level_name_from_file, Level, LevelOptions};
pub use map::{MapFormatError, RawMap};
pub use npc::NpcController;
pub use player::PlayerStep;
pub use rng::SimpleRng;
