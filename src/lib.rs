//! Tile Escape (workspace facade crate).
//!
//! Re-exports the member crates under short names and holds the pieces only the
//! binaries need: environment config, argument parsing and logger setup.

pub mod cli;
pub mod config;
pub mod logging;

pub use tile_escape_core as core;
pub use tile_escape_engine as engine;
pub use tile_escape_input as input;
pub use tile_escape_term as term;
pub use tile_escape_types as types;

pub use config::GameConfig;
