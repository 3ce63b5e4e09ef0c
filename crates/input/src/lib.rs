//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the engine's [`crate::engine::InputSource`]:
//! arrow keys and WASD become held [`crate::types::Direction`]s, Esc / q / Ctrl-C
//! request quit, and every press is also queued as a [`crate::engine::MenuKey`]
//! for the title and end screens.

pub mod held;
pub mod map;
pub mod source;

pub use tile_escape_engine as engine;
pub use tile_escape_types as types;

pub use held::HeldKeyTracker;
pub use map::{direction_for_key, menu_key, should_quit};
pub use source::CrosstermInput;
