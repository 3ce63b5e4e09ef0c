//! Terminal frontend.
//!
//! Levels and screens are rendered into a plain framebuffer (no widget layer)
//! and flushed to the terminal as a diff against the previous frame. Map cells
//! are two columns wide so the grid looks roughly square.

pub mod fb;
pub mod frontend;
pub mod renderer;
pub mod view;

pub use tile_escape_core as core;
pub use tile_escape_engine as engine;
pub use tile_escape_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frontend::TerminalFrontend;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{tile_glyph, LevelView, Viewport, CELL_W};
