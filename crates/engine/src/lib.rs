//! Game engine - frame loop, level sequencing and menus
//!
//! The engine drives [`tile_escape_core`] levels frame by frame. It talks to the
//! outside world only through the traits in [`frontend`]:
//!
//! - [`Renderer`]: draws a gameplay frame or a full-screen [`Screen`]
//! - [`InputSource`]: quit signal, held directions, menu keys
//! - [`FramePacer`]: waits for the next frame and reports its length
//!
//! # Timing
//!
//! Frames are paced at a fixed rate (60 Hz by default). Two independent
//! [`TickClock`]s ride on the frame time: the enemy clock (period set per level)
//! and the player clock (fixed period). Neither fires more than once per frame.

pub mod campaign;
pub mod clock;
pub mod frontend;
pub mod game_loop;
pub mod manifest;
pub mod menu;

pub use tile_escape_core as core;
pub use tile_escape_types as types;

pub use campaign::{Campaign, CampaignReport, Verdict};
pub use clock::{FixedPacer, FramePacer, SleepPacer, TickClock};
pub use frontend::{Hud, InputSource, LevelFrame, MenuKey, Renderer, Screen};
pub use game_loop::{GameLoop, LevelSession, LoopConfig};
pub use manifest::{LevelManifest, LevelOverride, MANIFEST_FILE};
pub use menu::{run_title, wait_for_key, MenuExit, TitleMenu};
