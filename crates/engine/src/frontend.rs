//! Seams between the engine and its frontend: drawing and input.
//!
//! The engine never touches a terminal directly. A frontend implements
//! [`Renderer`] and [`InputSource`]; tests implement them with scripted fakes.

use anyhow::Result;

use crate::core::{Level, Npc, TileGrid};
use crate::types::{Coord, Direction, HeldKeys};

/// Campaign progress shown alongside the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    /// Zero-based index of the level being played.
    pub level_index: usize,
    pub level_count: usize,
    /// Levels cleared so far in this run.
    pub wins: usize,
}

/// Everything needed to draw one gameplay frame.
#[derive(Debug, Clone, Copy)]
pub struct LevelFrame<'a> {
    pub name: &'a str,
    pub tiles: &'a TileGrid,
    pub player: Coord,
    pub player_facing: Direction,
    pub npcs: &'a [Npc],
    pub exit: Coord,
    pub hud: Hud,
}

impl<'a> LevelFrame<'a> {
    pub fn new(level: &'a Level, hud: Hud) -> Self {
        Self {
            name: level.name(),
            tiles: level.tiles(),
            player: level.player(),
            player_facing: level.player_facing(),
            npcs: level.npcs(),
            exit: level.exit(),
            hud,
        }
    }
}

/// Full-screen, non-gameplay screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Title; the prompt line appears after the first key press.
    Title { show_prompt: bool },
    Help,
    /// Caught by an enemy.
    GameOver { wins: usize, total: usize },
    /// Every level cleared.
    Victory { total: usize },
}

/// Keys that matter outside gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    /// Space.
    Confirm,
    /// H.
    Help,
    /// Esc.
    Back,
    /// Quit chord (q / Ctrl-C).
    Quit,
    /// Any other key.
    Other,
}

pub trait Renderer {
    fn draw_level(&mut self, frame: &LevelFrame<'_>) -> Result<()>;
    fn draw_screen(&mut self, screen: Screen) -> Result<()>;
}

pub trait InputSource {
    /// Drain pending events; `true` once a quit was requested.
    fn poll_quit(&mut self) -> Result<bool>;

    /// Directions currently held.
    fn poll_held(&mut self) -> Result<HeldKeys>;

    /// Next menu key pressed since the last call, if any.
    fn poll_menu(&mut self) -> Result<Option<MenuKey>>;

    /// Drop menu keys pressed so far.
    fn discard_menu(&mut self) -> Result<()> {
        Ok(())
    }
}
