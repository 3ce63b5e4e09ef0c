//! Per-level frame loop.
//!
//! Each frame runs in a fixed order:
//!
//! 1. quit check (ends the whole run)
//! 2. held-key poll
//! 3. enemy tick, if the enemy clock fired
//! 4. player tick, if the player clock fired
//! 5. loss check (returns without drawing)
//! 6. clear check
//! 7. draw
//!
//! Collision checks run every frame, whether or not a tick happened.

use anyhow::Result;
use log::{debug, info};

use crate::clock::{FramePacer, TickClock};
use crate::core::{collision, Level, NpcController};
use crate::frontend::{Hud, InputSource, LevelFrame, Renderer};
use crate::types::{LevelOutcome, DEFAULT_FRAME_HZ, PLAYER_TICK_MS};

/// Level-independent loop timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    pub frame_hz: u32,
    pub player_tick_ms: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            frame_hz: DEFAULT_FRAME_HZ,
            player_tick_ms: PLAYER_TICK_MS,
        }
    }
}

/// Clocks for the level currently being played.
#[derive(Debug, Clone)]
pub struct LevelSession {
    enemy_clock: TickClock,
    player_clock: TickClock,
    frames: u64,
}

impl LevelSession {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

pub struct GameLoop {
    config: LoopConfig,
    npcs: NpcController,
}

impl GameLoop {
    pub fn new(config: LoopConfig, npcs: NpcController) -> Self {
        Self { config, npcs }
    }

    /// Fresh clocks for `level`: its own enemy period, the shared player period.
    pub fn session(&self, level: &Level) -> LevelSession {
        LevelSession {
            enemy_clock: TickClock::new(level.enemy_tick_ms()),
            player_clock: TickClock::new(self.config.player_tick_ms),
            frames: 0,
        }
    }

    /// Run one frame. `None` means the level is still running.
    pub fn step(
        &mut self,
        session: &mut LevelSession,
        level: &mut Level,
        hud: Hud,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        elapsed_ms: u32,
    ) -> Result<Option<LevelOutcome>> {
        session.frames += 1;

        if input.poll_quit()? {
            return Ok(Some(LevelOutcome::Quit));
        }
        let held = input.poll_held()?;

        if session.enemy_clock.advance(elapsed_ms) {
            level.tick_npcs(&mut self.npcs);
        }
        if session.player_clock.advance(elapsed_ms) {
            let step = level.tick_player(held);
            if step.moved {
                debug!("player -> {:?} facing {:?}", step.pos, step.facing);
            }
        }

        if let Some(outcome) = collision::resolve(level) {
            return Ok(Some(outcome));
        }

        renderer.draw_level(&LevelFrame::new(level, hud))?;
        Ok(None)
    }

    /// Play `level` until it is cleared, lost, or quit.
    pub fn run_level(
        &mut self,
        level: &mut Level,
        hud: Hud,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        pacer: &mut dyn FramePacer,
    ) -> Result<LevelOutcome> {
        info!("Entering \"{}\"", level.name());
        let mut session = self.session(level);

        loop {
            let elapsed_ms = pacer.wait_next_frame();
            if let Some(outcome) = self.step(&mut session, level, hud, input, renderer, elapsed_ms)? {
                match outcome {
                    LevelOutcome::Cleared => info!("You escaped \"{}\"", level.name()),
                    LevelOutcome::Lost => info!("Caught in \"{}\"", level.name()),
                    LevelOutcome::Quit => info!("Quit during \"{}\"", level.name()),
                }
                debug!("level {:?} ended after {} frames", level.name(), session.frames());
                return Ok(outcome);
            }
        }
    }
}
