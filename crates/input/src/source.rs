//! `InputSource` backed by crossterm's event queue.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use log::debug;

use crate::engine::{InputSource, MenuKey};
use crate::held::HeldKeyTracker;
use crate::map::{direction_for_key, menu_key, should_quit};
use crate::types::HeldKeys;

/// Menu keys buffered between polls; extra presses are dropped.
const MENU_QUEUE: usize = 16;

pub struct CrosstermInput {
    tracker: HeldKeyTracker,
    quit: bool,
    menu_keys: ArrayVec<MenuKey, MENU_QUEUE>,
    enhanced: bool,
}

impl CrosstermInput {
    pub fn new(key_release_timeout_ms: u32) -> Self {
        Self {
            tracker: HeldKeyTracker::new(key_release_timeout_ms),
            quit: false,
            menu_keys: ArrayVec::new(),
            enhanced: false,
        }
    }

    /// Ask the terminal for key release events when it supports them.
    ///
    /// Must be called after raw mode is enabled. Returns whether release events
    /// are now reported.
    pub fn enable_release_events(&mut self) -> Result<bool> {
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            self.enhanced = true;
            self.tracker.set_release_events(true);
        }
        debug!("key release events: {}", self.enhanced);
        Ok(self.enhanced)
    }

    /// Undo [`enable_release_events`](Self::enable_release_events).
    pub fn restore(&mut self) -> Result<()> {
        if self.enhanced {
            execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
            self.enhanced = false;
            self.tracker.set_release_events(false);
        }
        Ok(())
    }

    /// Feed one key event.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.kind {
            KeyEventKind::Press => {
                if should_quit(key) {
                    self.quit = true;
                }
                // Without release events auto-repeat also arrives as Press.
                let fresh = match direction_for_key(key.code) {
                    Some(dir) => {
                        let repeat = self.tracker.is_held(dir, now);
                        self.tracker.press(dir, now);
                        !repeat
                    }
                    None => true,
                };
                if fresh {
                    let _ = self.menu_keys.try_push(menu_key(key));
                }
            }
            KeyEventKind::Repeat => {
                if let Some(dir) = direction_for_key(key.code) {
                    self.tracker.press(dir, now);
                }
            }
            KeyEventKind::Release => {
                if let Some(dir) = direction_for_key(key.code) {
                    self.tracker.release(dir);
                }
            }
        }
    }

    fn pump(&mut self) -> Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, Instant::now());
            }
        }
        Ok(())
    }
}

impl InputSource for CrosstermInput {
    fn poll_quit(&mut self) -> Result<bool> {
        self.pump()?;
        // Gameplay does not consume menu keys; drop them so an end screen is not
        // dismissed by a key pressed while playing.
        self.menu_keys.clear();
        Ok(self.quit)
    }

    fn poll_held(&mut self) -> Result<HeldKeys> {
        Ok(self.tracker.held(Instant::now()))
    }

    fn poll_menu(&mut self) -> Result<Option<MenuKey>> {
        self.pump()?;
        // Esc means "back" in menus, not quit.
        self.quit = false;
        Ok(self.menu_keys.pop_at(0))
    }

    fn discard_menu(&mut self) -> Result<()> {
        self.pump()?;
        self.menu_keys.clear();
        Ok(())
    }
}
