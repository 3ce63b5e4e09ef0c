//! Title/help menu and the end-of-run screens.

use anyhow::Result;
use log::debug;

use crate::clock::FramePacer;
use crate::frontend::{InputSource, MenuKey, Renderer, Screen};

/// What the player chose on the title screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    Play,
    Quit,
}

/// Title menu state machine.
///
/// The prompt line is hidden until the first key press, and Space only starts
/// the game once the prompt is visible. H opens help; Esc closes help, or exits
/// from the title itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TitleMenu {
    prompt_visible: bool,
    help_open: bool,
}

impl TitleMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        if self.help_open {
            Screen::Help
        } else {
            Screen::Title {
                show_prompt: self.prompt_visible,
            }
        }
    }

    pub fn handle(&mut self, key: MenuKey) -> Option<MenuExit> {
        if key == MenuKey::Quit {
            return Some(MenuExit::Quit);
        }

        if self.help_open {
            if key == MenuKey::Back {
                self.help_open = false;
            }
            return None;
        }

        match key {
            MenuKey::Confirm if self.prompt_visible => return Some(MenuExit::Play),
            MenuKey::Help => self.help_open = true,
            MenuKey::Back => return Some(MenuExit::Quit),
            _ => {}
        }
        self.prompt_visible = true;
        None
    }
}

/// Show the title menu until the player starts or quits.
pub fn run_title(
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    pacer: &mut dyn FramePacer,
) -> Result<MenuExit> {
    let mut menu = TitleMenu::new();
    loop {
        renderer.draw_screen(menu.screen())?;
        pacer.wait_next_frame();
        while let Some(key) = input.poll_menu()? {
            debug!("menu key {:?}", key);
            if let Some(exit) = menu.handle(key) {
                return Ok(exit);
            }
        }
    }
}

/// Show `screen` until a key is pressed after it appeared, and return that key.
pub fn wait_for_key(
    screen: Screen,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    pacer: &mut dyn FramePacer,
) -> Result<MenuKey> {
    input.discard_menu()?;
    loop {
        renderer.draw_screen(screen)?;
        pacer.wait_next_frame();
        if let Some(key) = input.poll_menu()? {
            return Ok(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_key_reveals_prompt_without_starting() {
        let mut menu = TitleMenu::new();
        assert_eq!(menu.screen(), Screen::Title { show_prompt: false });
        assert_eq!(menu.handle(MenuKey::Confirm), None);
        assert_eq!(menu.screen(), Screen::Title { show_prompt: true });
        assert_eq!(menu.handle(MenuKey::Confirm), Some(MenuExit::Play));
    }

    #[test]
    fn test_help_opens_and_closes() {
        let mut menu = TitleMenu::new();
        assert_eq!(menu.handle(MenuKey::Help), None);
        assert_eq!(menu.screen(), Screen::Help);
        // Space does nothing inside help.
        assert_eq!(menu.handle(MenuKey::Confirm), None);
        assert_eq!(menu.screen(), Screen::Help);
        assert_eq!(menu.handle(MenuKey::Back), None);
        assert_eq!(menu.screen(), Screen::Title { show_prompt: true });
    }

    #[test]
    fn test_escape_on_title_quits() {
        let mut menu = TitleMenu::new();
        assert_eq!(menu.handle(MenuKey::Back), Some(MenuExit::Quit));
    }

    #[test]
    fn test_quit_chord_quits_from_help() {
        let mut menu = TitleMenu::new();
        menu.handle(MenuKey::Help);
        assert_eq!(menu.handle(MenuKey::Quit), Some(MenuExit::Quit));
    }
}
