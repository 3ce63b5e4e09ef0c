//! `Renderer` implementation for a real terminal.

use anyhow::Result;

use crate::engine::{LevelFrame, Renderer, Screen};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::view::{LevelView, Viewport};

/// Ties the pure view to the terminal: render into the framebuffer, then diff
/// it out. The viewport is re-read every frame so resizes take effect.
pub struct TerminalFrontend {
    view: LevelView,
    term: TerminalRenderer,
    fb: FrameBuffer,
}

impl Default for TerminalFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalFrontend {
    pub fn new() -> Self {
        Self {
            view: LevelView::new(),
            term: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }

    fn viewport() -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }
}

impl Renderer for TerminalFrontend {
    fn draw_level(&mut self, frame: &LevelFrame<'_>) -> Result<()> {
        self.view.render_level_into(frame, Self::viewport(), &mut self.fb);
        self.term.present(&mut self.fb)
    }

    fn draw_screen(&mut self, screen: Screen) -> Result<()> {
        self.view.render_screen_into(screen, Self::viewport(), &mut self.fb);
        self.term.present(&mut self.fb)
    }
}
