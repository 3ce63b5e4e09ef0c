//! Views: map a level frame or a full-screen screen into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::{LevelFrame, Screen};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, Direction, TileKind, TREE_VARIANTS, WATER_VARIANTS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const GRASS: Rgb = Rgb::new(46, 104, 46);

/// Terminal columns per map cell; 2x1 roughly squares typical glyphs.
pub const CELL_W: u16 = 2;

/// Rows above the map frame (level title).
const HEADER_ROWS: u16 = 1;

#[derive(Debug, Clone, Default)]
pub struct LevelView;

impl LevelView {
    pub fn new() -> Self {
        Self
    }

    /// Render a gameplay frame into `fb`, resizing it to `viewport`.
    pub fn render_level_into(&self, frame: &LevelFrame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let map_w = (frame.tiles.width() as u16).saturating_mul(CELL_W);
        let map_h = frame.tiles.height() as u16;
        let frame_w = map_w.saturating_add(2);
        let frame_h = map_h.saturating_add(2);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = HEADER_ROWS + viewport.height.saturating_sub(frame_h.saturating_add(HEADER_ROWS)) / 2;

        let title = CellStyle::default().bold();
        fb.put_str_centered(origin_y - HEADER_ROWS, frame.name, title);

        draw_border(fb, origin_x, origin_y, frame_w, frame_h, CellStyle::default());

        let cell_origin = (origin_x + 1, origin_y + 1);
        for x in 0..frame.tiles.width() as i32 {
            for y in 0..frame.tiles.height() as i32 {
                let at = Coord::new(x, y);
                if let Some(tile) = frame.tiles.get(at) {
                    let (glyph, style) = tile_glyph(tile);
                    put_cell(fb, cell_origin, at, glyph, style);
                }
            }
        }

        let knight = CellStyle::new(Rgb::new(230, 60, 60), GRASS).bold();
        for npc in frame.npcs {
            put_cell(fb, cell_origin, npc.pos, facing_glyph('K', npc.facing), knight);
        }

        let hero = CellStyle::new(Rgb::new(250, 230, 120), GRASS).bold();
        put_cell(
            fb,
            cell_origin,
            frame.player,
            facing_glyph('@', frame.player_facing),
            hero,
        );

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, frame, viewport, panel_x, origin_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render_level(&self, frame: &LevelFrame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_level_into(frame, viewport, &mut fb);
        fb
    }

    pub fn render_screen_into(&self, screen: Screen, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let mid = viewport.height / 2;

        match screen {
            Screen::Title { show_prompt } => {
                fb.clear(CellStyle::new(BLACK, WHITE));
                let title = CellStyle::new(Rgb::new(200, 30, 30), WHITE).bold();
                fb.put_str_centered(mid.saturating_sub(2), "TILE ESCAPE", title);
                if show_prompt {
                    let prompt = CellStyle::new(Rgb::new(30, 60, 200), WHITE);
                    fb.put_str_centered(
                        mid + 1,
                        "Press Space to start, H for help, Esc to exit the game",
                        prompt,
                    );
                }
            }
            Screen::Help => {
                let text = CellStyle::new(BLACK, WHITE);
                fb.clear(text);
                fb.put_str(2, 1, "Arrow keys or WASD move you one tile at a time.", text);
                fb.put_str(2, 2, "Reach the exit [] before a knight (K) catches you.", text);
                fb.put_str(2, 4, "Press Esc to go back to the main menu.", text);
            }
            Screen::GameOver { wins, total } => {
                fb.clear(CellStyle::new(WHITE, BLACK));
                let big = CellStyle::new(Rgb::new(230, 50, 50), BLACK).bold();
                fb.put_str_centered(mid.saturating_sub(2), "GAME OVER", big);
                let line = format!("Cleared {} of {} levels", wins, total);
                fb.put_str_centered(mid, &line, CellStyle::new(WHITE, BLACK));
                fb.put_str_centered(mid + 2, "Press any key", CellStyle::new(Rgb::new(150, 150, 150), BLACK));
            }
            Screen::Victory { total } => {
                fb.clear(CellStyle::new(WHITE, BLACK));
                let big = CellStyle::new(Rgb::new(250, 220, 80), BLACK).bold();
                fb.put_str_centered(mid.saturating_sub(2), "YOU ESCAPED!", big);
                let line = format!("All {} levels cleared", total);
                fb.put_str_centered(mid, &line, CellStyle::new(WHITE, BLACK));
                fb.put_str_centered(
                    mid + 2,
                    "Press any key to exit",
                    CellStyle::new(Rgb::new(150, 150, 150), BLACK),
                );
            }
        }
    }

    pub fn render_screen(&self, screen: Screen, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_screen_into(screen, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, frame: &LevelFrame<'_>, viewport: Viewport, x: u16, y: u16) {
        if x.saturating_add(12) > viewport.width {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let hud = frame.hud;

        fb.put_str(x, y, "LEVEL", label);
        let w = fb.put_u32(x, y + 1, hud.level_index as u32 + 1, value);
        fb.put_str(x + w + 1, y + 1, "of", value);
        fb.put_u32(x + w + 4, y + 1, hud.level_count as u32, value);

        fb.put_str(x, y + 3, "CLEARED", label);
        fb.put_u32(x, y + 4, hud.wins as u32, value);

        fb.put_str(x, y + 6, "KNIGHTS", label);
        fb.put_u32(x, y + 7, frame.npcs.len() as u32, value);

        fb.put_str(x, y + 9, "Esc quits", CellStyle::new(Rgb::new(140, 140, 140), BLACK));
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;
    fb.put(x, y, '┌', style);
    fb.put(right, y, '┐', style);
    fb.put(x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put(cx, y, '─', style);
        fb.put(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put(x, cy, '│', style);
        fb.put(right, cy, '│', style);
    }
}

/// Draw a two-column map cell; off-grid coordinates are skipped.
fn put_cell(fb: &mut FrameBuffer, origin: (u16, u16), at: Coord, glyph: [char; 2], style: CellStyle) {
    if at.x < 0 || at.y < 0 {
        return;
    }
    let px = origin.0.saturating_add((at.x as u16).saturating_mul(CELL_W));
    let py = origin.1.saturating_add(at.y as u16);
    fb.put(px, py, glyph[0], style);
    fb.put(px.saturating_add(1), py, glyph[1], style);
}

fn facing_glyph(body: char, facing: Direction) -> [char; 2] {
    match facing {
        Direction::North => [body, '▴'],
        Direction::South => [body, '▾'],
        Direction::East => [body, '▸'],
        Direction::West => ['◂', body],
    }
}

/// One glyph pair per water variant the tile generator can produce.
const WATER_GLYPHS: [[char; 2]; WATER_VARIANTS as usize] = [['≈', '≈'], ['~', '≈'], ['≈', '~']];

const TREE_GLYPHS: [[char; 2]; TREE_VARIANTS as usize] = [['♣', ' '], [' ', '♣'], ['♠', ' ']];

pub fn tile_glyph(tile: TileKind) -> ([char; 2], CellStyle) {
    match tile {
        TileKind::Grass => ([' ', ' '], CellStyle::new(WHITE, GRASS)),
        TileKind::Water(v) => (
            WATER_GLYPHS[v as usize % WATER_GLYPHS.len()],
            CellStyle::new(Rgb::new(150, 200, 255), Rgb::new(30, 70, 160)),
        ),
        TileKind::Tree(v) => (
            TREE_GLYPHS[v as usize % TREE_GLYPHS.len()],
            CellStyle::new(Rgb::new(20, 60, 20), GRASS).bold(),
        ),
        TileKind::Wall => (['█', '█'], CellStyle::new(Rgb::new(130, 130, 130), BLACK)),
        TileKind::Nothing => ([' ', ' '], CellStyle::new(WHITE, BLACK)),
        TileKind::Exit => (['[', ']'], CellStyle::new(Rgb::new(250, 220, 80), GRASS).bold()),
    }
}
