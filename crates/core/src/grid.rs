//! Grid module - walkability and tile grids derived from a [`RawMap`]
//!
//! Both grids share the map's dimensions and use flat column-major storage
//! (`x * height + y`). Lookups outside the grid are answered, never indexed:
//! an off-grid cell is simply not walkable.

use crate::map::RawMap;
use crate::rng::SimpleRng;
use crate::types::{Coord, TileKind, ENEMY_MARKER, EXIT_MARKER, START_MARKER, TREE_VARIANTS, WATER_VARIANTS};

#[inline(always)]
fn index(width: usize, height: usize, at: Coord) -> Option<usize> {
    if at.x < 0 || at.y < 0 || at.x as usize >= width || at.y as usize >= height {
        return None;
    }
    Some((at.x as usize) * height + (at.y as usize))
}

/// Whether a map character can be stood on.
pub fn is_walkable_char(ch: char) -> bool {
    matches!(ch, ' ' | '-') || ch == EXIT_MARKER || ch == ENEMY_MARKER || ch == START_MARKER
}

/// Boolean passability grid. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkabilityGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl WalkabilityGrid {
    pub fn from_raw(map: &RawMap) -> Self {
        let cells = map
            .columns()
            .iter()
            .flat_map(|col| col.iter().map(|ch| is_walkable_char(*ch)))
            .collect();
        Self {
            width: map.width(),
            height: map.height(),
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `false` for blocked cells and for anything off the grid.
    pub fn is_walkable(&self, at: Coord) -> bool {
        index(self.width, self.height, at).is_some_and(|i| self.cells[i])
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, at: Coord) -> bool {
        index(self.width, self.height, at).is_none()
    }
}

/// Renderable tile grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl TileGrid {
    /// Map every character to its tile. Water and tree variants are drawn from
    /// `rng` once, here; the grid never changes afterwards.
    pub fn from_raw(map: &RawMap, rng: &mut SimpleRng) -> Self {
        let mut tiles = Vec::with_capacity(map.width() * map.height());
        for col in map.columns() {
            for &ch in col {
                tiles.push(tile_for_char(ch, rng));
            }
        }
        Self {
            width: map.width(),
            height: map.height(),
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, at: Coord) -> Option<TileKind> {
        index(self.width, self.height, at).map(|i| self.tiles[i])
    }
}

fn tile_for_char(ch: char, rng: &mut SimpleRng) -> TileKind {
    match ch {
        'W' => TileKind::Water(rng.next_range(WATER_VARIANTS as u32) as u8),
        'T' => TileKind::Tree(rng.next_range(TREE_VARIANTS as u32) as u8),
        '#' => TileKind::Wall,
        '-' => TileKind::Nothing,
        c if c == EXIT_MARKER => TileKind::Exit,
        // Grass, plus the start and enemy spawn cells which render as grass.
        _ => TileKind::Grass,
    }
}
