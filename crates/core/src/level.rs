//! Level module - one playable map with its derived grids and entities
//!
//! A [`Level`] is built once from a map file. After construction only the player
//! position/facing and the NPC positions change; the grids are fixed.

use std::path::{Path, PathBuf};

use log::debug;

use crate::entities::{self, Npc};
use crate::grid::{TileGrid, WalkabilityGrid};
use crate::map::{MapFormatError, RawMap};
use crate::npc::NpcController;
use crate::player::{self, PlayerStep};
use crate::rng::SimpleRng;
use crate::types::{Coord, Direction, HeldKeys, MarkerPolicy, DEFAULT_ENEMY_TICK_MS};

/// Per-level construction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOptions {
    pub marker_policy: MarkerPolicy,
    pub player_facing: Direction,
    /// Enemy tick period for this level ("enemy speed").
    pub enemy_tick_ms: u32,
}

impl Default for LevelOptions {
    fn default() -> Self {
        Self {
            marker_policy: MarkerPolicy::UseFirst,
            player_facing: Direction::South,
            enemy_tick_ms: DEFAULT_ENEMY_TICK_MS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Level {
    name: String,
    source: Option<PathBuf>,
    walk: WalkabilityGrid,
    tiles: TileGrid,
    player: Coord,
    player_facing: Direction,
    exit: Coord,
    npcs: Vec<Npc>,
    enemy_tick_ms: u32,
}

impl Level {
    /// Load a level from a map file; the display name comes from the file name.
    pub fn load(path: &Path, options: &LevelOptions, rng: &mut SimpleRng) -> Result<Self, MapFormatError> {
        let map = RawMap::load(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut level = Self::from_map(&level_name_from_file(&file_name), &map, options, rng)?;
        level.source = Some(path.to_path_buf());
        Ok(level)
    }

    /// Build a level from map text.
    pub fn parse(
        name: &str,
        text: &str,
        options: &LevelOptions,
        rng: &mut SimpleRng,
    ) -> Result<Self, MapFormatError> {
        let map = RawMap::parse(text)?;
        Self::from_map(name, &map, options, rng)
    }

    pub fn from_map(
        name: &str,
        map: &RawMap,
        options: &LevelOptions,
        rng: &mut SimpleRng,
    ) -> Result<Self, MapFormatError> {
        let ents = entities::extract(map, options.marker_policy)?;
        let walk = WalkabilityGrid::from_raw(map);
        let tiles = TileGrid::from_raw(map, rng);
        debug!(
            "level {:?}: {}x{}, start {:?}, exit {:?}, {} npcs",
            name,
            map.width(),
            map.height(),
            ents.start,
            ents.exit,
            ents.npcs.len()
        );
        Ok(Self {
            name: name.to_string(),
            source: None,
            walk,
            tiles,
            player: ents.start,
            player_facing: options.player_facing,
            exit: ents.exit,
            npcs: ents.npcs,
            enemy_tick_ms: options.enemy_tick_ms.max(1),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Map file this level was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn walkability(&self) -> &WalkabilityGrid {
        &self.walk
    }

    pub fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    pub fn player(&self) -> Coord {
        self.player
    }

    pub fn player_facing(&self) -> Direction {
        self.player_facing
    }

    pub fn exit(&self) -> Coord {
        self.exit
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn npcs_mut(&mut self) -> &mut [Npc] {
        &mut self.npcs
    }

    pub fn enemy_tick_ms(&self) -> u32 {
        self.enemy_tick_ms
    }

    pub fn set_player_facing(&mut self, facing: Direction) {
        self.player_facing = facing;
    }

    /// Teleport the player. Ignores walkability; intended for setup and tests.
    pub fn place_player(&mut self, at: Coord) {
        self.player = at;
    }

    /// Run one enemy tick.
    pub fn tick_npcs(&mut self, ctl: &mut NpcController) {
        ctl.tick(&mut self.npcs, &self.walk);
    }

    /// Run one player tick.
    pub fn tick_player(&mut self, held: HeldKeys) -> PlayerStep {
        let step = player::resolve(held, self.player, self.player_facing, &self.walk);
        self.player = step.pos;
        self.player_facing = step.facing;
        step
    }
}

/// Display name from a map file name: extension dropped, digits and
/// underscores removed (`01_forest.map` -> `forest`).
///
/// # Examples
///
/// ```
/// use tile_escape_core::level_name_from_file;
///
/// assert_eq!(level_name_from_file("02_dungeon.map"), "dungeon");
/// assert_eq!(level_name_from_file("10_dark_woods.map"), "darkwoods");
/// ```
pub fn level_name_from_file(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.chars()
        .filter(|c| !c.is_ascii_digit() && *c != '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NpcPolicy;

    const MAP: &str = "\
#######
#S  K #
# TW  #
#    X#
#######";

    #[test]
    fn test_parse_builds_grids_and_entities() {
        let lvl = Level::parse("meadow", MAP, &LevelOptions::default(), &mut SimpleRng::new(1)).unwrap();
        assert_eq!(lvl.name(), "meadow");
        assert_eq!(lvl.player(), Coord::new(1, 1));
        assert_eq!(lvl.exit(), Coord::new(5, 3));
        assert_eq!(lvl.npcs().len(), 1);
        assert_eq!(lvl.npcs()[0].pos, Coord::new(4, 1));
        assert_eq!(lvl.player_facing(), Direction::South);
        assert_eq!(lvl.walkability().width(), 7);
        assert_eq!(lvl.tiles().height(), 5);
        assert_eq!(lvl.enemy_tick_ms(), DEFAULT_ENEMY_TICK_MS);
        assert!(lvl.source().is_none());
    }

    #[test]
    fn test_options_apply() {
        let options = LevelOptions {
            player_facing: Direction::North,
            enemy_tick_ms: 0,
            ..LevelOptions::default()
        };
        let lvl = Level::parse("x", MAP, &options, &mut SimpleRng::new(1)).unwrap();
        assert_eq!(lvl.player_facing(), Direction::North);
        // Zero periods are clamped so the enemy clock always advances.
        assert_eq!(lvl.enemy_tick_ms(), 1);
    }

    #[test]
    fn test_tick_player_updates_position_and_facing() {
        let mut lvl = Level::parse("x", MAP, &LevelOptions::default(), &mut SimpleRng::new(1)).unwrap();
        let step = lvl.tick_player(HeldKeys::from_directions(&[Direction::East]));
        assert!(step.moved);
        assert_eq!(lvl.player(), Coord::new(2, 1));
        assert_eq!(lvl.player_facing(), Direction::East);

        // Wall above: facing changes, position does not.
        lvl.tick_player(HeldKeys::from_directions(&[Direction::North]));
        assert_eq!(lvl.player(), Coord::new(2, 1));
        assert_eq!(lvl.player_facing(), Direction::North);
    }

    #[test]
    fn test_tick_npcs_moves_within_walkable_cells() {
        let mut lvl = Level::parse("x", MAP, &LevelOptions::default(), &mut SimpleRng::new(1)).unwrap();
        let mut ctl = NpcController::new(NpcPolicy::Patrol, SimpleRng::new(1));
        lvl.tick_npcs(&mut ctl);
        assert_eq!(lvl.npcs()[0].pos, Coord::new(3, 1));
    }

    #[test]
    fn test_level_name_from_file() {
        assert_eq!(level_name_from_file("01_forest.map"), "forest");
        assert_eq!(level_name_from_file("02_dungeon.map"), "dungeon");
        assert_eq!(level_name_from_file("castle"), "castle");
    }
}
