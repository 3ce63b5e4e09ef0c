//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Grids are indexed `[column][row]`, so a [`Coord`] is `(x, y)` with `x` the
//! column (left to right) and `y` the row (top to bottom). Coordinates are signed
//! so that a step off the grid edge is representable; grids answer "not walkable"
//! for any coordinate outside their bounds.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FRAME_HZ` | 60 | Frame pacing target |
//! | `PLAYER_TICK_MS` | 120 | Player move period (independent of level) |
//! | `DEFAULT_ENEMY_TICK_MS` | 300 | Enemy move period unless a level overrides it |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use tile_escape_types::{Coord, Direction, HeldKeys};
//!
//! let start = Coord::new(3, 4);
//! assert_eq!(start.step(Direction::West), Coord::new(2, 4));
//! assert_eq!(start.step(Direction::North), Coord::new(3, 3));
//!
//! let mut held = HeldKeys::empty();
//! held.press(Direction::North);
//! held.press(Direction::West);
//! // Left wins over up.
//! assert_eq!(held.first_by_priority(), Some(Direction::West));
//! ```

/// Frame pacing target (frames per second).
pub const DEFAULT_FRAME_HZ: u32 = 60;

/// Player tick period in milliseconds.
pub const PLAYER_TICK_MS: u32 = 120;

/// Enemy tick period used when a level does not override it.
pub const DEFAULT_ENEMY_TICK_MS: u32 = 300;

/// How long a key counts as held after its last press/repeat event, on terminals
/// that never report key releases.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Directory scanned for `*.map` files when none is given on the command line.
pub const DEFAULT_LEVEL_DIR: &str = "maps";

/// Extension of level map files.
pub const MAP_EXTENSION: &str = "map";

/// Number of decorative water tile variants.
pub const WATER_VARIANTS: u8 = 3;

/// Number of decorative tree tile variants.
pub const TREE_VARIANTS: u8 = 3;

/// Map marker characters.
pub const START_MARKER: char = 'S';
pub const EXIT_MARKER: char = 'X';
pub const ENEMY_MARKER: char = 'K';


/// A grid position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring coordinate one cell in `dir`.
    ///
    /// The result may lie outside any grid; callers check walkability before
    /// applying it.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Facing / movement direction.
///
/// - **North**: up (row - 1)
/// - **South**: down (row + 1)
/// - **East**: right (column + 1)
/// - **West**: left (column - 1)
///
/// Facing only selects the sprite; it never affects movement legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Key priority when several directions are held: left, right, up, down.
    pub const PRIORITY: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// `(dx, dy)` for one step.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "south" | "s", "east" | "e", "west" | "w"
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_escape_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("South"), Some(Direction::South));
    /// assert_eq!(Direction::from_str("w"), Some(Direction::West));
    /// assert_eq!(Direction::from_str("up"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    fn bit(&self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::South => 1 << 1,
            Direction::East => 1 << 2,
            Direction::West => 1 << 3,
        }
    }
}

/// Set of logical directions currently held by the player.
///
/// Arrow keys and WASD both map onto these four directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    bits: u8,
}

impl HeldKeys {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn from_directions(dirs: &[Direction]) -> Self {
        let mut held = Self::empty();
        for &dir in dirs {
            held.press(dir);
        }
        held
    }

    pub fn press(&mut self, dir: Direction) {
        self.bits |= dir.bit();
    }

    pub fn release(&mut self, dir: Direction) {
        self.bits &= !dir.bit();
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.bits & dir.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The highest-priority held direction (left > right > up > down).
    pub fn first_by_priority(&self) -> Option<Direction> {
        Direction::PRIORITY
            .iter()
            .copied()
            .find(|dir| self.is_held(*dir))
    }

    /// Held directions in priority order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::PRIORITY
            .iter()
            .copied()
            .filter(move |dir| self.is_held(*dir))
    }
}

/// Renderable terrain kinds.
///
/// Water and trees carry a decorative variant index chosen once at load time;
/// it has no gameplay effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Grass,
    Water(u8),
    Tree(u8),
    Wall,
    Nothing,
    Exit,
}

impl TileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Grass => "grass",
            TileKind::Water(_) => "water",
            TileKind::Tree(_) => "tree",
            TileKind::Wall => "wall",
            TileKind::Nothing => "nothing",
            TileKind::Exit => "exit",
        }
    }
}

/// Terminal result of playing one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    /// Player reached the exit.
    Cleared,
    /// An enemy caught the player.
    Lost,
    /// Quit signal: the whole run ends.
    Quit,
}

impl LevelOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelOutcome::Cleared => "cleared",
            LevelOutcome::Lost => "lost",
            LevelOutcome::Quit => "quit",
        }
    }
}

/// How maps with more than one start or exit marker are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerPolicy {
    /// Use the first marker in column-major scan order.
    #[default]
    UseFirst,
    /// Refuse to load the map.
    Reject,
}

impl MarkerPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "first" | "use-first" | "usefirst" => Some(MarkerPolicy::UseFirst),
            "reject" => Some(MarkerPolicy::Reject),
            _ => None,
        }
    }
}

/// Enemy movement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NpcPolicy {
    /// Pick a random direction each tick; stay if it is blocked.
    #[default]
    RandomWalk,
    /// Keep heading; when blocked, stay and turn around.
    Patrol,
}

impl NpcPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "random" | "random-walk" | "randomwalk" => Some(NpcPolicy::RandomWalk),
            "patrol" => Some(NpcPolicy::Patrol),
            _ => None,
        }
    }
}
