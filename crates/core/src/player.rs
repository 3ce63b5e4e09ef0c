//! Player movement resolution.
//!
//! Held keys are evaluated in the fixed order left, right, up, down. Only the
//! first held direction is considered: it sets the facing, and the player steps
//! that way if the destination is walkable. A blocked first choice does not fall
//! through to the next held key, so there is never more than one step per tick.

use crate::grid::WalkabilityGrid;
use crate::types::{Coord, Direction, HeldKeys};

/// Result of one player tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStep {
    pub pos: Coord,
    pub facing: Direction,
    pub moved: bool,
}

/// Resolve one player tick from the held keys.
///
/// With nothing held, position and facing are unchanged.
///
/// # Examples
///
/// ```
/// use tile_escape_core::{player, RawMap, WalkabilityGrid};
/// use tile_escape_core::types::{Coord, Direction, HeldKeys};
///
/// let walk = WalkabilityGrid::from_raw(&RawMap::parse(" S X").unwrap());
/// let held = HeldKeys::from_directions(&[Direction::East]);
/// let step = player::resolve(held, Coord::new(1, 0), Direction::South, &walk);
/// assert_eq!(step.pos, Coord::new(2, 0));
/// assert_eq!(step.facing, Direction::East);
/// ```
pub fn resolve(held: HeldKeys, pos: Coord, facing: Direction, walk: &WalkabilityGrid) -> PlayerStep {
    let Some(dir) = held.first_by_priority() else {
        return PlayerStep {
            pos,
            facing,
            moved: false,
        };
    };

    let next = pos.step(dir);
    if walk.is_walkable(next) {
        PlayerStep {
            pos: next,
            facing: dir,
            moved: true,
        }
    } else {
        PlayerStep {
            pos,
            facing: dir,
            moved: false,
        }
    }
}
