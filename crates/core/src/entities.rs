//! Entity extraction - start, exit and enemy spawns from marker characters.

use crate::map::{MapFormatError, RawMap};
use crate::types::{Coord, Direction, MarkerPolicy, ENEMY_MARKER, EXIT_MARKER, START_MARKER};

/// Enemy sprites. Only knights exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NpcSprite {
    #[default]
    Knight,
}

/// A roaming enemy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    pub pos: Coord,
    pub facing: Direction,
    pub sprite: NpcSprite,
}

impl Npc {
    pub fn new(pos: Coord) -> Self {
        Self {
            pos,
            facing: Direction::West,
            sprite: NpcSprite::Knight,
        }
    }
}

/// Initial entity placement for one map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entities {
    pub start: Coord,
    pub exit: Coord,
    pub npcs: Vec<Npc>,
}

/// Locate start, exit and every enemy spawn.
///
/// Start and exit are the first markers in column-major order. With
/// [`MarkerPolicy::Reject`] a second start or exit marker is an error instead.
pub fn extract(map: &RawMap, policy: MarkerPolicy) -> Result<Entities, MapFormatError> {
    let start = locate(map, START_MARKER, policy)?.ok_or(MapFormatError::MissingStart)?;
    let exit = locate(map, EXIT_MARKER, policy)?.ok_or(MapFormatError::MissingExit)?;
    let npcs = map.find_all(ENEMY_MARKER).into_iter().map(Npc::new).collect();
    Ok(Entities { start, exit, npcs })
}

fn locate(map: &RawMap, marker: char, policy: MarkerPolicy) -> Result<Option<Coord>, MapFormatError> {
    match policy {
        MarkerPolicy::UseFirst => Ok(map.find_first(marker)),
        MarkerPolicy::Reject => {
            let all = map.find_all(marker);
            if all.len() > 1 {
                return Err(MapFormatError::DuplicateMarker {
                    marker,
                    count: all.len(),
                });
            }
            Ok(all.first().copied())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_enemies_gives_empty_list() {
        let map = RawMap::parse("S  X").unwrap();
        let ents = extract(&map, MarkerPolicy::UseFirst).unwrap();
        assert!(ents.npcs.is_empty());
        assert_eq!(ents.start, Coord::new(0, 0));
        assert_eq!(ents.exit, Coord::new(3, 0));
    }

    #[test]
    fn test_all_enemy_markers_collected_in_scan_order() {
        let map = RawMap::parse("SK \n K \nK X").unwrap();
        let ents = extract(&map, MarkerPolicy::UseFirst).unwrap();
        let spawns: Vec<Coord> = ents.npcs.iter().map(|n| n.pos).collect();
        assert_eq!(
            spawns,
            vec![Coord::new(0, 2), Coord::new(1, 0), Coord::new(1, 1)]
        );
        assert!(ents.npcs.iter().all(|n| n.sprite == NpcSprite::Knight));
    }

    #[test]
    fn test_duplicate_start_uses_first_by_default() {
        // (0, 1) comes before (2, 0) in column-major order.
        let map = RawMap::parse("  S\nS X").unwrap();
        let ents = extract(&map, MarkerPolicy::UseFirst).unwrap();
        assert_eq!(ents.start, Coord::new(0, 1));
    }

    #[test]
    fn test_duplicate_exit_rejected_when_configured() {
        let map = RawMap::parse("SXX").unwrap();
        let err = extract(&map, MarkerPolicy::Reject).unwrap_err();
        assert!(matches!(
            err,
            MapFormatError::DuplicateMarker {
                marker: 'X',
                count: 2
            }
        ));
    }
}
