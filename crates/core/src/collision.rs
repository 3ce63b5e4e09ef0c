//! Win/lose detection, evaluated once per frame after both controllers ran.

use crate::entities::Npc;
use crate::level::Level;
use crate::types::{Coord, LevelOutcome};

/// An enemy shares the player's cell.
pub fn is_caught(player: Coord, npcs: &[Npc]) -> bool {
    npcs.iter().any(|npc| npc.pos == player)
}

/// The player stands on the exit.
pub fn has_escaped(player: Coord, exit: Coord) -> bool {
    player == exit
}

/// Loss is checked before clear: being caught on the exit cell still loses.
pub fn resolve(level: &Level) -> Option<LevelOutcome> {
    if is_caught(level.player(), level.npcs()) {
        return Some(LevelOutcome::Lost);
    }
    if has_escaped(level.player(), level.exit()) {
        return Some(LevelOutcome::Cleared);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelOptions;
    use crate::rng::SimpleRng;

    fn level(text: &str) -> Level {
        Level::parse("test", text, &LevelOptions::default(), &mut SimpleRng::new(1)).unwrap()
    }

    #[test]
    fn test_npc_on_player_is_loss() {
        let mut lvl = level("S K X");
        assert_eq!(resolve(&lvl), None);
        let player = lvl.player();
        lvl.npcs_mut()[0].pos = player;
        assert_eq!(resolve(&lvl), Some(LevelOutcome::Lost));
    }

    #[test]
    fn test_player_on_exit_is_clear() {
        let mut lvl = level("S K X");
        let exit = lvl.exit();
        lvl.place_player(exit);
        assert_eq!(resolve(&lvl), Some(LevelOutcome::Cleared));
    }

    #[test]
    fn test_loss_wins_over_clear() {
        let mut lvl = level("S K X");
        let exit = lvl.exit();
        lvl.place_player(exit);
        lvl.npcs_mut()[0].pos = exit;
        assert_eq!(resolve(&lvl), Some(LevelOutcome::Lost));
    }
}
