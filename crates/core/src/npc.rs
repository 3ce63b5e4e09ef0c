//! Enemy movement.
//!
//! Each enemy tick every NPC tries one step; a blocked step leaves it in place.
//! NPCs ignore each other, so two knights may share a cell.

use log::trace;

use crate::entities::Npc;
use crate::grid::WalkabilityGrid;
use crate::rng::SimpleRng;
use crate::types::{Coord, Direction, NpcPolicy};

const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// Advances enemies according to a movement policy.
#[derive(Debug, Clone)]
pub struct NpcController {
    policy: NpcPolicy,
    rng: SimpleRng,
}

impl NpcController {
    pub fn new(policy: NpcPolicy, rng: SimpleRng) -> Self {
        Self { policy, rng }
    }

    /// Move every NPC once.
    pub fn tick(&mut self, npcs: &mut [Npc], walk: &WalkabilityGrid) {
        for npc in npcs.iter_mut() {
            let from = npc.pos;
            self.advance(npc, walk);
            trace!("npc {:?} -> {:?}", from, npc.pos);
        }
    }

    /// One step for one NPC.
    pub fn advance(&mut self, npc: &mut Npc, walk: &WalkabilityGrid) {
        match self.policy {
            NpcPolicy::RandomWalk => {
                let dir = self.rng.choose(&ALL_DIRECTIONS).unwrap_or(npc.facing);
                npc.facing = dir;
                try_step(&mut npc.pos, dir, walk);
            }
            NpcPolicy::Patrol => {
                if !try_step(&mut npc.pos, npc.facing, walk) {
                    npc.facing = npc.facing.opposite();
                }
            }
        }
    }
}

fn try_step(pos: &mut Coord, dir: Direction, walk: &WalkabilityGrid) -> bool {
    let next = pos.step(dir);
    if walk.is_walkable(next) {
        *pos = next;
        true
    } else {
        false
    }
}
