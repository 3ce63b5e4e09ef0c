//! Command-line arguments: `tile-escape [LEVEL_DIR]`.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::types::DEFAULT_LEVEL_DIR;

pub const USAGE: &str = "\
usage: tile-escape [LEVEL_DIR]

Play every *.map file in LEVEL_DIR (default: maps) in file-name order.

keys:   arrows / WASD move, Esc leaves the title, q or Ctrl-C quits
env:    TILE_ESCAPE_FPS, TILE_ESCAPE_PLAYER_TICK_MS, TILE_ESCAPE_ENEMY_TICK_MS,
        TILE_ESCAPE_NPC_POLICY (random|patrol), TILE_ESCAPE_MARKER_POLICY (first|reject),
        TILE_ESCAPE_SEED, TILE_ESCAPE_KEY_RELEASE_MS, TILE_ESCAPE_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play { level_dir: PathBuf },
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut level_dir: Option<PathBuf> = None;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') => {
                return Err(anyhow!("unknown argument: {}", flag));
            }
            dir => {
                if level_dir.is_some() {
                    return Err(anyhow!("unexpected extra argument: {}", dir));
                }
                level_dir = Some(PathBuf::from(dir));
            }
        }
    }
    Ok(Command::Play {
        level_dir: level_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_LEVEL_DIR)),
    })
}
