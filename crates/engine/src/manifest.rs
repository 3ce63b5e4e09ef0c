//! Optional per-level settings stored next to the maps.
//!
//! `levels.json` maps a level's display name to overrides:
//!
//! ```json
//! {
//!   "levels": {
//!     "forest": { "enemy_tick_ms": 250, "player_facing": "east" }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;

use crate::core::LevelOptions;
use crate::types::Direction;

pub const MANIFEST_FILE: &str = "levels.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelOverride {
    #[serde(default)]
    pub enemy_tick_ms: Option<u32>,
    #[serde(default)]
    pub player_facing: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelManifest {
    #[serde(default)]
    pub levels: HashMap<String, LevelOverride>,
}

impl LevelManifest {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid level manifest")
    }

    /// Read `levels.json` from `dir`; a missing file is an empty manifest.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }

    /// `base` with this level's overrides applied.
    pub fn options_for(&self, name: &str, base: &LevelOptions) -> LevelOptions {
        let mut options = *base;
        let Some(over) = self.levels.get(name) else {
            return options;
        };
        if let Some(ms) = over.enemy_tick_ms {
            options.enemy_tick_ms = ms;
        }
        if let Some(facing) = &over.player_facing {
            match Direction::from_str(facing) {
                Some(dir) => options.player_facing = dir,
                None => warn!("level {:?}: ignoring unknown player_facing {:?}", name, facing),
            }
        }
        options
    }
}
