//! Runtime settings read from `TILE_ESCAPE_*` environment variables.

use std::path::PathBuf;

use crate::core::LevelOptions;
use crate::engine::LoopConfig;
use crate::types::{
    MarkerPolicy, NpcPolicy, DEFAULT_ENEMY_TICK_MS, DEFAULT_FRAME_HZ, KEY_RELEASE_TIMEOUT_MS,
    PLAYER_TICK_MS,
};

pub const ENV_PREFIX: &str = "TILE_ESCAPE_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub frame_hz: u32,
    pub player_tick_ms: u32,
    pub enemy_tick_ms: u32,
    pub npc_policy: NpcPolicy,
    pub marker_policy: MarkerPolicy,
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u32>,
    pub key_release_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_hz: DEFAULT_FRAME_HZ,
            player_tick_ms: PLAYER_TICK_MS,
            enemy_tick_ms: DEFAULT_ENEMY_TICK_MS,
            npc_policy: NpcPolicy::default(),
            marker_policy: MarkerPolicy::default(),
            seed: None,
            key_release_ms: KEY_RELEASE_TIMEOUT_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from the process environment.
    ///
    /// Also returns one message per ignored value. The logger is not up yet
    /// when this runs; log them once it is.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup. `key` is the unprefixed name.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(&format!("{}{}", ENV_PREFIX, name))
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();
        let mut warnings = Vec::new();
        let w = &mut warnings;

        let config = Self {
            frame_hz: positive(get("FPS"), "FPS", defaults.frame_hz, w),
            player_tick_ms: positive(get("PLAYER_TICK_MS"), "PLAYER_TICK_MS", defaults.player_tick_ms, w),
            enemy_tick_ms: positive(get("ENEMY_TICK_MS"), "ENEMY_TICK_MS", defaults.enemy_tick_ms, w),
            npc_policy: parsed(get("NPC_POLICY"), "NPC_POLICY", NpcPolicy::from_str, defaults.npc_policy, w),
            marker_policy: parsed(
                get("MARKER_POLICY"),
                "MARKER_POLICY",
                MarkerPolicy::from_str,
                defaults.marker_policy,
                w,
            ),
            seed: parsed(get("SEED"), "SEED", |s| s.parse::<u32>().ok().map(Some), None, w),
            key_release_ms: positive(get("KEY_RELEASE_MS"), "KEY_RELEASE_MS", defaults.key_release_ms, w),
            log_path: get("LOG_PATH").map(PathBuf::from),
        };
        (config, warnings)
    }

    pub fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            frame_hz: self.frame_hz,
            player_tick_ms: self.player_tick_ms,
        }
    }

    /// Defaults for every level before `levels.json` overrides.
    pub fn level_options(&self) -> LevelOptions {
        LevelOptions {
            marker_policy: self.marker_policy,
            enemy_tick_ms: self.enemy_tick_ms,
            ..LevelOptions::default()
        }
    }
}

fn positive(value: Option<String>, name: &str, default: u32, warnings: &mut Vec<String>) -> u32 {
    parsed(
        value,
        name,
        |s| s.parse::<u32>().ok().filter(|v| *v > 0),
        default,
        warnings,
    )
}

fn parsed<T>(
    value: Option<String>,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
    default: T,
    warnings: &mut Vec<String>,
) -> T {
    let Some(raw) = value else {
        return default;
    };
    match parse(&raw) {
        Some(v) => v,
        None => {
            warnings.push(format!("{}{}: ignoring invalid value {:?}", ENV_PREFIX, name, raw));
            default
        }
    }
}
