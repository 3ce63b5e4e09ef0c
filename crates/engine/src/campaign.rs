//! Campaign: the ordered run of every level in one session.
//!
//! A campaign owns its levels. Each play session builds a fresh one from disk,
//! so nothing carries over from a previous run.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{info, warn};

use crate::clock::FramePacer;
use crate::core::{Level, LevelOptions, SimpleRng};
use crate::frontend::{Hud, InputSource, Renderer};
use crate::game_loop::GameLoop;
use crate::manifest::LevelManifest;
use crate::types::{LevelOutcome, MAP_EXTENSION};

/// Whole-run result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    AllCleared,
    Failed,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignReport {
    pub wins: usize,
    pub total: usize,
    pub quit: bool,
}

impl CampaignReport {
    pub fn verdict(&self) -> Verdict {
        if self.quit {
            Verdict::Quit
        } else if self.wins == self.total {
            Verdict::AllCleared
        } else {
            Verdict::Failed
        }
    }
}

#[derive(Debug, Clone)]
pub struct Campaign {
    levels: Vec<Level>,
}

impl Campaign {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Load every `*.map` file in `dir`, in file-name order.
    ///
    /// Any unreadable or malformed map aborts the load: level order and win
    /// counting assume the list is complete.
    pub fn load_dir(dir: &Path, base: &LevelOptions, rng: &mut SimpleRng) -> Result<Self> {
        let paths = map_files(dir)?;
        if paths.is_empty() {
            bail!("no .{} files found in {}", MAP_EXTENSION, dir.display());
        }
        let manifest = LevelManifest::load(dir)?;

        let mut levels = Vec::with_capacity(paths.len());
        for path in &paths {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let name = crate::core::level_name_from_file(&file_name);
            let options = manifest.options_for(&name, base);
            let level = Level::load(path, &options, rng)
                .with_context(|| format!("failed to load level {}", path.display()))?;
            levels.push(level);
        }
        for name in manifest.levels.keys() {
            if !levels.iter().any(|l| l.name() == name) {
                warn!("{}: no level named {:?}", crate::manifest::MANIFEST_FILE, name);
            }
        }
        info!("loaded {} levels from {}", levels.len(), dir.display());
        Ok(Self { levels })
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Play levels in order with `play`.
    ///
    /// Cleared advances, lost stops the run, quit stops it and marks the report.
    pub fn run_with<F>(&mut self, mut play: F) -> Result<CampaignReport>
    where
        F: FnMut(&mut Level, Hud) -> Result<LevelOutcome>,
    {
        let total = self.levels.len();
        let mut report = CampaignReport {
            wins: 0,
            total,
            quit: false,
        };

        for (index, level) in self.levels.iter_mut().enumerate() {
            let hud = Hud {
                level_index: index,
                level_count: total,
                wins: report.wins,
            };
            match play(level, hud)? {
                LevelOutcome::Cleared => report.wins += 1,
                LevelOutcome::Lost => break,
                LevelOutcome::Quit => {
                    report.quit = true;
                    break;
                }
            }
        }

        info!("campaign: {}/{} levels cleared", report.wins, report.total);
        Ok(report)
    }

    /// Play every level through `game`.
    pub fn run(
        &mut self,
        game: &mut GameLoop,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
        pacer: &mut dyn FramePacer,
    ) -> Result<CampaignReport> {
        self.run_with(|level, hud| game.run_level(level, hud, input, renderer, pacer))
    }
}

fn map_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("cannot read level directory {}", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("cannot list {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == MAP_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}
