//! Terminal escape game runner (default binary).
//!
//! Title menu, then every level in the level directory in order. Losing shows
//! the game-over screen and returns to the title with freshly loaded levels;
//! clearing them all shows the victory screen and exits.

use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use tile_escape::cli::{self, Command};
use tile_escape::core::{NpcController, SimpleRng};
use tile_escape::engine::{
    run_title, wait_for_key, Campaign, GameLoop, MenuExit, MenuKey, Screen, SleepPacer, Verdict,
};
use tile_escape::input::CrosstermInput;
use tile_escape::logging;
use tile_escape::term::TerminalFrontend;
use tile_escape::GameConfig;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let level_dir = match cli::parse_args(&args)? {
        Command::Help => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Play { level_dir } => level_dir,
    };

    let (config, warnings) = GameConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    let mut rng = match config.seed {
        Some(seed) => SimpleRng::new(seed),
        None => SimpleRng::from_time(),
    };

    // Report broken maps before the terminal is taken over.
    Campaign::load_dir(&level_dir, &config.level_options(), &mut rng.fork())?;

    let mut frontend = TerminalFrontend::new();
    frontend.enter()?;
    let mut input = CrosstermInput::new(config.key_release_ms);

    let result = input
        .enable_release_events()
        .and_then(|_| run(&config, &level_dir, &mut rng, &mut input, &mut frontend));

    // Always try to restore terminal state.
    let _ = input.restore();
    let _ = frontend.exit();
    result
}

fn run(
    config: &GameConfig,
    level_dir: &Path,
    rng: &mut SimpleRng,
    input: &mut CrosstermInput,
    frontend: &mut TerminalFrontend,
) -> Result<()> {
    let loop_config = config.loop_config();
    let mut pacer = SleepPacer::new(loop_config.frame_hz);

    loop {
        if run_title(input, frontend, &mut pacer)? == MenuExit::Quit {
            return Ok(());
        }

        let mut campaign = Campaign::load_dir(level_dir, &config.level_options(), rng)?;
        let npcs = NpcController::new(config.npc_policy, rng.fork());
        let mut game = GameLoop::new(loop_config, npcs);
        let report = campaign.run(&mut game, input, frontend, &mut pacer)?;

        match report.verdict() {
            Verdict::Quit => return Ok(()),
            Verdict::AllCleared => {
                info!("all {} levels cleared", report.total);
                wait_for_key(Screen::Victory { total: report.total }, input, frontend, &mut pacer)?;
                return Ok(());
            }
            Verdict::Failed => {
                let screen = Screen::GameOver {
                    wins: report.wins,
                    total: report.total,
                };
                if wait_for_key(screen, input, frontend, &mut pacer)? == MenuKey::Quit {
                    return Ok(());
                }
            }
        }
    }
}
