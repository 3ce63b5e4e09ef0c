//! `env_logger` setup.
//!
//! The game owns the terminal, so records go to a file when a log path is
//! configured. Without one only warnings go to stderr. `RUST_LOG` overrides
//! either filter.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub fn init(log_path: Option<&Path>) -> Result<()> {
    let mut builder = match log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let mut b = Builder::from_env(Env::default().default_filter_or("info"));
            b.target(Target::Pipe(Box::new(file)));
            b
        }
        None => {
            let mut b = Builder::from_env(Env::default().default_filter_or("warn"));
            b.target(Target::Stderr);
            b
        }
    };
    builder
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}
