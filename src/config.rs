//! Command-line configuration.

use crate::scene::BackdropMode;
use anyhow::{bail, Context};
use std::path::PathBuf;

pub const HELP_TEXT: &str = "\
Flappy Bird - terminal edition

Usage: flappy [options]

Options:
  --seed <n>           Seed the pipe generator (repeatable runs)
  --dynamic-backdrop   Re-check the time of day every frame
  --log-file <path>    Write logs to <path> (filter with RUST_LOG)
  --version, -v        Show version information
  --help, -h           Show this help message

Controls: click or Enter to start, Space to flap, Q/Esc to quit.";

/// Settings for one run of the game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub backdrop_mode: BackdropMode,
    pub log_file: Option<PathBuf>,
}

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play(Config),
    Help,
    Version,
}

impl Config {
    /// Parse arguments (without the program name).
    pub fn from_args<I>(args: I) -> anyhow::Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-v" => return Ok(Command::Version),
                "--dynamic-backdrop" => config.backdrop_mode = BackdropMode::Dynamic,
                "--seed" => {
                    let value = args.next().context("--seed needs a value")?;
                    let seed = value
                        .parse()
                        .with_context(|| format!("invalid seed '{}'", value))?;
                    config.seed = Some(seed);
                }
                "--log-file" => {
                    let value = args.next().context("--log-file needs a path")?;
                    config.log_file = Some(PathBuf::from(value));
                }
                other => bail!("unknown argument: {} (run 'flappy --help' for usage)", other),
            }
        }

        Ok(Command::Play(config))
    }
}
