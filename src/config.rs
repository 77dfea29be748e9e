//! Runtime configuration from the environment and the command line.
//!
//! Environment variables are read first; command-line flags override them.
//!
//! | Variable | Flag | Meaning |
//! |----------|------|---------|
//! | `BLOCKFALL_MODE` | `--mode` | `single`, `multi` or `3d` |
//! | `BLOCKFALL_SEED` | `--seed` | piece sequence seed (u32) |
//! | `BLOCKFALL_LOG_FILE` | `--log-file` | write logs to this file |
//!
//! Without a seed one is drawn from OS entropy. Without a log file nothing is
//! logged, since the terminal itself is in use by the game.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::types::GameMode;

pub const ENV_MODE: &str = "BLOCKFALL_MODE";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_LOG_FILE: &str = "BLOCKFALL_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub mode: GameMode,
    pub seed: Option<u32>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Read the `BLOCKFALL_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = lookup(ENV_MODE).filter(|v| !v.is_empty()) {
            config.mode = parse_mode(&v).map_err(|e| anyhow!("{}: {}", ENV_MODE, e))?;
        }
        if let Some(v) = lookup(ENV_SEED).filter(|v| !v.is_empty()) {
            config.seed = Some(parse_seed(&v).map_err(|e| anyhow!("{}: {}", ENV_SEED, e))?);
        }
        if let Some(v) = lookup(ENV_LOG_FILE).filter(|v| !v.is_empty()) {
            config.log_file = Some(PathBuf::from(v));
        }
        Ok(config)
    }

    /// Apply command-line overrides (program name already stripped).
    pub fn parse_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--mode" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --mode"))?;
                    self.mode = parse_mode(v)?;
                }
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = Some(parse_seed(v)?);
                }
                "--log-file" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log-file"))?;
                    self.log_file = Some(PathBuf::from(v));
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }

    /// The configured seed, or a fresh one from OS entropy.
    pub fn seed_or_random(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random::<u32>)
    }
}

fn parse_mode(v: &str) -> Result<GameMode> {
    GameMode::from_str(v).ok_or_else(|| anyhow!("invalid mode: {} (expected single, multi or 3d)", v))
}

fn parse_seed(v: &str) -> Result<u32> {
    v.parse::<u32>()
        .map_err(|_| anyhow!("invalid seed: {}", v))
}

/// Send `log` output to `config.log_file`, filtered by `RUST_LOG` (default
/// `info`). Does nothing without a log file.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}
