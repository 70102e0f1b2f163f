//! Startup options
//!
//! Flags are parsed by hand, the same few every run: field dimensions,
//! gravity interval, sequencer seed. Validation happens here so the rest
//! of the program can trust the numbers.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};

use crate::types::{DEFAULT_DROP_MS, PLAYFIELD_COLS, PLAYFIELD_ROWS};

pub const USAGE: &str = "\
blockfall - terminal falling-block puzzle

USAGE:
    blockfall [OPTIONS]

OPTIONS:
    --rows <n>       playfield rows (4-64, default 20)
    --cols <n>       playfield columns (4-32, default 10)
    --drop-ms <n>    gravity interval in milliseconds (50-5000, default 500)
    --seed <n>       32-bit sequencer seed (default: derived from the clock)
    --help           print this text

KEYS:
    arrows / wasd / hjkl   move and rotate
    q or ctrl-c            quit";

/// Validated run options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub rows: usize,
    pub cols: usize,
    pub drop_ms: u64,
    /// None: the caller derives a seed from the clock
    pub seed: Option<u32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            rows: PLAYFIELD_ROWS,
            cols: PLAYFIELD_COLS,
            drop_ms: DEFAULT_DROP_MS,
            seed: None,
        }
    }
}

/// Parse command-line arguments (without the program name).
/// Returns None when help was requested.
pub fn parse_args(args: &[String]) -> Result<Option<RunConfig>> {
    let mut config = RunConfig::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                config.rows = parse_value(args, &mut i, "--rows")?;
            }
            "--cols" => {
                config.cols = parse_value(args, &mut i, "--cols")?;
            }
            "--drop-ms" => {
                config.drop_ms = parse_value(args, &mut i, "--drop-ms")?;
            }
            "--seed" => {
                config.seed = Some(parse_value(args, &mut i, "--seed")?);
            }
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument: {}", other),
        }
        i += 1;
    }

    check_range("--rows", config.rows, 4, 64)?;
    check_range("--cols", config.cols, 4, 32)?;
    check_range("--drop-ms", config.drop_ms, 50, 5000)?;
    Ok(Some(config))
}

fn parse_value<T>(args: &[String], i: &mut usize, flag: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    *i += 1;
    let raw = args
        .get(*i)
        .ok_or_else(|| anyhow!("{} requires a value", flag))?;
    raw.parse()
        .map_err(|e| anyhow!("invalid value for {}: {}", flag, e))
}

fn check_range<T: PartialOrd + Display + Copy>(flag: &str, value: T, min: T, max: T) -> Result<()> {
    if value < min || value > max {
        return Err(anyhow!(
            "{} must be between {} and {}, got {}",
            flag,
            min,
            max,
            value
        ));
    }
    Ok(())
}
