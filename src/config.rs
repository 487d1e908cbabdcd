//! Runtime configuration for the terminal game, read from `TETRIS_*` variables.

use std::path::PathBuf;
use std::str::FromStr;

use log::warn;

use crate::core::EngineConfig;
use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;
use crate::types::TICK_MS;

pub const SEED_VAR: &str = "TETRIS_SEED";
pub const TICK_MS_VAR: &str = "TETRIS_TICK_MS";
pub const BOARD_WIDTH_VAR: &str = "TETRIS_BOARD_WIDTH";
pub const BOARD_HEIGHT_VAR: &str = "TETRIS_BOARD_HEIGHT";
pub const PREVIEW_VAR: &str = "TETRIS_PREVIEW";
pub const LOCK_DELAY_VAR: &str = "TETRIS_LOCK_DELAY_MS";
pub const KEY_RELEASE_VAR: &str = "TETRIS_KEY_RELEASE_MS";
pub const LOG_PATH_VAR: &str = "TETRIS_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    /// Target frame interval
    pub tick_ms: u32,
    pub engine: EngineConfig,
    /// How long a key counts as held after its last auto-repeat
    pub key_release_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            tick_ms: TICK_MS,
            engine: EngineConfig::default(),
            key_release_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create from any variable source; unset or unparsable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = EngineConfig::default();

        let seed = parse_var(&lookup, SEED_VAR).unwrap_or_else(rand::random::<u32>);
        let tick_ms = parse_var::<u32>(&lookup, TICK_MS_VAR)
            .filter(|&ms| {
                if ms == 0 {
                    warn!("ignoring {}=0", TICK_MS_VAR);
                }
                ms > 0
            })
            .unwrap_or(TICK_MS);

        let engine = EngineConfig {
            width: parse_var(&lookup, BOARD_WIDTH_VAR).unwrap_or(defaults.width),
            height: parse_var(&lookup, BOARD_HEIGHT_VAR).unwrap_or(defaults.height),
            preview_len: parse_var(&lookup, PREVIEW_VAR).unwrap_or(defaults.preview_len),
            lock_delay_ms: parse_var(&lookup, LOCK_DELAY_VAR).unwrap_or(defaults.lock_delay_ms),
            ..defaults
        };

        let key_release_ms =
            parse_var(&lookup, KEY_RELEASE_VAR).unwrap_or(DEFAULT_KEY_RELEASE_TIMEOUT_MS);

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            seed,
            tick_ms,
            engine,
            key_release_ms,
            log_path,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {}={:?}: not a valid number", name, raw);
            None
        }
    }
}
