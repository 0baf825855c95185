//! Trainer configuration validated from command-line arguments

use crate::quiz::GameMode;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Delay before moving on after a correct answer
pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 1000;

/// Longest accepted auto-advance delay
pub const MAX_ADVANCE_DELAY_MS: u64 = 10_000;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Unknown game mode '{0}' (expected e, a or both)")]
    UnknownMode(String),

    #[error("Advance delay {delay_ms}ms exceeds the {max_ms}ms limit")]
    AdvanceDelayTooLong { delay_ms: u64, max_ms: u64 },
}

/// Validated settings for one trainer run
#[derive(Clone, Debug)]
pub struct TrainerConfig {
    pub mode: GameMode,
    pub advance_delay: Duration,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
    pub json_summary: bool,
}

impl TrainerConfig {
    pub fn new(mode: GameMode, advance_delay_ms: u64) -> Result<Self, ConfigError> {
        if advance_delay_ms > MAX_ADVANCE_DELAY_MS {
            return Err(ConfigError::AdvanceDelayTooLong {
                delay_ms: advance_delay_ms,
                max_ms: MAX_ADVANCE_DELAY_MS,
            });
        }

        Ok(TrainerConfig {
            mode,
            advance_delay: Duration::from_millis(advance_delay_ms),
            seed: None,
            log_file: None,
            debug: false,
            json_summary: false,
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_json_summary(mut self, json: bool) -> Self {
        self.json_summary = json;
        self
    }
}
