//! Round generation
//!
//! Picks the next (family, fret) to quiz:
//! - Family chosen uniformly from the modes' candidates
//! - Fret chosen uniformly, never repeating the previous fret when avoidable

use crate::chords::{ChordEntry, ChordFamily};
use crate::config::ConfigError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Which chord families the quiz draws from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameMode {
    EShape,
    AShape,
    Both,
}

impl GameMode {
    pub fn families(self) -> &'static [ChordFamily] {
        match self {
            GameMode::EShape => &[ChordFamily::EShape],
            GameMode::AShape => &[ChordFamily::AShape],
            GameMode::Both => &ChordFamily::ALL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::EShape => "E Major",
            GameMode::AShape => "A Major",
            GameMode::Both => "Both",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "e" | "e-shape" => Ok(GameMode::EShape),
            "a" | "a-shape" => Ok(GameMode::AShape),
            "both" => Ok(GameMode::Both),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// One quiz question. Superseded, never mutated, when the next round starts.
#[derive(Clone, Debug)]
pub struct RoundState {
    family: ChordFamily,
    entry: &'static ChordEntry,
    started_at: Instant,
}

impl RoundState {
    /// Build a round for a catalog position; `None` if the family does not quiz that fret
    #[allow(dead_code)]
    pub fn at(family: ChordFamily, fret: u8, started_at: Instant) -> Option<Self> {
        family.entry_at(fret).map(|entry| RoundState {
            family,
            entry,
            started_at,
        })
    }

    pub fn family(&self) -> ChordFamily {
        self.family
    }

    pub fn fret(&self) -> u8 {
        self.entry.fret
    }

    pub fn expected_name(&self) -> &'static str {
        self.entry.name
    }

    #[allow(dead_code)]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Time since the round started, saturating at zero
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }
}

/// Choose a fret other than `previous`; repeats only if nothing else is available
pub fn pick_fret<'a, R: Rng + ?Sized>(
    entries: &'a [ChordEntry],
    previous: Option<u8>,
    rng: &mut R,
) -> Option<&'a ChordEntry> {
    let fresh: Vec<&ChordEntry> = entries
        .iter()
        .filter(|e| Some(e.fret) != previous)
        .collect();

    if fresh.is_empty() {
        // Degenerate family: every entry sits on the previous fret
        entries.choose(rng)
    } else {
        fresh.choose(rng).copied()
    }
}

/// Start the next round for `mode`, avoiding `previous_fret`
pub fn next_round<R: Rng + ?Sized>(
    mode: GameMode,
    previous_fret: Option<u8>,
    rng: &mut R,
    now: Instant,
) -> RoundState {
    let families = mode.families();
    let family = families[rng.gen_range(0..families.len())];
    let entries: &'static [ChordEntry] = family.entries();

    // Catalog families are non-empty, so a pick always exists
    let entry = pick_fret(entries, previous_fret, rng).unwrap_or(&entries[0]);

    RoundState {
        family,
        entry,
        started_at: now,
    }
}
