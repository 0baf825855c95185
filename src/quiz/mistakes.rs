//! Mistake log: which prompts get missed, and what was answered instead
//!
//! Detects:
//! - Prompts missed 3+ times (problematic)
//! - The most common wrong name for a prompt

use crate::chords::ChordFamily;
use crate::quiz::round::RoundState;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Minimum misses to flag a prompt as problematic
const MISS_THRESHOLD: u32 = 3;

/// A quizzed position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Prompt {
    pub family: ChordFamily,
    pub fret: u8,
    pub expected: &'static str,
}

impl From<&RoundState> for Prompt {
    fn from(round: &RoundState) -> Self {
        Prompt {
            family: round.family(),
            fret: round.fret(),
            expected: round.expected_name(),
        }
    }
}

/// Misses for one prompt
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PromptMisses {
    pub prompt: Prompt,
    pub misses: u32,
    /// Most frequent non-empty wrong answer, uppercased
    pub common_answer: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct MistakeLog {
    /// Prompt → (given answer → count)
    misses: FxHashMap<Prompt, FxHashMap<String, u32>>,
    total_misses: u32,
}

impl MistakeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a wrong answer for the round's prompt
    pub fn record(&mut self, round: &RoundState, given: &str) {
        *self
            .misses
            .entry(Prompt::from(round))
            .or_default()
            .entry(given.to_uppercase())
            .or_insert(0) += 1;
        self.total_misses += 1;
    }

    pub fn total_misses(&self) -> u32 {
        self.total_misses
    }

    fn summarize(prompt: Prompt, answers: &FxHashMap<String, u32>) -> PromptMisses {
        let common_answer = answers
            .iter()
            .filter(|(answer, _)| !answer.is_empty())
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(answer, _)| answer.clone());

        PromptMisses {
            prompt,
            misses: answers.values().sum(),
            common_answer,
        }
    }

    /// Most-missed prompts, highest count first
    pub fn top_misses(&self, count: usize) -> Vec<PromptMisses> {
        let mut all: Vec<PromptMisses> = self
            .misses
            .iter()
            .map(|(&prompt, answers)| Self::summarize(prompt, answers))
            .collect();

        all.sort_by(|a, b| {
            b.misses
                .cmp(&a.misses)
                .then_with(|| a.prompt.fret.cmp(&b.prompt.fret))
                .then_with(|| a.prompt.family.cmp(&b.prompt.family))
        });
        all.truncate(count);
        all
    }

    /// Prompts missed at least 3 times
    pub fn problematic(&self) -> Vec<PromptMisses> {
        self.top_misses(usize::MAX)
            .into_iter()
            .filter(|m| m.misses >= MISS_THRESHOLD)
            .collect()
    }

    pub fn reset(&mut self) {
        self.misses.clear();
        self.total_misses = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn round(family: ChordFamily, fret: u8) -> RoundState {
        RoundState::at(family, fret, Instant::now()).unwrap()
    }

    #[test]
    fn test_problematic_threshold() {
        let mut log = MistakeLog::new();
        let second = round(ChordFamily::EShape, 2);
        let fourth = round(ChordFamily::AShape, 4);

        log.record(&second, "Gb");
        log.record(&second, "gb");
        log.record(&fourth, "Db");
        assert!(log.problematic().is_empty());

        log.record(&second, "G");
        let problematic = log.problematic();
        assert_eq!(problematic.len(), 1);
        assert_eq!(problematic[0].prompt.expected, "F#");
        assert_eq!(problematic[0].misses, 3);
        assert_eq!(problematic[0].common_answer.as_deref(), Some("GB"));
        assert_eq!(log.total_misses(), 4);
    }

    #[test]
    fn test_top_misses_ordering() {
        let mut log = MistakeLog::new();
        let seventh = round(ChordFamily::EShape, 7);
        let ninth = round(ChordFamily::EShape, 9);
        log.record(&ninth, "D");
        log.record(&seventh, "A");
        log.record(&seventh, "C");

        let top = log.top_misses(5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].prompt.fret, 7);
        assert_eq!(top[1].prompt.fret, 9);
        assert_eq!(log.top_misses(1).len(), 1);
    }

    #[test]
    fn test_same_fret_ties_order_by_family() {
        let mut log = MistakeLog::new();
        log.record(&round(ChordFamily::AShape, 2), "C");
        log.record(&round(ChordFamily::EShape, 2), "G");

        let top = log.top_misses(2);
        assert_eq!(top[0].prompt.family, ChordFamily::EShape);
        assert_eq!(top[1].prompt.family, ChordFamily::AShape);
    }

    #[test]
    fn test_empty_answers_never_most_common() {
        let mut log = MistakeLog::new();
        let fifth = round(ChordFamily::EShape, 5);
        log.record(&fifth, "");
        log.record(&fifth, "");
        log.record(&fifth, "D");

        let misses = &log.problematic()[0];
        assert_eq!(misses.misses, 3);
        assert_eq!(misses.common_answer.as_deref(), Some("D"));

        let mut blank_only = MistakeLog::new();
        blank_only.record(&fifth, "");
        assert_eq!(blank_only.top_misses(1)[0].common_answer, None);
    }

    #[test]
    fn test_reset() {
        let mut log = MistakeLog::new();
        log.record(&round(ChordFamily::AShape, 0), "");
        log.reset();
        assert_eq!(log.total_misses(), 0);
        assert!(log.top_misses(3).is_empty());
    }
}
