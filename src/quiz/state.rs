//! Quiz controller: the single owner of quiz state
//!
//! Maintains:
//! - Current mode and round
//! - Answer being typed and the last verdict
//! - Running statistics and mistake log
//! - Pending auto-advance after a correct answer

use crate::quiz::answer::evaluate;
use crate::quiz::mistakes::MistakeLog;
use crate::quiz::round::{next_round, GameMode, RoundState};
use crate::quiz::stats::{AttemptStats, StatsTracker, TimeSeriesPoint};
use crate::quiz::timer::AdvanceTimer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of one submitted answer
#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub correct: bool,
    pub expected: &'static str,
    pub given: String,
    pub elapsed_secs: f64,
}

impl Verdict {
    pub fn title(&self) -> &'static str {
        if self.correct {
            "Correct!"
        } else {
            "Incorrect"
        }
    }

    pub fn message(&self) -> String {
        if self.correct {
            format!("Well done! {} is correct.", self.expected)
        } else {
            format!(
                "The correct answer is {}. Keep practicing!",
                self.expected
            )
        }
    }
}

/// Where the current round is in its lifecycle
#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    AwaitingAnswer,
    Evaluated(Verdict),
}

/// Owns every piece of quiz state and applies user and timer events to it
#[derive(Debug)]
pub struct QuizController {
    mode: GameMode,
    round: RoundState,
    phase: Phase,
    answer: String,
    stats: StatsTracker,
    mistakes: MistakeLog,
    advance: AdvanceTimer,
    advance_delay: Duration,
    rng: StdRng,
}

impl QuizController {
    /// Start a quiz; `seed` makes round selection reproducible
    pub fn new(mode: GameMode, advance_delay: Duration, seed: Option<u64>, now: Instant) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let round = next_round(mode, None, &mut rng, now);
        debug!(family = %round.family(), fret = round.fret(), "First round");

        QuizController {
            mode,
            round,
            phase: Phase::AwaitingAnswer,
            answer: String::new(),
            stats: StatsTracker::new(),
            mistakes: MistakeLog::new(),
            advance: AdvanceTimer::new(),
            advance_delay,
            rng,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn stats(&self) -> AttemptStats {
        self.stats.stats()
    }

    pub fn series(&self) -> &[TimeSeriesPoint] {
        self.stats.series()
    }

    pub fn mistakes(&self) -> &MistakeLog {
        &self.mistakes
    }

    #[allow(dead_code)]
    pub fn pending_advance(&self) -> Option<Instant> {
        self.advance.due()
    }

    fn start_round(&mut self, now: Instant) {
        let previous = self.round.fret();
        self.round = next_round(self.mode, Some(previous), &mut self.rng, now);
        self.phase = Phase::AwaitingAnswer;
        self.answer.clear();
        debug!(
            family = %self.round.family(),
            fret = self.round.fret(),
            "Round started"
        );
    }

    fn cancel_advance(&mut self) {
        if self.advance.cancel() {
            debug!("Pending advance cancelled");
        }
    }

    /// Submit the typed answer. Ignored (returns None) while a correct
    /// answer is waiting to auto-advance.
    pub fn submit(&mut self, now: Instant) -> Option<Verdict> {
        if self.advance.is_pending() {
            return None;
        }

        let elapsed_secs = self.round.elapsed(now).as_secs_f64();
        let correct = evaluate(&self.answer, &self.round);
        let stats = self.stats.record(correct, elapsed_secs);

        if correct {
            self.advance.schedule(now, self.advance_delay);
        } else {
            self.mistakes.record(&self.round, &self.answer);
        }

        let verdict = Verdict {
            correct,
            expected: self.round.expected_name(),
            given: self.answer.clone(),
            elapsed_secs,
        };
        info!(
            correct,
            expected = verdict.expected,
            given = %verdict.given,
            elapsed_secs,
            score = stats.correct,
            total = stats.total,
            "Answer evaluated"
        );

        self.phase = Phase::Evaluated(verdict.clone());
        Some(verdict)
    }

    /// Hide an incorrect verdict and return to answering the same round
    pub fn dismiss(&mut self) -> bool {
        if self.advance.is_pending() {
            return false;
        }
        match self.phase {
            Phase::Evaluated(_) => {
                self.phase = Phase::AwaitingAnswer;
                true
            }
            Phase::AwaitingAnswer => false,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.advance.is_pending() {
            return;
        }
        self.dismiss();
        self.answer.push(c);
    }

    pub fn backspace(&mut self) {
        if self.advance.is_pending() {
            return;
        }
        self.dismiss();
        self.answer.pop();
    }

    /// Switch modes: abandons the current round and any pending advance.
    /// Selecting the active mode again changes nothing.
    pub fn change_mode(&mut self, mode: GameMode, now: Instant) {
        if mode == self.mode {
            return;
        }
        self.cancel_advance();
        info!(from = %self.mode, to = %mode, "Mode changed");
        self.mode = mode;
        self.start_round(now);
    }

    /// Zero all statistics and start over in the current mode
    pub fn reset(&mut self, now: Instant) {
        self.cancel_advance();
        self.stats.reset();
        self.mistakes.reset();
        info!(mode = %self.mode, "Quiz reset");
        self.start_round(now);
    }

    /// Fire the auto-advance once due. Returns true if a new round started.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.advance.fire_if_due(now) {
            debug!("Auto-advancing");
            self.start_round(now);
            true
        } else {
            false
        }
    }
}
