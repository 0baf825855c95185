//! Quiz logic: round selection, answer checking, statistics
//!
//! # Components
//! - `round.rs`: GameMode, RoundState and next-round selection
//! - `answer.rs`: Case-insensitive answer evaluation
//! - `stats.rs`: Score, running average time and chart buckets
//! - `mistakes.rs`: Missed prompts and common wrong answers
//! - `timer.rs`: Cancellable auto-advance deadline
//! - `state.rs`: QuizController owning the round lifecycle
//! - `summary.rs`: End-of-session report

pub mod answer;
pub mod mistakes;
pub mod round;
pub mod state;
pub mod stats;
pub mod summary;
pub mod timer;

pub use round::{GameMode, RoundState};
pub use state::{Phase, QuizController};
pub use summary::SessionSummary;
pub use stats::{AttemptStats, TimeSeriesPoint};
