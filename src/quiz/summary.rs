//! End-of-session report, printable as text or JSON

use crate::quiz::mistakes::PromptMisses;
use crate::quiz::round::GameMode;
use crate::quiz::state::QuizController;
use crate::quiz::stats::TimeSeriesPoint;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct SessionSummary {
    pub mode: GameMode,
    pub correct: u32,
    pub total: u32,
    pub average_secs: f64,
    pub series: Vec<TimeSeriesPoint>,
    pub problem_prompts: Vec<PromptMisses>,
}

impl SessionSummary {
    pub fn from_controller(quiz: &QuizController) -> Self {
        let stats = quiz.stats();
        SessionSummary {
            mode: quiz.mode(),
            correct: stats.correct,
            total: stats.total,
            average_secs: stats.average_secs,
            series: quiz.series().to_vec(),
            problem_prompts: quiz.mistakes().problematic(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn accuracy_pct(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            (self.correct * 100) / self.total
        }
    }
}
