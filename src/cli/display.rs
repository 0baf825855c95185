//! Terminal display and UI rendering
//!
//! Features:
//! - Fretboard with the quizzed fret highlighted (Tab peeks at note names)
//! - Prompt and answer line
//! - Score, average time and result notice
//! - Average-time trend chart

use crate::chords::fretboard::{self, RootString, LAST_FRET};
use crate::cli::chart::render_chart;
use crate::cli::input::InputHandler;
use crate::error::TrainerError;
use crate::quiz::{AttemptStats, GameMode, Phase, RoundState, TimeSeriesPoint};
use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Stdout, Write};

const CELL: usize = 4;
const CHART_WIDTH: usize = 30;
const CHART_HEIGHT: usize = 6;

const ROW_TITLE: u16 = 0;
const ROW_FRETBOARD: u16 = 2;
const ROW_PROMPT: u16 = 9;
const ROW_SCORE: u16 = 12;
const ROW_VERDICT: u16 = 15;
const ROW_CHART: u16 = 18;
const ROW_HELP: u16 = 28;

/// Fretboard as text rows: fret numbers, board, inlays, and optionally
/// the A and low E string notes
pub fn fretboard_rows(current_fret: u8, peek: bool) -> Vec<String> {
    let frets = 0..=LAST_FRET;

    let numbers: String = frets.clone().map(|f| format!("{:<width$}", f, width = CELL)).collect();
    let board: String = frets
        .clone()
        .map(|f| if f == current_fret { "|###" } else { "|---" })
        .collect();
    let inlays: String = frets
        .clone()
        .map(|f| match fretboard::inlay_dots(f) {
            2 => "  : ",
            1 => "  . ",
            _ => "    ",
        })
        .collect();

    let mut rows = vec![numbers, board, inlays];
    if peek {
        for string in [RootString::A, RootString::LowE] {
            let notes: String = frets
                .clone()
                .map(|f| format!("{:<width$}", fretboard::note_at(string, f), width = CELL))
                .collect();
            rows.push(notes);
        }
    }
    rows
}

/// Cursor column just past the typed answer on the "> " line
pub fn answer_column(answer: &str) -> u16 {
    u16::try_from(answer.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Terminal display manager
pub struct Display {
    stdout: Stdout,
}

impl Display {
    pub fn new() -> Self {
        Display { stdout: stdout() }
    }

    pub fn clear(&mut self) -> Result<(), TrainerError> {
        execute!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    pub fn show_title(&mut self, mode: GameMode) -> Result<(), TrainerError> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, ROW_TITLE),
            SetAttribute(Attribute::Bold),
            Print("Bar Chord Trainer"),
            SetAttribute(Attribute::Reset),
            Print("  |  Mode: "),
            SetForegroundColor(Color::Cyan),
            Print(mode.label()),
            ResetColor
        )?;
        Ok(())
    }

    pub fn show_fretboard(&mut self, round: &RoundState, peek: bool) -> Result<(), TrainerError> {
        for (i, row) in fretboard_rows(round.fret(), peek).iter().enumerate() {
            let color = match i {
                1 => Color::DarkYellow,
                3 | 4 => Color::DarkGrey,
                _ => Color::Reset,
            };
            queue!(
                self.stdout,
                cursor::MoveTo(0, ROW_FRETBOARD + i as u16),
                SetForegroundColor(color),
                Print(row),
                ResetColor
            )?;
        }

        let hint = if peek { "(Tab to hide notes)" } else { "(Tab to peek)" };
        queue!(
            self.stdout,
            cursor::MoveTo(0, ROW_FRETBOARD + 5),
            SetForegroundColor(Color::DarkGrey),
            Print(hint),
            ResetColor
        )?;
        Ok(())
    }

    pub fn show_prompt(&mut self, round: &RoundState, answer: &str) -> Result<(), TrainerError> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, ROW_PROMPT),
            Print(format!(
                "What is the name of the {} major bar chord at fret {}?",
                round.family().root(),
                round.fret()
            )),
            cursor::MoveTo(0, ROW_PROMPT + 1),
            SetForegroundColor(Color::Yellow),
            Print("> "),
            ResetColor,
            Print(answer)
        )?;
        Ok(())
    }

    pub fn show_score(&mut self, stats: &AttemptStats) -> Result<(), TrainerError> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, ROW_SCORE),
            SetForegroundColor(Color::Magenta),
            Print("Score: "),
            ResetColor,
            Print(format!("{} / {}", stats.correct, stats.total)),
            cursor::MoveTo(0, ROW_SCORE + 1),
            SetForegroundColor(Color::Magenta),
            Print("Average Time: "),
            ResetColor,
            Print(format!("{:.2} seconds", stats.average_secs))
        )?;
        Ok(())
    }

    /// Result notice for the last submission, if any
    pub fn show_verdict(&mut self, phase: &Phase) -> Result<(), TrainerError> {
        let Phase::Evaluated(verdict) = phase else {
            return Ok(());
        };

        let color = if verdict.correct {
            Color::Green
        } else {
            Color::Red
        };
        queue!(
            self.stdout,
            cursor::MoveTo(0, ROW_VERDICT),
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold),
            Print(verdict.title()),
            SetAttribute(Attribute::Reset),
            ResetColor,
            cursor::MoveTo(0, ROW_VERDICT + 1),
            Print(verdict.message())
        )?;
        Ok(())
    }

    pub fn show_chart(&mut self, series: &[TimeSeriesPoint]) -> Result<(), TrainerError> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, ROW_CHART),
            SetForegroundColor(Color::Blue),
            Print("Average time per 5 attempts"),
            ResetColor
        )?;
        for (i, line) in render_chart(series, CHART_WIDTH, CHART_HEIGHT)
            .iter()
            .enumerate()
        {
            queue!(
                self.stdout,
                cursor::MoveTo(0, ROW_CHART + 1 + i as u16),
                Print(line)
            )?;
        }
        Ok(())
    }

    pub fn show_help(&mut self) -> Result<(), TrainerError> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, ROW_HELP),
            SetForegroundColor(Color::DarkGrey),
            Print("ENTER check  |  Ctrl+E/A/B mode  |  Ctrl+R reset  |  Esc/Ctrl+C exit"),
            ResetColor
        )?;
        Ok(())
    }

    /// Put the cursor at the end of the answer line and flush the frame
    pub fn finish_frame(&mut self, answer: &str) -> Result<(), TrainerError> {
        queue!(
            self.stdout,
            cursor::MoveTo(answer_column(answer), ROW_PROMPT + 1)
        )?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&mut self) -> Result<(), TrainerError> {
        execute!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Show
        )?;
        InputHandler::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = InputHandler::disable_raw_mode();
    }
}
