//! Bar Chord Trainer - name the major bar chord at a fret
//!
//! Single-session, self-contained CLI application.
//! Drills E-shape and A-shape bar chords and tracks response time.

mod chords;
mod cli;
mod config;
mod error;
mod quiz;

use clap::Parser;
use cli::display::Display;
use cli::input::{Command, InputHandler};
use config::{TrainerConfig, DEFAULT_ADVANCE_DELAY_MS};
use error::TrainerError;
use quiz::{GameMode, Phase, QuizController, SessionSummary};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "Bar Chord Trainer")]
#[command(about = "Learn the E and A major bar chords by fret")]
struct Args {
    /// Chord shapes to quiz (e, a or both)
    #[arg(short, long, default_value = "e")]
    mode: GameMode,

    /// Pause after a correct answer before the next chord (milliseconds)
    #[arg(long, default_value_t = DEFAULT_ADVANCE_DELAY_MS)]
    advance_delay_ms: u64,

    /// Seed for reproducible chord order
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Print the session summary as JSON
    #[arg(long)]
    json: bool,
}

impl TryFrom<Args> for TrainerConfig {
    type Error = TrainerError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Ok(TrainerConfig::new(args.mode, args.advance_delay_ms)?
            .with_seed(args.seed)
            .with_log_file(args.log_file)
            .with_debug(args.debug)
            .with_json_summary(args.json))
    }
}

/// Route tracing output to the log file; raw mode leaves no room for it on screen
fn init_logging(log_file: Option<&Path>, debug: bool) -> Result<(), TrainerError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file = File::create(path).map_err(|source| TrainerError::LogFile {
        path: path.display().to_string(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TrainerError::Logging(e.to_string()))
}

fn render(display: &mut Display, quiz: &QuizController, peek: bool) -> Result<(), TrainerError> {
    display.clear()?;
    display.show_title(quiz.mode())?;
    display.show_fretboard(quiz.round(), peek)?;
    display.show_prompt(quiz.round(), quiz.answer())?;
    display.show_score(&quiz.stats())?;
    display.show_verdict(quiz.phase())?;
    display.show_chart(quiz.series())?;
    display.show_help()?;
    display.finish_frame(quiz.answer())
}

fn run(display: &mut Display, quiz: &mut QuizController) -> Result<(), TrainerError> {
    let input = InputHandler::new();
    let mut peek = false;
    let mut dirty = true;

    // Event loop
    loop {
        if quiz.tick(Instant::now()) {
            dirty = true;
        }

        if dirty {
            render(display, quiz, peek)?;
            dirty = false;
        }

        let Some(key) = input.read_key()? else {
            continue;
        };
        let Some(command) = InputHandler::command(&key) else {
            continue;
        };

        let now = Instant::now();
        match command {
            Command::Quit => break,
            Command::Escape => {
                if !quiz.dismiss() && !matches!(quiz.phase(), Phase::Evaluated(_)) {
                    break;
                }
            }
            Command::Type(c) => quiz.push_char(c),
            Command::Backspace => quiz.backspace(),
            Command::Submit => {
                quiz.submit(now);
            }
            Command::TogglePeek => peek = !peek,
            Command::SetMode(mode) => quiz.change_mode(mode, now),
            Command::Reset => quiz.reset(now),
        }
        dirty = true;
    }

    Ok(())
}

fn print_summary(summary: &SessionSummary, json: bool) -> Result<(), TrainerError> {
    if json {
        println!("{}", summary.to_json()?);
        return Ok(());
    }

    println!("\nSession Complete!");
    println!(
        "Final Stats: {} / {} correct ({}%) | average {:.2}s",
        summary.correct,
        summary.total,
        summary.accuracy_pct(),
        summary.average_secs
    );

    for miss in &summary.problem_prompts {
        println!(
            "Keep practicing: {} fret {} is {} (missed {} times{})",
            miss.prompt.family,
            miss.prompt.fret,
            miss.prompt.expected,
            miss.misses,
            miss.common_answer
                .as_deref()
                .map(|a| format!(", often answered \"{}\"", a))
                .unwrap_or_default()
        );
    }

    Ok(())
}

fn main() -> Result<(), TrainerError> {
    let config = TrainerConfig::try_from(Args::parse())?;
    init_logging(config.log_file.as_deref(), config.debug)?;
    info!(mode = %config.mode, seed = ?config.seed, "Starting trainer");

    let mut quiz = QuizController::new(
        config.mode,
        config.advance_delay,
        config.seed,
        Instant::now(),
    );

    InputHandler::enable_raw_mode()?;
    let mut display = Display::new();
    let outcome = run(&mut display, &mut quiz);

    // Cleanup
    display.shutdown()?;
    outcome?;

    let summary = SessionSummary::from_controller(&quiz);
    info!(
        correct = summary.correct,
        total = summary.total,
        misses = quiz.mistakes().total_misses(),
        "Session finished"
    );
    print_summary(&summary, config.json_summary)
}
