//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture (the loop also drives the advance timer)
//! - Control-key shortcuts for mode switching and reset
//! - Ctrl+C graceful exit

use crate::quiz::GameMode;
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// What a keystroke asks the trainer to do
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Type(char),
    Backspace,
    Submit,
    TogglePeek,
    SetMode(GameMode),
    Reset,
    /// Esc: close the result notice, or quit when none is shown
    Escape,
    Quit,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for keystroke with timeout (non-blocking)
    /// Returns Some(KeyEvent) if key pressed, None if timeout
    pub fn read_key(&self) -> IoResult<Option<KeyEvent>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                event::Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Map a key event to a trainer command
    pub fn command(key: &KeyEvent) -> Option<Command> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                'c' => Some(Command::Quit),
                'e' => Some(Command::SetMode(GameMode::EShape)),
                'a' => Some(Command::SetMode(GameMode::AShape)),
                'b' => Some(Command::SetMode(GameMode::Both)),
                'r' => Some(Command::Reset),
                _ => None,
            },
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => None,
            KeyCode::Char(c) => Some(Command::Type(c)),
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Enter => Some(Command::Submit),
            KeyCode::Tab => Some(Command::TogglePeek),
            KeyCode::Esc => Some(Command::Escape),
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
