//! Terminal backend: raw mode, size discovery, screen clearing.
//!
//! Raw mode is applied through termios directly because the editor depends on
//! `VMIN = 0` / `VTIME = 1` read semantics, which crossterm's raw mode does not
//! expose. Escape sequences are emitted through crossterm commands.

pub mod output;
pub mod raw;
pub mod size;

pub use output::TerminalOutput;
pub use raw::RawMode;
pub use size::{parse_cursor_report, window_size};

use core_input::InputError;
use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use thiserror::Error;

/// Failures that make further terminal interaction unsafe. Never retried.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("tcgetattr: {0}")]
    GetAttr(io::Error),
    #[error("tcsetattr: {0}")]
    SetAttr(io::Error),
    #[error("window size: no usable cursor position report")]
    WindowSize,
    #[error("window size: {0}")]
    Io(#[from] io::Error),
    #[error("window size: {0}")]
    Input(#[from] InputError),
}

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<(), TerminalError>;
    fn leave(&mut self) -> Result<(), TerminalError>;
}

/// termios backend over standard input.
#[derive(Default)]
pub struct TermiosBackend {
    raw: Option<RawMode>,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut TermiosBackend,
}

impl TermiosBackend {
    pub fn new() -> Self {
        Self { raw: None }
    }

    pub fn is_raw(&self) -> bool {
        self.raw.is_some()
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>, TerminalError> {
        self.enter()?;
        Ok(TerminalGuard { backend: self })
    }
}

impl TerminalBackend for TermiosBackend {
    fn enter(&mut self) -> Result<(), TerminalError> {
        if self.raw.is_none() {
            self.raw = Some(RawMode::enable()?);
            tracing::debug!(target: "terminal", "raw_mode_enabled");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<(), TerminalError> {
        if let Some(mut raw) = self.raw.take() {
            raw.disable()?;
            tracing::debug!(target: "terminal", "raw_mode_restored");
        }
        Ok(())
    }
}

impl Drop for TermiosBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        let _ = self.backend.leave();
    }
}

/// Clear the whole screen and home the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?;
    out.queue(MoveTo(0, 0))?;
    out.flush()
}
