//! Window size discovery.
//!
//! The ioctl path (via `crossterm::terminal::size`) is tried first. When it
//! fails or reports zero columns, the cursor is pushed to the bottom-right
//! corner and the terminal is asked where it ended up (`ESC[6n`), replying
//! `ESC[<row>;<col>R` on the input stream.

use crate::TerminalError;
use core_input::ByteSource;
use crossterm::QueueableCommand;
use crossterm::cursor::{MoveDown, MoveRight};
use std::io::Write;

const REPORT_MAX: usize = 31;

/// Terminal size as `(rows, cols)`.
pub fn window_size<S, W>(source: &mut S, out: &mut W) -> Result<(usize, usize), TerminalError>
where
    S: ByteSource,
    W: Write,
{
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 => Ok((usize::from(rows), usize::from(cols))),
        other => {
            tracing::debug!(target: "terminal", ioctl_ok = other.is_ok(), "window_size_fallback");
            out.queue(MoveRight(999))?;
            out.queue(MoveDown(999))?;
            cursor_position(source, out)
        }
    }
}

/// Ask for the cursor position and parse the reply.
pub fn cursor_position<S, W>(source: &mut S, out: &mut W) -> Result<(usize, usize), TerminalError>
where
    S: ByteSource,
    W: Write,
{
    out.write_all(b"\x1b[6n")?;
    out.flush()?;

    let mut reply = Vec::with_capacity(REPORT_MAX);
    while reply.len() < REPORT_MAX {
        match source.read_byte()? {
            Some(b'R') | None => break,
            Some(b) => reply.push(b),
        }
    }
    parse_cursor_report(&reply).ok_or(TerminalError::WindowSize)
}

/// Parse `ESC [ <row> ; <col>` (the trailing `R` already stripped).
pub fn parse_cursor_report(reply: &[u8]) -> Option<(usize, usize)> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}
