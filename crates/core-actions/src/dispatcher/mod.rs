//! Key dispatch.
//!
//! Sub-modules:
//! * `edit`   - text mutation (insert, newline, delete)
//! * `motion` - cursor movement
//!
//! Save and find open modal prompts (see `crate::prompt`), which is why the
//! dispatcher lives on [`Editor`] rather than on bare state.

use crate::{Editor, FatalError};
use core_events::{BACKSPACE, ENTER, Key};
use core_input::ByteSource;
use std::io::Write;

pub mod edit;
pub mod motion;

pub use motion::Direction;

pub(crate) const CTRL_F: Key = Key::ctrl(b'f');
pub(crate) const CTRL_H: Key = Key::ctrl(b'h');
pub(crate) const CTRL_L: Key = Key::ctrl(b'l');
pub(crate) const CTRL_Q: Key = Key::ctrl(b'q');
pub(crate) const CTRL_S: Key = Key::ctrl(b's');

/// What the control loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    Continue,
    Quit,
}

impl<S: ByteSource, W: Write> Editor<S, W> {
    /// Apply one decoded key.
    pub fn process_key(&mut self, key: Key) -> Result<DispatchResult, FatalError> {
        tracing::trace!(target: "actions.dispatch", %key, cx = self.state.cursor.cx, cy = self.state.cursor.cy, "key");
        let state = &mut self.state;
        match key {
            Key::Byte(ENTER) => edit::insert_newline(state),
            CTRL_Q => {
                if state.document.is_dirty() && self.quit_remaining > 0 {
                    state.set_status(format!(
                        "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                        self.quit_remaining
                    ));
                    self.quit_remaining -= 1;
                    tracing::debug!(target: "actions.dispatch", remaining = self.quit_remaining, "quit_refused_dirty");
                    return Ok(DispatchResult::Continue);
                }
                return Ok(DispatchResult::Quit);
            }
            CTRL_S => self.save()?,
            CTRL_F => self.find()?,
            Key::Home => motion::line_start(state),
            Key::End => motion::line_end(state),
            Key::Delete => {
                motion::move_cursor(state, Direction::Right);
                edit::delete_char(state);
            }
            Key::Byte(BACKSPACE) | CTRL_H => edit::delete_char(state),
            Key::PageUp => motion::page(state, Direction::Up),
            Key::PageDown => motion::page(state, Direction::Down),
            Key::ArrowUp => motion::move_cursor(state, Direction::Up),
            Key::ArrowDown => motion::move_cursor(state, Direction::Down),
            Key::ArrowLeft => motion::move_cursor(state, Direction::Left),
            Key::ArrowRight => motion::move_cursor(state, Direction::Right),
            Key::Escape | CTRL_L => {}
            other => {
                if let Some(b) = other.insertable() {
                    edit::insert_char(state, b);
                }
            }
        }
        self.quit_remaining = self.quit_times;
        Ok(DispatchResult::Continue)
    }
}
