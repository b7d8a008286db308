//! Modal single-line prompt shown in the message bar.
//!
//! While a prompt is open the editor keeps drawing frames, but keys edit a
//! scratch buffer instead of the document. An optional [`PromptObserver`]
//! sees every key after the buffer has been updated; incremental search is
//! built on that hook.

use crate::dispatcher::CTRL_H;
use crate::{Editor, FatalError};
use core_events::{BACKSPACE, ENTER, Key};
use core_input::ByteSource;
use core_state::EditorState;
use std::io::Write;

pub trait PromptObserver {
    fn on_key(&mut self, state: &mut EditorState, input: &str, key: Key);
}

impl<F> PromptObserver for F
where
    F: FnMut(&mut EditorState, &str, Key),
{
    fn on_key(&mut self, state: &mut EditorState, input: &str, key: Key) {
        self(state, input, key)
    }
}

/// Observer for prompts that only want the final answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObserver;

impl PromptObserver for NoObserver {
    fn on_key(&mut self, _: &mut EditorState, _: &str, _: Key) {}
}

impl<S: ByteSource, W: Write> Editor<S, W> {
    /// Run a prompt. `template` carries one `{}` placeholder for the typed
    /// text. Returns `None` when cancelled with Escape.
    pub fn prompt<O>(&mut self, template: &str, observer: &mut O) -> Result<Option<String>, FatalError>
    where
        O: PromptObserver + ?Sized,
    {
        let mut buf = String::new();
        loop {
            self.state.set_status(template.replace("{}", &buf));
            self.refresh_screen()?;
            let key = self.read_key()?;
            match key {
                Key::Delete | Key::Byte(BACKSPACE) | CTRL_H => {
                    buf.pop();
                }
                Key::Escape => {
                    self.state.set_status("");
                    observer.on_key(&mut self.state, &buf, key);
                    tracing::debug!(target: "actions.prompt", "cancelled");
                    return Ok(None);
                }
                Key::Byte(ENTER) if !buf.is_empty() => {
                    self.state.set_status("");
                    observer.on_key(&mut self.state, &buf, key);
                    return Ok(Some(buf));
                }
                Key::Byte(b) if b.is_ascii() && !b.is_ascii_control() => buf.push(char::from(b)),
                _ => {}
            }
            observer.on_key(&mut self.state, &buf, key);
        }
    }
}
