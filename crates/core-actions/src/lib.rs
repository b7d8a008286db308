//! Editor context and command processing.
//!
//! [`Editor`] owns everything the control loop touches: the editor state, the
//! key decoder, the output sink and the compositor. One turn of the loop is
//! [`Editor::step`]: draw a frame, read one key, dispatch it. Modal prompts
//! (save-as, search) run their own draw/read loop inside a dispatch.

pub mod dispatcher;
pub mod io_ops;
pub mod prompt;
pub mod search;

pub use dispatcher::DispatchResult;
pub use prompt::{NoObserver, PromptObserver};

use core_events::Key;
use core_input::{ByteSource, InputError, KeyDecoder};
use core_render::Compositor;
use core_state::EditorState;
use std::io::{self, Write};
use std::time::Instant;
use thiserror::Error;

pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// Errors after which the terminal can no longer be driven safely.
/// Save failures are not fatal; see [`io_ops::SaveError`].
#[derive(Debug, Error)]
pub enum FatalError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("write: {0}")]
    Output(#[from] io::Error),
}

pub struct Editor<S, W> {
    pub state: EditorState,
    keys: KeyDecoder<S>,
    out: W,
    compositor: Compositor,
    quit_times: u32,
    quit_remaining: u32,
}

impl<S: ByteSource, W: Write> Editor<S, W> {
    pub fn new(
        state: EditorState,
        keys: KeyDecoder<S>,
        out: W,
        compositor: Compositor,
        quit_times: u32,
    ) -> Self {
        Self {
            state,
            keys,
            out,
            compositor,
            quit_times,
            quit_remaining: quit_times,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Quit presses still rejected before a dirty document may be abandoned.
    pub fn quit_remaining(&self) -> u32 {
        self.quit_remaining
    }

    /// Compose the current frame and write it in one call.
    pub fn refresh_screen(&mut self) -> Result<(), FatalError> {
        let frame = self.compositor.compose(&mut self.state, Instant::now())?;
        self.out.write_all(&frame)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn read_key(&mut self) -> Result<Key, FatalError> {
        Ok(self.keys.read_key()?)
    }

    /// Draw, wait for one key, apply it.
    pub fn step(&mut self) -> Result<DispatchResult, FatalError> {
        self.refresh_screen()?;
        let key = self.read_key()?;
        self.process_key(key)
    }

    /// Run until a confirmed quit.
    pub fn run(&mut self) -> Result<(), FatalError> {
        tracing::info!(target: "runtime", rows = self.state.document.num_rows(), "loop_start");
        while self.step()? == DispatchResult::Continue {}
        tracing::info!(target: "runtime", "quit");
        Ok(())
    }
}
