//! Incremental search.
//!
//! The search prompt drives a [`SearchSession`] through the
//! [`PromptObserver`] hook: every keystroke re-runs the scan, arrow keys step
//! to the next or previous matching row, and the current match is tagged in
//! the row's highlight until the next key.

use crate::{Editor, FatalError, PromptObserver};
use core_events::{ENTER, Key};
use core_input::ByteSource;
use core_state::{Document, EditorState};
use core_text::Highlight;
use std::io::Write;

pub const SEARCH_PROMPT: &str = "Search: {} (Use ESC/Arrows/Enter)";

/// First row holding `query`, scanning every row once starting one step
/// away from `from` (row 0 when `from` is `None`) and wrapping at both ends.
/// Returns `(row, render offset)`.
pub fn find_next(doc: &Document, query: &[u8], from: Option<usize>, forward: bool) -> Option<(usize, usize)> {
    let n = doc.num_rows();
    if n == 0 || query.is_empty() {
        return None;
    }
    let mut current = from;
    for _ in 0..n {
        let next = match current {
            None => 0,
            Some(c) if forward => {
                if c + 1 >= n {
                    0
                } else {
                    c + 1
                }
            }
            Some(0) => n - 1,
            Some(c) => (c - 1).min(n - 1),
        };
        current = Some(next);
        if let Some(rx) = doc.row(next).and_then(|r| r.find_in_render(query)) {
            return Some((next, rx));
        }
    }
    None
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    last_match: Option<usize>,
    forward: bool,
    saved: Option<(usize, Vec<Highlight>)>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            last_match: None,
            forward: true,
            saved: None,
        }
    }
}

impl SearchSession {
    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    fn reset(&mut self) {
        self.last_match = None;
        self.forward = true;
    }
}

impl PromptObserver for SearchSession {
    fn on_key(&mut self, state: &mut EditorState, input: &str, key: Key) {
        if let Some((row, cells)) = self.saved.take() {
            state.document.restore_highlight(row, cells);
        }
        match key {
            Key::Byte(ENTER) | Key::Escape => {
                self.reset();
                return;
            }
            Key::ArrowRight | Key::ArrowDown => self.forward = true,
            Key::ArrowLeft | Key::ArrowUp => self.forward = false,
            _ => self.reset(),
        }
        if self.last_match.is_none() {
            self.forward = true;
        }
        if input.is_empty() {
            return;
        }
        let query = input.as_bytes();
        let Some((row, rx)) = find_next(&state.document, query, self.last_match, self.forward) else {
            return;
        };
        tracing::trace!(target: "actions.search", row, rx, "match");
        self.last_match = Some(row);
        state.cursor.cy = row;
        state.cursor.cx = state.document.row(row).map_or(0, |r| r.rx_to_cx(rx));
        // past the end so the next scroll brings the match row to the top
        state.viewport.row_off = state.document.num_rows();
        if let Some(cells) = state.document.overlay_match(row, rx, query.len()) {
            self.saved = Some((row, cells));
        }
    }
}

impl<S: ByteSource, W: Write> Editor<S, W> {
    /// Interactive search. Cancelling puts the cursor and scroll back where
    /// they were; confirming leaves the cursor on the match.
    pub fn find(&mut self) -> Result<(), FatalError> {
        let cursor = self.state.cursor;
        let (row_off, col_off) = (self.state.viewport.row_off, self.state.viewport.col_off);
        let mut session = SearchSession::default();
        let query = self.prompt(SEARCH_PROMPT, &mut session)?;
        if query.is_none() {
            self.state.cursor = cursor;
            self.state.viewport.row_off = row_off;
            self.state.viewport.col_off = col_off;
        }
        tracing::debug!(target: "actions.search", confirmed = query.is_some(), cy = self.state.cursor.cy, "search_done");
        Ok(())
    }
}
