//! Editor state: the document, cursor, viewport and status message.
//!
//! Everything the control loop mutates lives in one [`EditorState`] value that
//! is passed by `&mut` to the dispatcher and compositor. Cursor columns are in
//! character space; the render column is derived on demand with
//! [`EditorState::rx`].

mod document;

pub use document::Document;

use std::time::{Duration, Instant};

/// Cursor position in character space. `cy == num_rows` is the virtual line
/// past the end of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub cx: usize,
    pub cy: usize,
}

impl Cursor {
    pub fn new(cx: usize, cy: usize) -> Self {
        Self { cx, cy }
    }
}

/// Top-left document coordinate on screen plus the text area extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub row_off: usize,
    pub col_off: usize,
    /// Rows available for document text (terminal rows minus status and message lines).
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_off: 0,
            col_off: 0,
            rows,
            cols,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub created: Instant,
}

impl StatusMessage {
    pub fn is_live(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.created) < timeout
    }
}

/// Lines reserved below the text area: status bar and message bar.
pub const RESERVED_ROWS: usize = 2;

#[derive(Debug, Clone)]
pub struct EditorState {
    pub document: Document,
    pub cursor: Cursor,
    pub viewport: Viewport,
    status: Option<StatusMessage>,
}

impl EditorState {
    /// `term_rows`/`term_cols` is the full terminal size; two rows are reserved.
    pub fn new(document: Document, term_rows: usize, term_cols: usize) -> Self {
        Self {
            document,
            cursor: Cursor::default(),
            viewport: Viewport::new(term_rows.saturating_sub(RESERVED_ROWS), term_cols),
            status: None,
        }
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.set_status_at(msg, Instant::now());
    }

    pub fn set_status_at<S: Into<String>>(&mut self, msg: S, created: Instant) {
        let text = msg.into();
        tracing::debug!(target: "state.status", len = text.len(), "status_set");
        self.status = Some(StatusMessage { text, created });
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Status text if it is still within `timeout` of being set.
    pub fn live_status(&self, now: Instant, timeout: Duration) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|m| !m.text.is_empty() && m.is_live(now, timeout))
            .map(|m| m.text.as_str())
    }

    /// Render column of the cursor (0 on the virtual last line).
    pub fn rx(&self) -> usize {
        self.document
            .row(self.cursor.cy)
            .map_or(0, |row| row.cx_to_rx(self.cursor.cx))
    }

    /// Length of the cursor's row, 0 on the virtual last line.
    pub fn current_row_len(&self) -> usize {
        self.document.row(self.cursor.cy).map_or(0, |r| r.size())
    }
}
