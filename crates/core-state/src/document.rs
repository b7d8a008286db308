//! Ordered rows plus the dirty counter and bound filename.
//!
//! All structural and content edits go through `Document` so the counter
//! stays exact: each successful mutation adds one. Rows are handed out only
//! by shared reference; the match overlay used by search is the single
//! mutation that does not count as an edit.

use core_text::{Highlight, Row};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Document {
    rows: Vec<Row>,
    dirty: usize,
    filename: Option<PathBuf>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a clean document from loaded lines.
    pub fn from_lines<I, L>(lines: I, filename: Option<PathBuf>) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            rows: lines.into_iter().map(Row::new).collect(),
            dirty: 0,
            filename,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    pub fn dirty(&self) -> usize {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    pub fn filename(&self) -> Option<&std::path::Path> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        self.filename = Some(path.into());
    }

    /// Insert a new row before index `at` (`at == num_rows` appends).
    pub fn insert_row(&mut self, at: usize, chars: impl Into<Vec<u8>>) -> bool {
        if at > self.rows.len() {
            return false;
        }
        self.rows.insert(at, Row::new(chars));
        self.dirty += 1;
        true
    }

    pub fn delete_row(&mut self, at: usize) -> Option<Row> {
        if at >= self.rows.len() {
            return None;
        }
        self.dirty += 1;
        Some(self.rows.remove(at))
    }

    pub fn insert_char(&mut self, row: usize, at: usize, byte: u8) -> bool {
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        r.insert_char(at, byte);
        self.dirty += 1;
        true
    }

    pub fn delete_char(&mut self, row: usize, at: usize) -> bool {
        let deleted = self
            .rows
            .get_mut(row)
            .is_some_and(|r| r.delete_char(at));
        if deleted {
            self.dirty += 1;
        }
        deleted
    }

    pub fn append_to_row(&mut self, row: usize, bytes: &[u8]) -> bool {
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        r.append_bytes(bytes);
        self.dirty += 1;
        true
    }

    /// Split row `row` at character `at`; the tail becomes row `row + 1`.
    /// Counts as a single edit (the inserted row).
    pub fn split_row(&mut self, row: usize, at: usize) -> bool {
        let Some(r) = self.rows.get_mut(row) else {
            return false;
        };
        let tail = r.split_off(at);
        self.rows.insert(row + 1, tail);
        self.dirty += 1;
        true
    }

    /// Overlay the search match highlight; returns the row's previous highlight.
    pub fn overlay_match(&mut self, row: usize, start: usize, len: usize) -> Option<Vec<Highlight>> {
        self.rows.get_mut(row).map(|r| r.overlay_match(start, len))
    }

    pub fn restore_highlight(&mut self, row: usize, saved: Vec<Highlight>) {
        if let Some(r) = self.rows.get_mut(row) {
            r.restore_highlight(saved);
        }
    }

    /// Rows as raw lines for the save collaborator.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(Row::chars)
    }
}
