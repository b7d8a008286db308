//! Document rows and their rendered form.
//!
//! A [`Row`] owns the raw bytes the user edits (`chars`) and two derived
//! buffers rebuilt on every mutation: `render`, where each tab is expanded to
//! the next multiple of [`TAB_STOP`], and `highlight`, one category per render
//! cell. Cursor columns live in character space (`cx`); the screen works in
//! render space (`rx`). [`Row::cx_to_rx`] and [`Row::rx_to_cx`] convert between
//! the two.

mod highlight;

pub use highlight::Highlight;

pub const TAB_STOP: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    chars: Vec<u8>,
    render: Vec<u8>,
    highlight: Vec<Highlight>,
}

impl Row {
    pub fn new(chars: impl Into<Vec<u8>>) -> Self {
        let mut row = Self {
            chars: chars.into(),
            render: Vec::new(),
            highlight: Vec::new(),
        };
        row.update();
        row
    }

    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    pub fn size(&self) -> usize {
        self.chars.len()
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn rsize(&self) -> usize {
        self.render.len()
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    /// Insert `byte` before index `at`; an index past the end appends.
    pub fn insert_char(&mut self, at: usize, byte: u8) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, byte);
        self.update();
    }

    /// Remove the byte at `at`. Returns false (and changes nothing) when out of range.
    pub fn delete_char(&mut self, at: usize) -> bool {
        if at >= self.chars.len() {
            return false;
        }
        self.chars.remove(at);
        self.update();
        true
    }

    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.chars.extend_from_slice(bytes);
        self.update();
    }

    /// Cut the row at `at`, keeping `[0, at)` and returning `[at, size)` as a new row.
    pub fn split_off(&mut self, at: usize) -> Row {
        let at = at.min(self.chars.len());
        let tail = self.chars.split_off(at);
        self.update();
        Row::new(tail)
    }

    /// Render column of character index `cx`.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        self.chars
            .iter()
            .take(cx)
            .fold(0, |rx, &b| advance(rx, b))
    }

    /// Character index covering render column `rx`; past the end maps to `size`.
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut cur = 0;
        for (cx, &b) in self.chars.iter().enumerate() {
            cur = advance(cur, b);
            if cur > rx {
                return cx;
            }
        }
        self.chars.len()
    }

    /// Render offset of the first occurrence of `needle`.
    pub fn find_in_render(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() || needle.len() > self.render.len() {
            return None;
        }
        self.render.windows(needle.len()).position(|w| w == needle)
    }

    /// Tag `len` render cells from `start` as [`Highlight::Match`], returning
    /// the previous highlight so it can be put back with [`Row::restore_highlight`].
    pub fn overlay_match(&mut self, start: usize, len: usize) -> Vec<Highlight> {
        let saved = self.highlight.clone();
        let end = start.saturating_add(len).min(self.highlight.len());
        if start < end {
            self.highlight[start..end].fill(Highlight::Match);
        }
        saved
    }

    /// Put back a highlight saved by [`Row::overlay_match`]. A snapshot whose
    /// length no longer matches the render is discarded and the row re-highlighted.
    pub fn restore_highlight(&mut self, saved: Vec<Highlight>) {
        if saved.len() == self.render.len() {
            self.highlight = saved;
        } else {
            highlight::highlight_render(&self.render, &mut self.highlight);
        }
    }

    fn update(&mut self) {
        self.render.clear();
        for &b in &self.chars {
            if b == b'\t' {
                self.render.push(b' ');
                while self.render.len() % TAB_STOP != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(b);
            }
        }
        highlight::highlight_render(&self.render, &mut self.highlight);
    }
}

#[inline]
fn advance(rx: usize, byte: u8) -> usize {
    if byte == b'\t' {
        rx + TAB_STOP - rx % TAB_STOP
    } else {
        rx + 1
    }
}
