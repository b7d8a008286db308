//! Frame composition.
//!
//! [`Compositor::compose`] runs the scroll clamp, then assembles the whole
//! screen (text rows, status bar, message bar, cursor placement) into one byte
//! buffer. The cursor is hidden while drawing and shown again at the end.

pub mod status;
pub mod viewport;
pub mod writer;

use core_state::EditorState;
use core_text::Highlight;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::io;
use std::time::{Duration, Instant};
use writer::FrameWriter;

/// Foreground for a highlight category; `None` is the terminal default.
pub fn color_for(hl: Highlight) -> Option<Color> {
    match hl {
        Highlight::Normal => None,
        Highlight::Number => Some(Color::Red),
        Highlight::Match => Some(Color::Blue),
    }
}

#[derive(Debug, Clone)]
pub struct Compositor {
    banner: String,
    message_timeout: Duration,
}

impl Compositor {
    pub fn new(banner: impl Into<String>, message_timeout: Duration) -> Self {
        Self {
            banner: banner.into(),
            message_timeout,
        }
    }

    /// Scroll, then build the complete frame for `state` as of `now`.
    pub fn compose(&self, state: &mut EditorState, now: Instant) -> io::Result<Vec<u8>> {
        let rx = state.rx();
        viewport::scroll(&mut state.viewport, state.cursor.cy, rx);

        let mut w = FrameWriter::new();
        w.queue(Hide)?;
        w.queue(MoveTo(0, 0))?;
        self.draw_rows(&mut w, state)?;
        draw_status_bar(&mut w, state)?;
        self.draw_message_bar(&mut w, state, now)?;

        let vp = &state.viewport;
        let row = state.cursor.cy.saturating_sub(vp.row_off);
        let col = rx.saturating_sub(vp.col_off);
        w.queue(MoveTo(to_u16(col), to_u16(row)))?;
        w.queue(Show)?;
        tracing::trace!(target: "render", bytes = w.len(), row_off = vp.row_off, col_off = vp.col_off, "frame");
        Ok(w.into_bytes())
    }

    fn draw_rows(&self, w: &mut FrameWriter, state: &EditorState) -> io::Result<()> {
        let vp = &state.viewport;
        let doc = &state.document;
        for y in 0..vp.rows {
            match doc.row(y + vp.row_off) {
                Some(row) => {
                    let start = vp.col_off.min(row.rsize());
                    let end = (vp.col_off + vp.cols).min(row.rsize());
                    let mut current: Option<Color> = None;
                    for (&b, &hl) in row.render()[start..end]
                        .iter()
                        .zip(&row.highlight()[start..end])
                    {
                        let color = color_for(hl);
                        if color != current {
                            w.queue(SetForegroundColor(color.unwrap_or(Color::Reset)))?;
                            current = color;
                        }
                        w.bytes(&[b]);
                    }
                    w.queue(SetForegroundColor(Color::Reset))?;
                }
                None if doc.num_rows() == 0 && y == vp.rows / 3 => {
                    self.draw_banner(w, vp.cols);
                }
                None => w.text("~"),
            }
            w.queue(Clear(ClearType::UntilNewLine))?;
            w.text("\r\n");
        }
        Ok(())
    }

    fn draw_banner(&self, w: &mut FrameWriter, cols: usize) {
        let text: String = self.banner.chars().take(cols).collect();
        let mut padding = (cols - text.chars().count()) / 2;
        if padding > 0 {
            w.text("~");
            padding -= 1;
        }
        w.text(&" ".repeat(padding));
        w.text(&text);
    }

    fn draw_message_bar(&self, w: &mut FrameWriter, state: &EditorState, now: Instant) -> io::Result<()> {
        w.queue(Clear(ClearType::UntilNewLine))?;
        if let Some(msg) = state.live_status(now, self.message_timeout) {
            let clipped: String = msg.chars().take(state.viewport.cols).collect();
            w.text(&clipped);
        }
        Ok(())
    }
}

fn draw_status_bar(w: &mut FrameWriter, state: &EditorState) -> io::Result<()> {
    let line = status::build_status(&status::StatusContext {
        file_name: state.document.filename(),
        num_rows: state.document.num_rows(),
        dirty: state.document.is_dirty(),
        cy: state.cursor.cy,
        cols: state.viewport.cols,
    });
    w.queue(SetAttribute(Attribute::Reverse))?;
    w.text(&line);
    w.queue(SetAttribute(Attribute::NoReverse))?;
    w.text("\r\n");
    Ok(())
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
