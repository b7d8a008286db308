//! Frame buffer writer.
//!
//! Every command for one frame is queued into a single in-memory buffer and
//! handed to the terminal with one `write_all` + `flush`, so a partially drawn
//! frame is never visible.

use crossterm::{Command, QueueableCommand};
use std::io;

#[derive(Debug, Default)]
pub struct FrameWriter {
    buf: Vec<u8>,
}

impl FrameWriter {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4096),
        }
    }

    pub fn queue(&mut self, cmd: impl Command) -> io::Result<()> {
        self.buf.queue(cmd)?;
        Ok(())
    }

    pub fn bytes(&mut self, b: &[u8]) {
        self.buf.extend_from_slice(b);
    }

    pub fn text(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
