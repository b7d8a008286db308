//! Unbuffered terminal output.
//!
//! `io::Stdout` is line buffered, which splits a frame at its last `\r\n`
//! into two writes. [`TerminalOutput`] owns its own handle on fd 1 with no
//! buffering in between, so each `write_all` of a frame reaches the terminal
//! as a single write.

use std::fs::File;
use std::io::{self, Write};
use std::os::fd::AsFd;

#[derive(Debug)]
pub struct TerminalOutput<W = File> {
    inner: W,
}

impl TerminalOutput<File> {
    /// Duplicate standard output's descriptor.
    pub fn stdout() -> io::Result<Self> {
        let fd = io::stdout().as_fd().try_clone_to_owned()?;
        Ok(Self::new(File::from(fd)))
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }
}

impl<W: Write> Write for TerminalOutput<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
