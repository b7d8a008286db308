use crate::InputError;
use std::collections::VecDeque;
use std::io::{self, Read};

/// A byte stream whose reads wait a bounded time and yield at most one byte.
pub trait ByteSource {
    /// `Ok(None)` means the wait elapsed with nothing to read.
    fn read_byte(&mut self) -> Result<Option<u8>, InputError>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> Result<Option<u8>, InputError> {
        (**self).read_byte()
    }
}

/// Standard input in raw mode. The timeout itself comes from the termios
/// `VTIME` setting; a read that returns zero bytes is a timeout.
pub struct StdinSource {
    stdin: io::Stdin,
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinSource {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl ByteSource for StdinSource {
    fn read_byte(&mut self) -> Result<Option<u8>, InputError> {
        let mut buf = [0u8; 1];
        match self.stdin.lock().read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted) => {
                Ok(None)
            }
            Err(e) => Err(InputError::Read(e)),
        }
    }
}

/// Pre-recorded input for driving the editor without a terminal.
///
/// Each entry is either a byte or a timeout. Once the script is exhausted
/// every read fails with [`InputError::Closed`].
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    script: VecDeque<Option<u8>>,
}

impl ScriptedSource {
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        let mut s = Self::default();
        s.push_bytes(bytes);
        s
    }

    pub fn push_bytes(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        self.script.extend(bytes.as_ref().iter().copied().map(Some));
        self
    }

    pub fn push_timeout(&mut self) -> &mut Self {
        self.script.push_back(None);
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ByteSource for ScriptedSource {
    fn read_byte(&mut self) -> Result<Option<u8>, InputError> {
        self.script.pop_front().ok_or(InputError::Closed)
    }
}
