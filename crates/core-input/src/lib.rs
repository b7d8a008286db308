//! Raw byte input and escape-sequence decoding.
//!
//! The terminal is read one byte at a time with a bounded wait (raw mode with
//! `VMIN = 0`, `VTIME = 1`). [`KeyDecoder`] turns that byte stream into one
//! [`core_events::Key`] per call, using the timeout to tell a lone Escape press
//! apart from the start of a CSI sequence.

mod decoder;
mod key_token;
mod source;

pub use decoder::KeyDecoder;
pub use source::{ByteSource, ScriptedSource, StdinSource};

use thiserror::Error;

/// Unrecoverable input failure. Anything other than "no data yet".
#[derive(Debug, Error)]
pub enum InputError {
    #[error("read: {0}")]
    Read(#[from] std::io::Error),
    #[error("input closed")]
    Closed,
}

#[inline]
pub(crate) fn log_sequence(bytes: &[u8], key: &core_events::Key) {
    tracing::trace!(target: "input.decode", len = bytes.len(), %key, "escape_sequence");
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sequence_log_records_length_and_key() {
        let buf = SharedBuf::default();
        let sink = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || sink.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            super::log_sequence(b"\x1b[A", &core_events::Key::ArrowUp);
        });

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("input.decode"), "{out}");
        assert!(out.contains("len=3"), "{out}");
        assert!(out.contains("key=ArrowUp"), "{out}");
    }
}
