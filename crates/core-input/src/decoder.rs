use crate::key_token::{map_csi_letter, map_ss3_letter, map_tilde_sequence};
use crate::{ByteSource, InputError, log_sequence};
use core_events::{ESC, Key};

/// Turns a bounded-wait byte stream into logical keys.
///
/// A lone ESC is only reported as [`Key::Escape`] after the follow-up reads
/// time out, so a real Escape press costs up to two read timeouts.
pub struct KeyDecoder<S> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Block until one key is available.
    pub fn read_key(&mut self) -> Result<Key, InputError> {
        let first = loop {
            if let Some(b) = self.source.read_byte()? {
                break b;
            }
        };
        if first != ESC {
            return Ok(Key::Byte(first));
        }
        self.read_escape()
    }

    fn read_escape(&mut self) -> Result<Key, InputError> {
        let Some(b0) = self.source.read_byte()? else {
            return Ok(Key::Escape);
        };
        let Some(b1) = self.source.read_byte()? else {
            return Ok(Key::Escape);
        };

        let key = match b0 {
            b'[' if b1.is_ascii_digit() => {
                let Some(term) = self.source.read_byte()? else {
                    return Ok(Key::Escape);
                };
                let key = if term == b'~' {
                    map_tilde_sequence(b1)
                } else {
                    Key::Escape
                };
                log_sequence(&[ESC, b0, b1, term], &key);
                return Ok(key);
            }
            b'[' => map_csi_letter(b1),
            b'O' => map_ss3_letter(b1),
            _ => Key::Escape,
        };
        log_sequence(&[ESC, b0, b1], &key);
        Ok(key)
    }
}
