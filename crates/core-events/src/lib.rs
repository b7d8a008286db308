//! Logical key events produced by the input decoder and consumed by the dispatcher.
//!
//! A key is either a raw byte (printable text, a control chord, Enter as `\r`,
//! Backspace as 127) or one of the named keys that arrive as escape sequences.

use std::fmt;

/// The byte a terminal sends for the Backspace key.
pub const BACKSPACE: u8 = 127;
/// Carriage return; Enter in raw mode (no CR→NL translation).
pub const ENTER: u8 = b'\r';
/// Escape byte that starts every CSI / SS3 sequence.
pub const ESC: u8 = 0x1b;

/// Mask a key the way the terminal does for Ctrl chords (`Ctrl-Q` == `ctrl(b'q')`).
pub const fn ctrl(k: u8) -> u8 {
    k & 0x1f
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A single byte passed through verbatim.
    Byte(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    Escape,
}

impl Key {
    pub const fn ctrl(k: u8) -> Self {
        Key::Byte(ctrl(k))
    }

    pub fn is_backspace(self) -> bool {
        matches!(self, Key::Byte(BACKSPACE)) || self == Key::ctrl(b'h')
    }

    /// Byte that may be inserted into a document row: tab, anything from space
    /// upward except DEL. Other control bytes are chords, never text.
    pub fn insertable(self) -> Option<u8> {
        match self {
            Key::Byte(b) if b == b'\t' || (b >= 0x20 && b != BACKSPACE) => Some(b),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Byte(BACKSPACE) => f.write_str("Backspace"),
            Key::Byte(ENTER) => f.write_str("Enter"),
            Key::Byte(b) if *b < 0x20 => write!(f, "Ctrl-{}", (b | 0x40) as char),
            Key::Byte(b) if b.is_ascii() => write!(f, "{}", *b as char),
            Key::Byte(b) => write!(f, "0x{b:02x}"),
            other => write!(f, "{other:?}"),
        }
    }
}
