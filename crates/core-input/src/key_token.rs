use core_events::Key;

/// Map `ESC [ <digit> ~` to its key. Unmapped digits collapse to Escape.
pub(crate) fn map_tilde_sequence(digit: u8) -> Key {
    match digit {
        b'1' | b'7' => Key::Home,
        b'3' => Key::Delete,
        b'4' | b'8' => Key::End,
        b'5' => Key::PageUp,
        b'6' => Key::PageDown,
        _ => Key::Escape,
    }
}

/// Map `ESC [ <letter>`.
pub(crate) fn map_csi_letter(letter: u8) -> Key {
    match letter {
        b'A' => Key::ArrowUp,
        b'B' => Key::ArrowDown,
        b'C' => Key::ArrowRight,
        b'D' => Key::ArrowLeft,
        b'H' => Key::Home,
        b'F' => Key::End,
        _ => Key::Escape,
    }
}

/// Map `ESC O <letter>` (the SS3 form some terminals use for Home/End).
pub(crate) fn map_ss3_letter(letter: u8) -> Key {
    match letter {
        b'H' => Key::Home,
        b'F' => Key::End,
        _ => Key::Escape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_digits() {
        assert_eq!(map_tilde_sequence(b'1'), Key::Home);
        assert_eq!(map_tilde_sequence(b'7'), Key::Home);
        assert_eq!(map_tilde_sequence(b'3'), Key::Delete);
        assert_eq!(map_tilde_sequence(b'4'), Key::End);
        assert_eq!(map_tilde_sequence(b'8'), Key::End);
        assert_eq!(map_tilde_sequence(b'5'), Key::PageUp);
        assert_eq!(map_tilde_sequence(b'6'), Key::PageDown);
        assert_eq!(map_tilde_sequence(b'2'), Key::Escape);
    }

    #[test]
    fn ss3_only_knows_home_and_end() {
        assert_eq!(map_ss3_letter(b'H'), Key::Home);
        assert_eq!(map_ss3_letter(b'F'), Key::End);
        assert_eq!(map_ss3_letter(b'A'), Key::Escape);
    }
}
