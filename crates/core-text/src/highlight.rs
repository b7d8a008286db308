//! Per-cell highlight categories.
//!
//! The classifier is context free: every ASCII digit is a `Number`, including
//! digits inside identifiers such as `utf8`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    #[default]
    Normal,
    Number,
    /// Transient overlay for the current search match.
    Match,
}

impl Highlight {
    pub fn classify(byte: u8) -> Self {
        if byte.is_ascii_digit() {
            Highlight::Number
        } else {
            Highlight::Normal
        }
    }
}

pub(crate) fn highlight_render(render: &[u8], out: &mut Vec<Highlight>) {
    out.clear();
    out.extend(render.iter().copied().map(Highlight::classify));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_inside_words_are_numbers() {
        let mut hl = Vec::new();
        highlight_render(b"utf8 x", &mut hl);
        assert_eq!(
            hl,
            vec![
                Highlight::Normal,
                Highlight::Normal,
                Highlight::Normal,
                Highlight::Number,
                Highlight::Normal,
                Highlight::Normal
            ]
        );
    }
}
