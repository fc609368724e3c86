//! Text statistics — character, word, and line counts.

use serde::{Deserialize, Serialize};

/// Counts for a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Unicode scalar values, not bytes or graphemes.
    pub chars: usize,
    /// Whitespace-delimited words; empty or all-whitespace input counts 0.
    pub words: usize,
    /// Newline-delimited segments, always >= 1.
    pub lines: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let words = if text.trim().is_empty() {
            0
        } else {
            text.split_whitespace().count()
        };
        Self {
            chars: text.chars().count(),
            words,
            lines: text.split('\n').count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text() {
        let stats = TextStats::of("");
        assert_eq!(stats.chars, 0);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn whitespace_only_has_no_words() {
        let stats = TextStats::of("   \t  ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn counts_words_across_whitespace_runs() {
        let stats = TextStats::of("  one   two\tthree  ");
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn counts_lines() {
        let stats = TextStats::of("a\nb\nc");
        assert_eq!(stats.lines, 3);
        // Trailing newline opens one more (empty) segment.
        assert_eq!(TextStats::of("a\nb\n").lines, 3);
    }

    #[test]
    fn chars_are_scalars_not_bytes() {
        let stats = TextStats::of("日本語");
        assert_eq!(stats.chars, 3);
    }
}
