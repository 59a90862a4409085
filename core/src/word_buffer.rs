//! Buffer for the word currently being typed.
//!
//! The buffer mirrors the committed codepoints of the in-progress word, one
//! entry per codepoint. The reordering session only ever edits the tail, so
//! unlike a preedit buffer there is no cursor: corrections are pop/push
//! pairs against the end.

use crate::script::PLACEHOLDER;

/// Ordered codepoints of the word in progress. Owned exclusively by one
/// typing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBuffer {
    chars: Vec<char>,
}

impl WordBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Codepoints currently buffered, in storage order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of buffered codepoints.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The last buffered codepoint, if any.
    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    /// Append one codepoint.
    pub fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Remove and return the last codepoint.
    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop()
    }

    /// Drop all buffered codepoints.
    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Whether the buffer tail is the transient placeholder+vowel pair
    /// `[U+200B, ch]` for the given vowel.
    pub fn tail_is_placeholder_pair(&self, ch: char) -> bool {
        let n = self.chars.len();
        n >= 2 && self.chars[n - 1] == ch && self.chars[n - 2] == PLACEHOLDER
    }

    /// Contents as a string, placeholder markers included.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Contents as a string with placeholder markers removed.
    pub fn visible_string(&self) -> String {
        self.chars.iter().filter(|&&c| c != PLACEHOLDER).collect()
    }
}

impl Default for WordBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_roundtrip() {
        let mut b = WordBuffer::new();
        assert!(b.is_empty());
        b.push('\u{1000}');
        b.push('\u{102C}');
        assert_eq!(b.len(), 2);
        assert_eq!(b.last(), Some('\u{102C}'));
        assert_eq!(b.pop(), Some('\u{102C}'));
        assert_eq!(b.chars(), &['\u{1000}']);
    }

    #[test]
    fn placeholder_pair_detection() {
        let mut b = WordBuffer::new();
        b.push(PLACEHOLDER);
        b.push('\u{1031}');
        assert!(b.tail_is_placeholder_pair('\u{1031}'));
        assert!(!b.tail_is_placeholder_pair('\u{1084}'));
        assert_eq!(b.visible_string(), "\u{1031}");
        assert_eq!(b.as_string(), "\u{200B}\u{1031}");
    }
}
