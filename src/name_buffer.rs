//! Bounded Name Buffer
//!
//! Text typed on the name entry screen. Length is counted in characters, not
//! bytes, and never exceeds the capacity given at construction.

/// Default maximum name length (fits the input box at base resolution)
pub const MAX_NAME_LEN: usize = 16;

/// Bounded text buffer with append/backspace editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameBuffer {
    text: String,
    len: usize,
    capacity: usize,
}

impl NameBuffer {
    pub fn new() -> Self {
        Self::with_capacity(MAX_NAME_LEN)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NameBuffer {
            text: String::new(),
            len: 0,
            capacity,
        }
    }

    /// Appends `ch` if it is printable and there is room.
    ///
    /// Returns whether the character was accepted. A rejected character
    /// leaves the buffer untouched.
    pub fn append(&mut self, ch: char) -> bool {
        if self.is_full() || !is_printable(ch) {
            return false;
        }
        self.text.push(ch);
        self.len += 1;
        true
    }

    /// Removes the last character; no-op when empty
    pub fn backspace(&mut self) {
        if self.text.pop().is_some() {
            self.len -= 1;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }
}

impl Default for NameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Printable means visible glyphs plus the plain space.
///
/// Control characters, line/paragraph separators and other whitespace
/// (tabs, newlines, carriage returns) are rejected.
pub fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    !ch.is_control() && !ch.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_append_and_backspace() {
        let mut name = NameBuffer::new();
        assert!(name.append('A'));
        assert!(name.append('B'));
        name.backspace();
        assert!(name.append('C'));
        assert_eq!(name.as_str(), "AC");
        assert_eq!(name.len(), 2);
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut name = NameBuffer::new();
        name.backspace();
        assert!(name.is_empty());
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn test_full_buffer_drops_input() {
        let mut name = NameBuffer::new();
        for _ in 0..MAX_NAME_LEN {
            assert!(name.append('x'));
        }
        assert!(name.is_full());
        assert!(!name.append('y'));
        assert_eq!(name.len(), MAX_NAME_LEN);
        assert_eq!(name.as_str(), "x".repeat(MAX_NAME_LEN));
    }

    #[test]
    fn test_rejects_non_printable() {
        let mut name = NameBuffer::new();
        assert!(!name.append('\r'));
        assert!(!name.append('\t'));
        assert!(!name.append('\u{7f}'));
        assert!(name.is_empty());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut name = NameBuffer::with_capacity(2);
        assert!(name.append('é'));
        assert!(name.append('ß'));
        assert!(!name.append('a'));
        assert_eq!(name.len(), 2);
        name.backspace();
        assert_eq!(name.as_str(), "é");
    }

    #[test]
    fn test_space_is_printable() {
        assert!(is_printable(' '));
        assert!(is_printable('~'));
        assert!(!is_printable('\n'));
    }

    proptest! {
        #[test]
        fn full_buffer_is_unchanged_by_append(ch in any::<char>().prop_filter("printable", |c| is_printable(*c))) {
            let mut name = NameBuffer::new();
            for _ in 0..MAX_NAME_LEN {
                name.append('z');
            }
            let before = name.clone();
            prop_assert!(!name.append(ch));
            prop_assert_eq!(name, before);
        }
    }
}
