//! TextBuffer: the composed text.
//!
//! Text only grows at the end, and shrinks one character at a time from the end.

/// Composed text buffer.
#[derive(Debug, Clone, Default)]
pub(super) struct TextBuffer {
    text: String,
}

impl TextBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Append a character at the end.
    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Remove the last character. Returns `None` on an empty buffer.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Replace the whole text (used when splicing in a chosen suggestion).
    pub fn replace(&mut self, text: String) {
        self.text = text;
    }
}
