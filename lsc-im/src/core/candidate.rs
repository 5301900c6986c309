//! Suggestion list management
//!
//! Holds the completion suggestions shown under the text area, with an
//! optional highlight and pagination by the visible list height.

/// An ordered list of suggested words with an optional highlighted entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    /// Suggested words in dictionary order
    words: Vec<String>,
    /// Highlighted word index (None until the user highlights one)
    cursor: Option<usize>,
    /// Number of words visible at once
    page_size: usize,
}

impl SuggestionList {
    /// Default page size, matching the height of the suggestion box
    pub const DEFAULT_PAGE_SIZE: usize = 4;

    /// Create a new suggestion list with nothing highlighted
    pub fn new(words: Vec<String>) -> Self {
        Self::with_page_size(words, Self::DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(words: Vec<String>, page_size: usize) -> Self {
        Self {
            words,
            cursor: None,
            page_size: page_size.max(1),
        }
    }

    /// Get all words
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the highlighted index, if any
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Get the current page number (0-indexed)
    pub fn current_page(&self) -> usize {
        self.cursor.unwrap_or(0) / self.page_size
    }

    /// Get the total number of pages
    pub fn total_pages(&self) -> usize {
        self.words.len().div_ceil(self.page_size)
    }

    /// Get the start index of the current page
    pub fn page_start(&self) -> usize {
        self.current_page() * self.page_size
    }

    /// Get the words on the current page
    pub fn page_words(&self) -> &[String] {
        let start = self.page_start().min(self.words.len());
        let end = (start + self.page_size).min(self.words.len());
        &self.words[start..end]
    }

    /// Get the highlighted word
    pub fn highlighted(&self) -> Option<&str> {
        self.cursor
            .and_then(|i| self.words.get(i))
            .map(String::as_str)
    }

    /// Highlight the next word, wrapping to the first.
    /// With nothing highlighted, highlights the first word.
    pub fn move_next(&mut self) -> bool {
        if self.words.is_empty() {
            return false;
        }
        self.cursor = Some(match self.cursor {
            Some(i) if i + 1 < self.words.len() => i + 1,
            _ => 0,
        });
        true
    }

    /// Highlight the previous word, wrapping to the last.
    /// With nothing highlighted, highlights the last word.
    pub fn move_prev(&mut self) -> bool {
        if self.words.is_empty() {
            return false;
        }
        self.cursor = Some(match self.cursor {
            Some(i) if i > 0 => i - 1,
            _ => self.words.len() - 1,
        });
        true
    }

    /// Highlight the first word of the next page, wrapping to the first page
    pub fn next_page(&mut self) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let next_page_start = match self.cursor {
            Some(_) => self.page_start() + self.page_size,
            None => 0,
        };
        self.cursor = Some(if next_page_start < self.words.len() {
            next_page_start
        } else {
            0
        });
        true
    }

    /// Highlight the first word of the previous page, wrapping to the last page
    pub fn prev_page(&mut self) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let current_page = self.current_page();
        self.cursor = Some(if self.cursor.is_some() && current_page > 0 {
            (current_page - 1) * self.page_size
        } else {
            self.total_pages().saturating_sub(1) * self.page_size
        });
        true
    }

    /// Highlight a word by absolute index
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index < self.words.len() {
            self.cursor = Some(index);
            self.highlighted()
        } else {
            None
        }
    }

    /// Highlight a word by value
    pub fn select_word(&mut self, word: &str) -> Option<&str> {
        let index = self.words.iter().position(|w| w == word)?;
        self.select(index)
    }

    /// Remove the highlight
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    /// Drop all words and the highlight
    pub fn clear(&mut self) {
        self.words.clear();
        self.cursor = None;
    }
}

impl Default for SuggestionList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
