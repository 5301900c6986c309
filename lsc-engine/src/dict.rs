//! Word list used for completion suggestions.
//!
//! The source format is plain text with one word per line. Lines are trimmed,
//! blank lines are skipped and every word is NFC-normalized so that a
//! decomposed `n + U+0303` in the file matches the keyboard's `ñ`. Duplicate
//! words keep their first position.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

/// Errors that can occur while loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

type Result<T> = std::result::Result<T, DictError>;

/// An immutable, ordered list of distinct words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Create an empty word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a word list from already-split words.
    pub fn from_words(words: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut seen = HashSet::new();
        let mut list = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let word: String = word.nfc().collect();
            if seen.insert(word.clone()) {
                list.push(word);
            }
        }
        Self { words: list }
    }

    /// Read a newline-delimited word list.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let lines = BufReader::new(reader)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        Ok(Self::from_words(lines))
    }

    /// Load a newline-delimited word list from a UTF-8 file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let list = Self::from_reader(file)?;
        debug!("Loaded {} words from {:?}", list.len(), path.as_ref());
        Ok(list)
    }

    /// Load a word list, falling back to an empty list on failure.
    ///
    /// A missing or unreadable file only disables suggestions, it never stops
    /// the keyboard.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(list) => list,
            Err(e) => {
                warn!("Failed to load word list {:?}: {}", path.as_ref(), e);
                Self::new()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in source order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words starting with `prefix`, in source order.
    ///
    /// Matching is case-sensitive. An empty prefix matches every word.
    pub fn prefix_matches<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.words
            .iter()
            .map(String::as_str)
            .filter(move |word| word.starts_with(prefix))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
