//! Engine initialization (settings, word list setup)

use anyhow::Result;
use tracing::{debug, info};

use super::*;
use crate::config::Settings;

impl KeyboardEngine {
    /// Create an engine from settings.
    ///
    /// Validates the settings and loads the word list when completion is
    /// enabled. A word list that cannot be read leaves completion with no
    /// words; it is not an error.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let mut engine = Self::with_config(EngineConfig::from(settings));
        if settings.suggestions.enabled {
            engine.init_word_list(&settings.dictionary_path());
        } else {
            debug!("Word completion disabled");
        }
        Ok(engine)
    }

    /// Load the word list from a newline-delimited file.
    ///
    /// If the file doesn't exist, the engine continues without words.
    pub fn init_word_list(&mut self, path: &std::path::Path) {
        let words = WordList::load_or_empty(path);
        info!("Word list: {} words from {:?}", words.len(), path);
        self.words = Arc::new(words);
    }

    /// Use an already-loaded word list (may be shared with other engines)
    pub fn set_word_list(&mut self, words: Arc<WordList>) {
        self.words = words;
    }

    /// Builder form of [`set_word_list`](Self::set_word_list)
    pub fn with_word_list(mut self, words: Arc<WordList>) -> Self {
        self.set_word_list(words);
        self
    }
}
