//! Keyboard engine - the text composition state machine
//!
//! This module contains the main `KeyboardEngine` struct that owns the text
//! buffer and caps-lock state, drives the held-key repeat controller and keeps
//! the completion suggestions in step with the text.

mod init;
mod input;
mod repeat;
mod suggest;
mod text_buffer;
mod types;

pub use types::*;

use text_buffer::TextBuffer;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use lsc_engine::{KeyId, WordList};
use tracing::trace;

use super::candidate::SuggestionList;
use super::event::{KeyAction, KeyEvent};
use super::state::{RepeatSession, RepeatState};

/// The keyboard engine
pub struct KeyboardEngine {
    /// Composed text
    buffer: TextBuffer,
    /// Caps-lock flag
    caps_lock: bool,
    /// Held-key repeat state
    repeat: RepeatState,
    /// Id for the next repeat session
    next_session_id: u64,
    /// Word list for completion (shared, read-only)
    words: Arc<WordList>,
    /// Current completion suggestions
    suggestions: SuggestionList,
    /// Engine configuration
    config: EngineConfig,
}

impl KeyboardEngine {
    /// Create a new engine with an empty word list
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            buffer: TextBuffer::new(),
            caps_lock: false,
            repeat: RepeatState::Idle,
            next_session_id: 0,
            words: Arc::new(WordList::new()),
            suggestions: SuggestionList::with_page_size(Vec::new(), config.page_size),
            config,
        }
    }

    /// Current composed text
    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    /// Whether caps-lock is active
    pub fn caps_lock(&self) -> bool {
        self.caps_lock
    }

    /// Current completion suggestions
    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    /// Get the held-key repeat state
    pub fn repeat_state(&self) -> RepeatState {
        self.repeat
    }

    /// Whether a held key is currently repeating
    pub fn is_repeating(&self) -> bool {
        !self.repeat.is_idle()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The word list used for completion
    pub fn words(&self) -> &Arc<WordList> {
        &self.words
    }

    /// Reset the engine: clear text, caps-lock, any held key and suggestions.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.caps_lock = false;
        self.repeat = RepeatState::Idle;
        self.suggestions.clear();
    }

    /// Process a key event reported by the UI layer
    pub fn process_key(&mut self, event: &KeyEvent) -> EngineResult {
        trace!(
            "Processing {:?} on key {} (repeat: {:?})",
            event.action, event.key, self.repeat
        );

        match event.action {
            KeyAction::Activate => self.activate(event.key),
            KeyAction::PressStarted => self.press_started(event.key),
            KeyAction::Released => self.released(event.key),
        }
    }

    /// Actions reporting the new text and the suggestions that follow from it.
    fn text_changed(&mut self) -> Vec<EngineAction> {
        let mut actions = vec![EngineAction::UpdateText(self.buffer.as_str().to_string())];
        actions.extend(self.refresh_suggestions());
        actions
    }
}

impl Default for KeyboardEngine {
    fn default() -> Self {
        Self::new()
    }
}
