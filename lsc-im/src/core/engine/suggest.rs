//! Word completion: keeping suggestions in step with the text and applying a choice

use tracing::{debug, trace};

use super::*;

impl KeyboardEngine {
    /// Recompute suggestions for the current text.
    ///
    /// Returns the action updating the suggestion box, or nothing when
    /// completion is disabled.
    pub(super) fn refresh_suggestions(&mut self) -> Option<EngineAction> {
        if !self.config.suggestions_enabled {
            return None;
        }

        let token = lsc_engine::current_token(self.buffer.as_str());
        let words = if token.is_empty() && !self.config.match_empty_token {
            Vec::new()
        } else {
            lsc_engine::recompute(self.buffer.as_str(), &self.words)
        };
        trace!("Suggestions for {:?}: {} words", token, words.len());

        self.suggestions = SuggestionList::with_page_size(words, self.config.page_size);
        Some(self.suggestions_action())
    }

    fn suggestions_action(&self) -> EngineAction {
        if self.suggestions.is_empty() {
            EngineAction::HideSuggestions
        } else {
            EngineAction::ShowSuggestions(self.suggestions.clone())
        }
    }

    /// Move the highlight to the next suggestion
    pub fn highlight_next(&mut self) -> EngineResult {
        self.move_highlight(SuggestionList::move_next)
    }

    /// Move the highlight to the previous suggestion
    pub fn highlight_prev(&mut self) -> EngineResult {
        self.move_highlight(SuggestionList::move_prev)
    }

    /// Move the highlight to the next page of suggestions
    pub fn next_page(&mut self) -> EngineResult {
        self.move_highlight(SuggestionList::next_page)
    }

    /// Move the highlight to the previous page of suggestions
    pub fn prev_page(&mut self) -> EngineResult {
        self.move_highlight(SuggestionList::prev_page)
    }

    /// Highlight a suggestion by absolute index
    pub fn highlight(&mut self, index: usize) -> EngineResult {
        self.move_highlight(|list| list.select(index).is_some())
    }

    fn move_highlight(&mut self, op: impl FnOnce(&mut SuggestionList) -> bool) -> EngineResult {
        if !op(&mut self.suggestions) {
            return EngineResult::not_consumed();
        }
        EngineResult::consumed().with_action(self.suggestions_action())
    }

    /// Complete the current word with the highlighted suggestion.
    ///
    /// With nothing highlighted this is a no-op.
    pub fn choose_highlighted(&mut self) -> EngineResult {
        let Some(choice) = self.suggestions.highlighted().map(str::to_string) else {
            trace!("No suggestion highlighted, ignoring choice");
            return EngineResult::not_consumed();
        };
        self.apply_choice(&choice)
    }

    /// Complete the current word with `word`, which must be one of the
    /// current suggestions. Anything else is a no-op.
    pub fn choose_word(&mut self, word: &str) -> EngineResult {
        if self.suggestions.select_word(word).is_none() {
            trace!("{:?} is not a current suggestion, ignoring choice", word);
            return EngineResult::not_consumed();
        }
        self.apply_choice(word)
    }

    /// Splice the choice over the current word and end the suggestion session.
    fn apply_choice(&mut self, choice: &str) -> EngineResult {
        let text = lsc_engine::apply_selection(self.buffer.as_str(), choice);
        debug!("Completed word: {:?}", choice);
        self.buffer.replace(text);
        self.suggestions.clear();
        EngineResult::consumed()
            .with_action(EngineAction::UpdateText(self.buffer.as_str().to_string()))
            .with_action(EngineAction::HideSuggestions)
    }
}
