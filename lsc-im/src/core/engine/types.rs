//! Type definitions for the keyboard engine

use std::time::Duration;

use crate::config::settings::Settings;

use super::super::candidate::SuggestionList;
use super::super::state::RepeatSession;

/// Action to be performed by the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineAction {
    /// The text buffer now holds this text
    UpdateText(String),
    /// Caps-lock changed; restyle the caps-lock key (pressed when `true`)
    UpdateCapsLock(bool),
    /// Show the suggestion box with these suggestions
    ShowSuggestions(SuggestionList),
    /// Empty the suggestion box
    HideSuggestions,
    /// Call `repeat_tick(session)` after `after` has elapsed
    ScheduleRepeat {
        session: RepeatSession,
        after: Duration,
    },
}

/// Result of processing an event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineResult {
    /// Whether the event was acted on (false for ignored events and no-ops)
    pub consumed: bool,
    /// Actions to perform
    pub actions: Vec<EngineAction>,
}

impl EngineResult {
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            actions: Vec::new(),
        }
    }

    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: EngineAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = EngineAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// The text of the last `UpdateText` action, if any
    pub fn updated_text(&self) -> Option<&str> {
        self.actions.iter().rev().find_map(|a| match a {
            EngineAction::UpdateText(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// The session and delay of the `ScheduleRepeat` action, if any
    pub fn scheduled_repeat(&self) -> Option<(RepeatSession, Duration)> {
        self.actions.iter().find_map(|a| match a {
            EngineAction::ScheduleRepeat { session, after } => Some((*session, *after)),
            _ => None,
        })
    }
}

/// Configuration for the keyboard engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Delay between repeated deletions while backspace is held
    pub repeat_interval: Duration,
    /// Whether word completion is active
    pub suggestions_enabled: bool,
    /// Whether an empty current word matches every dictionary word
    pub match_empty_token: bool,
    /// Number of suggestions visible at once
    pub page_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            repeat_interval: Duration::from_millis(120),
            suggestions_enabled: true,
            match_empty_token: true,
            page_size: SuggestionList::DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<&Settings> for EngineConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            repeat_interval: settings.repeat_interval(),
            suggestions_enabled: settings.suggestions.enabled,
            match_empty_token: settings.suggestions.match_empty_token,
            page_size: settings.suggestions.page_size,
        }
    }
}
