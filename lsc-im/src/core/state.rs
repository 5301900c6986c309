//! Held-key repeat state machine
//!
//! Defines the states of the repeat controller and transitions between them.

use lsc_engine::KeyId;

/// Identifies one press-and-hold of a repeatable key.
///
/// Every press starts a new session; a timer tick carries the session it was
/// armed for, so ticks armed before a release never act on a later hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepeatSession {
    id: u64,
    key: KeyId,
}

impl RepeatSession {
    pub(crate) fn new(id: u64, key: KeyId) -> Self {
        Self { id, key }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// The key being held
    pub fn key(&self) -> KeyId {
        self.key
    }
}

/// The current state of the repeat controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepeatState {
    /// No key held
    #[default]
    Idle,

    /// A repeatable key is held and its action fires on every tick
    Repeating {
        /// The active hold
        session: RepeatSession,
    },
}

impl RepeatState {
    /// Check if the controller is idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get the active session if any
    pub fn session(&self) -> Option<RepeatSession> {
        match self {
            Self::Idle => None,
            Self::Repeating { session } => Some(*session),
        }
    }

    /// Whether a tick armed for `session` should still act
    pub fn accepts(&self, session: RepeatSession) -> bool {
        self.session() == Some(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_accepts_nothing() {
        let state = RepeatState::Idle;
        assert!(state.is_idle());
        assert!(!state.accepts(RepeatSession::new(1, KeyId::Backspace)));
    }

    #[test]
    fn test_repeating_accepts_only_its_session() {
        let session = RepeatSession::new(2, KeyId::Backspace);
        let state = RepeatState::Repeating { session };
        assert!(!state.is_idle());
        assert!(state.accepts(session));
        assert!(!state.accepts(RepeatSession::new(1, KeyId::Backspace)));
    }
}
