//! Held-key repeat (press-and-hold backspace)
//!
//! Idle -> Repeating on press-started; Repeating -> Idle on release. The
//! engine never owns a timer: every action that arms one returns
//! `ScheduleRepeat`, and the UI calls `repeat_tick` when it fires. A tick
//! whose session is no longer active is dropped, so releasing the key is
//! enough to stop the repeat without cancelling the pending timer.

use tracing::{debug, trace};

use super::*;

impl KeyboardEngine {
    /// Handle a press-started event.
    ///
    /// For a repeatable key this deletes one character immediately and arms
    /// the repeat timer. Other keys, and a second press while a hold is
    /// already active, are ignored.
    pub fn press_started(&mut self, key: KeyId) -> EngineResult {
        if !key.is_repeatable() {
            return EngineResult::not_consumed();
        }
        if let Some(active) = self.repeat.session() {
            trace!("Ignoring press of {} during hold {}", key, active.id());
            return EngineResult::not_consumed();
        }

        self.next_session_id += 1;
        let session = RepeatSession::new(self.next_session_id, key);
        self.repeat = RepeatState::Repeating { session };
        debug!("Repeat started: key={} session={}", key, session.id());

        self.repeat_action(session)
    }

    /// Handle a released event. Ends the hold of a repeatable key.
    pub fn released(&mut self, key: KeyId) -> EngineResult {
        match self.repeat.session() {
            Some(session) if session.key() == key => {
                self.repeat = RepeatState::Idle;
                debug!("Repeat stopped: key={} session={}", key, session.id());
                EngineResult::consumed()
            }
            _ => EngineResult::not_consumed(),
        }
    }

    /// Handle a repeat timer firing for `session`.
    ///
    /// Acts and re-arms only while `session` is still held; otherwise the tick
    /// is stale and nothing happens.
    pub fn repeat_tick(&mut self, session: RepeatSession) -> EngineResult {
        if !self.repeat.accepts(session) {
            trace!("Dropping stale repeat tick for session {}", session.id());
            return EngineResult::not_consumed();
        }
        self.repeat_action(session)
    }

    /// Perform the held key's action once and arm the next tick.
    fn repeat_action(&mut self, session: RepeatSession) -> EngineResult {
        let mut result = EngineResult::consumed();
        match session.key() {
            KeyId::Backspace => {
                if self.buffer.pop().is_some() {
                    result = result.with_actions(self.text_changed());
                }
            }
            other => trace!("Key {} has no repeat action", other),
        }
        result.with_action(EngineAction::ScheduleRepeat {
            session,
            after: self.config.repeat_interval,
        })
    }
}
