//! Key activation handling (typing and caps-lock)

use tracing::debug;

use super::*;

impl KeyboardEngine {
    /// Handle a key activation (click).
    ///
    /// Letters and digits append their character, upper-cased while caps-lock
    /// is active. Space and enter append `' '` and `'\n'`. Caps-lock flips its
    /// flag without touching the text. Backspace does nothing here: deletion
    /// only happens through the press-and-hold path.
    pub fn activate(&mut self, key: KeyId) -> EngineResult {
        match key {
            KeyId::CapsLock => self.toggle_caps_lock(),
            KeyId::Backspace => EngineResult::not_consumed(),
            KeyId::Space | KeyId::Enter => {
                if let Some(ch) = key.typed_char() {
                    self.buffer.push(ch);
                }
                EngineResult::consumed().with_actions(self.text_changed())
            }
            KeyId::Letter(ch) | KeyId::Digit(ch) => {
                if self.caps_lock {
                    ch.to_uppercase().for_each(|c| self.buffer.push(c));
                } else {
                    self.buffer.push(ch);
                }
                EngineResult::consumed().with_actions(self.text_changed())
            }
        }
    }

    /// Flip caps-lock and tell the UI to restyle the key.
    fn toggle_caps_lock(&mut self) -> EngineResult {
        self.caps_lock = !self.caps_lock;
        debug!("Caps-lock toggled: {}", if self.caps_lock { "ON" } else { "OFF" });
        EngineResult::consumed().with_action(EngineAction::UpdateCapsLock(self.caps_lock))
    }
}
