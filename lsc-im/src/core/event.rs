//! Input events reported by the UI layer

use lsc_engine::KeyId;

/// What happened to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// The key was clicked (button command)
    Activate,
    /// The pointer went down on the key
    PressStarted,
    /// The pointer was released from the key
    Released,
}

/// A key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key
    pub key: KeyId,
    /// What happened to it
    pub action: KeyAction,
}

impl KeyEvent {
    pub fn new(key: KeyId, action: KeyAction) -> Self {
        Self { key, action }
    }

    /// Create a key activation (click) event
    pub fn activate(key: KeyId) -> Self {
        Self::new(key, KeyAction::Activate)
    }

    /// Create a press-started event
    pub fn press(key: KeyId) -> Self {
        Self::new(key, KeyAction::PressStarted)
    }

    /// Create a released event
    pub fn release(key: KeyId) -> Self {
        Self::new(key, KeyAction::Released)
    }

    /// The sequence a toolkit button reports for one click:
    /// press-started, released, then the command callback.
    pub fn click(key: KeyId) -> [Self; 3] {
        [Self::press(key), Self::release(key), Self::activate(key)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_sequence() {
        let events = KeyEvent::click(KeyId::Letter('a'));
        assert_eq!(events[0].action, KeyAction::PressStarted);
        assert_eq!(events[1].action, KeyAction::Released);
        assert_eq!(events[2].action, KeyAction::Activate);
        assert!(events.iter().all(|e| e.key == KeyId::Letter('a')));
    }
}
