//! Tests for the keyboard engine

use super::*;

mod basic;
mod caps_lock;

fn key(name: &str) -> KeyId {
    name.parse().unwrap()
}

/// Activate each key named in `keys`, one character per key; `' '` is space
/// and `'\n'` is enter.
fn type_keys(engine: &mut KeyboardEngine, keys: &str) {
    for ch in keys.chars() {
        let key = match ch {
            ' ' => KeyId::Space,
            '\n' => KeyId::Enter,
            other => KeyId::from_char(other).unwrap(),
        };
        engine.activate(key);
    }
}

fn words(list: &[&str]) -> Arc<WordList> {
    Arc::new(WordList::from_words(list))
}

fn make_suggesting_engine(list: &[&str]) -> KeyboardEngine {
    KeyboardEngine::new().with_word_list(words(list))
}

fn make_plain_engine() -> KeyboardEngine {
    KeyboardEngine::with_config(EngineConfig {
        suggestions_enabled: false,
        ..EngineConfig::default()
    })
}

/// Press backspace, then fire `ticks` repeat ticks while it is held.
fn hold_backspace(engine: &mut KeyboardEngine, ticks: usize) -> RepeatSession {
    let result = engine.press_started(KeyId::Backspace);
    let (session, _) = result.scheduled_repeat().unwrap();
    for _ in 0..ticks {
        engine.repeat_tick(session);
    }
    session
}
