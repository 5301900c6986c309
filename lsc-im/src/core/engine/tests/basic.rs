use super::*;

#[test]
fn test_letters_append_in_order() {
    let mut engine = make_plain_engine();
    type_keys(&mut engine, "hola");
    assert_eq!(engine.text(), "hola");
}

#[test]
fn test_activate_returns_new_text() {
    let mut engine = make_plain_engine();
    let result = engine.activate(key("a"));
    assert!(result.consumed);
    assert_eq!(result.actions, [EngineAction::UpdateText("a".to_string())]);
}

#[test]
fn test_digits_and_enye() {
    let mut engine = make_plain_engine();
    type_keys(&mut engine, "niño 2024");
    assert_eq!(engine.text(), "niño 2024");
}

#[test]
fn test_enter_space_letter_order() {
    let mut engine = make_plain_engine();
    engine.activate(KeyId::Enter);
    engine.activate(KeyId::Space);
    engine.activate(key("a"));
    assert_eq!(engine.text(), "\n a");
}

#[test]
fn test_activate_backspace_is_noop() {
    let mut engine = make_plain_engine();
    type_keys(&mut engine, "ab");

    let result = engine.activate(KeyId::Backspace);
    assert!(!result.consumed);
    assert!(result.actions.is_empty());
    assert_eq!(engine.text(), "ab");
}

#[test]
fn test_process_key_dispatch() {
    let mut engine = make_plain_engine();
    engine.process_key(&KeyEvent::activate(key("x")));
    assert_eq!(engine.text(), "x");

    engine.process_key(&KeyEvent::press(KeyId::Backspace));
    assert!(engine.is_repeating());
    assert_eq!(engine.text(), "");

    engine.process_key(&KeyEvent::release(KeyId::Backspace));
    assert!(!engine.is_repeating());
}

#[test]
fn test_letter_click_sequence() {
    // A toolkit click on a letter reports press, release and then the command
    let mut engine = make_plain_engine();
    for event in KeyEvent::click(key("s")) {
        engine.process_key(&event);
    }
    assert_eq!(engine.text(), "s");
    assert!(!engine.is_repeating());
}

#[test]
fn test_reset() {
    let mut engine = make_suggesting_engine(&["hola"]);
    engine.activate(KeyId::CapsLock);
    type_keys(&mut engine, "h");
    engine.press_started(KeyId::Backspace);

    engine.reset();
    assert_eq!(engine.text(), "");
    assert!(!engine.caps_lock());
    assert!(!engine.is_repeating());
    assert!(engine.suggestions().is_empty());
}

#[test]
fn test_engine_config_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.repeat_interval, std::time::Duration::from_millis(120));
    assert!(config.suggestions_enabled);
    assert!(config.match_empty_token);
    assert_eq!(config.page_size, 4);
}

#[test]
fn test_from_default_settings_without_word_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = crate::config::Settings::default();
    settings.suggestions.dictionary = dir.path().join("missing.txt").to_string_lossy().into_owned();

    let engine = KeyboardEngine::from_settings(&settings).unwrap();
    assert!(engine.words().is_empty());
    assert_eq!(engine.config().repeat_interval, settings.repeat_interval());
}

#[test]
fn test_from_settings_loads_word_list() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "mundo\nmuro\ncasa").unwrap();

    let mut settings = crate::config::Settings::default();
    settings.suggestions.dictionary = path.to_string_lossy().into_owned();

    let mut engine = KeyboardEngine::from_settings(&settings).unwrap();
    assert_eq!(engine.words().len(), 3);

    type_keys(&mut engine, "mu");
    assert_eq!(engine.suggestions().words(), ["mundo", "muro"]);
}
