use super::*;

#[test]
fn test_caps_lock_uppercases_letters() {
    let mut engine = make_plain_engine();
    engine.activate(KeyId::CapsLock);
    type_keys(&mut engine, "hola");
    assert_eq!(engine.text(), "HOLA");
}

#[test]
fn test_caps_lock_is_per_keystroke() {
    let mut engine = make_plain_engine();
    type_keys(&mut engine, "ab");
    engine.activate(KeyId::CapsLock);
    type_keys(&mut engine, "cñ");
    engine.activate(KeyId::CapsLock);
    type_keys(&mut engine, "d");
    assert_eq!(engine.text(), "abCÑd");
}

#[test]
fn test_caps_lock_leaves_digits_and_controls() {
    let mut engine = make_plain_engine();
    engine.activate(KeyId::CapsLock);
    type_keys(&mut engine, "1 \n");
    assert_eq!(engine.text(), "1 \n");
}

#[test]
fn test_caps_lock_toggle_reports_state() {
    let mut engine = make_plain_engine();

    let result = engine.activate(KeyId::CapsLock);
    assert!(result.consumed);
    assert_eq!(result.actions, [EngineAction::UpdateCapsLock(true)]);
    assert!(engine.caps_lock());

    let result = engine.activate(KeyId::CapsLock);
    assert_eq!(result.actions, [EngineAction::UpdateCapsLock(false)]);
    assert!(!engine.caps_lock());
}

#[test]
fn test_double_toggle_keeps_text() {
    let mut engine = make_suggesting_engine(&["hola"]);
    type_keys(&mut engine, "ho");
    let suggestions = engine.suggestions().clone();

    engine.activate(KeyId::CapsLock);
    engine.activate(KeyId::CapsLock);
    assert_eq!(engine.text(), "ho");
    assert!(!engine.caps_lock());
    assert_eq!(engine.suggestions(), &suggestions);
}
