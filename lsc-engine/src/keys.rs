//! Key identifiers for the on-screen keyboard
//!
//! The keyboard has a closed set of keys: letters, digits and four control
//! keys. Layout files name keys with the same identifiers used for their image
//! assets (`"a"`, `"ñ"`, `"7"`, `"space"`, `"capslock"`, ...). Parsing is the
//! only way to turn a name into a [`KeyId`], so an unknown name is rejected
//! when the layout is loaded and never reaches the input engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors produced when parsing a key identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("empty key identifier")]
    Empty,

    #[error("unknown key identifier: '{0}'")]
    Unknown(String),
}

/// A logical key on the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyId {
    /// A lowercase letter key (`a`-`z` or `ñ`)
    Letter(char),
    /// A digit key (`0`-`9`)
    Digit(char),
    Space,
    Enter,
    Backspace,
    CapsLock,
}

/// Rendering size class of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Letters and digits
    Normal,
    /// The space bar
    WideSpace,
    /// Enter, backspace and caps-lock
    Special,
}

impl SizeClass {
    /// Image size in pixels as `(width, height)`.
    pub fn pixel_size(self) -> (u32, u32) {
        match self {
            SizeClass::Normal => (50, 50),
            SizeClass::WideSpace => (360, 50),
            SizeClass::Special => (80, 50),
        }
    }
}

impl KeyId {
    /// Build a key from the character it types.
    ///
    /// Returns `None` for characters that have no key (uppercase letters,
    /// accented letters, punctuation, whitespace).
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(KeyId::Digit(ch)),
            'a'..='z' | 'ñ' => Some(KeyId::Letter(ch)),
            _ => None,
        }
    }

    /// The character this key types, before caps-lock is applied.
    ///
    /// Control keys other than space and enter type nothing.
    pub fn typed_char(self) -> Option<char> {
        match self {
            KeyId::Letter(ch) | KeyId::Digit(ch) => Some(ch),
            KeyId::Space => Some(' '),
            KeyId::Enter => Some('\n'),
            KeyId::Backspace | KeyId::CapsLock => None,
        }
    }

    pub fn size_class(self) -> SizeClass {
        match self {
            KeyId::Letter(_) | KeyId::Digit(_) => SizeClass::Normal,
            KeyId::Space => SizeClass::WideSpace,
            KeyId::Enter | KeyId::Backspace | KeyId::CapsLock => SizeClass::Special,
        }
    }

    /// Whether holding this key repeats its action.
    pub fn is_repeatable(self) -> bool {
        self == KeyId::Backspace
    }

    /// Stem of the image asset for this key (`imagenes/{stem}.jpg`).
    pub fn asset_name(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyId::Letter(ch) | KeyId::Digit(ch) => write!(f, "{}", ch),
            KeyId::Space => f.write_str("space"),
            KeyId::Enter => f.write_str("enter"),
            KeyId::Backspace => f.write_str("backspace"),
            KeyId::CapsLock => f.write_str("capslock"),
        }
    }
}

impl FromStr for KeyId {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(KeyError::Empty),
            "space" => Ok(KeyId::Space),
            "enter" => Ok(KeyId::Enter),
            "backspace" => Ok(KeyId::Backspace),
            "capslock" => Ok(KeyId::CapsLock),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => {
                        KeyId::from_char(ch).ok_or_else(|| KeyError::Unknown(s.to_string()))
                    }
                    _ => Err(KeyError::Unknown(s.to_string())),
                }
            }
        }
    }
}

impl TryFrom<String> for KeyId {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyId> for String {
    fn from(key: KeyId) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!("space".parse::<KeyId>(), Ok(KeyId::Space));
        assert_eq!("enter".parse::<KeyId>(), Ok(KeyId::Enter));
        assert_eq!("backspace".parse::<KeyId>(), Ok(KeyId::Backspace));
        assert_eq!("capslock".parse::<KeyId>(), Ok(KeyId::CapsLock));
    }

    #[test]
    fn test_parse_characters() {
        assert_eq!("q".parse::<KeyId>(), Ok(KeyId::Letter('q')));
        assert_eq!("ñ".parse::<KeyId>(), Ok(KeyId::Letter('ñ')));
        assert_eq!("7".parse::<KeyId>(), Ok(KeyId::Digit('7')));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!("".parse::<KeyId>(), Err(KeyError::Empty));
        assert_eq!(
            "tab".parse::<KeyId>(),
            Err(KeyError::Unknown("tab".to_string()))
        );
        // Uppercase is produced by caps-lock, there is no uppercase key
        assert!("Q".parse::<KeyId>().is_err());
        assert!("?".parse::<KeyId>().is_err());
        assert!("ab".parse::<KeyId>().is_err());
    }

    #[test]
    fn test_letters_outside_the_keyboard_have_no_key() {
        assert_eq!(KeyId::from_char('ñ'), Some(KeyId::Letter('ñ')));
        assert_eq!(KeyId::from_char('z'), Some(KeyId::Letter('z')));
        for ch in ['é', 'ß', 'ж', 'Ñ', '٣'] {
            assert_eq!(KeyId::from_char(ch), None, "{:?}", ch);
        }
        assert!("é".parse::<KeyId>().is_err());
    }

    #[test]
    fn test_display_matches_asset_name() {
        for name in ["a", "ñ", "0", "space", "enter", "backspace", "capslock"] {
            let key: KeyId = name.parse().unwrap();
            assert_eq!(key.asset_name(), name);
        }
    }

    #[test]
    fn test_size_classes() {
        assert_eq!(KeyId::Letter('a').size_class(), SizeClass::Normal);
        assert_eq!(KeyId::Digit('1').size_class(), SizeClass::Normal);
        assert_eq!(KeyId::Space.size_class(), SizeClass::WideSpace);
        assert_eq!(KeyId::Enter.size_class(), SizeClass::Special);
        assert_eq!(KeyId::Backspace.size_class(), SizeClass::Special);
        assert_eq!(KeyId::CapsLock.size_class(), SizeClass::Special);
        assert_eq!(SizeClass::WideSpace.pixel_size(), (360, 50));
        assert_eq!(SizeClass::Special.pixel_size(), (80, 50));
    }

    #[test]
    fn test_typed_char() {
        assert_eq!(KeyId::Letter('m').typed_char(), Some('m'));
        assert_eq!(KeyId::Space.typed_char(), Some(' '));
        assert_eq!(KeyId::Enter.typed_char(), Some('\n'));
        assert_eq!(KeyId::Backspace.typed_char(), None);
        assert_eq!(KeyId::CapsLock.typed_char(), None);
    }

    #[test]
    fn test_only_backspace_repeats() {
        assert!(KeyId::Backspace.is_repeatable());
        assert!(!KeyId::Space.is_repeatable());
        assert!(!KeyId::Letter('a').is_repeatable());
    }
}
