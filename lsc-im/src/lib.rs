//! lsc-im: input state machine for the LSC on-screen keyboard
//!
//! This crate turns clicks on the image keys of a Colombian Sign Language
//! keyboard into composed text. It owns the text buffer and caps-lock state,
//! repeats backspace while it is held and offers word completions from a word
//! list. Rendering is left to the UI layer, which feeds events in and applies
//! the returned [`EngineAction`]s.

pub mod config;
pub mod core;

pub use crate::core::candidate::SuggestionList;
pub use crate::core::engine::{EngineAction, EngineConfig, EngineResult, KeyboardEngine};
pub use crate::core::event::{KeyAction, KeyEvent};
pub use crate::core::layout::Layout;
pub use crate::core::state::{RepeatSession, RepeatState};
pub use lsc_engine::KeyId;
