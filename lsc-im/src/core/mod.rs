//! Core keyboard functionality
//!
//! This module contains the core state machine and input processing logic.

pub mod candidate;
pub mod engine;
pub mod event;
pub mod layout;
pub mod state;
