//! Terminal input module.
//!
//! This module is intentionally independent of the game rules. It maps
//! `crossterm` key events into [`crate::types::GameAction`]; the world never
//! sees terminal types.

pub mod map;

pub use goblin_types as types;

pub use map::{handle_key_event, should_quit};
