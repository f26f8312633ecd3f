//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Press and
//! repeat events both produce actions, so holding a key auto-repeats at the
//! terminal's rate; release events are ignored.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
