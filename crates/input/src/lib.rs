//! Terminal input module.
//!
//! Maps `crossterm` key events, press/repeat/release included, into
//! [`InputCommand`]s: session actions plus the runner's quit and new-game keys.
//! Terminals that never report releases simply never send `SoftDropRelease`.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, InputCommand};
