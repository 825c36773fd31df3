//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into [`crate::types::GameAction`]s. The engine
//! never sees raw events: an [`InputSource`] turns them into discrete
//! [`InputEvent`]s and anything unmapped is dropped here.

pub mod map;
pub mod source;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{classify, CrosstermInput, InputEvent, InputSource};
