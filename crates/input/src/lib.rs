//! Input source module.
//!
//! Turns host key presses into [`crate::types::InputEvent`]s and collects them
//! into a bounded per-tick batch. Switch scanning and debouncing belong to the
//! host; everything here receives presses that already happened.

pub mod batch;
pub mod map;

pub use mono_tetris_types as types;

pub use batch::{TickInput, MAX_EVENTS_PER_TICK};
pub use map::map_key_number;
#[cfg(feature = "terminal")]
pub use map::{handle_key_event, is_restart, should_quit};
