//! Monochrome rendering module.
//!
//! Projects the board and active piece into a 1-bit pixel buffer sized for a
//! small OLED, and (with the `terminal` feature) flushes that buffer to a
//! terminal so the engine can be played without hardware.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the projection pure so it can be tested without a display
//! - Leave color values and bus handling to the display sink

pub mod fb;
pub mod game_view;
#[cfg(feature = "terminal")]
pub mod renderer;

pub use mono_tetris_core as core;
pub use mono_tetris_types as types;

pub use fb::MonoFrameBuffer;
pub use game_view::BoardView;
#[cfg(feature = "terminal")]
pub use renderer::{encode_full_into, HudStatus, TerminalRenderer};
