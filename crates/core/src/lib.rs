//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on display hardware, input scanning, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Randomness is injected through [`rng::RandomSource`]
//! - **Portable**: Runs on a microcontroller host, in a terminal, or headless
//! - **Bounded**: Every call does a small, fixed amount of work
//!
//! # Module Structure
//!
//! - [`shapes`]: Immutable shape matrices and the shape catalog
//! - [`board`]: Fixed-size occupancy grid with row clearing
//! - [`piece`]: The active piece (shape plus board origin)
//! - [`collision`]: Pure legality checks and rotation
//! - [`game_state`]: The controller owning board, piece, score and game-over state
//! - [`rng`]: Injected random sources (seeded LCG, scripted sequence)
//! - [`scoring`]: Flat per-row line clear scoring
//!
//! # Game Rules
//!
//! - **Uniform spawns**: each shape is drawn independently with equal probability
//! - **No wall kicks**: a rotation that collides is rejected outright
//! - **Immediate lock**: a blocked downward move locks the piece at once
//! - **Scoring**: 10 points per cleared row
//!
//! # Example
//!
//! ```
//! use mono_tetris_core::GameState;
//! use mono_tetris_types::InputEvent;
//!
//! let mut game = GameState::new(12345);
//!
//! game.tick(&[InputEvent::Left, InputEvent::Rotate], 16);
//! game.tick(&[InputEvent::HardDrop], 16);
//!
//! assert_eq!(game.pieces_spawned(), 2);
//! assert!(!game.is_over());
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod error;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use mono_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{collides, rotate, try_rotate};
pub use config::GameConfig;
pub use error::{ConfigError, ShapeError};
pub use game_state::GameState;
pub use piece::ActivePiece;
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use scoring::line_clear_points;
pub use shapes::{standard_shape, Shape, ShapeCatalog, STANDARD_SHAPES};
pub use snapshot::GameSnapshot;
