//! Mono Tetris (workspace facade crate).
//!
//! This package exposes `mono_tetris::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the host
//! glue used by the terminal binary.

pub mod config;
pub mod logging;

pub use mono_tetris_core as core;
pub use mono_tetris_engine as engine;
pub use mono_tetris_input as input;
pub use mono_tetris_term as term;
pub use mono_tetris_types as types;
