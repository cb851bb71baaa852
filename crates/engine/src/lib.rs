//! Host-facing engine.
//!
//! Wraps the controller and the board view behind the three calls a device
//! scheduler needs: [`Engine::reset`], [`Engine::tick`] and
//! [`Engine::current_frame`]. The engine owns no clock and no display; the
//! host passes elapsed time in and pushes frames out.
//!
//! ```
//! use mono_tetris_engine::Engine;
//! use mono_tetris_engine::types::InputEvent;
//!
//! let mut engine = Engine::new(7);
//! engine.tick(&[InputEvent::HardDrop], 16);
//!
//! let frame = engine.current_frame();
//! assert_eq!(frame.pixels.width(), 128);
//! assert!(!frame.is_over);
//! ```

use log::debug;

pub use mono_tetris_core as core;
pub use mono_tetris_term::{BoardView, MonoFrameBuffer};
pub use mono_tetris_types as types;

use crate::core::{ConfigError, GameConfig, GameState, RandomSource, ShapeCatalog, SimpleRng};
use crate::types::InputEvent;

/// One rendered frame plus the status a display sink shows beside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub pixels: MonoFrameBuffer,
    pub score: u32,
    pub is_over: bool,
}

/// Game controller plus renderer, driven once per host tick.
#[derive(Debug, Clone)]
pub struct Engine<R: RandomSource = SimpleRng> {
    game: GameState<R>,
    view: BoardView,
    piece_visible: bool,
}

impl Engine<SimpleRng> {
    /// Default board, standard shapes, default display geometry.
    pub fn new(seed: u32) -> Self {
        Self::from_game(GameState::new(seed), BoardView::default())
    }
}

impl<R: RandomSource> Engine<R> {
    pub fn with_config(
        config: GameConfig,
        catalog: ShapeCatalog,
        rng: R,
        view: BoardView,
    ) -> Result<Self, ConfigError> {
        let game = GameState::with_config(config, catalog, rng)?;
        Ok(Self::from_game(game, view))
    }

    pub fn from_game(game: GameState<R>, view: BoardView) -> Self {
        Self {
            game,
            view,
            piece_visible: true,
        }
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    /// Show or hide the active piece in rendered frames (e.g. to blink it).
    pub fn set_piece_visible(&mut self, visible: bool) {
        self.piece_visible = visible;
    }

    pub fn piece_visible(&self) -> bool {
        self.piece_visible
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Reinitialize to a fresh game.
    pub fn reset(&mut self) {
        debug!("engine reset after score {}", self.game.score());
        self.game.reset();
        self.piece_visible = true;
    }

    /// Apply `events` in order, then advance gravity by `elapsed_ms`.
    pub fn tick(&mut self, events: &[InputEvent], elapsed_ms: u32) {
        self.game.tick(events, elapsed_ms);
    }

    /// Render the current state into a caller-owned buffer.
    ///
    /// This is the allocation-free path for hosts that reuse one buffer.
    pub fn render_into(&self, fb: &mut MonoFrameBuffer) {
        self.view.render_into(
            self.game.board(),
            Some(self.game.active()),
            self.piece_visible,
            fb,
        );
    }

    /// Read-only snapshot for the display sink.
    pub fn current_frame(&self) -> Frame {
        let mut pixels = MonoFrameBuffer::default();
        self.render_into(&mut pixels);
        Frame {
            pixels,
            score: self.game.score(),
            is_over: self.game.is_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_shows_spawned_piece() {
        let engine = Engine::new(1);
        let frame = engine.current_frame();
        // Every standard shape has four cells of 3x3 pixels, all on screen at spawn.
        assert_eq!(frame.pixels.count_on(), 4 * 9);
        assert_eq!(frame.score, 0);
    }

    #[test]
    fn test_hidden_piece_leaves_empty_frame() {
        let mut engine = Engine::new(1);
        engine.set_piece_visible(false);
        assert_eq!(engine.current_frame().pixels.count_on(), 0);
        engine.reset();
        assert!(engine.piece_visible());
    }
}
