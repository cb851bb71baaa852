//! Game state module - the controller
//!
//! Ties together board, shape catalog, active piece and scoring, and is the
//! only code that mutates them. It runs
//! `Spawning -> Falling -> Locking -> Clearing -> Spawning`, leaving the loop
//! for `GameOver` when a fresh piece collides on spawn.

use log::{debug, trace};

use crate::board::Board;
use crate::collision::{collides, try_rotate};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::piece::ActivePiece;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::line_clear_points;
use crate::shapes::{Shape, ShapeCatalog};
use crate::snapshot::GameSnapshot;
use crate::types::{GamePhase, InputEvent, LockEvent};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    config: GameConfig,
    catalog: ShapeCatalog,
    rng: R,
    board: Board,
    active: ActivePiece,
    phase: GamePhase,
    score: u32,
    rows_cleared: u32,
    pieces_spawned: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    gravity_timer_ms: u32,
    /// Last lock/line-clear event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new game on the default 10x8 board with the standard shapes
    pub fn new(seed: u32) -> Self {
        Self::build(
            GameConfig::default(),
            ShapeCatalog::standard(),
            SimpleRng::new(seed),
            None,
        )
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a game from an explicit configuration and random source.
    ///
    /// Fails on zero dimensions, zero gravity, or a catalog shape wider than
    /// the board.
    pub fn with_config(
        config: GameConfig,
        catalog: ShapeCatalog,
        rng: R,
    ) -> Result<Self, ConfigError> {
        Self::check(&config, &catalog)?;
        Ok(Self::build(config, catalog, rng, None))
    }

    /// Start a session on a pre-filled board.
    ///
    /// Board dimensions become the configured dimensions. If the first piece
    /// collides on spawn the session starts in `GameOver`.
    pub fn from_board(
        board: Board,
        catalog: ShapeCatalog,
        rng: R,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig {
            board_width: board.width(),
            board_height: board.height(),
            ..GameConfig::default()
        };
        Self::check(&config, &catalog)?;
        Ok(Self::build(config, catalog, rng, Some(board)))
    }

    fn check(config: &GameConfig, catalog: &ShapeCatalog) -> Result<(), ConfigError> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let shape_width = catalog.max_width();
        if shape_width > config.board_width {
            return Err(ConfigError::ShapeTooWide {
                shape_width,
                board_width: config.board_width,
            });
        }
        Ok(())
    }

    fn build(config: GameConfig, catalog: ShapeCatalog, rng: R, board: Option<Board>) -> Self {
        let board = board.unwrap_or_else(|| Board::new(config.board_width, config.board_height));
        // Placeholder until the first spawn below replaces it.
        let active = ActivePiece::spawn(catalog.all()[0], config.board_width);

        let mut state = Self {
            config,
            catalog,
            rng,
            board,
            active,
            phase: GamePhase::Spawning,
            score: 0,
            rows_cleared: 0,
            pieces_spawned: 0,
            episode_id: 0,
            gravity_timer_ms: 0,
            last_event: None,
        };
        state.spawn_piece();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn gravity_timer_ms(&self) -> u32 {
        self.gravity_timer_ms
    }

    /// Take and clear the last lock/line-clear event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active = self.active;
        out.phase = self.phase;
        out.score = self.score;
        out.rows_cleared = self.rows_cleared;
        out.pieces_spawned = self.pieces_spawned;
        out.episode_id = self.episode_id;
        out.game_over = self.is_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            active: self.active,
            phase: self.phase,
            score: self.score,
            rows_cleared: self.rows_cleared,
            pieces_spawned: self.pieces_spawned,
            episode_id: self.episode_id,
            game_over: self.is_over(),
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        trace!("phase {} -> {}", self.phase.as_str(), phase.as_str());
        self.phase = phase;
    }

    /// Start a fresh round: empty board, zero score, new piece.
    ///
    /// This is the only way out of `GameOver`.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.rows_cleared = 0;
        self.pieces_spawned = 0;
        self.gravity_timer_ms = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!("reset, episode {}", self.episode_id);

        self.set_phase(GamePhase::Spawning);
        self.spawn_piece();
    }

    /// Check a candidate placement against the board.
    ///
    /// `shape` defaults to the active piece's shape when `None`.
    pub fn collides_with(&self, shape: Option<&Shape>, row: i16, col: i16) -> bool {
        let shape = shape.unwrap_or(&self.active.shape);
        collides(&self.board, shape, row, col)
    }

    /// Draw a random shape and place it centered on row 0.
    ///
    /// Returns false, and ends the round, if it collides immediately.
    /// Does nothing once the round is over.
    pub fn spawn_piece(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.set_phase(GamePhase::Spawning);

        let shape = self.catalog.random_shape(&mut self.rng);
        self.active = ActivePiece::spawn(shape, self.board.width());
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if self.active.collides(&self.board) {
            debug!(
                "spawn blocked at col {}, game over with score {}",
                self.active.col, self.score
            );
            self.set_phase(GamePhase::GameOver);
            return false;
        }

        self.set_phase(GamePhase::Falling);
        true
    }

    /// Try to move the active piece by (dx, dy) cells.
    ///
    /// A blocked downward move locks the piece in place and spawns the next
    /// one. A blocked sideways move changes nothing. Returns whether the
    /// piece moved.
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        if self.phase != GamePhase::Falling {
            return false;
        }

        let moved = self.active.shifted(dy, dx);
        if !moved.collides(&self.board) {
            self.active = moved;
            return true;
        }

        if dy > 0 {
            self.lock_piece();
        }
        false
    }

    /// Rotate the active piece clockwise in place. No kicks are attempted.
    pub fn try_rotate(&mut self) -> bool {
        if self.phase != GamePhase::Falling {
            return false;
        }

        let active = self.active;
        match try_rotate(&self.board, &active.shape, active.row, active.col) {
            Some(rotated) => {
                self.active = active.with_shape(rotated);
                true
            }
            None => false,
        }
    }

    /// Move down until blocked; the blocked move locks the piece.
    ///
    /// Returns the number of rows dropped. Bounded by the board height.
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }
        rows
    }

    /// Lock the active piece onto the board, clear rows, and respawn
    fn lock_piece(&mut self) {
        self.set_phase(GamePhase::Locking);
        let active = self.active;
        self.board.lock(&active.shape, active.row, active.col);

        self.set_phase(GamePhase::Clearing);
        let rows = self.board.clear_full_rows();
        let points = line_clear_points(rows);
        self.score = self.score.saturating_add(points);
        self.rows_cleared = self.rows_cleared.saturating_add(rows as u32);
        debug!(
            "locked at row {} col {}, {} rows cleared, score {}",
            active.row, active.col, rows, self.score
        );

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            rows_cleared: rows as u32,
            points,
            topped_out: !spawned,
        });
    }

    /// Apply one input event. Returns whether it changed the piece or board.
    pub fn apply_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Left => self.try_move(-1, 0),
            InputEvent::Right => self.try_move(1, 0),
            InputEvent::SoftDrop => {
                let before = self.pieces_spawned;
                self.try_move(0, 1) || self.pieces_spawned != before
            }
            InputEvent::Rotate => self.try_rotate(),
            InputEvent::HardDrop => {
                let before = self.pieces_spawned;
                self.hard_drop();
                self.pieces_spawned != before
            }
        }
    }

    /// Main game tick: apply `events` in order, then advance gravity.
    ///
    /// Gravity time accumulates across ticks; once it reaches the configured
    /// interval one downward move is applied and the accumulator restarts
    /// from zero. Returns true when a gravity step was applied.
    pub fn tick(&mut self, events: &[InputEvent], elapsed_ms: u32) -> bool {
        if self.is_over() {
            return false;
        }

        for &event in events {
            self.apply_event(event);
        }

        if self.is_over() {
            return false;
        }

        // Fires once the accumulator reaches the interval, not only past it.
        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
        if self.gravity_timer_ms < self.config.gravity_interval_ms {
            return false;
        }

        self.gravity_timer_ms = 0;
        self.try_move(0, 1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;
    use crate::shapes::standard_shape;
    use crate::types::PieceKind;

    fn game_with(kinds: &[PieceKind]) -> GameState<SequenceRng> {
        let script: Vec<u32> = kinds.iter().map(|k| k.index() as u32).collect();
        GameState::with_config(
            GameConfig::default(),
            ShapeCatalog::standard(),
            SequenceRng::new(script),
        )
        .unwrap()
    }

    #[test]
    fn test_new_game_is_falling() {
        let state = GameState::new(12345);
        assert_eq!(state.phase(), GamePhase::Falling);
        assert_eq!(state.pieces_spawned(), 1);
        assert_eq!(state.score(), 0);
        assert!(!state.is_over());
    }

    #[test]
    fn test_collides_with_defaults_to_active_shape() {
        let state = game_with(&[PieceKind::I]);
        let o = standard_shape(PieceKind::O);
        // I at col 7 would put its last cell past the right wall.
        assert!(!state.collides_with(None, 0, 3));
        assert!(state.collides_with(None, 0, 7));
        assert!(!state.collides_with(Some(&o), 0, 8));
    }

    #[test]
    fn test_blocked_sideways_move_is_noop() {
        let mut state = game_with(&[PieceKind::O]);
        for _ in 0..4 {
            assert!(state.try_move(-1, 0));
        }
        let before = *state.active();
        assert!(!state.try_move(-1, 0));
        assert_eq!(*state.active(), before);
        assert_eq!(state.pieces_spawned(), 1);
    }

    #[test]
    fn test_gravity_waits_for_interval() {
        let mut state = game_with(&[PieceKind::O]);
        assert!(!state.tick(&[], 500));
        assert_eq!(state.active().row, 0);
        assert!(state.tick(&[], 300));
        assert_eq!(state.active().row, 1);
        assert_eq!(state.gravity_timer_ms(), 0);
    }

    #[test]
    fn test_soft_drop_lock_reports_change() {
        let mut state = game_with(&[PieceKind::O]);
        for _ in 0..6 {
            assert!(state.apply_event(InputEvent::SoftDrop));
        }
        // Seventh soft drop is blocked but locks, which is still a change.
        assert!(state.apply_event(InputEvent::SoftDrop));
        assert_eq!(state.pieces_spawned(), 2);
    }

    #[test]
    fn test_lock_event_is_taken_once() {
        let mut state = game_with(&[PieceKind::O]);
        state.hard_drop();
        assert_eq!(
            state.take_last_event(),
            Some(LockEvent {
                rows_cleared: 0,
                points: 0,
                topped_out: false
            })
        );
        assert_eq!(state.take_last_event(), None);
    }
}
