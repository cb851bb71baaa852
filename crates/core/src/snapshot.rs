use crate::board::Board;
use crate::piece::ActivePiece;
use crate::types::GamePhase;

/// Read-only copy of the controller state for display sinks and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: ActivePiece,
    pub phase: GamePhase,
    pub score: u32,
    pub rows_cleared: u32,
    pub pieces_spawned: u32,
    pub episode_id: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
