//! Active piece state: a shape and the board position of its bounding box.

use crate::board::Board;
use crate::collision::collides;
use crate::shapes::Shape;

/// The falling piece. `row`/`col` locate the top-left of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub row: i16,
    pub col: i16,
}

impl ActivePiece {
    /// Place a new piece on row 0, horizontally centered.
    pub fn spawn(shape: Shape, board_width: u8) -> Self {
        Self {
            shape,
            row: 0,
            col: (board_width / 2) as i16 - (shape.width() / 2) as i16,
        }
    }

    /// Same piece moved by (drow, dcol)
    pub fn shifted(&self, drow: i16, dcol: i16) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
            ..*self
        }
    }

    /// Same origin with a different shape
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }

    /// Absolute (row, col) of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> {
        let (row, col) = (self.row, self.col);
        self.shape.cells().map(move |(dr, dc)| (row + dr, col + dc))
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(board, &self.shape, self.row, self.col)
    }
}
