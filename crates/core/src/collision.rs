//! Collision & transform engine - pure legality checks
//!
//! [`collides`] is the single source of truth for whether a placement is legal.
//! The controller routes every move and rotation through it before mutating.

use crate::board::Board;
use crate::shapes::Shape;

/// Check whether `shape` placed with its top-left at (origin_row, origin_col)
/// overlaps a wall, the floor, or a filled cell.
///
/// Cells above the top edge never collide.
pub fn collides(board: &Board, shape: &Shape, origin_row: i16, origin_col: i16) -> bool {
    shape
        .cells()
        .any(|(dr, dc)| board.is_occupied(origin_row + dr, origin_col + dc))
}

/// Rotate a shape 90° clockwise.
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotated()
}

/// Rotate in place without any kick offsets.
///
/// Returns the rotated shape if it fits at the same origin, None otherwise.
pub fn try_rotate(board: &Board, shape: &Shape, origin_row: i16, origin_col: i16) -> Option<Shape> {
    let rotated = rotate(shape);
    if collides(board, &rotated, origin_row, origin_col) {
        None
    } else {
        Some(rotated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::standard_shape;
    use crate::types::PieceKind;

    #[test]
    fn test_negative_rows_do_not_collide() {
        let board = Board::default();
        let i = standard_shape(PieceKind::I).rotated();
        assert!(!collides(&board, &i, -3, 0));
    }

    #[test]
    fn test_walls_and_floor_collide() {
        let board = Board::default();
        let o = standard_shape(PieceKind::O);
        assert!(collides(&board, &o, 0, -1));
        assert!(collides(&board, &o, 0, 9));
        assert!(collides(&board, &o, 7, 0));
        assert!(!collides(&board, &o, 6, 8));
    }

    #[test]
    fn test_empty_bounding_box_cells_ignored() {
        // T's top corners are empty, so one may sit over a filled cell.
        let mut board = Board::default();
        board.set(0, 0, crate::types::Cell::Filled);
        let t = standard_shape(PieceKind::T);
        assert!(!collides(&board, &t, 0, 0));
        assert!(collides(&board, &t, -1, 0));
    }

    #[test]
    fn test_try_rotate_rejects_without_kick() {
        let board = Board::default();
        // Vertical I against the right wall cannot become horizontal.
        let vertical = standard_shape(PieceKind::I).rotated();
        assert_eq!(try_rotate(&board, &vertical, 0, 9), None);
        assert!(try_rotate(&board, &vertical, 0, 6).is_some());
    }
}
