//! BoardView: projects board and active piece into a monochrome framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActivePiece, Board, GameSnapshot};
use crate::fb::MonoFrameBuffer;
use crate::types::{BLOCK_SIZE_PX, BOARD_OFFSET_X_PX, BOARD_OFFSET_Y_PX, CELL_PITCH_PX};

/// Screen geometry of the board: each cell is a `block` x `block` square
/// placed every `pitch` pixels, starting at (`offset_x`, `offset_y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    pitch: u16,
    block: u16,
    offset_x: i32,
    offset_y: i32,
}

impl Default for BoardView {
    fn default() -> Self {
        // 3x3 blocks on a 4 px grid leave a one pixel gap between cells.
        Self {
            pitch: CELL_PITCH_PX,
            block: BLOCK_SIZE_PX,
            offset_x: BOARD_OFFSET_X_PX as i32,
            offset_y: BOARD_OFFSET_Y_PX as i32,
        }
    }
}

impl BoardView {
    pub fn new(pitch: u16, block: u16) -> Self {
        Self {
            pitch,
            block,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Top-left pixel of board cell (row, col).
    pub fn cell_origin(&self, row: i16, col: i16) -> (i32, i32) {
        (
            self.offset_x + col as i32 * self.pitch as i32,
            self.offset_y + row as i32 * self.pitch as i32,
        )
    }

    fn paint_cell(&self, fb: &mut MonoFrameBuffer, row: i16, col: i16) {
        let (x, y) = self.cell_origin(row, col);
        fb.fill_rect(x, y, self.block, self.block);
    }

    /// Render into an existing framebuffer.
    ///
    /// Every pixel is turned off first, then filled board cells and (when
    /// `piece_visible`) the active piece's cells are painted. Pixels falling
    /// outside the buffer are clipped.
    pub fn render_into(
        &self,
        board: &Board,
        active: Option<&ActivePiece>,
        piece_visible: bool,
        fb: &mut MonoFrameBuffer,
    ) {
        fb.clear();

        // Locked board cells.
        for (row, cells) in board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_filled() {
                    self.paint_cell(fb, row as i16, col as i16);
                }
            }
        }

        // Active piece.
        if let Some(piece) = active.filter(|_| piece_visible) {
            for (row, col) in piece.cells() {
                self.paint_cell(fb, row, col);
            }
        }
    }

    /// Render into a new display-sized framebuffer.
    pub fn render(
        &self,
        board: &Board,
        active: Option<&ActivePiece>,
        piece_visible: bool,
    ) -> MonoFrameBuffer {
        let mut fb = MonoFrameBuffer::default();
        self.render_into(board, active, piece_visible, &mut fb);
        fb
    }

    pub fn render_snapshot_into(
        &self,
        snap: &GameSnapshot,
        piece_visible: bool,
        fb: &mut MonoFrameBuffer,
    ) {
        self.render_into(&snap.board, Some(&snap.active), piece_visible, fb);
    }
}
