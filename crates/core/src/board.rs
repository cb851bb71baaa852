//! Board module - manages the game grid
//!
//! The board is a `width` x `height` grid where each cell is empty or filled.
//! Uses a flat vector in row-major order; dimensions never change after creation.
//! Coordinates: (row, col) where row 0 is the top and col 0 is the left.

use log::debug;

use crate::shapes::Shape;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board, flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    /// Build a board from text rows, `#` meaning filled.
    ///
    /// Width is taken from the first row; shorter rows are padded with empty
    /// cells and longer rows are truncated.
    ///
    /// ```
    /// use mono_tetris_core::Board;
    ///
    /// let board = Board::from_pattern(&["....", "##.#"]);
    /// assert_eq!((board.width(), board.height()), (4, 2));
    /// assert!(board.is_occupied(1, 0));
    /// assert!(!board.is_occupied(1, 2));
    /// ```
    pub fn from_pattern(rows: &[&str]) -> Self {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut board = Self::new(width as u8, rows.len() as u8);
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(width).enumerate() {
                if ch == '#' {
                    board.set(row as i16, col as i16, Cell::Filled);
                }
            }
        }
        board
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || row >= self.height as i16 || col < 0 || col >= self.width as i16 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (row, col).
    /// Returns None if out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col).
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i16, col: i16, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether (row, col) blocks a piece.
    ///
    /// Columns outside `[0, width)` and rows at or below `height` are blocked.
    /// Rows above the top (`row < 0`) are open: pieces are only bounded
    /// sideways and from below.
    pub fn is_occupied(&self, row: i16, col: i16) -> bool {
        if col < 0 || col >= self.width as i16 || row >= self.height as i16 {
            return true;
        }
        if row < 0 {
            return false;
        }
        self.get(row, col).is_some_and(Cell::is_filled)
    }

    /// Check if a row is completely filled.
    /// A zero-width board has no full rows.
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height as usize || self.width == 0 {
            return false;
        }
        let width = self.width as usize;
        let start = row * width;
        self.cells[start..start + width].iter().all(|c| c.is_filled())
    }

    /// Write every filled cell of `shape` at the given origin as `Filled`.
    ///
    /// The caller must have checked the placement with
    /// [`collides`](crate::collision::collides). Cells that fall outside the
    /// grid are skipped.
    pub fn lock(&mut self, shape: &Shape, origin_row: i16, origin_col: i16) {
        for (dr, dc) in shape.cells() {
            let written = self.set(origin_row + dr, origin_col + dc, Cell::Filled);
            debug_assert!(
                written,
                "lock outside the board at ({}, {})",
                origin_row + dr,
                origin_col + dc
            );
        }
    }

    /// Remove every full row, pad with empty rows at the top, and return how
    /// many rows were removed.
    ///
    /// Uses a two-pointer compaction, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_row = height;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_row in (0..height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        // Blank the rows freed at the top
        self.cells[..write_row * width].fill(Cell::Empty);

        if cleared > 0 {
            debug!("cleared {} full rows", cleared);
        }
        cleared
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Render as text rows, `#` for filled and `.` for empty
    pub fn to_pattern(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|c| if c.is_filled() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 9), Some(9));
        assert_eq!(board.index(1, 0), Some(10));
        assert_eq!(board.index(7, 9), Some(79));
        assert_eq!(board.index(0, -1), None);
        assert_eq!(board.index(0, 10), None);
        assert_eq!(board.index(8, 0), None);
    }

    #[test]
    fn test_pattern_roundtrip() {
        let rows = ["#..#", "....", "####"];
        let board = Board::from_pattern(&rows);
        assert_eq!(board.to_pattern(), rows);
    }

    #[test]
    fn test_clear_keeps_row_order() {
        let mut board = Board::from_pattern(&["#...", "####", ".#..", "####"]);
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.to_pattern(), ["....", "....", "#...", ".#.."]);
    }

    #[test]
    fn test_zero_width_board_has_no_full_rows() {
        let mut board = Board::new(0, 3);
        assert!(!board.is_row_full(0));
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut board = Board::from_pattern(&["#..", ".##"]);
        board.clear();
        assert_eq!((board.width(), board.height()), (3, 2));
        assert_eq!(board.to_pattern(), ["...", "..."]);
    }
}
