//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, pixel rendering, host glue).
//!
//! # Board Dimensions
//!
//! The default playfield is sized for a 128x32 monochrome OLED:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 8 rows (indexed 0-7, row 0 at the top)
//! - **Spawn position**: horizontally centered, row 0
//!
//! # Display Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DISPLAY_WIDTH` | 128 | Pixel buffer width |
//! | `DISPLAY_HEIGHT` | 32 | Pixel buffer height |
//! | `CELL_PITCH_PX` | 4 | Distance between neighbouring cells |
//! | `BLOCK_SIZE_PX` | 3 | Side length of a painted block |
//! | `BOARD_OFFSET_X_PX` | 44 | Left edge of the board on screen |
//!
//! # Examples
//!
//! ```
//! use mono_tetris_types::{InputEvent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(InputEvent::from_str("hardDrop"), Some(InputEvent::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 8);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (8 rows)
pub const BOARD_HEIGHT: u8 = 8;

/// Gravity interval in milliseconds (one forced row every 0.8s)
pub const GRAVITY_INTERVAL_MS: u32 = 800;

/// Host tick interval in milliseconds (~60 Hz)
pub const TICK_MS: u32 = 16;

/// Points awarded per cleared row. Flat, no level or combo multiplier.
pub const POINTS_PER_ROW: u32 = 10;

/// Largest bounding box side a shape may have.
pub const MAX_SHAPE_SIDE: usize = 4;

/// Maximum number of shapes a catalog can hold.
pub const MAX_CATALOG_SHAPES: usize = 16;

/// Pixel buffer width
pub const DISPLAY_WIDTH: u16 = 128;

/// Pixel buffer height
pub const DISPLAY_HEIGHT: u16 = 32;

/// Distance in pixels between the top-left corners of neighbouring cells
pub const CELL_PITCH_PX: u16 = 4;

/// Side length in pixels of a painted block
pub const BLOCK_SIZE_PX: u16 = 3;

/// Horizontal screen offset of board column 0
pub const BOARD_OFFSET_X_PX: u16 = 44;

/// Vertical screen offset of board row 0
pub const BOARD_OFFSET_Y_PX: u16 = 0;

/// The seven standard piece kinds, in catalog order
///
/// - **I**: 1x4 bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **L**: L-shaped
/// - **J**: J-shaped (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mono_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }

    /// Position of this kind in the standard catalog.
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }
}

/// Discrete, already-debounced input events delivered by the host each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Move piece one cell down; locks when blocked
    SoftDrop,
    /// Drop piece until blocked, then lock
    HardDrop,
}

impl InputEvent {
    /// Parse event from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mono_tetris_types::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_str("left"), Some(InputEvent::Left));
    /// assert_eq!(InputEvent::from_str("softDrop"), Some(InputEvent::SoftDrop));
    /// assert_eq!(InputEvent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(InputEvent::Left),
            "right" => Some(InputEvent::Right),
            "rotate" => Some(InputEvent::Rotate),
            "softdrop" => Some(InputEvent::SoftDrop),
            "harddrop" => Some(InputEvent::HardDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::Left => "left",
            InputEvent::Right => "right",
            InputEvent::Rotate => "rotate",
            InputEvent::SoftDrop => "softDrop",
            InputEvent::HardDrop => "hardDrop",
        }
    }
}

/// A cell on the game board
///
/// Only occupancy is kept; which piece filled a cell is forgotten at lock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(self) -> bool {
        self == Cell::Filled
    }
}

/// Controller state machine phases
///
/// `Spawning`, `Locking` and `Clearing` are passed through within a single
/// call; between calls the controller rests in `Falling` or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Spawning,
    Falling,
    Locking,
    Clearing,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Spawning => "spawning",
            GamePhase::Falling => "falling",
            GamePhase::Locking => "locking",
            GamePhase::Clearing => "clearing",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Rows removed by the line clear that followed the lock.
    pub rows_cleared: u32,
    /// Points added to the score for those rows.
    pub points: u32,
    /// The replacement piece collided on spawn and the round ended.
    pub topped_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_fits_on_display() {
        let right = BOARD_OFFSET_X_PX + BOARD_WIDTH as u16 * CELL_PITCH_PX;
        let bottom = BOARD_OFFSET_Y_PX + BOARD_HEIGHT as u16 * CELL_PITCH_PX;
        assert!(right <= DISPLAY_WIDTH);
        assert!(bottom <= DISPLAY_HEIGHT);
        assert!(BLOCK_SIZE_PX < CELL_PITCH_PX);
    }
}
