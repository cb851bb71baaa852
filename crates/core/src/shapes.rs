//! Shapes module - piece matrices and the shape catalog
//!
//! A [`Shape`] is an immutable occupancy matrix of at most 4x4 cells, stored as
//! a bitmask so it is `Copy` and costs two bytes of payload. Rotation builds a
//! new shape rather than indexing into precomputed orientation tables.

use arrayvec::ArrayVec;

use crate::error::{ConfigError, ShapeError};
use crate::rng::RandomSource;
use crate::types::{PieceKind, MAX_CATALOG_SHAPES, MAX_SHAPE_SIDE};

/// Bit index of cell (row, col) in the mask.
const fn bit(row: usize, col: usize) -> u16 {
    1 << (row * MAX_SHAPE_SIDE + col)
}

/// Occupancy matrix of a piece's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    bits: u16,
}

impl Shape {
    /// Build a shape from a compile-time grid. Non-zero entries are filled.
    ///
    /// Panics (at compile time when used in a const) if the grid is larger
    /// than 4x4 or has no rows or columns.
    pub const fn from_grid<const W: usize, const H: usize>(grid: [[u8; W]; H]) -> Self {
        assert!(W > 0 && W <= MAX_SHAPE_SIDE, "shape width must be 1..=4");
        assert!(H > 0 && H <= MAX_SHAPE_SIDE, "shape height must be 1..=4");

        let mut bits = 0u16;
        let mut row = 0;
        while row < H {
            let mut col = 0;
            while col < W {
                if grid[row][col] != 0 {
                    bits |= bit(row, col);
                }
                col += 1;
            }
            row += 1;
        }

        Self {
            width: W as u8,
            height: H as u8,
            bits,
        }
    }

    /// Build a shape from runtime rows. Non-zero entries are filled.
    ///
    /// # Examples
    ///
    /// ```
    /// use mono_tetris_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
    /// assert_eq!((t.width(), t.height()), (3, 2));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_err());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }
        if width > MAX_SHAPE_SIDE || height > MAX_SHAPE_SIDE {
            return Err(ShapeError::TooLarge { width, height });
        }

        let mut bits = 0u16;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ShapeError::Ragged { row: r });
            }
            for (c, &value) in row.iter().enumerate() {
                if value != 0 {
                    bits |= bit(r, c);
                }
            }
        }
        if bits == 0 {
            return Err(ShapeError::NoFilledCells);
        }

        Ok(Self {
            width: width as u8,
            height: height as u8,
            bits,
        })
    }

    /// Bounding box width in cells
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Bounding box height in cells
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether cell (row, col) of the bounding box is filled.
    /// Out-of-box coordinates are never filled.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height as usize && col < self.width as usize && self.bits & bit(row, col) != 0
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Offsets (row, col) of every filled cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> {
        let (width, height, bits) = (self.width as usize, self.height as usize, self.bits);
        (0..height).flat_map(move |row| {
            (0..width)
                .filter(move |&col| bits & bit(row, col) != 0)
                .map(move |col| (row as i16, col as i16))
        })
    }

    /// Rotate 90° clockwise: transpose of the row-reversed matrix.
    ///
    /// The bounding box swaps width and height.
    pub fn rotated(&self) -> Self {
        let (width, height) = (self.width as usize, self.height as usize);
        let mut bits = 0u16;
        for row in 0..width {
            for col in 0..height {
                if self.bits & bit(height - 1 - col, row) != 0 {
                    bits |= bit(row, col);
                }
            }
        }
        Self {
            width: self.height,
            height: self.width,
            bits,
        }
    }
}

/// The seven standard shapes, in [`PieceKind`] order.
pub const STANDARD_SHAPES: [Shape; 7] = [
    Shape::from_grid([[1, 1, 1, 1]]),
    Shape::from_grid([[1, 1], [1, 1]]),
    Shape::from_grid([[0, 1, 0], [1, 1, 1]]),
    Shape::from_grid([[0, 1, 1], [1, 1, 0]]),
    Shape::from_grid([[1, 1, 0], [0, 1, 1]]),
    Shape::from_grid([[1, 0, 0], [1, 1, 1]]),
    Shape::from_grid([[0, 0, 1], [1, 1, 1]]),
];

/// Get the spawn-orientation shape for a standard piece kind
pub fn standard_shape(kind: PieceKind) -> Shape {
    STANDARD_SHAPES[kind.index()]
}

/// Fixed, non-empty, ordered set of shapes that pieces are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    shapes: ArrayVec<Shape, MAX_CATALOG_SHAPES>,
}

impl ShapeCatalog {
    /// The seven standard tetromino shapes.
    pub fn standard() -> Self {
        Self {
            shapes: STANDARD_SHAPES.iter().copied().collect(),
        }
    }

    pub fn new(shapes: &[Shape]) -> Result<Self, ConfigError> {
        if shapes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if shapes.len() > MAX_CATALOG_SHAPES {
            return Err(ConfigError::CatalogTooLarge { len: shapes.len() });
        }
        Ok(Self {
            shapes: shapes.iter().copied().collect(),
        })
    }

    pub fn all(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Widest spawn-orientation bounding box in the catalog.
    pub fn max_width(&self) -> u8 {
        self.shapes.iter().map(|s| s.width()).max().unwrap_or(0)
    }

    /// Draw one shape uniformly at random, with replacement.
    pub fn random_shape(&self, rng: &mut impl RandomSource) -> Shape {
        let idx = rng.next_range(self.shapes.len() as u32) as usize;
        self.shapes[idx]
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;

    #[test]
    fn test_from_grid_matches_from_rows() {
        let built = Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]).unwrap();
        assert_eq!(built, standard_shape(PieceKind::S));
    }

    #[test]
    fn test_standard_shapes_have_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(standard_shape(kind).cell_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_cells_are_row_major() {
        let t = standard_shape(PieceKind::T);
        let cells: Vec<_> = t.cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_rotate_i_swaps_dimensions() {
        let i = standard_shape(PieceKind::I).rotated();
        assert_eq!((i.width(), i.height()), (1, 4));
        assert!((0..4).all(|r| i.is_filled(r, 0)));
    }

    #[test]
    fn test_rotate_l_clockwise() {
        // [[1,0,0],[1,1,1]] -> [[1,1],[1,0],[1,0]]
        let rotated = standard_shape(PieceKind::L).rotated();
        let expected = Shape::from_rows(&[&[1, 1], &[1, 0], &[1, 0]]).unwrap();
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(Shape::from_rows(&[]), Err(ShapeError::Empty));
        assert_eq!(Shape::from_rows(&[&[]]), Err(ShapeError::Empty));
        assert_eq!(
            Shape::from_rows(&[&[1, 1, 1, 1, 1]]),
            Err(ShapeError::TooLarge {
                width: 5,
                height: 1
            })
        );
        assert_eq!(
            Shape::from_rows(&[&[1, 1], &[1]]),
            Err(ShapeError::Ragged { row: 1 })
        );
        assert_eq!(
            Shape::from_rows(&[&[0, 0]]),
            Err(ShapeError::NoFilledCells)
        );
    }

    #[test]
    fn test_catalog_rejects_empty() {
        assert_eq!(ShapeCatalog::new(&[]), Err(ConfigError::EmptyCatalog));
    }

    #[test]
    fn test_catalog_rejects_oversized() {
        let shapes = [STANDARD_SHAPES[0]; MAX_CATALOG_SHAPES + 1];
        assert_eq!(
            ShapeCatalog::new(&shapes),
            Err(ConfigError::CatalogTooLarge {
                len: MAX_CATALOG_SHAPES + 1
            })
        );
    }

    #[test]
    fn test_random_shape_uses_injected_source() {
        let catalog = ShapeCatalog::standard();
        let mut rng = SequenceRng::new(vec![1, 6, 0]);
        assert_eq!(catalog.random_shape(&mut rng), standard_shape(PieceKind::O));
        assert_eq!(catalog.random_shape(&mut rng), standard_shape(PieceKind::J));
        assert_eq!(catalog.random_shape(&mut rng), standard_shape(PieceKind::I));
    }

    #[test]
    fn test_catalog_max_width() {
        assert_eq!(ShapeCatalog::standard().max_width(), 4);
    }
}
