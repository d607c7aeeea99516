//! Piece module - the falling unit
//!
//! A piece is a kind, a 4x4 orientation matrix and the grid position of the
//! matrix origin (its top-left corner). Rotation replaces the whole matrix, so a
//! rotated candidate can be built on a copy and discarded if it does not fit.

use arrayvec::ArrayVec;

use crate::shapes::{base_matrix, rotate_cw};
use crate::types::{spawn_column, Matrix, ShapeKind, COLUMNS, MATRIX_SIZE, SPAWN_ROW};

/// Absolute (column, row) grid coordinates of one occupied cell
pub type GridCell = (i32, i32);

/// Occupied cells of a piece; a 4x4 matrix has at most 16
pub type PieceCells = ArrayVec<GridCell, { MATRIX_SIZE * MATRIX_SIZE }>;

/// Active or queued falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub matrix: Matrix,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece at the spawn origin of a default-width board
    pub fn new(kind: ShapeKind) -> Self {
        Self::spawned(kind, COLUMNS)
    }

    /// Create a piece at the spawn origin of a board `columns` wide
    pub fn spawned(kind: ShapeKind, columns: usize) -> Self {
        Self {
            kind,
            matrix: base_matrix(kind),
            x: spawn_column(columns),
            y: SPAWN_ROW,
        }
    }

    /// Move the origin back to the spawn point, keeping the orientation
    pub fn reset_to_spawn(&mut self, columns: usize) {
        self.x = spawn_column(columns);
        self.y = SPAWN_ROW;
    }

    /// Absolute cells occupied by solid matrix entries, in row-major order
    pub fn cells(&self) -> PieceCells {
        let mut cells = PieceCells::new();
        for (r, row) in self.matrix.iter().enumerate() {
            for (c, &solid) in row.iter().enumerate() {
                if solid {
                    cells.push((self.x + c as i32, self.y + r as i32));
                }
            }
        }
        cells
    }

    /// Replace the matrix with its 90° clockwise rotation
    ///
    /// Symmetric shapes go through the same transform.
    pub fn rotate_in_place(&mut self) {
        self.matrix = rotate_cw(&self.matrix);
    }

    /// Copy of this piece with the matrix rotated clockwise
    pub fn rotated(&self) -> Self {
        let mut next = *self;
        next.rotate_in_place();
        next
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Lowest row occupied by the piece (None for an empty matrix)
    pub fn bottom_row(&self) -> Option<i32> {
        self.cells().iter().map(|&(_, y)| y).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_new_spawn_origin() {
        let piece = Piece::new(ShapeKind::T);

        assert_eq!(piece.kind, ShapeKind::T);
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, -1);
        assert_eq!(piece.matrix, base_matrix(ShapeKind::T));
    }

    #[test]
    fn test_cells_row_major() {
        let piece = Piece::new(ShapeKind::T);
        let cells = piece.cells();

        // T: one cell on matrix row 0, three on row 1
        assert_eq!(cells.as_slice(), &[(4, -1), (3, 0), (4, 0), (5, 0)]);
    }

    #[test]
    fn test_rotate_in_place_matches_rotated() {
        let mut piece = Piece::new(ShapeKind::L);
        let copy = piece.rotated();
        piece.rotate_in_place();
        assert_eq!(piece, copy);
    }

    #[test]
    fn test_rotated_leaves_original_untouched() {
        let piece = Piece::new(ShapeKind::S);
        let _ = piece.rotated();
        assert_eq!(piece.matrix, base_matrix(ShapeKind::S));
    }

    #[test]
    fn test_i_rotation_becomes_vertical() {
        let piece = Piece::new(ShapeKind::I).rotated();
        let cells = piece.cells();

        // Horizontal bar on matrix row 1 becomes a vertical bar on matrix column 2
        assert_eq!(cells.as_slice(), &[(5, -1), (5, 0), (5, 1), (5, 2)]);
    }

    #[test]
    fn test_shifted_and_reset() {
        let mut piece = Piece::new(ShapeKind::O).shifted(-2, 5);
        assert_eq!((piece.x, piece.y), (1, 4));

        piece.reset_to_spawn(COLUMNS);
        assert_eq!((piece.x, piece.y), (3, -1));
    }

    #[test]
    fn test_bottom_row() {
        assert_eq!(Piece::new(ShapeKind::O).bottom_row(), Some(0));
        assert_eq!(Piece::new(ShapeKind::I).bottom_row(), Some(0));
        assert_eq!(Piece::new(ShapeKind::I).rotated().bottom_row(), Some(2));
    }
}
