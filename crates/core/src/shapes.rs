//! Shapes module - the piece catalog
//!
//! Each kind has one base orientation stored as a 4x4 matrix. Every other
//! orientation is derived by rotating the matrix, so there are no per-rotation
//! tables.

use crate::types::{Matrix, ShapeKind, MATRIX_SIZE};

const X: bool = true;
const O: bool = false;

/// Base matrices, indexed by [`ShapeKind::index`]
static SHAPES: [Matrix; 7] = [
    // I
    [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
    // J
    [[X, O, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    // L
    [[O, O, X, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    // O
    [[O, X, X, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
    // S
    [[O, X, X, O], [X, X, O, O], [O, O, O, O], [O, O, O, O]],
    // T
    [[O, X, O, O], [X, X, X, O], [O, O, O, O], [O, O, O, O]],
    // Z
    [[X, X, O, O], [O, X, X, O], [O, O, O, O], [O, O, O, O]],
];

/// Get the base orientation matrix for a piece kind.
///
/// The matrix is returned by value, so callers may mutate it freely.
pub fn base_matrix(kind: ShapeKind) -> Matrix {
    SHAPES[kind.index()]
}

/// Rotate a matrix 90° clockwise (reverse the rows, then transpose).
pub fn rotate_cw(matrix: &Matrix) -> Matrix {
    let mut out = [[false; MATRIX_SIZE]; MATRIX_SIZE];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = matrix[MATRIX_SIZE - 1 - c][r];
        }
    }
    out
}

/// Number of solid entries in a matrix
pub fn solid_count(matrix: &Matrix) -> usize {
    matrix.iter().flatten().filter(|&&solid| solid).count()
}
