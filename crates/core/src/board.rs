//! Board module - manages the game grid
//!
//! The board is a `W x H` grid (10x20 by default) where each cell is empty or
//! holds the kind of the piece that filled it. Storage is a fixed-size array of
//! rows owned by the board; the grid never changes shape, only content.
//!
//! Coordinates: (col, row) where col ranges 0..W (left to right) and row ranges
//! 0..H (top to bottom). Rows above the grid (negative row index) are always
//! empty, which lets a piece spawn partially off-board.

use crate::piece::Piece;
use crate::types::{Cell, ShapeKind, COLUMNS, ROWS};

/// The game board - `W` columns x `H` rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board<const W: usize = COLUMNS, const H: usize = ROWS> {
    /// Row-major cells, `rows[row][col]`
    rows: [[Cell; W]; H],
}

impl Board {
    /// Create a new empty board with the default dimensions
    pub fn new() -> Self {
        Self::empty()
    }
}

impl<const W: usize, const H: usize> Board<W, H> {
    /// Create a new empty board
    pub fn empty() -> Self {
        Self {
            rows: [[None; W]; H],
        }
    }

    /// Create a board from a prepared layout
    pub fn from_rows(rows: [[Cell; W]; H]) -> Self {
        Self { rows }
    }

    #[inline(always)]
    fn index(col: i32, row: i32) -> Option<(usize, usize)> {
        if col < 0 || col >= W as i32 || row < 0 || row >= H as i32 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        W
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        H
    }

    /// Get cell at (col, row)
    /// Returns None if outside the grid
    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        Self::index(col, row).map(|(c, r)| self.rows[r][c])
    }

    /// Set cell at (col, row)
    /// Returns false if outside the grid
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some((c, r)) => {
                self.rows[r][c] = cell;
                true
            }
            None => false,
        }
    }

    /// Column inside the grid and row not below it
    ///
    /// There is no upper bound on the row: cells above the grid count as in bounds.
    pub fn is_within_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < W as i32 && row < H as i32
    }

    /// Whether (col, row) holds a locked cell
    ///
    /// Rows above the grid are never occupied.
    pub fn cell_occupied(&self, col: i32, row: i32) -> bool {
        if row < 0 {
            return false;
        }
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Whether `piece` fits after moving it by (dx, dy)
    ///
    /// Every cell must have its column inside the grid and its row above the floor,
    /// and must not overlap a locked cell. Cells above the grid skip the overlap
    /// check but still need a legal column.
    pub fn can_place(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece.cells().iter().all(|&(col, row)| {
            let col = col + dx;
            let row = row + dy;
            self.is_within_bounds(col, row) && !self.cell_occupied(col, row)
        })
    }

    /// Write a piece into the grid and clear full rows
    ///
    /// Cells still above the grid are dropped. Returns the number of rows cleared.
    pub fn lock(&mut self, piece: &Piece) -> u32 {
        for (col, row) in piece.cells() {
            self.set(col, row, Some(piece.kind));
        }
        self.clear_full_rows()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= H {
            return false;
        }
        self.rows[row].iter().all(|cell| cell.is_some())
    }

    /// Remove all full rows and return how many were removed
    ///
    /// Remaining rows keep their order and sink to the bottom; the same number of
    /// empty rows appear at the top. Two-pointer compaction, no allocation.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut write = H;

        // Scan from bottom to top
        for read in (0..H).rev() {
            if self.is_row_full(read) {
                cleared += 1;
            } else {
                write -= 1;
                if write != read {
                    self.rows[write] = self.rows[read];
                }
            }
        }

        // Clear the remaining rows at the top
        for row in &mut self.rows[..write] {
            *row = [None; W];
        }

        cleared
    }

    /// Whether the topmost visible row holds any locked cell
    pub fn is_topped_out(&self) -> bool {
        H > 0 && self.rows[0].iter().any(|cell| cell.is_some())
    }

    /// Number of locked cells on the board
    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the grid rows
    pub fn rows(&self) -> &[[Cell; W]; H] {
        &self.rows
    }

    /// Fill a whole row with `kind`, leaving out the given columns
    pub fn fill_row_except(&mut self, row: usize, kind: ShapeKind, holes: &[usize]) {
        if row >= H {
            return;
        }
        for (col, cell) in self.rows[row].iter_mut().enumerate() {
            *cell = if holes.contains(&col) { None } else { Some(kind) };
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            *row = [None; W];
        }
    }
}

impl<const W: usize, const H: usize> Default for Board<W, H> {
    fn default() -> Self {
        Self::empty()
    }
}
