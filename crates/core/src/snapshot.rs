//! Snapshot module - read-only view of the game for hosts
//!
//! A snapshot copies everything a renderer or an observer needs. It is plain data
//! with no reference back into the game, so it can be kept, compared, or sent
//! elsewhere.

use crate::piece::{Piece, PieceCells};
use crate::types::{Cell, GameStatus, Matrix, ShapeKind, COLUMNS, ROWS};

/// The active piece as placed on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub x: i32,
    pub y: i32,
    pub matrix: Matrix,
    /// Absolute occupied cells, row-major
    pub cells: PieceCells,
}

impl From<Piece> for ActiveSnapshot {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
            matrix: piece.matrix,
            cells: piece.cells(),
        }
    }
}

/// The queued piece; only its kind and orientation matter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedSnapshot {
    pub kind: ShapeKind,
    pub matrix: Matrix,
}

impl From<Piece> for QueuedSnapshot {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind,
            matrix: piece.matrix,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot<const W: usize = COLUMNS, const H: usize = ROWS> {
    /// Locked cells only; the active piece is not drawn in
    pub board: [[Cell; W]; H],
    pub active: ActiveSnapshot,
    pub queued: QueuedSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub status: GameStatus,
    pub paused: bool,
    pub game_over: bool,
    pub topped_out: bool,
    pub pieces_spawned: u32,
}

impl<const W: usize, const H: usize> GameSnapshot<W, H> {
    /// Board cells as numeric codes: 0 = empty, 1..=7 = kind
    pub fn cell_codes(&self) -> [[u8; W]; H] {
        let mut out = [[0u8; W]; H];
        for (dst, src) in out.iter_mut().zip(self.board.iter()) {
            for (code, cell) in dst.iter_mut().zip(src.iter()) {
                *code = cell.map_or(0, |kind| kind.code());
            }
        }
        out
    }

    /// Board codes with the active piece drawn on top
    ///
    /// Active cells above the grid are not shown.
    pub fn composite_codes(&self) -> [[u8; W]; H] {
        let mut out = self.cell_codes();
        let code = self.active.kind.code();
        for &(col, row) in self.active.cells.iter() {
            if col >= 0 && row >= 0 && (col as usize) < W && (row as usize) < H {
                out[row as usize][col as usize] = code;
            }
        }
        out
    }
}

impl<const W: usize, const H: usize> Default for GameSnapshot<W, H> {
    fn default() -> Self {
        let placeholder = Piece::spawned(ShapeKind::I, W);
        Self {
            board: [[None; W]; H],
            active: ActiveSnapshot::from(placeholder),
            queued: QueuedSnapshot::from(placeholder),
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: 0,
            status: GameStatus::Active,
            paused: false,
            game_over: false,
            topped_out: false,
            pieces_spawned: 0,
        }
    }
}
