//! Protocol module - JSON observation messages
//!
//! Line-delimited JSON written by the replay host. Every message has a `type`
//! and a `seq` (sequence number). Board cells are encoded `0` = empty and
//! `1..=7` = piece kind (see [`ShapeKind::code`]).

use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;
use crate::types::{GameStatus, LockEvent, Matrix, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

impl Default for ObservationType {
    fn default() -> Self {
        Self::Observation
    }
}

/// Game state observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub status: StatusLower,
    pub paused: bool,
    pub game_over: bool,
    pub topped_out: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub pieces_spawned: u32,
    pub board: BoardSnapshot,
    pub active: ActivePieceSnapshot,
    pub next: QueuedPieceSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_lock: Option<LastLock>,
}

impl ObservationMessage {
    /// Build an observation from a game snapshot
    pub fn from_snapshot<const W: usize, const H: usize>(
        seq: u64,
        snapshot: &GameSnapshot<W, H>,
        last_lock: Option<LockEvent>,
    ) -> Self {
        Self {
            msg_type: ObservationType::Observation,
            seq,
            status: snapshot.status.into(),
            paused: snapshot.paused,
            game_over: snapshot.game_over,
            topped_out: snapshot.topped_out,
            score: snapshot.score,
            level: snapshot.level,
            lines: snapshot.lines,
            fall_interval_ms: snapshot.fall_interval_ms,
            pieces_spawned: snapshot.pieces_spawned,
            board: BoardSnapshot {
                width: W,
                height: H,
                cells: snapshot.cell_codes().iter().map(|row| row.to_vec()).collect(),
            },
            active: ActivePieceSnapshot {
                kind: snapshot.active.kind.into(),
                x: snapshot.active.x,
                y: snapshot.active.y,
                cells: snapshot
                    .active
                    .cells
                    .iter()
                    .map(|&(col, row)| [col, row])
                    .collect(),
            },
            next: QueuedPieceSnapshot {
                kind: snapshot.queued.kind.into(),
                matrix: matrix_rows(&snapshot.queued.matrix),
            },
            last_lock: last_lock.map(LastLock::from),
        }
    }
}

fn matrix_rows(matrix: &Matrix) -> Vec<String> {
    matrix
        .iter()
        .map(|row| row.iter().map(|&solid| if solid { '#' } else { '.' }).collect())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Vec<u8>>, // 0 = empty, 1-7 = piece kind
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePieceSnapshot {
    pub kind: ShapeKindLower,
    pub x: i32,
    pub y: i32,
    /// Absolute [col, row] pairs; rows may be negative above the grid
    pub cells: Vec<[i32; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedPieceSnapshot {
    pub kind: ShapeKindLower,
    /// Four rows of `#` (solid) and `.` (empty)
    pub matrix: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKindLower {
    #[serde(rename = "i")]
    I,
    #[serde(rename = "j")]
    J,
    #[serde(rename = "l")]
    L,
    #[serde(rename = "o")]
    O,
    #[serde(rename = "s")]
    S,
    #[serde(rename = "t")]
    T,
    #[serde(rename = "z")]
    Z,
}

impl From<ShapeKind> for ShapeKindLower {
    fn from(value: ShapeKind) -> Self {
        match value {
            ShapeKind::I => Self::I,
            ShapeKind::J => Self::J,
            ShapeKind::L => Self::L,
            ShapeKind::O => Self::O,
            ShapeKind::S => Self::S,
            ShapeKind::T => Self::T,
            ShapeKind::Z => Self::Z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusLower {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "paused")]
    Paused,
    #[serde(rename = "game_over")]
    GameOver,
}

impl From<GameStatus> for StatusLower {
    fn from(value: GameStatus) -> Self {
        match value {
            GameStatus::Active => Self::Active,
            GameStatus::Paused => Self::Paused,
            GameStatus::GameOver => Self::GameOver,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastLock {
    pub kind: ShapeKindLower,
    pub lines_cleared: u32,
    pub score_awarded: u32,
    pub drop_distance: u32,
}

impl From<LockEvent> for LastLock {
    fn from(value: LockEvent) -> Self {
        Self {
            kind: value.kind.into(),
            lines_cleared: value.lines_cleared,
            score_awarded: value.score_awarded,
            drop_distance: value.drop_distance,
        }
    }
}
