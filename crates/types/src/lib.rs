//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the simulation.
//! All types are plain data with no external dependencies, so they can be used
//! from the core logic, a renderer, or a scripted host alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn origin**: column `COLUMNS / 2 - 2`, row `-1` (one row above the grid)
//!
//! Hosts that need a different fixed size pick it through the board's const
//! generic parameters; these constants are the defaults.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_FALL_INTERVAL_MS` | 700 | Gravity at level 1 |
//! | `FALL_INTERVAL_STEP_MS` | 60 | Interval reduction per level |
//! | `MIN_FALL_INTERVAL_MS` | 100 | Gravity floor |
//!
//! # Scoring
//!
//! | Lines | Points |
//! |-------|--------|
//! | 0 | 0 |
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | n >= 4 | 800 * (n - 3) |
//!
//! Soft drop awards 1 point per row, hard drop 2 points per row.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, ShapeKind, COLUMNS, ROWS};
//!
//! // Parse from string (case-insensitive)
//! let parsed = ShapeKind::from_str("t").unwrap();
//! assert_eq!(parsed, ShapeKind::T);
//!
//! // Parse game action, including the classic key bindings
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(GameAction::from_str("space"), Some(GameAction::HardDrop));
//!
//! // Board dimensions
//! assert_eq!(COLUMNS, 10);
//! assert_eq!(ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const COLUMNS: usize = 10;

/// Board height in cells (20 rows)
pub const ROWS: usize = 20;

/// Side length of a piece orientation matrix
pub const MATRIX_SIZE: usize = 4;

/// Row of the matrix origin when a piece spawns (one row above the grid)
pub const SPAWN_ROW: i32 = -1;

/// Gravity interval at level 1 (700ms per row)
pub const INITIAL_FALL_INTERVAL_MS: u32 = 700;

/// Gravity speed-up per level
pub const FALL_INTERVAL_STEP_MS: u32 = 60;

/// Gravity floor (100ms per row)
pub const MIN_FALL_INTERVAL_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per row moved by a soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per row traveled by a hard drop
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Line clear scores for 0..=3 simultaneous lines
pub const LINE_SCORES: [u32; 4] = [0, 100, 300, 500];

/// Multiplier for clears of four lines or more: `800 * (n - 3)`
pub const MULTI_LINE_SCORE: u32 = 800;

/// Column of the matrix origin for a piece spawning on a board `columns` wide
///
/// # Examples
///
/// ```
/// use blockfall_types::{spawn_column, COLUMNS};
///
/// assert_eq!(spawn_column(COLUMNS), 3);
/// ```
pub const fn spawn_column(columns: usize) -> i32 {
    columns as i32 / 2 - 2
}

/// The seven piece kinds
///
/// The kind is a tag only: gameplay treats every occupied cell as solid, the
/// kind is kept so a renderer can color the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Position in [`ShapeKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::J => 1,
            ShapeKind::L => 2,
            ShapeKind::O => 3,
            ShapeKind::S => 4,
            ShapeKind::T => 5,
            ShapeKind::Z => 6,
        }
    }

    /// Non-zero cell code (1-7) used by grid snapshots, where 0 means empty
    pub fn code(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`ShapeKind::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[code as usize - 1]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::I.as_str(), "i");
    /// assert_eq!(ShapeKind::Z.as_str(), "z");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }
}

/// A 4x4 orientation matrix, row-major, `true` = solid
pub type Matrix = [[bool; MATRIX_SIZE]; MATRIX_SIZE];

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ShapeKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<ShapeKind>;

/// Game actions a host can apply to the session
///
/// These are the operations mapped from input devices or replay scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (with soft drop scoring)
    SoftDrop,
    /// Drop piece to the lowest legal row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise with wall kicks
    Rotate,
    /// Toggle pause state
    Pause,
}

impl GameAction {
    /// Every action, in declaration order
    pub const ALL: [GameAction; 6] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Rotate,
        GameAction::Pause,
    ];

    /// Parse action from string (case-insensitive)
    ///
    /// Accepts the camelCase action names as well as the classic key bindings:
    /// arrows or WASD to move/rotate/soft drop, `space` to hard drop, `p` to pause.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" | "a" => Some(GameAction::MoveLeft),
            "moveright" | "right" | "d" => Some(GameAction::MoveRight),
            "softdrop" | "down" | "s" => Some(GameAction::SoftDrop),
            "harddrop" | "space" => Some(GameAction::HardDrop),
            "rotate" | "up" | "w" => Some(GameAction::Rotate),
            "pause" | "p" => Some(GameAction::Pause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
        }
    }
}

/// Session state machine
///
/// `Paused` and `GameOver` both suppress gravity and input. `GameOver` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Active,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Active => "active",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// Event emitted after a piece locks.
///
/// Consumed by hosts (replay logging, observers) via `take_last_lock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: ShapeKind,
    pub lines_cleared: u32,
    /// Line clear points only (drop points are not included)
    pub score_awarded: u32,
    /// Rows traveled by the hard drop that caused the lock (0 for gravity locks)
    pub drop_distance: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_matches_classic_rules() {
        assert_eq!(INITIAL_FALL_INTERVAL_MS, 700);
        assert_eq!(FALL_INTERVAL_STEP_MS, 60);
        assert_eq!(MIN_FALL_INTERVAL_MS, 100);
        assert_eq!(LINES_PER_LEVEL, 10);
    }

    #[test]
    fn kind_codes_are_dense_and_nonzero() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(kind.code() as usize, i + 1);
            assert_eq!(ShapeKind::from_code(kind.code()), Some(*kind));
        }
        assert_eq!(ShapeKind::from_code(0), None);
        assert_eq!(ShapeKind::from_code(8), None);
    }

    #[test]
    fn key_bindings_map_to_actions() {
        assert_eq!(GameAction::from_str("left"), Some(GameAction::MoveLeft));
        assert_eq!(GameAction::from_str("A"), Some(GameAction::MoveLeft));
        assert_eq!(GameAction::from_str("d"), Some(GameAction::MoveRight));
        assert_eq!(GameAction::from_str("down"), Some(GameAction::SoftDrop));
        assert_eq!(GameAction::from_str("w"), Some(GameAction::Rotate));
        assert_eq!(GameAction::from_str("p"), Some(GameAction::Pause));
        assert_eq!(GameAction::from_str("q"), None);
    }
}
