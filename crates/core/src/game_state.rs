//! Game state module - manages the complete game session
//!
//! This module ties together the board, pieces, the piece source, and scoring.
//! It runs the spawn / fall / lock cycle, rotation with wall kicks, line-clear
//! scoring with level progression, and the pause / game-over state machine.
//!
//! Every legality decision goes through [`Board::can_place`]. Illegal inputs are
//! not errors: they leave the state untouched and report `false` (or `0`).

use crate::board::Board;
use crate::config::GameConfig;
use crate::piece::Piece;
use crate::rng::{KindSource, UniformSource};
use crate::scoring::{
    calculate_drop_score, calculate_level, calculate_line_score, get_fall_interval_ms,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, QueuedSnapshot};
use crate::types::*;

/// Offsets (dx, dy) tried in order after a rotation; the first legal one wins.
pub const WALL_KICKS: [(i32, i32); 6] = [(0, 0), (-1, 0), (1, 0), (-2, 0), (2, 0), (0, -1)];

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource, const W: usize = COLUMNS, const H: usize = ROWS> {
    board: Board<W, H>,
    active: Piece,
    queued: Piece,
    source: S,
    config: GameConfig,
    score: u32,
    lines: u32,
    level: u32,
    fall_interval_ms: u32,
    /// Time accumulated toward the next gravity step
    drop_timer_ms: u32,
    status: GameStatus,
    /// Row 0 occupancy as of the last spawn attempt (informational)
    topped_out: bool,
    /// Monotonic count of spawned pieces.
    pieces_spawned: u32,
    /// Last lock event (consumed by hosts).
    last_lock: Option<LockEvent>,
}

impl GameState {
    /// Create a new game on the default board with a seeded uniform piece source
    pub fn new(seed: u64) -> Self {
        Self::with_source(UniformSource::new(seed))
    }
}

impl<S: KindSource> GameState<S> {
    /// Create a new game on the default board drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self::from_parts(source, GameConfig::default(), Board::new())
    }
}

impl<S: KindSource, const W: usize, const H: usize> GameState<S, W, H> {
    /// Create a game from a source, a config and a starting board
    ///
    /// The first kind drawn becomes the active piece and the second the queued
    /// one. If the active piece cannot be placed at spawn the game starts already over.
    pub fn from_parts(mut source: S, config: GameConfig, board: Board<W, H>) -> Self {
        let first = Piece::spawned(source.next_kind(), W);
        let level = calculate_level(0, &config);

        let mut state = Self {
            board,
            active: first,
            queued: first,
            source,
            config,
            score: 0,
            lines: 0,
            level,
            fall_interval_ms: get_fall_interval_ms(level, &config),
            drop_timer_ms: 0,
            status: GameStatus::Active,
            topped_out: false,
            pieces_spawned: 0,
            last_lock: None,
        };
        // Promotes `first` and queues a fresh draw.
        state.spawn_next_piece();
        state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn topped_out(&self) -> bool {
        self.topped_out
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn queued(&self) -> &Piece {
        &self.queued
    }

    pub fn board(&self) -> &Board<W, H> {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Take and clear the last lock event.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot<W, H>) {
        out.board = *self.board.rows();
        out.active = ActiveSnapshot::from(self.active);
        out.queued = QueuedSnapshot::from(self.queued);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.status = self.status;
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.topped_out = self.topped_out;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot<W, H> {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the queued piece to active and queue a new one
    ///
    /// The new active piece starts at the spawn origin. If it cannot be placed
    /// there the game is over; this is the only game-over trigger.
    /// Returns whether the spawned piece fits.
    pub fn spawn_next_piece(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }

        let next = Piece::spawned(self.source.next_kind(), W);
        self.active = std::mem::replace(&mut self.queued, next);
        self.active.reset_to_spawn(W);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.topped_out = self.board.is_topped_out();

        if !self.board.can_place(&self.active, 0, 0) {
            self.status = GameStatus::GameOver;
            return false;
        }

        true
    }

    /// Move the active piece one column left (`-1`) or right (`+1`)
    ///
    /// Any other delta is rejected.
    pub fn move_horizontal(&mut self, delta: i32) -> bool {
        if !self.is_active() || !(delta == -1 || delta == 1) {
            return false;
        }
        if !self.board.can_place(&self.active, delta, 0) {
            return false;
        }
        self.active.x += delta;
        true
    }

    /// Move the active piece down one row, awarding soft drop points
    ///
    /// Returns whether the piece moved; a piece that cannot move is not locked here.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_active() || !self.board.can_place(&self.active, 0, 1) {
            return false;
        }
        self.active.y += 1;
        self.add_score(calculate_drop_score(1, false, &self.config));
        true
    }

    /// Drop the active piece as far as it goes, lock it and spawn the next one
    ///
    /// Returns the number of rows traveled.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_active() {
            return 0;
        }

        let mut distance: u32 = 0;
        while self.board.can_place(&self.active, 0, 1) {
            self.active.y += 1;
            distance += 1;
        }

        self.add_score(calculate_drop_score(distance, true, &self.config));
        self.lock_active(distance);
        distance
    }

    /// Rotate the active piece clockwise, trying each of [`WALL_KICKS`] in order
    ///
    /// The first offset that yields a legal placement is applied. If none does,
    /// the piece is left exactly as it was.
    pub fn rotate_active(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }

        let rotated = self.active.rotated();
        for &(dx, dy) in WALL_KICKS.iter() {
            if self.board.can_place(&rotated, dx, dy) {
                self.active = rotated.shifted(dx, dy);
                return true;
            }
        }

        false
    }

    /// Advance gravity by `elapsed_ms`
    ///
    /// Once the accumulated time reaches the fall interval, the piece falls one
    /// row, or locks if it cannot. Returns true when a fall or lock happened.
    pub fn advance_gravity_tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.is_active() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.fall_interval_ms {
            return false;
        }
        self.drop_timer_ms = 0;

        if self.board.can_place(&self.active, 0, 1) {
            self.active.y += 1;
        } else {
            self.lock_active(0);
        }

        true
    }

    /// Flip between active and paused. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Active => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Active,
            GameStatus::GameOver => return false,
        };
        true
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                let was_active = self.is_active();
                self.hard_drop();
                was_active
            }
            GameAction::Rotate => self.rotate_active(),
            GameAction::Pause => self.toggle_pause(),
        }
    }

    /// Lock the active piece, score the cleared lines and spawn the next piece
    fn lock_active(&mut self, drop_distance: u32) {
        let piece = self.active;
        let lines_cleared = self.board.lock(&piece);
        let score_awarded = self.apply_line_clears(lines_cleared);

        self.last_lock = Some(LockEvent {
            kind: piece.kind,
            lines_cleared,
            score_awarded,
            drop_distance,
        });

        self.spawn_next_piece();
    }

    /// Update score, lines, level and gravity after a lock; returns the points awarded
    fn apply_line_clears(&mut self, lines_cleared: u32) -> u32 {
        if lines_cleared == 0 {
            return 0;
        }

        let points = calculate_line_score(lines_cleared);
        self.add_score(points);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.level = calculate_level(self.lines, &self.config);
        self.fall_interval_ms = get_fall_interval_ms(self.level, &self.config);
        points
    }

    fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
