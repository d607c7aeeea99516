//! Scoring module - points, levels and gravity
//!
//! Line clears score 100 / 300 / 500 for one to three lines and `800 * (n - 3)`
//! for four or more, so four lines give exactly 800. The level is
//! `1 + lines / 10` and gravity speeds up 60ms per level down to a 100ms floor.

use crate::config::GameConfig;
use crate::types::{LINE_SCORES, MULTI_LINE_SCORE};

/// Points for clearing `lines` rows with a single lock
pub fn calculate_line_score(lines: u32) -> u32 {
    match lines {
        0..=3 => LINE_SCORES[lines as usize],
        n => MULTI_LINE_SCORE.saturating_mul(n - 3),
    }
}

/// Calculate drop score
/// soft drop: points per row moved, hard drop: points per row traveled
pub fn calculate_drop_score(rows: u32, is_hard_drop: bool, config: &GameConfig) -> u32 {
    let per_row = if is_hard_drop {
        config.hard_drop_points_per_row
    } else {
        config.soft_drop_points
    };
    rows.saturating_mul(per_row)
}

/// Level management
/// Level starts at 1 and increases every `lines_per_level` lines
pub fn calculate_level(total_lines: u32, config: &GameConfig) -> u32 {
    match config.lines_per_level {
        0 => 1,
        per_level => 1 + total_lines / per_level,
    }
}

/// Gravity interval for a level (in milliseconds)
///
/// `max(min, initial - (level - 1) * step)`, never below 1ms; never increases with level.
pub fn get_fall_interval_ms(level: u32, config: &GameConfig) -> u32 {
    let speedup = level
        .saturating_sub(1)
        .saturating_mul(config.fall_interval_step_ms);
    config
        .initial_fall_interval_ms
        .saturating_sub(speedup)
        .max(config.min_fall_interval_ms)
        .max(1)
}
