//! Config module - host-overridable gameplay constants
//!
//! Defaults come from the constants in the types crate. Board dimensions are not
//! part of the runtime config: they are the const generic parameters of
//! [`Board`](crate::Board) and [`GameState`](crate::GameState).

use crate::types::{
    FALL_INTERVAL_STEP_MS, HARD_DROP_POINTS_PER_ROW, INITIAL_FALL_INTERVAL_MS, LINES_PER_LEVEL,
    MIN_FALL_INTERVAL_MS, SOFT_DROP_POINTS,
};

/// Timing and scoring knobs for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    /// Gravity interval at level 1
    pub initial_fall_interval_ms: u32,
    /// Interval reduction per level
    pub fall_interval_step_ms: u32,
    /// Gravity floor
    pub min_fall_interval_ms: u32,
    /// Lines per level (0 keeps the session at level 1)
    pub lines_per_level: u32,
    pub soft_drop_points: u32,
    pub hard_drop_points_per_row: u32,
}

impl GameConfig {
    /// Override the level-1 gravity interval
    ///
    /// Values below the gravity floor are raised to it.
    pub fn with_initial_fall_interval_ms(mut self, ms: u32) -> Self {
        self.initial_fall_interval_ms = ms.max(self.min_fall_interval_ms).max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_fall_interval_ms: INITIAL_FALL_INTERVAL_MS,
            fall_interval_step_ms: FALL_INTERVAL_STEP_MS,
            min_fall_interval_ms: MIN_FALL_INTERVAL_MS,
            lines_per_level: LINES_PER_LEVEL,
            soft_drop_points: SOFT_DROP_POINTS,
            hard_drop_points_per_row: HARD_DROP_POINTS_PER_ROW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.initial_fall_interval_ms, 700);
        assert_eq!(config.min_fall_interval_ms, 100);
        assert_eq!(config.lines_per_level, 10);
    }

    #[test]
    fn test_initial_interval_override_keeps_floor() {
        let config = GameConfig::default().with_initial_fall_interval_ms(50);
        assert_eq!(config.initial_fall_interval_ms, 100);
        assert_eq!(config.min_fall_interval_ms, 100);

        let config = GameConfig::default().with_initial_fall_interval_ms(400);
        assert_eq!(config.initial_fall_interval_ms, 400);
        assert_eq!(crate::scoring::get_fall_interval_ms(6, &config), 100);

        let config = GameConfig {
            min_fall_interval_ms: 0,
            ..GameConfig::default()
        }
        .with_initial_fall_interval_ms(0);
        assert_eq!(config.initial_fall_interval_ms, 1);
    }
}
