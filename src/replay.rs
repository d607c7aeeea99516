//! Replay module - scripted, headless sessions
//!
//! A replay script has one step per line. `#` starts a comment and blank lines
//! are skipped. A step is either a game action (any name or key binding accepted
//! by [`GameAction::from_str`]), `tick <ms>` to advance gravity, or `quit` / `q`
//! to stop.
//!
//! ```text
//! # drop an O piece, then let gravity run
//! hardDrop
//! left
//! tick 700
//! quit
//! ```

use anyhow::{anyhow, Context, Result};

use crate::core::{GameState, KindSource};
use crate::types::{GameAction, LockEvent};

/// One parsed script line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    Action(GameAction),
    /// Advance gravity by this many milliseconds
    Tick(u32),
    Quit,
}

impl ReplayStep {
    /// Parse one line; `Ok(None)` for blank lines and comments
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = match line.find('#') {
            Some(i) => &line[..i],
            None => line,
        }
        .trim();

        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };

        let step = match head.to_lowercase().as_str() {
            "tick" => {
                let ms = words
                    .next()
                    .ok_or_else(|| anyhow!("tick needs a duration in ms"))?;
                let ms: u32 = ms
                    .parse()
                    .with_context(|| format!("invalid tick duration {:?}", ms))?;
                ReplayStep::Tick(ms)
            }
            "quit" | "q" => ReplayStep::Quit,
            _ => match GameAction::from_str(head) {
                Some(action) => ReplayStep::Action(action),
                None => return Err(anyhow!("unknown step {:?}", head)),
            },
        };

        if let Some(extra) = words.next() {
            return Err(anyhow!("unexpected argument {:?}", extra));
        }

        Ok(Some(step))
    }
}

/// Parse a whole script
///
/// Errors name the 1-based line: `replay: line 3: unknown step "jump"`.
pub fn parse_script(text: &str) -> Result<Vec<ReplayStep>> {
    let mut steps = Vec::new();
    for (i, line) in text.lines().enumerate() {
        match ReplayStep::parse(line) {
            Ok(Some(step)) => steps.push(step),
            Ok(None) => {}
            Err(e) => return Err(anyhow!("replay: line {}: {:#}", i + 1, e)),
        }
    }
    Ok(steps)
}

/// Summary of a replay run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Steps processed, including the final `quit`
    pub steps_applied: usize,
    pub locks: u32,
    pub lines_cleared: u32,
    pub quit: bool,
}

/// Apply a single step to the game
///
/// Returns the lock event the step caused, if any.
pub fn apply_step<S: KindSource, const W: usize, const H: usize>(
    game: &mut GameState<S, W, H>,
    step: ReplayStep,
) -> Option<LockEvent> {
    match step {
        ReplayStep::Action(action) => {
            game.apply_action(action);
        }
        ReplayStep::Tick(ms) => {
            game.advance_gravity_tick(ms);
        }
        ReplayStep::Quit => {}
    }
    game.take_last_lock()
}

/// Run steps until `quit` or the end of the script
///
/// `on_step` sees the game after every step together with the lock it caused.
pub fn run_script<S, F, const W: usize, const H: usize>(
    game: &mut GameState<S, W, H>,
    steps: &[ReplayStep],
    mut on_step: F,
) -> ReplayReport
where
    S: KindSource,
    F: FnMut(&GameState<S, W, H>, ReplayStep, Option<LockEvent>),
{
    let mut report = ReplayReport::default();

    for &step in steps {
        report.steps_applied += 1;
        if step == ReplayStep::Quit {
            report.quit = true;
            break;
        }

        let lock = apply_step(game, step);
        if let Some(event) = lock {
            report.locks += 1;
            report.lines_cleared += event.lines_cleared;
        }
        on_step(game, step, lock);
    }

    report
}
