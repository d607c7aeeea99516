//! RNG module - where new pieces come from
//!
//! The controller never calls a global random function. It draws kinds from a
//! [`KindSource`], so a host can swap in a seeded generator, a recorded
//! sequence, or any closure.
//!
//! - [`UniformSource`]: unweighted uniform choice over the 7 kinds, seeded
//! - [`ScriptedSource`]: a fixed list of kinds replayed in order, cycling

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::ShapeKind;

/// Supplies the kind of every newly queued piece
pub trait KindSource {
    fn next_kind(&mut self) -> ShapeKind;
}

impl<F> KindSource for F
where
    F: FnMut() -> ShapeKind,
{
    fn next_kind(&mut self) -> ShapeKind {
        self()
    }
}

/// Uniformly random piece generator
///
/// Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct UniformSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl UniformSource {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator with a seed drawn from the process RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created with (for restarting with the same sequence)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl KindSource for UniformSource {
    fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.rng.random_range(0..ShapeKind::ALL.len())]
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Pre-recorded piece sequence
///
/// Replays the kinds in order and starts over when it runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSource {
    kinds: Vec<ShapeKind>,
    index: usize,
}

impl ScriptedSource {
    /// Create a source from a list of kinds
    ///
    /// Returns `None` if the list is empty.
    pub fn new(kinds: impl IntoIterator<Item = ShapeKind>) -> Option<Self> {
        let kinds: Vec<ShapeKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            return None;
        }
        Some(Self { kinds, index: 0 })
    }

    /// Parse a sequence like `"IOTSZJL"` (case-insensitive, whitespace and commas ignored)
    ///
    /// Returns `None` on an unknown letter or an empty sequence.
    pub fn parse(s: &str) -> Option<Self> {
        let mut kinds = Vec::with_capacity(s.len());
        for ch in s.chars() {
            if ch.is_whitespace() || ch == ',' {
                continue;
            }
            kinds.push(ShapeKind::from_str(ch.encode_utf8(&mut [0; 4]))?);
        }
        Self::new(kinds)
    }

    /// Kinds in replay order
    pub fn kinds(&self) -> &[ShapeKind] {
        &self.kinds
    }

    /// Peek at the next kind without consuming it
    pub fn peek(&self) -> ShapeKind {
        self.kinds[self.index]
    }
}

impl KindSource for ScriptedSource {
    fn next_kind(&mut self) -> ShapeKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}
