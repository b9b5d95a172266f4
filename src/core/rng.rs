//! Random outcome sources.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine draws through `RandomSource`, never a global
//! - **Deterministic**: `GameRng` with the same seed produces the same game
//! - **Checkpointable**: `GameRngState` captures position in O(1)
//! - **Scriptable**: `ScriptedRng` replays a fixed list of draws for tests
//!
//! ```
//! use water_level::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range(-10..6), b.gen_range(-10..6));
//! ```

use std::collections::VecDeque;
use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the engine's two kinds of random draw.
///
/// Implementations must return values inside the requested range.
pub trait RandomSource {
    /// Draw an integer uniformly from a half-open range.
    fn gen_range(&mut self, range: Range<i32>) -> i32;

    /// Draw an index uniformly from `0..len`.
    fn gen_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn gen_range(&mut self, range: Range<i32>) -> i32 {
        (**self).gen_range(range)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        (**self).gen_index(len)
    }
}

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn gen_range(&mut self, range: Range<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG position.
///
/// Uses the ChaCha8 word position, so capture cost does not grow with
/// the number of draws.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of draws.
///
/// Each call consumes the next scripted value. Values are clamped into
/// the requested range; once the script runs out every draw returns the
/// low end of the range.
///
/// ```
/// use water_level::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([20, 0, -10]);
/// assert_eq!(rng.gen_range(-35..21), 20);
/// assert_eq!(rng.gen_index(3), 0);
/// assert_eq!(rng.gen_range(-10..6), -10);
/// assert!(rng.is_exhausted());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: VecDeque<i32>,
}

impl ScriptedRng {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = i32>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Append more draws to the end of the script.
    pub fn extend(&mut self, more: impl IntoIterator<Item = i32>) {
        self.script.extend(more);
    }

    /// Number of draws left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl RandomSource for ScriptedRng {
    fn gen_range(&mut self, range: Range<i32>) -> i32 {
        let low = range.start;
        let high = (range.end - 1).max(low);
        self.script.pop_front().map_or(low, |v| v.clamp(low, high))
    }

    fn gen_index(&mut self, len: usize) -> usize {
        let last = len.saturating_sub(1);
        self.script
            .pop_front()
            .map_or(0, |v| usize::try_from(v).unwrap_or(0).min(last))
    }
}
