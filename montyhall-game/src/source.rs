//! Random-draw port used by every stochastic step of a round.
//!
//! The game never reaches for an ambient RNG; each operation draws through a
//! [`ChoiceSource`] handed in by the caller, so a seeded stream or a fixed
//! script can stand in for fresh entropy.
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Uniform choice among a finite number of options.
pub trait ChoiceSource {
    /// Return an index in `0..len`. Callers always pass `len >= 1`.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Default seeded stream used by the simulator.
pub type SimulationRng = CountingRng<ChaCha20Rng>;

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl<R> CountingRng<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng, draws: 0 }
    }

    /// Number of choices drawn from this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl CountingRng<ChaCha20Rng> {
    /// Construct the stream from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }

    /// Construct the stream from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha20Rng::from_entropy())
    }
}

impl<R: RngCore> ChoiceSource for CountingRng<R> {
    fn choose_index(&mut self, len: usize) -> usize {
        self.draws = self.draws.saturating_add(1);
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed script of choice indices.
///
/// Each scripted value is reduced modulo the number of options offered, and
/// the script wraps around once exhausted. An empty script always answers 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedChoices {
    script: Vec<usize>,
    cursor: usize,
    draws: u64,
}

impl ScriptedChoices {
    #[must_use]
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
            draws: 0,
        }
    }

    /// Number of choices answered so far.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl ChoiceSource for ScriptedChoices {
    fn choose_index(&mut self, len: usize) -> usize {
        self.draws = self.draws.saturating_add(1);
        if self.script.is_empty() || len == 0 {
            return 0;
        }
        let value = self.script.get(self.cursor).copied().unwrap_or(0);
        self.cursor = (self.cursor + 1) % self.script.len();
        value % len
    }
}

/// Draw one of `options` uniformly through `source`.
///
/// # Panics
///
/// Panics when `options` is empty; every caller offers at least one door.
pub(crate) fn choose<T: Copy, S: ChoiceSource + ?Sized>(source: &mut S, options: &[T]) -> T {
    assert!(!options.is_empty(), "choice requires at least one option");
    let index = source.choose_index(options.len()) % options.len();
    options[index]
}
