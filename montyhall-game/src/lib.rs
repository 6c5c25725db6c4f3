//! Monty Hall Game Engine
//!
//! Simulation of the three-door puzzle: one car, two goats, a host who always
//! reveals a goat, and a contestant who either stays with or switches from
//! their first pick. Every round resolves both strategies against the same
//! board so batches yield paired comparisons.

pub mod batch;
pub mod board;
pub mod constants;
pub mod contestant;
pub mod door;
pub mod error;
pub mod host;
pub mod numbers;
pub mod outcome;
pub mod round;
pub mod source;
pub mod strategy;
pub mod summary;

// Re-export commonly used types
pub use batch::{BatchConfig, BatchRecord, BatchResult, play_batch, play_n_games};
pub use board::{Board, create_game};
pub use constants::{DEFAULT_ROUNDS, DOOR_COUNT};
pub use contestant::select_door;
pub use door::{Door, Prize, remaining_doors};
pub use error::GameError;
pub use host::open_goat_door;
pub use outcome::{Outcome, determine_winner};
pub use round::{RoundResult, StrategyOutcome, play_game};
pub use source::{ChoiceSource, CountingRng, ScriptedChoices, SimulationRng};
pub use strategy::{Strategy, change_door};
pub use summary::{BatchSummary, ConvergenceGuards, StrategyTally, SummaryRow};

/// Simulation engine owning the random source every round draws from.
#[derive(Debug, Clone)]
pub struct Simulator<S>
where
    S: ChoiceSource,
{
    source: S,
}

impl Simulator<SimulationRng> {
    /// Create a simulator over a reproducible stream derived from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SimulationRng::from_user_seed(seed))
    }

    /// Create a simulator seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SimulationRng::from_entropy())
    }

    /// Create a simulator for `config`, honouring its seed when present.
    #[must_use]
    pub fn for_config(config: &BatchConfig) -> Self {
        config.seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<S> Simulator<S>
where
    S: ChoiceSource,
{
    /// Create a simulator drawing from the provided source.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn create_game(&mut self) -> Board {
        create_game(&mut self.source)
    }

    pub fn select_door(&mut self) -> Door {
        select_door(&mut self.source)
    }

    pub fn open_goat_door(&mut self, board: &Board, pick: Door) -> Door {
        open_goat_door(board, pick, &mut self.source)
    }

    pub fn play_game(&mut self) -> RoundResult {
        play_game(&mut self.source)
    }

    /// Run `n` rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero.
    pub fn play_n_games(&mut self, n: usize) -> Result<BatchResult, GameError> {
        play_n_games(n, &mut self.source)
    }

    /// Run a batch described by `config`; the config's seed is ignored here
    /// because the source is already fixed.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn play_batch(&mut self, config: &BatchConfig) -> Result<BatchResult, GameError> {
        play_batch(config, &mut self.source)
    }
}
