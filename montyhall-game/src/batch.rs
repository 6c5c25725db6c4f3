//! Batch runner: repeated rounds plus their aggregated statistics.
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ROUNDS;
use crate::error::GameError;
use crate::outcome::Outcome;
use crate::round::{RoundResult, play_game};
use crate::source::ChoiceSource;
use crate::strategy::Strategy;
use crate::summary::BatchSummary;

/// Batch settings, loadable from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "BatchConfig::default_rounds")]
    pub rounds: usize,
    /// Seed for a reproducible stream; `None` draws fresh entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BatchConfig {
    const fn default_rounds() -> usize {
        DEFAULT_ROUNDS
    }

    #[must_use]
    pub const fn with_rounds(rounds: usize) -> Self {
        Self { rounds, seed: None }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidRoundCount`] when `rounds` is zero.
    pub const fn validate(&self) -> Result<(), GameError> {
        if self.rounds == 0 {
            return Err(GameError::InvalidRoundCount {
                rounds: self.rounds,
            });
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::with_rounds(Self::default_rounds())
    }
}

/// Flattened `(round, strategy, outcome)` row; round numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub round: usize,
    pub strategy: Strategy,
    pub outcome: Outcome,
}

/// Every round of a batch, in play order, with the derived summary.
///
/// Only the rounds are read back when deserialising; the summary is always
/// recomputed from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BatchRounds")]
pub struct BatchResult {
    rounds: Vec<RoundResult>,
    summary: BatchSummary,
}

#[derive(Debug, Clone, Deserialize)]
struct BatchRounds {
    rounds: Vec<RoundResult>,
}

impl From<BatchRounds> for BatchResult {
    fn from(batch: BatchRounds) -> Self {
        Self::from_rounds(batch.rounds)
    }
}

impl BatchResult {
    #[must_use]
    pub fn from_rounds(rounds: Vec<RoundResult>) -> Self {
        let summary = BatchSummary::from_rounds(&rounds);
        Self { rounds, summary }
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    #[must_use]
    pub const fn summary(&self) -> &BatchSummary {
        &self.summary
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Two rows per round, stay before switch.
    pub fn records(&self) -> impl Iterator<Item = BatchRecord> + '_ {
        self.rounds.iter().enumerate().flat_map(|(idx, round)| {
            round.records().map(|record| BatchRecord {
                round: idx + 1,
                strategy: record.strategy,
                outcome: record.outcome,
            })
        })
    }
}

/// Run `config.rounds` rounds against `source` and summarise them.
///
/// The rendered summary table is written to the log at `info` level.
///
/// # Errors
///
/// Returns [`GameError::InvalidRoundCount`] before any round is played when the
/// configuration asks for zero rounds.
pub fn play_batch<S: ChoiceSource + ?Sized>(
    config: &BatchConfig,
    source: &mut S,
) -> Result<BatchResult, GameError> {
    config.validate()?;
    let mut rounds = Vec::with_capacity(config.rounds);
    let mut summary = BatchSummary::default();
    for _ in 0..config.rounds {
        let round = play_game(source);
        summary.record(&round);
        rounds.push(round);
    }
    log::info!("batch of {} rounds complete\n{summary}", config.rounds);
    Ok(BatchResult { rounds, summary })
}

/// Run `n` rounds; see [`play_batch`].
///
/// # Errors
///
/// Returns [`GameError::InvalidRoundCount`] when `n` is zero.
pub fn play_n_games<S: ChoiceSource + ?Sized>(
    n: usize,
    source: &mut S,
) -> Result<BatchResult, GameError> {
    play_batch(&BatchConfig::with_rounds(n), source)
}
