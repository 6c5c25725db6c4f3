//! Strategy × outcome contingency statistics for a batch of rounds.
//!
//! Computing the table is pure; rendering it lives in the [`fmt::Display`]
//! implementation so callers decide where (or whether) it is shown.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    ACCEPTANCE_MIN_ROUNDS, DEFAULT_CONVERGENCE_TOLERANCE, EXPECTED_STAY_WIN_RATE,
    EXPECTED_SWITCH_WIN_RATE, REPORT_DECIMALS,
};
use crate::numbers::{ratio, round_to_decimals};
use crate::outcome::Outcome;
use crate::round::RoundResult;
use crate::strategy::Strategy;

/// Win/lose counts for one strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyTally {
    pub wins: usize,
    pub losses: usize,
}

impl StrategyTally {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.wins + self.losses
    }

    #[must_use]
    pub const fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Win => self.wins,
            Outcome::Lose => self.losses,
        }
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
        }
    }
}

/// Row of the rendered summary table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub strategy: Strategy,
    pub wins: usize,
    pub losses: usize,
    pub win_proportion: f64,
    pub lose_proportion: f64,
}

/// Row-normalised contingency table of strategy × outcome.
///
/// Only built from rounds, so it serialises but never deserialises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    rounds: usize,
    tallies: [StrategyTally; 2],
}

impl BatchSummary {
    #[must_use]
    pub fn from_rounds(rounds: &[RoundResult]) -> Self {
        let mut summary = Self::default();
        for round in rounds {
            summary.record(round);
        }
        summary
    }

    pub(crate) fn record(&mut self, round: &RoundResult) {
        self.rounds += 1;
        for record in round.records() {
            self.tallies[record.strategy.ordinal()].record(record.outcome);
        }
    }

    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub const fn tally(&self, strategy: Strategy) -> StrategyTally {
        self.tallies[strategy.ordinal()]
    }

    /// Unrounded share of `strategy`'s rounds that ended in `outcome`.
    #[must_use]
    pub fn proportion(&self, strategy: Strategy, outcome: Outcome) -> f64 {
        let tally = self.tally(strategy);
        ratio(tally.count(outcome), tally.total())
    }

    #[must_use]
    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        self.proportion(strategy, Outcome::Win)
    }

    /// Share rounded to hundredths. The lose share is taken as the complement
    /// of the rounded win share so each row sums to exactly 1.00.
    #[must_use]
    pub fn rounded_proportion(&self, strategy: Strategy, outcome: Outcome) -> f64 {
        if self.tally(strategy).total() == 0 {
            return 0.0;
        }
        let win = round_to_decimals(self.win_rate(strategy), REPORT_DECIMALS);
        match outcome {
            Outcome::Win => win,
            Outcome::Lose => round_to_decimals(1.0 - win, REPORT_DECIMALS),
        }
    }

    #[must_use]
    pub fn rows(&self) -> [SummaryRow; 2] {
        Strategy::ALL.map(|strategy| {
            let tally = self.tally(strategy);
            SummaryRow {
                strategy,
                wins: tally.wins,
                losses: tally.losses,
                win_proportion: self.rounded_proportion(strategy, Outcome::Win),
                lose_proportion: self.rounded_proportion(strategy, Outcome::Lose),
            }
        })
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10}", "strategy")?;
        for outcome in Outcome::ALL {
            write!(f, "{:>7}", outcome.as_str())?;
        }
        writeln!(f)?;
        for row in self.rows() {
            writeln!(
                f,
                "{:<10}{:>7.2}{:>7.2}",
                row.strategy.as_str(),
                row.win_proportion,
                row.lose_proportion
            )?;
        }
        write!(f, "({} rounds)", self.rounds)
    }
}

/// Long-run targets a large batch must land near.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceGuards {
    #[serde(default = "ConvergenceGuards::default_stay_target")]
    pub stay_target: f64,
    #[serde(default = "ConvergenceGuards::default_switch_target")]
    pub switch_target: f64,
    #[serde(default = "ConvergenceGuards::default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "ConvergenceGuards::default_min_rounds")]
    pub min_rounds: usize,
}

impl ConvergenceGuards {
    const fn default_stay_target() -> f64 {
        EXPECTED_STAY_WIN_RATE
    }

    const fn default_switch_target() -> f64 {
        EXPECTED_SWITCH_WIN_RATE
    }

    const fn default_tolerance() -> f64 {
        DEFAULT_CONVERGENCE_TOLERANCE
    }

    const fn default_min_rounds() -> usize {
        ACCEPTANCE_MIN_ROUNDS
    }

    #[must_use]
    pub const fn target(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Stay => self.stay_target,
            Strategy::Switch => self.switch_target,
        }
    }

    /// Absolute distance between the observed win rate and its target.
    #[must_use]
    pub fn deviation(&self, summary: &BatchSummary, strategy: Strategy) -> f64 {
        (summary.win_rate(strategy) - self.target(strategy)).abs()
    }

    #[must_use]
    pub fn is_converged(&self, summary: &BatchSummary) -> bool {
        Strategy::ALL
            .iter()
            .all(|strategy| self.deviation(summary, *strategy) <= self.tolerance)
    }
}

impl Default for ConvergenceGuards {
    fn default() -> Self {
        Self {
            stay_target: Self::default_stay_target(),
            switch_target: Self::default_switch_target(),
            tolerance: Self::default_tolerance(),
            min_rounds: Self::default_min_rounds(),
        }
    }
}
