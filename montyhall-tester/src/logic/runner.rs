use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};

use montyhall_game::{BatchConfig, BatchResult, BatchSummary, Simulator, Strategy, SummaryRow};

use super::seeds::SeedInfo;

/// One batch executed for a single seed.
#[derive(Debug, Clone, Serialize)]
pub struct SeedRun {
    pub seed: Option<u64>,
    pub rounds: usize,
    pub rows: [SummaryRow; 2],
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
    #[serde(skip)]
    pub batch: BatchResult,
}

impl SeedRun {
    #[must_use]
    pub fn seed_label(&self) -> String {
        SeedInfo { seed: self.seed }.label()
    }

    #[must_use]
    pub const fn summary(&self) -> &BatchSummary {
        self.batch.summary()
    }
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    duration.as_millis().serialize(serializer)
}

pub struct BatchRunner {
    verbose: bool,
}

impl BatchRunner {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run one batch of `rounds` per seed, in seed order.
    pub fn run(&self, rounds: usize, seeds: &[SeedInfo]) -> Result<Vec<SeedRun>> {
        seeds
            .iter()
            .map(|seed| self.run_seed(rounds, *seed))
            .collect()
    }

    pub fn run_seed(&self, rounds: usize, seed: SeedInfo) -> Result<SeedRun> {
        let config = BatchConfig {
            rounds,
            seed: seed.seed,
        };
        let start = Instant::now();
        let batch = Simulator::for_config(&config)
            .play_batch(&config)
            .with_context(|| format!("batch for seed {} failed", seed.label()))?;
        let duration = start.elapsed();

        if self.verbose {
            eprintln!(
                "🎲 Seed {}: {} rounds in {:?} (stay {:.2}, switch {:.2})",
                seed.label().bright_white(),
                rounds,
                duration,
                batch.summary().win_rate(Strategy::Stay),
                batch.summary().win_rate(Strategy::Switch)
            );
        }

        Ok(SeedRun {
            seed: seed.seed,
            rounds,
            rows: batch.summary().rows(),
            duration,
            batch,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_each_seed_in_order() {
        let runner = BatchRunner::new(false);
        let seeds = vec![SeedInfo::from_numeric(1), SeedInfo::from_numeric(2)];
        let runs = runner.run(20, &seeds).unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].seed, Some(1));
        assert_eq!(runs[1].seed, Some(2));
        assert!(runs.iter().all(|r| r.batch.len() == 20));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let runner = BatchRunner::new(true);
        let a = runner.run_seed(50, SeedInfo::from_numeric(9)).unwrap();
        let b = runner.run_seed(50, SeedInfo::from_numeric(9)).unwrap();
        assert_eq!(a.batch, b.batch);
        assert_eq!(a.rows, b.rows);
    }

    #[test]
    fn zero_rounds_surface_game_error() {
        let runner = BatchRunner::new(false);
        let err = runner.run_seed(0, SeedInfo::from_numeric(3)).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("seed 3"));
        assert!(chain.contains("at least one round"));
    }

    #[test]
    fn serializes_without_round_detail() {
        let runner = BatchRunner::new(false);
        let run = runner.run_seed(10, SeedInfo::entropy()).unwrap();
        let json = serde_json::to_string(&run).unwrap();
        assert!(json.contains("\"seed\":null"));
        assert!(json.contains("duration_ms"));
        assert!(json.contains("win_proportion"));
        assert!(!json.contains("batch"));
    }
}
