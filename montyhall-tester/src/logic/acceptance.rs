use anyhow::{Result, ensure};
use montyhall_game::{ConvergenceGuards, Strategy};

use super::runner::SeedRun;

/// Fail unless every run is large enough and lands within tolerance of the
/// long-run stay and switch win rates.
pub fn validate_convergence(runs: &[SeedRun], guards: &ConvergenceGuards) -> Result<()> {
    ensure!(!runs.is_empty(), "No batches were run");
    for run in runs {
        ensure!(
            run.rounds >= guards.min_rounds,
            "Seed {} ran {} rounds; acceptance needs at least {}",
            run.seed_label(),
            run.rounds,
            guards.min_rounds
        );
        for strategy in Strategy::ALL {
            let deviation = guards.deviation(run.summary(), strategy);
            ensure!(
                deviation <= guards.tolerance,
                "{strategy} win rate {:.4} for seed {} misses target {:.4} by {deviation:.4} (tolerance {:.2})",
                run.summary().win_rate(strategy),
                run.seed_label(),
                guards.target(strategy),
                guards.tolerance
            );
        }
    }
    Ok(())
}
