use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use montyhall_game::{BatchSummary, ConvergenceGuards, RoundResult};

use super::SeedRun;

fn pooled_summary(runs: &[SeedRun]) -> BatchSummary {
    let rounds: Vec<RoundResult> = runs
        .iter()
        .flat_map(|run| run.batch.rounds().iter().copied())
        .collect();
    BatchSummary::from_rounds(&rounds)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Convergence {
    TooFewRounds,
    Converged,
    Drifted,
}

impl Convergence {
    fn of(run: &SeedRun, guards: &ConvergenceGuards) -> Self {
        if run.rounds < guards.min_rounds {
            Self::TooFewRounds
        } else if guards.is_converged(run.summary()) {
            Self::Converged
        } else {
            Self::Drifted
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::TooFewRounds => "n/a",
            Self::Converged => "yes",
            Self::Drifted => "no",
        }
    }
}

pub fn generate_console_report<W: Write>(
    out: &mut W,
    runs: &[SeedRun],
    guards: &ConvergenceGuards,
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Monty Hall Batch Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "===========================".cyan())?;
    writeln!(out, "Seeds: {}", runs.len())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for run in runs {
        writeln!(
            out,
            "🎲 Seed {} ({} rounds, {:?})",
            run.seed_label().bold(),
            run.rounds,
            run.duration
        )?;
        for line in run.summary().to_string().lines() {
            writeln!(out, "   {line}")?;
        }
        let status = match Convergence::of(run, guards) {
            Convergence::Converged => "✅ converged".green(),
            Convergence::Drifted => "❌ outside tolerance".red(),
            Convergence::TooFewRounds => "➖ too few rounds to judge".yellow(),
        };
        writeln!(out, "   Convergence: {status}")?;
        writeln!(out)?;
    }

    if runs.len() > 1 {
        writeln!(out, "{}", "🧮 Pooled Across Seeds".bright_yellow().bold())?;
        writeln!(out, "{}", "======================".yellow())?;
        writeln!(out, "{}", pooled_summary(runs))?;
    }
    Ok(())
}

pub fn generate_json_report<W: Write>(out: &mut W, runs: &[SeedRun]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(runs)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write>(
    out: &mut W,
    runs: &[SeedRun],
    guards: &ConvergenceGuards,
) -> Result<()> {
    writeln!(out, "# Monty Hall Batch Results\n")?;
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Seeds**: {}", runs.len())?;
    let total_rounds: usize = runs.iter().map(|run| run.rounds).sum();
    writeln!(out, "- **Total rounds**: {total_rounds}")?;
    writeln!(out, "- **Tolerance**: ±{:.2}\n", guards.tolerance)?;

    writeln!(out, "## Per Seed\n")?;
    writeln!(
        out,
        "| Seed | Rounds | Stay WIN | Stay LOSE | Switch WIN | Switch LOSE | Converged |"
    )?;
    writeln!(out, "|---|---|---|---|---|---|---|")?;
    for run in runs {
        let [stay, switch] = run.rows;
        writeln!(
            out,
            "| {} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {} |",
            run.seed_label(),
            run.rounds,
            stay.win_proportion,
            stay.lose_proportion,
            switch.win_proportion,
            switch.lose_proportion,
            Convergence::of(run, guards).label()
        )?;
    }
    Ok(())
}

/// One row per strategy per round: `seed,round,strategy,outcome`.
pub fn generate_csv_report<W: Write>(out: &mut W, runs: &[SeedRun]) -> Result<()> {
    writeln!(out, "seed,round,strategy,outcome")?;
    for run in runs {
        let label = run.seed_label();
        for record in run.batch.records() {
            writeln!(
                out,
                "{label},{},{},{}",
                record.round, record.strategy, record.outcome
            )?;
        }
    }
    Ok(())
}
