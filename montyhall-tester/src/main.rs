mod logic;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use logic::{BatchRunner, SeedRun, resolve_seed_inputs, validate_convergence};
use montyhall_game::{BatchConfig, ConvergenceGuards};
use util::split_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Coloured summary tables
    Console,
    /// Per-seed summaries as JSON
    Json,
    /// Per-seed summary table in Markdown
    Markdown,
    /// Every round as `seed,round,strategy,outcome` rows
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "montyhall-tester", version)]
#[command(about = "Batch runner and statistical acceptance checks for the Monty Hall simulator")]
struct Args {
    /// Rounds per seed (falls back to the config file, then 100)
    #[arg(long)]
    rounds: Option<usize>,

    /// Seeds to run (comma-separated integers, or `random` for fresh entropy)
    #[arg(long)]
    seeds: Option<String>,

    /// Optional JSON batch configuration (`{"rounds": 500, "seed": 7}`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enforce long-run win rates (forces ≥10,000 rounds per seed)
    #[arg(long)]
    acceptance: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    announce_banner();

    let config = load_config(args.config.as_deref())?;
    let guards = ConvergenceGuards::default();
    let rounds = compute_rounds(&args, &config, &guards);
    let seeds = resolve_seed_inputs(&seed_tokens(&args, &config))?;

    let start_time = Instant::now();
    let runs = BatchRunner::new(args.verbose).run(rounds, &seeds)?;

    write_reports(&args, &runs, &guards, start_time)?;

    if args.acceptance {
        validate_convergence(&runs, &guards)?;
        eprintln!("{}", "✅ Acceptance targets met".green().bold());
    }

    Ok(())
}

fn announce_banner() {
    eprintln!("{}", "🚪 Monty Hall Batch Tester".bright_cyan().bold());
    eprintln!("{}", "==========================".cyan());
}

fn load_config(path: Option<&Path>) -> Result<BatchConfig> {
    let Some(path) = path else {
        return Ok(BatchConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: BatchConfig = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse batch config {}", path.display()))?;
    log::debug!("loaded batch config {config:?} from {}", path.display());
    Ok(config)
}

fn compute_rounds(args: &Args, config: &BatchConfig, guards: &ConvergenceGuards) -> usize {
    let requested = args.rounds.unwrap_or(config.rounds);
    if !args.acceptance {
        return requested;
    }
    if requested < guards.min_rounds {
        eprintln!(
            "🔁 Acceptance mode enabled: increasing rounds per seed from {requested} to {}",
            guards.min_rounds
        );
    } else {
        eprintln!("🔁 Acceptance mode enabled: using {requested} rounds per seed");
    }
    requested.max(guards.min_rounds)
}

fn seed_tokens(args: &Args, config: &BatchConfig) -> Vec<String> {
    match (&args.seeds, config.seed) {
        (Some(raw), _) => split_csv(raw),
        (None, Some(seed)) => vec![seed.to_string()],
        (None, None) => Vec::new(),
    }
}

fn write_reports(
    args: &Args,
    runs: &[SeedRun],
    guards: &ConvergenceGuards,
    start_time: Instant,
) -> Result<()> {
    let mut sink = ReportSink::open(args.output.as_deref())?;

    match args.report {
        ReportFormat::Json => logic::reports::generate_json_report(&mut sink, runs)?,
        ReportFormat::Csv => logic::reports::generate_csv_report(&mut sink, runs)?,
        ReportFormat::Markdown => {
            logic::reports::generate_markdown_report(&mut sink, runs, guards)?;
        }
        ReportFormat::Console => {
            let duration = start_time.elapsed();
            logic::reports::generate_console_report(&mut sink, runs, guards, duration)?;
            writeln!(&mut sink)?;
            writeln!(&mut sink, "🏁 Total time: {duration:?}")?;
        }
    }

    sink.finish()
}

/// Buffered destination for a rendered report: stdout unless `--output` names a file.
struct ReportSink {
    writer: BufWriter<Box<dyn Write>>,
    path: Option<PathBuf>,
}

impl ReportSink {
    fn open(path: Option<&Path>) -> Result<Self> {
        let inner: Box<dyn Write> = match path {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            ),
            None => Box::new(stdout()),
        };
        Ok(Self {
            writer: BufWriter::new(inner),
            path: path.map(Path::to_path_buf),
        })
    }

    fn destination(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| "stdout".to_string(), |path| path.display().to_string())
    }

    fn finish(mut self) -> Result<()> {
        let destination = self.destination();
        self.writer
            .flush()
            .with_context(|| format!("failed to flush report to {destination}"))?;
        log::debug!("report written to {destination}");
        Ok(())
    }
}

impl Write for ReportSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
