//! City Hunt command-line entry point.

mod cli;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use city_hunt::autoplay::{GameRecord, SimulationConfig, SimulationReport, Simulator};
use city_hunt::core::{Dataset, GameConfig};
use city_hunt::dataset::{self, ValidationPolicy};
use city_hunt::rules::Outcome;
use cli::{resolve_config, Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            dataset,
            config,
            permissive,
        } => run_play(dataset, config, permissive),
        Command::Auto {
            dataset,
            config,
            permissive,
            games,
            seed,
            target,
            random_answers,
        } => {
            init_stderr_logging();
            let session = resolve_config(config.as_deref(), dataset, permissive)?;
            let mut simulation = SimulationConfig::new().with_games(games).with_seed(seed);
            if let Some(target) = target {
                simulation = simulation.with_target(target);
            }
            if random_answers {
                simulation = simulation.with_random_answers();
            }
            run_auto(&session, simulation)
        }
        Command::Validate { dataset, config } => {
            init_stderr_logging();
            let session = resolve_config(config.as_deref(), dataset, false)?;
            run_validate(session.dataset.as_deref())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to a file so the terminal UI is left alone.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_dataset(path: Option<&Path>, policy: ValidationPolicy) -> Result<Dataset> {
    match path {
        Some(path) => dataset::load_path(path, policy)
            .with_context(|| format!("Failed to load dataset {}", path.display())),
        None => dataset::builtin().context("Failed to load built-in dataset"),
    }
}

fn run_play(dataset: Option<PathBuf>, config_path: Option<PathBuf>, permissive: bool) -> Result<()> {
    let config = resolve_config(config_path.as_deref(), dataset, permissive)?;

    init_file_logging(&config.log_file)?;
    info!(config = ?config_path, "Starting City Hunt");

    let data = load_dataset(config.dataset.as_deref(), config.policy)?;
    city_hunt::tui::run(data, config).context("Terminal UI failed")
}

fn run_auto(session: &GameConfig, simulation: SimulationConfig) -> Result<()> {
    let data = load_dataset(session.dataset.as_deref(), session.policy)?;
    let report = Simulator::new(simulation).run(&data)?;
    print_report(&data, &report);
    Ok(())
}

fn print_report(data: &Dataset, report: &SimulationReport) {
    for (n, record) in report.records.iter().enumerate() {
        let target = record
            .target
            .and_then(|id| data.catalog.get(id))
            .map_or_else(|| "(none)".to_string(), |city| city.display_name());
        println!("Game {}: thinking of {}", n + 1, target);
        for entry in record.state.history() {
            println!("  {} {} -> {} left", entry.question, entry.answer, entry.remaining);
        }
        println!("  {}", verdict(data, record));
    }

    let stats = &report.stats;
    println!();
    println!("Games:          {}", stats.games);
    println!("Solved:         {} ({:.0}%)", stats.solved, stats.solve_rate() * 100.0);
    println!("Correct:        {}", stats.correct);
    println!("Exhausted:      {}", stats.exhausted);
    println!("Contradictions: {}", stats.contradictions);
    println!("Avg questions:  {:.2}", stats.avg_questions());
    println!("Games/sec:      {:.0}", stats.games_per_second());
}

fn verdict(data: &Dataset, record: &GameRecord) -> String {
    match record.outcome() {
        Outcome::Solved(id) => {
            let name = data
                .catalog
                .get(id)
                .map_or_else(|| id.to_string(), |city| city.display_name());
            if record.target.is_none() || record.is_correct() {
                format!("Solved: {name}")
            } else {
                format!("Solved: {name} (wrong city)")
            }
        }
        Outcome::Exhausted => {
            let names: Vec<_> = data
                .catalog
                .resolve(record.state.candidates().iter())
                .into_iter()
                .map(|city| city.name.as_str())
                .collect();
            format!("Out of questions: {}", names.join(", "))
        }
        Outcome::Contradiction => "No city matches".to_string(),
        Outcome::InProgress => "Unfinished".to_string(),
    }
}

fn run_validate(path: Option<&Path>) -> Result<()> {
    let record = match path {
        Some(path) => dataset::read_path(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?,
        None => dataset::DatasetRecord::from_json(dataset::BUILTIN_JSON)
            .context("Failed to parse built-in dataset")?,
    };
    let label = path.map_or_else(|| "built-in dataset".to_string(), |p| p.display().to_string());

    let issues = dataset::audit(&record).with_context(|| format!("{label} is malformed"))?;
    if issues.is_empty() {
        println!(
            "{label}: OK ({} cities, {} questions)",
            record.cities.len(),
            record.questions.len()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("  {issue}");
    }
    bail!("{label}: {} validation issue(s)", issues.len())
}
