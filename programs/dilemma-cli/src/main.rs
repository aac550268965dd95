//! Terminal front end for the Iterated Prisoner's Dilemma simulator

mod render;

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dilemma_engine::{Session, SimulationConfig, StrategyKind, StrategyRegistry};

#[derive(Debug, Parser)]
#[command(name = "dilemma", version)]
#[command(about = "Simulate the Iterated Prisoner's Dilemma between two strategies")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List available strategies
    List,
    /// Play two strategies against each other
    Run(RunArgs),
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Strategy key for player 1 (defaults to the configured strategy)
    #[arg(long, value_parser = strategy_keys())]
    a: Option<String>,

    /// Strategy key for player 2 (defaults to the configured strategy)
    #[arg(long, value_parser = strategy_keys())]
    b: Option<String>,

    /// Number of rounds; values above the configured maximum are clamped
    #[arg(long, allow_hyphen_values = true)]
    rounds: Option<String>,

    /// Seed for the Random strategy (fresh each run when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between rounds, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// JSON file with simulation defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the finished run as JSON instead of a round-by-round table
    #[arg(long)]
    json: bool,
}

fn strategy_keys() -> PossibleValuesParser {
    PossibleValuesParser::new(StrategyKind::ALL.map(StrategyKind::key))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match args.command {
        Command::List => list_strategies(),
        Command::Run(run_args) => run_simulation(&run_args),
    }
}

fn list_strategies() -> Result<()> {
    for info in StrategyRegistry::builtin().entries() {
        println!("{:<26}{}", info.key.bright_white().bold(), info.label);
        println!("{:<26}{}", "", info.description.dimmed());
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SimulationConfig> {
    let Some(path) = path else {
        return Ok(SimulationConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SimulationConfig::from_json(&json).with_context(|| format!("invalid config {}", path.display()))
}

fn run_simulation(args: &RunArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random::<u64>);
    let mut session = Session::new(config, StrategyRegistry::builtin())?;

    if let Some(key) = &args.a {
        session.set_strategy_a(key);
    }
    if let Some(key) = &args.b {
        session.set_strategy_b(key);
    }
    if let Some(rounds) = &args.rounds {
        session.set_round_count_input(rounds)?;
    }

    log::info!(
        "{} vs {} for {} rounds (seed {})",
        session.strategy_a().key(),
        session.strategy_b().key(),
        session.round_count()?,
        seed
    );
    session.start(seed)?;

    if args.json {
        let run = session.finish().context("simulation did not start")?;
        println!("{}", serde_json::to_string_pretty(run)?);
        return Ok(());
    }

    println!(
        "{}",
        render::header(session.strategy_a(), session.strategy_b())
    );
    let delay = Duration::from_millis(args.delay_ms);
    while let Some(result) = session.step() {
        println!("{}", render::round_line(&result));
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    let run = session.run().context("simulation did not start")?;
    println!("{}", render::summary(run, session.strategy_a(), session.strategy_b()));
    Ok(())
}
