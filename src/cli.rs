use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::{MersenneTwister, Puzzle, Solution, Solver, format_expression};
use log::{LevelFilter, debug, info};

/// Seed used when none is given on the command line
pub const DEFAULT_RUN_SEED: u32 = 4539;

/// Verbosity of the diagnostics written to stderr; the report always goes to stdout
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Countdown - generate numbers-round puzzles and find the closest expression
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Generate Countdown numbers-round puzzles and search for the closest expression")]
#[command(version)]
pub struct CliArgs {
    /// Seed for the random generator
    #[arg(short, long, default_value_t = DEFAULT_RUN_SEED, conflicts_with = "key")]
    pub seed: u32,

    /// Seed from a comma separated key instead of a single integer
    #[arg(short, long, value_delimiter = ',')]
    pub key: Option<Vec<u32>>,

    /// Number of puzzles to generate and solve
    #[arg(
        short = 'n',
        long,
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub trials: u32,

    /// Solve this target instead of generating puzzles
    #[arg(long, requires = "tiles")]
    pub target: Option<u32>,

    /// Comma separated tiles for --target
    #[arg(long, value_delimiter = ',', requires = "target")]
    pub tiles: Option<Vec<u32>>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// How the random generator is seeded
#[derive(Debug, Clone, PartialEq)]
pub enum SeedSource {
    Single(u32),
    Key(Vec<u32>),
}

/// What the run solves
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    Generated { seed: SeedSource, trials: u32 },
    Fixed(Puzzle),
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub mode: RunMode,
    pub log_level: LogLevel,
}

/// Turn parsed arguments into a validated configuration
pub fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let mode = match (args.target, args.tiles) {
        (Some(target), Some(tiles)) => {
            RunMode::Fixed(Puzzle::new(target, tiles).context("Invalid puzzle")?)
        }
        _ => {
            let seed = match args.key {
                Some(key) => SeedSource::Key(key),
                None => SeedSource::Single(args.seed),
            };
            RunMode::Generated {
                seed,
                trials: args.trials,
            }
        }
    };

    Ok(CliConfig {
        mode,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

/// Route library diagnostics through `env_logger`; `RUST_LOG` can still refine modules
pub fn init_logging(log_level: LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .format_target(false)
        .try_init()
        .context("Logger was already initialized")
}

/// Build the generator shared by every trial of a run
pub fn build_rng(seed: &SeedSource) -> Result<MersenneTwister> {
    match seed {
        SeedSource::Single(value) => Ok(MersenneTwister::new(*value)),
        SeedSource::Key(key) => MersenneTwister::from_key(key).context("Invalid seed key"),
    }
}

pub fn format_setup(puzzle: &Puzzle) -> String {
    let tiles = puzzle
        .tiles()
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("Target: {}\nTiles: {}", puzzle.target(), tiles)
}

pub fn format_result(solution: &Solution) -> String {
    let closest = solution
        .closest_result
        .map_or_else(|| "none".to_string(), |value| value.to_string());

    if solution.expression.is_empty() {
        format!("Closest result: {}\nNo valid solution found.", closest)
    } else {
        format!(
            "Closest result: {}\nExpression: {}",
            closest,
            format_expression(&solution.expression)
        )
    }
}

/// Solve the solver's current puzzle and print the report
fn run_trial(solver: &mut Solver) -> Result<()> {
    if let Some(puzzle) = solver.puzzle() {
        println!("{}", format_setup(puzzle));
    }

    let start = Instant::now();
    let solution = solver.solve().context("Search failed")?;
    let elapsed = start.elapsed();

    println!("{}", format_result(&solution));
    println!("Time spent : {} ms", elapsed.as_millis());
    println!();
    debug!("Explored {} nodes", solution.nodes_explored);
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(config.log_level)?;

    match config.mode {
        RunMode::Fixed(puzzle) => {
            info!("Solving a single supplied puzzle");
            run_trial(&mut Solver::with_puzzle(puzzle))
        }
        RunMode::Generated { seed, trials } => {
            info!("Running {} trials with seed {:?}", trials, seed);
            let mut rng = build_rng(&seed)?;
            for trial in 1..=trials {
                debug!("Trial {}/{}", trial, trials);
                let mut solver = Solver::new();
                solver.generate_target_and_tiles(&mut rng);
                run_trial(&mut solver)?;
            }
            Ok(())
        }
    }
}
