use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::solver::config::{DEFAULT_CHUNK_SIZE, DEFAULT_TOLERANCE};
use countdown::{ExpressionSolver, SolverConfig, validate_numbers};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Solve the Countdown numbers game
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(
    about = "Find the arithmetic expression over the source numbers closest to a target value"
)]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// Source numbers; each may be used at most once
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Maximum distance from the target for an answer to count
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: i64,

    /// Number of expressions reduced together by one worker
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Number of worker threads (default: available CPUs)
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub numbers: Vec<i64>,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    validate_numbers(&args.numbers).context("Invalid source numbers")?;

    let mut solver = SolverConfig::default()
        .with_tolerance(args.tolerance)
        .with_chunk_size(args.chunk_size);
    if let Some(concurrency) = args.concurrency {
        solver = solver.with_concurrency(concurrency);
    }
    solver.validate().context("Invalid solver configuration")?;

    Ok(CliConfig {
        target: args.target,
        numbers: args.numbers,
        solver,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn join_numbers(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    println!(
        "Target: {}, source numbers: {}",
        config.target,
        join_numbers(&config.numbers)
    );
    info!(
        "Solving with tolerance {}, chunk size {}, concurrency {}",
        config.solver.tolerance, config.solver.chunk_size, config.solver.concurrency
    );

    let solver = ExpressionSolver::new(config.solver);
    let started = Instant::now();
    let answer = solver
        .solve(config.target, &config.numbers)
        .context("Search failed")?;
    let elapsed = started.elapsed().as_millis();

    match answer {
        Some(expr) => println!("{}", expr.to_string_with_value()),
        None => {
            warn!("No expression within tolerance of the target");
            println!("No solution found");
        }
    }
    println!("Completed in {}ms", elapsed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(target: i64, numbers: Vec<i64>) -> CliArgs {
        CliArgs {
            target,
            numbers,
            tolerance: DEFAULT_TOLERANCE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            concurrency: None,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let parsed = CliArgs::try_parse_from([
            "countdown",
            "834",
            "10",
            "9",
            "8",
            "--tolerance",
            "5",
            "--concurrency",
            "2",
        ]);
        assert!(parsed.is_ok());
        if let Ok(args) = parsed {
            assert_eq!(args.target, 834);
            assert_eq!(args.numbers, vec![10, 9, 8]);
            assert_eq!(args.tolerance, 5);
            assert_eq!(args.chunk_size, DEFAULT_CHUNK_SIZE);
            assert_eq!(args.concurrency, Some(2));
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_accepts_negative_source_numbers() {
        let parsed = CliArgs::try_parse_from(["countdown", "10", "5", "-3"]);
        assert!(parsed.is_ok());
        if let Ok(args) = parsed {
            assert_eq!(args.numbers, vec![5, -3]);
            let config = config_from_args(args);
            assert!(config.is_err());
            if let Err(err) = config {
                let message = format!("{:#}", err);
                assert!(
                    message.contains("Source numbers must be positive integers: -3"),
                    "unexpected error: {}",
                    message
                );
            }
        }
    }

    #[test]
    fn test_cli_requires_numbers() {
        assert!(CliArgs::try_parse_from(["countdown", "834"]).is_err());
    }

    #[test]
    fn test_config_from_args() {
        let config = config_from_args(args(378, vec![50, 7, 4]));
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.target, 378);
            assert_eq!(config.numbers, vec![50, 7, 4]);
            assert_eq!(config.solver.tolerance, DEFAULT_TOLERANCE);
            assert!(config.solver.concurrency >= 1);
        }
    }

    #[test]
    fn test_config_from_args_rejects_bad_input() {
        assert!(config_from_args(args(378, vec![50, 0])).is_err());

        let mut zero_chunks = args(378, vec![50, 7]);
        zero_chunks.chunk_size = 0;
        assert!(config_from_args(zero_chunks).is_err());

        let mut zero_workers = args(378, vec![50, 7]);
        zero_workers.concurrency = Some(0);
        assert!(config_from_args(zero_workers).is_err());
    }

    #[test]
    fn test_join_numbers() {
        assert_eq!(join_numbers(&[10, 9, 8]), "10,9,8");
        assert_eq!(join_numbers(&[7]), "7");
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
