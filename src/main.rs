//! Main entry point for the gradebook console
//!
//! Loads configuration, initializes logging and runs one interactive
//! session against an in-memory roster.

use anyhow::{anyhow, Result};
use clap::Parser;
use gradebook::config::{validate_config, AppConfig, OutputFormat};
use gradebook::console::{Prompter, Session};
use gradebook::{GradeScale, TieBreak};
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

/// Gradebook - record assessment scores, grade and rank a class
#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Interactive gradebook with per-student reports and class ranking",
    long_about = "Gradebook keeps an in-memory roster of students and their assessment \
                 scores for one session, computes totals, averages and letter grades, \
                 and prints a class summary ranked by average."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Assessments per student
    #[arg(
        short,
        long,
        value_name = "N",
        help = "Number of assessments per student (skips the startup prompt)"
    )]
    tests: Option<usize>,

    /// Roster capacity override
    #[arg(long, value_name = "N", help = "Maximum number of students")]
    capacity: Option<usize>,

    /// Grade table override
    #[arg(long, value_name = "SCALE", help = "Grade table to use (fine, coarse)")]
    grade_scale: Option<GradeScale>,

    /// Ranking tie-break override
    #[arg(
        long,
        value_name = "MODE",
        help = "How equal averages are ordered (insertion, selection)"
    )]
    tie_break: Option<TieBreak>,

    /// Print views as JSON
    #[arg(long, help = "Render reports as JSON instead of tables")]
    json: bool,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without starting a session")]
    dry_run: bool,
}

/// Initialize structured logging on stderr so stdout stays free for the session
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Display startup banner
fn display_startup_banner(config: &AppConfig) {
    println!("Student Gradebook ({})", config.service.name);
    println!("-----------------------------------------");
    info!("Log level: {}", config.service.log_level);
    info!("Capacity: {}", config.roster.capacity);
    info!(
        "Grade scale: {}, tie-break: {}",
        config.grading.scale, config.grading.tie_break
    );
    match config.roster.test_count {
        Some(count) => info!("Assessments per student: {}", count),
        None => info!(
            "Assessments per student: prompted (1-{})",
            config.roster.max_tests
        ),
    }
}

/// Load and merge configuration from file or environment, then CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(tests) = args.tests {
        config.roster.test_count = Some(tests);
    }

    if let Some(capacity) = args.capacity {
        config.roster.capacity = capacity;
    }

    if let Some(scale) = args.grade_scale {
        config.grading.scale = scale;
    }

    if let Some(tie_break) = args.tie_break {
        config.grading.tie_break = tie_break;
    }

    if args.json {
        config.output.format = OutputFormat::Json;
    }

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    validate_config(&config)?;
    Ok(config)
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        display_startup_banner(&config);
        println!("Configuration is valid.");
        return Ok(());
    }

    display_startup_banner(&config);

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());

    let mut session = match Session::from_config(&config, prompter)? {
        Some(session) => session,
        None => {
            info!("Input closed before the roster was created");
            return Ok(());
        }
    };

    if let Err(e) = session.run() {
        error!("Session failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
