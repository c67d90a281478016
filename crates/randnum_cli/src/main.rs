//! randnum CLI
//!
//! Operational entry point: parses flags, builds the configuration,
//! initialises tracing and dispatches to a command.

use clap::{Args as ClapArgs, Parser, Subcommand};
use randnum_cli::commands;
use randnum_cli::config::{build_config, CliArgs as ConfigCliArgs, GeneratorConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Uniform random number generator
#[derive(Parser, Debug)]
#[command(name = "randnum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw uniform random numbers and print them
    Generate(GeneratorArgs),

    /// Validate and print the resolved configuration
    Check(GeneratorArgs),
}

#[derive(ClapArgs, Debug)]
struct GeneratorArgs {
    /// Number of values to draw
    #[arg(short, allow_negative_numbers = true)]
    n: Option<String>,

    /// Lower bound of the interval
    #[arg(long, allow_negative_numbers = true)]
    min: Option<String>,

    /// Upper bound of the interval
    #[arg(long, allow_negative_numbers = true)]
    max: Option<String>,

    /// Seed for a reproducible stream
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format (table, json, csv)
    #[arg(short, long)]
    format: Option<String>,

    /// Append count, min, max and mean of the drawn values
    #[arg(long)]
    summary: bool,
}

impl Cli {
    fn config_args(&self) -> ConfigCliArgs {
        let args = match &self.command {
            Commands::Generate(args) | Commands::Check(args) => args,
        };
        ConfigCliArgs {
            config_file: self.config.clone(),
            n: args.n.clone(),
            min: args.min.clone(),
            max: args.max.clone(),
            seed: args.seed,
            format: args.format.clone(),
            summary: args.summary,
            log_level: self.log_level.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn dispatch(command: &Commands, config: &GeneratorConfig) -> randnum_cli::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Generate(_) => commands::generate::run(config, &mut out)?,
        Commands::Check(_) => commands::check::run(config, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("randnum v{}", randnum_cli::VERSION);
    tracing::debug!(?config, "Configuration loaded");

    if let Err(err) = dispatch(&cli.command, &config) {
        tracing::error!(error = %err, "Command failed");
        return Err(err.into());
    }

    Ok(())
}
