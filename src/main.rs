mod commands;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use holical_core::HolicalConfig;
use tracing_subscriber::EnvFilter;

use commands::Target;

#[derive(Parser)]
#[command(name = "holical")]
#[command(about = "Render a month calendar spreadsheet with public holidays highlighted")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Year to render (defaults to the current year)
    #[arg(short, long, global = true)]
    year: Option<i32>,

    /// Month to render, 1-12 (defaults to the current month)
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Country code, e.g. "US" or "DE" (defaults to country_code from config)
    #[arg(short, long, global = true)]
    country: Option<String>,

    /// Directory to write the spreadsheet to (defaults to output_dir from config)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Use this config file instead of ~/.config/holical/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write calendar_<year>_<month>.xlsx (the default)
    Render,
    /// Print the month's holidays
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the config file location and effective settings
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Render) {
        Commands::Render => {
            let target = resolve_target(cli.year, cli.month, &config);
            let output_dir = cli.output.clone().unwrap_or_else(|| config.output_path());
            commands::render::run(&config, target, &output_dir).await
        }
        Commands::List { json } => {
            let target = resolve_target(cli.year, cli.month, &config);
            commands::list::run(&config, target, json).await
        }
        Commands::Config => commands::config::run(&config, cli.config.as_deref()),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<HolicalConfig> {
    let mut config = match &cli.config {
        Some(path) => HolicalConfig::load_from(path)?,
        None => HolicalConfig::load()?,
    };

    if let Some(country) = &cli.country {
        config.country_code = country.clone();
    }

    Ok(config.normalized()?)
}

fn resolve_target(year: Option<i32>, month: Option<u32>, config: &HolicalConfig) -> Target {
    let today = chrono::Local::now().date_naive();

    Target {
        year: year.unwrap_or_else(|| today.year()),
        month: month.unwrap_or_else(|| today.month()),
        country_code: config.country_code.clone(),
    }
}
