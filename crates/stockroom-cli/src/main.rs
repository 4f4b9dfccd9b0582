// Rust guideline compliant 2026-10-15

//! Stockroom CLI Application
//!
//! Interactive item manager: add, list and delete items with immediate
//! validation feedback.

use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use stockroom_cli::{create_formatter, init, is_interactive, logging, should_use_color, Shell};
use stockroom_core::{config::DEFAULT_CONFIG_FILE, Config, Session};

#[derive(Parser, Debug)]
#[command(
    name = "stockroom",
    version,
    about = "Stockroom: interactive item manager",
    long_about = "Stockroom keeps an in-memory list of items (name, category, price) and validates every addition. Commands are read one per line from standard input.",
    after_help = "Examples:\n  stockroom\n  stockroom init\n  stockroom --format json < script.txt\n  echo 'add Pen, Stationary, 1.50' | stockroom --format plain\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long)]
    json: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Append JSON logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if let Some(Commands::Init { force }) = cli.command {
        if init::execute(&config_path, force)? {
            println!("✓ Wrote default config to {}", config_path.display());
        } else {
            println!(
                "Config already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }
        return Ok(());
    }

    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let _guard = logging::init_tracing(level, cli.log_file.as_deref())?;

    let format = match cli.format {
        Some(OutputFormat::Json) => stockroom_core::OutputFormat::Json,
        Some(OutputFormat::Table) => stockroom_core::OutputFormat::Table,
        Some(OutputFormat::Plain) => stockroom_core::OutputFormat::Plain,
        None if cli.json => stockroom_core::OutputFormat::Json,
        None => config.output_format,
    };
    let use_color = !cli.no_color && config.color && should_use_color();
    let formatter = create_formatter(format, use_color);

    tracing::info!(
        categories = config.categories.len(),
        ?format,
        "starting session"
    );

    let session = Session::new(config.categories.clone());
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell =
        Shell::new(session, formatter, stdin.lock(), stdout.lock()).interactive(is_interactive());
    shell.run()?;

    Ok(())
}
