//! Command-line interface for altergen

use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process;

use altergen::{compare_tables, config, utils, Error, Result};

/// Generate ALTER TABLE statements by comparing two CREATE TABLE scripts
#[derive(Parser, Debug)]
#[command(name = "altergen", version, about)]
struct Cli {
    /// File containing the original CREATE TABLE script
    old: PathBuf,

    /// File containing the new CREATE TABLE script
    new: PathBuf,

    /// Write the generated statements to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format for the generated statements
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress the change summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Sql,
    Json,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => config::load_from_file(path.to_str().ok_or_else(|| {
            Error::ConfigError("Config path is not valid UTF-8".to_string())
        })?)?,
        None => config::Config::default(),
    };

    utils::init_logging(&config.logging)?;

    let old_sql = fs::read_to_string(&cli.old)?;
    let new_sql = fs::read_to_string(&cli.new)?;

    let comparison = compare_tables(&old_sql, &new_sql)?;

    let output_config = config.output.unwrap_or_default();
    let format = cli.format.unwrap_or(match output_config.format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Sql,
    });

    let rendered = match format {
        OutputFormat::Sql => comparison.formatted.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(&comparison.statements)?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            tracing::info!(path = %path.display(), "statements written");
        }
        None => println!("{}", rendered),
    }

    if !cli.quiet && output_config.summary {
        eprintln!("{}", comparison.summary);
    }

    Ok(())
}
