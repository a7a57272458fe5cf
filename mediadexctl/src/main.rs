//! `mediadexctl`: validate or import JSON files of catalog entities.

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mediadex_config::{Config, ConfigLoader};
use mediadex_model::{EntityKind, Severity, Status};
use mediadexctl::{
    commands::{import_file, validate_file},
    report::combined_status,
};

#[derive(Parser)]
#[command(
    name = "mediadexctl",
    about = "Validate and import mediadex catalog files"
)]
struct Cli {
    /// TOML file with validation rules
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level when RUST_LOG is unset
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate every entity in a JSON array and print a report
    Validate {
        #[arg(long, value_enum)]
        kind: KindArg,
        file: PathBuf,
    },
    /// Add every entity of a JSON array to an in-memory catalog
    Import {
        #[arg(long, value_enum)]
        kind: KindArg,
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Movie,
    Book,
    Game,
}

impl From<KindArg> for EntityKind {
    fn from(val: KindArg) -> Self {
        match val {
            KindArg::Movie => EntityKind::Movie,
            KindArg::Book => EntityKind::Book,
            KindArg::Game => EntityKind::Game,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(cli.config)?;

    let status = match cli.command {
        Command::Validate { kind, file } => {
            let reports = validate_file(kind.into(), &file, &config)
                .with_context(|| format!("validating {}", file.display()))?;
            print_json(&reports)?;
            combined_status(reports.iter().map(|report| report.status))
        }
        Command::Import { kind, file } => {
            let report = import_file(kind.into(), &file, &config)
                .await
                .with_context(|| format!("importing {}", file.display()))?;
            print_json(&report)?;
            report.status
        }
    };

    Ok(if status == Status::Error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = path {
        loader = loader.with_config_path(path);
    }
    let load = loader.load().context("loading validation rules")?;

    for event in load.warnings.events() {
        match event.severity() {
            Severity::Info => debug!(key = event.key(), "{}", event.message()),
            Severity::Warn | Severity::Error => {
                warn!(key = event.key(), "{}", event.message())
            }
        }
    }
    info!(
        min_year = load.config.movie.min_year,
        max_year = load.config.movie.max_year,
        "validation rules loaded"
    );
    Ok(load.config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .context("rendering JSON report")?;
    println!("{rendered}");
    Ok(())
}
