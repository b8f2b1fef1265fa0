//! Command-line entry point: serves the HTTP API or runs a report over a
//! dataset file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use personnel_cost::api::{AppState, ReportRequest, create_router};
use personnel_cost::config::{ConfigLoader, EngineConfig};
use personnel_cost::export::{write_csv, write_xlsx};
use personnel_cost::reporting::{ReportGenerator, Table, Tabular};

/// `personnel-cost` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "personnel-cost",
    about = "Personnel cost calculation and reporting",
    version
)]
struct CliArgs {
    /// Engine configuration file (YAML). Defaults apply when omitted.
    #[arg(long, global = true, value_name = "path")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the JSON API.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000", value_name = "host:port")]
        addr: String,
    },
    /// Generate a report from a dataset file of employees and costs.
    Report {
        /// Which report to generate.
        #[arg(value_enum)]
        kind: ReportKind,
        /// Dataset JSON with `employees` and `costs` arrays.
        #[arg(long, value_name = "path")]
        input: PathBuf,
        /// Also write the report as delimited text.
        #[arg(long, value_name = "path")]
        csv: Option<PathBuf>,
        /// Also write the report as an XLSX workbook.
        #[arg(long, value_name = "path")]
        xlsx: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportKind {
    Department,
    Metrics,
    Trend,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let args = CliArgs::parse();
    let config = ConfigLoader::load_or_default(args.config.as_deref())
        .map_err(io::Error::other)?
        .into_config();

    match args.command {
        Command::Serve { addr } => serve(config, &addr).await,
        Command::Report {
            kind,
            input,
            csv,
            xlsx,
        } => {
            let outputs = Outputs {
                csv: csv.as_deref(),
                xlsx: xlsx.as_deref(),
            };
            report(&config, kind, &input, outputs)
        }
    }
}

async fn serve(config: EngineConfig, addr: &str) -> io::Result<()> {
    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "Listening");
    axum::serve(listener, router).await
}

struct Outputs<'a> {
    csv: Option<&'a Path>,
    xlsx: Option<&'a Path>,
}

fn report(
    config: &EngineConfig,
    kind: ReportKind,
    input: &Path,
    outputs: Outputs<'_>,
) -> io::Result<()> {
    let content = fs::read_to_string(input)?;
    let dataset: ReportRequest = serde_json::from_str(&content)
        .map_err(|e| io::Error::other(format!("invalid dataset {}: {e}", input.display())))?;

    info!(
        input = %input.display(),
        employees = dataset.employees.len(),
        costs = dataset.costs.len(),
        "Loaded dataset"
    );

    let generator = ReportGenerator::new();
    match kind {
        ReportKind::Department => emit(
            config,
            &generator.report_by_department(&dataset.employees, &dataset.costs),
            &outputs,
        ),
        ReportKind::Metrics => {
            let metrics = generator.key_metrics(&dataset.employees, &dataset.costs);
            print_json(&metrics)?;
            export(config, &Table::new(vec![metrics]), &outputs)
        }
        ReportKind::Trend => emit(config, &generator.trend_report(&dataset.costs), &outputs),
    }
}

fn emit<R: Tabular + Serialize>(
    config: &EngineConfig,
    table: &Table<R>,
    outputs: &Outputs<'_>,
) -> io::Result<()> {
    print_json(table)?;
    export(config, table, outputs)
}

fn export<R: Tabular>(
    config: &EngineConfig,
    table: &Table<R>,
    outputs: &Outputs<'_>,
) -> io::Result<()> {
    if let Some(path) = outputs.csv {
        write_csv(table, path, &config.export).map_err(io::Error::other)?;
        info!(path = %path.display(), rows = table.len(), "Wrote CSV report");
    }
    if let Some(path) = outputs.xlsx {
        write_xlsx(table, path, &config.export.sheet_name).map_err(io::Error::other)?;
        info!(path = %path.display(), rows = table.len(), "Wrote XLSX report");
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    println!("{rendered}");
    Ok(())
}
