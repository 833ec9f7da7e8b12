use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use payroll_cli::{OutputFormat, logging, parse_salary, prompt_salary, render};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Monthly payroll deduction calculator (SSS, PhilHealth, Pag-IBIG and
/// withholding tax, 2022 rates).
///
/// Prompts for the gross monthly salary when it is not given as an argument.
#[derive(Debug, Parser)]
#[command(name = "payroll")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Gross monthly salary in PHP (e.g. `35000` or `25,000.50`).
    salary: Option<String>,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level or EnvFilter directive. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let raw_salary = match cli.salary {
        Some(salary) => salary,
        None => prompt_salary(io::stdin().lock(), io::stdout().lock())
            .context("failed to read salary from stdin")?,
    };

    let salary = parse_salary(&raw_salary)?;
    debug!(%salary, "computing payroll");

    let result = payroll_core::compute(salary);
    info!(net_salary = %result.net_salary, "payroll computed");

    let report = render(&result, cli.format).context("failed to render report")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .context("failed to write report")?;
    stdout.flush().context("failed to write report")?;

    Ok(())
}
