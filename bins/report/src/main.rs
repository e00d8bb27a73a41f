//! Tally trial balance reporter.
//!
//! Reads the chart of accounts and the journal from CSV files, computes the
//! trial balance for the configured filter, and writes it to stdout.
//!
//! Usage: `TALLY__OUTPUT__FORMAT=CSV cargo run --bin tally`

mod loader;

use std::io::Write;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::ledger::{Account, JournalEntry};
use tally_core::reports::{BalanceFilter, ReportFormat, ReportService, render};
use tally_shared::{AppConfig, AppResult};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally_core=info,tally_report=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    run(&config, std::io::stdout().lock())
}

/// Computes the trial balance described by `config` and writes it to `out`.
///
/// A missing or blank output format renders nothing and reads no input.
fn run(config: &AppConfig, out: impl Write) -> anyhow::Result<()> {
    let Some(format_name) = config
        .output
        .format
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
    else {
        info!("No output format selected, nothing to render");
        return Ok(());
    };
    let format: ReportFormat = format_name.parse()?;

    let date_format = &config.output.date_format;
    let (accounts, entries) = match load_ledger(config) {
        Ok(ledger) => ledger,
        Err(e) => {
            error!(code = e.error_code(), error = %e, "Failed to load ledger data");
            return Err(e.into());
        }
    };
    info!(
        accounts = accounts.len(),
        entries = entries.len(),
        "Loaded ledger data"
    );

    let filter = BalanceFilter::from_input(&config.filter, date_format);
    let report = ReportService::compute_balance(&accounts, &entries, &filter);

    render::write_report(&report, format, date_format, out)?;

    info!(%format, rows = report.rows.len(), "Report written");
    Ok(())
}

/// Reads the chart of accounts and the journal named in the configuration.
fn load_ledger(config: &AppConfig) -> AppResult<(Vec<Account>, Vec<JournalEntry>)> {
    let accounts = loader::load_accounts(&config.input.accounts_path)?;
    let entries = loader::load_journal(&config.input.journal_path, &config.output.date_format)?;
    Ok((accounts, entries))
}
