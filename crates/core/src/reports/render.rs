//! Report rendering.
//!
//! Renders a computed [`TrialBalanceReport`] as a CSV export, an HTML table,
//! or JSON, preceded by a short plain-text summary.

use std::fmt::Write as _;
use std::io::Write;

use chrono::NaiveDate;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use tally_shared::types::AccountNumber;

use super::error::ReportError;
use super::types::TrialBalanceReport;

/// Column headers shared by the CSV and HTML outputs.
pub const COLUMNS: [&str; 5] = ["ACCOUNT", "DESCRIPTION", "DEBIT", "CREDIT", "BALANCE"];

/// Placeholder printed for an unset filter bound.
const UNBOUNDED: &str = "*";

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportFormat {
    /// Delimiter-separated text export.
    Csv,
    /// HTML table.
    Html,
    /// Pretty-printed JSON document.
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Html => write!(f, "HTML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CSV" => Ok(Self::Csv),
            "HTML" => Ok(Self::Html),
            "JSON" => Ok(Self::Json),
            _ => Err(ReportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Writes the report rows as CSV, header first.
///
/// The header is written even when the report has no rows.
pub fn write_csv<W: Write>(report: &TrialBalanceReport, writer: W) -> Result<(), ReportError> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv.write_record(COLUMNS)?;
    for row in &report.rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Renders the report rows as an HTML table.
#[must_use]
pub fn render_html(report: &TrialBalanceReport) -> String {
    let mut html = String::from("<table class=\"table\">\n  <thead>\n    <tr>\n");
    for column in COLUMNS {
        html.push_str(&format!("      <th>{column}</th>\n"));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for row in &report.rows {
        html.push_str("    <tr>\n");
        html.push_str(&format!("      <th scope=\"row\">{}</th>\n", row.account));
        html.push_str(&format!("      <td>{}</td>\n", escape_html(&row.description)));
        html.push_str(&format!("      <td>{}</td>\n", row.debit));
        html.push_str(&format!("      <td>{}</td>\n", row.credit));
        html.push_str(&format!("      <td>{}</td>\n", row.balance));
        html.push_str("    </tr>\n");
    }

    html.push_str("  </tbody>\n</table>\n");
    html
}

/// Writes the whole report as pretty-printed JSON.
pub fn write_json<W: Write>(report: &TrialBalanceReport, mut writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Renders the totals and the requested filter as two lines of text.
///
/// Unset bounds print as `*`.
#[must_use]
pub fn render_summary(report: &TrialBalanceReport, date_format: &str) -> String {
    let filter = &report.filter;
    let account = |bound: Option<AccountNumber>| {
        bound.map_or_else(|| UNBOUNDED.to_string(), |a| a.to_string())
    };
    let period = |bound: Option<NaiveDate>| {
        bound.map_or_else(|| UNBOUNDED.to_string(), |p| format_period(p, date_format))
    };

    format!(
        "Total Debit: {} Total Credit: {}\nBalance from account {} to {} from period {} to {}\n",
        report.totals.total_debit,
        report.totals.total_credit,
        account(filter.start_account),
        account(filter.end_account),
        period(filter.start_period),
        period(filter.end_period),
    )
}

/// Writes the summary followed by the report body in `format`.
pub fn write_report<W: Write>(
    report: &TrialBalanceReport,
    format: ReportFormat,
    date_format: &str,
    mut writer: W,
) -> Result<(), ReportError> {
    writer.write_all(render_summary(report, date_format).as_bytes())?;
    match format {
        ReportFormat::Csv => write_csv(report, &mut writer),
        ReportFormat::Html => Ok(writer.write_all(render_html(report).as_bytes())?),
        ReportFormat::Json => write_json(report, &mut writer),
    }
}

/// Formats a period with a user-supplied `chrono` format.
///
/// Falls back to ISO 8601 when the format string is invalid.
fn format_period(period: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", period.format(date_format)).is_err() {
        return period.to_string();
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
