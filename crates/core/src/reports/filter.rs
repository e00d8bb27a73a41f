//! Account and period filtering for reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_shared::types::{AccountNumber, FilterInput};
use tracing::warn;

use super::types::AccountRange;
use crate::ledger::{Account, JournalEntry, PeriodRange, account_number_range, maximum_period_range};

/// Typed filter for trial balance queries.
///
/// An absent bound falls back to the extreme value present in the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceFilter {
    /// Lowest account number to include.
    pub start_account: Option<AccountNumber>,
    /// Highest account number to include.
    pub end_account: Option<AccountNumber>,
    /// Earliest period to include.
    pub start_period: Option<NaiveDate>,
    /// Latest period to include.
    pub end_period: Option<NaiveDate>,
}

impl BalanceFilter {
    /// Creates a new empty filter (matches everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lowest account number.
    #[must_use]
    pub fn start_account(mut self, account: impl Into<AccountNumber>) -> Self {
        self.start_account = Some(account.into());
        self
    }

    /// Sets the highest account number.
    #[must_use]
    pub fn end_account(mut self, account: impl Into<AccountNumber>) -> Self {
        self.end_account = Some(account.into());
        self
    }

    /// Sets the earliest period.
    #[must_use]
    pub const fn start_period(mut self, period: NaiveDate) -> Self {
        self.start_period = Some(period);
        self
    }

    /// Sets the latest period.
    #[must_use]
    pub const fn end_period(mut self, period: NaiveDate) -> Self {
        self.end_period = Some(period);
        self
    }

    /// Returns true if the filter has no bounds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builds a filter from raw user input.
    ///
    /// Never fails: blank bounds are absent, and bounds that do not parse are
    /// logged and treated as absent. Periods are parsed with `date_format`.
    #[must_use]
    pub fn from_input(input: &FilterInput, date_format: &str) -> Self {
        Self {
            start_account: parse_account("start_account", input.start_account.as_deref()),
            end_account: parse_account("end_account", input.end_account.as_deref()),
            start_period: parse_period("start_period", input.start_period.as_deref(), date_format),
            end_period: parse_period("end_period", input.end_period.as_deref(), date_format),
        }
    }

    /// Resolves the effective account range against the chart.
    ///
    /// Returns `None` when the chart is empty.
    #[must_use]
    pub fn resolve_account_range(&self, accounts: &[Account]) -> Option<AccountRange> {
        let (lowest, highest) = account_number_range(accounts)?;
        Some(AccountRange::new(
            self.start_account.unwrap_or(lowest),
            self.end_account.unwrap_or(highest),
        ))
    }

    /// Resolves the effective period range against the journal.
    ///
    /// Returns `None` when there are no journal entries.
    #[must_use]
    pub fn resolve_period_range(&self, entries: &[JournalEntry]) -> Option<PeriodRange> {
        let data = maximum_period_range(entries)?;
        Some(PeriodRange::new(
            self.start_period.unwrap_or(data.earliest),
            self.end_period.unwrap_or(data.latest),
        ))
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_account(field: &'static str, raw: Option<&str>) -> Option<AccountNumber> {
    let value = non_blank(raw)?;
    match value.parse() {
        Ok(account) => Some(account),
        Err(e) => {
            warn!(field, value, error = %e, "Ignoring invalid account bound");
            None
        }
    }
}

fn parse_period(field: &'static str, raw: Option<&str>, date_format: &str) -> Option<NaiveDate> {
    let value = non_blank(raw)?;
    match NaiveDate::parse_from_str(value, date_format) {
        Ok(period) => Some(period),
        Err(e) => {
            warn!(field, value, date_format, error = %e, "Ignoring invalid period bound");
            None
        }
    }
}
