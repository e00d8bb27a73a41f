//! Report generation service.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tally_shared::types::AccountNumber;
use tracing::debug;

use super::filter::BalanceFilter;
use super::types::{BalanceRow, TrialBalanceReport, TrialBalanceTotals};
use crate::ledger::{Account, JournalEntry};

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Computes a trial balance from the chart of accounts and the journal.
    ///
    /// Every account inside the effective account range gets exactly one row,
    /// in chart order, even when no journal entry matches it. Entries outside
    /// the effective period range, or posted to accounts missing from the
    /// chart, are ignored. Unset filter bounds fall back to the extremes of
    /// the data. Sums saturate at the `Decimal` limits instead of overflowing.
    #[must_use]
    pub fn compute_balance(
        accounts: &[Account],
        entries: &[JournalEntry],
        filter: &BalanceFilter,
    ) -> TrialBalanceReport {
        let account_range = filter.resolve_account_range(accounts);
        let period_range = filter.resolve_period_range(entries);

        let mut sums: HashMap<AccountNumber, (Decimal, Decimal)> = HashMap::new();
        if let Some(period_range) = period_range.filter(|r| !r.is_empty()) {
            for entry in entries.iter().filter(|e| period_range.contains(e.period)) {
                let (debit, credit) = sums.entry(entry.account).or_default();
                *debit = debit.saturating_add(entry.debit);
                *credit = credit.saturating_add(entry.credit);
            }
        }

        let rows: Vec<BalanceRow> = account_range
            .map(|range| {
                accounts
                    .iter()
                    .filter(|a| range.contains(a.account))
                    .map(|a| {
                        let (debit, credit) = sums.get(&a.account).copied().unwrap_or_default();
                        BalanceRow::new(a.account, a.label.clone(), debit, credit)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let totals = Self::generate_totals(&rows);

        debug!(
            rows = rows.len(),
            account_range = ?account_range,
            period_range = ?period_range,
            total_debit = %totals.total_debit,
            total_credit = %totals.total_credit,
            "Computed trial balance"
        );

        TrialBalanceReport {
            report_type: "trial_balance".to_string(),
            filter: *filter,
            account_range,
            period_range,
            rows,
            totals,
        }
    }

    /// Sums the debit and credit columns of a set of rows.
    ///
    /// The trial balance verifies that total debits equal total credits.
    #[must_use]
    pub fn generate_totals(rows: &[BalanceRow]) -> TrialBalanceTotals {
        let total_debit = rows
            .iter()
            .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.debit));
        let total_credit = rows
            .iter()
            .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.credit));

        TrialBalanceTotals {
            total_debit,
            total_credit,
            is_balanced: total_debit == total_credit,
        }
    }
}
