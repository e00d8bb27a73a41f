//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::AccountNumber;

use super::filter::BalanceFilter;
use crate::ledger::PeriodRange;

/// Aggregated totals for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct BalanceRow {
    /// Account number.
    pub account: AccountNumber,
    /// Account label.
    pub description: String,
    /// Sum of debits in the period range.
    pub debit: Decimal,
    /// Sum of credits in the period range.
    pub credit: Decimal,
    /// Debit minus credit.
    pub balance: Decimal,
}

impl BalanceRow {
    /// Creates a row, deriving the balance from the totals.
    ///
    /// The balance saturates at the `Decimal` limits.
    #[must_use]
    pub fn new(
        account: AccountNumber,
        description: impl Into<String>,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        Self {
            account,
            description: description.into(),
            debit,
            credit,
            balance: debit.saturating_sub(credit),
        }
    }
}

/// Inclusive range of account numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRange {
    /// Lowest account number included.
    pub start: AccountNumber,
    /// Highest account number included.
    pub end: AccountNumber,
}

impl AccountRange {
    /// Creates a new range. An inverted range matches nothing.
    #[must_use]
    pub const fn new(start: AccountNumber, end: AccountNumber) -> Self {
        Self { start, end }
    }

    /// Returns true if `account` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, account: AccountNumber) -> bool {
        self.start <= account && account <= self.end
    }
}

/// Trial balance totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Report type identifier.
    pub report_type: String,
    /// Filter as requested by the user.
    pub filter: BalanceFilter,
    /// Effective account range, `None` for an empty chart.
    pub account_range: Option<AccountRange>,
    /// Effective period range, `None` when there are no journal entries.
    pub period_range: Option<PeriodRange>,
    /// One row per account in range, in chart order.
    pub rows: Vec<BalanceRow>,
    /// Totals.
    pub totals: TrialBalanceTotals,
}

impl TrialBalanceReport {
    /// Returns true if the report has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
