//! Journal entry domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::AccountNumber;

/// A dated debit/credit posting against one account.
///
/// Amounts are non-negative; a single entry may carry both a debit and a credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct JournalEntry {
    /// The account affected by this entry.
    pub account: AccountNumber,
    /// The period (date) the entry is booked in.
    pub period: NaiveDate,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
}

impl JournalEntry {
    /// Creates a new journal entry.
    #[must_use]
    pub fn new(
        account: impl Into<AccountNumber>,
        period: NaiveDate,
        debit: Decimal,
        credit: Decimal,
    ) -> Self {
        Self {
            account: account.into(),
            period,
            debit,
            credit,
        }
    }
}

