//! Chart of accounts entries.

use serde::{Deserialize, Serialize};
use tally_shared::types::AccountNumber;

/// A ledger account from the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Account {
    /// Numeric account code, unique within a chart.
    pub account: AccountNumber,
    /// Descriptive label (e.g. "Cash").
    pub label: String,
}

impl Account {
    /// Creates a new account.
    #[must_use]
    pub fn new(account: impl Into<AccountNumber>, label: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            label: label.into(),
        }
    }
}

/// Returns the lowest and highest account numbers in the chart.
///
/// Returns `None` for an empty chart.
#[must_use]
pub fn account_number_range(accounts: &[Account]) -> Option<(AccountNumber, AccountNumber)> {
    let low = accounts.iter().map(|a| a.account).min()?;
    let high = accounts.iter().map(|a| a.account).max()?;
    Some((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number_range() {
        let accounts = vec![
            Account::new(4000, "Sales"),
            Account::new(1000, "Cash"),
            Account::new(2500, "Payables"),
        ];

        assert_eq!(
            account_number_range(&accounts),
            Some((AccountNumber(1000), AccountNumber(4000)))
        );
    }

    #[test]
    fn test_account_number_range_single() {
        let accounts = vec![Account::new(7, "Only")];
        assert_eq!(
            account_number_range(&accounts),
            Some((AccountNumber(7), AccountNumber(7)))
        );
    }

    #[test]
    fn test_account_number_range_empty() {
        assert_eq!(account_number_range(&[]), None);
    }
}
